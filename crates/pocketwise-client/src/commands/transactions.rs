use std::path::Path;

use chrono::Datelike;
use serde_json::json;

use crate::commands::common::{new_id, now_utc, rfc3339_timestamp};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{
    CategorizeData, DeleteData, SuggestionData, TotalsData, TransactionAddData,
    TransactionListData,
};
use crate::engine::aggregate::{month_totals, sum_of_kind};
use crate::engine::categorize::{categorize, suggest_categories};
use crate::model::{
    Category, ExpenseCategory, IncomeCategory, Transaction, TransactionKind,
};
use crate::store::{Dataset, Store};
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct TxnAddOptions<'a> {
    pub amount: f64,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub description: String,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct TxnListOptions<'a> {
    pub month: Option<u32>,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct TxnDeleteOptions<'a> {
    pub id: String,
    pub home_override: Option<&'a Path>,
}

pub fn add(
    amount: f64,
    kind: TransactionKind,
    category: Option<&str>,
    description: &str,
) -> ClientResult<SuccessEnvelope> {
    add_with_options(TxnAddOptions {
        amount,
        kind: Some(kind),
        category: category.map(std::string::ToString::to_string),
        description: description.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn add_with_options(options: TxnAddOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let kind = options.kind.unwrap_or(TransactionKind::Expense);
    if !options.amount.is_finite() || options.amount <= 0.0 {
        return Err(ClientError::invalid_argument_for_command(
            "`amount` must be a positive number.",
            Some("txn add"),
        ));
    }
    let description = options.description.trim().to_string();
    if description.is_empty() {
        return Err(ClientError::invalid_argument_for_command(
            "`description` must not be empty.",
            Some("txn add"),
        ));
    }

    let (category, auto_categorized, confidence) = match options.category.as_deref() {
        Some(value) => {
            let Some(parsed) = Category::parse(value, kind) else {
                return Err(unknown_category_error(value, kind));
            };
            (parsed, false, None)
        }
        None => {
            let matched = categorize(&description, kind);
            match matched.category {
                Some(found) => (found, true, Some(matched.confidence)),
                None => {
                    let suggestions: Vec<_> = suggest_categories(&description, kind)
                        .into_iter()
                        .map(|suggestion| {
                            json!({
                                "category": suggestion.category.label(),
                                "confidence": suggestion.confidence,
                            })
                        })
                        .collect();
                    return Err(ClientError::uncategorized_description(
                        &description,
                        json!(suggestions),
                    ));
                }
            }
        }
    };

    let store = Store::open(options.home_override)?;
    let mut transactions: Vec<Transaction> = store.load(Dataset::Transactions);

    // `date` and `month` come from the same instant; the month index is
    // the bucketing key from here on.
    let now = now_utc();
    let row = Transaction {
        id: new_id("txn"),
        amount: options.amount,
        kind,
        category,
        description,
        date: rfc3339_timestamp(now),
        month: now.month0(),
    };
    transactions.push(row.clone());
    store.save(Dataset::Transactions, &transactions)?;

    success(
        "txn add",
        TransactionAddData {
            row,
            auto_categorized,
            confidence,
        },
    )
}

pub fn list(month: Option<u32>) -> ClientResult<SuccessEnvelope> {
    list_with_options(TxnListOptions {
        month,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn list_with_options(options: TxnListOptions<'_>) -> ClientResult<SuccessEnvelope> {
    if let Some(month) = options.month
        && month > 11
    {
        return Err(ClientError::invalid_argument_for_command(
            "`month` must be between 1 and 12.",
            Some("txn list"),
        ));
    }

    let store = Store::open(options.home_override)?;
    let transactions: Vec<Transaction> = store.load(Dataset::Transactions);

    let mut rows: Vec<Transaction> = match options.month {
        Some(month) => transactions
            .iter()
            .filter(|transaction| transaction.month == month)
            .cloned()
            .collect(),
        None => transactions.clone(),
    };
    rows.sort_by(|left, right| left.date.cmp(&right.date).then_with(|| left.id.cmp(&right.id)));

    let totals = match options.month {
        Some(month) => {
            let totals = month_totals(&transactions, month);
            TotalsData {
                income: totals.income,
                expense: totals.expense,
                balance: totals.balance,
            }
        }
        None => {
            let income = sum_of_kind(&transactions, TransactionKind::Income);
            let expense = sum_of_kind(&transactions, TransactionKind::Expense);
            TotalsData {
                income,
                expense,
                balance: income - expense,
            }
        }
    };

    success(
        "txn list",
        TransactionListData {
            month: options.month,
            rows,
            totals,
        },
    )
}

pub fn delete(id: &str) -> ClientResult<SuccessEnvelope> {
    delete_with_options(TxnDeleteOptions {
        id: id.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn delete_with_options(options: TxnDeleteOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let store = Store::open(options.home_override)?;
    let mut transactions: Vec<Transaction> = store.load(Dataset::Transactions);

    let Some(position) = transactions
        .iter()
        .position(|transaction| transaction.id == options.id)
    else {
        return Err(ClientError::record_not_found("transaction", &options.id));
    };
    transactions.remove(position);
    store.save(Dataset::Transactions, &transactions)?;

    success(
        "txn delete",
        DeleteData {
            dataset: "transaction",
            id: options.id.clone(),
            message: format!("Transaction `{}` deleted.", options.id),
        },
    )
}

/// Dry-run categorizer probe: no store access, no writes.
pub fn categorize_probe(description: &str, kind: TransactionKind) -> ClientResult<SuccessEnvelope> {
    let matched = categorize(description, kind);
    let suggestions: Vec<SuggestionData> = suggest_categories(description, kind)
        .into_iter()
        .map(|suggestion| SuggestionData {
            category: suggestion.category.label(),
            confidence: suggestion.confidence,
        })
        .collect();

    success(
        "txn categorize",
        CategorizeData {
            description: description.to_string(),
            kind: kind.as_str(),
            category: matched.category.map(Category::label),
            confidence: matched.confidence,
            matched_keywords: matched.matched_keywords,
            suggestions,
        },
    )
}

fn unknown_category_error(value: &str, kind: TransactionKind) -> ClientError {
    match kind {
        TransactionKind::Income => {
            ClientError::unknown_category(value, kind, &IncomeCategory::labels())
        }
        TransactionKind::Expense => {
            ClientError::unknown_category(value, kind, &ExpenseCategory::labels())
        }
    }
}
