use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::commands::common::{new_id, now_utc, resolve_today, rfc3339_timestamp};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{BudgetListData, BudgetSetData, BudgetStatusRow, DeleteData};
use crate::engine::aggregate::expense_by_category;
use crate::model::{Budget, ExpenseCategory, Transaction, TransactionKind};
use crate::store::{Dataset, Store};
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct BudgetSetOptions<'a> {
    pub category: String,
    pub amount: f64,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct BudgetListOptions<'a> {
    pub today: Option<NaiveDate>,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct BudgetDeleteOptions<'a> {
    pub id: String,
    pub home_override: Option<&'a Path>,
}

pub fn set(category: &str, amount: f64) -> ClientResult<SuccessEnvelope> {
    set_with_options(BudgetSetOptions {
        category: category.to_string(),
        amount,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn set_with_options(options: BudgetSetOptions<'_>) -> ClientResult<SuccessEnvelope> {
    if !options.amount.is_finite() || options.amount <= 0.0 {
        return Err(ClientError::invalid_argument_for_command(
            "`amount` must be a positive number.",
            Some("budget set"),
        ));
    }
    let Some(category) = ExpenseCategory::parse(&options.category) else {
        return Err(ClientError::unknown_category(
            &options.category,
            TransactionKind::Expense,
            &ExpenseCategory::labels(),
        ));
    };

    let store = Store::open(options.home_override)?;
    let mut budgets: Vec<Budget> = store.load(Dataset::Budgets);

    // One budget per category; duplicates are rejected rather than merged.
    if budgets.iter().any(|budget| budget.category == category) {
        return Err(ClientError::duplicate_budget(category.label()));
    }

    let row = Budget {
        id: new_id("bud"),
        category,
        amount: options.amount,
        created_at: rfc3339_timestamp(now_utc()),
    };
    budgets.push(row.clone());
    store.save(Dataset::Budgets, &budgets)?;

    success("budget set", BudgetSetData { row })
}

pub fn list() -> ClientResult<SuccessEnvelope> {
    list_with_options(BudgetListOptions {
        today: None,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn list_with_options(options: BudgetListOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let today = resolve_today(options.today);
    let month = today.month0();

    let store = Store::open(options.home_override)?;
    let budgets: Vec<Budget> = store.load(Dataset::Budgets);
    let transactions: Vec<Transaction> = store.load(Dataset::Transactions);
    let spent_by_category = expense_by_category(&transactions, Some(month));

    let rows = budgets
        .iter()
        .map(|budget| {
            let spent = spent_by_category
                .get(&budget.category)
                .copied()
                .unwrap_or(0.0);
            let percentage = if budget.amount > 0.0 {
                spent / budget.amount * 100.0
            } else {
                100.0
            };
            BudgetStatusRow {
                id: budget.id.clone(),
                category: budget.category.label(),
                amount: budget.amount,
                created_at: budget.created_at.clone(),
                spent,
                remaining: budget.amount - spent,
                percentage,
                status: if percentage >= 100.0 {
                    "exceeded"
                } else if percentage >= 80.0 {
                    "warning"
                } else {
                    "good"
                },
            }
        })
        .collect();

    success("budget list", BudgetListData { month, rows })
}

pub fn delete(id: &str) -> ClientResult<SuccessEnvelope> {
    delete_with_options(BudgetDeleteOptions {
        id: id.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn delete_with_options(options: BudgetDeleteOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let store = Store::open(options.home_override)?;
    let mut budgets: Vec<Budget> = store.load(Dataset::Budgets);

    let Some(position) = budgets.iter().position(|budget| budget.id == options.id) else {
        return Err(ClientError::record_not_found("budget", &options.id));
    };
    budgets.remove(position);
    store.save(Dataset::Budgets, &budgets)?;

    success(
        "budget delete",
        DeleteData {
            dataset: "budget",
            id: options.id.clone(),
            message: format!("Budget `{}` deleted.", options.id),
        },
    )
}
