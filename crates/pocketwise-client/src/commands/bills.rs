use std::path::Path;

use chrono::{Duration, NaiveDate};

use crate::commands::common::{new_id, now_utc, resolve_today, rfc3339_timestamp};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{BillAddData, BillListData, BillPayData, DeleteData};
use crate::engine::date::parse_iso_date;
use crate::model::{Bill, BillStatus, ExpenseCategory, TransactionKind};
use crate::store::{Dataset, Store};
use crate::{ClientError, ClientResult};

#[derive(Debug, Default)]
pub struct BillAddOptions<'a> {
    pub name: String,
    pub amount: f64,
    pub due_date: String,
    pub category: String,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct BillListOptions<'a> {
    pub due_within_days: Option<i64>,
    pub today: Option<NaiveDate>,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct BillPayOptions<'a> {
    pub id: String,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct BillDeleteOptions<'a> {
    pub id: String,
    pub home_override: Option<&'a Path>,
}

pub fn add(name: &str, amount: f64, due_date: &str, category: &str) -> ClientResult<SuccessEnvelope> {
    add_with_options(BillAddOptions {
        name: name.to_string(),
        amount,
        due_date: due_date.to_string(),
        category: category.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn add_with_options(options: BillAddOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let name = options.name.trim().to_string();
    if name.is_empty() {
        return Err(ClientError::invalid_argument_for_command(
            "`name` must not be empty.",
            Some("bill add"),
        ));
    }
    if !options.amount.is_finite() || options.amount <= 0.0 {
        return Err(ClientError::invalid_argument_for_command(
            "`amount` must be a positive number.",
            Some("bill add"),
        ));
    }
    if parse_iso_date(&options.due_date).is_none() {
        return Err(ClientError::invalid_argument_for_command(
            "`due` must use YYYY-MM-DD format with a real calendar date.",
            Some("bill add"),
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
    let mut bills: Vec<Bill> = store.load(Dataset::Bills);

    let row = Bill {
        id: new_id("bill"),
        name,
        amount: options.amount,
        due_date: options.due_date,
        category,
        status: BillStatus::Pending,
        created_at: rfc3339_timestamp(now_utc()),
        paid_at: None,
    };
    bills.push(row.clone());
    store.save(Dataset::Bills, &bills)?;

    success("bill add", BillAddData { row })
}

pub fn list(due_within_days: Option<i64>) -> ClientResult<SuccessEnvelope> {
    list_with_options(BillListOptions {
        due_within_days,
        today: None,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn list_with_options(options: BillListOptions<'_>) -> ClientResult<SuccessEnvelope> {
    if let Some(days) = options.due_within_days
        && days < 0
    {
        return Err(ClientError::invalid_argument_for_command(
            "`due-within` must not be negative.",
            Some("bill list"),
        ));
    }

    let today = resolve_today(options.today);
    let store = Store::open(options.home_override)?;
    let bills: Vec<Bill> = store.load(Dataset::Bills);

    let pending_count = bills
        .iter()
        .filter(|bill| bill.status == BillStatus::Pending)
        .count();
    let overdue_count = bills
        .iter()
        .filter(|bill| {
            bill.status == BillStatus::Pending
                && parse_iso_date(&bill.due_date).is_some_and(|due| due < today)
        })
        .count();

    let mut rows: Vec<Bill> = match options.due_within_days {
        Some(days) => {
            let horizon = today + Duration::days(days);
            bills
                .into_iter()
                .filter(|bill| {
                    bill.status == BillStatus::Pending
                        && parse_iso_date(&bill.due_date)
                            .is_some_and(|due| due >= today && due <= horizon)
                })
                .collect()
        }
        None => bills,
    };
    rows.sort_by(|left, right| {
        left.due_date
            .cmp(&right.due_date)
            .then_with(|| left.id.cmp(&right.id))
    });

    success(
        "bill list",
        BillListData {
            due_within_days: options.due_within_days,
            rows,
            pending_count,
            overdue_count,
        },
    )
}

pub fn pay(id: &str) -> ClientResult<SuccessEnvelope> {
    pay_with_options(BillPayOptions {
        id: id.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn pay_with_options(options: BillPayOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let store = Store::open(options.home_override)?;
    let mut bills: Vec<Bill> = store.load(Dataset::Bills);

    let Some(bill) = bills.iter_mut().find(|bill| bill.id == options.id) else {
        return Err(ClientError::record_not_found("bill", &options.id));
    };
    if bill.status == BillStatus::Paid {
        return Err(ClientError::bill_already_paid(&options.id));
    }

    bill.status = BillStatus::Paid;
    bill.paid_at = Some(rfc3339_timestamp(now_utc()));
    let row = bill.clone();
    store.save(Dataset::Bills, &bills)?;

    success("bill pay", BillPayData { row })
}

pub fn delete(id: &str) -> ClientResult<SuccessEnvelope> {
    delete_with_options(BillDeleteOptions {
        id: id.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn delete_with_options(options: BillDeleteOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let store = Store::open(options.home_override)?;
    let mut bills: Vec<Bill> = store.load(Dataset::Bills);

    let Some(position) = bills.iter().position(|bill| bill.id == options.id) else {
        return Err(ClientError::record_not_found("bill", &options.id));
    };
    bills.remove(position);
    store.save(Dataset::Bills, &bills)?;

    success(
        "bill delete",
        DeleteData {
            dataset: "bill",
            id: options.id.clone(),
            message: format!("Bill `{}` deleted.", options.id),
        },
    )
}
