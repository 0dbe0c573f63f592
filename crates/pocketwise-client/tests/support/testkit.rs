#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use pocketwise_client::model::{
    Bill, BillStatus, Budget, Category, ExpenseCategory, GoalStatus, IncomeCategory, SavingsGoal,
    Transaction,
};
use pocketwise_client::store::{Dataset, Store};
use serde_json::Value;
use tempfile::{Builder, TempDir};

pub fn temp_home(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("pocketwise-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn expense(id: &str, amount: f64, category: ExpenseCategory, date: &str, month: u32) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        kind: Category::Expense(category).kind(),
        category: Category::Expense(category),
        description: format!("{} purchase", category.label()),
        date: format!("{date}T10:00:00Z"),
        month,
    }
}

pub fn income(id: &str, amount: f64, date: &str, month: u32) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount,
        kind: Category::Income(IncomeCategory::KerjaSampingan).kind(),
        category: Category::Income(IncomeCategory::KerjaSampingan),
        description: "gaji freelance".to_string(),
        date: format!("{date}T10:00:00Z"),
        month,
    }
}

pub fn budget(id: &str, category: ExpenseCategory, amount: f64) -> Budget {
    Budget {
        id: id.to_string(),
        category,
        amount,
        created_at: "2026-08-01T00:00:00Z".to_string(),
    }
}

pub fn goal(id: &str, name: &str, target: f64, current: f64, status: GoalStatus) -> SavingsGoal {
    SavingsGoal {
        id: id.to_string(),
        name: name.to_string(),
        icon: "🎯".to_string(),
        target_amount: target,
        current_amount: current,
        deadline: None,
        status,
        created_at: "2026-08-01T00:00:00Z".to_string(),
        completed_at: None,
    }
}

pub fn bill(id: &str, name: &str, amount: f64, due_date: &str, status: BillStatus) -> Bill {
    Bill {
        id: id.to_string(),
        name: name.to_string(),
        amount,
        due_date: due_date.to_string(),
        category: ExpenseCategory::Kebutuhan,
        status,
        created_at: "2026-08-01T00:00:00Z".to_string(),
        paid_at: None,
    }
}

pub fn seed_transactions(home: &Path, rows: &[Transaction]) {
    seed(home, Dataset::Transactions, rows);
}

pub fn seed_budgets(home: &Path, rows: &[Budget]) {
    seed(home, Dataset::Budgets, rows);
}

pub fn seed_goals(home: &Path, rows: &[SavingsGoal]) {
    seed(home, Dataset::Goals, rows);
}

pub fn seed_bills(home: &Path, rows: &[Bill]) {
    seed(home, Dataset::Bills, rows);
}

fn seed<T: serde::Serialize>(home: &Path, dataset: Dataset, rows: &[T]) {
    let store = Store::open(Some(home));
    assert!(store.is_ok());
    if let Ok(opened) = store {
        assert!(opened.save(dataset, rows).is_ok());
    }
}

pub fn envelope_data(envelope: &pocketwise_client::SuccessEnvelope) -> Value {
    let encoded = serde_json::to_value(envelope);
    assert!(encoded.is_ok());
    encoded.map(|value| value["data"].clone()).unwrap_or(Value::Null)
}
