use std::collections::BTreeMap;

use crate::model::{ExpenseCategory, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthTotals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

pub fn sum_of_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == kind)
        .map(|transaction| transaction.amount)
        .sum()
}

pub fn sum_of_kind_in_month(
    transactions: &[Transaction],
    kind: TransactionKind,
    month: u32,
) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.kind == kind && transaction.month == month)
        .map(|transaction| transaction.amount)
        .sum()
}

pub fn transactions_in_month(transactions: &[Transaction], month: u32) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.month == month)
        .collect()
}

pub fn month_totals(transactions: &[Transaction], month: u32) -> MonthTotals {
    let income = sum_of_kind_in_month(transactions, TransactionKind::Income, month);
    let expense = sum_of_kind_in_month(transactions, TransactionKind::Expense, month);
    MonthTotals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Sums expense amounts per category, optionally restricted to one month.
/// The `BTreeMap` keeps iteration in declaration order of the category
/// enum, so downstream "largest category" picks are deterministic.
pub fn expense_by_category(
    transactions: &[Transaction],
    month: Option<u32>,
) -> BTreeMap<ExpenseCategory, f64> {
    let mut buckets: BTreeMap<ExpenseCategory, f64> = BTreeMap::new();
    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }
        if let Some(wanted) = month
            && transaction.month != wanted
        {
            continue;
        }
        let Some(category) = transaction.category.as_expense() else {
            continue;
        };
        *buckets.entry(category).or_insert(0.0) += transaction.amount;
    }
    buckets
}

/// Largest expense bucket; ties resolve to the earlier-declared category.
pub fn dominant_expense_category(
    buckets: &BTreeMap<ExpenseCategory, f64>,
) -> Option<(ExpenseCategory, f64)> {
    let mut best: Option<(ExpenseCategory, f64)> = None;
    for (&category, &amount) in buckets {
        match best {
            Some((_, best_amount)) if amount <= best_amount => {}
            _ => best = Some((category, amount)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use crate::model::{Category, ExpenseCategory, IncomeCategory, TransactionKind};

    use super::{
        MonthTotals, dominant_expense_category, expense_by_category, month_totals, sum_of_kind,
        transactions_in_month,
    };
    use crate::model::Transaction;

    fn txn(id: &str, amount: f64, category: Category, month: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount,
            kind: category.kind(),
            category,
            description: String::new(),
            date: format!("2026-{:02}-15T10:00:00Z", month + 1),
            month,
        }
    }

    #[test]
    fn empty_history_sums_to_zero() {
        assert_eq!(sum_of_kind(&[], TransactionKind::Income), 0.0);
        assert_eq!(
            month_totals(&[], 3),
            MonthTotals {
                income: 0.0,
                expense: 0.0,
                balance: 0.0
            }
        );
    }

    #[test]
    fn totals_bucket_by_the_month_field() {
        let rows = vec![
            txn("txn_1", 1000.0, Category::Income(IncomeCategory::UangSaku), 4),
            txn("txn_2", 300.0, Category::Expense(ExpenseCategory::Makanan), 4),
            txn("txn_3", 200.0, Category::Expense(ExpenseCategory::Makanan), 5),
        ];

        let totals = month_totals(&rows, 4);
        assert_eq!(totals.income, 1000.0);
        assert_eq!(totals.expense, 300.0);
        assert_eq!(totals.balance, 700.0);
        assert_eq!(transactions_in_month(&rows, 5).len(), 1);
    }

    #[test]
    fn category_buckets_ignore_income_rows() {
        let rows = vec![
            txn("txn_1", 1000.0, Category::Income(IncomeCategory::UangSaku), 4),
            txn("txn_2", 300.0, Category::Expense(ExpenseCategory::Makanan), 4),
            txn("txn_3", 150.0, Category::Expense(ExpenseCategory::Makanan), 4),
            txn("txn_4", 100.0, Category::Expense(ExpenseCategory::Hiburan), 4),
        ];

        let buckets = expense_by_category(&rows, Some(4));
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.get(&ExpenseCategory::Makanan), Some(&450.0));
        assert_eq!(
            dominant_expense_category(&buckets),
            Some((ExpenseCategory::Makanan, 450.0))
        );
    }

    #[test]
    fn dominant_category_tie_goes_to_declaration_order() {
        let rows = vec![
            txn("txn_1", 100.0, Category::Expense(ExpenseCategory::Hiburan), 4),
            txn("txn_2", 100.0, Category::Expense(ExpenseCategory::Makanan), 4),
        ];

        let buckets = expense_by_category(&rows, None);
        assert_eq!(
            dominant_expense_category(&buckets),
            Some((ExpenseCategory::Makanan, 100.0))
        );
    }
}
