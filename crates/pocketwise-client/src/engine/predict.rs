use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::engine::date::{days_in_month, months_back, transaction_date};
use crate::engine::types::{Confidence, Trend};
use crate::model::{Budget, ExpenseCategory, Transaction, TransactionKind};

/// Trend adjustments below this percentage are treated as noise.
const TREND_THRESHOLD_PCT: f64 = 10.0;

/// Share of the trend carried into the projection.
const TREND_WEIGHT: f64 = 0.5;

const TRAILING_MONTHS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct SpendingForecast {
    pub amount: i64,
    pub confidence: Confidence,
    pub trend: Trend,
    pub trend_percentage: u32,
    pub historical: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetProjection {
    AlreadyExceeded,
    Projected {
        days_until_exceed: i64,
        will_exceed_this_month: bool,
        projected_total: i64,
    },
}

/// Projects next month's total spending from the three months preceding
/// `current_month`, half-weighting the most recent trend when it moves
/// more than the noise threshold.
pub fn predict_next_month_spending(
    transactions: &[Transaction],
    current_month: u32,
) -> Option<SpendingForecast> {
    if transactions.is_empty() {
        return None;
    }

    let trailing = trailing_expense_totals(transactions, current_month, None);
    let non_zero: Vec<f64> = trailing.iter().copied().filter(|&total| total > 0.0).collect();
    if non_zero.is_empty() {
        return None;
    }

    let average = non_zero.iter().sum::<f64>() / non_zero.len() as f64;

    let trend = if trailing[0] > trailing[1] {
        Trend::Increasing
    } else {
        Trend::Decreasing
    };
    let trend_percentage = if trailing[1] > 0.0 {
        (trailing[0] - trailing[1]) / trailing[1] * 100.0
    } else {
        0.0
    };

    let prediction = if trend_percentage.abs() > TREND_THRESHOLD_PCT {
        average * (1.0 + trend_percentage / 100.0 * TREND_WEIGHT)
    } else {
        average
    };

    Some(SpendingForecast {
        amount: prediction.round() as i64,
        confidence: if non_zero.len() >= 2 {
            Confidence::High
        } else {
            Confidence::Low
        },
        trend,
        trend_percentage: trend_percentage.abs().round() as u32,
        historical: non_zero,
    })
}

/// Mean of the non-zero trailing-window totals per category. Categories
/// with no spend in the window are omitted.
pub fn predict_category_spending(
    transactions: &[Transaction],
    current_month: u32,
) -> BTreeMap<ExpenseCategory, i64> {
    let mut predictions = BTreeMap::new();

    for category in ExpenseCategory::ALL {
        let appears = transactions.iter().any(|transaction| {
            transaction.kind == TransactionKind::Expense
                && transaction.category.as_expense() == Some(category)
        });
        if !appears {
            continue;
        }

        let trailing = trailing_expense_totals(transactions, current_month, Some(category));
        let non_zero: Vec<f64> = trailing.iter().copied().filter(|&total| total > 0.0).collect();
        if non_zero.is_empty() {
            continue;
        }

        let average = non_zero.iter().sum::<f64>() / non_zero.len() as f64;
        predictions.insert(category, average.round() as i64);
    }

    predictions
}

/// Projects whether a budget runs out before month-end at the category's
/// historical daily spend rate. `days_active` is the widest observed
/// days-since-transaction gap, an approximation rather than a true
/// activity window. Returns `None` when the category has no history.
pub fn predict_budget_exceed_date(
    budget: &Budget,
    current_spent: f64,
    transactions: &[Transaction],
    today: NaiveDate,
) -> Option<BudgetProjection> {
    if current_spent >= budget.amount {
        return Some(BudgetProjection::AlreadyExceeded);
    }

    let category_rows: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| {
            transaction.kind == TransactionKind::Expense
                && transaction.category.as_expense() == Some(budget.category)
        })
        .collect();
    if category_rows.is_empty() {
        return None;
    }

    let total_spent: f64 = category_rows.iter().map(|transaction| transaction.amount).sum();
    let days_active = category_rows
        .iter()
        .filter_map(|transaction| transaction_date(transaction))
        .map(|date| (today - date).num_days())
        .max()
        .unwrap_or(0);

    let daily_average = total_spent / days_active.max(1) as f64;
    let remaining = budget.amount - current_spent;
    let days_until_exceed = ((remaining / daily_average).ceil() as i64).max(0);

    let month_length = i64::from(days_in_month(today.year(), today.month()));
    let days_left_in_month = month_length - i64::from(today.day());

    Some(BudgetProjection::Projected {
        days_until_exceed,
        will_exceed_this_month: days_until_exceed < days_left_in_month,
        projected_total: (current_spent + daily_average * days_left_in_month as f64).round()
            as i64,
    })
}

/// Expense totals for the `TRAILING_MONTHS` months strictly before
/// `current_month`, most recent first.
fn trailing_expense_totals(
    transactions: &[Transaction],
    current_month: u32,
    category: Option<ExpenseCategory>,
) -> Vec<f64> {
    (0..TRAILING_MONTHS)
        .map(|back| {
            let month = months_back(current_month, back + 1);
            transactions
                .iter()
                .filter(|transaction| {
                    transaction.kind == TransactionKind::Expense
                        && transaction.month == month
                        && category
                            .is_none_or(|wanted| transaction.category.as_expense() == Some(wanted))
                })
                .map(|transaction| transaction.amount)
                .sum()
        })
        .collect()
}
