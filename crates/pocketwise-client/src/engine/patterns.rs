use std::collections::{BTreeMap, BTreeSet};

use crate::engine::aggregate::{dominant_expense_category, expense_by_category, month_totals};
use crate::engine::date::{is_weekend, months_back, transaction_date};
use crate::engine::types::Severity;
use crate::model::{Budget, GoalStatus, SavingsGoal, Transaction, TransactionKind};

const HIGH_SPEND_DAY_RATIO: f64 = 2.0;
const HIGH_SPEND_WARNING_DAYS: usize = 5;
const WEEKEND_SKEW_RATIO: f64 = 0.4;
const CONCENTRATION_SHARE: f64 = 0.5;
const IMPULSE_AMOUNT_RATIO: f64 = 0.3;
const IMPULSE_WARNING_COUNT: usize = 10;
const BUDGET_DISCIPLINE_RATE: f64 = 0.8;
const SAVING_STREAK_MONTHS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFinding {
    pub pattern: &'static str,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitFinding {
    pub habit: &'static str,
    pub title: &'static str,
    pub description: String,
    pub emoji: &'static str,
}

/// Scans the full transaction history for recurring behavioral signals.
/// Each rule gates independently; findings keep a fixed priority order.
pub fn detect_spending_patterns(transactions: &[Transaction]) -> Vec<PatternFinding> {
    let mut patterns = Vec::new();

    let daily_spending = daily_expense_buckets(transactions);
    let mean_daily_spend = if daily_spending.is_empty() {
        None
    } else {
        Some(daily_spending.values().sum::<f64>() / daily_spending.len() as f64)
    };

    if let Some(mean) = mean_daily_spend {
        let high_spend_days = daily_spending
            .values()
            .filter(|&&amount| amount > mean * HIGH_SPEND_DAY_RATIO)
            .count();
        if high_spend_days > 0 {
            patterns.push(PatternFinding {
                pattern: "high_spending_days",
                severity: if high_spend_days > HIGH_SPEND_WARNING_DAYS {
                    Severity::Warning
                } else {
                    Severity::Info
                },
                title: "High Spending Days Detected".to_string(),
                description: format!(
                    "You had {high_spend_days} days with unusually high spending (2x your daily average)."
                ),
                recommendation: "Try to spread out large purchases to better manage your budget."
                    .to_string(),
            });
        }
    }

    let (weekend_spending, weekday_spending) = weekend_weekday_split(transactions);
    if weekend_spending > weekday_spending * WEEKEND_SKEW_RATIO {
        let weekend_share =
            (weekend_spending / (weekend_spending + weekday_spending) * 100.0).round();
        patterns.push(PatternFinding {
            pattern: "weekend_spending",
            severity: Severity::Info,
            title: "High Weekend Spending".to_string(),
            description: format!(
                "Your weekend spending is {weekend_share}% of your total expenses."
            ),
            recommendation: "Consider free weekend activities to reduce costs.".to_string(),
        });
    }

    let category_buckets = expense_by_category(transactions, None);
    let total_spending: f64 = category_buckets.values().sum();
    if let Some((category, amount)) = dominant_expense_category(&category_buckets)
        && total_spending > 0.0
        && amount / total_spending > CONCENTRATION_SHARE
    {
        let share = (amount / total_spending * 100.0).round();
        patterns.push(PatternFinding {
            pattern: "category_concentration",
            severity: Severity::Warning,
            title: format!("Heavy Focus on {}", category.label()),
            description: format!("{share}% of your spending goes to {}.", category.label()),
            recommendation: format!(
                "Consider diversifying your spending or finding cheaper alternatives for {}.",
                category.label()
            ),
        });
    }

    if let Some(mean) = mean_daily_spend {
        let impulse_count = impulse_pair_count(transactions, mean);
        if impulse_count > IMPULSE_WARNING_COUNT {
            patterns.push(PatternFinding {
                pattern: "impulse_spending",
                severity: Severity::Warning,
                title: "Frequent Small Purchases Detected".to_string(),
                description: format!(
                    "You made {impulse_count} small purchases. These add up quickly!"
                ),
                recommendation:
                    "Try the 24-hour rule: wait a day before making non-essential purchases."
                        .to_string(),
            });
        }
    }

    if has_overspending_month(transactions) {
        patterns.push(PatternFinding {
            pattern: "overspending",
            severity: Severity::Error,
            title: "Spending Exceeds Income".to_string(),
            description: "You're spending more than you earn. This is unsustainable.".to_string(),
            recommendation: "Review your expenses and cut non-essential spending immediately."
                .to_string(),
        });
    }

    patterns
}

/// Positive habit findings over the trailing window (the current month and
/// the two before it), all-time budget discipline, and active goals.
pub fn detect_positive_habits(
    transactions: &[Transaction],
    budgets: &[Budget],
    goals: &[SavingsGoal],
    current_month: u32,
) -> Vec<HabitFinding> {
    let mut habits = Vec::new();

    let saved_every_month = (0..SAVING_STREAK_MONTHS).all(|back| {
        let totals = month_totals(transactions, months_back(current_month, back));
        totals.balance > 0.0
    });
    if saved_every_month {
        habits.push(HabitFinding {
            habit: "consistent_saving",
            title: "🎉 Great Saving Habit!",
            description: "You've been saving money consistently for 3 months.".to_string(),
            emoji: "💰",
        });
    }

    if !budgets.is_empty() {
        let all_time_spend = expense_by_category(transactions, None);
        let adherent = budgets
            .iter()
            .filter(|budget| {
                let spent = all_time_spend
                    .get(&budget.category)
                    .copied()
                    .unwrap_or(0.0);
                spent <= budget.amount
            })
            .count();
        let adherence_rate = adherent as f64 / budgets.len() as f64;
        if adherence_rate > BUDGET_DISCIPLINE_RATE {
            habits.push(HabitFinding {
                habit: "budget_discipline",
                title: "🎯 Budget Master!",
                description: format!(
                    "You're staying within budget {}% of the time.",
                    (adherence_rate * 100.0).round()
                ),
                emoji: "🏆",
            });
        }
    }

    let active_goals = goals
        .iter()
        .filter(|goal| goal.status == GoalStatus::Active)
        .count();
    if active_goals > 0 {
        habits.push(HabitFinding {
            habit: "goal_oriented",
            title: "🚀 Goal-Oriented",
            description: format!(
                "You have {active_goals} active savings goal{}. Keep pushing!",
                if active_goals > 1 { "s" } else { "" }
            ),
            emoji: "⭐",
        });
    }

    habits
}

fn daily_expense_buckets(transactions: &[Transaction]) -> BTreeMap<String, f64> {
    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }
        let Some(date) = transaction_date(transaction) else {
            continue;
        };
        *buckets.entry(date.format("%Y-%m-%d").to_string()).or_insert(0.0) += transaction.amount;
    }
    buckets
}

fn weekend_weekday_split(transactions: &[Transaction]) -> (f64, f64) {
    let mut weekend = 0.0;
    let mut weekday = 0.0;
    for transaction in transactions {
        if transaction.kind != TransactionKind::Expense {
            continue;
        }
        let Some(date) = transaction_date(transaction) else {
            continue;
        };
        if is_weekend(date) {
            weekend += transaction.amount;
        } else {
            weekday += transaction.amount;
        }
    }
    (weekend, weekday)
}

/// Counts chronologically adjacent same-day expense pairs whose earlier
/// amount is small relative to the mean daily spend.
fn impulse_pair_count(transactions: &[Transaction], mean_daily_spend: f64) -> usize {
    let mut expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense)
        .collect();
    expenses.sort_by(|left, right| {
        left.date
            .cmp(&right.date)
            .then_with(|| left.id.cmp(&right.id))
    });

    let mut count = 0;
    for pair in expenses.windows(2) {
        let same_day = match (transaction_date(pair[0]), transaction_date(pair[1])) {
            (Some(earlier), Some(later)) => earlier == later,
            _ => false,
        };
        if same_day && pair[0].amount < mean_daily_spend * IMPULSE_AMOUNT_RATIO {
            count += 1;
        }
    }
    count
}

fn has_overspending_month(transactions: &[Transaction]) -> bool {
    let months: BTreeSet<u32> = transactions
        .iter()
        .map(|transaction| transaction.month)
        .collect();
    months
        .into_iter()
        .any(|month| {
            let totals = month_totals(transactions, month);
            totals.expense > totals.income
        })
}
