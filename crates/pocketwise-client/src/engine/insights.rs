use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::engine::aggregate::{dominant_expense_category, expense_by_category, month_totals};
use crate::engine::date::parse_iso_date;
use crate::engine::patterns::{
    HabitFinding, PatternFinding, detect_positive_habits, detect_spending_patterns,
};
use crate::engine::predict::{
    SpendingForecast, predict_category_spending, predict_next_month_spending,
};
use crate::engine::score::calculate_savings_rate;
use crate::engine::types::{Priority, Severity};
use crate::model::{
    Bill, BillStatus, Budget, ExpenseCategory, GoalStatus, SavingsGoal, Transaction,
};

const LOW_SAVINGS_RATE_PCT: f64 = 10.0;
const TOP_CATEGORY_SHARE: f64 = 0.4;
const BUDGET_WARNING_SHARE: f64 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub kind: &'static str,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action: String,
    pub potential_saving: Option<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: &'static str,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub patterns: Vec<PatternFinding>,
    pub positive_habits: Vec<HabitFinding>,
    pub next_month: Option<SpendingForecast>,
    pub by_category: BTreeMap<ExpenseCategory, i64>,
    pub recommendations: Vec<Recommendation>,
    pub alerts: Vec<Alert>,
}

/// Prioritized suggestions for the current month, ordered high > medium >
/// low.
pub fn generate_recommendations(
    transactions: &[Transaction],
    budgets: &[Budget],
    goals: &[SavingsGoal],
    current_month: u32,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let totals = month_totals(transactions, current_month);
    let savings_rate = calculate_savings_rate(totals.income, totals.expense);

    if savings_rate < LOW_SAVINGS_RATE_PCT {
        recommendations.push(Recommendation {
            kind: "savings",
            priority: Priority::High,
            title: "Increase Your Savings Rate".to_string(),
            description: format!(
                "You're currently saving {}% of your income. Aim for at least 20%.",
                savings_rate.round()
            ),
            action: "Set up automatic savings transfer right after receiving income.".to_string(),
            potential_saving: Some((totals.income * 0.1).round() as i64),
        });
    }

    if budgets.is_empty() {
        recommendations.push(Recommendation {
            kind: "budget",
            priority: Priority::High,
            title: "Create a Budget Plan".to_string(),
            description: "You don't have any budgets set. Budgeting helps control spending."
                .to_string(),
            action: "Start by setting budgets for your top 3 spending categories.".to_string(),
            potential_saving: None,
        });
    }

    let buckets = expense_by_category(transactions, Some(current_month));
    if let Some((category, amount)) = dominant_expense_category(&buckets)
        && amount > totals.expense * TOP_CATEGORY_SHARE
    {
        recommendations.push(Recommendation {
            kind: "optimization",
            priority: Priority::Medium,
            title: format!("Optimize {} Spending", category.label()),
            description: format!(
                "{} is your biggest expense at {}.",
                category.label(),
                format_amount(amount)
            ),
            action: optimization_action(category).to_string(),
            potential_saving: Some((amount * 0.2).round() as i64),
        });
    }

    let active_goals = goals
        .iter()
        .filter(|goal| goal.status == GoalStatus::Active)
        .count();
    if active_goals == 0 && savings_rate > LOW_SAVINGS_RATE_PCT {
        recommendations.push(Recommendation {
            kind: "goals",
            priority: Priority::Low,
            title: "Set Savings Goals".to_string(),
            description: "You're saving money! Give it a purpose by setting specific goals."
                .to_string(),
            action: "Create a goal for something you want to save for (laptop, vacation, etc.)."
                .to_string(),
            potential_saving: None,
        });
    }

    recommendations.sort_by(|left, right| right.priority.rank().cmp(&left.priority.rank()));
    recommendations
}

/// Urgent conditions for the current month: budget ceilings, overdue
/// bills, and spending past income.
pub fn generate_alerts(
    transactions: &[Transaction],
    budgets: &[Budget],
    bills: &[Bill],
    current_month: u32,
    today: NaiveDate,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    let buckets = expense_by_category(transactions, Some(current_month));
    for budget in budgets {
        let spent = buckets.get(&budget.category).copied().unwrap_or(0.0);
        if spent > budget.amount {
            alerts.push(Alert {
                kind: "budget_exceeded",
                severity: Severity::Error,
                title: format!("{} Budget Exceeded", budget.category.label()),
                message: format!(
                    "You've spent {} out of {}",
                    format_amount(spent),
                    format_amount(budget.amount)
                ),
            });
        } else if spent > budget.amount * BUDGET_WARNING_SHARE {
            alerts.push(Alert {
                kind: "budget_warning",
                severity: Severity::Warning,
                title: format!("{} Budget Almost Reached", budget.category.label()),
                message: format!(
                    "You've used {}% of your budget",
                    (spent / budget.amount * 100.0).round()
                ),
            });
        }
    }

    let overdue = bills
        .iter()
        .filter(|bill| {
            bill.status == BillStatus::Pending
                && parse_iso_date(&bill.due_date).is_some_and(|due| due < today)
        })
        .count();
    if overdue > 0 {
        alerts.push(Alert {
            kind: "overdue_bills",
            severity: Severity::Error,
            title: "Overdue Bills".to_string(),
            message: format!(
                "You have {overdue} overdue bill{}",
                if overdue > 1 { "s" } else { "" }
            ),
        });
    }

    let totals = month_totals(transactions, current_month);
    if totals.expense > totals.income {
        alerts.push(Alert {
            kind: "negative_balance",
            severity: Severity::Error,
            title: "Spending Exceeds Income".to_string(),
            message: format!(
                "You're spending {} more than you earn this month",
                format_amount(totals.expense - totals.income)
            ),
        });
    }

    alerts
}

/// The aggregate analytics object the presentation layer consumes.
pub fn generate_insights(
    transactions: &[Transaction],
    budgets: &[Budget],
    goals: &[SavingsGoal],
    bills: &[Bill],
    current_month: u32,
    today: NaiveDate,
) -> Insights {
    Insights {
        patterns: detect_spending_patterns(transactions),
        positive_habits: detect_positive_habits(transactions, budgets, goals, current_month),
        next_month: predict_next_month_spending(transactions, current_month),
        by_category: predict_category_spending(transactions, current_month),
        recommendations: generate_recommendations(transactions, budgets, goals, current_month),
        alerts: generate_alerts(transactions, budgets, bills, current_month, today),
    }
}

fn optimization_action(category: ExpenseCategory) -> &'static str {
    match category {
        ExpenseCategory::Makanan => "Try meal prepping and cooking at home more often.",
        ExpenseCategory::Transport => "Consider carpooling or using public transportation.",
        ExpenseCategory::Hiburan => {
            "Look for free entertainment options or limit streaming subscriptions."
        }
        ExpenseCategory::Kebutuhan => "Buy in bulk and wait for sales before shopping.",
        _ => "Review this category for cost-cutting opportunities.",
    }
}

/// Formats a magnitude with thousands separators. Amounts are
/// currency-agnostic, so there is no symbol.
pub(crate) fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (index, character) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(character);
    }
    if rounded < 0 {
        return format!("-{grouped}");
    }
    grouped
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::engine::types::{Priority, Severity};
    use crate::model::{
        Bill, BillStatus, Budget, Category, ExpenseCategory, GoalStatus, IncomeCategory,
        SavingsGoal, Transaction,
    };

    use super::{format_amount, generate_alerts, generate_insights, generate_recommendations};

    fn expense(id: &str, amount: f64, category: ExpenseCategory, date: &str, month: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount,
            kind: Category::Expense(category).kind(),
            category: Category::Expense(category),
            description: String::new(),
            date: format!("{date}T10:00:00Z"),
            month,
        }
    }

    fn income(id: &str, amount: f64, date: &str, month: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount,
            kind: Category::Income(IncomeCategory::KerjaSampingan).kind(),
            category: Category::Income(IncomeCategory::KerjaSampingan),
            description: String::new(),
            date: format!("{date}T10:00:00Z"),
            month,
        }
    }

    fn budget(category: ExpenseCategory, amount: f64) -> Budget {
        Budget {
            id: format!("bud_{}", category.label()),
            category,
            amount,
            created_at: "2026-08-01T00:00:00Z".to_string(),
        }
    }

    fn bill(id: &str, due_date: &str, status: BillStatus) -> Bill {
        Bill {
            id: id.to_string(),
            name: "Internet".to_string(),
            amount: 300_000.0,
            due_date: due_date.to_string(),
            category: ExpenseCategory::Kebutuhan,
            status,
            created_at: "2026-08-01T00:00:00Z".to_string(),
            paid_at: None,
        }
    }

    fn goal(status: GoalStatus) -> SavingsGoal {
        SavingsGoal {
            id: "goal_1".to_string(),
            name: "Laptop".to_string(),
            icon: "💻".to_string(),
            target_amount: 5_000_000.0,
            current_amount: 0.0,
            deadline: None,
            status,
            created_at: "2026-08-01T00:00:00Z".to_string(),
            completed_at: None,
        }
    }

    fn date(value: &str) -> NaiveDate {
        let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d");
        assert!(parsed.is_ok());
        parsed.unwrap_or(NaiveDate::MIN)
    }

    #[test]
    fn recommendations_are_ordered_by_priority() {
        // Low savings rate (high), no budgets (high), concentrated top
        // category (medium), and a healthy-saver goal nudge stays out
        // because the savings rate is poor.
        let rows = vec![
            income("txn_0", 1000.0, "2026-08-01", 7),
            expense("txn_1", 950.0, ExpenseCategory::Makanan, "2026-08-02", 7),
        ];

        let recommendations = generate_recommendations(&rows, &[], &[], 7);
        assert!(recommendations.len() >= 3);
        for pair in recommendations.windows(2) {
            assert!(pair[0].priority.rank() >= pair[1].priority.rank());
        }
        assert!(recommendations.iter().any(|r| r.kind == "savings"));
        assert!(recommendations.iter().any(|r| r.kind == "budget"));
        assert!(recommendations.iter().any(|r| r.kind == "optimization"));
        assert!(!recommendations.iter().any(|r| r.kind == "goals"));
    }

    #[test]
    fn healthy_saver_without_goals_gets_the_goal_nudge() {
        let rows = vec![
            income("txn_0", 1000.0, "2026-08-01", 7),
            expense("txn_1", 200.0, ExpenseCategory::Makanan, "2026-08-02", 7),
        ];
        let budgets = vec![budget(ExpenseCategory::Makanan, 500.0)];

        let recommendations = generate_recommendations(&rows, &budgets, &[], 7);
        assert!(recommendations.iter().any(|r| r.kind == "goals"));

        let with_goal = generate_recommendations(&rows, &budgets, &[goal(GoalStatus::Active)], 7);
        assert!(!with_goal.iter().any(|r| r.kind == "goals"));
    }

    #[test]
    fn optimization_carries_a_category_specific_action() {
        let rows = vec![
            income("txn_0", 1000.0, "2026-08-01", 7),
            expense("txn_1", 500.0, ExpenseCategory::Transport, "2026-08-02", 7),
            expense("txn_2", 100.0, ExpenseCategory::Makanan, "2026-08-03", 7),
        ];

        let recommendations = generate_recommendations(&rows, &[], &[], 7);
        let optimization = recommendations.iter().find(|r| r.kind == "optimization");
        assert!(optimization.is_some());
        if let Some(found) = optimization {
            assert_eq!(found.priority, Priority::Medium);
            assert!(found.title.contains("Transport"));
            assert!(found.action.contains("carpooling"));
            assert_eq!(found.potential_saving, Some(100));
        }
    }

    #[test]
    fn budget_alerts_distinguish_warning_from_exceeded() {
        let rows = vec![
            expense("txn_1", 95.0, ExpenseCategory::Makanan, "2026-08-02", 7),
            expense("txn_2", 150.0, ExpenseCategory::Hiburan, "2026-08-03", 7),
        ];
        let budgets = vec![
            budget(ExpenseCategory::Makanan, 100.0),
            budget(ExpenseCategory::Hiburan, 100.0),
            budget(ExpenseCategory::Transport, 100.0),
        ];

        let alerts = generate_alerts(&rows, &budgets, &[], 7, date("2026-08-07"));
        let warning = alerts.iter().find(|a| a.kind == "budget_warning");
        assert!(warning.is_some());
        if let Some(found) = warning {
            assert_eq!(found.severity, Severity::Warning);
            assert!(found.title.contains("Makanan"));
            assert!(found.message.contains("95%"));
        }
        let exceeded = alerts.iter().find(|a| a.kind == "budget_exceeded");
        assert!(exceeded.is_some());
        if let Some(found) = exceeded {
            assert_eq!(found.severity, Severity::Error);
            assert!(found.title.contains("Hiburan"));
        }
        assert!(!alerts.iter().any(|a| a.title.contains("Transport")));
    }

    #[test]
    fn overdue_pending_bills_raise_one_alert() {
        let bills = vec![
            bill("bill_1", "2026-08-01", BillStatus::Pending),
            bill("bill_2", "2026-08-03", BillStatus::Pending),
            bill("bill_3", "2026-08-01", BillStatus::Paid),
            bill("bill_4", "2026-08-20", BillStatus::Pending),
        ];

        let alerts = generate_alerts(&[], &[], &bills, 7, date("2026-08-07"));
        let overdue: Vec<_> = alerts.iter().filter(|a| a.kind == "overdue_bills").collect();
        assert_eq!(overdue.len(), 1);
        assert!(overdue[0].message.contains("2 overdue bills"));
    }

    #[test]
    fn negative_month_raises_the_balance_alert() {
        let rows = vec![
            income("txn_0", 100.0, "2026-08-01", 7),
            expense("txn_1", 250.0, ExpenseCategory::Makanan, "2026-08-02", 7),
        ];

        let alerts = generate_alerts(&rows, &[], &[], 7, date("2026-08-07"));
        let negative = alerts.iter().find(|a| a.kind == "negative_balance");
        assert!(negative.is_some());
        if let Some(found) = negative {
            assert!(found.message.contains("150"));
        }
    }

    #[test]
    fn insights_compose_every_section() {
        let rows = vec![
            income("txn_0", 1000.0, "2026-08-01", 7),
            expense("txn_1", 700.0, ExpenseCategory::Makanan, "2026-08-02", 7),
            expense("txn_2", 300.0, ExpenseCategory::Makanan, "2026-07-10", 6),
        ];
        let budgets = vec![budget(ExpenseCategory::Makanan, 500.0)];
        let goals = vec![goal(GoalStatus::Active)];
        let bills = vec![bill("bill_1", "2026-08-01", BillStatus::Pending)];

        let insights = generate_insights(&rows, &budgets, &goals, &bills, 7, date("2026-08-07"));
        assert!(!insights.patterns.is_empty());
        assert!(!insights.positive_habits.is_empty());
        assert!(insights.next_month.is_some());
        assert!(insights.by_category.contains_key(&ExpenseCategory::Makanan));
        assert!(!insights.recommendations.is_empty());
        assert!(!insights.alerts.is_empty());
    }

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(950.0), "950");
        assert_eq!(format_amount(1500.0), "1,500");
        assert_eq!(format_amount(2_500_000.0), "2,500,000");
    }
}
