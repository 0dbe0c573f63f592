use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::commands::common::resolve_today;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{
    AlertData, BreakdownData, BudgetProjectionData, CategoryForecastData, ForecastData, GradeData,
    HabitData, HealthData, InsightsData, NoteData, PatternData, PredictData, PredictionsData,
    RecommendationData,
};
use crate::engine::aggregate::{expense_by_category, month_totals};
use crate::engine::insights::{Alert, Recommendation, generate_insights};
use crate::engine::patterns::{HabitFinding, PatternFinding};
use crate::engine::predict::{
    BudgetProjection, SpendingForecast, predict_budget_exceed_date, predict_category_spending,
    predict_next_month_spending,
};
use crate::engine::score::{
    HealthInputs, calculate_budget_adherence, calculate_savings_rate, health_score,
};
use crate::model::{Bill, Budget, SavingsGoal, Transaction};
use crate::store::{Dataset, Store};
use crate::{ClientError, ClientResult};

/// Current balance must cover this many times the month's expenses to
/// count as an emergency fund.
const EMERGENCY_FUND_MONTHS: f64 = 3.0;

#[derive(Debug, Default)]
pub struct ReportOptions<'a> {
    pub month: Option<u32>,
    pub today: Option<NaiveDate>,
    pub home_override: Option<&'a Path>,
}

pub fn insights() -> ClientResult<SuccessEnvelope> {
    insights_with_options(ReportOptions::default())
}

#[doc(hidden)]
pub fn insights_with_options(options: ReportOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let today = resolve_today(options.today);
    let month = resolve_month(options.month, today, "insights")?;

    let store = Store::open(options.home_override)?;
    let transactions: Vec<Transaction> = store.load(Dataset::Transactions);
    let budgets: Vec<Budget> = store.load(Dataset::Budgets);
    let goals: Vec<SavingsGoal> = store.load(Dataset::Goals);
    let bills: Vec<Bill> = store.load(Dataset::Bills);

    let insights = generate_insights(&transactions, &budgets, &goals, &bills, month, today);

    success(
        "insights",
        InsightsData {
            month,
            patterns: insights.patterns.iter().map(pattern_data).collect(),
            positive_habits: insights.positive_habits.iter().map(habit_data).collect(),
            predictions: PredictionsData {
                next_month: insights.next_month.as_ref().map(forecast_data),
                by_category: insights
                    .by_category
                    .iter()
                    .map(|(category, amount)| CategoryForecastData {
                        category: category.label(),
                        amount: *amount,
                    })
                    .collect(),
            },
            recommendations: insights
                .recommendations
                .iter()
                .map(recommendation_data)
                .collect(),
            alerts: insights.alerts.iter().map(alert_data).collect(),
        },
    )
}

pub fn health() -> ClientResult<SuccessEnvelope> {
    health_with_options(ReportOptions::default())
}

#[doc(hidden)]
pub fn health_with_options(options: ReportOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let today = resolve_today(options.today);
    let month = resolve_month(options.month, today, "health")?;

    let store = Store::open(options.home_override)?;
    let transactions: Vec<Transaction> = store.load(Dataset::Transactions);
    let budgets: Vec<Budget> = store.load(Dataset::Budgets);

    let totals = month_totals(&transactions, month);
    let spent_by_category = expense_by_category(&transactions, Some(month));
    let savings_rate = calculate_savings_rate(totals.income, totals.expense);
    let budget_adherence = calculate_budget_adherence(&budgets, &spent_by_category);
    let has_emergency_fund = totals.balance >= totals.expense * EMERGENCY_FUND_MONTHS;

    let report = health_score(HealthInputs {
        total_income: totals.income,
        total_expense: totals.expense,
        budget_adherence,
        savings_rate,
        has_emergency_fund,
    });

    success(
        "health",
        HealthData {
            month,
            total_income: totals.income,
            total_expense: totals.expense,
            balance: totals.balance,
            savings_rate,
            budget_adherence,
            has_emergency_fund,
            score: report.score,
            breakdown: BreakdownData {
                savings_rate: report.breakdown.savings_rate,
                expense_ratio: report.breakdown.expense_ratio,
                budget_adherence: report.breakdown.budget_adherence,
                emergency_fund: report.breakdown.emergency_fund,
            },
            grade: GradeData {
                letter: report.grade.letter,
                label: report.grade.label,
                color: report.grade.color,
            },
            notes: health_notes(savings_rate, budget_adherence, has_emergency_fund),
        },
    )
}

pub fn predict() -> ClientResult<SuccessEnvelope> {
    predict_with_options(ReportOptions::default())
}

#[doc(hidden)]
pub fn predict_with_options(options: ReportOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let today = resolve_today(options.today);
    let month = resolve_month(options.month, today, "predict")?;

    let store = Store::open(options.home_override)?;
    let transactions: Vec<Transaction> = store.load(Dataset::Transactions);
    let budgets: Vec<Budget> = store.load(Dataset::Budgets);

    let spent_by_category = expense_by_category(&transactions, Some(month));
    let budget_projections = budgets
        .iter()
        .filter_map(|budget| {
            let spent = spent_by_category
                .get(&budget.category)
                .copied()
                .unwrap_or(0.0);
            let projection = predict_budget_exceed_date(budget, spent, &transactions, today)?;
            Some(projection_data(budget, spent, projection))
        })
        .collect();

    success(
        "predict",
        PredictData {
            month,
            next_month: predict_next_month_spending(&transactions, month)
                .as_ref()
                .map(forecast_data),
            by_category: predict_category_spending(&transactions, month)
                .iter()
                .map(|(category, amount)| CategoryForecastData {
                    category: category.label(),
                    amount: *amount,
                })
                .collect(),
            budget_projections,
        },
    )
}

fn resolve_month(month: Option<u32>, today: NaiveDate, command: &str) -> ClientResult<u32> {
    match month {
        Some(value) if value > 11 => Err(ClientError::invalid_argument_for_command(
            "`month` must be between 1 and 12.",
            Some(command),
        )),
        Some(value) => Ok(value),
        None => Ok(today.month0()),
    }
}

fn health_notes(savings_rate: f64, budget_adherence: f64, has_emergency_fund: bool) -> Vec<NoteData> {
    let mut notes = Vec::new();

    if savings_rate >= 20.0 {
        notes.push(NoteData {
            tone: "success",
            message: "Great savings rate! You're saving 20%+ of your income.".to_string(),
        });
    } else if savings_rate < 5.0 {
        notes.push(NoteData {
            tone: "warning",
            message: "Try to save at least 10% of your income.".to_string(),
        });
    }

    if budget_adherence >= 90.0 {
        notes.push(NoteData {
            tone: "success",
            message: "Excellent budget discipline!".to_string(),
        });
    } else if budget_adherence < 50.0 {
        notes.push(NoteData {
            tone: "warning",
            message: "You're exceeding many budgets.".to_string(),
        });
    }

    if has_emergency_fund {
        notes.push(NoteData {
            tone: "success",
            message: "You have a solid emergency fund!".to_string(),
        });
    } else {
        notes.push(NoteData {
            tone: "warning",
            message: "Build an emergency fund (3 months of expenses).".to_string(),
        });
    }

    notes
}

fn pattern_data(finding: &PatternFinding) -> PatternData {
    PatternData {
        pattern: finding.pattern,
        severity: finding.severity.as_str(),
        title: finding.title.clone(),
        description: finding.description.clone(),
        recommendation: finding.recommendation.clone(),
    }
}

fn habit_data(finding: &HabitFinding) -> HabitData {
    HabitData {
        habit: finding.habit,
        title: finding.title,
        description: finding.description.clone(),
        emoji: finding.emoji,
    }
}

fn forecast_data(forecast: &SpendingForecast) -> ForecastData {
    ForecastData {
        amount: forecast.amount,
        confidence: forecast.confidence.as_str(),
        trend: forecast.trend.as_str(),
        trend_percentage: forecast.trend_percentage,
        historical: forecast.historical.clone(),
    }
}

fn recommendation_data(recommendation: &Recommendation) -> RecommendationData {
    RecommendationData {
        kind: recommendation.kind,
        priority: recommendation.priority.as_str(),
        title: recommendation.title.clone(),
        description: recommendation.description.clone(),
        action: recommendation.action.clone(),
        potential_saving: recommendation.potential_saving,
    }
}

fn alert_data(alert: &Alert) -> AlertData {
    AlertData {
        kind: alert.kind,
        severity: alert.severity.as_str(),
        title: alert.title.clone(),
        message: alert.message.clone(),
    }
}

fn projection_data(budget: &Budget, spent: f64, projection: BudgetProjection) -> BudgetProjectionData {
    match projection {
        BudgetProjection::AlreadyExceeded => BudgetProjectionData {
            category: budget.category.label(),
            budget_amount: budget.amount,
            spent,
            exceeded: true,
            days_until_exceed: None,
            will_exceed_this_month: None,
            projected_total: None,
        },
        BudgetProjection::Projected {
            days_until_exceed,
            will_exceed_this_month,
            projected_total,
        } => BudgetProjectionData {
            category: budget.category.label(),
            budget_amount: budget.amount,
            spent,
            exceeded: false,
            days_until_exceed: Some(days_until_exceed),
            will_exceed_this_month: Some(will_exceed_this_month),
            projected_total: Some(projected_total),
        },
    }
}
