use std::collections::BTreeMap;

use crate::model::{Budget, ExpenseCategory};

pub const SAVINGS_POINTS_MAX: u32 = 30;
pub const EXPENSE_RATIO_POINTS_MAX: u32 = 30;
pub const ADHERENCE_POINTS_MAX: u32 = 25;
pub const EMERGENCY_FUND_POINTS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthInputs {
    pub total_income: f64,
    pub total_expense: f64,
    pub budget_adherence: f64,
    pub savings_rate: f64,
    pub has_emergency_fund: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthBreakdown {
    pub savings_rate: u32,
    pub expense_ratio: u32,
    pub budget_adherence: u32,
    pub emergency_fund: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grade {
    pub letter: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub score: u32,
    pub breakdown: HealthBreakdown,
    pub grade: Grade,
}

/// Percent of income left after expenses. Zero income scores zero rather
/// than dividing.
pub fn calculate_savings_rate(income: f64, expense: f64) -> f64 {
    if income == 0.0 {
        return 0.0;
    }
    (income - expense) / income * 100.0
}

/// Percent of budgeted categories whose spend stayed within the ceiling.
/// No budgets at all counts as full adherence; not budgeting is not
/// penalized.
pub fn calculate_budget_adherence(
    budgets: &[Budget],
    expense_by_category: &BTreeMap<ExpenseCategory, f64>,
) -> f64 {
    if budgets.is_empty() {
        return 100.0;
    }

    let adherent = budgets
        .iter()
        .filter(|budget| {
            let spent = expense_by_category
                .get(&budget.category)
                .copied()
                .unwrap_or(0.0);
            spent <= budget.amount
        })
        .count();

    adherent as f64 / budgets.len() as f64 * 100.0
}

pub fn health_score(inputs: HealthInputs) -> HealthReport {
    let breakdown = HealthBreakdown {
        savings_rate: savings_points(inputs.savings_rate),
        expense_ratio: expense_ratio_points(inputs.total_income, inputs.total_expense),
        budget_adherence: adherence_points(inputs.budget_adherence),
        emergency_fund: if inputs.has_emergency_fund {
            EMERGENCY_FUND_POINTS
        } else {
            0
        },
    };

    let score = (breakdown.savings_rate
        + breakdown.expense_ratio
        + breakdown.budget_adherence
        + breakdown.emergency_fund)
        .min(100);

    HealthReport {
        score,
        breakdown,
        grade: grade_for(score),
    }
}

fn savings_points(savings_rate: f64) -> u32 {
    if savings_rate >= 30.0 {
        SAVINGS_POINTS_MAX
    } else if savings_rate >= 20.0 {
        25
    } else if savings_rate >= 10.0 {
        15
    } else if savings_rate >= 5.0 {
        5
    } else {
        0
    }
}

fn expense_ratio_points(total_income: f64, total_expense: f64) -> u32 {
    // Zero income is the worst case (ratio pinned to 100%), not a skipped
    // metric.
    let expense_ratio = if total_income == 0.0 {
        100.0
    } else {
        total_expense / total_income * 100.0
    };

    if expense_ratio <= 60.0 {
        EXPENSE_RATIO_POINTS_MAX
    } else if expense_ratio <= 70.0 {
        25
    } else if expense_ratio <= 85.0 {
        15
    } else if expense_ratio <= 100.0 {
        5
    } else {
        0
    }
}

fn adherence_points(budget_adherence: f64) -> u32 {
    if budget_adherence >= 95.0 {
        ADHERENCE_POINTS_MAX
    } else if budget_adherence >= 90.0 {
        20
    } else if budget_adherence >= 75.0 {
        12
    } else if budget_adherence >= 50.0 {
        5
    } else {
        0
    }
}

pub fn grade_for(score: u32) -> Grade {
    if score >= 90 {
        Grade {
            letter: "A+",
            label: "Excellent",
            color: "green",
        }
    } else if score >= 80 {
        Grade {
            letter: "A",
            label: "Very Good",
            color: "green",
        }
    } else if score >= 70 {
        Grade {
            letter: "B+",
            label: "Good",
            color: "blue",
        }
    } else if score >= 60 {
        Grade {
            letter: "B",
            label: "Above Average",
            color: "blue",
        }
    } else if score >= 50 {
        Grade {
            letter: "C",
            label: "Average",
            color: "yellow",
        }
    } else if score >= 40 {
        Grade {
            letter: "D",
            label: "Below Average",
            color: "orange",
        }
    } else {
        Grade {
            letter: "F",
            label: "Poor",
            color: "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::model::{Budget, ExpenseCategory};

    use super::{
        HealthInputs, calculate_budget_adherence, calculate_savings_rate, health_score,
    };

    fn budget(category: ExpenseCategory, amount: f64) -> Budget {
        Budget {
            id: format!("bud_{}", category.label()),
            category,
            amount,
            created_at: "2026-08-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn savings_rate_handles_zero_income() {
        assert_eq!(calculate_savings_rate(0.0, 500.0), 0.0);
        assert_eq!(calculate_savings_rate(1000.0, 800.0), 20.0);
    }

    #[test]
    fn adherence_defaults_to_full_without_budgets() {
        assert_eq!(calculate_budget_adherence(&[], &BTreeMap::new()), 100.0);
    }

    #[test]
    fn adherence_counts_exceeded_categories() {
        let budgets = vec![budget(ExpenseCategory::Makanan, 100.0)];

        let mut over = BTreeMap::new();
        over.insert(ExpenseCategory::Makanan, 150.0);
        assert_eq!(calculate_budget_adherence(&budgets, &over), 0.0);

        let mut under = BTreeMap::new();
        under.insert(ExpenseCategory::Makanan, 50.0);
        assert_eq!(calculate_budget_adherence(&budgets, &under), 100.0);
    }

    #[test]
    fn unspent_budget_category_is_adherent() {
        let budgets = vec![
            budget(ExpenseCategory::Makanan, 100.0),
            budget(ExpenseCategory::Hiburan, 100.0),
        ];
        let mut spent = BTreeMap::new();
        spent.insert(ExpenseCategory::Makanan, 150.0);
        assert_eq!(calculate_budget_adherence(&budgets, &spent), 50.0);
    }

    #[test]
    fn strong_month_scores_a_plus() {
        let report = health_score(HealthInputs {
            total_income: 1000.0,
            total_expense: 600.0,
            budget_adherence: 100.0,
            savings_rate: 40.0,
            has_emergency_fund: true,
        });

        assert_eq!(report.breakdown.savings_rate, 30);
        assert_eq!(report.breakdown.expense_ratio, 30);
        assert_eq!(report.breakdown.budget_adherence, 25);
        assert_eq!(report.breakdown.emergency_fund, 15);
        assert_eq!(report.score, 100);
        assert_eq!(report.grade.letter, "A+");
    }

    #[test]
    fn break_even_month_scores_f() {
        let report = health_score(HealthInputs {
            total_income: 1000.0,
            total_expense: 1000.0,
            budget_adherence: 0.0,
            savings_rate: 0.0,
            has_emergency_fund: false,
        });

        assert_eq!(report.breakdown.savings_rate, 0);
        assert_eq!(report.breakdown.expense_ratio, 5);
        assert_eq!(report.breakdown.budget_adherence, 0);
        assert_eq!(report.breakdown.emergency_fund, 0);
        assert_eq!(report.score, 5);
        assert_eq!(report.grade.letter, "F");
    }

    #[test]
    fn zero_income_pins_expense_ratio_to_worst_case() {
        let report = health_score(HealthInputs {
            total_income: 0.0,
            total_expense: 0.0,
            budget_adherence: 100.0,
            savings_rate: 0.0,
            has_emergency_fund: false,
        });

        // Ratio pinned to 100% earns the bottom non-zero tier.
        assert_eq!(report.breakdown.expense_ratio, 5);
        assert_eq!(report.breakdown.budget_adherence, 25);
        assert_eq!(report.score, 30);
        assert_eq!(report.grade.letter, "F");
    }

    #[test]
    fn grade_boundaries_are_inclusive() {
        assert_eq!(super::grade_for(90).letter, "A+");
        assert_eq!(super::grade_for(89).letter, "A");
        assert_eq!(super::grade_for(70).letter, "B+");
        assert_eq!(super::grade_for(60).letter, "B");
        assert_eq!(super::grade_for(50).letter, "C");
        assert_eq!(super::grade_for(40).letter, "D");
        assert_eq!(super::grade_for(39).letter, "F");
    }
}
