use serde::Serialize;

use crate::model::{Bill, Budget, SavingsGoal, Transaction};

#[derive(Debug, Clone, Serialize)]
pub struct TotalsData {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionAddData {
    pub row: Transaction,
    pub auto_categorized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionListData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    pub rows: Vec<Transaction>,
    pub totals: TotalsData,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteData {
    pub dataset: &'static str,
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionData {
    pub category: &'static str,
    pub confidence: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorizeData {
    pub description: String,
    pub kind: &'static str,
    pub category: Option<&'static str>,
    pub confidence: u32,
    pub matched_keywords: Vec<&'static str>,
    pub suggestions: Vec<SuggestionData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatusRow {
    pub id: String,
    pub category: &'static str,
    pub amount: f64,
    pub created_at: String,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetListData {
    pub month: u32,
    pub rows: Vec<BudgetStatusRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetSetData {
    pub row: Budget,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalAddData {
    pub row: SavingsGoal,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalContributeData {
    pub row: SavingsGoal,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalListData {
    pub rows: Vec<SavingsGoal>,
    pub active_count: usize,
    pub completed_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillAddData {
    pub row: Bill,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillPayData {
    pub row: Bill,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillListData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_within_days: Option<i64>,
    pub rows: Vec<Bill>,
    pub pending_count: usize,
    pub overdue_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownData {
    pub savings_rate: u32,
    pub expense_ratio: u32,
    pub budget_adherence: u32,
    pub emergency_fund: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeData {
    pub letter: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteData {
    pub tone: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthData {
    pub month: u32,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub savings_rate: f64,
    pub budget_adherence: f64,
    pub has_emergency_fund: bool,
    pub score: u32,
    pub breakdown: BreakdownData,
    pub grade: GradeData,
    pub notes: Vec<NoteData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternData {
    #[serde(rename = "type")]
    pub pattern: &'static str,
    pub severity: &'static str,
    pub title: String,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitData {
    #[serde(rename = "type")]
    pub habit: &'static str,
    pub title: &'static str,
    pub description: String,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastData {
    pub amount: i64,
    pub confidence: &'static str,
    pub trend: &'static str,
    pub trend_percentage: u32,
    pub historical: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryForecastData {
    pub category: &'static str,
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionsData {
    pub next_month: Option<ForecastData>,
    pub by_category: Vec<CategoryForecastData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetProjectionData {
    pub category: &'static str,
    pub budget_amount: f64,
    pub spent: f64,
    pub exceeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_exceed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_exceed_this_month: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_total: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictData {
    pub month: u32,
    pub next_month: Option<ForecastData>,
    pub by_category: Vec<CategoryForecastData>,
    pub budget_projections: Vec<BudgetProjectionData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub priority: &'static str,
    pub title: String,
    pub description: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_saving: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub severity: &'static str,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightsData {
    pub month: u32,
    pub patterns: Vec<PatternData>,
    pub positive_habits: Vec<HabitData>,
    pub predictions: PredictionsData,
    pub recommendations: Vec<RecommendationData>,
    pub alerts: Vec<AlertData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackupCounts {
    pub transactions: usize,
    pub budgets: usize,
    pub goals: usize,
    pub bills: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackupExportData {
    pub path: String,
    pub version: &'static str,
    pub export_date: String,
    pub counts: BackupCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackupImportData {
    pub path: String,
    pub message: String,
    pub counts: BackupCounts,
}
