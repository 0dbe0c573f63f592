use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};
use super::records_text::{amount_string, text};

pub fn render_health(data: &Value) -> io::Result<String> {
    let grade = &data["grade"];
    let mut lines = vec![
        format!(
            "Financial Health Score: {}/100, grade {} ({})",
            data["score"],
            grade["letter"].as_str().unwrap_or("?"),
            grade["label"].as_str().unwrap_or("unknown")
        ),
        String::new(),
        "Breakdown:".to_string(),
    ];
    lines.extend(format::key_value_rows(
        &[
            (
                "Savings rate:",
                format!(
                    "{} pts ({}%)",
                    data["breakdown"]["savings_rate"],
                    data["savings_rate"].as_f64().unwrap_or(0.0).round()
                ),
            ),
            ("Expense ratio:", format!("{} pts", data["breakdown"]["expense_ratio"])),
            (
                "Budget adherence:",
                format!(
                    "{} pts ({}%)",
                    data["breakdown"]["budget_adherence"],
                    data["budget_adherence"].as_f64().unwrap_or(0.0).round()
                ),
            ),
            ("Emergency fund:", format!("{} pts", data["breakdown"]["emergency_fund"])),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("This month:".to_string());
    lines.extend(format::key_value_rows(
        &[
            ("Income:", amount_string(&data["total_income"])),
            ("Expense:", amount_string(&data["total_expense"])),
            ("Balance:", amount_string(&data["balance"])),
        ],
        2,
    ));

    let notes = data["notes"].as_array().cloned().unwrap_or_default();
    if !notes.is_empty() {
        lines.push(String::new());
        for note in &notes {
            let marker = if note["tone"] == "success" { "✓" } else { "!" };
            lines.push(format!("  {marker} {}", text(note, "message")));
        }
    }
    Ok(lines.join("\n"))
}

pub fn render_insights(data: &Value) -> io::Result<String> {
    let mut lines = vec![format!(
        "Insights for month {}:",
        data["month"].as_u64().unwrap_or(0) + 1
    )];

    let patterns = data["patterns"].as_array().cloned().unwrap_or_default();
    lines.push(String::new());
    lines.push("Spending patterns:".to_string());
    if patterns.is_empty() {
        lines.push("  Nothing unusual detected.".to_string());
    }
    for pattern in &patterns {
        lines.push(format!(
            "  [{}] {}",
            text(pattern, "severity"),
            text(pattern, "title")
        ));
        lines.push(format!("      {}", text(pattern, "description")));
        lines.push(format!("      Tip: {}", text(pattern, "recommendation")));
    }

    let habits = data["positive_habits"].as_array().cloned().unwrap_or_default();
    lines.push(String::new());
    lines.push("Positive habits:".to_string());
    if habits.is_empty() {
        lines.push("  None yet. Keep at it!".to_string());
    }
    for habit in &habits {
        lines.push(format!("  {} {}", text(habit, "emoji"), text(habit, "title")));
        lines.push(format!("      {}", text(habit, "description")));
    }

    lines.push(String::new());
    lines.push("Predictions:".to_string());
    lines.extend(forecast_lines(data));

    let recommendations = data["recommendations"].as_array().cloned().unwrap_or_default();
    lines.push(String::new());
    lines.push("Recommendations:".to_string());
    if recommendations.is_empty() {
        lines.push("  Nothing to suggest right now.".to_string());
    }
    for recommendation in &recommendations {
        lines.push(format!(
            "  [{}] {}",
            text(recommendation, "priority"),
            text(recommendation, "title")
        ));
        lines.push(format!("      {}", text(recommendation, "description")));
        lines.push(format!("      Action: {}", text(recommendation, "action")));
        if let Some(saving) = recommendation["potential_saving"].as_i64() {
            lines.push(format!(
                "      Potential saving: {}",
                amount_string(&Value::from(saving))
            ));
        }
    }

    let alerts = data["alerts"].as_array().cloned().unwrap_or_default();
    lines.push(String::new());
    lines.push("Alerts:".to_string());
    if alerts.is_empty() {
        lines.push("  All clear.".to_string());
    }
    for alert in &alerts {
        lines.push(format!(
            "  [{}] {}: {}",
            text(alert, "severity"),
            text(alert, "title"),
            text(alert, "message")
        ));
    }

    Ok(lines.join("\n"))
}

pub fn render_predict(data: &Value) -> io::Result<String> {
    let mut lines = vec![format!(
        "Projections from month {}:",
        data["month"].as_u64().unwrap_or(0) + 1
    )];
    lines.push(String::new());
    lines.extend(forecast_lines(data));

    let projections = data["budget_projections"].as_array().cloned().unwrap_or_default();
    if !projections.is_empty() {
        lines.push(String::new());
        lines.push("Budget projections:".to_string());
        for projection in &projections {
            if projection["exceeded"].as_bool() == Some(true) {
                lines.push(format!(
                    "  {}: already over budget ({} spent of {})",
                    text(projection, "category"),
                    amount_string(&projection["spent"]),
                    amount_string(&projection["budget_amount"])
                ));
                continue;
            }
            let qualifier = if projection["will_exceed_this_month"].as_bool() == Some(true) {
                "before month-end"
            } else {
                "after month-end"
            };
            lines.push(format!(
                "  {}: {} day(s) until the ceiling at the current rate ({}), projected month-end total {}",
                text(projection, "category"),
                projection["days_until_exceed"],
                qualifier,
                amount_string(&projection["projected_total"])
            ));
        }
    }
    Ok(lines.join("\n"))
}

fn forecast_lines(data: &Value) -> Vec<String> {
    let mut lines = Vec::new();

    let next_month = data
        .get("predictions")
        .map(|predictions| &predictions["next_month"])
        .unwrap_or(&data["next_month"]);
    if next_month.is_null() {
        lines.push("  Not enough history to project next month.".to_string());
    } else {
        lines.push(format!(
            "  Next month: about {} ({} confidence, {} {}%)",
            amount_string(&next_month["amount"]),
            text(next_month, "confidence"),
            text(next_month, "trend"),
            next_month["trend_percentage"]
        ));
    }

    let by_category = data
        .get("predictions")
        .map(|predictions| &predictions["by_category"])
        .unwrap_or(&data["by_category"])
        .as_array()
        .cloned()
        .unwrap_or_default();
    if !by_category.is_empty() {
        let columns = [
            Column {
                name: "Category",
                align: Align::Left,
            },
            Column {
                name: "Projected",
                align: Align::Right,
            },
        ];
        let rows: Vec<Vec<String>> = by_category
            .iter()
            .map(|row| {
                vec![
                    text(row, "category"),
                    amount_string(&row["amount"]),
                ]
            })
            .collect();
        lines.extend(format::render_table(&columns, &rows));
    }

    lines
}
