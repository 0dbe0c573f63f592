use std::io;

use serde_json::Value;

use super::format::{self, Align, Column};

pub fn render_txn_add(data: &Value) -> io::Result<String> {
    let row = &data["row"];
    let mut lines = vec![
        format!(
            "Logged {} `{}` of {}.",
            text(row, "type"),
            text(row, "category"),
            amount_string(&row["amount"])
        ),
        String::new(),
    ];

    let mut entries = vec![
        ("Id:", text(row, "id")),
        ("Date:", text(row, "date")),
        ("Description:", text(row, "description")),
    ];
    if data["auto_categorized"].as_bool() == Some(true) {
        entries.push((
            "Categorized:",
            format!("automatically ({}% confidence)", data["confidence"]),
        ));
    }
    lines.extend(format::key_value_rows(&entries, 2));
    Ok(lines.join("\n"))
}

pub fn render_txn_list(data: &Value) -> io::Result<String> {
    let rows = expect_rows(data)?;
    if rows.is_empty() {
        return Ok([
            "No transactions found.",
            "",
            "Log one with `pocketwise txn add <description> --amount <amount>`.",
        ]
        .join("\n"));
    }

    let mut lines = vec![transactions_heading(rows.len(), data.get("month")), String::new()];

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Type",
            align: Align::Left,
        },
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Description",
            align: Align::Left,
        },
        Column {
            name: "Id",
            align: Align::Left,
        },
    ];
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                text(row, "date").chars().take(10).collect(),
                text(row, "type"),
                text(row, "category"),
                amount_string(&row["amount"]),
                text(row, "description"),
                text(row, "id"),
            ]
        })
        .collect();
    lines.extend(format::render_table(&columns, &table_rows));

    lines.push(String::new());
    lines.push("Totals:".to_string());
    lines.extend(format::key_value_rows(
        &[
            ("Income:", amount_string(&data["totals"]["income"])),
            ("Expense:", amount_string(&data["totals"]["expense"])),
            ("Balance:", amount_string(&data["totals"]["balance"])),
        ],
        2,
    ));
    Ok(lines.join("\n"))
}

pub fn render_delete(data: &Value) -> io::Result<String> {
    Ok(text(data, "message"))
}

pub fn render_categorize(data: &Value) -> io::Result<String> {
    let mut lines = Vec::new();
    match data["category"].as_str() {
        Some(category) => lines.push(format!(
            "Best match: {} ({}% confidence)",
            category, data["confidence"]
        )),
        None => lines.push("No confident match for this description.".to_string()),
    }

    let keywords: Vec<String> = data["matched_keywords"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .filter_map(|keyword| keyword.as_str().map(str::to_string))
        .collect();
    if !keywords.is_empty() {
        lines.push(format!("Matched keywords: {}", keywords.join(", ")));
    }

    let suggestions = data["suggestions"].as_array().cloned().unwrap_or_default();
    if !suggestions.is_empty() {
        lines.push(String::new());
        lines.push("Suggestions:".to_string());
        let columns = [
            Column {
                name: "Category",
                align: Align::Left,
            },
            Column {
                name: "Confidence",
                align: Align::Right,
            },
        ];
        let table_rows: Vec<Vec<String>> = suggestions
            .iter()
            .map(|row| {
                vec![
                    text(row, "category"),
                    format!("{}%", row["confidence"]),
                ]
            })
            .collect();
        lines.extend(format::render_table(&columns, &table_rows));
    }
    Ok(lines.join("\n"))
}

pub fn render_budget_set(data: &Value) -> io::Result<String> {
    let row = &data["row"];
    let mut lines = vec![
        format!(
            "Budget set: {} at {} per month.",
            text(row, "category"),
            amount_string(&row["amount"])
        ),
        String::new(),
    ];
    lines.extend(format::key_value_rows(&[("Id:", text(row, "id"))], 2));
    Ok(lines.join("\n"))
}

pub fn render_budget_list(data: &Value) -> io::Result<String> {
    let rows = expect_rows(data)?;
    if rows.is_empty() {
        return Ok([
            "No budgets set.",
            "",
            "Create one with `pocketwise budget set <category> --amount <amount>`.",
        ]
        .join("\n"));
    }

    let mut lines = vec![
        format!("{} budget(s) for month {}:", rows.len(), month_display(data.get("month"))),
        String::new(),
    ];
    let columns = [
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Ceiling",
            align: Align::Right,
        },
        Column {
            name: "Spent",
            align: Align::Right,
        },
        Column {
            name: "Remaining",
            align: Align::Right,
        },
        Column {
            name: "Used",
            align: Align::Right,
        },
        Column {
            name: "Status",
            align: Align::Left,
        },
        Column {
            name: "Id",
            align: Align::Left,
        },
    ];
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                text(row, "category"),
                amount_string(&row["amount"]),
                amount_string(&row["spent"]),
                amount_string(&row["remaining"]),
                format!("{}%", row["percentage"].as_f64().unwrap_or(0.0).round()),
                text(row, "status"),
                text(row, "id"),
            ]
        })
        .collect();
    lines.extend(format::render_table(&columns, &table_rows));
    Ok(lines.join("\n"))
}

pub fn render_goal_add(data: &Value) -> io::Result<String> {
    let row = &data["row"];
    let mut lines = vec![
        format!(
            "Goal created: {} {} (target {}).",
            text(row, "icon"),
            text(row, "name"),
            amount_string(&row["targetAmount"])
        ),
        String::new(),
    ];
    let mut entries = vec![("Id:", text(row, "id"))];
    if let Some(deadline) = row["deadline"].as_str() {
        entries.push(("Deadline:", deadline.to_string()));
    }
    lines.extend(format::key_value_rows(&entries, 2));
    Ok(lines.join("\n"))
}

pub fn render_goal_contribute(data: &Value) -> io::Result<String> {
    let row = &data["row"];
    let mut lines = vec![format!(
        "Saved {} of {} for `{}`.",
        amount_string(&row["currentAmount"]),
        amount_string(&row["targetAmount"]),
        text(row, "name")
    )];
    if data["completed"].as_bool() == Some(true) {
        lines.push("🎉 Goal completed!".to_string());
    }
    Ok(lines.join("\n"))
}

pub fn render_goal_list(data: &Value) -> io::Result<String> {
    let rows = expect_rows(data)?;
    if rows.is_empty() {
        return Ok([
            "No savings goals.",
            "",
            "Create one with `pocketwise goal add <name> --target <amount>`.",
        ]
        .join("\n"));
    }

    let mut lines = vec![
        format!(
            "{} active, {} completed:",
            data["active_count"], data["completed_count"]
        ),
        String::new(),
    ];
    let columns = [
        Column {
            name: "Goal",
            align: Align::Left,
        },
        Column {
            name: "Saved",
            align: Align::Right,
        },
        Column {
            name: "Target",
            align: Align::Right,
        },
        Column {
            name: "Progress",
            align: Align::Right,
        },
        Column {
            name: "Status",
            align: Align::Left,
        },
        Column {
            name: "Id",
            align: Align::Left,
        },
    ];
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let saved = row["currentAmount"].as_f64().unwrap_or(0.0);
            let target = row["targetAmount"].as_f64().unwrap_or(0.0);
            let progress = if target > 0.0 {
                (saved / target * 100.0).round()
            } else {
                0.0
            };
            vec![
                format!("{} {}", text(row, "icon"), text(row, "name")),
                amount_string(&row["currentAmount"]),
                amount_string(&row["targetAmount"]),
                format!("{progress}%"),
                text(row, "status"),
                text(row, "id"),
            ]
        })
        .collect();
    lines.extend(format::render_table(&columns, &table_rows));
    Ok(lines.join("\n"))
}

pub fn render_bill_add(data: &Value) -> io::Result<String> {
    let row = &data["row"];
    let mut lines = vec![
        format!(
            "Bill registered: {} of {} due {}.",
            text(row, "name"),
            amount_string(&row["amount"]),
            text(row, "dueDate")
        ),
        String::new(),
    ];
    lines.extend(format::key_value_rows(&[("Id:", text(row, "id"))], 2));
    Ok(lines.join("\n"))
}

pub fn render_bill_pay(data: &Value) -> io::Result<String> {
    let row = &data["row"];
    Ok(format!(
        "Marked `{}` as paid ({}).",
        text(row, "name"),
        amount_string(&row["amount"])
    ))
}

pub fn render_bill_list(data: &Value) -> io::Result<String> {
    let rows = expect_rows(data)?;
    if rows.is_empty() {
        let heading = match data["due_within_days"].as_i64() {
            Some(days) => format!("No pending bills due within {days} days."),
            None => "No bills registered.".to_string(),
        };
        return Ok(heading);
    }

    let mut lines = vec![bill_heading(rows.len(), data), String::new()];
    let columns = [
        Column {
            name: "Name",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
        Column {
            name: "Due",
            align: Align::Left,
        },
        Column {
            name: "Category",
            align: Align::Left,
        },
        Column {
            name: "Status",
            align: Align::Left,
        },
        Column {
            name: "Id",
            align: Align::Left,
        },
    ];
    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                text(row, "name"),
                amount_string(&row["amount"]),
                text(row, "dueDate"),
                text(row, "category"),
                text(row, "status"),
                text(row, "id"),
            ]
        })
        .collect();
    lines.extend(format::render_table(&columns, &table_rows));

    if let Some(overdue) = data["overdue_count"].as_u64()
        && overdue > 0
    {
        lines.push(String::new());
        lines.push(format!("⚠ {overdue} pending bill(s) overdue."));
    }
    Ok(lines.join("\n"))
}

pub fn render_backup_export(data: &Value) -> io::Result<String> {
    let counts = &data["counts"];
    Ok(format!(
        "Exported {} transactions, {} budgets, {} goals, and {} bills to {}.",
        counts["transactions"], counts["budgets"], counts["goals"], counts["bills"],
        text(data, "path")
    ))
}

pub fn render_backup_import(data: &Value) -> io::Result<String> {
    Ok(text(data, "message"))
}

fn transactions_heading(count: usize, month: Option<&Value>) -> String {
    match month.and_then(Value::as_u64) {
        Some(index) => format!("{count} transaction(s) in month {}:", index + 1),
        None => format!("{count} transaction(s):"),
    }
}

fn bill_heading(count: usize, data: &Value) -> String {
    match data["due_within_days"].as_i64() {
        Some(days) => format!("{count} bill(s) due within {days} days:"),
        None => format!("{count} bill(s):"),
    }
}

fn month_display(month: Option<&Value>) -> String {
    month
        .and_then(Value::as_u64)
        .map(|index| (index + 1).to_string())
        .unwrap_or_else(|| "?".to_string())
}

pub(crate) fn text(value: &Value, key: &str) -> String {
    value[key].as_str().unwrap_or("unknown").to_string()
}

pub(crate) fn amount_string(value: &Value) -> String {
    let Some(amount) = value.as_f64() else {
        return "0".to_string();
    };
    let rounded = amount.round() as i64;
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

fn expect_rows(data: &Value) -> io::Result<Vec<Value>> {
    data.get("rows")
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| io::Error::other("list output requires rows"))
}
