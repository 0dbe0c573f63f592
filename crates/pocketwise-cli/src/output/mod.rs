mod error_text;
mod format;
mod insights_text;
mod json;
mod mode;
mod records_text;

use std::io;

use pocketwise_client::{ClientError, SuccessEnvelope};

pub use mode::{OutputMode, infer_requested_output_mode, mode_for_command};

use crate::stdout_io::write_stdout_text;

pub fn print_success(success: &SuccessEnvelope, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Text => render_text_success(success)?,
        OutputMode::Json => json::render_success_json(success)?,
    };
    write_stdout_text(&format!("{body}\n"))
}

pub fn print_failure(error: &ClientError, mode: OutputMode) -> io::Result<()> {
    let body = match mode {
        OutputMode::Json => json::render_error_json(error)?,
        OutputMode::Text => error_text::render_error(error),
    };
    write_stdout_text(&format!("{body}\n"))
}

fn render_text_success(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "txn add" => records_text::render_txn_add(&success.data),
        "txn list" => records_text::render_txn_list(&success.data),
        "txn categorize" => records_text::render_categorize(&success.data),
        "budget set" => records_text::render_budget_set(&success.data),
        "budget list" => records_text::render_budget_list(&success.data),
        "goal add" => records_text::render_goal_add(&success.data),
        "goal contribute" => records_text::render_goal_contribute(&success.data),
        "goal list" => records_text::render_goal_list(&success.data),
        "bill add" => records_text::render_bill_add(&success.data),
        "bill list" => records_text::render_bill_list(&success.data),
        "bill pay" => records_text::render_bill_pay(&success.data),
        "txn delete" | "budget delete" | "goal delete" | "bill delete" => {
            records_text::render_delete(&success.data)
        }
        "insights" => insights_text::render_insights(&success.data),
        "health" => insights_text::render_health(&success.data),
        "predict" => insights_text::render_predict(&success.data),
        "backup export" => records_text::render_backup_export(&success.data),
        "backup import" => records_text::render_backup_import(&success.data),
        _ => Err(io::Error::other(format!(
            "unsupported text output command `{}`",
            success.command
        ))),
    }
}
