use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::model::TransactionKind;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `pocketwise {cmd} --help` for usage."),
            None => "Run `pocketwise --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn unknown_category(value: &str, kind: TransactionKind, valid: &[&'static str]) -> Self {
        Self::new(
            "unknown_category",
            &format!("`{value}` is not a {} category.", kind.as_str()),
            vec![
                format!("Use one of: {}.", valid.join(", ")),
                "Omit --category to let Pocketwise categorize from the description.".to_string(),
            ],
        )
        .with_data(json!({
            "received": value,
            "kind": kind.as_str(),
            "valid_categories": valid,
        }))
    }

    pub fn uncategorized_description(description: &str, suggestions: Value) -> Self {
        Self::new(
            "uncategorized_description",
            &format!("Could not confidently categorize `{description}`."),
            vec![
                "Pass an explicit --category.".to_string(),
                "Run `pocketwise txn categorize <description>` to preview keyword matches."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "description": description,
            "suggestions": suggestions,
        }))
    }

    pub fn record_not_found(dataset: &str, id: &str) -> Self {
        Self::new(
            &format!("{dataset}_not_found"),
            &format!("No {dataset} with id `{id}` exists."),
            vec![format!(
                "Run `pocketwise {} list` to find a valid id.",
                list_command_for(dataset)
            )],
        )
        .with_data(json!({
            "dataset": dataset,
            "id": id,
        }))
    }

    pub fn duplicate_budget(category: &str) -> Self {
        Self::new(
            "duplicate_budget",
            &format!("A budget for `{category}` already exists."),
            vec![
                "Delete the existing budget with `pocketwise budget delete <id>` first."
                    .to_string(),
                "Run `pocketwise budget list` to inspect current budgets.".to_string(),
            ],
        )
        .with_data(json!({
            "category": category,
        }))
    }

    pub fn bill_already_paid(id: &str) -> Self {
        Self::new(
            "bill_already_paid",
            &format!("Bill `{id}` was already marked paid."),
            vec!["Run `pocketwise bill list` to inspect bill statuses.".to_string()],
        )
        .with_data(json!({
            "id": id,
        }))
    }

    pub fn backup_read_failed(path: &str, detail: &str) -> Self {
        Self::new(
            "backup_read_failed",
            &format!("Cannot read backup file `{path}`: {detail}"),
            vec!["Check that the path exists and is readable.".to_string()],
        )
    }

    pub fn backup_write_failed(path: &str, detail: &str) -> Self {
        Self::new(
            "backup_write_failed",
            &format!("Cannot write backup file `{path}`: {detail}"),
            vec!["Check that the target directory exists and is writable.".to_string()],
        )
    }

    pub fn backup_malformed(path: &str, detail: &str) -> Self {
        Self::new(
            "backup_malformed",
            &format!("Backup file `{path}` is not a valid Pocketwise export: {detail}"),
            vec![
                "Re-export with `pocketwise backup export <path>` and retry.".to_string(),
                "Imports replace all four datasets, so the file must contain transactions, budgets, goals, and bills arrays.".to_string(),
            ],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn store_init_permission_denied(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_permission_denied",
            &format!("Cannot initialize data store at `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or set `POCKETWISE_HOME` to a writable directory."
            )],
        )
    }

    pub fn store_locked(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_locked",
            &format!("Data store is locked at `{location}`."),
            vec![format!(
                "Close other processes using `{location}` so the lock is released."
            )],
        )
    }

    pub fn store_corrupt(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_corrupt",
            &format!("Data store appears corrupt at `{location}`."),
            vec![format!(
                "Replace `{location}` with a valid store file or restore from a backup export."
            )],
        )
    }

    pub fn migration_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "migration_failed",
            &format!("Store migration failed at `{location}`: {detail}"),
            vec!["Resolve conflicting schema objects referenced in the error details.".to_string()],
        )
    }

    pub fn store_init_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "store_init_failed",
            &format!("Data store initialization failed at `{location}`: {detail}"),
            Vec::new(),
        )
    }
}

fn list_command_for(dataset: &str) -> &str {
    match dataset {
        "transaction" => "txn",
        "budget" => "budget",
        "goal" => "goal",
        "bill" => "bill",
        other => other,
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
