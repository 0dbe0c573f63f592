use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::commands::common::{now_utc, rfc3339_timestamp};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{BackupCounts, BackupExportData, BackupImportData};
use crate::model::{Bill, Budget, SavingsGoal, Transaction};
use crate::store::{Dataset, Store};
use crate::{ClientError, ClientResult};

/// Schema tag written into every export. Recorded for forward
/// compatibility; import does not interpret it.
pub const BACKUP_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub export_date: String,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub goals: Vec<SavingsGoal>,
    pub bills: Vec<Bill>,
}

#[derive(Debug, Default)]
pub struct BackupOptions<'a> {
    pub path: String,
    pub home_override: Option<&'a Path>,
}

pub fn export(path: &str) -> ClientResult<SuccessEnvelope> {
    export_with_options(BackupOptions {
        path: path.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn export_with_options(options: BackupOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let store = Store::open(options.home_override)?;
    let document = BackupDocument {
        version: BACKUP_SCHEMA_VERSION.to_string(),
        export_date: rfc3339_timestamp(now_utc()),
        transactions: store.load(Dataset::Transactions),
        budgets: store.load(Dataset::Budgets),
        goals: store.load(Dataset::Goals),
        bills: store.load(Dataset::Bills),
    };

    let body = serde_json::to_string_pretty(&document)
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
    fs::write(&options.path, body)
        .map_err(|error| ClientError::backup_write_failed(&options.path, &error.to_string()))?;

    success(
        "backup export",
        BackupExportData {
            path: options.path.clone(),
            version: BACKUP_SCHEMA_VERSION,
            counts: counts_of(&document),
            export_date: document.export_date,
        },
    )
}

pub fn import(path: &str) -> ClientResult<SuccessEnvelope> {
    import_with_options(BackupOptions {
        path: path.to_string(),
        home_override: None,
    })
}

/// Whole-collection overwrite per dataset; nothing is merged.
#[doc(hidden)]
pub fn import_with_options(options: BackupOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let body = fs::read_to_string(&options.path)
        .map_err(|error| ClientError::backup_read_failed(&options.path, &error.to_string()))?;
    let document: BackupDocument = serde_json::from_str(&body)
        .map_err(|error| ClientError::backup_malformed(&options.path, &error.to_string()))?;

    let store = Store::open(options.home_override)?;
    store.save(Dataset::Transactions, &document.transactions)?;
    store.save(Dataset::Budgets, &document.budgets)?;
    store.save(Dataset::Goals, &document.goals)?;
    store.save(Dataset::Bills, &document.bills)?;

    let counts = counts_of(&document);
    success(
        "backup import",
        BackupImportData {
            path: options.path.clone(),
            message: format!(
                "Imported {} transactions, {} budgets, {} goals, and {} bills.",
                counts.transactions, counts.budgets, counts.goals, counts.bills
            ),
            counts,
        },
    )
}

fn counts_of(document: &BackupDocument) -> BackupCounts {
    BackupCounts {
        transactions: document.transactions.len(),
        budgets: document.budgets.len(),
        goals: document.goals.len(),
        bills: document.bills.len(),
    }
}
