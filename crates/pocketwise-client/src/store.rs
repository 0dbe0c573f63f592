use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, Error as SqliteError, OptionalExtension, ffi::ErrorCode, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::migrations;
use crate::{ClientError, ClientResult};

/// Logical dataset names. Each one maps to a single key-value row holding
/// the whole collection as one JSON blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Transactions,
    Budgets,
    Goals,
    Bills,
}

impl Dataset {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Transactions => "transactions",
            Self::Budgets => "budgets",
            Self::Goals => "goals",
            Self::Bills => "bills",
        }
    }
}

pub struct Store {
    connection: Connection,
    db_path: PathBuf,
}

impl Store {
    pub fn open(home_override: Option<&Path>) -> ClientResult<Self> {
        let data_home = resolve_data_home(home_override)?;
        ensure_data_directory(&data_home)?;

        let db_path = store_db_path(&data_home);
        let mut connection = open_connection(&db_path)?;
        migrations::run_pending(&mut connection)
            .map_err(|error| map_migration_error(&db_path, &error))?;

        Ok(Self {
            connection,
            db_path,
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Reads a whole dataset. Any failure (missing row, unreadable
    /// payload, rows that no longer decode) yields an empty collection;
    /// absent data is not an error.
    pub fn load<T>(&self, dataset: Dataset) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        let payload: Option<String> = self
            .connection
            .query_row(
                "SELECT payload FROM datasets WHERE name = ?1",
                params![dataset.key()],
                |row| row.get(0),
            )
            .optional()
            .ok()
            .flatten();

        let Some(body) = payload else {
            return Vec::new();
        };
        serde_json::from_str(&body).unwrap_or_default()
    }

    /// Replaces a whole dataset. Last full write wins; there is no
    /// field-level or row-level update path.
    pub fn save<T>(&self, dataset: Dataset, records: &[T]) -> ClientResult<()>
    where
        T: Serialize,
    {
        let payload = serde_json::to_string(records)
            .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;

        self.connection
            .execute(
                "INSERT INTO datasets (name, payload, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(name) DO UPDATE SET
                     payload = excluded.payload,
                     updated_at = excluded.updated_at",
                params![dataset.key(), payload, epoch_timestamp()],
            )
            .map_err(|error| map_sqlite_error(&self.db_path, &error))?;
        Ok(())
    }
}

pub fn resolve_data_home(home_override: Option<&Path>) -> ClientResult<PathBuf> {
    let candidate = match home_override {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(override_path) = std::env::var_os("POCKETWISE_HOME") {
                PathBuf::from(override_path)
            } else if let Some(home_path) = home::home_dir() {
                home_path.join(".pocketwise")
            } else {
                return Err(ClientError::store_init_failed(
                    Path::new("."),
                    "Could not resolve a home directory for the data store.",
                ));
            }
        }
    };

    absolutize(&candidate)
}

pub fn ensure_data_directory(path: &Path) -> ClientResult<()> {
    fs::create_dir_all(path).map_err(|error| map_io_error(path, &error))?;
    set_private_permissions_best_effort(path);
    Ok(())
}

pub fn store_db_path(home: &Path) -> PathBuf {
    home.join("pocketwise.db")
}

pub fn open_connection(db_path: &Path) -> ClientResult<Connection> {
    let connection =
        Connection::open(db_path).map_err(|error| map_sqlite_error(db_path, &error))?;
    connection
        .busy_timeout(Duration::from_millis(250))
        .map_err(|error| map_sqlite_error(db_path, &error))?;
    Ok(connection)
}

pub fn map_io_error(path: &Path, error: &std::io::Error) -> ClientError {
    if error.kind() == std::io::ErrorKind::PermissionDenied {
        return ClientError::store_init_permission_denied(path, &error.to_string());
    }

    ClientError::store_init_failed(path, &error.to_string())
}

pub fn map_sqlite_error(path: &Path, error: &SqliteError) -> ClientError {
    let error_code = error.sqlite_error_code();

    if matches!(
        error_code,
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
    ) {
        return ClientError::store_locked(path);
    }

    if matches!(error_code, Some(ErrorCode::NotADatabase)) {
        return ClientError::store_corrupt(path);
    }

    if matches!(
        error_code,
        Some(ErrorCode::CannotOpen | ErrorCode::ReadOnly)
    ) {
        return ClientError::store_init_permission_denied(path, &error.to_string());
    }

    ClientError::store_init_failed(path, &error.to_string())
}

fn map_migration_error(db_path: &Path, error: &rusqlite_migration::Error) -> ClientError {
    match error {
        rusqlite_migration::Error::RusqliteError { query: _, err } => {
            map_sqlite_error(db_path, err)
        }
        other => ClientError::migration_failed(db_path, &other.to_string()),
    }
}

pub(crate) fn epoch_timestamp() -> String {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => format!("{}", duration.as_secs()),
        Err(_) => "0".to_string(),
    }
}

fn absolutize(path: &Path) -> ClientResult<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|error| ClientError::store_init_failed(path, &error.to_string()))
}

#[cfg(unix)]
fn set_private_permissions_best_effort(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o700));
}

#[cfg(not(unix))]
fn set_private_permissions_best_effort(_path: &Path) {}

#[cfg(test)]
mod tests {
    use rusqlite::params;
    use tempfile::TempDir;

    use crate::model::{Budget, ExpenseCategory};

    use super::{Dataset, Store};

    fn temp_store() -> Option<(TempDir, Store)> {
        let dir = tempfile::Builder::new()
            .prefix("pocketwise-store")
            .tempdir_in("/tmp")
            .ok()?;
        let store = Store::open(Some(dir.path())).ok()?;
        Some((dir, store))
    }

    fn budget(id: &str, category: ExpenseCategory, amount: f64) -> Budget {
        Budget {
            id: id.to_string(),
            category,
            amount,
            created_at: "2026-08-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn missing_dataset_reads_as_empty() {
        let opened = temp_store();
        assert!(opened.is_some());
        if let Some((_dir, store)) = opened {
            let budgets: Vec<Budget> = store.load(Dataset::Budgets);
            assert!(budgets.is_empty());
        }
    }

    #[test]
    fn save_then_load_round_trips_the_collection() {
        let opened = temp_store();
        assert!(opened.is_some());
        if let Some((_dir, store)) = opened {
            let rows = vec![
                budget("bud_1", ExpenseCategory::Makanan, 500_000.0),
                budget("bud_2", ExpenseCategory::Transport, 200_000.0),
            ];
            assert!(store.save(Dataset::Budgets, &rows).is_ok());

            let loaded: Vec<Budget> = store.load(Dataset::Budgets);
            assert_eq!(loaded, rows);
        }
    }

    #[test]
    fn second_save_replaces_the_whole_blob() {
        let opened = temp_store();
        assert!(opened.is_some());
        if let Some((_dir, store)) = opened {
            let first = vec![budget("bud_1", ExpenseCategory::Makanan, 500_000.0)];
            let second = vec![budget("bud_2", ExpenseCategory::Hiburan, 100_000.0)];
            assert!(store.save(Dataset::Budgets, &first).is_ok());
            assert!(store.save(Dataset::Budgets, &second).is_ok());

            let loaded: Vec<Budget> = store.load(Dataset::Budgets);
            assert_eq!(loaded, second);
        }
    }

    #[test]
    fn malformed_payload_reads_as_empty() {
        let opened = temp_store();
        assert!(opened.is_some());
        if let Some((_dir, store)) = opened {
            let written = store.connection.execute(
                "INSERT INTO datasets (name, payload, updated_at) VALUES (?1, ?2, ?3)",
                params!["budgets", "not json", "0"],
            );
            assert!(written.is_ok());

            let budgets: Vec<Budget> = store.load(Dataset::Budgets);
            assert!(budgets.is_empty());
        }
    }
}
