use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDate, Utc};
use ulid::Ulid;

pub(crate) fn now_utc() -> DateTime<Utc> {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or(0);
    DateTime::<Utc>::from_timestamp(i64::try_from(seconds).unwrap_or(0), 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

pub(crate) fn rfc3339_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Tests pin the calendar day through the command options; normal runs
/// take it from the clock.
pub(crate) fn resolve_today(override_date: Option<NaiveDate>) -> NaiveDate {
    override_date.unwrap_or_else(|| now_utc().date_naive())
}

pub(crate) fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Ulid::new())
}
