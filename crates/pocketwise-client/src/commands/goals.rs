use std::path::Path;

use crate::commands::common::{new_id, now_utc, rfc3339_timestamp};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{DeleteData, GoalAddData, GoalContributeData, GoalListData};
use crate::engine::date::parse_iso_date;
use crate::model::{GoalStatus, SavingsGoal};
use crate::store::{Dataset, Store};
use crate::{ClientError, ClientResult};

const DEFAULT_GOAL_ICON: &str = "🎯";

#[derive(Debug, Default)]
pub struct GoalAddOptions<'a> {
    pub name: String,
    pub target_amount: f64,
    pub icon: Option<String>,
    pub deadline: Option<String>,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct GoalContributeOptions<'a> {
    pub id: String,
    pub amount: f64,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct GoalListOptions<'a> {
    pub status: Option<GoalStatus>,
    pub home_override: Option<&'a Path>,
}

#[derive(Debug, Default)]
pub struct GoalDeleteOptions<'a> {
    pub id: String,
    pub home_override: Option<&'a Path>,
}

pub fn add(name: &str, target_amount: f64, deadline: Option<&str>) -> ClientResult<SuccessEnvelope> {
    add_with_options(GoalAddOptions {
        name: name.to_string(),
        target_amount,
        icon: None,
        deadline: deadline.map(std::string::ToString::to_string),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn add_with_options(options: GoalAddOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let name = options.name.trim().to_string();
    if name.is_empty() {
        return Err(ClientError::invalid_argument_for_command(
            "`name` must not be empty.",
            Some("goal add"),
        ));
    }
    if !options.target_amount.is_finite() || options.target_amount <= 0.0 {
        return Err(ClientError::invalid_argument_for_command(
            "`target` must be a positive number.",
            Some("goal add"),
        ));
    }
    if let Some(deadline) = options.deadline.as_deref()
        && parse_iso_date(deadline).is_none()
    {
        return Err(ClientError::invalid_argument_for_command(
            "`deadline` must use YYYY-MM-DD format with a real calendar date.",
            Some("goal add"),
        ));
    }

    let store = Store::open(options.home_override)?;
    let mut goals: Vec<SavingsGoal> = store.load(Dataset::Goals);

    let row = SavingsGoal {
        id: new_id("goal"),
        name,
        icon: options
            .icon
            .filter(|icon| !icon.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GOAL_ICON.to_string()),
        target_amount: options.target_amount,
        current_amount: 0.0,
        deadline: options.deadline,
        status: GoalStatus::Active,
        created_at: rfc3339_timestamp(now_utc()),
        completed_at: None,
    };
    goals.push(row.clone());
    store.save(Dataset::Goals, &goals)?;

    success("goal add", GoalAddData { row })
}

pub fn contribute(id: &str, amount: f64) -> ClientResult<SuccessEnvelope> {
    contribute_with_options(GoalContributeOptions {
        id: id.to_string(),
        amount,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn contribute_with_options(options: GoalContributeOptions<'_>) -> ClientResult<SuccessEnvelope> {
    if !options.amount.is_finite() || options.amount <= 0.0 {
        return Err(ClientError::invalid_argument_for_command(
            "`amount` must be a positive number.",
            Some("goal contribute"),
        ));
    }

    let store = Store::open(options.home_override)?;
    let mut goals: Vec<SavingsGoal> = store.load(Dataset::Goals);

    let Some(goal) = goals.iter_mut().find(|goal| goal.id == options.id) else {
        return Err(ClientError::record_not_found("goal", &options.id));
    };

    // Contributions only ever increase the balance. Completion fires once,
    // the first time the target is reached.
    goal.current_amount += options.amount;
    let mut completed = false;
    if goal.status == GoalStatus::Active && goal.current_amount >= goal.target_amount {
        goal.status = GoalStatus::Completed;
        goal.completed_at = Some(rfc3339_timestamp(now_utc()));
        completed = true;
    }
    let row = goal.clone();
    store.save(Dataset::Goals, &goals)?;

    success("goal contribute", GoalContributeData { row, completed })
}

pub fn list(status: Option<GoalStatus>) -> ClientResult<SuccessEnvelope> {
    list_with_options(GoalListOptions {
        status,
        home_override: None,
    })
}

#[doc(hidden)]
pub fn list_with_options(options: GoalListOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let store = Store::open(options.home_override)?;
    let goals: Vec<SavingsGoal> = store.load(Dataset::Goals);

    let active_count = goals
        .iter()
        .filter(|goal| goal.status == GoalStatus::Active)
        .count();
    let completed_count = goals.len() - active_count;

    let rows = match options.status {
        Some(wanted) => goals
            .into_iter()
            .filter(|goal| goal.status == wanted)
            .collect(),
        None => goals,
    };

    success(
        "goal list",
        GoalListData {
            rows,
            active_count,
            completed_count,
        },
    )
}

pub fn delete(id: &str) -> ClientResult<SuccessEnvelope> {
    delete_with_options(GoalDeleteOptions {
        id: id.to_string(),
        home_override: None,
    })
}

#[doc(hidden)]
pub fn delete_with_options(options: GoalDeleteOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let store = Store::open(options.home_override)?;
    let mut goals: Vec<SavingsGoal> = store.load(Dataset::Goals);

    let Some(position) = goals.iter().position(|goal| goal.id == options.id) else {
        return Err(ClientError::record_not_found("goal", &options.id));
    };
    goals.remove(position);
    store.save(Dataset::Goals, &goals)?;

    success(
        "goal delete",
        DeleteData {
            dataset: "goal",
            id: options.id.clone(),
            message: format!("Goal `{}` deleted.", options.id),
        },
    )
}
