use pocketwise_client::commands;
use pocketwise_client::model::GoalStatus;
use pocketwise_client::{ClientResult, SuccessEnvelope};

use crate::cli::{BackupCommand, BillCommand, BudgetCommand, Cli, Commands, GoalCommand, TxnCommand};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Txn { command } => match command {
            TxnCommand::Add {
                description,
                amount,
                kind,
                category,
                json: _,
            } => commands::transactions::add(
                *amount,
                kind.to_kind(),
                category.as_deref(),
                description,
            ),
            TxnCommand::List { month, json: _ } => commands::transactions::list(*month),
            TxnCommand::Delete { id, json: _ } => commands::transactions::delete(id),
            TxnCommand::Categorize {
                description,
                kind,
                json: _,
            } => commands::transactions::categorize_probe(description, kind.to_kind()),
        },
        Commands::Budget { command } => match command {
            BudgetCommand::Set {
                category,
                amount,
                json: _,
            } => commands::budgets::set(category, *amount),
            BudgetCommand::List { json: _ } => commands::budgets::list(),
            BudgetCommand::Delete { id, json: _ } => commands::budgets::delete(id),
        },
        Commands::Goal { command } => match command {
            GoalCommand::Add {
                name,
                target,
                icon,
                deadline,
                json: _,
            } => commands::goals::add_with_options(commands::goals::GoalAddOptions {
                name: name.clone(),
                target_amount: *target,
                icon: icon.clone(),
                deadline: deadline.clone(),
                home_override: None,
            }),
            GoalCommand::Contribute { id, amount, json: _ } => {
                commands::goals::contribute(id, *amount)
            }
            GoalCommand::List {
                active,
                completed,
                json: _,
            } => {
                let status = if *active {
                    Some(GoalStatus::Active)
                } else if *completed {
                    Some(GoalStatus::Completed)
                } else {
                    None
                };
                commands::goals::list(status)
            }
            GoalCommand::Delete { id, json: _ } => commands::goals::delete(id),
        },
        Commands::Bill { command } => match command {
            BillCommand::Add {
                name,
                amount,
                due,
                category,
                json: _,
            } => commands::bills::add(name, *amount, due, category),
            BillCommand::List { due_within, json: _ } => commands::bills::list(*due_within),
            BillCommand::Pay { id, json: _ } => commands::bills::pay(id),
            BillCommand::Delete { id, json: _ } => commands::bills::delete(id),
        },
        Commands::Insights { month, json: _ } => {
            commands::insights::insights_with_options(commands::insights::ReportOptions {
                month: *month,
                today: None,
                home_override: None,
            })
        }
        Commands::Health { month, json: _ } => {
            commands::insights::health_with_options(commands::insights::ReportOptions {
                month: *month,
                today: None,
                home_override: None,
            })
        }
        Commands::Predict { month, json: _ } => {
            commands::insights::predict_with_options(commands::insights::ReportOptions {
                month: *month,
                today: None,
                home_override: None,
            })
        }
        Commands::Backup { command } => match command {
            BackupCommand::Export { path, json: _ } => commands::backup::export(path),
            BackupCommand::Import { path, json: _ } => commands::backup::import(path),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::parse_from;

    #[test]
    fn core_commands_parse() {
        for args in [
            vec!["pocketwise", "insights"],
            vec!["pocketwise", "health", "--month", "8"],
            vec!["pocketwise", "predict", "--json"],
            vec!["pocketwise", "txn", "list"],
            vec!["pocketwise", "budget", "set", "Makanan", "--amount", "500000"],
            vec!["pocketwise", "goal", "list", "--active"],
            vec!["pocketwise", "bill", "list", "--due-within", "7"],
            vec!["pocketwise", "backup", "export", "/tmp/backup.json"],
        ] {
            assert!(parse_from(args.clone()).is_ok(), "failed to parse {args:?}");
        }
    }

    #[test]
    fn bare_nouns_require_a_verb() {
        let parsed = parse_from(["pocketwise", "txn"]);
        assert!(parsed.is_err());
    }
}
