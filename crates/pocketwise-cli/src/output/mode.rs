use crate::cli::{BackupCommand, BillCommand, BudgetCommand, Commands, GoalCommand, TxnCommand};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Txn { command } => match command {
            TxnCommand::Add { json, .. }
            | TxnCommand::List { json, .. }
            | TxnCommand::Delete { json, .. }
            | TxnCommand::Categorize { json, .. } => *json,
        },
        Commands::Budget { command } => match command {
            BudgetCommand::Set { json, .. }
            | BudgetCommand::List { json }
            | BudgetCommand::Delete { json, .. } => *json,
        },
        Commands::Goal { command } => match command {
            GoalCommand::Add { json, .. }
            | GoalCommand::Contribute { json, .. }
            | GoalCommand::List { json, .. }
            | GoalCommand::Delete { json, .. } => *json,
        },
        Commands::Bill { command } => match command {
            BillCommand::Add { json, .. }
            | BillCommand::List { json, .. }
            | BillCommand::Pay { json, .. }
            | BillCommand::Delete { json, .. } => *json,
        },
        Commands::Insights { json, .. }
        | Commands::Health { json, .. }
        | Commands::Predict { json, .. } => *json,
        Commands::Backup { command } => match command {
            BackupCommand::Export { json, .. } | BackupCommand::Import { json, .. } => *json,
        },
    };

    if json { OutputMode::Json } else { OutputMode::Text }
}

/// Best-effort mode detection for failures that happen before a command
/// is parsed.
pub fn infer_requested_output_mode(raw_args: &[String]) -> OutputMode {
    if raw_args.iter().any(|value| value == "--json") {
        OutputMode::Json
    } else {
        OutputMode::Text
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn json_flag_switches_the_mode() {
        let parsed = parse_from(["pocketwise", "insights", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
        }

        let parsed = parse_from(["pocketwise", "insights"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Text);
        }
    }

    #[test]
    fn nested_commands_carry_their_json_flag() {
        let parsed = parse_from(["pocketwise", "budget", "list", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
        }

        let parsed = parse_from(["pocketwise", "txn", "delete", "txn_1", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert_eq!(mode_for_command(&cli.command), OutputMode::Json);
        }
    }
}
