use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use pocketwise_client::model::TransactionKind;

/// Calendar months are 1-12 on the command line and 0-11 inside the
/// engine.
pub fn parse_month(value: &str) -> Result<u32, String> {
    let parsed: u32 = value
        .parse()
        .map_err(|_| "month must be a number between 1 and 12".to_string())?;
    if !(1..=12).contains(&parsed) {
        return Err("month must be between 1 and 12".to_string());
    }
    Ok(parsed - 1)
}

pub fn parse_iso_date(value: &str) -> Result<String, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl KindArg {
    pub const fn to_kind(self) -> TransactionKind {
        match self {
            Self::Income => TransactionKind::Income,
            Self::Expense => TransactionKind::Expense,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pocketwise",
    version,
    about = "local-first personal finance tracker",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log and inspect transactions
    #[command(arg_required_else_help = true)]
    Txn {
        #[command(subcommand)]
        command: TxnCommand,
    },
    /// Manage per-category spending budgets
    #[command(arg_required_else_help = true)]
    Budget {
        #[command(subcommand)]
        command: BudgetCommand,
    },
    /// Track savings goals and contributions
    #[command(arg_required_else_help = true)]
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },
    /// Track bills and due dates
    #[command(arg_required_else_help = true)]
    Bill {
        #[command(subcommand)]
        command: BillCommand,
    },
    /// Full analytics report: patterns, habits, predictions, advice, alerts
    Insights {
        /// Month to analyze (1-12); defaults to the current month
        #[arg(long, value_parser = parse_month)]
        month: Option<u32>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Financial health score with per-metric breakdown and grade
    Health {
        /// Month to score (1-12); defaults to the current month
        #[arg(long, value_parser = parse_month)]
        month: Option<u32>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Project next month's spending and budget run-out dates
    Predict {
        /// Month to project from (1-12); defaults to the current month
        #[arg(long, value_parser = parse_month)]
        month: Option<u32>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Export or import every dataset as one JSON document
    #[command(arg_required_else_help = true)]
    Backup {
        #[command(subcommand)]
        command: BackupCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TxnCommand {
    /// Log a transaction; the category is inferred from the description
    /// unless --category is given
    Add {
        /// Free-text description (also the categorizer input)
        description: String,
        /// Positive amount
        #[arg(long)]
        amount: f64,
        /// income or expense
        #[arg(long, value_enum, default_value = "expense")]
        kind: KindArg,
        /// Explicit category label (skips auto-categorization)
        #[arg(long)]
        category: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List transactions, optionally for one month
    List {
        /// Month filter (1-12)
        #[arg(long, value_parser = parse_month)]
        month: Option<u32>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Delete a transaction by id
    Delete {
        id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Preview keyword categorization without writing anything
    Categorize {
        description: String,
        /// income or expense
        #[arg(long, value_enum, default_value = "expense")]
        kind: KindArg,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BudgetCommand {
    /// Set a monthly ceiling for an expense category (one per category)
    Set {
        /// Expense category label (e.g. Makanan)
        category: String,
        /// Positive ceiling amount
        #[arg(long)]
        amount: f64,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List budgets with current-month spend status
    List {
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Delete a budget by id
    Delete {
        id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum GoalCommand {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Positive target amount
        #[arg(long)]
        target: f64,
        /// Display glyph
        #[arg(long)]
        icon: Option<String>,
        /// Optional deadline (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        deadline: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Add money to a goal; it completes when the target is reached
    Contribute {
        id: String,
        /// Positive contribution amount
        #[arg(long)]
        amount: f64,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List goals
    List {
        /// Only active goals
        #[arg(long, conflicts_with = "completed")]
        active: bool,
        /// Only completed goals
        #[arg(long)]
        completed: bool,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Delete a goal by id
    Delete {
        id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BillCommand {
    /// Register a bill with a due date
    Add {
        /// Bill name
        name: String,
        /// Positive amount
        #[arg(long)]
        amount: f64,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        due: String,
        /// Expense category label
        #[arg(long)]
        category: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List bills, optionally only those due soon
    List {
        /// Only pending bills due within this many days
        #[arg(long)]
        due_within: Option<i64>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Mark a pending bill as paid
    Pay {
        id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Delete a bill by id
    Delete {
        id: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BackupCommand {
    /// Write all four datasets to one JSON file
    Export {
        /// Target file path
        path: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Replace all four datasets from a JSON file (no merge)
    Import {
        /// Source file path
        path: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::{parse_from, parse_iso_date, parse_month};

    #[test]
    fn month_values_shift_to_zero_based() {
        assert_eq!(parse_month("1"), Ok(0));
        assert_eq!(parse_month("12"), Ok(11));
        assert!(parse_month("0").is_err());
        assert!(parse_month("13").is_err());
        assert!(parse_month("august").is_err());
    }

    #[test]
    fn iso_dates_are_validated_strictly() {
        assert!(parse_iso_date("2026-08-07").is_ok());
        assert!(parse_iso_date("2026-8-7").is_err());
        assert!(parse_iso_date("2026-02-30").is_err());
    }

    #[test]
    fn txn_add_parses_with_defaults() {
        let parsed = parse_from([
            "pocketwise",
            "txn",
            "add",
            "makan siang di warteg",
            "--amount",
            "25000",
        ]);
        assert!(parsed.is_ok());
    }

    #[test]
    fn goal_list_filters_conflict() {
        let parsed = parse_from(["pocketwise", "goal", "list", "--active", "--completed"]);
        assert!(parsed.is_err());
    }
}
