//! DevOverflow CLI - formatting helpers and shared constants from the terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{constants, delay, format, id, theme};

/// dof - DevOverflow helper commands
#[derive(Parser)]
#[command(name = "dof", version, about, long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a date as "January 5, 2024"
    Date {
        /// Date in YYYY-MM-DD form (defaults to today)
        date: Option<String>,
    },

    /// Format a number with grouping separators
    Number {
        /// Number to format
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Truncate text and append an ellipsis
    Truncate {
        /// Text to truncate
        text: String,
        /// Maximum number of characters to keep
        #[arg(long, short, allow_hyphen_values = true)]
        max: isize,
    },

    /// Generate short random identifiers
    Id {
        /// How many identifiers to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },

    /// Wait for a number of milliseconds
    Delay {
        /// Milliseconds to wait
        ms: u64,
    },

    /// Show navigation, pagination, API and storage constants
    Constants,

    /// Show or change the preferred color theme
    Theme {
        #[command(subcommand)]
        command: Option<theme::ThemeCommands>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                output::json_error(&e);
            } else {
                output::error(&format!("{:#}", e));
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "dof=debug,devoverflow_core=debug"
    } else {
        "dof=warn,devoverflow_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Date { date } => format::run_date(date.as_deref(), json),
        Commands::Number { value } => format::run_number(&value, json),
        Commands::Truncate { text, max } => format::run_truncate(&text, max, json),
        Commands::Id { count } => id::run(count, json),
        Commands::Delay { ms } => delay::run(ms, json),
        Commands::Constants => constants::run(json),
        Commands::Theme { command } => theme::run(command, json),
    }
}
