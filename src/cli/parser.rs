use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimegrid
/// Inspect the derived views of a time-registration month
#[derive(Parser)]
#[command(
    name = "rtimegrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect a time-registration month: day ranges, totals, cell status and hints",
    long_about = None
)]
pub struct Cli {
    /// Override the snapshot file (JSON) used to seed the session
    #[arg(global = true, long = "snapshot")]
    pub snapshot: Option<String>,

    /// Pretend today is this date (YYYY-MM-DD); used by tests
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the days of the month with totals and cell flags
    Days {
        /// Month to display (YYYY-MM); defaults to the snapshot's month
        #[arg(long, short)]
        month: Option<String>,

        /// Include Saturdays and Sundays
        #[arg(long = "weekend", help = "Include Saturdays and Sundays")]
        weekend: bool,
    },

    /// Show month totals, required hours and per-task totals
    Summary {
        #[arg(long, short, help = "Month to summarize (YYYY-MM)")]
        month: Option<String>,
    },

    /// Print the current hint message
    Hint,

    /// Show import readiness and the entries an import touches
    Import,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
