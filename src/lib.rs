//! rTimegrid library root.
//! Exposes the derivation engine, the root state of a registration month,
//! the derived views over it, and the CLI that inspects them.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod reactive;
pub mod state;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::GridViews;
pub use reactive::{Derived, Readable, State, Subscription, batch};
pub use state::{RegistrationState, StateSnapshot};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Days { .. } => cli::commands::days::handle(cli, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(cli, cfg),
        Commands::Hint => cli::commands::hint::handle(cli, cfg),
        Commands::Import => cli::commands::import::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and shared by every command
    let cfg = Config::load()?;
    logging::init_logging(&cfg.log_level)?;

    dispatch(&cli, &cfg)
}
