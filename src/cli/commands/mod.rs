pub mod config;
pub mod days;
pub mod hint;
pub mod import;
pub mod summary;

use std::path::PathBuf;

use chrono::NaiveDate;
use log::debug;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::GridViews;
use crate::errors::{AppError, AppResult};
use crate::reactive::{Readable, batch};
use crate::state::{RegistrationState, StateSnapshot};
use crate::utils::date;
use crate::utils::path::expand_tilde;

/// Root containers seeded from the snapshot, plus the views over them.
pub struct Session {
    pub state: RegistrationState,
    pub views: GridViews,
}

/// Builds a session from the snapshot named on the command line (or in the
/// config), applying `--today` and an optional month override.
pub fn open_session(cli: &Cli, cfg: &Config, month: Option<&str>) -> AppResult<Session> {
    let path: PathBuf = match &cli.snapshot {
        Some(p) => expand_tilde(p),
        None => cfg.snapshot_path(),
    };
    let snapshot = StateSnapshot::load(&path)?;

    let today_override = cli.today.as_deref().map(parse_day).transpose()?;
    let month_override = month.map(parse_month).transpose()?;

    let state = RegistrationState::new(date::today());
    state.display_weekend.set(cfg.display_weekend);
    state.apply(snapshot);

    batch(|| {
        if let Some(today) = today_override {
            state.today.set(today);
        }
        if let Some(month) = month_override {
            state.month.set(month);
        }
    });

    debug!(
        "session opened for {} (today {})",
        date::month_label(state.month.get()),
        state.today.get()
    );

    let views = GridViews::new(&state);
    Ok(Session { state, views })
}

pub fn parse_day(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    date::parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))
}
