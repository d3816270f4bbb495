//! Logging bootstrap for the CLI.
//!
//! The library only emits through the `log` facade; the binary decides where
//! records go. `RUST_LOG` overrides the configured level.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

use crate::errors::{AppError, AppResult};

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts stderr logging at `level`. Repeated calls are no-ops.
pub fn init_logging(level: &str) -> AppResult<()> {
    LOGGER.get_or_try_init(|| -> AppResult<LoggerHandle> {
        let handle = Logger::try_with_env_or_str(level)
            .map_err(|err| AppError::Config(format!("invalid log level `{level}`: {err}")))?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| AppError::Config(format!("failed to start logger: {err}")))?;

        info!(
            "event=app_start version={} level={level}",
            env!("CARGO_PKG_VERSION")
        );
        Ok(handle)
    })?;
    Ok(())
}
