//! File logging for tessera programs.
//!
//! The terminal belongs to the UI while a [`Surface`](crate::Surface) is
//! open, so log lines go to a file instead of stdout or stderr.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Failure to set up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be opened.
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    /// A global subscriber was already installed.
    #[error("cannot install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Append plain-text log lines to `path`, filtered by `RUST_LOG`
/// (default [`DEFAULT_FILTER`]).
pub fn init(path: impl AsRef<Path>) -> Result<(), LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    init_with_writer(file)
}

fn init_with_writer(file: File) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}
