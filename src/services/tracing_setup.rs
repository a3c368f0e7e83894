//! Tracing subscriber setup
//!
//! Log output always goes to a file: while the TUI is running the terminal
//! belongs to ratatui, so nothing may write to stdout or stderr.

use anyhow::Context;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber with file logging.
///
/// Filtering follows `RUST_LOG` with a DEBUG default.
pub fn init_global(log_file_path: &Path) -> anyhow::Result<()> {
    let log_file = File::create(log_file_path)
        .with_context(|| format!("Failed to create log file {}", log_file_path.display()))?;

    build_subscriber(log_file).init();
    Ok(())
}

/// Build a subscriber with file logging.
///
/// Split out from `init_global` so tests can install it locally with
/// `tracing::subscriber::with_default`.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());

    let fmt_layer = fmt::layer().with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
}

/// Default log file path (one file per process in the system temp dir)
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(format!("duotone-{}.log", std::process::id()))
}
