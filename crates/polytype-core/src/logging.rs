//! Tracing setup.
//!
//! The TUI owns stdout/stderr, so log lines go to a file under
//! `$POLYTYPE_HOME/logs`. The filter comes from `POLYTYPE_LOG`
//! (same syntax as `RUST_LOG`), defaulting to `polytype=info`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

pub const LOG_ENV: &str = "POLYTYPE_LOG";
const DEFAULT_FILTER: &str = "polytype=info,polytype_core=info,polytype_tui=info";
const LOG_FILE: &str = "polytype.log";

/// Installs the global subscriber writing to the default logs directory.
///
/// Keep the returned guard alive for the whole run; dropping it flushes and
/// stops the background writer.
pub fn init() -> Result<WorkerGuard> {
    init_in(&paths::logs_dir())
}

/// Installs the global subscriber writing to `dir/polytype.log`.
pub fn init_in(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}
