//! Telemetry helpers for structured logging.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "gradekeeper=info";

/// Apply the nearest `.env` file to the process environment.
///
/// Returns the loaded path, or `None` when there is no `.env` file.
///
/// # Errors
///
/// Fails when a `.env` file exists but cannot be read or parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Initialize tracing. Users can install their own subscriber; this helper
/// loads `.env` if present and installs an env-filtered fmt subscriber when
/// none is set.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    // Load before building the filter so `.env` can set `RUST_LOG`.
    let dotenv = load_dotenv();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    if let Err(e) = dotenv {
        tracing::warn!("ignoring unreadable .env file: {e}");
    }
}
