//! File logging setup.
//!
//! The terminal belongs to the TUI, so tracing output goes to
//! `<data dir>/clgmate/clgmate.log`. The filter is read from `CLGMATE_LOG`
//! (default `info`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where the log file lives, if a data directory exists.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("clgmate").join("clgmate.log"))
}

/// Install the global tracing subscriber.
///
/// Returns the log path on success. Any failure leaves logging disabled and
/// the app running.
pub fn init_logging() -> Option<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_env("CLGMATE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    tracing::info!("Logging to {}", path.display());
    Some(path)
}
