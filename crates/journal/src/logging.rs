//! File logging.
//!
//! The TUI owns the terminal, so tracing output goes to a log file in the
//! platform data directory instead of stdout/stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use journal_config::Config;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter.
const LOG_ENV: &str = "JOURNAL_LOG";

const LOG_FILE: &str = "journal.log";

/// Install the global subscriber. Returns the log file path, or `None` if
/// logging could not be set up (no home directory, unwritable file, or a
/// subscriber already installed); the app runs either way.
pub fn init(default_filter: &str) -> Option<PathBuf> {
    let dirs = Config::project_dirs()?;
    let dir = dirs.data_local_dir();
    fs::create_dir_all(dir).ok()?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}
