//! File-backed diagnostics.
//!
//! The terminal owns stdout while the viewer runs, so tracing output goes to
//! a file, and only when asked for: set `JSONLENS_LOG` (optionally to a
//! path) or pass `--log-file`. The core modules never depend on whether a
//! subscriber is installed.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable that switches file logging on. A non-empty value is
/// used as the log path.
pub const LOG_ENV: &str = "JSONLENS_LOG";

/// Log path used when the toggle is set without an explicit file.
pub fn default_log_path() -> PathBuf {
    PathBuf::from("jsonlens.log")
}

/// Install the global subscriber writing to `path`.
///
/// Level filtering follows `RUST_LOG` when set and defaults to `debug`, so
/// the toggle captures the viewport and query diagnostics.
pub fn init(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
