//! Global tracing subscriber for the binary
//!
//! The terminal belongs to the editor UI, so all diagnostics go to a log file.

use anyhow::Context;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default log file: `<temp dir>/fresh-welcome-<pid>.log`
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(format!("fresh-welcome-{}.log", std::process::id()))
}

/// Install the global subscriber writing to `log_file`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_global(log_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }
    let file = File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}
