use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use stridelog_core::Settings;
use tracing_subscriber::EnvFilter;

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
}

/// Logs to stderr. Used by the non-interactive commands.
pub fn init_stderr(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(io::stderr)
        .try_init();
}

/// Logs to the settings' log file, since the TUI owns the terminal.
pub fn init_file(settings: &Settings) -> Result<()> {
    let Some(path) = settings.log_file_path() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Could not create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Could not install log subscriber: {e}"))
}
