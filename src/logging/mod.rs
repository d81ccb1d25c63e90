// Tracing setup
//
// While the TUI is running the terminal belongs to the UI, so log lines go to
// a file. One-shot commands log to stderr.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "SENTINEL_LOG";

/// Where log output is written
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Build the filter: `SENTINEL_LOG` wins over the configured directive
pub fn build_filter(configured: &str) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(&directive)
            .with_context(|| format!("Invalid {} directive: {}", LOG_ENV_VAR, directive)),
        _ => EnvFilter::try_new(configured)
            .with_context(|| format!("Invalid log level: {}", configured)),
    }
}

/// Install the global subscriber
pub fn init(configured: &str, target: LogTarget) -> Result<()> {
    let filter = build_filter(configured)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match target {
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_parses() {
        // SENTINEL_LOG is not set under `cargo test` unless the caller sets it.
        if std::env::var(LOG_ENV_VAR).is_err() {
            assert!(build_filter("sentinel=debug,info").is_ok());
            assert!(build_filter("sentinel=loud").is_err());
        }
    }
}
