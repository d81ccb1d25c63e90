// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::colors::{ColorScheme, ColorTheme};
use crate::compose::ComposerVariant;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (e.g. "info", "sentinel=debug").
    /// `SENTINEL_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file used while the TUI owns the terminal.
    /// Defaults to ~/.sentinel/logs/sentinel.log
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Message layout produced by the composer
    #[serde(default)]
    pub variant: ComposerVariant,

    /// Active color theme
    #[serde(default)]
    pub theme: ColorTheme,

    /// Per-element color overrides; when absent the theme's scheme is used
    #[serde(default)]
    pub colors: Option<ColorScheme>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: ComposerVariant::default(),
            theme: ColorTheme::default(),
            colors: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Colors to render with: explicit overrides win over the theme
    pub fn color_scheme(&self) -> ColorScheme {
        self.colors
            .clone()
            .unwrap_or_else(|| self.theme.to_scheme())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.logging.level.trim().is_empty() {
            anyhow::bail!("logging.level must not be empty");
        }
        tracing_subscriber::EnvFilter::try_new(&self.logging.level).map_err(|e| {
            anyhow::anyhow!("Invalid logging.level {:?}: {}", self.logging.level, e)
        })?;
        Ok(())
    }

    /// Path of the log file used in TUI mode
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging.file.clone().or_else(|| {
            super::loader::config_dir().map(|dir| dir.join("logs").join("sentinel.log"))
        })
    }
}
