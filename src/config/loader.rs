// Configuration loader
// Loads settings from ~/.sentinel/config.toml (or an explicit path)

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;

/// Directory holding config.toml and logs/
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sentinel"))
}

/// File that [`load_config`] reads for `path`, if any.
///
/// An explicit path is returned as given. Without one, this is
/// ~/.sentinel/config.toml when it exists.
pub fn config_source(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => Some(path.to_path_buf()),
        None => config_dir()
            .map(|dir| dir.join("config.toml"))
            .filter(|default_path| default_path.exists()),
    }
}

/// Load configuration.
///
/// An explicit path must exist. Without one, ~/.sentinel/config.toml is read
/// when present and defaults are used otherwise. Logging is not installed
/// yet at this point, so nothing here traces.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match config_source(path) {
        Some(source) => load_from_file(&source)?,
        None => Config::default(),
    };

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config TOML at {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::ComposerVariant;
    use crate::config::ColorTheme;
    use std::io::Write;

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "variant = \"compact\"\ntheme = \"solarized\"\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.variant, ComposerVariant::Compact);
        assert_eq!(config.theme, ColorTheme::Solarized);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_explicit_source_is_kept_even_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert_eq!(config_source(Some(&path)), Some(path));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "variant = \"sideways\"").unwrap();
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config TOML"));
    }

    #[test]
    fn test_color_overrides_parse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[colors.ui]\nborder = \"red\"\n").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        let scheme = config.color_scheme();
        assert_eq!(
            scheme.ui.border.to_color(),
            ratatui::style::Color::Red
        );
    }
}
