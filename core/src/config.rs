//! User settings read from `config.json` in the platform config directory.
//!
//! Only start-up behavior lives here. The workout log itself is never
//! written to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "stridelog";
const SETTINGS_FILENAME: &str = "config.json";
const LOG_FILENAME: &str = "stridelog.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Open the TUI with the three sample workouts.
    pub sample_data: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Where the TUI writes its log. Defaults to the cache directory.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_data: false,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// `<config dir>/stridelog/config.json`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(SETTINGS_FILENAME))
    }

    /// Loads the default settings file. A missing file means defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Could not read settings from {}", path.display())),
        }
    }

    /// Loads a settings file the user named. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|d| d.join(APP_DIR_NAME).join(LOG_FILENAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join("config.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_default_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "42").unwrap();

        assert!(Settings::load_or_default(&path).is_err());
    }

    #[test]
    fn test_missing_named_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Could not read settings"));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "sample_data": true }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(settings.sample_data);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid settings file"));
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let settings = Settings {
            log_file: Some(PathBuf::from("/tmp/run.log")),
            ..Settings::default()
        };
        assert_eq!(settings.log_file_path(), Some(PathBuf::from("/tmp/run.log")));
    }
}
