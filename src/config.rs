//! User configuration loaded from a TOML file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calculator::{AngleMode, DEFAULT_HISTORY_CAPACITY};

const CONFIG_DIR: &str = "scicalc";
const CONFIG_FILE: &str = "config.toml";

/// How long an error stays on the display before the calculator clears.
pub const DEFAULT_ERROR_DISPLAY_MS: u64 = 2000;

/// Upper bound for `history_capacity`.
pub const MAX_HISTORY_CAPACITY: usize = 1000;

/// Calculator settings. Every key is optional in the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub angle_mode: AngleMode,
    pub history_capacity: usize,
    pub error_display_ms: u64,
    pub scientific_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            error_display_ms: DEFAULT_ERROR_DISPLAY_MS,
            scientific_mode: true,
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/scicalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            anyhow::bail!("history_capacity must be at least 1");
        }
        if self.history_capacity > MAX_HISTORY_CAPACITY {
            anyhow::bail!(
                "history_capacity must be at most {MAX_HISTORY_CAPACITY}, got {}",
                self.history_capacity
            );
        }
        Ok(())
    }

    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.angle_mode, AngleMode::Deg);
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.error_display(), Duration::from_secs(2));
        assert!(config.scientific_mode);
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml("angle_mode = \"rad\"\nhistory_capacity = 5\n").unwrap();
        assert_eq!(config.angle_mode, AngleMode::Rad);
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.error_display_ms, DEFAULT_ERROR_DISPLAY_MS);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert!(Config::from_toml("history_capacity = 0").is_err());
    }

    #[test]
    fn test_rejects_oversized_capacity() {
        let err = Config::from_toml("history_capacity = 1000000000000").unwrap_err();
        assert!(err.to_string().contains("at most 1000"));

        let config = Config::from_toml("history_capacity = 1000").unwrap();
        assert_eq!(config.history_capacity, MAX_HISTORY_CAPACITY);
    }

    #[test]
    fn test_load_reports_oversized_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "history_capacity = 18446744073709551615\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_rejects_unknown_angle_mode() {
        assert!(Config::from_toml("angle_mode = \"grad\"").is_err());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "error_display_ms = 500\nscientific_mode = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.error_display(), Duration::from_millis(500));
        assert!(!config.scientific_mode);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }
}
