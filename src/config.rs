//! Configuration for the Sellerhub dashboard
//!
//! Settings load from an optional TOML file (`--config`); every field has a
//! default so the dashboard runs with no file at all.
//!
//! ```toml
//! [ui]
//! tick_ms = 200
//! notice_ttl_ms = 3000
//! log_file = "/tmp/sellerhub.log"
//! ```

use crate::error::{Result, SellerhubError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// UI timing and logging settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Notice display window in milliseconds
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,

    /// Log file path (the terminal itself belongs to the TUI)
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_tick_ms() -> u64 {
    200
}

fn default_notice_ttl_ms() -> u64 {
    3000
}

fn default_log_file() -> String {
    "/tmp/sellerhub.log".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            notice_ttl_ms: default_notice_ttl_ms(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SellerhubError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Event poll interval
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }

    /// Notice display window
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.ui.notice_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tick(), Duration::from_millis(200));
        assert_eq!(config.notice_ttl(), Duration::from_millis(3000));
        assert_eq!(config.ui.log_file, "/tmp/sellerhub.log");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml_str("[ui]\nnotice_ttl_ms = 1500\n").unwrap();
        assert_eq!(config.notice_ttl(), Duration::from_millis(1500));
        assert_eq!(config.ui.tick_ms, 200);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.ui.tick_ms, 200);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml_str("[ui]\nrefresh = 100\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[ui]\ntick_ms = 50\nlog_file = \"/tmp/test.log\"\n").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.tick(), Duration::from_millis(50));
        assert_eq!(config.ui.log_file, "/tmp/test.log");
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = Config::from_file(Path::new("/nonexistent/sellerhub.toml")).unwrap_err();
        assert!(matches!(err, SellerhubError::ConfigRead { .. }));
    }
}
