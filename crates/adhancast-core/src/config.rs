//! adhancast configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration, loaded from `~/.adhancast/config.toml`.
///
/// Every field has a default so a missing or empty file yields a working
/// config; CLI flags override individual values at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdhanConfig {
    /// Timings provider endpoint. Serves today's timings for its own locale;
    /// the date is not parameterized.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Chromecast device name. Empty means "must be given via --device".
    #[serde(default = "default_device")]
    pub device: String,
    /// Media to cast: a local file path or a streaming URL.
    #[serde(default = "default_sound")]
    pub sound: String,
    /// Prayers to schedule.
    #[serde(default = "default_prayers")]
    pub prayers: Vec<String>,
    /// Seek offset into the media before playback, in seconds.
    #[serde(default = "default_seek_secs")]
    pub seek_secs: u32,
    /// Log file appended to by every fired cast command. Empty disables
    /// command logging entirely.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_api_url() -> String { "https://alwaqt.app/api/timings".into() }
fn default_device() -> String { String::new() }
fn default_sound() -> String { "~/.adhancast/adhan.mp4".into() }
fn default_prayers() -> Vec<String> {
    vec!["fajr".into(), "dhuhr".into(), "maghrib".into()]
}
fn default_seek_secs() -> u32 { 45 }
fn default_log_file() -> String { "~/.adhancast/adhancast.log".into() }

impl Default for AdhanConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            device: default_device(),
            sound: default_sound(),
            prayers: default_prayers(),
            seek_secs: default_seek_secs(),
            log_file: default_log_file(),
        }
    }
}

impl AdhanConfig {
    /// Load config from the default path (~/.adhancast/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::AdhanError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::AdhanError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::AdhanError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the adhancast home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".adhancast")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AdhanConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_url, "https://alwaqt.app/api/timings");
        assert_eq!(config.prayers, vec!["fajr", "dhuhr", "maghrib"]);
        assert_eq!(config.seek_secs, 45);
        assert!(config.device.is_empty());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "device = \"Living Room\"\nseek_secs = 10\n").unwrap();

        let config = AdhanConfig::load_from(&path).unwrap();
        assert_eq!(config.device, "Living Room");
        assert_eq!(config.seek_secs, 10);
        assert_eq!(config.sound, "~/.adhancast/adhan.mp4");
        assert_eq!(config.log_file, "~/.adhancast/adhancast.log");
    }

    #[test]
    fn garbage_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "device = [not toml").unwrap();

        let err = AdhanConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, crate::error::AdhanError::Config(_)));
    }
}
