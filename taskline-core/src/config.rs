//! Configuration management
//!
//! Compatible with the desktop app settings.json format:
//! ```json
//! {
//!   "api": { "baseUrl": "https://backengine-zq2g.fly.dev", "timeoutSecs": 30 }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default production API URL
pub const DEFAULT_BASE_URL: &str = "https://backengine-zq2g.fly.dev";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw settings.json structure (matching the app format)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    api: ApiSettings,
    // Settings the CLI doesn't manage are carried here
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiSettings {
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Taskline configuration (simplified view of settings)
///
/// The base URL here can still be overridden at client construction via
/// the `TASKLINE_BASE_URL` environment variable.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from the taskline directory
    ///
    /// A missing or malformed settings file falls back to defaults.
    pub fn load(taskline_dir: &Path) -> Result<Self> {
        let settings_path = taskline_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        Ok(Self {
            api_base_url: raw.api.base_url,
            timeout_secs: raw.api.timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_from_settings_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"api": {"baseUrl": "http://localhost:8000", "timeoutSecs": 5}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"api": {"baseUrl": "http://localhost:8000"}, "theme": "dark"}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }
}
