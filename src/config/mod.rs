//! Configuration management for roadie

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::services::{LocationSource, WeatherClient};
use crate::theme::Theme;

/// What a trip plan submission waits for before showing directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Navigate only once the planner confirms; show an inline error otherwise
    #[default]
    AwaitConfirmation,
    /// Navigate straight away, whatever the planner answers
    FireAndForget,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,

    /// Name shown in the greeting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Current-weather endpoint
    pub weather_url: String,

    /// Weather API key; the environment and keyring are consulted too
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_api_key: Option<String>,

    /// Where the car's position comes from
    pub location: LocationSource,

    /// IP geolocation endpoint, used with the `ip` location source
    pub ip_lookup_url: String,

    /// Trip planning endpoint
    pub planner_url: String,

    /// Navigation behaviour after a plan submission
    pub submit_policy: SubmitPolicy,

    /// Clock sampling interval in milliseconds
    pub clock_interval_ms: u64,

    /// Timeout for every outbound request, in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Tokyo Night".to_string(),
            custom_theme: None,
            display_name: None,
            weather_url: WeatherClient::DEFAULT_URL.to_string(),
            weather_api_key: None,
            location: LocationSource::default(),
            ip_lookup_url: "http://ip-api.com/json".to_string(),
            planner_url: "http://localhost:3000/calculate".to_string(),
            submit_policy: SubmitPolicy::default(),
            clock_interval_ms: 100,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Load configuration from the default location, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config {:?}", path))
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "roadie").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "roadie").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the log file path
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("roadie.log"))
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        self.custom_theme.clone().unwrap_or_else(Theme::tokyo_night)
    }

    /// Greeting name: the override, then the config, then "Guest"
    pub fn display_name(&self, override_name: Option<&str>) -> String {
        override_name
            .or(self.display_name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Guest")
            .to_string()
    }

    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_has_tokyo_night_theme() {
        let config = Config::default();
        assert_eq!(config.theme, "Tokyo Night");
    }

    #[test]
    fn default_submit_waits_for_confirmation() {
        assert_eq!(Config::default().submit_policy, SubmitPolicy::AwaitConfirmation);
    }

    #[test]
    fn config_serializes_to_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("Tokyo Night"));
        assert!(json.contains("await_confirmation"));
        assert!(!json.contains("weather_api_key"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let json = r#"{"planner_url":"http://example.test/plan","submit_policy":"fire_and_forget"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.planner_url, "http://example.test/plan");
        assert_eq!(config.submit_policy, SubmitPolicy::FireAndForget);
        assert_eq!(config.clock_interval_ms, 100);
    }

    #[test]
    fn display_name_falls_back_to_guest() {
        let mut config = Config::default();
        assert_eq!(config.display_name(None), "Guest");
        assert_eq!(config.display_name(Some("  ")), "Guest");

        config.display_name = Some("Ada".into());
        assert_eq!(config.display_name(None), "Ada");
        assert_eq!(config.display_name(Some("Grace")), "Grace");
    }

    #[test]
    fn load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.theme, "Tokyo Night");
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"display_name":"Ada","location":{"source":"disabled"}}"#)
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.display_name.as_deref(), Some("Ada"));
        assert_eq!(config.location, LocationSource::Disabled);
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
