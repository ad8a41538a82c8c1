//! Configuration management module.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::connectivity::ConnectionStatus;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub status_colors: StatusColors,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API settings used by the connectivity helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,
    /// Poll the health endpoint in the background.
    #[serde(default)]
    pub monitor_enabled: bool,
    #[serde(default = "default_monitor_interval_secs")]
    pub monitor_interval_secs: u64,
}

fn default_base_url() -> String {
    "https://developpement-skillkonnect.ngrok.app/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_secs() -> u64 {
    2
}

fn default_monitor_interval_secs() -> u64 {
    30
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub dark_theme: bool,
    pub window_width: f32,
    pub window_height: f32,
}

/// Banner colors per connection status, as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusColors {
    pub connected_bg: String,
    pub connected_text: String,
    pub no_internet_bg: String,
    pub no_internet_text: String,
    pub server_down_bg: String,
    pub server_down_text: String,
    pub slow_connection_bg: String,
    pub slow_connection_text: String,
}

/// Log output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write a daily rolling log file into the data directory.
    pub file_enabled: bool,
}

impl AppConfig {
    /// Get config file path (per-user config directory).
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("app", "SkillDar", "skilldar")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Directory for rolling log files.
    pub fn log_dir() -> PathBuf {
        ProjectDirs::from("app", "SkillDar", "skilldar")
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Validation("API base URL cannot be empty".to_string()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "API base URL must start with http:// or https://".to_string(),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation("API timeout must be at least 1 second".to_string()));
        }
        if self.api.monitor_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Monitor interval must be at least 1 second".to_string(),
            ));
        }
        let size_ok = |v: f32| v.is_finite() && v > 0.0;
        if !(size_ok(self.ui.window_width) && size_ok(self.ui.window_height)) {
            return Err(ConfigError::Validation(
                "Window size must be a positive number".to_string(),
            ));
        }
        for hex in self.status_colors.all() {
            parse_hex_color(hex)?;
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl ApiConfig {
    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        self.endpoint("health")
    }

    /// Join a path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn monitor_interval(&self) -> Duration {
        Duration::from_secs(self.monitor_interval_secs)
    }
}

impl StatusColors {
    fn all(&self) -> [&str; 8] {
        [
            &self.connected_bg,
            &self.connected_text,
            &self.no_internet_bg,
            &self.no_internet_text,
            &self.server_down_bg,
            &self.server_down_text,
            &self.slow_connection_bg,
            &self.slow_connection_text,
        ]
    }

    /// Background and text colors for a status.
    ///
    /// Falls back to black on white if the stored value does not parse.
    pub fn colors_for(&self, status: ConnectionStatus) -> (Color32, Color32) {
        let (bg, text) = match status {
            ConnectionStatus::Connected => (&self.connected_bg, &self.connected_text),
            ConnectionStatus::NoInternet => (&self.no_internet_bg, &self.no_internet_text),
            ConnectionStatus::ServerDown => (&self.server_down_bg, &self.server_down_text),
            ConnectionStatus::SlowConnection => (&self.slow_connection_bg, &self.slow_connection_text),
        };
        (
            parse_hex_color(bg).unwrap_or(Color32::WHITE),
            parse_hex_color(text).unwrap_or(Color32::BLACK),
        )
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub fn parse_hex_color(s: &str) -> Result<Color32, ConfigError> {
    let invalid = || ConfigError::Validation(format!("Invalid hex color format: {s}"));

    let digits = s.strip_prefix('#').ok_or_else(invalid)?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let alpha = if digits.len() == 8 { channel(6)? } else { 255 };

    Ok(Color32::from_rgba_unmultiplied(channel(0)?, channel(2)?, channel(4)?, alpha))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            retry_attempts: default_retry_attempts(),
            retry_delay_secs: default_retry_delay_secs(),
            monitor_enabled: false,
            monitor_interval_secs: default_monitor_interval_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        // iPhone 12/13 logical resolution
        Self {
            dark_theme: false,
            window_width: 390.0,
            window_height: 844.0,
        }
    }
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            connected_bg: "#4CAF50".to_string(),
            connected_text: "#FFFFFF".to_string(),
            no_internet_bg: "#FF5252".to_string(),
            no_internet_text: "#FFFFFF".to_string(),
            server_down_bg: "#FF6F00".to_string(),
            server_down_text: "#FFFFFF".to_string(),
            slow_connection_bg: "#FFC107".to_string(),
            slow_connection_text: "#000000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_health_url() {
        let mut api = ApiConfig::default();
        api.base_url = "http://localhost:8080/api/v1/".to_string();
        assert_eq!(api.health_url(), "http://localhost:8080/api/v1/health");
        assert_eq!(api.endpoint("/workers"), "http://localhost:8080/api/v1/workers");
    }

    #[test]
    fn test_validation_empty_base_url() {
        let mut config = AppConfig::default();
        config.api.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_non_http_base_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "ftp://invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = AppConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_status_color() {
        let mut config = AppConfig::default();
        config.status_colors.server_down_bg = "orange".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF5252").unwrap(), Color32::from_rgb(0xFF, 0x52, 0x52));
        assert!(parse_hex_color("#28 7DF").is_err());
        let translucent = parse_hex_color("#00000080").unwrap();
        assert_eq!(translucent.a(), 0x80);
        assert!(parse_hex_color("FF5252").is_err());
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_colors_for_status() {
        let colors = StatusColors::default();
        let (bg, text) = colors.colors_for(ConnectionStatus::SlowConnection);
        assert_eq!(bg, Color32::from_rgb(0xFF, 0xC1, 0x07));
        assert_eq!(text, Color32::BLACK);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.retry_attempts, 3);
        assert!(!config.api.monitor_enabled);
        assert_eq!(config.ui.window_width, 390.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_set_values() {
        let config: AppConfig = toml::from_str(
            r##"
            [ui]
            dark_theme = true

            [api]
            timeout_secs = 5

            [status_colors]
            server_down_bg = "#123456"
            "##,
        )
        .unwrap();
        assert!(config.ui.dark_theme);
        assert_eq!(config.ui.window_width, 390.0);
        assert_eq!(config.ui.window_height, 844.0);
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.base_url, ApiConfig::default().base_url);
        assert_eq!(config.status_colors.server_down_bg, "#123456");
        assert_eq!(config.status_colors.connected_bg, "#4CAF50");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_window_size() {
        let mut config = AppConfig::default();
        config.ui.window_width = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.ui.window_height = -10.0;
        assert!(config.validate().is_err());

        let config: AppConfig = toml::from_str("[ui]\nwindow_width = nan\n").unwrap();
        assert!(config.ui.window_width.is_nan());
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.ui.window_height = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.ui.dark_theme = true;
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert!(loaded.ui.dark_theme),
            other => panic!("expected loaded config, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));
    }
}
