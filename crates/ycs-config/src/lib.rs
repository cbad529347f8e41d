//! Configuration management for ycs.
//!
//! Parses `ycs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `client.api_url`
//! - `client.app_name`
//! - `client.app_version`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ycs.toml";

/// Default status API URL.
const DEFAULT_API_URL: &str = "https://status.yandex.cloud/api";

/// Response languages the API understands.
const SUPPORTED_LANGS: &[&str] = &["ru", "en"];

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override API base URL.
    pub api_url: Option<String>,
    /// Override response language.
    pub lang: Option<String>,
    /// Override request timeout in seconds.
    pub timeout: Option<f64>,
    /// Override requests-per-second limit.
    pub rate_limit: Option<f64>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API client configuration.
    pub client: ClientConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// API client configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Status API base URL.
    pub api_url: String,
    /// Response language (`ru` or `en`).
    pub lang: String,
    /// Request timeout in seconds.
    pub timeout: f64,
    /// Requests per second, 0 for no limit.
    pub rate_limit: f64,
    /// Application name reported in the user agent.
    pub app_name: Option<String>,
    /// Application version reported in the user agent.
    pub app_version: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            lang: "ru".to_owned(),
            timeout: 30.0,
            rate_limit: 0.0,
            app_name: None,
            app_version: None,
        }
    }
}

impl ClientConfig {
    /// Request timeout as a duration.
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs_f64(self.timeout)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`client.api_url`").
        field: String,
        /// Error message (e.g., "${`YCS_API_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `ycs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values. The result is validated again
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(api_url) = &settings.api_url {
            self.client.api_url.clone_from(api_url);
        }
        if let Some(lang) = &settings.lang {
            self.client.lang.clone_from(lang);
        }
        if let Some(timeout) = settings.timeout {
            self.client.timeout = timeout;
        }
        if let Some(rate_limit) = settings.rate_limit {
            self.client.rate_limit = rate_limit;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const MAX_TIMEOUT: f64 = 3600.0;
        const MIN_RATE_LIMIT: f64 = 1.0 / 3600.0;

        let client = &self.client;
        require_non_empty(&client.api_url, "client.api_url")?;
        require_http_url(&client.api_url, "client.api_url")?;
        if !SUPPORTED_LANGS.contains(&client.lang.as_str()) {
            return Err(ConfigError::Validation(format!(
                "client.lang must be one of: {}",
                SUPPORTED_LANGS.join(", ")
            )));
        }

        if !client.timeout.is_finite() || client.timeout <= 0.0 {
            return Err(ConfigError::Validation(
                "client.timeout must be greater than 0".to_owned(),
            ));
        }
        if client.timeout > MAX_TIMEOUT {
            return Err(ConfigError::Validation(format!(
                "client.timeout cannot exceed {MAX_TIMEOUT} seconds"
            )));
        }
        if !client.rate_limit.is_finite() || client.rate_limit < 0.0 {
            return Err(ConfigError::Validation(
                "client.rate_limit cannot be negative".to_owned(),
            ));
        }
        if client.rate_limit > 0.0 && client.rate_limit < MIN_RATE_LIMIT {
            return Err(ConfigError::Validation(
                "client.rate_limit must be 0 or at least one request per hour".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let client = &mut self.client;
        client.api_url = expand::expand_env(&client.api_url, "client.api_url")?;

        if let Some(ref name) = client.app_name {
            client.app_name = Some(expand::expand_env(name, "client.app_name")?);
        }
        if let Some(ref version) = client.app_version {
            client.app_version = Some(expand::expand_env(version, "client.app_version")?);
        }

        Ok(())
    }
}
