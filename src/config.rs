//! Client configuration.
//!
//! Only deployment details are configurable (where the backend lives, where
//! logs go). The request deadline and the title bounds are fixed.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Upper bound on waiting for the assessment backend.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Backend gateway used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9999";

/// Environment variable overriding the backend base URL.
pub const ENV_BASE_URL: &str = "STDASSESS_BASE_URL";

/// Environment variable overriding the log file path.
pub const ENV_LOG_PATH: &str = "STDASSESS_LOG";

/// Errors from validating a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL is not an http(s) URL
    #[error("Invalid base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),

    /// No home directory to put the default log file in
    #[error("Could not determine a home directory for the log file")]
    NoHomeDirectory,
}

/// Configuration for the assessment client and binary.
///
/// # Example
///
/// ```
/// use stdassess::config::AssessConfig;
///
/// let config = AssessConfig::default().with_base_url("http://10.0.0.5:9999/");
/// assert_eq!(config.base_url, "http://10.0.0.5:9999");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AssessConfig {
    /// Backend base URL without a trailing slash
    pub base_url: String,
    /// Log file override; `None` means the default under the home directory
    pub log_path: Option<PathBuf>,
}

impl Default for AssessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_path: None,
        }
    }
}

impl AssessConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// Set the log file path.
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Defaults overridden by `STDASSESS_BASE_URL` and `STDASSESS_LOG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                config = config.with_base_url(url);
            }
        }
        if let Ok(path) = std::env::var(ENV_LOG_PATH) {
            if !path.trim().is_empty() {
                config = config.with_log_path(path);
            }
        }
        config
    }

    /// Check the base URL scheme and that a host follows it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rest = self
            .base_url
            .strip_prefix("http://")
            .or_else(|| self.base_url.strip_prefix("https://"));
        match rest {
            Some(rest) if !rest.split(['/', '?', '#']).next().unwrap_or("").is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidBaseUrl(self.base_url.clone())),
        }
    }

    /// Where logs are written: the override, or `~/.stdassess/stdassess.log`.
    pub fn resolved_log_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.log_path {
            Some(path) => Ok(path.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(".stdassess").join("stdassess.log"))
                .ok_or(ConfigError::NoHomeDirectory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = AssessConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.log_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_request_timeout_is_two_minutes() {
        assert_eq!(REQUEST_TIMEOUT.as_millis(), 120_000);
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = AssessConfig::new().with_base_url(" https://assess.example.com/ ");
        assert_eq!(config.base_url, "https://assess.example.com");
    }

    #[test]
    fn test_validate_rejects_non_http() {
        let config = AssessConfig::new().with_base_url("ftp://example.com");
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl("ftp://example.com".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_missing_host() {
        for url in ["http://", "https://", "https:///assess", "http://?q=1"] {
            let config = AssessConfig::new().with_base_url(url);
            assert!(config.validate().is_err(), "{} should be rejected", url);
        }
        let config = AssessConfig::new().with_base_url("http://localhost:9999");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolved_log_path_override() {
        let config = AssessConfig::new().with_log_path("/tmp/assess.log");
        assert_eq!(
            config.resolved_log_path().unwrap(),
            PathBuf::from("/tmp/assess.log")
        );
    }

    #[test]
    #[serial(env)]
    fn test_from_env_reads_overrides() {
        std::env::set_var(ENV_BASE_URL, "http://10.1.2.3:8080/");
        std::env::set_var(ENV_LOG_PATH, "/tmp/env-assess.log");

        let config = AssessConfig::from_env();

        std::env::remove_var(ENV_BASE_URL);
        std::env::remove_var(ENV_LOG_PATH);

        assert_eq!(config.base_url, "http://10.1.2.3:8080");
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/env-assess.log")));
    }

    #[test]
    #[serial(env)]
    fn test_from_env_ignores_blank_values() {
        std::env::set_var(ENV_BASE_URL, "   ");
        let config = AssessConfig::from_env();
        std::env::remove_var(ENV_BASE_URL);

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
