//! Provider connection settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model used for extraction
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Upper bound on `max_attempts`
pub const MAX_ATTEMPTS_LIMIT: u32 = 10;

/// Settings for reaching the hosted model
///
/// Timeout and retry are explicit: with `request_timeout_secs` unset the HTTP
/// client's own default applies, and `max_attempts = 1` means no retry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API base URL, without a trailing slash
    pub endpoint: String,

    /// Model name, e.g. `gemini-1.5-flash-latest`
    pub model: String,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,

    /// Per-request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Total attempts per call, including the first
    pub max_attempts: u32,

    /// Sampling temperature passed to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl ProviderConfig {
    /// Get the request timeout as a Duration, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if self.api_key_env.trim().is_empty() {
            return Err("api_key_env must not be empty".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if self.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(format!(
                "max_attempts {} exceeds the limit of {}",
                self.max_attempts, MAX_ATTEMPTS_LIMIT
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(format!("temperature {} out of range [0.0, 2.0]", t));
            }
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            request_timeout_secs: None,
            max_attempts: 1,
            temperature: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProviderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_attempts, 1);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = ProviderConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_attempts_capped() {
        let mut config = ProviderConfig {
            max_attempts: MAX_ATTEMPTS_LIMIT,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.max_attempts = 65;
        let err = config.validate().unwrap_err();
        assert!(err.contains("max_attempts"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ProviderConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_temperature_range() {
        let mut config = ProviderConfig::default();
        config.temperature = Some(0.2);
        assert!(config.validate().is_ok());

        config.temperature = Some(3.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_duration() {
        let config = ProviderConfig {
            request_timeout_secs: Some(45),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(45)));
    }
}
