//! Configuration for the Extractor

use crate::error::ExtractorError;
use covenant_llm::ProviderConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deepest nesting the schema itself needs: root → parties[] → party → address
pub const MIN_NESTING_DEPTH: usize = 4;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum JSON nesting accepted from the provider before giving up
    pub max_nesting_depth: usize,

    /// Also spell the JSON Schema out in the prompt text
    ///
    /// Useful for providers without a native structured-output mode.
    pub embed_schema_in_prompt: bool,

    /// Provider connection settings
    pub provider: ProviderConfig,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_nesting_depth < MIN_NESTING_DEPTH {
            return Err(format!(
                "max_nesting_depth must be at least {}",
                MIN_NESTING_DEPTH
            ));
        }
        self.provider.validate()
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExtractorError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&contents).map_err(ExtractorError::Config)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: 16,
            embed_schema_in_prompt: false,
            provider: ProviderConfig::default(),
        }
    }
}
