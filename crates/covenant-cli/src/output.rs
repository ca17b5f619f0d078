//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use covenant_domain::ContractAnalysisResult;

/// Message printed when extraction produced nothing.
pub const FAILURE_MESSAGE: &str = "Failed to extract contract info.";

/// Output formatter.
pub struct Formatter {
    compact: bool,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(compact: bool, color_enabled: bool) -> Self {
        Self {
            compact,
            color_enabled,
        }
    }

    /// Format an extraction result as JSON.
    pub fn format_result(&self, result: &ContractAnalysisResult) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(result)?
        } else {
            serde_json::to_string_pretty(result)?
        };
        Ok(json)
    }

    /// Format the extraction failure message.
    pub fn failure(&self) -> String {
        if self.color_enabled {
            FAILURE_MESSAGE.red().to_string()
        } else {
            FAILURE_MESSAGE.to_string()
        }
    }
}
