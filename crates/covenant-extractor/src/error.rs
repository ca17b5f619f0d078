//! Error types for the Extractor

use std::fmt;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractorError {
    /// Input text is empty or whitespace
    #[error("Contract text is empty")]
    EmptyText,

    /// Provider has no access credential configured
    #[error("No credential configured for the provider (set {0})")]
    MissingCredential(String),

    /// Response nests deeper than the schema can coerce
    #[error("Schema recursion failure: {0}")]
    SchemaRecursion(String),

    /// Response does not conform to the schema
    #[error("Validation error: {0}")]
    Validation(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of an extraction failure, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Nothing to extract from
    EmptyInput,
    /// Credential absent; no request was made
    MissingCredential,
    /// Excessive nesting while coercing the response
    SchemaRecursion,
    /// Response failed type or semantic validation
    Validation,
    /// Provider or network failure
    Provider,
    /// Invalid extractor configuration
    Configuration,
}

impl ExtractorError {
    /// Classify this error
    pub fn kind(&self) -> FailureKind {
        match self {
            ExtractorError::EmptyText => FailureKind::EmptyInput,
            ExtractorError::MissingCredential(_) => FailureKind::MissingCredential,
            ExtractorError::SchemaRecursion(_) => FailureKind::SchemaRecursion,
            ExtractorError::Validation(_) => FailureKind::Validation,
            ExtractorError::Llm(_) => FailureKind::Provider,
            ExtractorError::Config(_) => FailureKind::Configuration,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::EmptyInput => "empty_input",
            FailureKind::MissingCredential => "missing_credential",
            FailureKind::SchemaRecursion => "schema_recursion",
            FailureKind::Validation => "validation",
            FailureKind::Provider => "provider",
            FailureKind::Configuration => "configuration",
        };
        f.write_str(name)
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::Validation(e.to_string())
    }
}
