//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the schema and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for generative-model provider operations
///
/// Implemented by the infrastructure layer (covenant-llm)
pub trait LlmProvider {
    /// Error type for provider operations
    type Error;

    /// Whether an access credential is configured
    ///
    /// Checked before any request is made; a provider without credentials
    /// must not be called.
    fn has_credentials(&self) -> bool {
        true
    }

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate output constrained to the given JSON Schema
    fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, Self::Error>;
}
