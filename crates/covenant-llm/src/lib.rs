//! Covenant LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `covenant-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use covenant_llm::MockProvider;
//! use covenant_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod gemini;

use covenant_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use config::ProviderConfig;
pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// No API key configured
    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(String),

    /// API key rejected by the provider
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Mock LLM provider for deterministic testing
///
/// This provider returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use covenant_llm::MockProvider;
/// use covenant_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Multiple responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// provider.add_response("prompt2", "response2");
/// assert_eq!(provider.generate("prompt1").unwrap(), "response1");
/// assert_eq!(provider.generate("prompt2").unwrap(), "response2");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Result<String, LlmError>,
    responses: Arc<Mutex<HashMap<String, Result<String, LlmError>>>>,
    call_count: Arc<AtomicUsize>,
    last_schema: Arc<Mutex<Option<serde_json::Value>>>,
    has_credentials: bool,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Ok(response.into()),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
            last_schema: Arc::new(Mutex::new(None)),
            has_credentials: true,
        }
    }

    /// Create a MockProvider that fails every call with the given error
    pub fn failing(error: LlmError) -> Self {
        Self {
            default_response: Err(error),
            ..Self::default()
        }
    }

    /// Report no configured credential
    pub fn without_credentials(mut self) -> Self {
        self.has_credentials = false;
        self
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).insert(prompt.into(), Ok(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>, error: LlmError) {
        lock(&self.responses).insert(prompt.into(), Err(error));
    }

    /// Get the number of times the provider was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    /// Schema passed to the most recent structured call
    pub fn last_schema(&self) -> Option<serde_json::Value> {
        lock(&self.last_schema).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn has_credentials(&self) -> bool {
        self.has_credentials
    }

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        // Check if we have a specific response for this prompt
        if let Some(response) = lock(&self.responses).get(prompt) {
            return response.clone();
        }

        self.default_response.clone()
    }

    fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, Self::Error> {
        *lock(&self.last_schema) = Some(schema.clone());
        self.generate(prompt)
    }
}
