//! Gemini Provider Implementation
//!
//! Integration with Google's Generative Language `generateContent` API.
//!
//! # Features
//!
//! - Structured output via `responseMimeType` + `responseJsonSchema`
//! - API key read from a configurable environment variable
//! - Optional request timeout and retry with exponential backoff
//!
//! The provider owns a current-thread Tokio runtime and exposes a blocking
//! [`LlmProvider`](covenant_domain::traits::LlmProvider) surface. Do not call
//! it from inside another async runtime.
//!
//! # Examples
//!
//! ```no_run
//! use covenant_llm::{GeminiProvider, ProviderConfig};
//! use covenant_domain::traits::LlmProvider;
//!
//! let provider = GeminiProvider::new(ProviderConfig::default()).unwrap();
//! if provider.has_credentials() {
//!     let text = provider.generate("Say hello").unwrap();
//!     println!("{}", text);
//! }
//! ```

use crate::config::ProviderConfig;
use crate::LlmError;
use covenant_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Gemini API provider for hosted model inference
pub struct GeminiProvider {
    config: ProviderConfig,
    api_key: Option<String>,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

/// Request body for the generateContent API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_json_schema: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Response from the generateContent API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiProvider {
    /// Create a new Gemini provider, reading the API key from the configured environment variable
    ///
    /// A missing key is not an error here; check [`has_credentials`] before
    /// calling.
    ///
    /// [`has_credentials`]: covenant_domain::traits::LlmProvider::has_credentials
    pub fn new(config: ProviderConfig) -> Result<Self, LlmError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::build(config, api_key)
    }

    /// Create a new Gemini provider with an explicit API key
    pub fn with_api_key(config: ProviderConfig, api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::build(config, Some(api_key.into()))
    }

    fn build(config: ProviderConfig, api_key: Option<String>) -> Result<Self, LlmError> {
        config.validate().map_err(LlmError::Config)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to start runtime: {}", e)))?;

        Ok(Self {
            config,
            api_key,
            client,
            runtime,
        })
    }

    /// Model this provider sends requests to
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Generate content, optionally constrained to a JSON Schema
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No API key is configured
    /// - The model is not available or the key is rejected
    /// - Network communication fails on every attempt
    /// - The response carries no text (blocked prompt, empty candidates)
    pub async fn generate_content(
        &self,
        prompt: &str,
        schema: Option<&serde_json::Value>,
    ) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::MissingCredential(self.config.api_key_env.clone()))?;

        let request_body = build_request(prompt, schema, self.config.temperature);
        let url = self.url();

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.config.max_attempts {
            match self
                .client
                .post(&url)
                .header("x-goog-api-key", api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.json::<GenerateContentResponse>().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                        return response_text(body);
                    }

                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());

                    match status {
                        reqwest::StatusCode::NOT_FOUND => {
                            return Err(LlmError::ModelNotAvailable(self.config.model.clone()));
                        }
                        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                            return Err(LlmError::Unauthorized(error_text));
                        }
                        reqwest::StatusCode::BAD_REQUEST => {
                            return Err(LlmError::Communication(format!(
                                "HTTP {}: {}",
                                status, error_text
                            )));
                        }
                        reqwest::StatusCode::TOO_MANY_REQUESTS => {
                            last_error = Some(LlmError::RateLimitExceeded);
                        }
                        _ => {
                            last_error = Some(LlmError::Communication(format!(
                                "HTTP {}: {}",
                                status, error_text
                            )));
                        }
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.config.max_attempts {
                let delay = backoff_delay(attempts);
                warn!(attempt = attempts, ?delay, "Provider call failed, retrying");
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max attempts exceeded".to_string())))
    }
}

/// Exponential backoff after the given failed attempt: 1s, 2s, 4s, etc.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt.saturating_sub(1)))
}

fn build_request<'a>(
    prompt: &'a str,
    schema: Option<&'a serde_json::Value>,
    temperature: Option<f32>,
) -> GenerateContentRequest<'a> {
    let generation_config = GenerationConfig {
        response_mime_type: schema.map(|_| "application/json"),
        response_json_schema: schema,
        temperature,
    };
    let has_config = generation_config.response_mime_type.is_some() || temperature.is_some();

    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![Part { text: prompt }],
        }],
        generation_config: has_config.then_some(generation_config),
    }
}

/// Concatenate the text parts of the first candidate
fn response_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(LlmError::InvalidResponse(format!("Prompt blocked: {}", reason)));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("Response has no candidates".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(LlmError::InvalidResponse(format!(
            "Candidate has no text (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }

    debug!(
        finish_reason = candidate.finish_reason.as_deref().unwrap_or("unknown"),
        "Received {} chars from provider",
        text.len()
    );
    Ok(text)
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.runtime.block_on(self.generate_content(prompt, None))
    }

    fn generate_structured(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, Self::Error> {
        self.runtime.block_on(self.generate_content(prompt, Some(schema)))
    }
}
