//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, FailureKind};
use crate::parser::parse_llm_response;
use crate::prompt::PromptBuilder;
use covenant_domain::traits::LlmProvider;
use covenant_domain::ContractAnalysisResult;
use tracing::{debug, error, info, warn};

/// The Extractor turns contract text into a [`ContractAnalysisResult`]
///
/// Each call is independent: one provider request, no shared mutable state.
pub struct ContractExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: ExtractorConfig,
    schema: serde_json::Value,
}

impl<L> ContractExtractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self {
            llm_provider,
            config,
            schema: ContractAnalysisResult::output_schema(),
        }
    }

    /// The provider this extractor calls
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// The JSON Schema sent with every request
    pub fn schema(&self) -> &serde_json::Value {
        &self.schema
    }

    /// Extract contract terms, logging any failure and returning `None`
    ///
    /// No error escapes this call; use [`try_extract`](Self::try_extract)
    /// to see which kind of failure occurred.
    pub fn extract(&self, text: &str) -> Option<ContractAnalysisResult> {
        match self.try_extract(text) {
            Ok(result) => Some(result),
            Err(e) => {
                log_failure(&e);
                None
            }
        }
    }

    /// Extract contract terms, returning the classified error on failure
    pub fn try_extract(&self, text: &str) -> Result<ContractAnalysisResult, ExtractorError> {
        if text.trim().is_empty() {
            return Err(ExtractorError::EmptyText);
        }

        if !self.llm_provider.has_credentials() {
            return Err(ExtractorError::MissingCredential(
                self.config.provider.api_key_env.clone(),
            ));
        }

        info!(
            "Running contract analysis with model '{}', text length {}",
            self.config.provider.model,
            text.len()
        );

        let builder = PromptBuilder::new(text);
        let builder = if self.config.embed_schema_in_prompt {
            builder.with_schema(&self.schema)
        } else {
            builder
        };
        let prompt = builder.build();

        debug!("Prompt length: {} chars", prompt.len());

        let llm_response = self
            .llm_provider
            .generate_structured(&prompt, &self.schema)
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!("LLM response length: {} chars", llm_response.len());

        let result = parse_llm_response(&llm_response, &self.schema, self.config.max_nesting_depth)?;

        info!(
            "Extraction successful: '{}', {} detail records",
            result.contract_title,
            result.detail_count()
        );

        Ok(result)
    }
}

fn log_failure(e: &ExtractorError) {
    let kind = e.kind();
    match kind {
        FailureKind::MissingCredential => {
            warn!(%kind, "{}; extraction not attempted", e);
        }
        FailureKind::SchemaRecursion => {
            error!(
                %kind,
                "{}; the response nests too deeply to coerce, consider simplifying the schema",
                e
            );
        }
        FailureKind::Validation | FailureKind::EmptyInput | FailureKind::Configuration => {
            error!(%kind, "{}", e);
        }
        FailureKind::Provider => {
            error!(%kind, "Unexpected error during extraction: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_llm::{LlmError, MockProvider};

    fn create_test_extractor(llm: MockProvider) -> ContractExtractor<MockProvider> {
        ContractExtractor::new(llm, ExtractorConfig::default())
    }

    #[test]
    fn test_extract_minimal_response() {
        let extractor = create_test_extractor(MockProvider::new(r#"{"contract_title": "NDA"}"#));

        let result = extractor.extract("Some contract").unwrap();
        assert_eq!(result.contract_title, "NDA");
        assert_eq!(result.detail_count(), 0);
    }

    #[test]
    fn test_extract_empty_text_skips_provider() {
        let extractor = create_test_extractor(MockProvider::new(r#"{"contract_title": "NDA"}"#));

        assert!(matches!(extractor.try_extract("  \n"), Err(ExtractorError::EmptyText)));
        assert_eq!(extractor.provider().call_count(), 0);
    }

    #[test]
    fn test_schema_sent_to_provider() {
        let extractor = create_test_extractor(MockProvider::new(r#"{"contract_title": "NDA"}"#));
        extractor.extract("Some contract").unwrap();

        assert_eq!(extractor.provider().last_schema().as_ref(), Some(extractor.schema()));
    }

    #[test]
    fn test_provider_error_is_classified() {
        let extractor =
            create_test_extractor(MockProvider::failing(LlmError::ModelNotAvailable("x".into())));

        let err = extractor.try_extract("Some contract").unwrap_err();
        assert_eq!(err.kind(), FailureKind::Provider);
        assert!(err.to_string().contains("Model not available"));
    }
}
