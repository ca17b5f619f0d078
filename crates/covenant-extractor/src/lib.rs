//! Covenant Extractor
//!
//! Converts contract text into a structured [`ContractAnalysisResult`] using an LLM.
//!
//! # Architecture
//!
//! ```text
//! Text → Extractor → LLM (prompt + JSON Schema) → Parser → ContractAnalysisResult
//! ```
//!
//! # Failure handling
//!
//! [`ContractExtractor::extract`] never fails loudly: it logs the cause and
//! returns `None`. The causes are kept apart so the log says which one
//! happened:
//!
//! - missing credential (no request is made)
//! - schema recursion (response nests too deeply to coerce)
//! - validation (wrong types, missing required fields, rule violations)
//! - any other provider or network error
//!
//! # Example Usage
//!
//! ```
//! use covenant_extractor::{ContractExtractor, ExtractorConfig};
//! use covenant_llm::MockProvider;
//!
//! let llm = MockProvider::new(r#"{"contract_title": "Acme Software License Agreement"}"#);
//! let extractor = ContractExtractor::new(llm, ExtractorConfig::default());
//!
//! let result = extractor.extract("This Software License Agreement ...").unwrap();
//! assert_eq!(result.contract_title, "Acme Software License Agreement");
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;


pub use config::{ExtractorConfig, MIN_NESTING_DEPTH};
pub use covenant_domain::ContractAnalysisResult;
pub use error::{ExtractorError, FailureKind};
pub use extractor::ContractExtractor;
