//! Covenant Domain Layer
//!
//! The extraction schema for contract documents and the provider boundary.
//!
//! ## Key Concepts
//!
//! - **Root record**: [`ContractAnalysisResult`], one per extracted contract
//! - **Detail records**: products, services, payments, penalties, SLAs,
//!   deliverables and parties, each carried as an ordered list
//! - **Schema**: the JSON Schema generated from the record types and sent to
//!   the provider
//! - **Provider**: the external model behind [`traits::LlmProvider`]
//!
//! ## Architecture
//!
//! - Plain value types, no I/O
//! - Records form a tree with no back-references
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

mod de;

pub mod contract;
pub mod details;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use contract::ContractAnalysisResult;
pub use details::{
    AddressDetail, DeliverableDetail, PartyDetail, PaymentMilestoneDetail, PenaltyDetail,
    SLADetail, ServiceDetail, SoftwareProductDetail,
};
pub use validation::Violation;
