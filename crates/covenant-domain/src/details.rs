//! Nested detail records carried by a [`ContractAnalysisResult`](crate::ContractAnalysisResult)
//!
//! Each record is a plain value: built once by the response parser and never
//! mutated afterwards. Field doc comments double as the `description` of the
//! generated JSON Schema, so they are written for the model as much as for
//! the reader.

use crate::de::{lenient_date, lenient_f64, null_as_default};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Postal address of a contracting party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AddressDetail {
    /// Street and number
    pub street: Option<String>,

    /// City or locality
    pub city: Option<String>,

    /// State, province or region
    pub state_province: Option<String>,

    /// Postal or ZIP code
    pub postal_code: Option<String>,

    /// Country name or code
    pub country: Option<String>,
}

/// A party to the contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PartyDetail {
    /// Full legal name of the party
    pub name: String,

    /// e.g., Licensor, Licensee, Vendor, Client, Party A, Party B
    pub role: Option<String>,

    /// Physical or mailing address
    pub address: Option<AddressDetail>,

    /// Name of the person who signed, if identifiable
    pub authorized_signatory_name: Option<String>,

    /// Exact text identifying this party
    pub full_text_reference: Option<String>,
}

/// A software product licensed or sold under the contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SoftwareProductDetail {
    /// Primary name of the software or product
    pub name: String,

    /// Specific version identifier, if mentioned
    pub version: Option<String>,

    /// List of included modules or key features
    #[serde(default, alias = "modules_features", deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<String>")]
    pub features: Vec<String>,

    /// Brief description of the software/product
    pub description: Option<String>,
}

/// A service included in the contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceDetail {
    /// Type of service provided, e.g., Maintenance, Support, Training, Integration
    pub service_type: String,

    /// Details about the service scope
    pub description: Option<String>,
}

/// One payment in the commercial schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentMilestoneDetail {
    /// What triggers or describes this payment
    pub description: String,

    /// Monetary amount
    #[serde(default, deserialize_with = "lenient_f64")]
    #[schemars(with = "Option<f64>")]
    pub amount: Option<f64>,

    /// Currency code (e.g., USD, EUR, INR)
    pub currency: Option<String>,

    /// When the payment is due (e.g., 'Net 30', 'Upon signing', specific date)
    pub due_date_description: Option<String>,

    /// Specific calendar due date (YYYY-MM-DD), if available
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub due_date: Option<NaiveDate>,
}

/// A penalty clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PenaltyDetail {
    /// Condition triggering the penalty (e.g., Late Payment, Non-performance)
    pub condition: String,

    /// Description of the penalty (e.g., '1.5% interest per month', 'Fixed fee')
    pub penalty_description: String,
}

/// A measurable service level commitment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SLADetail {
    /// The SLA metric (e.g., Uptime, Response Time, Resolution Time)
    pub metric: String,

    /// The specific commitment (e.g., '99.9% uptime', '4 hours for critical issues')
    pub commitment: String,

    /// Window over which the metric is measured (e.g., 'monthly', 'per incident')
    pub measurement_window: Option<String>,

    /// Remedy or credit for failing to meet the SLA
    pub remedy: Option<String>,
}

/// An item or milestone to be delivered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeliverableDetail {
    /// Description of the deliverable item or milestone
    pub description: String,

    /// When it's due (e.g., 'Phase 1 complete', specific date)
    pub due_date_description: Option<String>,

    /// Specific calendar due date (YYYY-MM-DD), if available
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub due_date: Option<NaiveDate>,

    /// Brief summary of how the deliverable is accepted
    pub acceptance_criteria_summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_features_default_to_empty() {
        let product: SoftwareProductDetail =
            serde_json::from_str(r#"{"name": "WidgetPro"}"#).unwrap();
        assert_eq!(product.name, "WidgetPro");
        assert!(product.version.is_none());
        assert!(product.features.is_empty());
    }

    #[test]
    fn test_product_features_null_becomes_empty() {
        let product: SoftwareProductDetail =
            serde_json::from_str(r#"{"name": "WidgetPro", "features": null}"#).unwrap();
        assert!(product.features.is_empty());
    }

    #[test]
    fn test_product_accepts_modules_features_alias() {
        let product: SoftwareProductDetail = serde_json::from_str(
            r#"{"name": "FusionPlatform", "modules_features": ["DataCore", "AnalyticsSuite"]}"#,
        )
        .unwrap();
        assert_eq!(product.features, vec!["DataCore", "AnalyticsSuite"]);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result: Result<PenaltyDetail, _> =
            serde_json::from_str(r#"{"condition": "Late payment"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("penalty_description"));
    }

    #[test]
    fn test_payment_due_date_parses_iso_date() {
        let milestone: PaymentMilestoneDetail = serde_json::from_str(
            r#"{"description": "Implementation", "amount": 25000, "currency": "USD", "due_date": "2024-07-10"}"#,
        )
        .unwrap();
        assert_eq!(milestone.amount, Some(25000.0));
        assert_eq!(milestone.due_date, NaiveDate::from_ymd_opt(2024, 7, 10));
    }

    #[test]
    fn test_payment_rejects_malformed_date() {
        let result: Result<PaymentMilestoneDetail, _> = serde_json::from_str(
            r#"{"description": "Implementation", "due_date": "July 10th"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_payment_accepts_loosely_typed_values() {
        let milestone: PaymentMilestoneDetail = serde_json::from_str(
            r#"{"description": "Fee", "amount": "25000", "due_date": "2024-07-10T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(milestone.amount, Some(25000.0));
        assert_eq!(milestone.due_date, NaiveDate::from_ymd_opt(2024, 7, 10));
    }

    #[test]
    fn test_deliverable_due_date_null() {
        let deliverable: DeliverableDetail =
            serde_json::from_str(r#"{"description": "Phase 1", "due_date": null}"#).unwrap();
        assert!(deliverable.due_date.is_none());
    }

    #[test]
    fn test_party_with_nested_address() {
        let party: PartyDetail = serde_json::from_str(
            r#"{"name": "Quantum Dynamics Inc.", "role": "Licensor",
                "address": {"city": "Palo Alto", "state_province": "CA"}}"#,
        )
        .unwrap();
        let address = party.address.unwrap();
        assert_eq!(address.city.as_deref(), Some("Palo Alto"));
        assert!(address.street.is_none());
    }
}
