//! Contract analysis result - the root record of an extraction

use crate::de::{lenient_bool, lenient_date, null_as_default};
use crate::details::{
    DeliverableDetail, PartyDetail, PaymentMilestoneDetail, PenaltyDetail, SLADetail,
    ServiceDetail, SoftwareProductDetail,
};
use chrono::NaiveDate;
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured information extracted from a single contract document
///
/// Scalars the model could not determine are `None`; list fields are empty
/// rather than absent.
///
/// # Examples
///
/// ```
/// use covenant_domain::ContractAnalysisResult;
///
/// let result: ContractAnalysisResult = serde_json::from_str(
///     r#"{"contract_title": "Acme Software License Agreement"}"#,
/// ).unwrap();
///
/// assert_eq!(result.contract_title, "Acme Software License Agreement");
/// assert!(result.primary_software_products.is_empty());
/// assert!(result.effective_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContractAnalysisResult {
    // Metadata
    /// The main title of the contract document
    pub contract_title: String,

    /// The date the contract becomes legally effective (YYYY-MM-DD)
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub effective_date: Option<NaiveDate>,

    /// The date the contract term ends, if specified (YYYY-MM-DD)
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub expiration_date: Option<NaiveDate>,

    /// The date the contract was signed by the parties (YYYY-MM-DD)
    #[serde(default, deserialize_with = "lenient_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub execution_date: Option<NaiveDate>,

    /// Any unique identifier or reference number for the contract
    pub contract_id_reference: Option<String>,

    // Parties
    /// List of all identified parties involved in the contract
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<PartyDetail>")]
    pub parties: Vec<PartyDetail>,

    // Subject and scope
    /// Details of the main software/products being licensed or sold
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<SoftwareProductDetail>")]
    pub primary_software_products: Vec<SoftwareProductDetail>,

    /// Details of services included (e.g., maintenance, support, training)
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<ServiceDetail>")]
    pub included_services: Vec<ServiceDetail>,

    /// The stated purpose or intended use of the software/service, if mentioned
    pub intended_use_case_purpose: Option<String>,

    // Commercial terms
    /// Text describing the total financial value or pricing structure (e.g., '$50,000 USD', 'See Schedule B')
    pub total_contract_value_description: Option<String>,

    /// Breakdown of payment amounts, schedules, and currencies
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<PaymentMilestoneDetail>")]
    pub payment_milestones: Vec<PaymentMilestoneDetail>,

    /// Specific penalties mentioned (e.g., for late payment, non-compliance)
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<PenaltyDetail>")]
    pub penalty_clauses: Vec<PenaltyDetail>,

    /// Mention of any discounts or credits offered
    pub discounts_credits_description: Option<String>,

    // Licensing terms
    /// Description of the license grant (e.g., Perpetual, Subscription, SaaS, Term-based)
    pub license_type_description: Option<String>,

    /// Description of limits on users, devices, cores, etc.
    pub usage_limits_description: Option<String>,

    /// Geographic scope where the license is valid (e.g., Worldwide, North America, India)
    pub territory_description: Option<String>,

    /// Is transferring or sub-licensing the license permitted?
    #[serde(default, deserialize_with = "lenient_bool")]
    #[schemars(with = "Option<bool>")]
    pub transferability_sublicensing_allowed: Option<bool>,

    // Service levels
    /// Stated hours or availability of support (e.g., '9-5 EST', '24/7')
    pub support_hours_availability: Option<String>,

    /// Specific, measurable SLA commitments (e.g., response times, uptime)
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<SLADetail>")]
    pub service_level_agreements: Vec<SLADetail>,

    /// Information regarding scheduled maintenance windows or procedures
    pub maintenance_schedule_description: Option<String>,

    // Deliverables
    /// Specific items or milestones to be delivered under the contract
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Vec<DeliverableDetail>")]
    pub key_deliverables: Vec<DeliverableDetail>,

    // Risk and compliance
    /// Description of any required insurance coverage levels or types
    pub insurance_requirements_description: Option<String>,

    /// Summary of clauses related to data protection, GDPR, CCPA, HIPAA, etc.
    pub data_privacy_clause_summary: Option<String>,

    /// Statement regarding ownership of intellectual property created or licensed
    pub ip_ownership_description: Option<String>,
}

impl ContractAnalysisResult {
    /// Create a result carrying only a title, every other field unknown
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            contract_title: title.into(),
            effective_date: None,
            expiration_date: None,
            execution_date: None,
            contract_id_reference: None,
            parties: Vec::new(),
            primary_software_products: Vec::new(),
            included_services: Vec::new(),
            intended_use_case_purpose: None,
            total_contract_value_description: None,
            payment_milestones: Vec::new(),
            penalty_clauses: Vec::new(),
            discounts_credits_description: None,
            license_type_description: None,
            usage_limits_description: None,
            territory_description: None,
            transferability_sublicensing_allowed: None,
            support_hours_availability: None,
            service_level_agreements: Vec::new(),
            maintenance_schedule_description: None,
            key_deliverables: Vec::new(),
            insurance_requirements_description: None,
            data_privacy_clause_summary: None,
            ip_ownership_description: None,
        }
    }

    /// JSON Schema describing this record, suitable for a provider's structured output mode
    ///
    /// Subschemas are inlined so the result carries no `$ref`, and optional
    /// fields are typed as `[T, "null"]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use covenant_domain::ContractAnalysisResult;
    ///
    /// let schema = ContractAnalysisResult::output_schema();
    /// assert_eq!(schema["type"], "object");
    /// assert!(schema["properties"]["contract_title"].is_object());
    /// ```
    pub fn output_schema() -> serde_json::Value {
        let generator = SchemaSettings::draft2019_09()
            .with(|settings| {
                settings.option_add_null_type = true;
                settings.inline_subschemas = true;
                settings.meta_schema = None;
            })
            .into_generator();
        let root = generator.into_root_schema_for::<Self>();
        serde_json::to_value(root).unwrap_or(serde_json::Value::Null)
    }

    /// Total number of nested detail records across every list field
    pub fn detail_count(&self) -> usize {
        self.parties.len()
            + self.primary_software_products.len()
            + self.included_services.len()
            + self.payment_milestones.len()
            + self.penalty_clauses.len()
            + self.service_level_agreements.len()
            + self.key_deliverables.len()
    }
}
