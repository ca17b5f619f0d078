//! Semantic validation of a deserialized contract record
//!
//! Type coercion is serde's job. The rules here cover what a well-typed
//! payload can still get wrong: blank required strings, negative amounts
//! and date ranges that run backwards.

use crate::ContractAnalysisResult;
use std::fmt;

/// A single rule violation, located by a JSON-style field path
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A required text field is empty or whitespace
    BlankField {
        /// Path of the offending field, e.g. `penalty_clauses[1].condition`
        path: String,
    },

    /// A monetary amount is negative or not finite
    InvalidAmount {
        /// Path of the offending field
        path: String,
        /// The rejected value
        amount: f64,
    },

    /// The contract expires before it takes effect
    ExpiresBeforeEffective {
        /// Effective date as written in the record
        effective: String,
        /// Expiration date as written in the record
        expiration: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BlankField { path } => write!(f, "{} must not be blank", path),
            Violation::InvalidAmount { path, amount } => {
                write!(f, "{} must be a non-negative amount, got {}", path, amount)
            }
            Violation::ExpiresBeforeEffective { effective, expiration } => write!(
                f,
                "expiration_date {} precedes effective_date {}",
                expiration, effective
            ),
        }
    }
}

impl ContractAnalysisResult {
    /// Check semantic rules that the type system cannot express
    ///
    /// Returns every violation found, in field order. An empty list means the
    /// record is valid.
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        require(&mut violations, "contract_title", &self.contract_title);

        if let (Some(effective), Some(expiration)) = (self.effective_date, self.expiration_date) {
            if expiration < effective {
                violations.push(Violation::ExpiresBeforeEffective {
                    effective: effective.to_string(),
                    expiration: expiration.to_string(),
                });
            }
        }

        for (i, party) in self.parties.iter().enumerate() {
            require(&mut violations, &format!("parties[{}].name", i), &party.name);
        }
        for (i, product) in self.primary_software_products.iter().enumerate() {
            require(
                &mut violations,
                &format!("primary_software_products[{}].name", i),
                &product.name,
            );
        }
        for (i, service) in self.included_services.iter().enumerate() {
            require(
                &mut violations,
                &format!("included_services[{}].service_type", i),
                &service.service_type,
            );
        }
        for (i, milestone) in self.payment_milestones.iter().enumerate() {
            require(
                &mut violations,
                &format!("payment_milestones[{}].description", i),
                &milestone.description,
            );
            if let Some(amount) = milestone.amount {
                if !amount.is_finite() || amount < 0.0 {
                    violations.push(Violation::InvalidAmount {
                        path: format!("payment_milestones[{}].amount", i),
                        amount,
                    });
                }
            }
        }
        for (i, penalty) in self.penalty_clauses.iter().enumerate() {
            require(
                &mut violations,
                &format!("penalty_clauses[{}].condition", i),
                &penalty.condition,
            );
            require(
                &mut violations,
                &format!("penalty_clauses[{}].penalty_description", i),
                &penalty.penalty_description,
            );
        }
        for (i, sla) in self.service_level_agreements.iter().enumerate() {
            require(
                &mut violations,
                &format!("service_level_agreements[{}].metric", i),
                &sla.metric,
            );
            require(
                &mut violations,
                &format!("service_level_agreements[{}].commitment", i),
                &sla.commitment,
            );
        }
        for (i, deliverable) in self.key_deliverables.iter().enumerate() {
            require(
                &mut violations,
                &format!("key_deliverables[{}].description", i),
                &deliverable.description,
            );
        }

        violations
    }

    /// Validate the record, joining all violations into one message on failure
    pub fn validate(&self) -> Result<(), String> {
        let violations = self.violations();
        if violations.is_empty() {
            return Ok(());
        }
        Err(violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "))
    }
}

fn require(violations: &mut Vec<Violation>, path: &str, value: &str) {
    if value.trim().is_empty() {
        violations.push(Violation::BlankField {
            path: path.to_string(),
        });
    }
}
