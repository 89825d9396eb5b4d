//! Read-only semantic audit of a parsed description.
//!
//! Runs after validation as a second opinion: it never touches the
//! description and reports through its own record type, so callers can
//! show diagnostics without re-parsing.

use crate::model::{ConstituentAmount, SoilDescription};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyType {
    MismatchedStrengthDescriptor,
    MissingStrengthDescriptor,
    ConflictingProperties,
    UnusualConstituentCombination,
    ExcessiveConstituents,
    DuplicateConstituents,
    SpellingCorrection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    pub anomaly_type: AnomalyType,
    pub severity: Severity,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyResult {
    pub anomalies: Vec<Anomaly>,
    pub has_anomalies: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_severity: Option<Severity>,
}

const MAX_REASONABLE_CONSTITUENTS: usize = 3;

/// Audit a description for semantically implausible combinations.
pub fn detect(desc: &SoilDescription) -> AnomalyResult {
    let mut anomalies = Vec::new();

    check_strength_descriptors(desc, &mut anomalies);
    check_conflicting_properties(desc, &mut anomalies);
    check_constituents(desc, &mut anomalies);
    check_spelling_corrections(desc, &mut anomalies);

    let overall_severity = anomalies.iter().map(|a| a.severity).max();
    AnomalyResult {
        has_anomalies: !anomalies.is_empty(),
        overall_severity,
        anomalies,
    }
}

fn check_strength_descriptors(desc: &SoilDescription, anomalies: &mut Vec<Anomaly>) {
    if desc.is_cohesive_soil() {
        if desc.density.is_some() {
            anomalies.push(Anomaly {
                anomaly_type: AnomalyType::MismatchedStrengthDescriptor,
                severity: Severity::High,
                description: "cohesive soil described with a density term".to_string(),
                suggestion: Some("use a consistency term (soft, firm, stiff...)".to_string()),
            });
        } else if desc.consistency.is_none() {
            anomalies.push(Anomaly {
                anomaly_type: AnomalyType::MissingStrengthDescriptor,
                severity: Severity::Medium,
                description: "cohesive soil with no consistency descriptor".to_string(),
                suggestion: None,
            });
        }
    }

    if desc.is_granular_soil() {
        if desc.consistency.is_some() {
            anomalies.push(Anomaly {
                anomaly_type: AnomalyType::MismatchedStrengthDescriptor,
                severity: Severity::High,
                description: "granular soil described with a consistency term".to_string(),
                suggestion: Some("use a density term (loose, medium dense, dense...)".to_string()),
            });
        } else if desc.density.is_none() {
            anomalies.push(Anomaly {
                anomaly_type: AnomalyType::MissingStrengthDescriptor,
                severity: Severity::Medium,
                description: "granular soil with no density descriptor".to_string(),
                suggestion: None,
            });
        }
    }
}

fn check_conflicting_properties(desc: &SoilDescription, anomalies: &mut Vec<Anomaly>) {
    if desc.consistency.is_some() && desc.density.is_some() {
        anomalies.push(Anomaly {
            anomaly_type: AnomalyType::ConflictingProperties,
            severity: Severity::High,
            description: "both consistency and density present on one description".to_string(),
            suggestion: Some("keep the descriptor matching the primary soil type".to_string()),
        });
    }
}

fn check_constituents(desc: &SoilDescription, anomalies: &mut Vec<Anomaly>) {
    // A "very" constituent that would outrank the stated primary suggests
    // the description has the hierarchy backwards
    if let Some(primary) = desc.primary_soil_type {
        if let Some(primary_rank) = primary.dominance() {
            for constituent in &desc.secondary_constituents {
                let outranks = constituent.amount == ConstituentAmount::Very
                    && constituent
                        .soil_type
                        .dominance()
                        .is_some_and(|rank| rank > primary_rank);
                if outranks {
                    anomalies.push(Anomaly {
                        anomaly_type: AnomalyType::UnusualConstituentCombination,
                        severity: Severity::Medium,
                        description: format!(
                            "'very {}' dominates the stated primary type {}",
                            constituent.soil_type.adjective(),
                            primary.label(),
                        ),
                        suggestion: Some(format!(
                            "consider describing as {} {}",
                            primary.adjective(),
                            constituent.soil_type.label(),
                        )),
                    });
                }
            }
        }
    }

    if desc.secondary_constituents.len() > MAX_REASONABLE_CONSTITUENTS {
        anomalies.push(Anomaly {
            anomaly_type: AnomalyType::ExcessiveConstituents,
            severity: Severity::Low,
            description: format!(
                "{} secondary constituents listed; more than {} is rarely meaningful",
                desc.secondary_constituents.len(),
                MAX_REASONABLE_CONSTITUENTS,
            ),
            suggestion: None,
        });
    }

    for (i, first) in desc.secondary_constituents.iter().enumerate() {
        for second in &desc.secondary_constituents[i + 1..] {
            if first.soil_type == second.soil_type && first.amount != second.amount {
                anomalies.push(Anomaly {
                    anomaly_type: AnomalyType::DuplicateConstituents,
                    severity: Severity::Low,
                    description: format!(
                        "constituent '{}' appears as both '{}' and '{}'",
                        first.soil_type.adjective(),
                        first.amount,
                        second.amount,
                    ),
                    suggestion: None,
                });
            }
        }
    }
}

fn check_spelling_corrections(desc: &SoilDescription, anomalies: &mut Vec<Anomaly>) {
    for correction in &desc.spelling_corrections {
        anomalies.push(Anomaly {
            anomaly_type: AnomalyType::SpellingCorrection,
            severity: Severity::Low,
            description: format!(
                "'{}' was read as '{}'",
                correction.original, correction.corrected
            ),
            suggestion: None,
        });
    }
}
