//! Cross-field compatibility rules, applied in place after extraction.
//!
//! Each rule derives its warning deterministically from the description's
//! fields, and a warning is only appended (and only penalizes confidence)
//! when not already present — running the validator twice is a no-op.

use crate::model::{MaterialType, SoilDescription};

const WARNING_CONFIDENCE_FACTOR: f64 = 0.9;

/// Apply the compatibility rules to a description. Mismatched descriptors
/// invalidate it; missing expected descriptors only warn and lower
/// confidence.
pub fn validate(desc: &mut SoilDescription) {
    let mut new_warnings: Vec<String> = Vec::new();
    let mut invalid = false;

    let soil_type = (desc.material_type == MaterialType::Soil)
        .then_some(desc.primary_soil_type)
        .flatten();

    if let Some(soil_type) = soil_type.filter(|t| t.is_cohesive()) {
        if let Some(density) = desc.density {
            // The wrong-scale warning subsumes the missing-descriptor one
            new_warnings.push(format!(
                "density '{}' is not applicable to cohesive soil ({})",
                density, soil_type
            ));
            invalid = true;
        } else if desc.consistency.is_none() {
            new_warnings.push(format!(
                "cohesive soil ({}) has no consistency descriptor",
                soil_type
            ));
        }
    }

    if let Some(soil_type) = soil_type.filter(|t| t.is_granular()) {
        if let Some(consistency) = desc.consistency {
            new_warnings.push(format!(
                "consistency '{}' is not applicable to granular soil ({})",
                consistency, soil_type
            ));
            invalid = true;
        } else if desc.density.is_none() {
            new_warnings.push(format!(
                "granular soil ({}) has no density descriptor",
                soil_type
            ));
        }
    }

    if desc.plasticity_index.is_some() && !desc.is_cohesive_soil() {
        new_warnings.push("plasticity index is only meaningful for cohesive soils".to_string());
    }

    if desc.material_type == MaterialType::Soil {
        if let Some(strength) = desc.rock_strength {
            new_warnings.push(format!(
                "rock strength '{}' is not applicable to soil",
                strength
            ));
            invalid = true;
        }
        if let Some(grade) = desc.weathering_grade {
            new_warnings.push(format!(
                "weathering grade '{}' is not applicable to soil",
                grade
            ));
            invalid = true;
        }
        if let Some(structure) = desc.rock_structure {
            new_warnings.push(format!(
                "rock structure '{}' is not applicable to soil",
                structure
            ));
            invalid = true;
        }
    }

    for warning in new_warnings {
        if !desc.warnings.contains(&warning) {
            desc.warnings.push(warning);
            desc.confidence *= WARNING_CONFIDENCE_FACTOR;
        }
    }
    if invalid {
        desc.is_valid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Consistency, Density, PlasticityIndex, RockStrength, SoilType};

    fn cohesive(consistency: Option<Consistency>) -> SoilDescription {
        let mut desc = SoilDescription::new(MaterialType::Soil);
        desc.primary_soil_type = Some(SoilType::Clay);
        desc.consistency = consistency;
        desc
    }

    #[test]
    fn test_clean_description_untouched() {
        let mut desc = cohesive(Some(Consistency::Firm));
        validate(&mut desc);
        assert!(desc.is_valid);
        assert!(desc.warnings.is_empty());
        assert_eq!(desc.confidence, 1.0);
    }

    #[test]
    fn test_density_on_clay_invalidates() {
        let mut desc = cohesive(None);
        desc.density = Some(Density::Dense);
        validate(&mut desc);
        assert!(!desc.is_valid);
        assert!(desc.warnings.iter().any(|w| w.contains("density")));
    }

    #[test]
    fn test_missing_consistency_warns_but_stays_valid() {
        let mut desc = cohesive(None);
        validate(&mut desc);
        assert!(desc.is_valid);
        assert_eq!(desc.warnings.len(), 1);
        assert!(desc.confidence < 1.0);
    }

    #[test]
    fn test_consistency_on_sand_invalidates() {
        let mut desc = SoilDescription::new(MaterialType::Soil);
        desc.primary_soil_type = Some(SoilType::Sand);
        desc.density = Some(Density::Dense);
        desc.consistency = Some(Consistency::Firm);
        validate(&mut desc);
        assert!(!desc.is_valid);
    }

    #[test]
    fn test_plasticity_on_granular_warns_only() {
        let mut desc = SoilDescription::new(MaterialType::Soil);
        desc.primary_soil_type = Some(SoilType::Sand);
        desc.density = Some(Density::Dense);
        desc.plasticity_index = Some(PlasticityIndex::Low);
        validate(&mut desc);
        assert!(desc.is_valid);
        assert_eq!(desc.warnings.len(), 1);
    }

    #[test]
    fn test_rock_fields_on_soil_invalidate() {
        let mut desc = cohesive(Some(Consistency::Firm));
        desc.rock_strength = Some(RockStrength::Strong);
        validate(&mut desc);
        assert!(!desc.is_valid);
        assert!(desc.warnings.iter().any(|w| w.contains("rock strength")));
    }

    #[test]
    fn test_rock_fields_on_rock_accepted() {
        let mut desc = SoilDescription::new(MaterialType::Rock);
        desc.rock_strength = Some(RockStrength::Strong);
        validate(&mut desc);
        assert!(desc.is_valid);
        assert!(desc.warnings.is_empty());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut desc = cohesive(None);
        desc.density = Some(Density::Dense);
        validate(&mut desc);
        let after_one = desc.clone();
        validate(&mut desc);
        assert_eq!(desc.warnings, after_one.warnings);
        assert_eq!(desc.is_valid, after_one.is_valid);
        assert_eq!(desc.confidence, after_one.confidence);
    }

    #[test]
    fn test_mismatch_subsumes_missing_descriptor() {
        let mut desc = cohesive(None);
        desc.density = Some(Density::Dense);
        validate(&mut desc);
        // Exactly one warning: the wrong-scale descriptor
        assert_eq!(desc.warnings.len(), 1);
        assert!(desc.warnings[0].contains("density"));
    }

    #[test]
    fn test_warning_decay_compounds_multiplicatively() {
        let mut desc = cohesive(None);
        desc.rock_strength = Some(RockStrength::Weak);
        desc.weathering_grade = Some(crate::model::WeatheringGrade::HighlyWeathered);
        validate(&mut desc);
        // missing consistency + rock strength on soil + weathering on soil
        assert_eq!(desc.warnings.len(), 3);
        let expected = WARNING_CONFIDENCE_FACTOR.powi(3);
        assert!((desc.confidence - expected).abs() < 1e-12);
    }
}
