//! Strength-parameter bands keyed by qualitative descriptor.
//!
//! Consistency maps to undrained shear strength (kPa), density to SPT
//! N-value (blows/300mm), rock strength to UCS (MPa). Within each scale the
//! single grades are tabulated in rank order and their lower bounds
//! strictly increase; range descriptors span their endpoint grades at
//! reduced confidence.

use crate::model::{
    Consistency, Density, MaterialType, RockStrength, RockType, SoilType, StrengthParameterType,
    StrengthParameters, ValueRange,
};

/// Which qualitative scale a descriptor belongs to.
#[derive(Debug, Clone, Copy)]
pub enum StrengthDescriptor {
    Consistency(Consistency),
    Density(Density),
    RockStrength(RockStrength),
}

// Base confidence before subtype scaling.
const GRADE_CONFIDENCE: f64 = 1.0;
const RANGE_CONFIDENCE: f64 = 0.85;

/// Look up the strength band for a descriptor. Returns `None` only when the
/// descriptor's scale is structurally inapplicable to the material
/// (a rock-strength grade on soil, a soil descriptor on rock).
pub fn lookup(
    material: MaterialType,
    descriptor: StrengthDescriptor,
    soil_subtype: Option<SoilType>,
    rock_subtype: Option<RockType>,
) -> Option<StrengthParameters> {
    match (material, descriptor) {
        (MaterialType::Soil, StrengthDescriptor::Consistency(c)) => {
            let (range, scale) = consistency_band(c);
            Some(StrengthParameters {
                parameter_type: StrengthParameterType::UndrainedShearStrength,
                range,
                confidence: scale * soil_confidence(soil_subtype),
            })
        }
        (MaterialType::Soil, StrengthDescriptor::Density(d)) => {
            let (range, scale) = density_band(d);
            Some(StrengthParameters {
                parameter_type: StrengthParameterType::SptNValue,
                range,
                confidence: scale * soil_confidence(soil_subtype),
            })
        }
        (MaterialType::Rock, StrengthDescriptor::RockStrength(r)) => {
            Some(StrengthParameters {
                parameter_type: StrengthParameterType::Ucs,
                range: rock_band(r),
                confidence: GRADE_CONFIDENCE * rock_confidence(rock_subtype),
            })
        }
        _ => None,
    }
}

/// Undrained shear strength band in kPa, plus the grade/range confidence
/// scale.
fn consistency_band(c: Consistency) -> (ValueRange, f64) {
    let (lo, hi, typ) = match c {
        Consistency::VerySoft => (0.0, 20.0, 10.0),
        Consistency::Soft => (20.0, 40.0, 30.0),
        Consistency::Firm => (40.0, 60.0, 50.0),
        Consistency::Stiff => (75.0, 150.0, 100.0),
        Consistency::VeryStiff => (150.0, 300.0, 200.0),
        Consistency::Hard => (300.0, 600.0, 400.0),
        Consistency::SoftToFirm => (20.0, 60.0, 40.0),
        Consistency::FirmToStiff => (40.0, 150.0, 75.0),
        Consistency::StiffToVeryStiff => (75.0, 300.0, 150.0),
    };
    let scale = if c.is_range() {
        RANGE_CONFIDENCE
    } else {
        GRADE_CONFIDENCE
    };
    (ValueRange::new(lo, hi, Some(typ)), scale)
}

/// SPT N-value band in blows/300mm, plus the grade/range confidence scale.
fn density_band(d: Density) -> (ValueRange, f64) {
    let (lo, hi, typ) = match d {
        Density::VeryLoose => (0.0, 4.0, 2.0),
        Density::Loose => (4.0, 10.0, 7.0),
        Density::MediumDense => (10.0, 30.0, 20.0),
        Density::Dense => (30.0, 50.0, 40.0),
        Density::VeryDense => (50.0, 80.0, 60.0),
        Density::LooseToMediumDense => (4.0, 30.0, 15.0),
        Density::MediumDenseToDense => (10.0, 50.0, 30.0),
        Density::DenseToVeryDense => (30.0, 80.0, 50.0),
    };
    let scale = if d.is_range() {
        RANGE_CONFIDENCE
    } else {
        GRADE_CONFIDENCE
    };
    (ValueRange::new(lo, hi, Some(typ)), scale)
}

/// UCS band in MPa.
fn rock_band(r: RockStrength) -> ValueRange {
    let (lo, hi, typ) = match r {
        RockStrength::VeryWeak => (0.3, 1.25, 0.6),
        RockStrength::Weak => (1.25, 5.0, 2.5),
        RockStrength::ModeratelyWeak => (5.0, 12.5, 8.0),
        RockStrength::ModeratelyStrong => (12.5, 50.0, 25.0),
        RockStrength::Strong => (50.0, 100.0, 75.0),
        RockStrength::VeryStrong => (100.0, 250.0, 150.0),
        RockStrength::ExtremelyStrong => (250.0, 500.0, 350.0),
    };
    ValueRange::new(lo, hi, Some(typ))
}

/// Correlation confidence by soil subtype. Organic soils take a heavy cut:
/// index correlations are unreliable in peat.
fn soil_confidence(subtype: Option<SoilType>) -> f64 {
    match subtype {
        Some(SoilType::Clay) | Some(SoilType::Sand) => 0.85,
        Some(SoilType::Silt) | Some(SoilType::Gravel) => 0.8,
        Some(SoilType::Peat) | Some(SoilType::Organic) => 0.5,
        None => 0.75,
    }
}

/// Correlation confidence by rock subtype. Weathering-sensitive lithologies
/// score lower.
fn rock_confidence(subtype: Option<RockType>) -> f64 {
    match subtype {
        Some(RockType::Chalk) | Some(RockType::Mudstone) | Some(RockType::Shale) => 0.7,
        Some(_) => 0.8,
        None => 0.75,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firm_clay_band() {
        let params = lookup(
            MaterialType::Soil,
            StrengthDescriptor::Consistency(Consistency::Firm),
            Some(SoilType::Clay),
            None,
        )
        .unwrap();
        assert_eq!(
            params.parameter_type,
            StrengthParameterType::UndrainedShearStrength
        );
        assert!(params.range.lower_bound >= 20.0);
        assert!(params.range.upper_bound <= 60.0);
        assert_eq!(params.range.midpoint(), 50.0);
    }

    #[test]
    fn test_consistency_lower_bounds_monotonic() {
        let bounds: Vec<f64> = Consistency::GRADES
            .iter()
            .map(|&c| consistency_band(c).0.lower_bound)
            .collect();
        for pair in bounds.windows(2) {
            assert!(pair[1] > pair[0], "consistency bounds not monotonic");
        }
    }

    #[test]
    fn test_density_lower_bounds_monotonic() {
        let bounds: Vec<f64> = Density::GRADES
            .iter()
            .map(|&d| density_band(d).0.lower_bound)
            .collect();
        for pair in bounds.windows(2) {
            assert!(pair[1] > pair[0], "density bounds not monotonic");
        }
    }

    #[test]
    fn test_rock_lower_bounds_monotonic() {
        let bounds: Vec<f64> = RockStrength::ALL
            .iter()
            .map(|&r| rock_band(r).lower_bound)
            .collect();
        for pair in bounds.windows(2) {
            assert!(pair[1] > pair[0], "rock strength bounds not monotonic");
        }
    }

    #[test]
    fn test_typical_values_inside_bounds() {
        for c in Consistency::ALL {
            let (range, _) = consistency_band(c);
            let typ = range.typical_value.unwrap();
            assert!(range.lower_bound <= typ && typ <= range.upper_bound);
        }
        for d in Density::ALL {
            let (range, _) = density_band(d);
            let typ = range.typical_value.unwrap();
            assert!(range.lower_bound <= typ && typ <= range.upper_bound);
        }
        for r in RockStrength::ALL {
            let range = rock_band(r);
            let typ = range.typical_value.unwrap();
            assert!(range.lower_bound <= typ && typ <= range.upper_bound);
        }
    }

    #[test]
    fn test_inapplicable_combinations_return_none() {
        assert!(lookup(
            MaterialType::Soil,
            StrengthDescriptor::RockStrength(RockStrength::Strong),
            None,
            None,
        )
        .is_none());
        assert!(lookup(
            MaterialType::Rock,
            StrengthDescriptor::Consistency(Consistency::Firm),
            None,
            None,
        )
        .is_none());
        assert!(lookup(
            MaterialType::Rock,
            StrengthDescriptor::Density(Density::Dense),
            None,
            None,
        )
        .is_none());
    }

    #[test]
    fn test_range_descriptor_confidence_reduced() {
        let single = lookup(
            MaterialType::Soil,
            StrengthDescriptor::Consistency(Consistency::Firm),
            Some(SoilType::Clay),
            None,
        )
        .unwrap();
        let range = lookup(
            MaterialType::Soil,
            StrengthDescriptor::Consistency(Consistency::FirmToStiff),
            Some(SoilType::Clay),
            None,
        )
        .unwrap();
        assert!(range.confidence < single.confidence);
    }

    #[test]
    fn test_peat_confidence_heavily_reduced() {
        let clay = lookup(
            MaterialType::Soil,
            StrengthDescriptor::Consistency(Consistency::Firm),
            Some(SoilType::Clay),
            None,
        )
        .unwrap();
        let peat = lookup(
            MaterialType::Soil,
            StrengthDescriptor::Consistency(Consistency::Firm),
            Some(SoilType::Peat),
            None,
        )
        .unwrap();
        assert!(peat.confidence < clay.confidence);
        assert!(peat.confidence <= 0.5);
    }

    #[test]
    fn test_rock_ucs_unit_and_band() {
        let params = lookup(
            MaterialType::Rock,
            StrengthDescriptor::RockStrength(RockStrength::Strong),
            None,
            Some(RockType::Limestone),
        )
        .unwrap();
        assert_eq!(params.parameter_type, StrengthParameterType::Ucs);
        assert_eq!(params.parameter_type.unit(), "MPa");
        assert_eq!(params.range.lower_bound, 50.0);
        assert_eq!(params.range.upper_bound, 100.0);
    }
}
