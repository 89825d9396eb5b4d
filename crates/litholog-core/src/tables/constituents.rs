//! Proportion guidance for secondary constituents.
//!
//! The percentage bands are fixed by the amount qualifier alone; the
//! primary soil type only moves the confidence (a constituent repeating
//! the primary type is implausible and scores low).

use crate::model::{
    ConstituentAmount, ConstituentGuidance, ConstituentProportion, SecondaryConstituent, SoilType,
    ValueRange,
};

const BASE_CONFIDENCE: f64 = 0.85;
const SELF_CONSTITUENT_FACTOR: f64 = 0.8;
const MIN_CONFIDENCE: f64 = 0.05;

/// Percent-by-mass band for an amount qualifier.
pub fn proportion_band(amount: ConstituentAmount) -> ValueRange {
    match amount {
        ConstituentAmount::Slightly => ValueRange::new(5.0, 12.0, None),
        ConstituentAmount::Moderately => ValueRange::new(12.0, 30.0, None),
        ConstituentAmount::Very => ValueRange::new(30.0, 45.0, None),
    }
}

/// Build proportion guidance for a description's constituents. Returns
/// `None` for an empty constituent list.
pub fn lookup(
    primary: Option<SoilType>,
    constituents: &[SecondaryConstituent],
) -> Option<ConstituentGuidance> {
    if constituents.is_empty() {
        return None;
    }

    let mut confidence = BASE_CONFIDENCE;
    let mut entries = Vec::with_capacity(constituents.len());

    for constituent in constituents {
        if primary == Some(constituent.soil_type) {
            confidence *= SELF_CONSTITUENT_FACTOR;
        }
        entries.push(ConstituentProportion {
            soil_type: constituent.soil_type,
            range: proportion_band(constituent.amount),
        });
    }

    Some(ConstituentGuidance {
        constituents: entries,
        confidence: confidence.max(MIN_CONFIDENCE),
    })
}
