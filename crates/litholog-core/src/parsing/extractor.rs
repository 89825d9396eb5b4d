//! Resolves a token sequence into one coherent `SoilDescription`,
//! attaching quantitative guidance from the strength and constituent
//! tables and scoring a provisional confidence.

use crate::model::{
    Color, Consistency, ConstituentAmount, Density, MaterialType, MoistureContent, ParticleSize,
    PlasticityIndex, RockStrength, RockStructure, RockType, SecondaryConstituent, SoilDescription,
    SoilType, SpellingCorrection, WeatheringGrade,
};
use crate::parsing::tokenizer::{tokenize, Token, TokenKind};
use crate::tables::{constituents, strength};

// Multiplicative confidence penalties. Corrections cost less than words
// the lexer could not place at all.
const UNKNOWN_TOKEN_PENALTY: f64 = 0.85;
const CORRECTION_PENALTY: f64 = 0.95;
const MISSING_FIELD_PENALTY: f64 = 0.9;
const DEFAULTED_MATERIAL_PENALTY: f64 = 0.8;

/// Parse a description into a structured value. Pure function of the input
/// and the static vocabulary tables; never fails. The caller is expected
/// to run the validator afterwards (`crate::parse` does).
pub fn extract(text: &str) -> SoilDescription {
    let lexed = tokenize(text);

    let mut desc = SoilDescription::new(MaterialType::Soil);
    desc.raw_description = text.to_string();
    desc.spelling_corrections = lexed.corrections;

    if lexed.tokens.is_empty() {
        // Structural-empty result: nothing to say, no confidence in it
        desc.confidence = 0.0;
        return desc;
    }

    desc.material_type = classify_material(&lexed.tokens);

    let rock_evidence = count_rock_evidence(&lexed.tokens);
    let soil_evidence = count_soil_evidence(&lexed.tokens);

    let mut unknown_count = 0usize;
    let mut i = 0;
    while i < lexed.tokens.len() {
        let token = &lexed.tokens[i];
        let term = canonical_term(token, &desc.spelling_corrections);

        match token.kind {
            TokenKind::Consistency | TokenKind::ConsistencyRange => {
                if desc.consistency.is_none() {
                    desc.consistency = Consistency::from_str_loose(&term);
                }
            }
            TokenKind::Density | TokenKind::DensityRange => {
                if desc.density.is_none() {
                    desc.density = Density::from_str_loose(&term);
                }
            }
            TokenKind::SoilType => {
                if desc.primary_soil_type.is_none() {
                    desc.primary_soil_type = SoilType::from_str_loose(&term);
                }
            }
            TokenKind::RockStrength => {
                if desc.rock_strength.is_none() {
                    desc.rock_strength = RockStrength::from_str_loose(&term);
                }
            }
            TokenKind::RockType => {
                if desc.primary_rock_type.is_none() {
                    desc.primary_rock_type = RockType::from_str_loose(&term);
                }
            }
            TokenKind::WeatheringGrade => {
                if desc.weathering_grade.is_none() {
                    desc.weathering_grade = WeatheringGrade::from_str_loose(&term);
                }
            }
            TokenKind::RockStructure => {
                if desc.rock_structure.is_none() {
                    desc.rock_structure = RockStructure::from_str_loose(&term);
                }
            }
            TokenKind::Proportion => {
                // A proportion qualifier binds to the adjective immediately
                // after it; an unpaired one carries no information
                if let Some(next) = lexed.tokens.get(i + 1) {
                    if next.kind == TokenKind::Adjective {
                        let next_term = canonical_term(next, &desc.spelling_corrections);
                        if let (Some(amount), Some(soil_type)) = (
                            ConstituentAmount::from_str_loose(&term),
                            SoilType::from_adjective(&next_term),
                        ) {
                            desc.secondary_constituents
                                .push(SecondaryConstituent { amount, soil_type });
                            i += 2;
                            continue;
                        }
                    }
                }
            }
            TokenKind::Adjective => {
                // Bare adjective: the middle proportion band by convention
                if let Some(soil_type) = SoilType::from_adjective(&term) {
                    desc.secondary_constituents.push(SecondaryConstituent {
                        amount: ConstituentAmount::Moderately,
                        soil_type,
                    });
                }
            }
            TokenKind::Color => {
                if desc.color.is_none() {
                    desc.color = Color::from_str_loose(&term);
                }
            }
            TokenKind::MoistureContent => {
                if desc.moisture_content.is_none() {
                    desc.moisture_content = MoistureContent::from_str_loose(&term);
                }
            }
            TokenKind::PlasticityIndex => {
                if desc.plasticity_index.is_none() {
                    desc.plasticity_index = PlasticityIndex::from_str_loose(&term);
                }
            }
            TokenKind::ParticleSize => {
                if desc.particle_size.is_none() {
                    desc.particle_size = ParticleSize::from_str_loose(&term);
                }
            }
            TokenKind::Unknown => unknown_count += 1,
        }
        i += 1;
    }

    attach_strength_parameters(&mut desc);
    attach_constituent_guidance(&mut desc);

    // Confidence: start at full and decay per defect
    let mut confidence = 1.0f64;
    for _ in 0..unknown_count {
        confidence *= UNKNOWN_TOKEN_PENALTY;
    }
    for _ in 0..desc.spelling_corrections.len() {
        confidence *= CORRECTION_PENALTY;
    }
    if rock_evidence == 0 && soil_evidence == 0 {
        confidence *= DEFAULTED_MATERIAL_PENALTY;
    }
    if desc.is_cohesive_soil() && desc.consistency.is_none() {
        confidence *= MISSING_FIELD_PENALTY;
    }
    if desc.is_granular_soil() && desc.density.is_none() {
        confidence *= MISSING_FIELD_PENALTY;
    }
    let missing_primary = match desc.material_type {
        MaterialType::Soil => desc.primary_soil_type.is_none(),
        MaterialType::Rock => desc.primary_rock_type.is_none(),
    };
    if missing_primary {
        confidence *= MISSING_FIELD_PENALTY;
    }
    desc.confidence = confidence;

    desc
}

/// Rock wins only on strictly more rock evidence; ties and silence default
/// to soil.
fn classify_material(tokens: &[Token]) -> MaterialType {
    if count_rock_evidence(tokens) > count_soil_evidence(tokens) {
        MaterialType::Rock
    } else {
        MaterialType::Soil
    }
}

fn count_rock_evidence(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .filter(|t| {
            matches!(
                t.kind,
                TokenKind::RockStrength
                    | TokenKind::RockType
                    | TokenKind::WeatheringGrade
                    | TokenKind::RockStructure
            )
        })
        .count()
}

fn count_soil_evidence(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .filter(|t| {
            matches!(
                t.kind,
                TokenKind::SoilType
                    | TokenKind::Consistency
                    | TokenKind::ConsistencyRange
                    | TokenKind::Density
                    | TokenKind::DensityRange
            )
        })
        .count()
}

/// The token's vocabulary term: lowercased, punctuation-trimmed, with the
/// lexer's spelling corrections applied word by word (a corrected word may
/// sit inside a multi-word phrase token).
fn canonical_term(token: &Token, corrections: &[SpellingCorrection]) -> String {
    token
        .text
        .split_whitespace()
        .filter_map(|word| {
            let lower = word
                .trim_matches(crate::parsing::tokenizer::is_trim_char)
                .to_lowercase();
            if lower.is_empty() {
                return None;
            }
            Some(
                corrections
                    .iter()
                    .find(|c| c.original == lower)
                    .map(|c| c.corrected.clone())
                    .unwrap_or(lower),
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn attach_strength_parameters(desc: &mut SoilDescription) {
    let descriptor = match desc.material_type {
        MaterialType::Soil => {
            if let Some(c) = desc.consistency {
                Some(strength::StrengthDescriptor::Consistency(c))
            } else {
                desc.density.map(strength::StrengthDescriptor::Density)
            }
        }
        MaterialType::Rock => desc
            .rock_strength
            .map(strength::StrengthDescriptor::RockStrength),
    };

    if let Some(descriptor) = descriptor {
        desc.strength_parameters = strength::lookup(
            desc.material_type,
            descriptor,
            desc.primary_soil_type,
            desc.primary_rock_type,
        );
    }
}

fn attach_constituent_guidance(desc: &mut SoilDescription) {
    desc.constituent_guidance =
        constituents::lookup(desc.primary_soil_type, &desc.secondary_constituents);
}
