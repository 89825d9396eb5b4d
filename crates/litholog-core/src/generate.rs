//! Renders structured descriptions back into canonical text, enumerates
//! descriptor variations, and synthesizes random descriptions for testing.

use crate::model::{
    Color, Consistency, ConstituentAmount, Density, MaterialType, MoistureContent, RockStrength,
    RockStructure, RockType, SecondaryConstituent, SoilDescription, SoilType, WeatheringGrade,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Output surface form for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateFormat {
    /// Full canonical phrase.
    Standard,
    /// Drops color, moisture, plasticity and particle size.
    Concise,
    /// Standard plus a strength-parameter annotation.
    Verbose,
    /// Standard with the field-logging qualifier order (moisture before
    /// color).
    Bs5930,
}

impl GenerateFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerateFormat::Standard => "standard",
            GenerateFormat::Concise => "concise",
            GenerateFormat::Verbose => "verbose",
            GenerateFormat::Bs5930 => "bs5930",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<GenerateFormat> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(GenerateFormat::Standard),
            "concise" => Some(GenerateFormat::Concise),
            "verbose" => Some(GenerateFormat::Verbose),
            "bs5930" => Some(GenerateFormat::Bs5930),
            _ => None,
        }
    }
}

/// Render a description as text. Deterministic; never fails — a
/// description with no fields still yields its material label.
pub fn generate(desc: &SoilDescription, format: GenerateFormat) -> String {
    let mut parts: Vec<String> = Vec::new();

    match desc.material_type {
        MaterialType::Soil => {
            if let Some(c) = desc.consistency {
                parts.push(c.to_string());
            } else if let Some(d) = desc.density {
                parts.push(d.to_string());
            }
        }
        MaterialType::Rock => {
            if let Some(r) = desc.rock_strength {
                parts.push(r.to_string());
            }
            if let Some(w) = desc.weathering_grade {
                parts.push(w.to_string());
            }
            if let Some(s) = desc.rock_structure {
                parts.push(s.to_string());
            }
        }
    }

    match format {
        GenerateFormat::Concise => {}
        GenerateFormat::Bs5930 => {
            if let Some(m) = desc.moisture_content {
                parts.push(m.to_string());
            }
            if let Some(c) = desc.color {
                parts.push(c.to_string());
            }
            push_texture(desc, &mut parts);
        }
        GenerateFormat::Standard | GenerateFormat::Verbose => {
            if let Some(c) = desc.color {
                parts.push(c.to_string());
            }
            if let Some(m) = desc.moisture_content {
                parts.push(m.to_string());
            }
            push_texture(desc, &mut parts);
        }
    }

    for constituent in &desc.secondary_constituents {
        parts.push(render_constituent(constituent));
    }

    parts.push(primary_label(desc).to_string());

    let mut text = capitalize_first(&parts.join(" "));

    if format == GenerateFormat::Verbose {
        if let Some(sp) = &desc.strength_parameters {
            text.push_str(&format!(
                " [{} {}-{} {}, typically {}]",
                sp.parameter_type,
                fmt_num(sp.range.lower_bound),
                fmt_num(sp.range.upper_bound),
                sp.parameter_type.unit(),
                fmt_num(sp.range.midpoint()),
            ));
        }
    }

    text
}

fn push_texture(desc: &SoilDescription, parts: &mut Vec<String>) {
    if let Some(p) = desc.plasticity_index {
        parts.push(p.to_string());
    }
    if let Some(p) = desc.particle_size {
        parts.push(p.to_string());
    }
}

/// "moderately" is the unspoken default band, so it renders as the bare
/// adjective.
fn render_constituent(constituent: &SecondaryConstituent) -> String {
    match constituent.amount {
        ConstituentAmount::Moderately => constituent.soil_type.adjective().to_string(),
        amount => format!("{} {}", amount, constituent.soil_type.adjective()),
    }
}

fn primary_label(desc: &SoilDescription) -> &'static str {
    match desc.material_type {
        MaterialType::Soil => desc.primary_soil_type.map(|t| t.label()).unwrap_or("SOIL"),
        MaterialType::Rock => desc.primary_rock_type.map(|t| t.label()).unwrap_or("ROCK"),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

/// One rendering per value of the descriptor scale that applies to the
/// description's material, all other fields held fixed.
pub fn generate_variations(desc: &SoilDescription) -> Vec<String> {
    match desc.material_type {
        MaterialType::Rock => RockStrength::ALL
            .iter()
            .map(|&r| {
                let mut variant = desc.clone();
                variant.rock_strength = Some(r);
                generate(&variant, GenerateFormat::Standard)
            })
            .collect(),
        MaterialType::Soil if desc.is_granular_soil() => Density::ALL
            .iter()
            .map(|&d| {
                let mut variant = desc.clone();
                variant.density = Some(d);
                variant.consistency = None;
                generate(&variant, GenerateFormat::Standard)
            })
            .collect(),
        MaterialType::Soil => Consistency::ALL
            .iter()
            .map(|&c| {
                let mut variant = desc.clone();
                variant.consistency = Some(c);
                variant.density = None;
                generate(&variant, GenerateFormat::Standard)
            })
            .collect(),
    }
}

/// The uppercase primary-type token alone.
pub fn generate_label(desc: &SoilDescription) -> String {
    primary_label(desc).to_string()
}

/// Deterministically sample a syntactically valid description. The seed is
/// the sole source of randomness: equal seeds give equal output.
pub fn generate_random(seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let desc = if rng.gen_bool(0.5) {
        random_soil(&mut rng)
    } else {
        random_rock(&mut rng)
    };
    generate(&desc, GenerateFormat::Standard)
}

fn random_soil(rng: &mut StdRng) -> SoilDescription {
    let mut desc = SoilDescription::new(MaterialType::Soil);
    let primary = pick(rng, &SoilType::ALL);
    desc.primary_soil_type = Some(primary);

    if primary.is_granular() {
        desc.density = Some(pick(rng, &Density::ALL));
    } else {
        desc.consistency = Some(pick(rng, &Consistency::ALL));
    }

    if rng.gen_bool(0.5) {
        desc.color = Some(pick(rng, &Color::ALL));
    }
    if rng.gen_bool(0.3) {
        desc.moisture_content = Some(pick(rng, &MoistureContent::ALL));
    }

    for _ in 0..rng.gen_range(0..=2) {
        let soil_type = pick(rng, &SoilType::ALL);
        if soil_type == primary || soil_type == SoilType::Organic {
            continue;
        }
        desc.secondary_constituents.push(SecondaryConstituent {
            amount: pick(rng, &ConstituentAmount::ALL),
            soil_type,
        });
    }

    desc
}

fn random_rock(rng: &mut StdRng) -> SoilDescription {
    let mut desc = SoilDescription::new(MaterialType::Rock);
    desc.primary_rock_type = Some(pick(rng, &RockType::ALL));
    desc.rock_strength = Some(pick(rng, &RockStrength::ALL));
    if rng.gen_bool(0.5) {
        desc.weathering_grade = Some(pick(rng, &WeatheringGrade::ALL));
    }
    if rng.gen_bool(0.4) {
        desc.rock_structure = Some(pick(rng, &RockStructure::ALL));
    }
    if rng.gen_bool(0.3) {
        desc.color = Some(pick(rng, &Color::ALL));
    }
    desc
}

fn pick<T: Copy>(rng: &mut StdRng, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConstituentAmount, PlasticityIndex};

    fn firm_clay() -> SoilDescription {
        let mut desc = SoilDescription::new(MaterialType::Soil);
        desc.consistency = Some(Consistency::Firm);
        desc.primary_soil_type = Some(SoilType::Clay);
        desc
    }

    #[test]
    fn test_standard_simple() {
        assert_eq!(
            generate(&firm_clay(), GenerateFormat::Standard),
            "Firm CLAY"
        );
    }

    #[test]
    fn test_standard_full_ordering() {
        let mut desc = firm_clay();
        desc.color = Some(Color::Brown);
        desc.moisture_content = Some(MoistureContent::Moist);
        desc.plasticity_index = Some(PlasticityIndex::High);
        desc.secondary_constituents.push(SecondaryConstituent {
            amount: ConstituentAmount::Slightly,
            soil_type: SoilType::Sand,
        });
        assert_eq!(
            generate(&desc, GenerateFormat::Standard),
            "Firm brown moist high plasticity slightly sandy CLAY"
        );
    }

    #[test]
    fn test_bs5930_moisture_before_color() {
        let mut desc = firm_clay();
        desc.color = Some(Color::Brown);
        desc.moisture_content = Some(MoistureContent::Moist);
        assert_eq!(
            generate(&desc, GenerateFormat::Bs5930),
            "Firm moist brown CLAY"
        );
    }

    #[test]
    fn test_concise_drops_cosmetic_fields() {
        let mut desc = firm_clay();
        desc.color = Some(Color::Brown);
        desc.moisture_content = Some(MoistureContent::Moist);
        desc.secondary_constituents.push(SecondaryConstituent {
            amount: ConstituentAmount::Slightly,
            soil_type: SoilType::Sand,
        });
        assert_eq!(
            generate(&desc, GenerateFormat::Concise),
            "Firm slightly sandy CLAY"
        );
    }

    #[test]
    fn test_verbose_appends_strength_annotation() {
        let mut desc = firm_clay();
        desc.strength_parameters = crate::tables::strength::lookup(
            MaterialType::Soil,
            crate::tables::strength::StrengthDescriptor::Consistency(Consistency::Firm),
            Some(SoilType::Clay),
            None,
        );
        let text = generate(&desc, GenerateFormat::Verbose);
        assert!(text.starts_with("Firm CLAY ["));
        assert!(text.contains("undrained shear strength 40-60 kPa"));
        assert!(text.contains("typically 50"));
    }

    #[test]
    fn test_moderately_renders_bare_adjective() {
        let mut desc = firm_clay();
        desc.secondary_constituents.push(SecondaryConstituent {
            amount: ConstituentAmount::Moderately,
            soil_type: SoilType::Gravel,
        });
        assert_eq!(
            generate(&desc, GenerateFormat::Standard),
            "Firm gravelly CLAY"
        );
    }

    #[test]
    fn test_rock_rendering() {
        let mut desc = SoilDescription::new(MaterialType::Rock);
        desc.rock_strength = Some(RockStrength::ModeratelyStrong);
        desc.weathering_grade = Some(WeatheringGrade::SlightlyWeathered);
        desc.rock_structure = Some(RockStructure::Jointed);
        desc.primary_rock_type = Some(RockType::Sandstone);
        assert_eq!(
            generate(&desc, GenerateFormat::Standard),
            "Moderately strong slightly weathered jointed SANDSTONE"
        );
    }

    #[test]
    fn test_missing_primary_falls_back_to_material_label() {
        let mut desc = SoilDescription::new(MaterialType::Rock);
        desc.rock_strength = Some(RockStrength::Strong);
        assert_eq!(generate(&desc, GenerateFormat::Standard), "Strong ROCK");
    }

    #[test]
    fn test_variations_cover_consistency_scale() {
        let variations = generate_variations(&firm_clay());
        assert_eq!(variations.len(), Consistency::ALL.len());
        assert!(variations.iter().all(|v| v.contains("CLAY")));
        assert!(variations.iter().any(|v| v.starts_with("Hard")));
    }

    #[test]
    fn test_variations_cover_density_scale_for_granular() {
        let mut desc = SoilDescription::new(MaterialType::Soil);
        desc.primary_soil_type = Some(SoilType::Sand);
        desc.density = Some(Density::Dense);
        let variations = generate_variations(&desc);
        assert_eq!(variations.len(), Density::ALL.len());
        assert!(variations.iter().all(|v| v.contains("SAND")));
    }

    #[test]
    fn test_variations_cover_rock_strength_scale() {
        let mut desc = SoilDescription::new(MaterialType::Rock);
        desc.primary_rock_type = Some(RockType::Granite);
        desc.rock_strength = Some(RockStrength::Strong);
        let variations = generate_variations(&desc);
        assert_eq!(variations.len(), RockStrength::ALL.len());
        assert!(variations.iter().all(|v| v.contains("GRANITE")));
    }

    #[test]
    fn test_label_is_uppercase_primary() {
        assert_eq!(generate_label(&firm_clay()), "CLAY");
        let bare = SoilDescription::new(MaterialType::Soil);
        assert_eq!(generate_label(&bare), "SOIL");
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        assert_eq!(generate_random(42), generate_random(42));
        // Different seeds should disagree at least somewhere in a small set
        let outputs: Vec<String> = (0..8).map(generate_random).collect();
        assert!(outputs.iter().any(|o| *o != outputs[0]));
    }

    #[test]
    fn test_random_output_reparses() {
        for seed in 0..16 {
            let text = generate_random(seed);
            let desc = crate::parsing::extractor::extract(&text);
            assert!(
                desc.primary_soil_type.is_some() || desc.primary_rock_type.is_some(),
                "random output '{text}' lost its primary type"
            );
        }
    }
}
