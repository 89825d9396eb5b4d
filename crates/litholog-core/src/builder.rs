//! Fluent construction of canonical description strings, for callers that
//! assemble descriptions programmatically instead of parsing field text.

use crate::generate::{generate, GenerateFormat};
use crate::model::{
    Consistency, ConstituentAmount, Density, MaterialType, ParticleSize, RockStrength,
    RockStructure, RockType, SecondaryConstituent, SoilDescription, SoilType, WeatheringGrade,
};

/// Builds a description string part by part. `build` renders the canonical
/// standard form; `build_and_parse` round-trips it through the parser so
/// the caller also gets validation and strength guidance.
#[derive(Debug, Clone)]
pub struct DescriptionBuilder {
    desc: SoilDescription,
}

impl DescriptionBuilder {
    pub fn soil(soil_type: SoilType) -> DescriptionBuilder {
        let mut desc = SoilDescription::new(MaterialType::Soil);
        desc.primary_soil_type = Some(soil_type);
        DescriptionBuilder { desc }
    }

    pub fn rock(rock_type: RockType) -> DescriptionBuilder {
        let mut desc = SoilDescription::new(MaterialType::Rock);
        desc.primary_rock_type = Some(rock_type);
        DescriptionBuilder { desc }
    }

    pub fn consistency(mut self, consistency: Consistency) -> DescriptionBuilder {
        self.desc.consistency = Some(consistency);
        self
    }

    pub fn density(mut self, density: Density) -> DescriptionBuilder {
        self.desc.density = Some(density);
        self
    }

    pub fn rock_strength(mut self, strength: RockStrength) -> DescriptionBuilder {
        self.desc.rock_strength = Some(strength);
        self
    }

    pub fn weathering(mut self, grade: WeatheringGrade) -> DescriptionBuilder {
        self.desc.weathering_grade = Some(grade);
        self
    }

    pub fn structure(mut self, structure: RockStructure) -> DescriptionBuilder {
        self.desc.rock_structure = Some(structure);
        self
    }

    pub fn constituent(mut self, amount: ConstituentAmount, soil_type: SoilType) -> DescriptionBuilder {
        self.desc
            .secondary_constituents
            .push(SecondaryConstituent { amount, soil_type });
        self
    }

    pub fn particle_size(mut self, size: ParticleSize) -> DescriptionBuilder {
        self.desc.particle_size = Some(size);
        self
    }

    /// Render the canonical description string.
    pub fn build(&self) -> String {
        generate(&self.desc, GenerateFormat::Standard)
    }

    /// Render and immediately parse, yielding the fully populated value.
    pub fn build_and_parse(&self) -> SoilDescription {
        crate::parse(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_builder_renders_in_order() {
        let text = DescriptionBuilder::soil(SoilType::Clay)
            .consistency(Consistency::FirmToStiff)
            .constituent(ConstituentAmount::Slightly, SoilType::Sand)
            .build();
        assert_eq!(text, "Firm to stiff slightly sandy CLAY");
    }

    #[test]
    fn test_rock_builder_renders_in_order() {
        let text = DescriptionBuilder::rock(RockType::Sandstone)
            .rock_strength(RockStrength::ModeratelyStrong)
            .weathering(WeatheringGrade::ModeratelyWeathered)
            .structure(RockStructure::Jointed)
            .build();
        assert_eq!(
            text,
            "Moderately strong moderately weathered jointed SANDSTONE"
        );
    }

    #[test]
    fn test_build_and_parse_round_trips() {
        let desc = DescriptionBuilder::soil(SoilType::Sand)
            .density(Density::Dense)
            .build_and_parse();
        assert_eq!(desc.primary_soil_type, Some(SoilType::Sand));
        assert_eq!(desc.density, Some(Density::Dense));
        assert!(desc.is_valid);
        assert!(desc.strength_parameters.is_some());
    }
}
