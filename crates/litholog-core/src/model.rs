use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Soil,
    Rock,
}

impl MaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Soil => "soil",
            MaterialType::Rock => "rock",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consistency scale for cohesive soils, including the transitional
/// range descriptors logged in the field ("firm to stiff").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consistency {
    #[serde(rename = "very soft")]
    VerySoft,
    #[serde(rename = "soft")]
    Soft,
    #[serde(rename = "firm")]
    Firm,
    #[serde(rename = "stiff")]
    Stiff,
    #[serde(rename = "very stiff")]
    VeryStiff,
    #[serde(rename = "hard")]
    Hard,
    #[serde(rename = "soft to firm")]
    SoftToFirm,
    #[serde(rename = "firm to stiff")]
    FirmToStiff,
    #[serde(rename = "stiff to very stiff")]
    StiffToVeryStiff,
}

impl Consistency {
    pub const ALL: [Consistency; 9] = [
        Consistency::VerySoft,
        Consistency::Soft,
        Consistency::Firm,
        Consistency::Stiff,
        Consistency::VeryStiff,
        Consistency::Hard,
        Consistency::SoftToFirm,
        Consistency::FirmToStiff,
        Consistency::StiffToVeryStiff,
    ];

    /// The six single grades, in increasing strength order.
    pub const GRADES: [Consistency; 6] = [
        Consistency::VerySoft,
        Consistency::Soft,
        Consistency::Firm,
        Consistency::Stiff,
        Consistency::VeryStiff,
        Consistency::Hard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Consistency::VerySoft => "very soft",
            Consistency::Soft => "soft",
            Consistency::Firm => "firm",
            Consistency::Stiff => "stiff",
            Consistency::VeryStiff => "very stiff",
            Consistency::Hard => "hard",
            Consistency::SoftToFirm => "soft to firm",
            Consistency::FirmToStiff => "firm to stiff",
            Consistency::StiffToVeryStiff => "stiff to very stiff",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Consistency> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|c| c.as_str() == lower)
    }

    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Consistency::SoftToFirm | Consistency::FirmToStiff | Consistency::StiffToVeryStiff
        )
    }
}

impl fmt::Display for Consistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative density scale for granular soils. Range descriptors are
/// first-class variants, mirroring the consistency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Density {
    #[serde(rename = "very loose")]
    VeryLoose,
    #[serde(rename = "loose")]
    Loose,
    #[serde(rename = "medium dense")]
    MediumDense,
    #[serde(rename = "dense")]
    Dense,
    #[serde(rename = "very dense")]
    VeryDense,
    #[serde(rename = "loose to medium dense")]
    LooseToMediumDense,
    #[serde(rename = "medium dense to dense")]
    MediumDenseToDense,
    #[serde(rename = "dense to very dense")]
    DenseToVeryDense,
}

impl Density {
    pub const ALL: [Density; 8] = [
        Density::VeryLoose,
        Density::Loose,
        Density::MediumDense,
        Density::Dense,
        Density::VeryDense,
        Density::LooseToMediumDense,
        Density::MediumDenseToDense,
        Density::DenseToVeryDense,
    ];

    /// The five single grades, in increasing density order.
    pub const GRADES: [Density; 5] = [
        Density::VeryLoose,
        Density::Loose,
        Density::MediumDense,
        Density::Dense,
        Density::VeryDense,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Density::VeryLoose => "very loose",
            Density::Loose => "loose",
            Density::MediumDense => "medium dense",
            Density::Dense => "dense",
            Density::VeryDense => "very dense",
            Density::LooseToMediumDense => "loose to medium dense",
            Density::MediumDenseToDense => "medium dense to dense",
            Density::DenseToVeryDense => "dense to very dense",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Density> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|d| d.as_str() == lower)
    }

    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Density::LooseToMediumDense | Density::MediumDenseToDense | Density::DenseToVeryDense
        )
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RockStrength {
    #[serde(rename = "very weak")]
    VeryWeak,
    #[serde(rename = "weak")]
    Weak,
    #[serde(rename = "moderately weak")]
    ModeratelyWeak,
    #[serde(rename = "moderately strong")]
    ModeratelyStrong,
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "very strong")]
    VeryStrong,
    #[serde(rename = "extremely strong")]
    ExtremelyStrong,
}

impl RockStrength {
    pub const ALL: [RockStrength; 7] = [
        RockStrength::VeryWeak,
        RockStrength::Weak,
        RockStrength::ModeratelyWeak,
        RockStrength::ModeratelyStrong,
        RockStrength::Strong,
        RockStrength::VeryStrong,
        RockStrength::ExtremelyStrong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RockStrength::VeryWeak => "very weak",
            RockStrength::Weak => "weak",
            RockStrength::ModeratelyWeak => "moderately weak",
            RockStrength::ModeratelyStrong => "moderately strong",
            RockStrength::Strong => "strong",
            RockStrength::VeryStrong => "very strong",
            RockStrength::ExtremelyStrong => "extremely strong",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<RockStrength> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|r| r.as_str() == lower)
    }
}

impl fmt::Display for RockStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Silt,
    Sand,
    Gravel,
    Peat,
    Organic,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Clay,
        SoilType::Silt,
        SoilType::Sand,
        SoilType::Gravel,
        SoilType::Peat,
        SoilType::Organic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Silt => "silt",
            SoilType::Sand => "sand",
            SoilType::Gravel => "gravel",
            SoilType::Peat => "peat",
            SoilType::Organic => "organic",
        }
    }

    /// The constituent adjective form ("slightly sandy CLAY").
    pub fn adjective(&self) -> &'static str {
        match self {
            SoilType::Clay => "clayey",
            SoilType::Silt => "silty",
            SoilType::Sand => "sandy",
            SoilType::Gravel => "gravelly",
            SoilType::Peat => "peaty",
            SoilType::Organic => "organic",
        }
    }

    /// Uppercase principal-type form used when rendering descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Clay => "CLAY",
            SoilType::Silt => "SILT",
            SoilType::Sand => "SAND",
            SoilType::Gravel => "GRAVEL",
            SoilType::Peat => "PEAT",
            SoilType::Organic => "ORGANIC",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<SoilType> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|t| t.as_str() == lower)
    }

    /// Resolve a constituent adjective ("sandy") to its soil type. The bare
    /// word "organic" is reserved for the primary type and never resolves.
    pub fn from_adjective(s: &str) -> Option<SoilType> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .filter(|t| *t != SoilType::Organic)
            .find(|t| t.adjective() == lower)
    }

    pub fn is_cohesive(&self) -> bool {
        matches!(self, SoilType::Clay | SoilType::Silt)
    }

    pub fn is_granular(&self) -> bool {
        matches!(self, SoilType::Sand | SoilType::Gravel)
    }

    /// Fines-dominance ranking used when judging whether a heavily qualified
    /// constituent would outrank the stated primary type. Peat and organic
    /// soils sit outside the ranking.
    pub fn dominance(&self) -> Option<u8> {
        match self {
            SoilType::Clay => Some(3),
            SoilType::Silt => Some(2),
            SoilType::Sand => Some(1),
            SoilType::Gravel => Some(0),
            SoilType::Peat | SoilType::Organic => None,
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RockType {
    Limestone,
    Sandstone,
    Mudstone,
    Shale,
    Granite,
    Basalt,
    Chalk,
    Dolomite,
    Quartzite,
    Slate,
    Schist,
    Gneiss,
    Marble,
    Conglomerate,
    Breccia,
}

impl RockType {
    pub const ALL: [RockType; 15] = [
        RockType::Limestone,
        RockType::Sandstone,
        RockType::Mudstone,
        RockType::Shale,
        RockType::Granite,
        RockType::Basalt,
        RockType::Chalk,
        RockType::Dolomite,
        RockType::Quartzite,
        RockType::Slate,
        RockType::Schist,
        RockType::Gneiss,
        RockType::Marble,
        RockType::Conglomerate,
        RockType::Breccia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RockType::Limestone => "limestone",
            RockType::Sandstone => "sandstone",
            RockType::Mudstone => "mudstone",
            RockType::Shale => "shale",
            RockType::Granite => "granite",
            RockType::Basalt => "basalt",
            RockType::Chalk => "chalk",
            RockType::Dolomite => "dolomite",
            RockType::Quartzite => "quartzite",
            RockType::Slate => "slate",
            RockType::Schist => "schist",
            RockType::Gneiss => "gneiss",
            RockType::Marble => "marble",
            RockType::Conglomerate => "conglomerate",
            RockType::Breccia => "breccia",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RockType::Limestone => "LIMESTONE",
            RockType::Sandstone => "SANDSTONE",
            RockType::Mudstone => "MUDSTONE",
            RockType::Shale => "SHALE",
            RockType::Granite => "GRANITE",
            RockType::Basalt => "BASALT",
            RockType::Chalk => "CHALK",
            RockType::Dolomite => "DOLOMITE",
            RockType::Quartzite => "QUARTZITE",
            RockType::Slate => "SLATE",
            RockType::Schist => "SCHIST",
            RockType::Gneiss => "GNEISS",
            RockType::Marble => "MARBLE",
            RockType::Conglomerate => "CONGLOMERATE",
            RockType::Breccia => "BRECCIA",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<RockType> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|t| t.as_str() == lower)
    }
}

impl fmt::Display for RockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatheringGrade {
    #[serde(rename = "fresh")]
    Fresh,
    #[serde(rename = "slightly weathered")]
    SlightlyWeathered,
    #[serde(rename = "moderately weathered")]
    ModeratelyWeathered,
    #[serde(rename = "highly weathered")]
    HighlyWeathered,
    #[serde(rename = "completely weathered")]
    CompletelyWeathered,
}

impl WeatheringGrade {
    pub const ALL: [WeatheringGrade; 5] = [
        WeatheringGrade::Fresh,
        WeatheringGrade::SlightlyWeathered,
        WeatheringGrade::ModeratelyWeathered,
        WeatheringGrade::HighlyWeathered,
        WeatheringGrade::CompletelyWeathered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatheringGrade::Fresh => "fresh",
            WeatheringGrade::SlightlyWeathered => "slightly weathered",
            WeatheringGrade::ModeratelyWeathered => "moderately weathered",
            WeatheringGrade::HighlyWeathered => "highly weathered",
            WeatheringGrade::CompletelyWeathered => "completely weathered",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<WeatheringGrade> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|w| w.as_str() == lower)
    }
}

impl fmt::Display for WeatheringGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RockStructure {
    Massive,
    Bedded,
    Jointed,
    Fractured,
    Foliated,
    Laminated,
}

impl RockStructure {
    pub const ALL: [RockStructure; 6] = [
        RockStructure::Massive,
        RockStructure::Bedded,
        RockStructure::Jointed,
        RockStructure::Fractured,
        RockStructure::Foliated,
        RockStructure::Laminated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RockStructure::Massive => "massive",
            RockStructure::Bedded => "bedded",
            RockStructure::Jointed => "jointed",
            RockStructure::Fractured => "fractured",
            RockStructure::Foliated => "foliated",
            RockStructure::Laminated => "laminated",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<RockStructure> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|r| r.as_str() == lower)
    }
}

impl fmt::Display for RockStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proportion qualifier for a secondary constituent. A constituent
/// adjective with no qualifier word is recorded as `Moderately`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstituentAmount {
    Slightly,
    Moderately,
    Very,
}

impl ConstituentAmount {
    pub const ALL: [ConstituentAmount; 3] = [
        ConstituentAmount::Slightly,
        ConstituentAmount::Moderately,
        ConstituentAmount::Very,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstituentAmount::Slightly => "slightly",
            ConstituentAmount::Moderately => "moderately",
            ConstituentAmount::Very => "very",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<ConstituentAmount> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|a| a.as_str() == lower)
    }
}

impl fmt::Display for ConstituentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "brown")]
    Brown,
    #[serde(rename = "dark brown")]
    DarkBrown,
    #[serde(rename = "light brown")]
    LightBrown,
    #[serde(rename = "grey")]
    Grey,
    #[serde(rename = "dark grey")]
    DarkGrey,
    #[serde(rename = "light grey")]
    LightGrey,
    #[serde(rename = "black")]
    Black,
    #[serde(rename = "white")]
    White,
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "yellow")]
    Yellow,
    #[serde(rename = "orange")]
    Orange,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "blue")]
    Blue,
}

impl Color {
    pub const ALL: [Color; 13] = [
        Color::Brown,
        Color::DarkBrown,
        Color::LightBrown,
        Color::Grey,
        Color::DarkGrey,
        Color::LightGrey,
        Color::Black,
        Color::White,
        Color::Red,
        Color::Yellow,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Brown => "brown",
            Color::DarkBrown => "dark brown",
            Color::LightBrown => "light brown",
            Color::Grey => "grey",
            Color::DarkGrey => "dark grey",
            Color::LightGrey => "light grey",
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }

    /// Accepts "gray" spellings alongside the canonical "grey" forms.
    pub fn from_str_loose(s: &str) -> Option<Color> {
        let lower = s.trim().to_lowercase().replace("gray", "grey");
        Self::ALL.iter().copied().find(|c| c.as_str() == lower)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoistureContent {
    #[serde(rename = "dry")]
    Dry,
    #[serde(rename = "slightly moist")]
    SlightlyMoist,
    #[serde(rename = "moist")]
    Moist,
    #[serde(rename = "wet")]
    Wet,
    #[serde(rename = "saturated")]
    Saturated,
}

impl MoistureContent {
    pub const ALL: [MoistureContent; 5] = [
        MoistureContent::Dry,
        MoistureContent::SlightlyMoist,
        MoistureContent::Moist,
        MoistureContent::Wet,
        MoistureContent::Saturated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoistureContent::Dry => "dry",
            MoistureContent::SlightlyMoist => "slightly moist",
            MoistureContent::Moist => "moist",
            MoistureContent::Wet => "wet",
            MoistureContent::Saturated => "saturated",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<MoistureContent> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|m| m.as_str() == lower)
    }
}

impl fmt::Display for MoistureContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlasticityIndex {
    #[serde(rename = "non-plastic")]
    NonPlastic,
    #[serde(rename = "low plasticity")]
    Low,
    #[serde(rename = "intermediate plasticity")]
    Intermediate,
    #[serde(rename = "high plasticity")]
    High,
}

impl PlasticityIndex {
    pub const ALL: [PlasticityIndex; 4] = [
        PlasticityIndex::NonPlastic,
        PlasticityIndex::Low,
        PlasticityIndex::Intermediate,
        PlasticityIndex::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlasticityIndex::NonPlastic => "non-plastic",
            PlasticityIndex::Low => "low plasticity",
            PlasticityIndex::Intermediate => "intermediate plasticity",
            PlasticityIndex::High => "high plasticity",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<PlasticityIndex> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|p| p.as_str() == lower)
    }
}

impl fmt::Display for PlasticityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleSize {
    #[serde(rename = "fine")]
    Fine,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "coarse")]
    Coarse,
    #[serde(rename = "fine to medium")]
    FineToMedium,
    #[serde(rename = "medium to coarse")]
    MediumToCoarse,
}

impl ParticleSize {
    pub const ALL: [ParticleSize; 5] = [
        ParticleSize::Fine,
        ParticleSize::Medium,
        ParticleSize::Coarse,
        ParticleSize::FineToMedium,
        ParticleSize::MediumToCoarse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleSize::Fine => "fine",
            ParticleSize::Medium => "medium",
            ParticleSize::Coarse => "coarse",
            ParticleSize::FineToMedium => "fine to medium",
            ParticleSize::MediumToCoarse => "medium to coarse",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<ParticleSize> {
        let lower = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|p| p.as_str() == lower)
    }
}

impl fmt::Display for ParticleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthParameterType {
    Ucs,
    UndrainedShearStrength,
    SptNValue,
    FrictionAngle,
}

impl StrengthParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthParameterType::Ucs => "UCS",
            StrengthParameterType::UndrainedShearStrength => "undrained shear strength",
            StrengthParameterType::SptNValue => "SPT N-value",
            StrengthParameterType::FrictionAngle => "friction angle",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            StrengthParameterType::Ucs => "MPa",
            StrengthParameterType::UndrainedShearStrength => "kPa",
            StrengthParameterType::SptNValue => "blows/300mm",
            StrengthParameterType::FrictionAngle => "degrees",
        }
    }
}

impl fmt::Display for StrengthParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric estimate band. `typical_value`, when present, sits inside
/// the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub lower_bound: f64,
    pub upper_bound: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_value: Option<f64>,
}

impl ValueRange {
    pub fn new(lower_bound: f64, upper_bound: f64, typical_value: Option<f64>) -> ValueRange {
        ValueRange {
            lower_bound,
            upper_bound,
            typical_value,
        }
    }

    /// The typical value, or the arithmetic midpoint when none is tabulated.
    pub fn midpoint(&self) -> f64 {
        self.typical_value
            .unwrap_or((self.lower_bound + self.upper_bound) / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthParameters {
    pub parameter_type: StrengthParameterType,
    pub range: ValueRange,
    pub confidence: f64,
}

/// Proportion guidance for one secondary constituent, in percent by mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituentProportion {
    pub soil_type: SoilType,
    pub range: ValueRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituentGuidance {
    pub constituents: Vec<ConstituentProportion>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryConstituent {
    pub amount: ConstituentAmount,
    pub soil_type: SoilType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellingCorrection {
    pub original: String,
    pub corrected: String,
    pub similarity_score: f64,
}

fn default_true() -> bool {
    true
}

fn default_confidence() -> f64 {
    1.0
}

/// A parsed geotechnical description. Created by the extractor, mutated in
/// place only by the validator, read-only everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilDescription {
    #[serde(default)]
    pub raw_description: String,
    pub material_type: MaterialType,

    // Soil fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<Consistency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<Density>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_soil_type: Option<SoilType>,

    // Rock fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rock_strength: Option<RockStrength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weathering_grade: Option<WeatheringGrade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rock_structure: Option<RockStructure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_rock_type: Option<RockType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_constituents: Vec<SecondaryConstituent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture_content: Option<MoistureContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plasticity_index: Option<PlasticityIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particle_size: Option<ParticleSize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength_parameters: Option<StrengthParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constituent_guidance: Option<ConstituentGuidance>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spelling_corrections: Vec<SpellingCorrection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(default = "default_true")]
    pub is_valid: bool,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

impl SoilDescription {
    /// A blank description with the given material and full confidence.
    pub fn new(material_type: MaterialType) -> SoilDescription {
        SoilDescription {
            raw_description: String::new(),
            material_type,
            consistency: None,
            density: None,
            primary_soil_type: None,
            rock_strength: None,
            weathering_grade: None,
            rock_structure: None,
            primary_rock_type: None,
            secondary_constituents: Vec::new(),
            color: None,
            moisture_content: None,
            plasticity_index: None,
            particle_size: None,
            strength_parameters: None,
            constituent_guidance: None,
            spelling_corrections: Vec::new(),
            warnings: Vec::new(),
            is_valid: true,
            confidence: 1.0,
        }
    }

    /// True for a soil description whose primary type is clay or silt.
    pub fn is_cohesive_soil(&self) -> bool {
        self.material_type == MaterialType::Soil
            && self.primary_soil_type.is_some_and(|t| t.is_cohesive())
    }

    /// True for a soil description whose primary type is sand or gravel.
    pub fn is_granular_soil(&self) -> bool {
        self.material_type == MaterialType::Soil
            && self.primary_soil_type.is_some_and(|t| t.is_granular())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistency_round_trip() {
        for c in Consistency::ALL {
            assert_eq!(Consistency::from_str_loose(c.as_str()), Some(c));
        }
        assert_eq!(
            Consistency::from_str_loose("Firm to stiff"),
            Some(Consistency::FirmToStiff)
        );
        assert_eq!(Consistency::from_str_loose("granular"), None);
    }

    #[test]
    fn test_density_ranges_flagged() {
        assert!(Density::LooseToMediumDense.is_range());
        assert!(!Density::Dense.is_range());
    }

    #[test]
    fn test_soil_type_adjectives() {
        assert_eq!(SoilType::Clay.adjective(), "clayey");
        assert_eq!(SoilType::from_adjective("gravelly"), Some(SoilType::Gravel));
        assert_eq!(SoilType::from_adjective("clay"), None);
        assert_eq!(SoilType::from_adjective("organic"), None);
    }

    #[test]
    fn test_soil_type_cohesion_split() {
        assert!(SoilType::Clay.is_cohesive());
        assert!(SoilType::Silt.is_cohesive());
        assert!(SoilType::Sand.is_granular());
        assert!(SoilType::Gravel.is_granular());
        assert!(!SoilType::Peat.is_cohesive());
        assert!(!SoilType::Peat.is_granular());
    }

    #[test]
    fn test_color_accepts_gray_spelling() {
        assert_eq!(Color::from_str_loose("dark gray"), Some(Color::DarkGrey));
        assert_eq!(Color::from_str_loose("GREY"), Some(Color::Grey));
    }

    #[test]
    fn test_value_range_midpoint() {
        let explicit = ValueRange::new(40.0, 60.0, Some(50.0));
        assert_eq!(explicit.midpoint(), 50.0);
        let derived = ValueRange::new(10.0, 30.0, None);
        assert_eq!(derived.midpoint(), 20.0);
    }

    #[test]
    fn test_description_serializes_lowercase_enums() {
        let mut desc = SoilDescription::new(MaterialType::Soil);
        desc.consistency = Some(Consistency::VeryStiff);
        desc.primary_soil_type = Some(SoilType::Clay);
        let json = serde_json::to_string(&desc).unwrap();
        assert!(json.contains("\"material_type\":\"soil\""));
        assert!(json.contains("\"consistency\":\"very stiff\""));
        assert!(json.contains("\"primary_soil_type\":\"clay\""));
        // Absent optionals are omitted entirely
        assert!(!json.contains("rock_strength"));
    }

    #[test]
    fn test_description_from_partial_json() {
        let desc: SoilDescription = serde_json::from_str(r#"{"material_type":"rock"}"#).unwrap();
        assert_eq!(desc.material_type, MaterialType::Rock);
        assert!(desc.primary_rock_type.is_none());
        assert!(desc.warnings.is_empty());
        assert!(desc.is_valid);
        assert_eq!(desc.confidence, 1.0);
    }
}
