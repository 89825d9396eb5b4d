//! Parser and generator for BS 5930-style soil and rock descriptions.
//!
//! `parse` turns free text into a structured, confidence-scored
//! [`SoilDescription`]; `generate` is its inverse. Both are pure functions
//! over static vocabulary tables, safe to call concurrently from any
//! number of threads.

pub mod anomaly;
pub mod builder;
pub mod error;
pub mod generate;
pub mod model;
pub mod parsing;
pub mod tables;
pub mod validate;

pub use anomaly::AnomalyResult;
pub use builder::DescriptionBuilder;
pub use error::LithologError;
pub use generate::{
    generate, generate_label, generate_random, generate_variations, GenerateFormat,
};
pub use model::SoilDescription;
pub use parsing::fuzzy::{fuzzy_match, levenshtein_distance, similarity_ratio};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate version, for bindings that cannot read the constant.
pub fn version() -> &'static str {
    VERSION
}

/// Parse a description into a structured value. Never fails: unrecognized
/// text lowers confidence instead of erroring, and empty input yields a
/// near-zero-confidence soil default. The validator has already run on the
/// returned value.
pub fn parse(description: &str) -> SoilDescription {
    let mut desc = parsing::extractor::extract(description);
    validate::validate(&mut desc);
    desc
}

/// Parse many descriptions independently. Order is preserved.
pub fn parse_batch(descriptions: &[&str]) -> Vec<SoilDescription> {
    descriptions.iter().map(|d| parse(d)).collect()
}

/// Run the semantic audit on a parsed description. The description is not
/// modified; diagnostics land in the returned report.
pub fn detect_anomalies(desc: &SoilDescription) -> AnomalyResult {
    anomaly::detect(desc)
}

/// Serialize a description to its JSON wire form.
pub fn to_json(desc: &SoilDescription) -> Result<String, LithologError> {
    Ok(serde_json::to_string(desc)?)
}

/// Deserialize a description from JSON. Only `material_type` is required;
/// unspecified optional fields stay absent.
pub fn from_json(json: &str) -> Result<SoilDescription, LithologError> {
    Ok(serde_json::from_str(json)?)
}
