use litholog_core::{from_json, generate, generate_random, GenerateFormat, LithologError};
use std::path::Path;

pub fn run(input_file: &Path, format: &str) -> Result<(), LithologError> {
    let format = GenerateFormat::from_str_loose(format)
        .ok_or_else(|| LithologError::UnknownFormat(format.to_string()))?;

    let json = std::fs::read_to_string(input_file)?;
    let desc = from_json(&json)?;

    println!("{}", generate(&desc, format));
    Ok(())
}

pub fn random(seed: u64, count: u64) -> Result<(), LithologError> {
    for i in 0..count {
        println!("{}", generate_random(seed.wrapping_add(i)));
    }
    Ok(())
}
