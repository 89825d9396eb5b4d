use litholog_core::anomaly::AnomalyResult;
use litholog_core::{LithologError, SoilDescription};

pub fn print(desc: &SoilDescription) -> Result<(), LithologError> {
    println!("{}", serde_json::to_string_pretty(desc)?);
    Ok(())
}

pub fn print_anomalies(report: &AnomalyResult) -> Result<(), LithologError> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
