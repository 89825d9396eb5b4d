use crate::output;
use litholog_core::{detect_anomalies, parse, LithologError};

pub fn run(description: &str, output_format: &str, anomalies: bool) -> Result<(), LithologError> {
    let desc = parse(description);

    match output_format {
        "json" => output::json::print(&desc)?,
        _ => output::table::print_description(&desc),
    }

    if anomalies {
        let report = detect_anomalies(&desc);
        match output_format {
            "json" => output::json::print_anomalies(&report)?,
            _ => output::table::print_anomalies(&report),
        }
    }

    Ok(())
}
