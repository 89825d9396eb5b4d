use litholog_core::anomaly::AnomalyResult;
use litholog_core::SoilDescription;

pub fn print_description(desc: &SoilDescription) {
    println!("=== {} ===\n", desc.raw_description.trim());

    println!("  Material:     {}", desc.material_type);
    if let Some(t) = desc.primary_soil_type {
        println!("  Primary type: {}", t.label());
    }
    if let Some(t) = desc.primary_rock_type {
        println!("  Primary type: {}", t.label());
    }
    if let Some(c) = desc.consistency {
        println!("  Consistency:  {c}");
    }
    if let Some(d) = desc.density {
        println!("  Density:      {d}");
    }
    if let Some(r) = desc.rock_strength {
        println!("  Strength:     {r}");
    }
    if let Some(w) = desc.weathering_grade {
        println!("  Weathering:   {w}");
    }
    if let Some(s) = desc.rock_structure {
        println!("  Structure:    {s}");
    }
    if let Some(c) = desc.color {
        println!("  Color:        {c}");
    }
    if let Some(m) = desc.moisture_content {
        println!("  Moisture:     {m}");
    }
    if let Some(p) = desc.plasticity_index {
        println!("  Plasticity:   {p}");
    }
    if let Some(p) = desc.particle_size {
        println!("  Particle:     {p}");
    }

    for sc in &desc.secondary_constituents {
        println!("  Constituent:  {} {}", sc.amount, sc.soil_type.adjective());
    }

    if let Some(sp) = &desc.strength_parameters {
        println!(
            "  {}: {}-{} {} (typically {}, confidence {:.2})",
            sp.parameter_type,
            sp.range.lower_bound,
            sp.range.upper_bound,
            sp.parameter_type.unit(),
            sp.range.midpoint(),
            sp.confidence,
        );
    }
    if let Some(cg) = &desc.constituent_guidance {
        for entry in &cg.constituents {
            println!(
                "  Proportion:   {} {}-{}%",
                entry.soil_type, entry.range.lower_bound, entry.range.upper_bound
            );
        }
    }

    for correction in &desc.spelling_corrections {
        println!(
            "  Corrected:    '{}' -> '{}' (similarity {:.2})",
            correction.original, correction.corrected, correction.similarity_score
        );
    }
    for warning in &desc.warnings {
        println!("  Warning:      {warning}");
    }

    println!();
    println!(
        "  Valid: {}   Confidence: {:.2}",
        if desc.is_valid { "yes" } else { "no" },
        desc.confidence
    );
}

pub fn print_anomalies(report: &AnomalyResult) {
    println!();
    if !report.has_anomalies {
        println!("  No anomalies detected.");
        return;
    }

    println!("  Anomalies ({}):", report.anomalies.len());
    for anomaly in &report.anomalies {
        println!("    [{:?}] {}", anomaly.severity, anomaly.description);
        if let Some(suggestion) = &anomaly.suggestion {
            println!("      suggestion: {suggestion}");
        }
    }
}
