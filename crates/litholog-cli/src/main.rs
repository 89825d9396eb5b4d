mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "litholog",
    version,
    about = "Parse and generate BS 5930 soil and rock descriptions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a description into structured data
    Parse {
        /// The description text, e.g. "Firm to stiff slightly sandy CLAY"
        description: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Also run the semantic anomaly audit
        #[arg(long)]
        anomalies: bool,
    },
    /// Render a description JSON file back into text
    Generate {
        /// Path to a description JSON file (as produced by `parse -o json`)
        input_file: PathBuf,

        /// Surface form: standard (default), concise, verbose, or bs5930
        #[arg(short, long, default_value = "standard")]
        format: String,
    },
    /// Emit random synthetic descriptions for testing
    Random {
        /// Seed for deterministic output
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// How many descriptions to emit
        #[arg(short, long, default_value_t = 1)]
        count: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            description,
            output,
            anomalies,
        } => commands::parse::run(&description, &output, anomalies),
        Commands::Generate { input_file, format } => commands::generate::run(&input_file, &format),
        Commands::Random { seed, count } => commands::generate::random(seed, count),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
