//! Command-line interface for ged
//! This binary parses a GEDCOM file and prints the extracted batch, either
//! as JSON or as a merge-style count summary.
//!
//! Usage:
//!   ged `<path>` [--format `<format>`]   - Parse a GEDCOM file
//!
//! Formats: `summary` (default), `json`.

use clap::{Arg, Command};
use ged::ged::import::Importer;
use ged::Dataset;

fn main() {
    // Keep the handle alive for the duration of the process.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .unwrap_or_else(|e| {
            eprintln!("Logger error: {}", e);
            std::process::exit(1);
        });

    let matches = Command::new("ged")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting GEDCOM imports")
        .arg_required_else_help(true)
        .arg(Arg::new("path").help("Path to the GEDCOM file").index(1).required(true))
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'summary' or 'json'")
                .default_value("summary"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let format = matches.get_one::<String>("format").expect("format has a default");
    handle_parse_command(path, format);
}

/// Run the import pipeline against an empty dataset and print the result
fn handle_parse_command(path: &str, format: &str) {
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Runtime error: {}", e);
        std::process::exit(1);
    });

    let mut importer = Importer::new();
    if let Err(e) = importer.select_file(path) {
        eprintln!("Import error: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = runtime.block_on(importer.run_import()) {
        eprintln!("Import error: {}", e);
        std::process::exit(1);
    }

    for warning in importer.warnings() {
        eprintln!("Warning: {}", warning);
    }

    match format {
        "json" => {
            let batch = importer.batch().expect("merge-ready after run_import");
            match serde_json::to_string_pretty(batch) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Serialization error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        "summary" => {
            let outcome = importer
                .confirm_merge(&Dataset::default())
                .unwrap_or_else(|e| {
                    eprintln!("Merge error: {}", e);
                    std::process::exit(1);
                });
            print!("{}", outcome.report);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            eprintln!("Available formats: summary, json");
            std::process::exit(1);
        }
    }
}
