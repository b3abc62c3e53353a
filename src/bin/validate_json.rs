//! Checks a planner JSON record against a JSON Schema file.

use astroplan_schema::{SchemaValidator, render_report};
use clap::Parser;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "validate_json", version, about = "Validate a JSON record against a JSON Schema")]
struct Cli {
    /// JSON record to check
    input: PathBuf,

    /// JSON Schema to check against
    schema: PathBuf,
}

fn read_json(path: &Path) -> Result<Value, String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if !cli.input.exists() {
        println!("[ERROR] Input file not found: {}", cli.input.display());
        return ExitCode::FAILURE;
    }
    if !cli.schema.exists() {
        println!("[ERROR] Schema file not found: {}", cli.schema.display());
        return ExitCode::FAILURE;
    }

    let data = match read_json(&cli.input) {
        Ok(data) => data,
        Err(e) => {
            println!("[ERROR] Failed to read JSON file: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let validator = match SchemaValidator::from_path(&cli.schema) {
        Ok(validator) => validator,
        Err(e) => {
            println!("[ERROR] Failed to read schema file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match validator.validate(&data) {
        Ok(()) => {
            println!("JSON is valid.");
            ExitCode::SUCCESS
        }
        Err(violations) => {
            println!("{}", render_report(&violations));
            ExitCode::FAILURE
        }
    }
}
