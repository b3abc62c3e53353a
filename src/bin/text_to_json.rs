//! Converts the labeled daily check-in text on stdin into a planner JSON record.

use clap::Parser;
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

/// Reads the check-in template from stdin and prints the extracted record as JSON.
#[derive(Parser, Debug)]
#[command(name = "text_to_json", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste the daily check-in text, then press Ctrl-D:");
    }

    let mut text = String::new();
    if let Err(e) = stdin.read_to_string(&mut text) {
        eprintln!("[ERROR] Failed to read stdin: {}", e);
        return ExitCode::FAILURE;
    }

    let record = astroplan_extract::extract(&text);
    match serde_json::to_string_pretty(&record) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] Failed to encode JSON: {}", e);
            ExitCode::FAILURE
        }
    }
}
