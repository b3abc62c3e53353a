use astroplan::{PipelineBuilder, PipelineError, render_report};
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use std::process::ExitCode;

/// Astro Planner PDF generator (4-page).
#[derive(Parser, Debug)]
#[command(name = "astroplan", version, about)]
struct Cli {
    /// Path to the input JSON record
    #[arg(long)]
    input: Option<PathBuf>,

    /// Path of the PDF to write (default: out/planner_<date>.pdf)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Override the date shown in the header
    #[arg(long)]
    date: Option<String>,

    /// Prompt for the input and output paths on the terminal
    #[arg(long, visible_alias = "gui")]
    interactive: bool,

    /// JSON Schema used to validate the record (default: bundled schema)
    #[arg(long)]
    schema: Option<PathBuf>,

    /// JSON file overriding page geometry, theme and list policy
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Reads one path from the terminal; an empty answer means "none".
fn prompt_path(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<PathBuf>, ReadlineError> {
    match rl.readline(prompt) {
        Ok(line) => {
            let line = line.trim();
            Ok((!line.is_empty()).then(|| PathBuf::from(line)))
        }
        Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
        Err(e) => Err(e),
    }
}

fn prompt_paths(cli: &mut Cli) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    if cli.input.is_none() {
        cli.input = prompt_path(&mut rl, "Input JSON file: ")?;
    }
    if cli.output.is_none() {
        cli.output = prompt_path(&mut rl, "Output PDF file (blank for default): ")?;
    }
    Ok(())
}

fn run(cli: Cli, input: PathBuf) -> Result<PathBuf, PipelineError> {
    let mut builder = PipelineBuilder::new().with_date_override(cli.date);
    if let Some(config) = &cli.config {
        builder = builder.with_config_file(config)?;
    }
    if let Some(schema) = &cli.schema {
        builder = builder.with_schema_file(schema)?;
    }
    let pipeline = builder.build()?;
    pipeline.generate_to_file(input, cli.output)
}

fn main() -> ExitCode {
    let mut cli = Cli::parse();
    setup_logging(cli.verbose);

    if cli.interactive {
        if let Err(e) = prompt_paths(&mut cli) {
            eprintln!("[ERROR] Failed to read paths: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let Some(input) = cli.input.take() else {
        println!("Input path required.");
        return ExitCode::FAILURE;
    };

    match run(cli, input) {
        Ok(path) => {
            println!("Planner written to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(PipelineError::Validation(violations)) => {
            println!("{}", render_report(&violations));
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}
