// src/error.rs
use astroplan_layout::LayoutError;
use astroplan_render_core::RenderError;
use astroplan_schema::{SchemaError, Violation};
use thiserror::Error;

/// Every way a planner run can fail, from loading the record to writing the PDF.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Failed to read JSON file: {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read JSON file: {0}")]
    ParseInput(#[source] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("JSON validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Record does not match the planner model: {0}")]
    Record(#[source] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
