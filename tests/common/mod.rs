#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use astroplan::{PipelineBuilder, PlannerConfig, PlannerRecord};
use astroplan_render_core::{DocumentRenderer, RecordedPage, RecordingRenderer};
use lopdf::Document as LopdfDocument;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

/// Validate `data` and render it to a PDF with the default configuration
pub fn generate_pdf(data: Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = PipelineBuilder::new().build()?;
    let record = pipeline.prepare(data)?;
    GeneratedPdf::from_bytes(pipeline.render(&record)?)
}

/// Render an already-typed record through the recording backend, skipping validation
pub fn record_pages(
    record: &PlannerRecord,
    config: PlannerConfig,
) -> Result<Vec<RecordedPage>, Box<dyn std::error::Error>> {
    let pipeline = PipelineBuilder::new().with_config(config).build()?;
    let mut renderer = RecordingRenderer::new();
    pipeline.render_to(record, &mut renderer)?;
    Ok(renderer.finish()?)
}

/// Render `data` (validated) through the recording backend
pub fn recorded_pages(data: Value) -> Result<Vec<RecordedPage>, Box<dyn std::error::Error>> {
    let pipeline = PipelineBuilder::new().build()?;
    let record = pipeline.prepare(data)?;
    record_pages(&record, PlannerConfig::default())
}
