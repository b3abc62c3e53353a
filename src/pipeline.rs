//! Load, validate and render a planner record in one pass.

use crate::assembler::render_planner;
use crate::config::PlannerConfig;
use crate::date::iso_date;
use crate::error::PipelineError;
use crate::header::HeaderAssets;
use crate::record::{PlannerRecord, present};
use astroplan_render_core::DocumentRenderer;
use astroplan_render_lopdf::LopdfRenderer;
use astroplan_schema::SchemaValidator;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A builder for creating a `PlannerPipeline`.
#[derive(Default)]
pub struct PipelineBuilder {
    config: Option<PlannerConfig>,
    validator: Option<SchemaValidator>,
    date_override: Option<String>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Loads geometry and theme overrides from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = Some(PlannerConfig::from_path(path)?);
        Ok(self)
    }

    /// Validates records against the schema at `path` instead of the bundled one.
    pub fn with_schema_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.validator = Some(SchemaValidator::from_path(path)?);
        Ok(self)
    }

    /// Replaces the record's `date` before rendering.
    pub fn with_date_override(mut self, date: Option<String>) -> Self {
        self.date_override = date;
        self
    }

    pub fn build(self) -> Result<PlannerPipeline, PipelineError> {
        let validator = match self.validator {
            Some(validator) => validator,
            None => SchemaValidator::planner()?,
        };
        Ok(PlannerPipeline {
            config: self.config.unwrap_or_default(),
            validator,
            date_override: self.date_override,
        })
    }
}

pub struct PlannerPipeline {
    config: PlannerConfig,
    validator: SchemaValidator,
    date_override: Option<String>,
}

impl PlannerPipeline {
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Reads the raw JSON document at `path`.
    pub fn load_record<P: AsRef<Path>>(&self, path: P) -> Result<Value, PipelineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::InputNotFound(path.display().to_string()));
        }
        let text = fs::read_to_string(path).map_err(|source| PipelineError::ReadInput {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(PipelineError::ParseInput)
    }

    pub fn validate(&self, data: &Value) -> Result<(), PipelineError> {
        self.validator.validate(data).map_err(PipelineError::Validation)
    }

    /// Validates `data` and turns it into a typed record with the date override applied.
    pub fn prepare(&self, data: Value) -> Result<PlannerRecord, PipelineError> {
        self.validate(&data)?;
        let mut record = PlannerRecord::from_value(data).map_err(PipelineError::Record)?;
        if let Some(date) = &self.date_override {
            log::debug!("Overriding record date with '{}'", date);
            record.override_date(date.clone());
        }
        Ok(record)
    }

    /// Draws `record` through any document renderer.
    pub fn render_to<R: DocumentRenderer>(
        &self,
        record: &PlannerRecord,
        renderer: &mut R,
    ) -> Result<usize, PipelineError> {
        let assets = HeaderAssets::load(&self.config.emblem_path);
        Ok(render_planner(record, &self.config, &assets, renderer)?)
    }

    /// Renders `record` to PDF bytes.
    pub fn render(&self, record: &PlannerRecord) -> Result<Vec<u8>, PipelineError> {
        let title = match present(&record.date) {
            Some(date) => format!("Astro Planner {}", date),
            None => "Astro Planner".to_string(),
        };
        let mut renderer = LopdfRenderer::new().with_title(title);
        self.render_to(record, &mut renderer)?;
        Ok(renderer.finish()?)
    }

    /// `out/planner_<YYYY-MM-DD>.pdf`, dated from the record or else today.
    pub fn default_output_path(record: &PlannerRecord) -> PathBuf {
        let date = record
            .date
            .as_deref()
            .and_then(iso_date)
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        PathBuf::from("out").join(format!("planner_{}.pdf", date.format("%Y-%m-%d")))
    }

    /// Runs the whole pass and writes the PDF in a single call once rendering succeeded.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        input: P,
        output: Option<PathBuf>,
    ) -> Result<PathBuf, PipelineError> {
        let data = self.load_record(input)?;
        let record = self.prepare(data)?;
        let output = output.unwrap_or_else(|| Self::default_output_path(&record));
        let bytes = self.render(&record)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output, bytes)?;
        log::info!("Wrote {}", output.display());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pipeline() -> PlannerPipeline {
        PipelineBuilder::new().build().unwrap()
    }

    #[test]
    fn missing_input_is_reported_by_path() {
        let err = pipeline().load_record("does/not/exist.json").unwrap_err();
        assert_eq!(err.to_string(), "Input file not found: does/not/exist.json");
    }

    #[test]
    fn wrongly_typed_record_fails_validation() {
        let err = pipeline().prepare(json!({ "date": 5 })).unwrap_err();
        match err {
            PipelineError::Validation(violations) => assert_eq!(violations[0].path, "date"),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn date_override_is_applied_after_validation() {
        let pipeline = PipelineBuilder::new()
            .with_date_override(Some("2030-01-02 (Wed)".into()))
            .build()
            .unwrap();
        let record = pipeline.prepare(json!({ "date": "2024-03-05" })).unwrap();
        assert_eq!(record.date.as_deref(), Some("2030-01-02 (Wed)"));
    }

    #[test]
    fn default_output_uses_the_embedded_iso_date() {
        let record = PlannerRecord {
            date: Some("2024-03-05 (Tue)".into()),
            ..Default::default()
        };
        assert_eq!(
            PlannerPipeline::default_output_path(&record),
            PathBuf::from("out/planner_2024-03-05.pdf")
        );
    }

    #[test]
    fn default_output_falls_back_to_today() {
        let record = PlannerRecord {
            date: Some("someday".into()),
            ..Default::default()
        };
        let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
        let path = PlannerPipeline::default_output_path(&record);
        assert!(path.to_string_lossy().contains(&today));
    }

    #[test]
    fn unreadable_schema_message_is_not_prefixed_twice() {
        let Err(err) = PipelineBuilder::new().with_schema_file("no/such/schema.json") else {
            panic!("expected a schema error");
        };
        assert!(matches!(err, PipelineError::Schema(_)));
        let message = err.to_string();
        assert!(message.starts_with("Failed to read schema file 'no/such/schema.json'"));
        assert_eq!(message.matches("Failed to read schema file").count(), 1);
    }
}
