//! JSON Schema validation for planner records.
//!
//! Records are checked against a Draft 7 schema before rendering. Every
//! violation is reported with a dotted path to the offending value, sorted by
//! path so the report is stable between runs.

use serde_json::Value;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// The bundled planner schema; `date` is the only required field.
pub const PLANNER_SCHEMA: &str = include_str!("../schema/planner.schema.json");

/// Header line printed before a list of violations.
pub const REPORT_HEADER: &str = "[ERROR] JSON validation failed:";

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read schema file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Schema is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Violation {
    /// Dotted path to the offending value, e.g. `horoscope.task_list.0`. Empty for the root.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.path, self.message)
    }
}

pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Validator for the bundled planner schema.
    pub fn planner() -> Result<Self, SchemaError> {
        let schema: Value = serde_json::from_str(PLANNER_SCHEMA)?;
        Self::from_value(&schema)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let schema: Value = serde_json::from_str(&text)?;
        log::debug!("Loaded schema from {}", path.display());
        Self::from_value(&schema)
    }

    pub fn from_value(schema: &Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::draft7::new(schema)
            .map_err(|e| SchemaError::InvalidSchema(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Every violation of the schema by `instance`, sorted by path.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        let mut violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|error| Violation {
                path: dotted_path(&error.instance_path.to_string()),
                message: error.to_string(),
            })
            .collect();
        violations.sort();
        violations
    }

    /// `Ok` when `instance` conforms, otherwise the sorted violations.
    pub fn validate(&self, instance: &Value) -> Result<(), Vec<Violation>> {
        let violations = self.violations(instance);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Formats violations as the multi-line report shown to users.
pub fn render_report(violations: &[Violation]) -> String {
    let mut report = String::from(REPORT_HEADER);
    for violation in violations {
        report.push('\n');
        report.push_str(&violation.to_string());
    }
    report
}

/// Converts a JSON pointer (`/a/0/b`) into a dotted path (`a.0.b`).
fn dotted_path(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_record_is_valid() {
        let validator = SchemaValidator::planner().unwrap();
        assert!(validator.validate(&json!({ "date": "2024-03-05 (Tue)" })).is_ok());
    }

    #[test]
    fn missing_date_is_reported_at_the_root() {
        let validator = SchemaValidator::planner().unwrap();
        let violations = validator.violations(&json!({ "day_planet": "Mars" }));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "");
        assert!(violations[0].message.contains("date"));
    }

    #[test]
    fn wrongly_typed_fields_are_path_qualified_and_sorted() {
        let validator = SchemaValidator::planner().unwrap();
        let record = json!({
            "date": 20240305,
            "horoscope": { "task_list": ["ok", 7] }
        });
        let violations = validator.validate(&record).unwrap_err();
        let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, ["date", "horoscope.task_list.1"]);
    }

    #[test]
    fn report_lists_each_violation_under_the_header() {
        let report = render_report(&[Violation {
            path: "date".into(),
            message: "20240305 is not of type \"string\"".into(),
        }]);
        assert_eq!(
            report,
            "[ERROR] JSON validation failed:\n- date: 20240305 is not of type \"string\""
        );
    }

    #[test]
    fn pointer_escapes_are_decoded() {
        assert_eq!(dotted_path("/a~1b/0/c~0d"), "a/b.0.c~d");
        assert_eq!(dotted_path(""), "");
    }

    #[test]
    fn invalid_schema_is_rejected() {
        let result = SchemaValidator::from_value(&json!({ "type": 12 }));
        assert!(matches!(result, Err(SchemaError::InvalidSchema(_))));
    }
}
