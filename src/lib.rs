//! Renders a daily astrological planner record into a four-page PDF.
//!
//! The flow is load -> validate -> build story -> paginate -> write:
//! [`PipelineBuilder`] assembles a [`PlannerPipeline`], which checks the JSON
//! record against the bundled schema, turns it into a [`PlannerRecord`] and
//! lays it out through the page templates in [`assembler`].

pub mod assembler;
pub mod config;
pub mod date;
pub mod error;
pub mod header;
pub mod moon;
pub mod pages;
pub mod pipeline;
pub mod record;
pub mod styles;

pub use assembler::{build_story, page_geometry, render_planner};
pub use config::{ListPolicy, PageSize, PlannerConfig};
pub use error::PipelineError;
pub use pipeline::{PipelineBuilder, PlannerPipeline};
pub use record::PlannerRecord;

pub use astroplan_schema::{Violation, render_report};
