//! Core rendering abstractions for the planner PDF.
//!
//! This crate provides the drawing surface used by every layout element:
//! - `Canvas`, the immediate-mode drawing API (lines, paths, text, images)
//! - `DocumentRenderer`, a `Canvas` that also manages pages and the final artifact
//! - standard font metrics used to measure text before it is drawn
//! - `RecordingRenderer`, an in-memory backend that records draw commands

mod error;
pub mod fonts;
mod recording;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use fonts::StandardFont;
pub use recording::{RecordedPage, RecordingRenderer};
pub use traits::{Canvas, DocumentRenderer};
pub use types::{DrawCommand, KAPPA, PaintMode, PathBuilder, PathSegment};
