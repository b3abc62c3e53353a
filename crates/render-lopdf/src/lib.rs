//! PDF backend for the planner using the lopdf library.
//!
//! Pages are drawn into lopdf content streams through the `Canvas` trait and the
//! object graph is serialized once, when the document is finished.

mod helpers;
mod renderer;

pub use renderer::LopdfRenderer;
