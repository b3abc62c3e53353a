use astroplan_render_core::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Document template has no page templates.")]
    NoTemplates,
    #[error("Page template '{0}' has no frames.")]
    EmptyTemplate(String),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub mod algorithms;
pub mod decorations;
pub mod engine;
pub mod flowable;
pub mod frame;
pub mod nodes;
pub mod template;
pub mod text;

pub use self::decorations::{
    HorizontalRuleBlock, JournalLines, OrnamentalDivider, StarStyle, WidthPolicy, draw_outlined_star,
    draw_star,
};
pub use self::engine::{DocTemplate, StoryItem};
pub use self::flowable::{Flowable, SplitPair};
pub use self::frame::{Frame, PageGeometry};
pub use self::nodes::{
    Alignment, Heading, Marker, Paragraph, ParagraphBuilder, ParagraphStyle, Spacer, TextRun,
};
pub use self::template::{PageDecoration, PageTemplate};

// Re-export geometry types used by flowables to prevent type mismatches
pub use astroplan_types::{BoxConstraints, Rect, Size};

#[cfg(test)]
mod test_utils;
