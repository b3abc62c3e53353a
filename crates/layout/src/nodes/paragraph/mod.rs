pub mod builder;
pub mod node;

pub use builder::{ParagraphBuilder, TextRun};
pub use node::{Alignment, Marker, Paragraph, ParagraphStyle};
