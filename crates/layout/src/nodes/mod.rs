pub mod heading;
pub mod paragraph;
pub mod spacer;

pub use heading::Heading;
pub use paragraph::{Alignment, Marker, Paragraph, ParagraphBuilder, ParagraphStyle, TextRun};
pub use spacer::Spacer;
