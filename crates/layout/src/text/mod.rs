pub mod wrapper;

pub use wrapper::{LineLayout, LineSegment, Word, break_lines, tokenize};
