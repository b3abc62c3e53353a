pub mod color;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use geometry::{BoxConstraints, Margins, Point, Rect, Size};
pub use ids::{ResourceKey, SharedData};
