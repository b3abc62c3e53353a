use crate::LayoutError;
use astroplan_render_core::Canvas;
use astroplan_types::{BoxConstraints, Size};
use std::fmt::Debug;

/// The two halves of a flowable split across a frame boundary.
pub type SplitPair = (Box<dyn Flowable>, Box<dyn Flowable>);

/// A unit of story content placed into frames by the pagination engine.
///
/// Layout is two-phase: the engine first calls `measure` with the frame's
/// constraints, then `draw` with the position it settled on. `draw` may assume
/// it receives the same width that was measured.
pub trait Flowable: Debug {
    /// Computes the size this flowable needs within `constraints`.
    fn measure(&self, constraints: BoxConstraints) -> Size;

    /// Draws the flowable with its top-left corner at `(x, top)` in PDF space.
    fn draw(&self, canvas: &mut dyn Canvas, x: f32, top: f32, width: f32) -> Result<(), LayoutError>;

    /// Splits the flowable so that the first half fits into `available_height`.
    ///
    /// Returns `None` when no useful split exists (nothing fits, or everything does).
    fn split(&self, _width: f32, _available_height: f32) -> Option<SplitPair> {
        None
    }

    /// Whether the flowable is dropped, rather than moved on, when it does not
    /// fit into the rest of the current frame.
    fn collapses_at_frame_end(&self) -> bool {
        false
    }
}
