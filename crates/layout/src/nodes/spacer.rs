use crate::LayoutError;
use crate::flowable::Flowable;
use astroplan_render_core::Canvas;
use astroplan_types::{BoxConstraints, Size};

/// Fixed vertical whitespace. A spacer that does not fit is dropped instead of
/// carrying over into the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacer {
    pub height: f32,
}

impl Spacer {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl Flowable for Spacer {
    fn measure(&self, constraints: BoxConstraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            0.0
        };
        Size::new(width, self.height)
    }

    fn draw(&self, _canvas: &mut dyn Canvas, _x: f32, _top: f32, _width: f32) -> Result<(), LayoutError> {
        Ok(())
    }

    fn collapses_at_frame_end(&self) -> bool {
        true
    }
}
