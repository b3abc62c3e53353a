use crate::error::RenderError;
use crate::fonts::StandardFont;
use crate::types::{PaintMode, PathSegment};
use astroplan_types::{Color, Rect, ResourceKey, SharedData};

/// An immediate-mode drawing surface in PDF user space (points, origin bottom-left).
///
/// Primitive operations are buffered by the backend and cannot fail individually;
/// failures surface when a page is closed or the document is finished.
pub trait Canvas {
    fn save_state(&mut self);

    fn restore_state(&mut self);

    fn set_fill_color(&mut self, color: &Color);

    fn set_stroke_color(&mut self, color: &Color);

    fn set_line_width(&mut self, width: f32);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    fn draw_path(&mut self, segments: &[PathSegment], mode: PaintMode);

    /// Draws `text` with its baseline starting at `(x, y)` in the current fill color.
    fn draw_string(&mut self, x: f32, y: f32, text: &str, font: StandardFont, size: f32);

    /// Places an encoded raster image (PNG/JPEG) scaled into `rect`.
    ///
    /// `key` identifies the image so backends can embed the data once per document.
    fn draw_image(
        &mut self,
        key: &ResourceKey,
        data: &SharedData,
        rect: Rect,
    ) -> Result<(), RenderError>;

    fn draw_right_string(&mut self, right_x: f32, y: f32, text: &str, font: StandardFont, size: f32) {
        let width = font.string_width(text, size);
        self.draw_string(right_x - width, y, text, font, size);
    }

    fn draw_centred_string(&mut self, center_x: f32, y: f32, text: &str, font: StandardFont, size: f32) {
        let width = font.string_width(text, size);
        self.draw_string(center_x - width / 2.0, y, text, font, size);
    }
}

/// A `Canvas` that also owns page boundaries and produces the finished artifact.
pub trait DocumentRenderer: Canvas {
    type Output;

    fn begin_page(&mut self, width: f32, height: f32) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    /// Number of pages closed so far.
    fn page_count(&self) -> usize;

    fn finish(self) -> Result<Self::Output, RenderError>
    where
        Self: Sized;
}
