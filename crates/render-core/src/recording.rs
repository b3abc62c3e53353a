use crate::error::RenderError;
use crate::fonts::StandardFont;
use crate::traits::{Canvas, DocumentRenderer};
use crate::types::{DrawCommand, PaintMode, PathSegment};
use astroplan_types::{Color, Point, Rect, ResourceKey, SharedData, Size};

/// A finished page captured by `RecordingRenderer`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedPage {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

impl RecordedPage {
    /// All text runs on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

/// Backend that keeps every drawing call in memory instead of producing PDF bytes.
///
/// Used to inspect layout output in tests and for dry runs.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pages: Vec<RecordedPage>,
    current: Option<RecordedPage>,
    loose: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands drawn so far on the open page, or outside of any page.
    pub fn commands(&self) -> &[DrawCommand] {
        match &self.current {
            Some(page) => &page.commands,
            None => &self.loose,
        }
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    fn push(&mut self, command: DrawCommand) {
        match &mut self.current {
            Some(page) => page.commands.push(command),
            None => self.loose.push(command),
        }
    }
}

impl Canvas for RecordingRenderer {
    fn save_state(&mut self) {
        self.push(DrawCommand::SaveState);
    }

    fn restore_state(&mut self) {
        self.push(DrawCommand::RestoreState);
    }

    fn set_fill_color(&mut self, color: &Color) {
        self.push(DrawCommand::FillColor(color.clone()));
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.push(DrawCommand::StrokeColor(color.clone()));
    }

    fn set_line_width(&mut self, width: f32) {
        self.push(DrawCommand::LineWidth(width));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push(DrawCommand::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        });
    }

    fn draw_path(&mut self, segments: &[PathSegment], mode: PaintMode) {
        self.push(DrawCommand::Path {
            segments: segments.to_vec(),
            mode,
        });
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str, font: StandardFont, size: f32) {
        self.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            font,
            size,
        });
    }

    fn draw_image(
        &mut self,
        key: &ResourceKey,
        _data: &SharedData,
        rect: Rect,
    ) -> Result<(), RenderError> {
        self.push(DrawCommand::Image {
            key: key.clone(),
            rect,
        });
        Ok(())
    }
}

impl DocumentRenderer for RecordingRenderer {
    type Output = Vec<RecordedPage>;

    fn begin_page(&mut self, width: f32, height: f32) -> Result<(), RenderError> {
        if self.current.is_some() {
            return Err(RenderError::Other("Previous page was never ended".into()));
        }
        self.current = Some(RecordedPage {
            size: Size::new(width, height),
            commands: Vec::new(),
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let page = self.current.take().ok_or(RenderError::NoOpenPage)?;
        self.pages.push(page);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn finish(self) -> Result<Self::Output, RenderError> {
        if self.current.is_some() {
            return Err(RenderError::Other("Document finished with an open page".into()));
        }
        Ok(self.pages)
    }
}
