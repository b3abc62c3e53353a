use crate::fonts::StandardFont;
use astroplan_types::{Color, Point, Rect, ResourceKey};

/// How a path is painted once it has been built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
    FillStroke,
}

/// Control point distance for approximating a quarter circle with a cubic Bézier.
pub const KAPPA: f32 = 0.552_284_8;

#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, end: Point },
    Close,
}

/// Fluent builder for vector outlines (stars, moon discs, checkboxes).
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::LineTo(Point::new(x, y)));
        self
    }

    pub fn curve_to(mut self, c1: (f32, f32), c2: (f32, f32), end: (f32, f32)) -> Self {
        self.segments.push(PathSegment::CurveTo {
            c1: Point::new(c1.0, c1.1),
            c2: Point::new(c2.0, c2.1),
            end: Point::new(end.0, end.1),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn rect(self, rect: Rect) -> Self {
        self.move_to(rect.x, rect.y)
            .line_to(rect.right(), rect.y)
            .line_to(rect.right(), rect.top())
            .line_to(rect.x, rect.top())
            .close()
    }

    /// A full circle as four cubic Bézier quarter arcs.
    pub fn circle(self, cx: f32, cy: f32, r: f32) -> Self {
        let k = KAPPA * r;
        self.move_to(cx, cy + r)
            .curve_to((cx + k, cy + r), (cx + r, cy + k), (cx + r, cy))
            .curve_to((cx + r, cy - k), (cx + k, cy - r), (cx, cy - r))
            .curve_to((cx - k, cy - r), (cx - r, cy - k), (cx - r, cy))
            .curve_to((cx - r, cy + k), (cx - k, cy + r), (cx, cy + r))
            .close()
    }

    pub fn build(self) -> Vec<PathSegment> {
        self.segments
    }
}

/// One drawing call as seen by a `RecordingRenderer`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SaveState,
    RestoreState,
    FillColor(Color),
    StrokeColor(Color),
    LineWidth(f32),
    Line { from: Point, to: Point },
    Path { segments: Vec<PathSegment>, mode: PaintMode },
    Text { x: f32, y: f32, text: String, font: StandardFont, size: f32 },
    Image { key: ResourceKey, rect: Rect },
}
