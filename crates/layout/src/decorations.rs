//! Procedurally drawn ornaments: star glyphs, the ornamental divider and ruled-line blocks.

use crate::LayoutError;
use crate::flowable::Flowable;
use crate::frame::PageGeometry;
use astroplan_render_core::{Canvas, PaintMode, PathBuilder};
use astroplan_types::{BoxConstraints, Color, Size};

/// Horizontal extent of a star glyph relative to its nominal size.
pub const STAR_WIDTH_RATIO: f32 = 0.75;
const STAR_INNER_RATIO: f32 = 0.3;

pub fn star_width(size: f32) -> f32 {
    size * STAR_WIDTH_RATIO
}

/// Size and color of the four-point star ornaments.
#[derive(Debug, Clone, PartialEq)]
pub struct StarStyle {
    pub size: f32,
    pub color: Color,
}

/// Paints a four-point star centered on `(cx, cy)` with the canvas's current colors.
pub fn draw_star(canvas: &mut dyn Canvas, cx: f32, cy: f32, size: f32, mode: PaintMode) {
    let outer = star_width(size) / 2.0;
    let inner = outer * STAR_INNER_RATIO;
    let mut path = PathBuilder::new();
    for i in 0..8 {
        let angle = std::f32::consts::FRAC_PI_2 - i as f32 * std::f32::consts::FRAC_PI_4;
        let radius = if i % 2 == 0 { outer } else { inner };
        let (x, y) = (cx + radius * angle.cos(), cy + radius * angle.sin());
        path = if i == 0 { path.move_to(x, y) } else { path.line_to(x, y) };
    }
    canvas.draw_path(&path.close().build(), mode);
}

/// Outlined star: a white-filled slightly smaller copy under a slightly
/// larger stroked copy in `color`.
pub fn draw_outlined_star(canvas: &mut dyn Canvas, cx: f32, cy: f32, size: f32, color: &Color) {
    canvas.save_state();
    canvas.set_fill_color(&Color::WHITE);
    draw_star(canvas, cx, cy, size - 1.0, PaintMode::Fill);
    canvas.set_stroke_color(color);
    canvas.set_line_width(0.8);
    draw_star(canvas, cx, cy, size + 1.0, PaintMode::Stroke);
    canvas.restore_state();
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthPolicy {
    /// Percentage (0-100) of the available width.
    Percent(f32),
    Absolute(f32),
}

impl WidthPolicy {
    pub fn resolve(self, available: f32) -> f32 {
        match self {
            WidthPolicy::Percent(p) => available * (p / 100.0).clamp(0.0, 1.0),
            WidthPolicy::Absolute(w) => w.min(available),
        }
    }
}

/// A horizontal line capped by an outlined star at each end, centered in its available width.
#[derive(Debug, Clone, PartialEq)]
pub struct OrnamentalDivider {
    pub width: WidthPolicy,
    pub star: StarStyle,
    pub gap: f32,
    pub line_width: f32,
    pub space_before: f32,
    pub space_after: f32,
}

impl Default for OrnamentalDivider {
    fn default() -> Self {
        Self {
            width: WidthPolicy::Percent(100.0),
            star: StarStyle {
                size: 16.0,
                color: Color::gray(0xB0),
            },
            gap: 6.0,
            line_width: 1.2,
            space_before: 8.0,
            space_after: 8.0,
        }
    }
}

impl OrnamentalDivider {
    /// Draws the divider with its line at height `y`, centered within `[x, x + available]`.
    pub fn draw_at(&self, canvas: &mut dyn Canvas, x: f32, y: f32, available: f32) {
        let total = self.width.resolve(available);
        let left = x + (available - total) / 2.0;
        let right = left + total;
        let glyph = star_width(self.star.size);

        canvas.save_state();
        canvas.set_stroke_color(&self.star.color);
        canvas.set_line_width(self.line_width);
        let line_start = left + glyph + self.gap;
        let line_end = right - glyph - self.gap;
        if line_end > line_start {
            canvas.line(line_start, y, line_end, y);
        }
        canvas.restore_state();

        draw_outlined_star(canvas, left + glyph / 2.0, y, self.star.size, &self.star.color);
        draw_outlined_star(canvas, right - glyph / 2.0, y, self.star.size, &self.star.color);
    }
}

impl Flowable for OrnamentalDivider {
    fn measure(&self, constraints: BoxConstraints) -> Size {
        Size::new(constraints.max_width, self.space_before + self.space_after)
    }

    fn draw(&self, canvas: &mut dyn Canvas, x: f32, top: f32, width: f32) -> Result<(), LayoutError> {
        self.draw_at(canvas, x, top - self.space_before, width);
        Ok(())
    }
}

/// Evenly spaced full-width rules drawn directly on the page, measured from the bottom margin.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalRuleBlock {
    pub top_offset: f32,
    pub bottom_offset: f32,
    pub pitch: f32,
    pub color: Color,
    pub line_width: f32,
}

impl HorizontalRuleBlock {
    pub fn line_count(&self) -> usize {
        if self.pitch <= 0.0 || self.top_offset <= self.bottom_offset {
            return 0;
        }
        ((self.top_offset - self.bottom_offset) / self.pitch).floor() as usize
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, geometry: &PageGeometry) {
        let left = geometry.content_left();
        let right = geometry.content_right();
        let top = geometry.margins.bottom + self.top_offset;

        canvas.save_state();
        canvas.set_stroke_color(&self.color);
        canvas.set_line_width(self.line_width);
        for i in 0..self.line_count() {
            let y = top - i as f32 * self.pitch;
            canvas.line(left, y, right, y);
        }
        canvas.restore_state();
    }
}

/// A fixed number of ruled writing lines inside the flow.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalLines {
    pub n_lines: usize,
    pub spacing: f32,
    pub left_inset: f32,
    pub right_inset: f32,
    pub color: Color,
    pub line_width: f32,
}

impl JournalLines {
    pub fn new(n_lines: usize, spacing: f32) -> Self {
        Self {
            n_lines,
            spacing,
            left_inset: 7.2,
            right_inset: 7.2,
            color: Color::gray(0xCC),
            line_width: 0.5,
        }
    }
}

impl Flowable for JournalLines {
    fn measure(&self, constraints: BoxConstraints) -> Size {
        Size::new(constraints.max_width, self.n_lines as f32 * self.spacing)
    }

    fn draw(&self, canvas: &mut dyn Canvas, x: f32, top: f32, width: f32) -> Result<(), LayoutError> {
        let (x1, x2) = (x + self.left_inset, x + width - self.right_inset);
        canvas.save_state();
        canvas.set_stroke_color(&self.color);
        canvas.set_line_width(self.line_width);
        for i in 0..self.n_lines {
            let y = top - (i + 1) as f32 * self.spacing;
            canvas.line(x1, y, x2, y);
        }
        canvas.restore_state();
        Ok(())
    }
}
