use crate::LayoutError;
use crate::decorations::{StarStyle, draw_star, star_width};
use crate::flowable::Flowable;
use crate::nodes::paragraph::ParagraphStyle;
use astroplan_render_core::utils::flip_y;
use astroplan_render_core::{Canvas, PaintMode, StandardFont};
use astroplan_types::{BoxConstraints, Size};

/// A single-line, centered section title flanked by filled star glyphs.
#[derive(Debug, Clone)]
pub struct Heading {
    text: String,
    style: ParagraphStyle,
    star: StarStyle,
    gap: f32,
}

impl Heading {
    pub fn new(text: impl Into<String>, style: ParagraphStyle, star: StarStyle) -> Self {
        Self {
            text: text.into(),
            style,
            star,
            gap: 4.0,
        }
    }
}

impl Flowable for Heading {
    fn measure(&self, constraints: BoxConstraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            StandardFont::HelveticaBold.string_width(&self.text, self.style.font_size)
                + 2.0 * (star_width(self.star.size) + self.gap)
        };
        Size::new(
            width,
            self.style.space_before + self.style.leading + self.style.space_after,
        )
    }

    fn draw(&self, canvas: &mut dyn Canvas, x: f32, top: f32, width: f32) -> Result<(), LayoutError> {
        let font = StandardFont::HelveticaBold;
        let size = self.style.font_size;
        let baseline = flip_y(self.style.space_before + size, top);
        let text_width = font.string_width(&self.text, size);
        let text_x = x + (width - text_width) / 2.0;
        let glyph = star_width(self.star.size);
        let star_y = baseline + size * 0.35;

        canvas.set_fill_color(&self.style.color);
        canvas.draw_string(text_x, baseline, &self.text, font, size);

        canvas.save_state();
        canvas.set_fill_color(&self.star.color);
        draw_star(canvas, text_x - self.gap - glyph / 2.0, star_y, self.star.size, PaintMode::Fill);
        draw_star(
            canvas,
            text_x + text_width + self.gap + glyph / 2.0,
            star_y,
            self.star.size,
            PaintMode::Fill,
        );
        canvas.restore_state();
        Ok(())
    }
}
