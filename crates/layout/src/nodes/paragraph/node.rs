use crate::LayoutError;
use crate::flowable::{Flowable, SplitPair};
use crate::text::{LineLayout, Word, break_lines};
use astroplan_render_core::utils::flip_y;
use astroplan_render_core::{Canvas, PaintMode, PathBuilder, StandardFont};
use astroplan_types::{BoxConstraints, Color, Rect, Size};

/// Horizontal space reserved for a bullet or checkbox marker.
pub const MARKER_INDENT: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// A glyph drawn in the hanging indent before the first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Bullet,
    Checkbox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: f32,
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub alignment: Alignment,
    pub color: Color,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            leading: 12.0,
            space_before: 0.0,
            space_after: 0.0,
            alignment: Alignment::Left,
            color: Color::BLACK,
        }
    }
}

/// Wrapped, mixed-style text.
///
/// When split across frames, the head keeps the marker and `space_before`
/// while the tail keeps `space_after`.
#[derive(Debug, Clone)]
pub struct Paragraph {
    words: Vec<Word>,
    style: ParagraphStyle,
    marker: Option<Marker>,
    first_fragment: bool,
    last_fragment: bool,
}

impl Paragraph {
    pub(crate) fn from_words(words: Vec<Word>, style: ParagraphStyle, marker: Option<Marker>) -> Self {
        Self {
            words,
            style,
            marker,
            first_fragment: true,
            last_fragment: true,
        }
    }

    pub fn style(&self) -> &ParagraphStyle {
        &self.style
    }

    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// The paragraph's words joined by single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn indent(&self) -> f32 {
        if self.marker.is_some() { MARKER_INDENT } else { 0.0 }
    }

    fn space_before(&self) -> f32 {
        if self.first_fragment { self.style.space_before } else { 0.0 }
    }

    fn space_after(&self) -> f32 {
        if self.last_fragment { self.style.space_after } else { 0.0 }
    }

    pub fn lines(&self, width: f32) -> Vec<LineLayout> {
        let text_width = (width - self.indent()).max(0.0);
        break_lines(&self.words, text_width, self.style.font_size)
    }

    fn height_for(&self, line_count: usize) -> f32 {
        self.space_before() + line_count as f32 * self.style.leading + self.space_after()
    }

    fn draw_marker(&self, canvas: &mut dyn Canvas, x: f32, baseline: f32) {
        let size = self.style.font_size;
        match self.marker {
            Some(Marker::Bullet) => {
                canvas.draw_string(x + 1.0, baseline, "\u{2022}", StandardFont::Helvetica, size);
            }
            Some(Marker::Checkbox) => {
                let side = size * 0.7;
                let frame = Rect::new(x + 1.0, baseline - size * 0.05, side, side);
                canvas.save_state();
                canvas.set_stroke_color(&self.style.color);
                canvas.set_line_width(0.6);
                canvas.draw_path(&PathBuilder::new().rect(frame).build(), PaintMode::Stroke);
                canvas.restore_state();
            }
            None => {}
        }
    }
}

impl Flowable for Paragraph {
    fn measure(&self, constraints: BoxConstraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            f32::INFINITY
        };
        let lines = self.lines(width);
        let natural = lines.iter().map(|l| l.width).fold(0.0, f32::max) + self.indent();
        let width = if width.is_finite() { width } else { natural };
        Size::new(width, self.height_for(lines.len()))
    }

    fn draw(&self, canvas: &mut dyn Canvas, x: f32, top: f32, width: f32) -> Result<(), LayoutError> {
        let lines = self.lines(width);
        let text_x = x + self.indent();
        let text_width = width - self.indent();
        let first_baseline = flip_y(self.space_before() + self.style.font_size, top);

        canvas.set_fill_color(&self.style.color);
        if self.first_fragment && !lines.is_empty() {
            self.draw_marker(canvas, x, first_baseline);
        }

        for (i, line) in lines.iter().enumerate() {
            let baseline = first_baseline - i as f32 * self.style.leading;
            let line_x = match self.style.alignment {
                Alignment::Left => text_x,
                Alignment::Center => text_x + (text_width - line.width) / 2.0,
            };
            for segment in &line.segments {
                canvas.draw_string(
                    line_x + segment.x,
                    baseline,
                    &segment.text,
                    segment.font,
                    self.style.font_size,
                );
            }
        }
        Ok(())
    }

    fn split(&self, width: f32, available_height: f32) -> Option<SplitPair> {
        let lines = self.lines(width);
        let room = available_height - self.space_before();
        if room <= 0.0 {
            return None;
        }
        let fitting = ((room + 0.01) / self.style.leading).floor() as usize;
        if fitting == 0 || fitting >= lines.len() {
            return None;
        }

        let at = lines[fitting].first_word;
        let mut tail_words = self.words[at..].to_vec();
        if let Some(first) = tail_words.first_mut() {
            first.forced_break = false;
        }
        log::debug!(
            "Splitting paragraph after {} of {} lines",
            fitting,
            lines.len()
        );

        let head = Paragraph {
            words: self.words[..at].to_vec(),
            style: self.style.clone(),
            marker: self.marker,
            first_fragment: self.first_fragment,
            last_fragment: false,
        };
        let tail = Paragraph {
            words: tail_words,
            style: self.style.clone(),
            marker: self.marker,
            first_fragment: false,
            last_fragment: self.last_fragment,
        };
        Some((Box::new(head), Box::new(tail)))
    }
}
