use astroplan_render_core::StandardFont;

// Use a small epsilon to handle floating point inaccuracies
const EPSILON: f32 = 0.01;

/// A whitespace-delimited token together with the face it is set in.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub font: StandardFont,
    /// The word must start a new line (it followed an explicit newline).
    pub forced_break: bool,
}

/// A run of consecutive same-font words on one line, positioned relative to the line start.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub text: String,
    pub font: StandardFont,
    pub x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub segments: Vec<LineSegment>,
    pub width: f32,
    /// Index of the first word of this line in the wrapped word list.
    pub first_word: usize,
}

impl LineLayout {
    fn start(word: &Word, index: usize, word_width: f32) -> Self {
        Self {
            segments: vec![LineSegment {
                text: word.text.clone(),
                font: word.font,
                x: 0.0,
                width: word_width,
            }],
            width: word_width,
            first_word: index,
        }
    }

    fn push(&mut self, word: &Word, space: f32, word_width: f32) {
        match self.segments.last_mut() {
            Some(seg) if seg.font == word.font => {
                seg.text.push(' ');
                seg.text.push_str(&word.text);
                seg.width += space + word_width;
            }
            _ => self.segments.push(LineSegment {
                text: word.text.clone(),
                font: word.font,
                x: self.width + space,
                width: word_width,
            }),
        }
        self.width += space + word_width;
    }

    fn trailing_font(&self) -> Option<StandardFont> {
        self.segments.last().map(|s| s.font)
    }
}

/// Splits `text` into words set in `font`. Newlines force the following word onto a new line.
pub fn tokenize(text: &str, font: StandardFont) -> Vec<Word> {
    let mut words = Vec::new();
    for (line_idx, line) in text.split('\n').enumerate() {
        for (word_idx, token) in line.split_whitespace().enumerate() {
            words.push(Word {
                text: token.to_string(),
                font,
                forced_break: line_idx > 0 && word_idx == 0,
            });
        }
    }
    words
}

/// Greedy line breaking over styled words.
///
/// Words are separated by a single space measured in the preceding word's font.
/// A word wider than `max_width` is placed alone on its own line and overflows.
pub fn break_lines(words: &[Word], max_width: f32, font_size: f32) -> Vec<LineLayout> {
    let mut lines = Vec::new();
    let mut current: Option<LineLayout> = None;

    for (idx, word) in words.iter().enumerate() {
        let word_width = word.font.string_width(&word.text, font_size);

        current = match current.take() {
            Some(mut line) if !word.forced_break => {
                let space = line
                    .trailing_font()
                    .map_or(0.0, |font| font.string_width(" ", font_size));
                if line.width + space + word_width <= max_width + EPSILON {
                    line.push(word, space, word_width);
                    Some(line)
                } else {
                    lines.push(line);
                    Some(LineLayout::start(word, idx, word_width))
                }
            }
            previous => {
                if let Some(line) = previous {
                    lines.push(line);
                }
                Some(LineLayout::start(word, idx, word_width))
            }
        };
    }

    if let Some(line) = current {
        lines.push(line);
    }
    lines
}
