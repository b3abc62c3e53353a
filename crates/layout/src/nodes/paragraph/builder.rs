use super::node::{Marker, Paragraph, ParagraphStyle};
use crate::text::{Word, tokenize};
use astroplan_render_core::StandardFont;

/// A span of paragraph text sharing one weight and slant.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }

    pub fn font(&self) -> StandardFont {
        StandardFont::styled(self.bold, self.italic)
    }
}

/// Fluent construction of mixed-style paragraphs, e.g. a bold label followed by a value.
///
/// Consecutive runs are always separated by a space when laid out.
#[derive(Debug, Clone)]
pub struct ParagraphBuilder {
    style: ParagraphStyle,
    runs: Vec<TextRun>,
    marker: Option<Marker>,
}

impl ParagraphBuilder {
    pub fn new(style: ParagraphStyle) -> Self {
        Self {
            style,
            runs: Vec::new(),
            marker: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.runs.push(TextRun::plain(text));
        self
    }

    pub fn bold(mut self, text: impl Into<String>) -> Self {
        self.runs.push(TextRun::bold(text));
        self
    }

    pub fn italic(mut self, text: impl Into<String>) -> Self {
        self.runs.push(TextRun::italic(text));
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn build(self) -> Paragraph {
        let words: Vec<Word> = self
            .runs
            .iter()
            .flat_map(|run| tokenize(&run.text, run.font()))
            .collect();
        Paragraph::from_words(words, self.style, self.marker)
    }
}

impl Paragraph {
    pub fn builder(style: ParagraphStyle) -> ParagraphBuilder {
        ParagraphBuilder::new(style)
    }

    pub fn plain(text: impl Into<String>, style: ParagraphStyle) -> Self {
        ParagraphBuilder::new(style).text(text).build()
    }
}
