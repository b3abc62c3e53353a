use astroplan_types::{Margins, Rect, Size};

/// Inner padding applied on every side of a frame's content area.
pub const DEFAULT_FRAME_PADDING: f32 = 6.0;

/// A fixed rectangle on the page that story content flows into.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub id: String,
    pub rect: Rect,
    pub padding: f32,
}

impl Frame {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
            padding: DEFAULT_FRAME_PADDING,
        }
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// The area available to flowables once padding is removed.
    pub fn content_rect(&self) -> Rect {
        let p = self.padding;
        Rect::new(
            self.rect.x + p,
            self.rect.y + p,
            (self.rect.width - 2.0 * p).max(0.0),
            (self.rect.height - 2.0 * p).max(0.0),
        )
    }
}

/// Page size, margins and the header band reserved above the body frames.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_size: Size,
    pub margins: Margins,
    pub header_height: f32,
}

impl PageGeometry {
    pub fn new(page_size: Size, margins: Margins, header_height: f32) -> Self {
        Self {
            page_size,
            margins,
            header_height,
        }
    }

    pub fn content_left(&self) -> f32 {
        self.margins.left
    }

    pub fn content_right(&self) -> f32 {
        self.page_size.width - self.margins.right
    }

    pub fn content_width(&self) -> f32 {
        self.content_right() - self.content_left()
    }

    /// Height between the top and bottom margins, header band included.
    pub fn content_height(&self) -> f32 {
        self.page_size.height - self.margins.top - self.margins.bottom
    }

    /// The top margin line; the header is drawn relative to it.
    pub fn content_top(&self) -> f32 {
        self.margins.bottom + self.content_height()
    }

    pub fn center_x(&self) -> f32 {
        self.content_left() + self.content_width() / 2.0
    }

    /// Height of the body frames, i.e. the content area minus the header band.
    pub fn frame_height(&self) -> f32 {
        (self.content_height() - self.header_height).max(0.0)
    }

    /// One frame spanning the full body area.
    pub fn single_frame(&self, id: &str) -> Frame {
        Frame::new(
            id,
            Rect::new(
                self.content_left(),
                self.margins.bottom,
                self.content_width(),
                self.frame_height(),
            ),
        )
    }

    /// Two equal-width body frames separated by `gutter`.
    pub fn two_columns(&self, gutter: f32) -> [Frame; 2] {
        let col_width = ((self.content_width() - gutter) / 2.0).max(0.0);
        let height = self.frame_height();
        let bottom = self.margins.bottom;
        [
            Frame::new("left", Rect::new(self.content_left(), bottom, col_width, height)),
            Frame::new(
                "right",
                Rect::new(self.content_left() + col_width + gutter, bottom, col_width, height),
            ),
        ]
    }
}
