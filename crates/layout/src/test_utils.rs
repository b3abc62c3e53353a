#![cfg(test)]

use crate::engine::{DocTemplate, StoryItem};
use crate::frame::PageGeometry;
use crate::nodes::{Paragraph, ParagraphStyle};
use crate::template::PageTemplate;
use astroplan_render_core::{DrawCommand, RecordedPage, RecordingRenderer};
use astroplan_types::{Margins, Size};

pub fn body_style() -> ParagraphStyle {
    ParagraphStyle {
        font_size: 10.0,
        leading: 13.0,
        ..Default::default()
    }
}

pub fn create_paragraph(text: &str) -> StoryItem {
    StoryItem::flow(Paragraph::plain(text, body_style()))
}

/// A small page whose single frame has a content area of 200 x 100 points.
pub fn small_geometry() -> PageGeometry {
    PageGeometry::new(Size::new(232.0, 132.0), Margins::all(10.0), 0.0)
}

pub fn paginate_test_story(
    doc: &DocTemplate<'_>,
    story: Vec<StoryItem>,
) -> Vec<RecordedPage> {
    let mut renderer = RecordingRenderer::new();
    doc.render(story, &mut renderer).unwrap();
    renderer.pages().to_vec()
}

pub fn single_frame_doc(geometry: PageGeometry) -> DocTemplate<'static> {
    let frame = geometry.single_frame("body");
    let mut doc = DocTemplate::new(geometry);
    doc.add_template(PageTemplate::new("only", vec![frame]));
    doc
}

/// Baselines of every text command on a page, in drawing order.
pub fn text_baselines(page: &RecordedPage) -> Vec<(String, f32)> {
    page.commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, y, .. } => Some((text.clone(), *y)),
            _ => None,
        })
        .collect()
}
