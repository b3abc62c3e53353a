//! Builds the four page templates and paginates the planner story through them.

use crate::config::PlannerConfig;
use crate::header::{HeaderAssets, HeaderData, draw_footer, draw_header};
use crate::pages::{PAGE_RENDERERS, StoryWriter};
use crate::record::PlannerRecord;
use astroplan_layout::{
    DocTemplate, HorizontalRuleBlock, LayoutError, PageGeometry, PageTemplate, StoryItem,
};
use astroplan_render_core::{Canvas, DocumentRenderer};

const COLUMN_RULE_WIDTH: f32 = 0.5;

pub fn page_geometry(config: &PlannerConfig) -> PageGeometry {
    PageGeometry::new(config.page_size.size(), config.margins(), config.header_height)
}

/// The whole planner as one story: four pages joined by page breaks.
pub fn build_story(record: &PlannerRecord, config: &PlannerConfig) -> Vec<StoryItem> {
    let mut out = StoryWriter::new(config);
    for (i, render_page) in PAGE_RENDERERS.iter().enumerate() {
        if i > 0 {
            out.page_break();
        }
        render_page(record, &mut out);
    }
    log::debug!("Planner story has {} items", out.len());
    out.into_story()
}

/// Page chrome shared by every template.
#[derive(Clone, Copy)]
struct Chrome<'a> {
    header: &'a HeaderData,
    assets: &'a HeaderAssets,
}

impl Chrome<'_> {
    fn draw(&self, canvas: &mut dyn Canvas, geometry: &PageGeometry) {
        draw_header(canvas, geometry, self.header, self.assets);
        draw_footer(canvas, geometry, self.header);
    }
}

/// The page templates in order: horoscope, rituals, chores/kitchen, evening.
pub fn page_templates<'a>(
    config: &'a PlannerConfig,
    header: &'a HeaderData,
    assets: &'a HeaderAssets,
) -> DocTemplate<'a> {
    let geometry = page_geometry(config);
    let chrome = Chrome { header, assets };
    let mut doc = DocTemplate::new(geometry.clone());

    for id in ["page1", "page2"] {
        doc.add_template(
            PageTemplate::new(id, vec![geometry.single_frame("normal")]).on_page(
                move |canvas: &mut dyn Canvas, geometry: &PageGeometry, _page: usize| {
                    chrome.draw(canvas, geometry);
                    Ok(())
                },
            ),
        );
    }

    let rule_color = config.theme.rule.clone();
    let columns = geometry.two_columns(config.column_gutter).to_vec();
    doc.add_template(PageTemplate::new("page3", columns).on_page(
        move |canvas: &mut dyn Canvas, geometry: &PageGeometry, _page: usize| {
            chrome.draw(canvas, geometry);
            let x = geometry.center_x();
            let bottom = geometry.margins.bottom;
            canvas.save_state();
            canvas.set_stroke_color(&rule_color);
            canvas.set_line_width(COLUMN_RULE_WIDTH);
            canvas.line(x, bottom, x, bottom + geometry.frame_height());
            canvas.restore_state();
            Ok(())
        },
    ));

    let background = HorizontalRuleBlock {
        top_offset: config.journal.background_top,
        bottom_offset: config.journal.background_bottom,
        pitch: config.journal.background_pitch,
        color: config.theme.rule.clone(),
        line_width: COLUMN_RULE_WIDTH,
    };
    doc.add_template(PageTemplate::new("page4", vec![geometry.single_frame("normal")]).on_page(
        move |canvas: &mut dyn Canvas, geometry: &PageGeometry, _page: usize| {
            chrome.draw(canvas, geometry);
            background.draw(canvas, geometry);
            Ok(())
        },
    ));

    doc
}

/// Lays out `record` and draws every page through `renderer`. Returns the page count.
pub fn render_planner<R: DocumentRenderer>(
    record: &PlannerRecord,
    config: &PlannerConfig,
    assets: &HeaderAssets,
    renderer: &mut R,
) -> Result<usize, LayoutError> {
    let header = HeaderData::new(record, config);
    let doc = page_templates(config, &header, assets);
    let pages = doc.render(build_story(record, config), renderer)?;
    log::info!("Rendered planner with {} page(s)", pages);
    Ok(pages)
}
