//! The banner and footer drawn identically at the top and bottom of every page.

use crate::config::{PlannerConfig, Theme};
use crate::date::{DisplayDate, parse_display_date};
use crate::moon::MoonPhase;
use crate::record::{PlannerRecord, present};
use astroplan_layout::{OrnamentalDivider, PageGeometry, StarStyle, WidthPolicy, draw_star};
use astroplan_layout::decorations::star_width;
use astroplan_render_core::{Canvas, PaintMode, StandardFont};
use astroplan_types::{Rect, ResourceKey, SharedData};
use std::path::Path;

const BASELINE_ABOVE_TOP: f32 = 10.0;
const EMBLEM_SIZE: f32 = 36.0;
const EMBLEM_GAP: f32 = 11.0;
const DATE_FONT_SIZE: f32 = 12.0;
const MOON_LINE_DROP: f32 = 32.0;
const MOON_SIZE: f32 = 14.0;
const MOON_GAP: f32 = 6.0;
const PHASE_FONT_SIZE: f32 = 11.0;
const DIVIDER_DROP: f32 = 43.0;
const FOOTER_DROP: f32 = 8.0;
const FOOTER_FONT_SIZE: f32 = 9.0;
const FOOTER_STAR_GAP: f32 = 4.0;

/// Everything the header and footer show, derived once from the record.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderData {
    pub date: Option<DisplayDate>,
    /// The full `moon_phase_sign` string and the phase parsed from it.
    pub moon: Option<(MoonPhase, String)>,
    pub tagline: String,
    pub divider_width: WidthPolicy,
    pub theme: Theme,
}

impl HeaderData {
    pub fn new(record: &PlannerRecord, config: &PlannerConfig) -> Self {
        Self {
            date: present(&record.date).map(parse_display_date),
            moon: present(&record.moon_phase_sign)
                .map(|label| (MoonPhase::from_phase_sign(label), label.to_string())),
            tagline: config.footer_tagline.clone(),
            divider_width: config
                .divider_width
                .map_or(WidthPolicy::Percent(100.0), WidthPolicy::Absolute),
            theme: config.theme.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Emblem {
    pub key: ResourceKey,
    pub data: SharedData,
}

/// Binary resources used by the header, loaded before rendering starts.
#[derive(Debug, Clone, Default)]
pub struct HeaderAssets {
    pub emblem: Option<Emblem>,
}

impl HeaderAssets {
    /// Loads the emblem image. A missing file is skipped silently; an unreadable one with a warning.
    pub fn load(emblem_path: &Path) -> Self {
        if !emblem_path.exists() {
            log::debug!("No emblem at {}; header drawn without it", emblem_path.display());
            return Self::default();
        }
        match std::fs::read(emblem_path) {
            Ok(bytes) => Self {
                emblem: Some(Emblem {
                    key: ResourceKey::from_path(emblem_path),
                    data: SharedData::new(bytes),
                }),
            },
            Err(e) => {
                log::warn!("Skipping emblem {}: {}", emblem_path.display(), e);
                Self::default()
            }
        }
    }
}

/// Draws the page banner: emblem, date, weekday, moon phase and the ornamental divider.
pub fn draw_header(
    canvas: &mut dyn Canvas,
    geometry: &PageGeometry,
    header: &HeaderData,
    assets: &HeaderAssets,
) {
    let left = geometry.content_left();
    let right = geometry.content_right();
    let y = geometry.content_top() + BASELINE_ABOVE_TOP;
    let theme = &header.theme;

    if let Some(emblem) = &assets.emblem {
        let rect = Rect::new(left, y + DATE_FONT_SIZE - EMBLEM_SIZE, EMBLEM_SIZE, EMBLEM_SIZE);
        if let Err(e) = canvas.draw_image(&emblem.key, &emblem.data, rect) {
            log::warn!("Skipping emblem {}: {}", emblem.key, e);
        }
    }

    canvas.set_fill_color(&theme.text);
    if let Some(date) = &header.date {
        canvas.draw_string(
            left + EMBLEM_SIZE + EMBLEM_GAP,
            y,
            &date.formatted,
            StandardFont::HelveticaBold,
            DATE_FONT_SIZE,
        );
        if let Some(weekday) = date.weekday {
            canvas.draw_right_string(right, y, weekday, StandardFont::HelveticaBold, DATE_FONT_SIZE);
        }
    }

    if let Some((phase, label)) = &header.moon {
        let font = StandardFont::HelveticaOblique;
        let label_width = font.string_width(label, PHASE_FONT_SIZE);
        let start = geometry.center_x() - (MOON_SIZE + MOON_GAP + label_width) / 2.0;
        let line_y = y - MOON_LINE_DROP;
        phase.draw(canvas, start, line_y, MOON_SIZE, &theme.text);
        canvas.set_fill_color(&theme.text);
        canvas.draw_string(start + MOON_SIZE + MOON_GAP, line_y, label, font, PHASE_FONT_SIZE);
    }

    let divider = OrnamentalDivider {
        width: header.divider_width,
        star: StarStyle {
            size: 16.0,
            color: theme.ornament.clone(),
        },
        ..Default::default()
    };
    divider.draw_at(canvas, left, y - DIVIDER_DROP, geometry.content_width());
}

/// Draws the centred tagline between two small stars below the bottom margin.
pub fn draw_footer(canvas: &mut dyn Canvas, geometry: &PageGeometry, header: &HeaderData) {
    if header.tagline.trim().is_empty() {
        return;
    }
    let font = StandardFont::HelveticaOblique;
    let y = geometry.margins.bottom - FOOTER_DROP;
    let text_width = font.string_width(&header.tagline, FOOTER_FONT_SIZE);
    let text_x = geometry.center_x() - text_width / 2.0;
    let glyph = star_width(FOOTER_FONT_SIZE);
    let star_y = y + FOOTER_FONT_SIZE * 0.35;

    canvas.save_state();
    canvas.set_fill_color(&header.theme.footer);
    canvas.draw_centred_string(geometry.center_x(), y, &header.tagline, font, FOOTER_FONT_SIZE);
    draw_star(
        canvas,
        text_x - FOOTER_STAR_GAP - glyph / 2.0,
        star_y,
        FOOTER_FONT_SIZE,
        PaintMode::Fill,
    );
    draw_star(
        canvas,
        text_x + text_width + FOOTER_STAR_GAP + glyph / 2.0,
        star_y,
        FOOTER_FONT_SIZE,
        PaintMode::Fill,
    );
    canvas.restore_state();
}

#[cfg(test)]
mod tests {
    use super::*;
    use astroplan_render_core::{DrawCommand, RecordingRenderer};
    use astroplan_types::{Margins, Size};

    fn letter() -> PageGeometry {
        PageGeometry::new(Size::new(612.0, 792.0), Margins::all(43.2), 32.0)
    }

    fn record(date: &str, moon: &str) -> PlannerRecord {
        PlannerRecord {
            date: Some(date.to_string()),
            moon_phase_sign: Some(moon.to_string()),
            ..Default::default()
        }
    }

    fn texts(commands: &[DrawCommand]) -> Vec<(String, f32, f32)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, y, .. } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn date_and_weekday_share_the_banner_baseline() {
        let header = HeaderData::new(
            &record("2024-03-05 (Tue)", "Waxing Crescent in Aries"),
            &PlannerConfig::default(),
        );
        let mut canvas = RecordingRenderer::new();
        draw_header(&mut canvas, &letter(), &header, &HeaderAssets::default());

        let texts = texts(canvas.commands());
        let (date, weekday) = (&texts[0], &texts[1]);
        assert_eq!(date.0, "March 05, 2024");
        assert!((date.1 - (43.2 + 47.0)).abs() < 0.01);
        assert!((date.2 - 758.8).abs() < 0.01);
        assert_eq!(weekday.0, "Tuesday");
        let right = weekday.1 + StandardFont::HelveticaBold.string_width("Tuesday", 12.0);
        assert!((right - 568.8).abs() < 0.01);
        assert!((weekday.2 - date.2).abs() < 0.01);
    }

    #[test]
    fn moon_label_is_shown_in_full_below_the_date() {
        let header = HeaderData::new(
            &record("2024-03-05", "Waxing Crescent in Aries"),
            &PlannerConfig::default(),
        );
        let mut canvas = RecordingRenderer::new();
        draw_header(&mut canvas, &letter(), &header, &HeaderAssets::default());

        let label = texts(canvas.commands())
            .into_iter()
            .find(|(text, ..)| text == "Waxing Crescent in Aries")
            .unwrap();
        assert!((label.2 - (758.8 - 32.0)).abs() < 0.01);
    }

    #[test]
    fn absent_fields_draw_only_the_divider() {
        let header = HeaderData::new(&PlannerRecord::default(), &PlannerConfig::default());
        let mut canvas = RecordingRenderer::new();
        draw_header(&mut canvas, &letter(), &header, &HeaderAssets::default());

        assert!(texts(canvas.commands()).is_empty());
        let lines: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, .. } => Some(from.y),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 1);
        assert!((lines[0] - (758.8 - 43.0)).abs() < 0.01);
    }

    #[test]
    fn emblem_is_placed_top_aligned_with_the_date() {
        let assets = HeaderAssets {
            emblem: Some(Emblem {
                key: ResourceKey::new("emblem"),
                data: SharedData::new(vec![0u8; 4]),
            }),
        };
        let header = HeaderData::new(&PlannerRecord::default(), &PlannerConfig::default());
        let mut canvas = RecordingRenderer::new();
        draw_header(&mut canvas, &letter(), &header, &assets);

        let rect = canvas
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Image { rect, .. } => Some(*rect),
                _ => None,
            })
            .unwrap();
        assert!((rect.x - 43.2).abs() < 0.01);
        assert!((rect.top() - (758.8 + 12.0)).abs() < 0.01);
    }

    #[test]
    fn missing_emblem_file_loads_nothing() {
        let assets = HeaderAssets::load(Path::new("no/such/emblem.png"));
        assert!(assets.emblem.is_none());
    }

    #[test]
    fn footer_tagline_sits_below_the_bottom_margin() {
        let header = HeaderData::new(&PlannerRecord::default(), &PlannerConfig::default());
        let mut canvas = RecordingRenderer::new();
        draw_footer(&mut canvas, &letter(), &header);

        let texts = texts(canvas.commands());
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].0, "As above, so below");
        assert!((texts[0].2 - (43.2 - 8.0)).abs() < 0.01);
    }

    #[test]
    fn footer_tagline_is_centred_on_the_page() {
        let header = HeaderData::new(&PlannerRecord::default(), &PlannerConfig::default());
        let mut canvas = RecordingRenderer::new();
        draw_footer(&mut canvas, &letter(), &header);

        let (text, x, _) = texts(canvas.commands()).remove(0);
        let width = StandardFont::HelveticaOblique.string_width(&text, FOOTER_FONT_SIZE);
        assert!((x + width / 2.0 - 306.0).abs() < 0.01);
    }

    #[test]
    fn configured_divider_width_is_absolute_and_centred() {
        let config = PlannerConfig {
            divider_width: Some(200.0),
            ..Default::default()
        };
        let header = HeaderData::new(&PlannerRecord::default(), &config);
        assert_eq!(header.divider_width, WidthPolicy::Absolute(200.0));

        let mut canvas = RecordingRenderer::new();
        draw_header(&mut canvas, &letter(), &header, &HeaderAssets::default());
        let (from, to) = canvas
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Line { from, to } => Some((*from, *to)),
                _ => None,
            })
            .unwrap();
        let inset = star_width(16.0) + 6.0;
        assert!((to.x - from.x - (200.0 - 2.0 * inset)).abs() < 0.01);
        assert!(((from.x + to.x) / 2.0 - 306.0).abs() < 0.01);
    }
}
