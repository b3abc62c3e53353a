use crate::config::Theme;
use astroplan_layout::{Alignment, ParagraphStyle, StarStyle};

/// Paragraph styles shared by every page renderer.
#[derive(Debug, Clone)]
pub struct PlannerStyles {
    /// Page titles, centred between two stars.
    pub h1: ParagraphStyle,
    /// Bold group labels such as "Transit Summary".
    pub label: ParagraphStyle,
    pub body: ParagraphStyle,
    pub title_star: StarStyle,
}

impl PlannerStyles {
    pub fn new(theme: &Theme) -> Self {
        Self {
            h1: ParagraphStyle {
                font_size: 13.0,
                leading: 15.0,
                space_before: 6.0,
                space_after: 4.0,
                alignment: Alignment::Center,
                color: theme.text.clone(),
            },
            label: ParagraphStyle {
                font_size: 10.0,
                leading: 13.0,
                space_after: 2.0,
                color: theme.text.clone(),
                ..Default::default()
            },
            body: ParagraphStyle {
                font_size: 10.0,
                leading: 13.0,
                color: theme.text.clone(),
                ..Default::default()
            },
            title_star: StarStyle {
                size: 13.0,
                color: theme.ornament.clone(),
            },
        }
    }
}

impl Default for PlannerStyles {
    fn default() -> Self {
        Self::new(&Theme::default())
    }
}
