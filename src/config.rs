//! Geometry, theme and behavior settings for a planner run.
//!
//! Every field has a default matching the stock planner, so a config file only
//! needs to name what it overrides.

use crate::error::PipelineError;
use astroplan_types::{Color, Margins, Size};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn size(&self) -> Size {
        let (width, height) = self.dimensions_pt();
        Size::new(width, height)
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

/// What to do with a list group that contains a malformed element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListPolicy {
    /// Hide the whole group, label included.
    #[default]
    SuppressGroup,
    /// Drop the malformed elements and render the rest.
    SkipMalformed,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub text: Color,
    pub ornament: Color,
    pub footer: Color,
    pub journal: Color,
    pub rule: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::BLACK,
            ornament: Color::gray(0xB0),
            footer: Color::gray(0x88),
            journal: Color::gray(0xCC),
            rule: Color::gray(0xB0),
        }
    }
}

/// Page-4 writing area: the in-flow journal lines and the ruled page background.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub lines: usize,
    pub spacing: f32,
    pub background_top: f32,
    pub background_bottom: f32,
    pub background_pitch: f32,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            lines: 16,
            spacing: 18.0,
            background_top: 220.0,
            background_bottom: 18.0,
            background_pitch: 18.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub page_size: PageSize,
    /// Uniform page margin in points.
    pub margin: f32,
    /// Height of the band below the top margin reserved for the header.
    pub header_height: f32,
    pub column_gutter: f32,
    pub emblem_path: PathBuf,
    pub footer_tagline: String,
    /// Width of the header divider in points; it spans the content width when unset.
    pub divider_width: Option<f32>,
    pub theme: Theme,
    pub journal: JournalConfig,
    pub list_policy: ListPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            margin: 43.2,
            header_height: 32.0,
            column_gutter: 18.0,
            emblem_path: PathBuf::from("assets/CrystalBall.png"),
            footer_tagline: "As above, so below".to_string(),
            divider_width: None,
            theme: Theme::default(),
            journal: JournalConfig::default(),
            list_policy: ListPolicy::default(),
        }
    }
}

impl PlannerConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        serde_json::from_str(json).map_err(|e| PipelineError::Config(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        log::debug!("Loaded planner config from {}", path.display());
        Self::from_json(&text)
    }

    pub fn margins(&self) -> Margins {
        Margins::all(self.margin)
    }
}
