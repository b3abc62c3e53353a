//! Page content renderers.
//!
//! Each renderer appends the blocks for one logical page to the shared story,
//! and only for data that is present in the record.

mod chores_kitchen;
mod evening;
mod horoscope;
mod rituals;

pub use chores_kitchen::render_chores_kitchen;
pub use evening::render_evening;
pub use horoscope::render_horoscope;
pub use rituals::render_rituals;

use crate::config::{ListPolicy, PlannerConfig};
use crate::record::{Entry, PlannerRecord};
use crate::styles::PlannerStyles;
use astroplan_layout::{Flowable, Heading, Marker, Paragraph, ParagraphBuilder, Spacer, StoryItem};

/// Signature shared by the four page renderers.
pub type PageRenderer = fn(&PlannerRecord, &mut StoryWriter<'_>);

/// The renderers in page order.
pub const PAGE_RENDERERS: [PageRenderer; 4] = [
    render_horoscope,
    render_rituals,
    render_chores_kitchen,
    render_evening,
];

/// Appends styled blocks to a story.
pub struct StoryWriter<'a> {
    story: Vec<StoryItem>,
    styles: PlannerStyles,
    config: &'a PlannerConfig,
}

impl<'a> StoryWriter<'a> {
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self {
            story: Vec::new(),
            styles: PlannerStyles::new(&config.theme),
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.story.len()
    }

    pub fn is_empty(&self) -> bool {
        self.story.is_empty()
    }

    pub fn push(&mut self, flowable: impl Flowable + 'static) {
        self.story.push(StoryItem::flow(flowable));
    }

    pub fn title(&mut self, text: &str) {
        let heading = Heading::new(text, self.styles.h1.clone(), self.styles.title_star.clone());
        self.push(heading);
    }

    /// A bold group label such as "Transit Summary".
    pub fn label(&mut self, text: &str) {
        let paragraph = Paragraph::builder(self.styles.label.clone()).bold(text).build();
        self.push(paragraph);
    }

    pub fn body(&mut self, text: &str) {
        self.push(Paragraph::plain(text, self.styles.body.clone()));
    }

    /// `label:` in bold followed by the value.
    pub fn field(&mut self, label: &str, value: &str) {
        let paragraph = Paragraph::builder(self.styles.body.clone())
            .bold(format!("{}:", label))
            .text(value)
            .build();
        self.push(paragraph);
    }

    pub fn bullet(&mut self, text: &str) {
        let paragraph = Paragraph::builder(self.styles.body.clone())
            .marker(Marker::Bullet)
            .text(text)
            .build();
        self.push(paragraph);
    }

    pub fn checkbox(&mut self, text: &str) {
        let paragraph = Paragraph::builder(self.styles.body.clone())
            .marker(Marker::Checkbox)
            .text(text)
            .build();
        self.push(paragraph);
    }

    pub fn checkbox_field(&mut self, label: &str, value: &str) {
        let paragraph = Paragraph::builder(self.styles.body.clone())
            .marker(Marker::Checkbox)
            .bold(format!("{}:", label))
            .text(value)
            .build();
        self.push(paragraph);
    }

    /// A label paragraph built from arbitrary runs.
    pub fn label_with(&mut self, build: impl FnOnce(ParagraphBuilder) -> ParagraphBuilder) {
        let paragraph = build(Paragraph::builder(self.styles.label.clone())).build();
        self.push(paragraph);
    }

    pub fn spacer(&mut self, height: f32) {
        self.push(Spacer::new(height));
    }

    pub fn frame_break(&mut self) {
        self.story.push(StoryItem::FrameBreak);
    }

    pub fn page_break(&mut self) {
        self.story.push(StoryItem::PageBreak);
    }

    /// Elements of `entries` to render under the configured list policy.
    ///
    /// Blank strings never count. An empty result means the group (label
    /// included) is left out.
    pub fn list_items<'e>(&self, group: &str, entries: &'e [Entry<String>]) -> Vec<&'e str> {
        guarded(group, entries, self.config.list_policy, |s: &String| !s.trim().is_empty())
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    pub fn into_story(self) -> Vec<StoryItem> {
        self.story
    }
}

/// Applies the list guard: drops elements failing `keep`, then resolves
/// malformed elements according to `policy`.
pub fn guarded<'e, T>(
    group: &str,
    entries: &'e [Entry<T>],
    policy: ListPolicy,
    keep: impl Fn(&T) -> bool,
) -> Vec<&'e T> {
    let malformed = entries.iter().filter(|e| e.is_malformed()).count();
    if malformed > 0 {
        match policy {
            ListPolicy::SuppressGroup => {
                log::debug!("Suppressing '{}': {} malformed element(s)", group, malformed);
                return Vec::new();
            }
            ListPolicy::SkipMalformed => {
                log::debug!("Skipping {} malformed element(s) in '{}'", malformed, group);
            }
        }
    }
    entries
        .iter()
        .filter_map(Entry::valid)
        .filter(|value| keep(value))
        .collect()
}
