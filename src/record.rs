//! Typed view of a planner record.
//!
//! Every field is optional. List elements are wrapped in [`Entry`] so that a
//! record which skipped schema validation can still be deserialized and the
//! page renderers can decide what to do with elements of the wrong shape.

use serde::Deserialize;
use serde_json::Value;

/// One element of a list-valued field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Entry<T> {
    Valid(T),
    Malformed(Value),
}

impl<T> Entry<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Entry::Valid(value) => Some(value),
            Entry::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Entry::Malformed(_))
    }
}

pub type ListItem = Entry<String>;

/// `Some(text)` only when `value` holds something other than whitespace.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerRecord {
    pub date: Option<String>,
    pub moon_phase_sign: Option<String>,
    pub day_planet: Option<String>,
    pub horoscope: Option<Horoscope>,
    pub rituals: Option<Rituals>,
    pub chores: Option<Chores>,
    pub kitchen: Option<Kitchen>,
    pub evening_reflection: Option<EveningReflection>,
}

impl PlannerRecord {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Replaces the date shown in the header (and used for the default output name).
    pub fn override_date(&mut self, date: impl Into<String>) {
        self.date = Some(date.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Horoscope {
    pub transit_summary: Vec<ListItem>,
    pub upcoming_events: Vec<Entry<UpcomingEvent>>,
    pub focus_of_day: Option<FocusOfDay>,
    pub task_list: Vec<ListItem>,
    pub creative_flow: Option<CreativeFlow>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpcomingEvent {
    pub when: Option<String>,
    pub text: Option<String>,
}

impl UpcomingEvent {
    pub fn is_empty(&self) -> bool {
        present(&self.when).is_none() && present(&self.text).is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FocusOfDay {
    pub dos: Vec<ListItem>,
    pub donts: Vec<ListItem>,
    pub opportunities: Vec<ListItem>,
    pub warnings: Vec<ListItem>,
}

impl FocusOfDay {
    /// The four sub-groups with their display labels, in page order.
    pub fn groups(&self) -> [(&'static str, &[ListItem]); 4] {
        [
            ("Do's", &self.dos),
            ("Don'ts", &self.donts),
            ("Opportunities", &self.opportunities),
            ("Warnings", &self.warnings),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreativeFlow {
    pub project: Option<String>,
    pub mode: Option<String>,
    pub time_box: Option<String>,
    pub bonus: Option<String>,
}

impl CreativeFlow {
    pub fn fields(&self) -> [(&'static str, &Option<String>); 4] {
        [
            ("Project", &self.project),
            ("Mode", &self.mode),
            ("Time Box", &self.time_box),
            ("Bonus", &self.bonus),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| present(value).is_none())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rituals {
    pub checklist: Option<Checklist>,
    pub casting: Option<TimingBlock>,
    pub manifesting: Option<TimingBlock>,
    pub releasing: Option<TimingBlock>,
    pub notes: Option<String>,
}

impl Rituals {
    pub fn timing_blocks(&self) -> [(&'static str, Option<&TimingBlock>); 3] {
        [
            ("Casting", self.casting.as_ref()),
            ("Manifesting", self.manifesting.as_ref()),
            ("Releasing", self.releasing.as_ref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Checklist {
    pub candle: Option<String>,
    pub oil: Option<String>,
    pub crystal: Option<String>,
    pub herb_incense: Option<String>,
    pub extras: Vec<ListItem>,
}

impl Checklist {
    pub fn fields(&self) -> [(&'static str, &Option<String>); 4] {
        [
            ("Candle", &self.candle),
            ("Oil", &self.oil),
            ("Crystal", &self.crystal),
            ("Herb/Incense", &self.herb_incense),
        ]
    }
}

/// A ritual time window with its intent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingBlock {
    pub window_start: Option<String>,
    pub window_end: Option<String>,
    pub intent: Option<String>,
    pub why: Option<String>,
}

impl TimingBlock {
    pub fn is_empty(&self) -> bool {
        [&self.window_start, &self.window_end, &self.intent, &self.why]
            .into_iter()
            .all(|value| present(value).is_none())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Chores {
    pub energy_of_day: Option<String>,
    pub to_do: Option<ToDo>,
    pub laundry_focus: Option<String>,
    pub avoid: Vec<ListItem>,
    pub shopping_check: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToDo {
    pub indoor_large: Option<String>,
    pub indoor_small: Option<String>,
    pub outdoor: Option<String>,
    pub plants: Option<String>,
}

impl ToDo {
    pub fn categories(&self) -> [(&'static str, &Option<String>); 4] {
        [
            ("Big Chores", &self.indoor_large),
            ("Small Chores", &self.indoor_small),
            ("Outdoor Chores", &self.outdoor),
            ("Plants Chores", &self.plants),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Kitchen {
    pub tea_of_day: Option<String>,
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
    pub snack_prep: Option<String>,
    pub notes: Option<String>,
}

impl Kitchen {
    pub fn fields(&self) -> [(&'static str, &Option<String>); 6] {
        [
            ("Tea of the Day", &self.tea_of_day),
            ("Breakfast", &self.breakfast),
            ("Lunch", &self.lunch),
            ("Dinner", &self.dinner),
            ("Snack/Prep", &self.snack_prep),
            ("Notes", &self.notes),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EveningReflection {
    pub prompt1: Option<String>,
    pub prompt2: Option<String>,
}

impl EveningReflection {
    pub fn prompts(&self) -> [(&'static str, &Option<String>); 2] {
        [("Prompt 1", &self.prompt1), ("Prompt 2", &self.prompt2)]
    }
}
