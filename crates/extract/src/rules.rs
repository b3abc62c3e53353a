use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// A partial record produced by one rule.
pub type Fragment = Map<String, Value>;

/// One independent extraction over the whole input text.
///
/// Rules never see each other's output; `extract` merges their fragments in rule order.
pub trait ExtractionRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// The fragment for this rule, or `None` when its section is absent.
    fn apply(&self, text: &str) -> Option<Fragment>;
}

/// Section headers that terminate the free-form chore list.
const SECTION_HEADERS: [&str; 6] = [
    "Date:",
    "Ritual Kit:",
    "Upcoming Events (You-Only):",
    "Housewitch Chore of the Day:",
    "Kitchen Witch Tip:",
    "Creative Flow of the Day:",
];

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Date:\s*(.+)\nMoon Phase & Sign:\s*(.+)\nDay Planet:\s*(.+)")
        .expect("BUG: invalid HEADER_RE regex literal")
});

static RITUAL_KIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Ritual Kit:\s*Candle:\s*(.+)\nOil:\s*(.+)\nCrystal:\s*(.+)\nHerb:\s*(.+)\nMini Ritual:\s*(.+)",
    )
    .expect("BUG: invalid RITUAL_KIT_RE regex literal")
});

static UPCOMING_EVENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Upcoming Events \(You-Only\):\s*Transit Notes:\s*(.+)\nReflection:\s*(.+)")
        .expect("BUG: invalid UPCOMING_EVENTS_RE regex literal")
});

static CHORE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.+?)\]\s*(.+)").expect("BUG: invalid CHORE_LINE_RE regex literal")
});

static KITCHEN_WITCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Kitchen Witch Tip:\s*Idea:\s*(.+)\nIngredient:\s*(.+)\nTreat:\s*(.+)\nNotes:\s*(.*)")
        .expect("BUG: invalid KITCHEN_WITCH_RE regex literal")
});

static CREATIVE_FLOW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Creative Flow of the Day:\s*Project:\s*(.+)\nMode:\s*(.+)\nTime Box:\s*(.+)\nBonus:\s*(.+)")
        .expect("BUG: invalid CREATIVE_FLOW_RE regex literal")
});

/// Maps the capture groups of `re` (in order) onto `fields`, trimming each value.
fn capture_fields(re: &Regex, fields: &[&str], text: &str) -> Option<Fragment> {
    let caps = re.captures(text)?;
    let mut map = Map::new();
    for (i, field) in fields.iter().enumerate() {
        let value = caps.get(i + 1).map_or("", |m| m.as_str().trim());
        map.insert((*field).to_string(), Value::String(value.to_string()));
    }
    Some(map)
}

/// The header block: `date`, `moon_phase_sign` and `day_planet` at the top level.
pub struct HeaderRule;

impl ExtractionRule for HeaderRule {
    fn name(&self) -> &'static str {
        "header"
    }

    fn apply(&self, text: &str) -> Option<Fragment> {
        capture_fields(&HEADER_RE, &["date", "moon_phase_sign", "day_planet"], text)
    }
}

/// A labeled block whose fields are nested under a single output key.
pub struct LabeledBlockRule {
    key: &'static str,
    pattern: &'static LazyLock<Regex>,
    fields: &'static [&'static str],
}

impl LabeledBlockRule {
    pub fn ritual_kit() -> Self {
        Self {
            key: "ritual_kit",
            pattern: &RITUAL_KIT_RE,
            fields: &["candle", "oil", "crystal", "herb", "mini_ritual"],
        }
    }

    pub fn upcoming_events() -> Self {
        Self {
            key: "upcoming_events",
            pattern: &UPCOMING_EVENTS_RE,
            fields: &["transit_notes", "reflection"],
        }
    }

    pub fn kitchen_witch() -> Self {
        Self {
            key: "kitchen_witch",
            pattern: &KITCHEN_WITCH_RE,
            fields: &["idea", "ingredient", "treat", "notes"],
        }
    }

    pub fn creative_flow() -> Self {
        Self {
            key: "creative_flow",
            pattern: &CREATIVE_FLOW_RE,
            fields: &["project", "mode", "time_box", "bonus"],
        }
    }
}

impl ExtractionRule for LabeledBlockRule {
    fn name(&self) -> &'static str {
        self.key
    }

    fn apply(&self, text: &str) -> Option<Fragment> {
        let block = capture_fields(self.pattern, self.fields, text)?;
        let mut fragment = Map::new();
        fragment.insert(self.key.to_string(), Value::Object(block));
        Some(fragment)
    }
}

/// `[tag] task` lines following the chore header, up to the next known section header.
pub struct HousewitchChoreRule;

impl HousewitchChoreRule {
    const HEADER: &'static str = "Housewitch Chore of the Day:";

    fn section(text: &str) -> Option<&str> {
        let start = text.find(Self::HEADER)? + Self::HEADER.len();
        let rest = &text[start..];
        let end = SECTION_HEADERS
            .iter()
            .filter_map(|header| rest.find(header))
            .min()
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

impl ExtractionRule for HousewitchChoreRule {
    fn name(&self) -> &'static str {
        "housewitch_chore"
    }

    fn apply(&self, text: &str) -> Option<Fragment> {
        let section = Self::section(text)?;
        let chores: Vec<Value> = section
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('['))
            .filter_map(|line| CHORE_LINE_RE.captures(line))
            .map(|caps| {
                let mut chore = Map::new();
                chore.insert("tag".into(), Value::String(caps[1].trim().to_string()));
                chore.insert("task".into(), Value::String(caps[2].trim().to_string()));
                Value::Object(chore)
            })
            .collect();

        let mut fragment = Map::new();
        fragment.insert(self.name().to_string(), Value::Array(chores));
        Some(fragment)
    }
}

/// The rules applied by `extract`, in output-key order.
pub fn default_rules() -> Vec<Box<dyn ExtractionRule>> {
    vec![
        Box::new(HeaderRule),
        Box::new(LabeledBlockRule::ritual_kit()),
        Box::new(LabeledBlockRule::upcoming_events()),
        Box::new(HousewitchChoreRule),
        Box::new(LabeledBlockRule::kitchen_witch()),
        Box::new(LabeledBlockRule::creative_flow()),
    ]
}
