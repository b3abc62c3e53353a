//! Best-effort conversion of the labeled daily check-in text into a JSON record.
//!
//! Each section of the template is handled by an independent [`ExtractionRule`];
//! sections that do not match are simply left out of the result.

mod rules;

pub use rules::{
    ExtractionRule, Fragment, HeaderRule, HousewitchChoreRule, LabeledBlockRule, default_rules,
};

use serde_json::{Map, Value};

/// Runs `rules` over `text` and merges their fragments in order.
pub fn extract_with(text: &str, rules: &[Box<dyn ExtractionRule>]) -> Map<String, Value> {
    let mut record = Map::new();
    for rule in rules {
        match rule.apply(text) {
            Some(fragment) => {
                log::debug!("Rule '{}' matched", rule.name());
                record.extend(fragment);
            }
            None => log::debug!("Rule '{}' found no section", rule.name()),
        }
    }
    record
}

/// Extracts a (possibly partial) record using the default rule set.
pub fn extract(text: &str) -> Map<String, Value> {
    extract_with(text, &default_rules())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FULL: &str = "Date: 2024-03-05 (Tue)
Moon Phase & Sign:   Waxing Crescent in Aries
Day Planet: Mars
Ritual Kit:
Candle: Red
Oil: Cinnamon
Crystal: Carnelian
Herb: Basil
Mini Ritual: Light the candle at noon
Upcoming Events (You-Only):
Transit Notes: Venus trine Jupiter
Reflection: Lean into generosity
Housewitch Chore of the Day:
[Kitchen] Scrub the stove
not a chore line
  [Garden]   Water the rosemary
Kitchen Witch Tip:
Idea: Spiced tea
Ingredient: Cardamom
Treat: Honey cake
Notes: Share with a friend
Creative Flow of the Day:
Project: Zine
Mode: Sketch
Time Box: 45 min
Bonus: Add collage
";

    #[test]
    fn header_fields_are_copied_trimmed() {
        let record = extract(FULL);
        assert_eq!(record["date"], "2024-03-05 (Tue)");
        assert_eq!(record["moon_phase_sign"], "Waxing Crescent in Aries");
        assert_eq!(record["day_planet"], "Mars");
    }

    #[test]
    fn keys_follow_rule_order() {
        let record = extract(FULL);
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "date",
                "moon_phase_sign",
                "day_planet",
                "ritual_kit",
                "upcoming_events",
                "housewitch_chore",
                "kitchen_witch",
                "creative_flow"
            ]
        );
    }

    #[test]
    fn chore_list_stops_at_next_header() {
        let record = extract(FULL);
        assert_eq!(
            record["housewitch_chore"],
            json!([
                { "tag": "Kitchen", "task": "Scrub the stove" },
                { "tag": "Garden", "task": "Water the rosemary" }
            ])
        );
    }

    #[test]
    fn chore_list_stops_at_any_known_header() {
        for header in [
            "Creative Flow of the Day:",
            "Ritual Kit:",
            "Upcoming Events (You-Only):",
            "Date:",
        ] {
            let text = format!(
                "Housewitch Chore of the Day:\n[Hall] Dust the shelves\n{header}\n[Studio] Ink the cover\n"
            );
            let record = extract(&text);
            assert_eq!(
                record["housewitch_chore"],
                json!([{ "tag": "Hall", "task": "Dust the shelves" }]),
                "chore list ran past '{header}'"
            );
        }
    }

    #[test]
    fn chore_list_runs_to_end_of_input() {
        let record = extract("Housewitch Chore of the Day:\n[Hall] Dust the shelves\n[Porch] Sweep");
        assert_eq!(
            record["housewitch_chore"],
            json!([
                { "tag": "Hall", "task": "Dust the shelves" },
                { "tag": "Porch", "task": "Sweep" }
            ])
        );
    }

    #[test]
    fn nested_blocks_are_grouped_under_their_key() {
        let record = extract(FULL);
        assert_eq!(record["ritual_kit"]["mini_ritual"], "Light the candle at noon");
        assert_eq!(record["creative_flow"]["time_box"], "45 min");
        assert_eq!(record["kitchen_witch"]["notes"], "Share with a friend");
    }

    #[test]
    fn missing_kitchen_block_leaves_key_absent() {
        let text = "Date: today\nMoon Phase & Sign: Full Moon\nDay Planet: Sun\n";
        let record = extract(text);
        assert!(!record.contains_key("kitchen_witch"));
        assert!(!record.contains_key("housewitch_chore"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn empty_input_yields_empty_record() {
        assert!(extract("").is_empty());
    }
}
