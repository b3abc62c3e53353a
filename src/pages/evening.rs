use super::StoryWriter;
use crate::record::{PlannerRecord, present};
use astroplan_layout::JournalLines;

/// Height of each blank slot reserved under an unanswered prompt.
const BLANK_SLOT: f32 = 12.0;

/// Page 4: the two reflection prompts followed by ruled journal lines.
pub fn render_evening(record: &PlannerRecord, out: &mut StoryWriter<'_>) {
    out.title("EVENING REFLECTION");

    let reflection = record.evening_reflection.clone().unwrap_or_default();
    for (label, value) in reflection.prompts() {
        match present(value) {
            Some(answer) => out.field(label, answer),
            None => {
                out.field(label, "");
                out.spacer(BLANK_SLOT);
                out.spacer(BLANK_SLOT);
            }
        }
    }

    let journal = &out.config().journal;
    let mut lines = JournalLines::new(journal.lines, journal.spacing);
    lines.color = out.config().theme.journal.clone();

    out.spacer(10.0);
    out.push(lines);
    out.spacer(8.0);
}
