use super::StoryWriter;
use crate::record::{PlannerRecord, present};

/// Page 2: checklist, the three timing windows and notes.
pub fn render_rituals(record: &PlannerRecord, out: &mut StoryWriter<'_>) {
    out.title("RITUAL KIT");

    let Some(rituals) = &record.rituals else {
        out.spacer(8.0);
        return;
    };

    if let Some(checklist) = &rituals.checklist {
        let fields: Vec<(&str, &str)> = checklist
            .fields()
            .into_iter()
            .filter_map(|(label, value)| present(value).map(|v| (label, v)))
            .collect();
        let extras = out.list_items("extras", &checklist.extras);

        if !fields.is_empty() || !extras.is_empty() {
            out.label("Checklist");
            for (label, value) in fields {
                out.checkbox_field(label, value);
            }
            for extra in extras {
                out.checkbox_field("Extra", extra);
            }
            out.spacer(6.0);
        }
    }

    for (name, block) in rituals.timing_blocks() {
        let Some(block) = block.filter(|b| !b.is_empty()) else {
            continue;
        };
        let window = format!(
            "({}\u{2013}{})",
            block.window_start.as_deref().unwrap_or_default().trim(),
            block.window_end.as_deref().unwrap_or_default().trim()
        );
        out.label_with(|p| p.bold(name).italic(window));
        out.field("Intent", present(&block.intent).unwrap_or_default());
        if let Some(why) = present(&block.why) {
            out.field("Why", why);
        }
        out.spacer(2.0);
    }

    if let Some(notes) = present(&rituals.notes) {
        out.label("Notes/Adaptations:");
        out.body(notes);
    }

    out.spacer(8.0);
}
