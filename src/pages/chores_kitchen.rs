use super::StoryWriter;
use crate::record::{PlannerRecord, present};

/// Page 3: chores in the left column, kitchen plan in the right.
pub fn render_chores_kitchen(record: &PlannerRecord, out: &mut StoryWriter<'_>) {
    out.title("CHORES");
    if let Some(chores) = &record.chores {
        if let Some(energy) = present(&chores.energy_of_day) {
            out.field("Energy of the Day", energy);
        }
        if let Some(to_do) = &chores.to_do {
            for (label, value) in to_do.categories() {
                if let Some(value) = present(value) {
                    out.label(&format!("{}:", label));
                    out.checkbox(value);
                }
            }
        }
        if let Some(laundry) = present(&chores.laundry_focus) {
            out.field("Laundry Focus", laundry);
        }
        let avoid = out.list_items("avoid", &chores.avoid);
        if !avoid.is_empty() {
            out.label("Chores to Avoid:");
            for item in avoid {
                out.bullet(item);
            }
        }
        if let Some(shopping) = present(&chores.shopping_check) {
            out.field("Shopping Check", shopping);
        }
    }

    out.frame_break();

    out.title("KITCHEN");
    if let Some(kitchen) = &record.kitchen {
        for (label, value) in kitchen.fields() {
            if let Some(value) = present(value) {
                out.field(label, value);
            }
        }
    }
    out.spacer(8.0);
}
