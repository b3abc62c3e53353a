use super::{StoryWriter, guarded};
use crate::record::{PlannerRecord, UpcomingEvent, present};

/// Page 1: planet of the day, transits, upcoming events, focus, tasks and creative flow.
pub fn render_horoscope(record: &PlannerRecord, out: &mut StoryWriter<'_>) {
    out.title("HOROSCOPE");

    if let Some(planet) = present(&record.day_planet) {
        out.field("Planet of the Day", planet);
    }

    if let Some(horoscope) = &record.horoscope {
        let transits = out.list_items("transit_summary", &horoscope.transit_summary);
        if !transits.is_empty() {
            out.label("Transit Summary");
            for item in transits {
                out.bullet(item);
            }
        }

        let events = guarded(
            "upcoming_events",
            &horoscope.upcoming_events,
            out.config().list_policy,
            |event: &UpcomingEvent| !event.is_empty(),
        );
        if !events.is_empty() {
            out.label("Upcoming Events");
            for event in events {
                let when = event.when.as_deref().unwrap_or_default().trim();
                let text = event.text.as_deref().unwrap_or_default().trim();
                if when.is_empty() {
                    out.body(text);
                } else {
                    out.field(when, text);
                }
            }
        }

        if let Some(focus) = &horoscope.focus_of_day {
            let groups: Vec<(&str, Vec<&str>)> = focus
                .groups()
                .into_iter()
                .map(|(label, entries)| (label, out.list_items(label, entries)))
                .filter(|(_, items)| !items.is_empty())
                .collect();
            if !groups.is_empty() {
                out.label("Focus of the Day");
                for (label, items) in groups {
                    out.label(&format!("{}:", label));
                    for item in items {
                        out.bullet(item);
                    }
                }
            }
        }

        let tasks = out.list_items("task_list", &horoscope.task_list);
        if !tasks.is_empty() {
            out.label("Practical Task List");
            for task in tasks {
                out.checkbox(task);
            }
        }

        if let Some(flow) = horoscope.creative_flow.as_ref().filter(|f| !f.is_empty()) {
            out.label("Creative Flow of the Day");
            for (label, value) in flow.fields() {
                if let Some(value) = present(value) {
                    out.field(label, value);
                }
            }
        }
    }

    out.spacer(8.0);
}
