mod common;

use astroplan::header::{HeaderAssets, HeaderData, draw_footer, draw_header};
use astroplan::{ListPolicy, PlannerConfig, PlannerRecord, page_geometry};
use astroplan_render_core::{DrawCommand, RecordedPage, RecordingRenderer};
use common::fixtures::*;
use common::{TestResult, record_pages, recorded_pages};
use serde_json::json;

fn vertical_lines(page: &RecordedPage) -> Vec<(f32, f32, f32)> {
    page.commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { from, to } if (from.x - to.x).abs() < 0.01 => {
                Some((from.x, from.y, to.y))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_header_and_footer_commands_are_identical_on_every_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let data = full_record();
    let pages = recorded_pages(data.clone())?;
    assert_eq!(pages.len(), 4);

    let config = PlannerConfig::default();
    let record = PlannerRecord::from_value(data)?;
    let header = HeaderData::new(&record, &config);
    let assets = HeaderAssets::load(&config.emblem_path);
    let mut canvas = RecordingRenderer::new();
    draw_header(&mut canvas, &page_geometry(&config), &header, &assets);
    draw_footer(&mut canvas, &page_geometry(&config), &header);
    let chrome = canvas.commands().to_vec();

    for (i, page) in pages.iter().enumerate() {
        assert_eq!(
            &page.commands[..chrome.len()],
            chrome.as_slice(),
            "page {} does not start with the shared header and footer",
            i + 1
        );
    }
    Ok(())
}

#[test]
fn test_column_rule_only_on_page_three() -> TestResult {
    let pages = recorded_pages(full_record())?;
    for (i, page) in pages.iter().enumerate() {
        let lines = vertical_lines(page);
        if i == 2 {
            assert_eq!(lines.len(), 1);
            let (x, y0, y1) = lines[0];
            assert!((x - 306.0).abs() < 0.01);
            assert!((y0 - 43.2).abs() < 0.01);
            assert!((y1 - (43.2 + 673.6)).abs() < 0.01);
        } else {
            assert!(lines.is_empty(), "page {} has a vertical rule", i + 1);
        }
    }
    Ok(())
}

#[test]
fn test_kitchen_flows_into_the_right_column() -> TestResult {
    let pages = recorded_pages(full_record())?;
    let kitchen_x = pages[2]
        .commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::Text { text, x, .. } if text == "KITCHEN" => Some(*x),
            _ => None,
        })
        .unwrap();
    assert!(kitchen_x > 306.0);
    Ok(())
}

#[test]
fn test_evening_page_has_ruled_background_and_journal() -> TestResult {
    let pages = recorded_pages(minimal_record())?;
    // Header divider, 11 background rules and 16 journal lines.
    assert_eq!(pages[3].line_count(), 1 + 11 + 16);
    assert_eq!(pages[0].line_count(), 1);
    Ok(())
}

#[test]
fn test_suppress_group_hides_a_list_with_a_malformed_entry() -> TestResult {
    let record = PlannerRecord::from_value(record_with_malformed_transit())?;
    let pages = record_pages(&record, PlannerConfig::default())?;
    assert!(!pages[0].contains_text("Transit Summary"));
    assert!(!pages[0].contains_text("Sun conjunct Mercury"));
    Ok(())
}

#[test]
fn test_skip_malformed_renders_the_rest_of_the_list() -> TestResult {
    let record = PlannerRecord::from_value(record_with_malformed_transit())?;
    let config = PlannerConfig {
        list_policy: ListPolicy::SkipMalformed,
        ..Default::default()
    };
    let pages = record_pages(&record, config)?;
    assert!(pages[0].contains_text("Transit Summary"));
    assert!(pages[0].contains_text("Sun conjunct Mercury"));
    Ok(())
}

#[test]
fn test_a4_config_changes_the_page_size() -> TestResult {
    let record = PlannerRecord::from_value(minimal_record())?;
    let config = PlannerConfig::from_json(r#"{ "page_size": "A4" }"#)?;
    let pages = record_pages(&record, config)?;
    assert_eq!(pages.len(), 4);
    assert!((pages[0].size.width - 595.28).abs() < 0.01);
    Ok(())
}

#[test]
fn test_upcoming_event_without_a_day_has_no_empty_label() -> TestResult {
    let pages = recorded_pages(json!({
        "date": "2024-03-05",
        "horoscope": {
            "upcoming_events": [
                { "when": " ", "text": "New Moon in Pisces" },
                { "when": "Fri", "text": "Full Moon in Virgo" }
            ]
        }
    }))?;
    assert!(pages[0].contains_text("New Moon in Pisces"));
    assert!(pages[0].contains_text("Fri:"));
    assert!(!pages[0].texts().any(|t| t.trim() == ":"));
    Ok(())
}
