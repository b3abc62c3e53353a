mod common;

use common::fixtures::*;
use common::pdf_assertions::count_images;
use common::{TestResult, generate_pdf};
use serde_json::json;

#[test]
fn test_full_record_renders_four_pages_in_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(full_record())?;
    assert_pdf_page_count!(pdf, 4);
    assert_page_contains_text!(pdf, 1, "HOROSCOPE");
    assert_page_contains_text!(pdf, 2, "RITUAL KIT");
    assert_page_contains_text!(pdf, 3, "CHORES");
    assert_page_contains_text!(pdf, 3, "KITCHEN");
    assert_page_contains_text!(pdf, 4, "EVENING REFLECTION");
    Ok(())
}

#[test]
fn test_header_shows_formatted_date_and_weekday_on_every_page() -> TestResult {
    let pdf = generate_pdf(full_record())?;
    for page in 1..=4 {
        assert_page_contains_text!(pdf, page, "March 05, 2024");
        assert_page_contains_text!(pdf, page, "Tuesday");
        assert_page_contains_text!(pdf, page, "Waxing Crescent in Aries");
        assert_page_contains_text!(pdf, page, "As above, so below");
    }
    Ok(())
}

#[test]
fn test_page_sections_carry_their_content() -> TestResult {
    let pdf = generate_pdf(full_record())?;
    assert_page_contains_text!(pdf, 1, "Planet of the Day:");
    assert_page_contains_text!(pdf, 1, "Mars sextile Venus");
    assert_page_contains_text!(pdf, 1, "Practical Task List");
    assert_page_contains_text!(pdf, 2, "Carnelian");
    assert_page_contains_text!(pdf, 2, "Courage for the week");
    assert_page_contains_text!(pdf, 3, "Deep clean the oven");
    assert_page_contains_text!(pdf, 3, "Lentil soup");
    assert_page_contains_text!(pdf, 4, "Where did I act bravely today?");
    Ok(())
}

#[test]
fn test_empty_focus_group_is_left_out() -> TestResult {
    let pdf = generate_pdf(full_record())?;
    assert_pdf_contains_text!(pdf, "Do's:");
    assert_pdf_not_contains_text!(pdf, "Opportunities:");
    Ok(())
}

#[test]
fn test_minimal_record_renders_titles_without_bodies() -> TestResult {
    let pdf = generate_pdf(minimal_record())?;
    assert_pdf_page_count!(pdf, 4);
    assert_page_contains_text!(pdf, 1, "HOROSCOPE");
    assert_page_contains_text!(pdf, 2, "RITUAL KIT");
    assert_pdf_not_contains_text!(pdf, "Transit Summary");
    assert_pdf_not_contains_text!(pdf, "Checklist");
    assert_pdf_not_contains_text!(pdf, "Tea of the Day");
    // Unanswered prompts still get their labels.
    assert_page_contains_text!(pdf, 4, "Prompt 1:");
    assert_page_contains_text!(pdf, 4, "Prompt 2:");
    Ok(())
}

#[test]
fn test_unparseable_date_is_shown_verbatim() -> TestResult {
    let pdf = generate_pdf(json!({ "date": "The day after tomorrow" }))?;
    assert_pdf_contains_text!(pdf, "The day after tomorrow");
    Ok(())
}

#[test]
fn test_emblem_is_embedded_once() -> TestResult {
    let pdf = generate_pdf(minimal_record())?;
    assert_eq!(count_images(&pdf.doc), 1);
    Ok(())
}

#[test]
fn test_invalid_record_is_rejected_before_rendering() {
    let err = generate_pdf(json!({ "date": 20240305 })).err().unwrap();
    assert!(err.to_string().contains("violation"));
}
