//! Display formatting for the free-form `date` field.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static WEEKDAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\w+)\)").expect("BUG: invalid WEEKDAY_RE regex literal"));

static TRAILING_PAREN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(.*\)$").expect("BUG: invalid TRAILING_PAREN_RE regex literal")
});

static ISO_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})-([0-9]{2})-([0-9]{2})")
        .expect("BUG: invalid ISO_DATE_RE regex literal")
});

static MONTH_DAY_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\s*([0-9]{1,2}),\s*([0-9]{4})")
        .expect("BUG: invalid MONTH_DAY_YEAR_RE regex literal")
});

/// The header's rendering of a record date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDate {
    pub formatted: String,
    /// Full weekday name, when the date carried a recognised abbreviation.
    pub weekday: Option<&'static str>,
}

/// Formats `raw` for the header. Never fails: unrecognised input is shown as-is.
pub fn parse_display_date(raw: &str) -> DisplayDate {
    let weekday = WEEKDAY_RE
        .captures(raw)
        .and_then(|caps| full_weekday(&caps[1]));
    let clean = TRAILING_PAREN_RE.replace(raw, "");
    let clean = clean.trim();

    let formatted = if let Some(m) = ISO_DATE_RE.find(clean) {
        match NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d") {
            Ok(date) => date.format("%B %d, %Y").to_string(),
            Err(_) => clean.to_string(),
        }
    } else if let Some(caps) = MONTH_DAY_YEAR_RE.captures(clean) {
        match caps[2].parse::<u32>() {
            Ok(day) => format!("{} {}, {}", &caps[1], day, &caps[3]),
            Err(_) => clean.to_string(),
        }
    } else {
        clean.to_string()
    };

    DisplayDate { formatted, weekday }
}

/// The first valid `YYYY-MM-DD` calendar date embedded in `raw`.
pub fn iso_date(raw: &str) -> Option<NaiveDate> {
    ISO_DATE_RE
        .find_iter(raw)
        .find_map(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
}

fn full_weekday(abbreviation: &str) -> Option<&'static str> {
    match abbreviation {
        "Mon" => Some("Monday"),
        "Tue" => Some("Tuesday"),
        "Wed" => Some("Wednesday"),
        "Thu" => Some("Thursday"),
        "Fri" => Some("Friday"),
        "Sat" => Some("Saturday"),
        "Sun" => Some("Sunday"),
        _ => None,
    }
}
