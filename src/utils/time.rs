use chrono::NaiveDate;

/// Parse the date part of an API timestamp.
///
/// The event API sends `YYYY-MM-DD`, optionally followed by a time
/// (`2024-05-01 00:00:00.0`) or using dots as separators.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part: String = raw.chars().take(10).collect();
    NaiveDate::parse_from_str(&date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&date_part, "%Y.%m.%d"))
        .ok()
}

/// Display form of a single event date, falling back to the raw text
pub fn format_event_date(raw: &str) -> String {
    match parse_event_date(raw) {
        Some(date) => date.format("%Y.%m.%d").to_string(),
        None => raw.trim().to_string(),
    }
}

/// Display form of an event period: `start ~ end`, or one date when equal
pub fn format_date_range(start: &str, end: &str) -> String {
    let start_text = format_event_date(start);
    let end_text = format_event_date(end);

    if end_text.is_empty() || start_text == end_text {
        start_text
    } else if start_text.is_empty() {
        end_text
    } else {
        format!("{} ~ {}", start_text, end_text)
    }
}
