use chrono::NaiveDate;

/// Turns the publisher's "Month D, YYYY" style date text into a calendar
/// date. Anything that doesn't parse yields `None`; callers store the field
/// as absent rather than failing the extraction.
pub fn normalize_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    for format in ["%B %d, %Y", "%b %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    None
}
