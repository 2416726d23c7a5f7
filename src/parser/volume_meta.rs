use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::date::normalize_date;
use crate::models::Price;

// One alternation, matched repeatedly over the panel text: the labels show
// up in any order and rarely all at once.
static META: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:Date:\s(?P<release>\w+\s\d{1,2}.\s\d{4}))",
        r"|(?:Digital:\s(?P<digital>\w+\s\d{1,2}.\s\d+))",
        r"|(?:Price:\s\$(?P<price>\d+\.\d+))",
        r"|(?:Format:\s(?P<format>\w+)Trim?)",
        r"|(?:Trim:\s(?P<trim>\d+\.\d+\sx\s\d+\.\d+))",
        r"|(?:Page\sCount:\s(?P<pages>\d+))",
        r"|(?:ISBN:\s(?P<isbn>\d{3}-\d{1}-\d{5}-\d{3}-\d{1}))",
    ))
    .unwrap()
});

/// The co-located field cluster of a `#volume-meta` panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeMeta {
    pub release_date: Option<NaiveDate>,
    pub digital_date: Option<NaiveDate>,
    pub price: Option<Price>,
    pub format: Option<String>,
    pub trim: Option<String>,
    pub pages: Option<u32>,
    pub isbn: Option<String>,
}

/// Scans the concatenated text of a metadata panel. The markup drops the
/// whitespace between the format value and the "Trim" label, so a separating
/// space is inserted before the first literal "Trim" up front. Matches are
/// merged into one flat field set, last write wins.
pub fn scan_panel_text(text: &str) -> VolumeMeta {
    let text = text.replacen("Trim", " Trim", 1);

    let mut meta = VolumeMeta::default();

    for captures in META.captures_iter(&text) {
        if let Some(m) = captures.name("release") {
            meta.release_date = normalize_date(m.as_str());
        }
        if let Some(m) = captures.name("digital") {
            meta.digital_date = normalize_date(m.as_str());
        }
        if let Some(m) = captures.name("price") {
            meta.price = m.as_str().parse::<f64>().ok().map(Price::usd);
        }
        if let Some(m) = captures.name("format") {
            meta.format = Some(m.as_str().to_string());
        }
        if let Some(m) = captures.name("trim") {
            meta.trim = Some(m.as_str().to_string());
        }
        if let Some(m) = captures.name("pages") {
            meta.pages = m.as_str().parse().ok();
        }
        if let Some(m) = captures.name("isbn") {
            meta.isbn = Some(m.as_str().to_string());
        }
    }

    meta
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::Price;

    use super::scan_panel_text;

    #[test]
    fn price_with_currency_symbol() {
        let meta = scan_panel_text("Price: $12.99");

        assert_eq!(Some(Price::usd(12.99)), meta.price);
    }

    #[test]
    fn page_count_is_numeric() {
        let meta = scan_panel_text("Page Count: 192");

        assert_eq!(Some(192), meta.pages);
    }

    #[test]
    fn grouped_digit_isbn_verbatim() {
        let meta = scan_panel_text("ISBN: 978-1-64275-076-6");

        assert_eq!(Some(String::from("978-1-64275-076-6")), meta.isbn);
    }

    #[test]
    fn release_and_digital_dates() {
        let meta = scan_panel_text("Release Date: July 4, 2023Early Digital: June 15, 2023");

        assert_eq!(NaiveDate::from_ymd_opt(2023, 7, 4), meta.release_date);
        assert_eq!(NaiveDate::from_ymd_opt(2023, 6, 15), meta.digital_date);
    }

    #[test]
    fn format_consumes_trailing_trim_marker() {
        // The first "Trim" in the text gets the compensating space; the
        // second stays glued to the format word and is consumed by the
        // format pattern itself.
        let meta = scan_panel_text("Trim: 5.00 x 7.12Format: PaperbackTrim");

        assert_eq!(Some(String::from("5.00 x 7.12")), meta.trim);
        assert_eq!(Some(String::from("Paperback")), meta.format);
    }

    #[test]
    fn whole_panel_in_one_scan() {
        let meta = scan_panel_text(
            "Release Date: 2023/07/04Digital: July 4, 2023Price: $13.99Page Count: 180ISBN: 978-1-63858-710-6",
        );

        // "2023/07/04" does not fit the word-month pattern, so release stays
        // absent while everything else lands.
        assert_eq!(None, meta.release_date);
        assert_eq!(NaiveDate::from_ymd_opt(2023, 7, 4), meta.digital_date);
        assert_eq!(Some(Price::usd(13.99)), meta.price);
        assert_eq!(Some(180), meta.pages);
        assert_eq!(Some(String::from("978-1-63858-710-6")), meta.isbn);
    }

    #[test]
    fn empty_text_yields_empty_meta() {
        let meta = scan_panel_text("");

        assert_eq!(None, meta.release_date);
        assert_eq!(None, meta.price);
        assert_eq!(None, meta.isbn);
    }
}
