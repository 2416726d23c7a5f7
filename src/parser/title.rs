use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ContentType, Edition};

// Suffixes seen in the wild: Manga, Novel, Light Novel, Comic,
// The Comic / Manhua, Omnibus, New Edition Rerelease, Omnibus Collection,
// Illustrated Novel, WEBTOON, Series, Hardcover, Memoir.
static SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<title>.*)\s\((?P<suffix>.*)\)$").unwrap());

static VOL_TRAILER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\w.*)(?:\sVol.*)").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub struct TitleDetails {
    pub title: String,
    pub content_type: ContentType,
    pub edition: Option<Edition>,
}

/// Splits a raw title like "Bloom Into You (Light Novel)" into the clean
/// title and the classification its parenthetical suffix encodes. Without a
/// suffix the whole string is the title and the type defaults to manga. The
/// type and edition tables are consulted independently against the same
/// suffix; a suffix matching neither still forces the manga default.
pub fn clean_series_title(raw: &str) -> TitleDetails {
    let mut title = raw.to_string();
    let mut content_type = ContentType::Manga;
    let mut edition = None;

    if let Some(captures) = SUFFIX.captures(raw) {
        title = captures["title"].to_string();

        content_type = match &captures["suffix"] {
            "Light Novel" => ContentType::LightNovel,
            "Novel" | "Illustrated Novel" | "Memoir" => ContentType::Novel,
            "Comic" | "WEBTOON" | "The Comic" => ContentType::Webtoon,
            "The Comic / Manhua" => ContentType::Manhua,
            "Series" => ContentType::Manga,
            _ => ContentType::Manga,
        };

        edition = match &captures["suffix"] {
            "Omnibus" | "Omnibus Collection" => Some(Edition::Omnibus),
            "Hardcover" => Some(Edition::Hardcover),
            "New Edition Rerelease" => Some(Edition::NewEdition),
            _ => None,
        };
    }

    TitleDetails {
        title,
        content_type,
        edition,
    }
}

/// Recovers a book's own display title: the series title is cut out of the
/// raw topper text, the "Vol. N" trailer dropped, and the remainder run back
/// through the classifier. `None` when nothing usable is left.
pub fn clean_book_title(raw: &str, series_title: &str) -> Option<String> {
    let stripped = if series_title.is_empty() {
        raw.to_string()
    } else {
        raw.replacen(series_title, "", 1)
    };

    let captures = VOL_TRAILER.captures(&stripped)?;
    let base = captures.get(1)?.as_str();

    Some(clean_series_title(base).title.trim().to_string())
}
