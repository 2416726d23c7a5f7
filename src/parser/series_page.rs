use anyhow::Result;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::date::normalize_date;
use crate::error::ScrapeError;
use crate::fetch::{fetch_text, BASE_URL};
use crate::models::{validate_series, Genre, Series, Volume, DISTRIBUTOR};

use super::label::label_value;
use super::rating::age_rating;
use super::staff::{infer_single_creator, Candidate};
use super::title::clean_series_title;
use super::{child_elements, path_slug, Parser};

static CONTENT: Lazy<Selector> = Lazy::new(|| Selector::parse("#content").unwrap());
static TOPPER: Lazy<Selector> = Lazy::new(|| Selector::parse(".topper").unwrap());
static ORIGINAL_TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("#originaltitle").unwrap());
static AGE_RATING: Lazy<Selector> = Lazy::new(|| Selector::parse("div.age-rating").unwrap());
static SERIES_META_ANCHOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("#series-meta a").unwrap());
static DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.series-description").unwrap());
static VOLUMES_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.volumes-container").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static IMG: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

// Matches "Some Title Vol. 12" style headings: everything before the vol
// marker, then the number (possibly a range like "1-3").
static VOL_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(.*)(?:\svol.*?([\d-]+))").unwrap());

/// Assembles a full [`Series`] record from a `/series/<slug>/` page.
pub struct SeriesPage {
    slug: String,
    request_data: Option<Box<String>>,
}

impl SeriesPage {
    pub fn new(slug: impl Into<String>) -> SeriesPage {
        SeriesPage {
            slug: slug.into(),
            request_data: None,
        }
    }

    /// The pure core: one document tree in, one validated record out.
    pub fn parse_document(&self, document: &Html) -> Result<Series> {
        if self.slug.is_empty() {
            return Err(ScrapeError::MissingSlug.into());
        }

        let content = document
            .select(&CONTENT)
            .next()
            .ok_or(ScrapeError::MissingRegion("#content"))?;

        let title_raw = content
            .select(&TOPPER)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
            .replacen("Series: ", "", 1);
        let details = clean_series_title(&title_raw);

        let (title_ja, title_ja_en) = match content.select(&ORIGINAL_TITLE).next() {
            Some(el) => split_original_titles(&el.text().collect::<String>()),
            None => (None, None),
        };

        let rating = age_rating(content.select(&AGE_RATING));

        // The metadata region mixes creator links and genre tags into one
        // run of anchors; sort them by destination.
        let mut creators = Vec::new();
        let mut genres = Vec::new();
        for anchor in content.select(&SERIES_META_ANCHOR) {
            let href = anchor.value().attr("href");
            let text = anchor.text().collect::<String>();

            if href.map_or(false, |h| h.contains("creator")) {
                creators.push(Candidate {
                    name: text,
                    link: href.map(String::from),
                });
            } else if anchor.value().attr("rel") == Some("tag") {
                genres.push(Genre {
                    genre: text,
                    link: href.map(String::from),
                });
            }
        }

        let staff = infer_single_creator(&creators);

        let description = content
            .select(&DESCRIPTION)
            .next()
            .map(|el| el.text().collect::<String>());

        let mut volumes = Vec::new();
        if let Some(container) = content.select(&VOLUMES_CONTAINER).next() {
            for anchor in child_elements(container).filter(|el| el.value().name() == "a") {
                volumes.push(parse_volume(anchor, &title_raw));
            }
        }

        let cover = volumes.first().and_then(|vol: &Volume| vol.cover.clone());
        let volume_count = volumes.len();

        let series = Series {
            series_slug: self.slug.clone(),
            series_title: details.title,
            series_title_ja: title_ja,
            series_title_ja_en: title_ja_en,
            content_type: details.content_type,
            edition: details.edition,
            distributor: String::from(DISTRIBUTOR),
            age_rating: rating,
            description,
            staff: Some(staff),
            genres: Some(genres),
            volumes: Some(volumes),
            cover,
            volume_count,
        };

        Ok(validate_series(series)?)
    }
}

/// The original-title block holds two pipe-separated strings with no
/// reliable order. Heuristic: a non-ASCII character in the first segment
/// means it is the Japanese one, otherwise the assignment is reversed.
/// Returns (japanese, transliteration).
fn split_original_titles(text: &str) -> (Option<String>, Option<String>) {
    let mut segments = text.split(" | ");
    let first = segments.next().unwrap_or_default().to_string();
    let second = segments.next().map(String::from);

    if first.chars().any(|c| !c.is_ascii()) {
        (Some(first), second)
    } else {
        (second, Some(first))
    }
}

fn parse_volume(anchor: ElementRef, series_title_raw: &str) -> Volume {
    let slug = anchor
        .value()
        .attr("href")
        .and_then(|href| path_slug(href, "/books/".len()));

    let heading = anchor
        .select(&HEADING)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let (title, number) = match VOL_HEADING.captures(&heading) {
        Some(captures) => {
            let title = captures
                .get(1)
                .map(|m| m.as_str())
                .filter(|t| !t.is_empty() && *t != series_title_raw)
                .map(String::from);
            let number = captures.get(2).map(|m| m.as_str().to_string());
            (title, number)
        }
        None => (None, None),
    };

    let cover = anchor
        .select(&IMG)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(String::from);

    let release_date = label_value(anchor, "Release").and_then(|v| normalize_date(&v));
    let digital_date = label_value(anchor, "Digital").and_then(|v| normalize_date(&v));
    let price = label_value(anchor, "Price:")
        .and_then(|v| v.strip_prefix('$').unwrap_or(&v).parse::<f64>().ok())
        .map(crate::models::Price::usd);
    let format = label_value(anchor, "Format:").map(|v| v.to_lowercase());
    let isbn = label_value(anchor, "ISBN:");

    Volume {
        slug,
        title,
        number,
        cover,
        release_date,
        digital_date,
        price,
        distributor: String::from(DISTRIBUTOR),
        format,
        isbn,
    }
}

impl Parser for SeriesPage {
    type RequestData = String;
    type ParseData = Series;

    fn request_data(&self) -> Result<&Box<String>> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(anyhow::Error::msg("Can't get request_data")),
        }
    }

    fn url(&self) -> Result<String> {
        if self.slug.is_empty() {
            return Err(ScrapeError::MissingSlug.into());
        }

        Ok(format!("{}/series/{}", BASE_URL, self.slug))
    }

    fn request(mut self) -> Result<Box<Self>> {
        trace!("SeriesPage::request()");
        let html = fetch_text(&self.url()?)?;

        self.request_data = Some(Box::new(html));
        Ok(Box::new(self))
    }

    fn parse(&self) -> Result<Series> {
        trace!("SeriesPage::parse()");
        let document = Html::parse_document(self.request_data()?);

        self.parse_document(&document)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use scraper::Html;

    use crate::models::{ContentType, Price, StaffRole};

    use super::{split_original_titles, SeriesPage};

    const PAGE: &str = r#"<html><body><div id="content">
        <h2 class="topper">Series: Bloom Into You (Light Novel)</h2>
        <div id="originaltitle">やがて君になる | Yagate Kimi ni Naru</div>
        <div class="age-rating" id="teen"></div>
        <div id="series-meta">
            <a href="https://sevenseasentertainment.com/creator/nakatani-nio/">Nakatani Nio</a>
            <a rel="tag" href="https://sevenseasentertainment.com/tag/yuri/">Yuri</a>
            <a rel="tag" href="https://sevenseasentertainment.com/tag/school-life/">School Life</a>
        </div>
        <div class="series-description">Shy Yuu has always dreamed of romance.</div>
        <div class="volumes-container">
            <a href="https://sevenseasentertainment.com/books/bloom-into-you-vol-1/">
                <img src="https://sevenseasentertainment.com/covers/biy1.jpg">
                <h3>Bloom Into You Vol. 1</h3>
                <b>Release Date:</b> January 3, 2017<br>
                <b>Digital:</b> December 1, 2016<br>
                <b>Price:</b> $12.99<br>
                <b>Format:</b> Paperback<br>
                <b>ISBN:</b> 978-1-62692-353-9<br>
            </a>
            <a href="https://sevenseasentertainment.com/books/bloom-into-you-vol-2/">
                <img src="https://sevenseasentertainment.com/covers/biy2.jpg">
                <h3>Bloom Into You Vol. 2</h3>
                <b>Release Date:</b> June 6, 2017<br>
            </a>
        </div>
    </div></body></html>"#;

    #[test]
    fn assembles_full_record() -> anyhow::Result<()> {
        let document = Html::parse_document(PAGE);
        let series = SeriesPage::new("bloom-into-you-light-novel").parse_document(&document)?;

        assert_eq!("bloom-into-you-light-novel", series.series_slug);
        assert_eq!("Bloom Into You", series.series_title);
        assert_eq!(ContentType::LightNovel, series.content_type);
        assert_eq!(None, series.edition);
        assert_eq!(Some(String::from("やがて君になる")), series.series_title_ja);
        assert_eq!(
            Some(String::from("Yagate Kimi ni Naru")),
            series.series_title_ja_en
        );
        assert_eq!(Some(String::from("Teen")), series.age_rating);
        assert_eq!(
            Some(String::from("Shy Yuu has always dreamed of romance.")),
            series.description
        );

        let genres = series.genres.as_ref().unwrap();
        assert_eq!(2, genres.len());
        assert_eq!("Yuri", genres[0].genre);

        // Exactly one creator link, so the heuristic credits both roles.
        let staff = series.staff.as_ref().unwrap();
        assert_eq!(2, staff.len());
        assert_eq!(StaffRole::Writer, staff[0].role);
        assert_eq!(StaffRole::Artist, staff[1].role);
        assert_eq!("Nakatani Nio", staff[0].name);

        let volumes = series.volumes.as_ref().unwrap();
        assert_eq!(2, volumes.len());
        assert_eq!(2, series.volume_count);

        let first = &volumes[0];
        assert_eq!(Some(String::from("bloom-into-you-vol-1")), first.slug);
        // Heading title differs from the raw series title, so it is kept.
        assert_eq!(Some(String::from("Bloom Into You")), first.title);
        assert_eq!(Some(String::from("1")), first.number);
        assert_eq!(NaiveDate::from_ymd_opt(2017, 1, 3), first.release_date);
        assert_eq!(NaiveDate::from_ymd_opt(2016, 12, 1), first.digital_date);
        assert_eq!(Some(Price::usd(12.99)), first.price);
        assert_eq!(Some(String::from("paperback")), first.format);
        assert_eq!(Some(String::from("978-1-62692-353-9")), first.isbn);

        // Series cover comes from the first volume.
        assert_eq!(
            Some(String::from("https://sevenseasentertainment.com/covers/biy1.jpg")),
            series.cover
        );

        Ok(())
    }

    #[test]
    fn sparse_volume_keeps_absent_fields() -> anyhow::Result<()> {
        let document = Html::parse_document(PAGE);
        let series = SeriesPage::new("bloom-into-you-light-novel").parse_document(&document)?;

        let second = &series.volumes.as_ref().unwrap()[1];
        assert_eq!(NaiveDate::from_ymd_opt(2017, 6, 6), second.release_date);
        assert_eq!(None, second.digital_date);
        assert_eq!(None, second.price);
        assert_eq!(None, second.format);
        assert_eq!(None, second.isbn);

        Ok(())
    }

    #[test]
    fn empty_slug_is_fatal() {
        let document = Html::parse_document(PAGE);

        assert!(SeriesPage::new("").parse_document(&document).is_err());
    }

    #[test]
    fn reparse_is_idempotent() -> anyhow::Result<()> {
        let document = Html::parse_document(PAGE);
        let page = SeriesPage::new("bloom-into-you-light-novel");

        let first = page.parse_document(&document)?;
        let second = page.parse_document(&document)?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn volume_title_matching_series_title_is_suppressed() -> anyhow::Result<()> {
        let page = r#"<div id="content">
            <h2 class="topper">Series: Berserk of Gluttony</h2>
            <div class="volumes-container">
                <a href="https://sevenseasentertainment.com/books/berserk-of-gluttony-vol-3/">
                    <h3>Berserk of Gluttony Vol. 3</h3>
                </a>
            </div>
        </div>"#;
        let document = Html::parse_document(page);
        let series = SeriesPage::new("berserk-of-gluttony").parse_document(&document)?;

        let volume = &series.volumes.as_ref().unwrap()[0];
        assert_eq!(None, volume.title);
        assert_eq!(Some(String::from("3")), volume.number);

        Ok(())
    }

    #[test]
    fn missing_blocks_leave_record_sparse() -> anyhow::Result<()> {
        let page = r#"<div id="content">
            <h2 class="topper">Series: Lone Title</h2>
        </div>"#;
        let document = Html::parse_document(page);
        let series = SeriesPage::new("lone-title").parse_document(&document)?;

        assert_eq!("Lone Title", series.series_title);
        assert_eq!(None, series.series_title_ja);
        assert_eq!(None, series.series_title_ja_en);
        // No rating markers at all: the empty string, not absent.
        assert_eq!(Some(String::new()), series.age_rating);
        assert_eq!(None, series.staff);
        assert_eq!(None, series.genres);
        assert_eq!(None, series.volumes);
        assert_eq!(0, series.volume_count);
        assert_eq!(None, series.cover);

        Ok(())
    }

    #[test]
    fn ascii_first_segment_reverses_assignment() {
        // Heuristic only: publisher convention, not a guarantee.
        let (ja, ja_en) = split_original_titles("Yagate Kimi ni Naru | やがて君になる");

        assert_eq!(Some(String::from("やがて君になる")), ja);
        assert_eq!(Some(String::from("Yagate Kimi ni Naru")), ja_en);
    }

    #[test]
    fn missing_second_segment() {
        let (ja, ja_en) = split_original_titles("やがて君になる");

        assert_eq!(Some(String::from("やがて君になる")), ja);
        assert_eq!(None, ja_en);
    }
}
