use anyhow::Result;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;
use crate::fetch::{fetch_text, BASE_URL};
use crate::models::{validate_book, Book, SeriesRef, DISTRIBUTOR};

use super::label::find_marker;
use super::rating::age_rating;
use super::staff::book_staff;
use super::title::{clean_book_title, clean_series_title};
use super::{next_element, path_slug, Parser};

static CONTENT: Lazy<Selector> = Lazy::new(|| Selector::parse("#content").unwrap());
static TOPPER: Lazy<Selector> = Lazy::new(|| Selector::parse(".topper").unwrap());
static AGE_RATING: Lazy<Selector> = Lazy::new(|| Selector::parse("div.age-rating").unwrap());
static VOLUME_COVER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div#volume-cover img").unwrap());
static VOLUME_META: Lazy<Selector> = Lazy::new(|| Selector::parse("#volume-meta").unwrap());
static BOOKCREW: Lazy<Selector> = Lazy::new(|| Selector::parse(".bookcrew").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

static VOL_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(.*)(?:\svol.*?([\d-]+))").unwrap());

/// Assembles a [`Book`] record from a standalone `/books/<slug>/` page.
pub struct BookPage {
    slug: String,
    request_data: Option<Box<String>>,
}

impl BookPage {
    pub fn new(slug: impl Into<String>) -> BookPage {
        BookPage {
            slug: slug.into(),
            request_data: None,
        }
    }

    pub fn parse_document(&self, document: &Html) -> Result<Book> {
        if self.slug.is_empty() {
            return Err(ScrapeError::MissingSlug.into());
        }

        let content = document
            .select(&CONTENT)
            .next()
            .ok_or(ScrapeError::MissingRegion("#content"))?;

        let series = parse_series_ref(content);

        let title_raw = content
            .select(&TOPPER)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
            .replacen("Book: ", "", 1);

        let title = clean_book_title(&title_raw, &series.series_title)
            .filter(|title| *title != series.series_title);

        let number = VOL_HEADING
            .captures(&title_raw)
            .and_then(|captures| captures.get(2))
            .map(|m| m.as_str().to_string());

        let cover = content
            .select(&VOLUME_COVER)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(String::from);

        let rating = age_rating(content.select(&AGE_RATING));
        let staff = book_staff(content);
        let description = parse_description(content);

        let meta = super::scan_panel_text(
            &content
                .select(&VOLUME_META)
                .next()
                .map(|el| el.text().collect::<String>())
                .unwrap_or_default(),
        );

        let book = Book {
            content_type: series.content_type,
            edition: series.edition,
            series,
            slug: self.slug.clone(),
            title,
            number,
            cover,
            age_rating: rating,
            distributor: String::from(DISTRIBUTOR),
            staff: Some(staff),
            description,
            release_date: meta.release_date,
            digital_date: meta.digital_date,
            price: meta.price,
            format: meta.format,
            trim: meta.trim,
            pages: meta.pages,
            isbn: meta.isbn,
        };

        Ok(validate_book(book)?)
    }
}

/// The parent series is referenced through a "Series:" label whose value
/// lives in the following element, wrapping a link to the series page.
fn parse_series_ref(content: ElementRef) -> SeriesRef {
    let region = find_marker(content, "Series:").and_then(next_element);

    let title_raw = region
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();
    let details = clean_series_title(&title_raw);

    let link = region
        .and_then(|el| el.select(&ANCHOR).next())
        .and_then(|a| a.value().attr("href"))
        .map(String::from);
    let slug = link
        .as_deref()
        .and_then(|link| path_slug(link, "/series/".len()));

    SeriesRef {
        series_title: details.title,
        series_slug: slug,
        series_link: link,
        content_type: details.content_type,
        edition: details.edition,
        distributor: String::from(DISTRIBUTOR),
    }
}

/// The description has no container of its own: it is every paragraph
/// sibling after the element two past the crew block, joined by blank lines.
fn parse_description(content: ElementRef) -> Option<String> {
    let crew = content.select(&BOOKCREW).next()?;

    let paragraphs: Vec<String> = crew
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .skip(2)
        .filter(|el| el.value().name() == "p")
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    Some(paragraphs.join("\n\n"))
}

impl Parser for BookPage {
    type RequestData = String;
    type ParseData = Book;

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

        Ok(format!("{}/books/{}", BASE_URL, self.slug))
    }

    fn request(mut self) -> Result<Box<Self>> {
        trace!("BookPage::request()");
        let html = fetch_text(&self.url()?)?;

        self.request_data = Some(Box::new(html));
        Ok(Box::new(self))
    }

    fn parse(&self) -> Result<Book> {
        trace!("BookPage::parse()");
        let document = Html::parse_document(self.request_data()?);

        self.parse_document(&document)
    }
}
