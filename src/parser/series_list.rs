use anyhow::Result;
use log::trace;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::fetch::{fetch_text, BASE_URL};
use crate::models::SeriesSummary;

use super::title::clean_series_title;
use super::{path_slug, Parser};

static ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table#listview tbody tr#volumes").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Extracts one summary per row of the `/series-list/` table page.
pub fn parse_series_listing(document: &Html) -> Vec<SeriesSummary> {
    let mut all_series = Vec::new();

    for row in document.select(&ROWS) {
        let title_raw = row.text().collect::<String>().trim().to_string();
        let details = clean_series_title(&title_raw);

        let link = row
            .select(&ANCHOR)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(String::from);
        let slug = link
            .as_deref()
            .and_then(|link| path_slug(link, "/series/".len()));

        all_series.push(SeriesSummary {
            series_slug: slug,
            series_title: details.title,
            content_type: details.content_type,
            edition: details.edition,
            series_link: link,
        });
    }

    all_series
}

pub struct SeriesList {
    request_data: Option<Box<String>>,
}

impl SeriesList {
    pub fn new() -> SeriesList {
        SeriesList { request_data: None }
    }
}

impl Default for SeriesList {
    fn default() -> Self {
        SeriesList::new()
    }
}

impl Parser for SeriesList {
    type RequestData = String;
    type ParseData = Vec<SeriesSummary>;

    fn request_data(&self) -> Result<&Box<String>> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(anyhow::Error::msg("Can't get request_data")),
        }
    }

    fn url(&self) -> Result<String> {
        Ok(format!("{}/series-list/", BASE_URL))
    }

    fn request(mut self) -> Result<Box<Self>> {
        trace!("SeriesList::request()");
        let html = fetch_text(&self.url()?)?;

        self.request_data = Some(Box::new(html));
        Ok(Box::new(self))
    }

    fn parse(&self) -> Result<Vec<SeriesSummary>> {
        trace!("SeriesList::parse()");
        let document = Html::parse_document(self.request_data()?);

        Ok(parse_series_listing(&document))
    }
}
