use anyhow::Result;
use log::trace;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::fetch::{fetch_text, BASE_URL};
use crate::models::Author;

use super::Parser;

static ROWS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table#releasedates tbody tr#volumes").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// Extracts one author per row of the `/creator/` index page.
pub fn parse_author_index(document: &Html) -> Vec<Author> {
    let mut all_authors = Vec::new();

    for row in document.select(&ROWS) {
        let name = row.text().collect::<String>().trim().to_string();
        let link = row
            .select(&ANCHOR)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(String::from);

        all_authors.push(Author { name, link });
    }

    all_authors
}

pub struct AuthorIndex {
    request_data: Option<Box<String>>,
}

impl AuthorIndex {
    pub fn new() -> AuthorIndex {
        AuthorIndex { request_data: None }
    }
}

impl Default for AuthorIndex {
    fn default() -> Self {
        AuthorIndex::new()
    }
}

impl Parser for AuthorIndex {
    type RequestData = String;
    type ParseData = Vec<Author>;

    fn request_data(&self) -> Result<&Box<String>> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(anyhow::Error::msg("Can't get request_data")),
        }
    }

    fn url(&self) -> Result<String> {
        Ok(format!("{}/creator/", BASE_URL))
    }

    fn request(mut self) -> Result<Box<Self>> {
        trace!("AuthorIndex::request()");
        let html = fetch_text(&self.url()?)?;

        self.request_data = Some(Box::new(html));
        Ok(Box::new(self))
    }

    fn parse(&self) -> Result<Vec<Author>> {
        trace!("AuthorIndex::parse()");
        let document = Html::parse_document(self.request_data()?);

        Ok(parse_author_index(&document))
    }
}
