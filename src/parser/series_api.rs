use anyhow::Result;
use chrono::NaiveDateTime;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::fetch::BASE_URL;
use crate::models::{ContentType, Edition};

use super::title::clean_series_title;

const PER_PAGE: usize = 100;

// The rendered content opens with a bold blurb of store links; drop
// everything up to the last line ending in </strong> and keep the rest.
static BLURB: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?sm)(?:^.*</strong>$)?(.*)").unwrap());

/// One entry of the WP JSON series listing. The endpoint is quicker than the
/// HTML pages but carries fewer fields, so these records complement rather
/// than replace the page scrape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiSeries {
    pub series_id: i64,
    pub series_slug: String,
    pub series_title: String,
    pub series_status: Option<String>,
    #[serde(rename = "series_type")]
    pub content_type: ContentType,
    #[serde(rename = "series_edition")]
    pub edition: Option<Edition>,
    pub series_link: Option<String>,
    pub series_description: Option<String>,
    pub series_tags: Vec<String>,
    pub series_date: Option<String>,
    pub series_modified: Option<String>,
}

/// Paginates `/wp-json/wp/v2/series`. An `after` timestamp narrows the
/// listing to series modified since then.
pub struct SeriesApi {
    after: Option<NaiveDateTime>,
}

impl SeriesApi {
    pub fn new(after: Option<NaiveDateTime>) -> SeriesApi {
        SeriesApi { after }
    }

    fn url(&self, page: usize) -> String {
        match self.after {
            Some(after) => format!(
                "{}/wp-json/wp/v2/series?orderby=title&after={}&order=asc&per_page={}&page={}",
                BASE_URL,
                after.format("%Y-%m-%dT%H:%M:%S"),
                PER_PAGE,
                page
            ),
            None => format!(
                "{}/wp-json/wp/v2/series?orderby=title&order=asc&per_page={}&page={}",
                BASE_URL, PER_PAGE, page
            ),
        }
    }

    /// The endpoint gives no page count: an empty page ends the walk, and a
    /// short page is presumed to be the last one.
    pub fn fetch(&self) -> Result<Vec<ApiSeries>> {
        trace!("SeriesApi::fetch()");
        let client = reqwest::blocking::Client::builder().build()?;

        let mut all_series = Vec::new();
        let mut page = 1;

        loop {
            let url = self.url(page);
            debug!("page = {}", page);

            let items: Vec<Value> = client.get(&url).send()?.json()?;

            if items.is_empty() {
                break;
            }
            let last_page = items.len() < PER_PAGE;

            all_series.extend(items.iter().filter_map(parse_item));

            if last_page {
                break;
            }
            page += 1;
        }

        Ok(all_series)
    }
}

fn parse_item(item: &Value) -> Option<ApiSeries> {
    let title_raw = item["title"]["rendered"].as_str()?;
    let details = clean_series_title(title_raw);

    let description = item["content"]["rendered"]
        .as_str()
        .and_then(clean_rendered_description);

    let tags = item["class_list"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.as_str())
                .filter_map(|class| class.strip_prefix("tag-"))
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Some(ApiSeries {
        series_id: item["id"].as_i64()?,
        series_slug: item["slug"].as_str()?.to_string(),
        series_title: details.title,
        series_status: item["status"].as_str().map(String::from),
        content_type: details.content_type,
        edition: details.edition,
        series_link: item["link"].as_str().map(String::from),
        series_description: description,
        series_tags: tags,
        series_date: item["date"].as_str().map(String::from),
        series_modified: item["modified"].as_str().map(String::from),
    })
}

/// Reduces the rendered HTML content to plain description text: paragraph
/// markup becomes newlines, the leading store-link blurb is dropped, and
/// doubled blank lines collapse.
fn clean_rendered_description(rendered: &str) -> Option<String> {
    let text = rendered.replace("<p>", "").replace("</p>", "\n");
    let text = text.trim();

    BLURB
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().replace("\n\n", "\n"))
        .filter(|description| !description.is_empty())
}
