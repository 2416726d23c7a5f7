use chrono::NaiveDate;
use serde::Serialize;

use super::{ContentType, Edition, Genre, Price, StaffMember};

pub const DISTRIBUTOR: &str = "Seven Seas Entertainment";

/// A full series record as assembled from a `/series/<slug>/` page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub series_slug: String,
    pub series_title: String,
    pub series_title_ja: Option<String>,
    pub series_title_ja_en: Option<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub edition: Option<Edition>,
    pub distributor: String,
    /// Human label from the age-rating table; `""` when the rating block is
    /// missing entirely.
    pub age_rating: Option<String>,
    pub description: Option<String>,
    pub staff: Option<Vec<StaffMember>>,
    pub genres: Option<Vec<Genre>>,
    pub volumes: Option<Vec<Volume>>,
    pub cover: Option<String>,
    pub volume_count: usize,
}

/// One release listed under a series' volumes container.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Volume {
    pub slug: Option<String>,
    /// Null when it merely repeats the series title.
    pub title: Option<String>,
    /// Kept as a string, ranges like "1-3" occur.
    pub number: Option<String>,
    pub cover: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub digital_date: Option<NaiveDate>,
    pub price: Option<Price>,
    pub distributor: String,
    #[serde(rename = "type")]
    pub format: Option<String>,
    pub isbn: Option<String>,
}

/// One row of the `/series-list/` table page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub series_slug: Option<String>,
    pub series_title: String,
    #[serde(rename = "series_type")]
    pub content_type: ContentType,
    #[serde(rename = "series_edition")]
    pub edition: Option<Edition>,
    pub series_link: Option<String>,
}

/// One row of the `/creator/` index page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub name: String,
    pub link: Option<String>,
}
