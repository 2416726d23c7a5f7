use chrono::NaiveDate;
use serde::Serialize;

use super::{ContentType, Edition, Price, StaffMember};

/// Reference to the parent series, derived from the "Series:" label region of
/// a book page. Not the full series record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRef {
    pub series_title: String,
    pub series_slug: Option<String>,
    pub series_link: Option<String>,
    #[serde(rename = "series_type")]
    pub content_type: ContentType,
    #[serde(rename = "series_edition")]
    pub edition: Option<Edition>,
    pub distributor: String,
}

/// A standalone `/books/<slug>/` page, richer than a listed Volume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub series: SeriesRef,
    pub slug: String,
    /// Null when identical to the series title.
    pub title: Option<String>,
    pub number: Option<String>,
    pub cover: Option<String>,
    pub age_rating: Option<String>,
    pub distributor: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub edition: Option<Edition>,
    pub staff: Option<Vec<StaffMember>>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub digital_date: Option<NaiveDate>,
    pub price: Option<Price>,
    pub format: Option<String>,
    pub trim: Option<String>,
    pub pages: Option<u32>,
    pub isbn: Option<String>,
}
