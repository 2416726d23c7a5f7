use crate::error::ScrapeError;

use super::{AgeRating, Book, Series};

/// Schema gate applied to a fully assembled record. Empty collections are
/// normalized to `None` so downstream consumers can distinguish "no data"
/// from "empty list"; a series age rating outside the controlled vocabulary
/// fails the whole extraction.
pub fn validate_series(mut series: Series) -> Result<Series, ScrapeError> {
    if series.staff.as_ref().map_or(false, |s| s.is_empty()) {
        series.staff = None;
    }
    if series.genres.as_ref().map_or(false, |g| g.is_empty()) {
        series.genres = None;
    }
    if series.volumes.as_ref().map_or(false, |v| v.is_empty()) {
        series.volumes = None;
    }

    // Every listed volume must resolve to a book-page slug; one that does
    // not points at broken markup, not a sparse field.
    if let Some(volumes) = series.volumes.as_ref() {
        if volumes.iter().any(|volume| volume.slug.is_none()) {
            return Err(ScrapeError::Validation {
                field: "volumes.slug",
            });
        }
    }

    if let Some(rating) = series.age_rating.as_deref() {
        // The empty string is legal: it marks a page with no rating block.
        if !rating.is_empty() && AgeRating::from_label(rating).is_none() {
            return Err(ScrapeError::Validation { field: "age_rating" });
        }
    }

    Ok(series)
}

/// Like [`validate_series`] for a standalone book page. The book age rating
/// is an open string, but the embedded series reference must at least carry
/// a slug.
pub fn validate_book(mut book: Book) -> Result<Book, ScrapeError> {
    if book.staff.as_ref().map_or(false, |s| s.is_empty()) {
        book.staff = None;
    }

    if book.series.series_slug.is_none() {
        return Err(ScrapeError::Validation {
            field: "series.series_slug",
        });
    }

    Ok(book)
}
