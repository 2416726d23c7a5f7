use thiserror::Error;

/// Fatal error kinds for a single extraction. Any one missing label or
/// unmatched pattern is not an error: it surfaces as an absent field instead,
/// since the source pages are inconsistently formatted.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Missing slug")]
    MissingSlug,
    #[error("{0} region not found in document")]
    MissingRegion(&'static str),
    #[error("record failed validation at `{field}`")]
    Validation { field: &'static str },
}
