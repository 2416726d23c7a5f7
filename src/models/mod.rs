mod book;
mod metadata;
mod series;
mod validate;

pub use book::{Book, SeriesRef};
pub use metadata::{AgeRating, ContentType, Edition, Genre, Price, StaffMember, StaffRole};
pub use series::{Author, Series, SeriesSummary, Volume, DISTRIBUTOR};
pub use validate::{validate_book, validate_series};
