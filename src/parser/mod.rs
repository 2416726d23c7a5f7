use scraper::ElementRef;

mod author_index;
mod book_page;
mod label;
mod rating;
mod series_api;
mod series_list;
mod series_page;
mod staff;
mod title;
mod volume_meta;

pub use author_index::{parse_author_index, AuthorIndex};
pub use book_page::BookPage;
pub use label::{find_marker, label_value};
pub use rating::age_rating;
pub use series_api::{ApiSeries, SeriesApi};
pub use series_list::{parse_series_listing, SeriesList};
pub use series_page::SeriesPage;
pub use staff::{book_staff, infer_single_creator, Candidate};
pub use title::{clean_book_title, clean_series_title, TitleDetails};
pub use volume_meta::{scan_panel_text, VolumeMeta};

pub trait Parser {
    type RequestData;
    type ParseData;

    fn request_data(&self) -> anyhow::Result<&Box<Self::RequestData>>;

    fn url(&self) -> anyhow::Result<String>;

    fn request(self) -> anyhow::Result<Box<Self>>;

    fn parse(&self) -> anyhow::Result<Self::ParseData>;
}

pub(crate) fn next_element<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

pub(crate) fn parent_element<'a>(element: ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.parent().and_then(ElementRef::wrap)
}

pub(crate) fn child_elements<'a>(
    element: ElementRef<'a>,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element.children().filter_map(ElementRef::wrap)
}

/// Derives a slug from a page URL by cutting `prefix_len` characters off the
/// front of the path (e.g. 7 for "/books/", 8 for "/series/") and the
/// trailing slash off the end.
pub(crate) fn path_slug(url: &str, prefix_len: usize) -> Option<String> {
    let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
    let path = &rest[rest.find('/')?..];

    // The offset may land inside a multibyte character on malformed hrefs;
    // such a path simply has no slug.
    let slug = path.get(prefix_len..)?.trim_end_matches('/');
    if slug.is_empty() {
        return None;
    }

    Some(slug.to_string())
}

#[cfg(test)]
mod tests {
    use super::path_slug;

    #[test]
    fn slug_from_book_url() {
        assert_eq!(
            Some(String::from("bloom-into-you-vol-1")),
            path_slug("https://sevenseasentertainment.com/books/bloom-into-you-vol-1/", 7)
        );
    }

    #[test]
    fn slug_from_series_url() {
        assert_eq!(
            Some(String::from("bloom-into-you")),
            path_slug("https://sevenseasentertainment.com/series/bloom-into-you/", 8)
        );
    }

    #[test]
    fn bare_host_has_no_slug() {
        assert_eq!(None, path_slug("https://sevenseasentertainment.com", 8));
    }

    #[test]
    fn offset_inside_multibyte_character_has_no_slug() {
        assert_eq!(None, path_slug("https://sevenseasentertainment.com/seriesé-foo/", 8));
    }

    #[test]
    fn multibyte_slug_survives() {
        assert_eq!(
            Some(String::from("héroïne-story")),
            path_slug("https://sevenseasentertainment.com/series/héroïne-story/", 8)
        );
    }
}
