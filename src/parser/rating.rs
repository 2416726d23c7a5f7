use scraper::ElementRef;

use crate::models::AgeRating;

/// Maps the `div.age-rating` markers of a page to a rating label. The site
/// reuses these markers for imprints like Airship, so unknown ids are
/// tolerated as absent. When several markers appear the last one wins. An
/// empty marker set yields the empty string, which downstream keeps distinct
/// from a missing rating.
pub fn age_rating<'a, I>(markers: I) -> Option<String>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    let mut markers = markers.into_iter().peekable();

    if markers.peek().is_none() {
        return Some(String::new());
    }

    let mut rating = None;
    for marker in markers {
        let id = marker.value().attr("id").unwrap_or("");
        rating = AgeRating::from_id(id).map(|r| String::from(r.label()));
    }

    rating
}

#[cfg(test)]
mod tests {
    use once_cell::sync::Lazy;
    use scraper::{Html, Selector};

    use super::age_rating;

    static MARKER: Lazy<Selector> = Lazy::new(|| Selector::parse("div.age-rating").unwrap());

    #[test]
    fn empty_marker_set_is_empty_string() {
        let document = Html::parse_document("<html><body></body></html>");

        assert_eq!(
            Some(String::new()),
            age_rating(document.select(&MARKER))
        );
    }

    #[test]
    fn known_id_maps_to_label() {
        let document =
            Html::parse_document(r#"<div class="age-rating" id="mature"></div>"#);

        assert_eq!(
            Some(String::from("Mature")),
            age_rating(document.select(&MARKER))
        );
    }

    #[test]
    fn unknown_id_is_absent() {
        let document =
            Html::parse_document(r#"<div class="age-rating" id="airship"></div>"#);

        assert_eq!(None, age_rating(document.select(&MARKER)));
    }

    #[test]
    fn last_marker_wins() {
        let document = Html::parse_document(
            r#"<div class="age-rating" id="teen"></div>
               <div class="age-rating" id="olderteen15"></div>"#,
        );

        assert_eq!(
            Some(String::from("Older Teen (15+)")),
            age_rating(document.select(&MARKER))
        );
    }

    #[test]
    fn later_unknown_id_overwrites_earlier_match() {
        let document = Html::parse_document(
            r#"<div class="age-rating" id="teen"></div>
               <div class="age-rating" id="danmei"></div>"#,
        );

        assert_eq!(None, age_rating(document.select(&MARKER)));
    }
}
