use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

static BOLD: Lazy<Selector> = Lazy::new(|| Selector::parse("b").unwrap());

/// Finds the first `<b>` marker under `scope` whose text contains `label`.
/// The pages encode fields as a bold label followed by loose sibling text,
/// so this is the anchor for every "Label: value" extraction.
pub fn find_marker<'a>(scope: ElementRef<'a>, label: &str) -> Option<ElementRef<'a>> {
    scope
        .select(&BOLD)
        .find(|el| el.text().collect::<String>().contains(label))
}

/// Returns the raw text of the marker's immediate next sibling, provided
/// that sibling is a text node. An element sibling or a missing marker both
/// yield `None`; this never errors.
pub fn label_sibling_text(scope: ElementRef, label: &str) -> Option<String> {
    let marker = find_marker(scope, label)?;
    let sibling = marker.next_sibling()?;
    let text = sibling.value().as_text()?;

    Some(String::from(&*text.text))
}

/// The usual "Label: value" form: first colon removed, whitespace trimmed.
pub fn label_value(scope: ElementRef, label: &str) -> Option<String> {
    label_sibling_text(scope, label).map(|value| value.replacen(':', "", 1).trim().to_string())
}
