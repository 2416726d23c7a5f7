use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use crate::models::{StaffMember, StaffRole};

use super::label::{find_marker, label_value};
use super::{child_elements, next_element, parent_element};

static BOOKCREW: Lazy<Selector> = Lazy::new(|| Selector::parse(".bookcrew").unwrap());

/// A creator-page link before any role is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub link: Option<String>,
}

/// The bylines carry no ordering, so "Story & Art by" with two names could
/// have them reversed. Only a lone candidate is safe to use, and then for
/// both roles; with zero or several candidates nothing is inferred.
pub fn infer_single_creator(candidates: &[Candidate]) -> Vec<StaffMember> {
    let creator = match candidates {
        [only] => only,
        _ => return Vec::new(),
    };

    vec![
        StaffMember {
            name: creator.name.clone(),
            link: creator.link.clone(),
            role: StaffRole::Writer,
        },
        StaffMember {
            name: creator.name.clone(),
            link: creator.link.clone(),
            role: StaffRole::Artist,
        },
    ]
}

/// Direct child anchors of `region` that link to a creator page.
pub(crate) fn creator_links(region: ElementRef) -> Vec<Candidate> {
    child_elements(region)
        .filter(|el| el.value().name() == "a")
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            if !href.contains("creator") {
                return None;
            }

            Some(Candidate {
                name: a.text().collect::<String>(),
                link: Some(href.to_string()),
            })
        })
        .collect()
}

/// Resolves the full staff list of a book page from its three byline regions
/// and the crew block. The regions are scanned independently and their
/// results concatenated; a page may contribute staff from more than one.
pub fn book_staff(content: ElementRef) -> Vec<StaffMember> {
    let mut staff = Vec::new();

    // Combined "Story & Art by" byline: names live in the element after the
    // marker, and only a single creator is trustworthy.
    if let Some(region) = find_marker(content, "Story &").and_then(next_element) {
        staff.extend(infer_single_creator(&creator_links(region)));
    }

    // Separate bylines name the role outright.
    if let Some(region) = find_marker(content, "Story by").and_then(parent_element) {
        for creator in creator_links(region) {
            staff.push(StaffMember {
                name: creator.name,
                link: creator.link,
                role: StaffRole::Writer,
            });
        }
    }
    if let Some(region) = find_marker(content, "Art by").and_then(parent_element) {
        for creator in creator_links(region) {
            staff.push(StaffMember {
                name: creator.name,
                link: creator.link,
                role: StaffRole::Artist,
            });
        }
    }

    // The crew block credits production staff as plain label-value pairs,
    // with no creator pages to link.
    if let Some(crew) = content.select(&BOOKCREW).next() {
        for (label, role) in [
            ("Translation", StaffRole::Translator),
            ("Adaptation", StaffRole::Adaptation),
            ("Lettering", StaffRole::Lettering),
        ] {
            if let Some(name) = label_value(crew, label).filter(|name| !name.is_empty()) {
                staff.push(StaffMember {
                    name,
                    link: None,
                    role,
                });
            }
        }
    }

    staff
}
