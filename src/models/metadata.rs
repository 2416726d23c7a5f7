use serde::Serialize;

/// Classification embedded in title suffixes, e.g. "Bloom Into You (Light Novel)".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentType {
    #[serde(rename = "manga")]
    Manga,
    #[serde(rename = "novel")]
    Novel,
    #[serde(rename = "light novel")]
    LightNovel,
    #[serde(rename = "webtoon")]
    Webtoon,
    #[serde(rename = "manhua")]
    Manhua,
    #[serde(rename = "art book")]
    ArtBook,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Manga => "manga",
            ContentType::Novel => "novel",
            ContentType::LightNovel => "light novel",
            ContentType::Webtoon => "webtoon",
            ContentType::Manhua => "manhua",
            ContentType::ArtBook => "art book",
        }
    }
}

/// Release variant, distinct from the content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Edition {
    #[serde(rename = "omnibus")]
    Omnibus,
    #[serde(rename = "hardcover")]
    Hardcover,
    #[serde(rename = "new_edition")]
    NewEdition,
}

/// The eight rating codes Seven Seas uses as marker ids under `div.age-rating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRating {
    AllAges,
    Teen,
    TenPlus,
    OlderTeen,
    OlderTeen15,
    OlderTeen17,
    ForReaders17,
    Mature,
}

impl AgeRating {
    pub fn from_id(id: &str) -> Option<AgeRating> {
        match id {
            "allages" => Some(AgeRating::AllAges),
            "teen" => Some(AgeRating::Teen),
            "tenplus" => Some(AgeRating::TenPlus),
            "olderteen" => Some(AgeRating::OlderTeen),
            "olderteen15" => Some(AgeRating::OlderTeen15),
            "olderteen17" => Some(AgeRating::OlderTeen17),
            "forreaders17" => Some(AgeRating::ForReaders17),
            "mature" => Some(AgeRating::Mature),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Option<AgeRating> {
        match label {
            "All Ages" => Some(AgeRating::AllAges),
            "Teen" => Some(AgeRating::Teen),
            "Ten Plus" => Some(AgeRating::TenPlus),
            "Older Teen" => Some(AgeRating::OlderTeen),
            "Older Teen (15+)" => Some(AgeRating::OlderTeen15),
            "Older Teen (17+)" => Some(AgeRating::OlderTeen17),
            "For Readers 17+" => Some(AgeRating::ForReaders17),
            "Mature" => Some(AgeRating::Mature),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeRating::AllAges => "All Ages",
            AgeRating::Teen => "Teen",
            AgeRating::TenPlus => "Ten Plus",
            AgeRating::OlderTeen => "Older Teen",
            AgeRating::OlderTeen15 => "Older Teen (15+)",
            AgeRating::OlderTeen17 => "Older Teen (17+)",
            AgeRating::ForReaders17 => "For Readers 17+",
            AgeRating::Mature => "Mature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Writer,
    Artist,
    Translator,
    Adaptation,
    Lettering,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffMember {
    pub name: String,
    pub link: Option<String>,
    pub role: StaffRole,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Genre {
    pub genre: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    pub value: f64,
    /// ISO 4217
    pub iso_code: String,
}

impl Price {
    pub fn usd(value: f64) -> Price {
        Price {
            value,
            iso_code: String::from("USD"),
        }
    }
}
