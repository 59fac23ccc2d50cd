//! Bibliographic metadata for a volume.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// Descriptive information about a volume.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher: String,
    /// Publication date as sent by the API: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub published_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// ISBNs and other identifiers, e.g. `{"type": "ISBN_13", "identifier": "9780321774637"}`.
    #[serde(deserialize_with = "null_as_default")]
    pub industry_identifiers: Vec<IndustryIdentifier>,
    #[serde(deserialize_with = "null_as_default")]
    pub page_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dimensions: Dimensions,
    /// `BOOK` or `MAGAZINE`.
    #[serde(deserialize_with = "null_as_default")]
    pub print_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub main_category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    /// Mean review rating, 1.0 to 5.0. Zero when unrated.
    #[serde(deserialize_with = "null_as_default")]
    pub average_rating: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub ratings_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub content_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_links: ImageLinks,
    /// Two-letter ISO-639-1 code of the volume's language.
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub preview_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub info_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub canonical_volume_link: String,
}

impl VolumeInfo {
    /// Returns the identifier of the given type, e.g. `"ISBN_13"`, if present.
    pub fn identifier(&self, kind: &str) -> Option<&str> {
        self.industry_identifiers
            .iter()
            .find(|id| id.kind == kind)
            .map(|id| id.identifier.as_str())
    }

    pub fn isbn_13(&self) -> Option<&str> {
        self.identifier("ISBN_13")
    }

    pub fn isbn_10(&self) -> Option<&str> {
        self.identifier("ISBN_10")
    }

    /// The publication date, when the API sent a full calendar date.
    pub fn published_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.published_date, "%Y-%m-%d").ok()
    }

    /// The publication year, which the API sends even for partial dates.
    pub fn published_year(&self) -> Option<i32> {
        let year = self.published_date.get(..4)?;
        if year.bytes().all(|b| b.is_ascii_digit()) {
            year.parse().ok()
        } else {
            None
        }
    }
}

/// An industry-standard identifier such as an ISBN.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct IndustryIdentifier {
    /// `ISBN_10`, `ISBN_13`, `ISSN` or `OTHER`.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,
}

/// Physical dimensions, with units, e.g. `"24.00 cm"`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Dimensions {
    #[serde(deserialize_with = "null_as_default")]
    pub height: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thickness: String,
}

/// Cover image URLs. The larger sizes only appear on single-volume lookups.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(deserialize_with = "null_as_default")]
    pub small_thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub small: String,
    #[serde(deserialize_with = "null_as_default")]
    pub medium: String,
    #[serde(deserialize_with = "null_as_default")]
    pub large: String,
    #[serde(deserialize_with = "null_as_default")]
    pub extra_large: String,
}

impl ImageLinks {
    /// The largest cover image available.
    pub fn best(&self) -> Option<&str> {
        [
            &self.extra_large,
            &self.large,
            &self.medium,
            &self.small,
            &self.thumbnail,
            &self.small_thumbnail,
        ]
        .into_iter()
        .find(|link| !link.is_empty())
        .map(|link| link.as_str())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{ImageLinks, IndustryIdentifier, VolumeInfo};

    fn volume(published_date: &str) -> VolumeInfo {
        VolumeInfo {
            published_date: published_date.to_string(),
            industry_identifiers: vec![
                IndustryIdentifier {
                    kind: "ISBN_10".to_string(),
                    identifier: "0321774639".to_string(),
                },
                IndustryIdentifier {
                    kind: "ISBN_13".to_string(),
                    identifier: "9780321774637".to_string(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_identifier_lookup() {
        let v = volume("2012");
        assert_eq!(v.isbn_13(), Some("9780321774637"));
        assert_eq!(v.isbn_10(), Some("0321774639"));
        assert_eq!(v.identifier("ISSN"), None);
    }

    #[test]
    fn test_published_date_variants() {
        assert_eq!(
            volume("2012-03-02").published_date(),
            NaiveDate::from_ymd_opt(2012, 3, 2)
        );
        assert_eq!(volume("2012-03").published_date(), None);
        assert_eq!(volume("2012-03").published_year(), Some(2012));
        assert_eq!(volume("2012").published_year(), Some(2012));
        assert_eq!(volume("").published_year(), None);
        assert_eq!(volume("19th century").published_year(), None);
    }

    #[test]
    fn test_best_image_prefers_largest() {
        let links = ImageLinks {
            small_thumbnail: "s".to_string(),
            thumbnail: "t".to_string(),
            medium: "m".to_string(),
            ..Default::default()
        };
        assert_eq!(links.best(), Some("m"));
        assert_eq!(ImageLinks::default().best(), None);
    }
}
