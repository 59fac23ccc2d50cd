//! Top-level search response and the per-volume item record.

use serde::{Deserialize, Serialize};

use crate::DecodeError;

use super::de::null_as_default;
use super::{AccessInfo, SaleInfo, VolumeInfo};

/// Decoded body of a volume search.
///
/// `items` holds at most one page of results (10 by default, 40 at most)
/// and is usually shorter than `total_items`; page through the rest with
/// `startIndex`/`maxResults`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// Number of volumes matching the query across all pages.
    pub total_items: i64,

    /// Volumes on this page. Absent from the body when nothing matched.
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Item>,
}

impl SearchResponse {
    /// Decodes a response body.
    ///
    /// Everything except `totalItems` may be missing or `null` and falls back
    /// to an empty value; unknown fields are ignored.
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// True when this page carries no volumes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One volume in a search response.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    /// Volume ID, e.g. `Ro7yU7hjBZUC`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub etag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub self_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub volume_info: VolumeInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub sale_info: SaleInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub access_info: AccessInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub search_info: SearchInfo,
}

/// Text matched by the query.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchInfo {
    /// HTML snippet around the match.
    #[serde(deserialize_with = "null_as_default")]
    pub text_snippet: String,
}
