//! Reading access: viewability and downloadable formats.

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    /// `PARTIAL`, `ALL_PAGES`, `NO_PAGES` or `UNKNOWN`.
    #[serde(deserialize_with = "null_as_default")]
    pub viewability: String,
    #[serde(deserialize_with = "null_as_default")]
    pub embeddable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub public_domain: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub text_to_speech_permission: String,
    #[serde(deserialize_with = "null_as_default")]
    pub epub: Availability,
    #[serde(deserialize_with = "null_as_default")]
    pub pdf: Availability,
    #[serde(deserialize_with = "null_as_default")]
    pub web_reader_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub access_view_status: String,
}

/// Availability of one download format.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Availability {
    #[serde(deserialize_with = "null_as_default")]
    pub is_available: bool,
    /// Link used to obtain an access token for protected downloads.
    #[serde(deserialize_with = "null_as_default")]
    pub acs_token_link: String,
}
