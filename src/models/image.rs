use super::one_or_many;
use crate::error::{CatApiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An image entry as returned by `images/get`, `images/getvotes` and
/// `images/getfavourites`. Which optional fields are present depends on
/// the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<String>,
}

impl Image {
    /// Extract every `images/image` entry from a success payload.
    pub fn list_from(payload: &Value) -> Result<Vec<Image>> {
        one_or_many(payload, &["images", "image"])
            .into_iter()
            .map(|item| serde_json::from_value(item.clone()).map_err(CatApiError::from))
            .collect()
    }
}
