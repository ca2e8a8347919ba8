use super::one_or_many;
use crate::error::{CatApiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    /// Extract every `categories/category` entry from a `categories/list` payload.
    pub fn list_from(payload: &Value) -> Result<Vec<Category>> {
        one_or_many(payload, &["categories", "category"])
            .into_iter()
            .map(|item| serde_json::from_value(item.clone()).map_err(CatApiError::from))
            .collect()
    }
}
