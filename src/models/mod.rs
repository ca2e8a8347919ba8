mod catalog;
mod category;
mod image;

pub use catalog::{CategoryName, FavouriteAction, ImageSize, ImageType};
pub use category::Category;
pub use image::Image;

use serde_json::Value;

/// Follow `path` through nested objects and return the node as a list.
///
/// The XML normalizer yields an object for a single repeated element and an
/// array once it appears twice, so both shapes are accepted here. A missing
/// node, or an empty `{}` container, yields an empty list.
pub fn one_or_many<'a>(payload: &'a Value, path: &[&str]) -> Vec<&'a Value> {
    let mut node = payload;
    for key in path {
        match node.get(key) {
            Some(next) => node = next,
            None => return Vec::new(),
        }
    }

    match node {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        Value::Null => Vec::new(),
        other => vec![other],
    }
}
