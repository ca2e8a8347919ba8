pub const API_KEY_ENV: &str = "CATAPI_API_KEY";
pub const BASE_URL_ENV: &str = "CATAPI_BASE_URL";
pub const VERBOSE_ENV: &str = "CATAPI_VERBOSE";

pub fn default_base_url() -> String {
    crate::api::DEFAULT_BASE_URL.to_string()
}

pub fn default_verbose() -> bool {
    false
}

/// Accepts the usual spellings of "on" for boolean environment variables.
pub fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Empty values count as unset at every configuration layer.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
