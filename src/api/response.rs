use crate::api::xml;
use crate::error::{CatApiError, Result};
use serde_json::Value;

/// Unwrap a normalized `<response>` document.
///
/// An `apierror` child turns into [`CatApiError::Api`] carrying the service's
/// message; otherwise the `data` child is returned (`Null` when absent).
pub fn unwrap_envelope(document: &Value) -> Result<Value> {
    let response = document
        .get("response")
        .ok_or_else(|| CatApiError::Decode("missing <response> element".to_string()))?;

    if let Some(api_error) = response.get("apierror") {
        let message = match api_error {
            Value::String(message) => message.clone(),
            other => other
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error")
                .to_string(),
        };
        log::debug!("service reported an error: {}", message);
        return Err(CatApiError::Api(message));
    }

    Ok(response.get("data").cloned().unwrap_or(Value::Null))
}

/// Parse a raw XML body and unwrap its envelope.
pub fn normalize(body: &str) -> Result<Value> {
    let document = xml::to_value(body)?;
    unwrap_envelope(&document)
}
