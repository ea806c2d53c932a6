//! API error taxonomy and user-facing message extraction.
//!
//! ERROR HANDLING
//! ==============
//! The chat API reports validation problems as a field-keyed object of
//! message arrays (`{"username": ["Username is already taken."]}`). Screens
//! show those messages inline, so the body is flattened into one string and
//! each screen supplies its own fallback for everything else.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401: the token is missing, invalid, or revoked.
    #[error("unauthorized")]
    Unauthorized { body: Option<Value> },
    /// Any other non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, body: Option<Value> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: Option<Value>) -> Self {
        if status == 401 {
            Self::Unauthorized { body }
        } else {
            Self::Rejected { status, body }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message to show the user: the flattened response body when it has
    /// any text, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        let body = match self {
            Self::Unauthorized { body } | Self::Rejected { body, .. } => body.as_ref(),
            Self::Network(_) | Self::Decode(_) => None,
        };
        body.and_then(flatten_error_body)
            .unwrap_or_else(|| fallback.to_owned())
    }
}

/// Flatten an error body into a single space-joined string.
///
/// Strings are used verbatim. Objects and arrays contribute their entries in
/// order, expanding nested arrays/objects and skipping falsy scalars (`null`,
/// `false`, `0`, `""`). Returns `None` when nothing printable remains.
pub fn flatten_error_body(body: &Value) -> Option<String> {
    let mut parts = Vec::new();
    match body {
        Value::String(text) if !text.is_empty() => return Some(text.clone()),
        Value::Object(map) => map.values().for_each(|v| collect_parts(v, &mut parts)),
        Value::Array(items) => items.iter().for_each(|v| collect_parts(v, &mut parts)),
        _ => {}
    }
    if parts.is_empty() { None } else { Some(parts.join(" ")) }
}

fn collect_parts(value: &Value, parts: &mut Vec<String>) {
    match value {
        Value::Null | Value::Bool(false) => {}
        Value::Bool(true) => parts.push("true".to_owned()),
        Value::Number(n) => {
            if n.as_f64() != Some(0.0) {
                parts.push(n.to_string());
            }
        }
        Value::String(text) => {
            if !text.is_empty() {
                parts.push(text.clone());
            }
        }
        Value::Array(items) => items.iter().for_each(|v| collect_parts(v, parts)),
        Value::Object(map) => map.values().for_each(|v| collect_parts(v, parts)),
    }
}
