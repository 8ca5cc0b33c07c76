//! REST error taxonomy and gateway error-body normalization.
//!
//! ERROR HANDLING
//! ==============
//! Every failure reaches callers as one `ApiError` whose `Display` is a
//! human-readable line suitable for inline rendering. Network failures stay
//! distinguishable from HTTP-level rejections.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Fallback when a failed response has no JSON body at all.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Message for requests that never received a response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` comes from the body's `detail` when present.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// No response was received.
    #[error("Network error occurred")]
    Network(String),
    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),
    /// A 2xx body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an `Http` error from a failed response's status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            message: http_error_message(status, body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(_) | Self::Encode(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Extract the gateway's `detail` message from an error body.
///
/// Non-JSON bodies yield [`GENERIC_ERROR_MESSAGE`]. JSON bodies without a
/// usable `detail` (absent, null, empty, `false` or zero) yield
/// `HTTP error! status: <code>`. Validation failures carry a list under
/// `detail`; those are rendered as compact JSON.
pub fn http_error_message(status: u16, body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return GENERIC_ERROR_MESSAGE.to_owned();
    };
    match parsed.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Null | Value::String(_) | Value::Bool(false)) | None => {
            format!("HTTP error! status: {status}")
        }
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON) => {
            format!("HTTP error! status: {status}")
        }
        Some(other) => other.to_string(),
    }
}
