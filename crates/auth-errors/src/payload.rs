//! Error-description payload shape
//!
//! The identity provider reports failures as a JSON body of the form
//! `{ "error": "<code>", "error_description": "<message>" }`. Every
//! `AuthError` converts into this shape, and a `Generic` error can be
//! built back from it.

use serde::{Deserialize, Serialize};

/// Decoded `{error, error_description}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Machine-readable error code
    pub error: String,
    /// Human-readable description
    pub error_description: String,
}

/// Failure to decode an error payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed error payload: {0}")]
    Malformed(String),
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>, error_description: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_description: error_description.into(),
        }
    }

    /// Decode a payload from a JSON string.
    ///
    /// Both fields are required; a body missing either one is rejected
    /// instead of producing a half-empty error.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::Malformed(e.to_string()))
    }
}

impl TryFrom<serde_json::Value> for ErrorPayload {
    type Error = PayloadError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value).map_err(|e| PayloadError::Malformed(e.to_string()))
    }
}
