//! Uniform response envelope.

use serde::{Deserialize, Serialize};

use crate::validation::FieldErrors;

/// Envelope compartido por ambos servicios.
///
/// Every endpoint answers with this shape. `cached` is present only on
/// cache-aside read responses and reports whether the reader served a
/// hit; `errors` is present only on validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable outcome description
    pub message: String,

    /// Payload, omitted when there is nothing to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Read responses only: true when served from cache
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,

    /// Validation failures keyed by field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T> ApiResponse<T> {
    /// Successful response with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            cached: None,
            errors: None,
        }
    }

    /// Successful cache-aside read response.
    pub fn read(message: impl Into<String>, data: T, cached: bool) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            cached: Some(cached),
            errors: None,
        }
    }

    /// Successful response without a payload.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            cached: None,
            errors: None,
        }
    }

    /// Failure response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            cached: None,
            errors: None,
        }
    }

    /// Validation failure with field-level detail.
    pub fn validation(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            cached: None,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_absent_fields() {
        let response = ApiResponse::<()>::message_only("Post deleted successfully");
        let json = serde_json::to_value(&response).unwrap();

        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["success"], true);
        assert_eq!(obj["message"], "Post deleted successfully");
    }

    #[test]
    fn read_response_carries_cached_flag() {
        let response = ApiResponse::read("Posts retrieved from cache", vec![1, 2], true);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["cached"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn validation_response_carries_errors() {
        let mut errors = FieldErrors::new();
        errors
            .entry("title".to_string())
            .or_default()
            .push("The title field is required.".to_string());

        let response = ApiResponse::<()>::validation("Validation failed", errors);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["errors"]["title"][0], "The title field is required.");
    }
}
