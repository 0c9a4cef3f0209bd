//! Normalized JSON envelopes for failure responses.
//!
//! Every failure leaves the service in the same shape:
//! `{"detail": <string or field list>, "error_type": <tag>}`.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

use crate::validate::FieldViolation;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub detail: ErrorDetail,
    pub error_type: &'static str,
}

/// `detail` is a plain string except for validation failures, which carry
/// one entry per offending field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldViolation>),
}

/// 400 for a request body that could not be parsed as the expected shape.
pub fn malformed_input(detail: impl Into<String>) -> (StatusCode, Json<ErrorEnvelope>) {
    envelope(
        StatusCode::BAD_REQUEST,
        ErrorDetail::Message(detail.into()),
        "malformed_input",
    )
}

/// 422 with one reason per offending field.
pub fn validation_failed(violations: Vec<FieldViolation>) -> (StatusCode, Json<ErrorEnvelope>) {
    envelope(
        StatusCode::UNPROCESSABLE_ENTITY,
        ErrorDetail::Fields(violations),
        "validation_error",
    )
}

/// 400 carrying the provider's cleaned rejection message.
pub fn api_error(detail: impl Into<String>) -> (StatusCode, Json<ErrorEnvelope>) {
    envelope(
        StatusCode::BAD_REQUEST,
        ErrorDetail::Message(detail.into()),
        "api_error",
    )
}

/// 500 with a caller-safe detail. The underlying failure is logged, not leaked.
pub fn internal_error(detail: impl Into<String>) -> (StatusCode, Json<ErrorEnvelope>) {
    envelope(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorDetail::Message(detail.into()),
        "internal_error",
    )
}

fn envelope(
    status: StatusCode,
    detail: ErrorDetail,
    error_type: &'static str,
) -> (StatusCode, Json<ErrorEnvelope>) {
    (status, Json(ErrorEnvelope { detail, error_type }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_serializes_flat() {
        let (status, Json(body)) = api_error("The 'To' number is not a valid phone number.");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "detail": "The 'To' number is not a valid phone number.",
                "error_type": "api_error"
            })
        );
    }

    #[test]
    fn field_violations_serialize_as_list() {
        let (status, Json(body)) = validation_failed(vec![FieldViolation {
            field: "to",
            message: "bad recipient".to_string(),
        }]);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "detail": [{"field": "to", "message": "bad recipient"}],
                "error_type": "validation_error"
            })
        );
    }
}
