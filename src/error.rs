//! Request-level errors and their HTTP rendering.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::payment::PaymentTerms;
use crate::types::Chain;

#[derive(Debug, Error, PartialEq)]
pub enum OracleError {
    /// A request field is missing, malformed or out of range.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    /// Missing, malformed or declined payment proof.
    #[error("Payment required: {reason}")]
    PaymentRequired { terms: PaymentTerms, reason: String },
}

impl OracleError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        OracleError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Blames the offending field when the body parsed as JSON but a value
    /// had the wrong type, and the body as a whole otherwise.
    pub fn from_json_rejection(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let field = match rejection {
            JsonRejection::JsonDataError(_) => rejected_field(&message).unwrap_or("body"),
            _ => "body",
        };
        OracleError::validation(field, message.clone())
    }
}

/// Pulls `metadata.holder_count` out of
/// "Failed to deserialize the JSON body into the target type: metadata.holder_count: invalid type ...".
fn rejected_field(body_text: &str) -> Option<&str> {
    let (_, rest) = body_text.split_once("target type: ")?;
    let (path, _) = rest.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));
    is_path.then_some(path)
}

impl IntoResponse for OracleError {
    fn into_response(self) -> Response {
        match self {
            OracleError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("{}: {}", field, message),
                    "field": field,
                })),
            )
                .into_response(),
            OracleError::UnsupportedChain(chain) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("Unsupported chain: {}", chain),
                    "field": "chain",
                    "supported_chains": Chain::keys(),
                })),
            )
                .into_response(),
            OracleError::PaymentRequired { terms, reason } => (
                StatusCode::PAYMENT_REQUIRED,
                Json(json!({
                    "error": "Payment required",
                    "message": "Valid x402 payment proof required",
                    "reason": reason,
                    "scheme": "x402",
                    "price": terms.price,
                    "token": terms.token,
                    "pay_to": terms.pay_to,
                })),
            )
                .into_response(),
        }
    }
}
