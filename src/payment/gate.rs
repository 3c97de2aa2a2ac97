//! x402 payment gate middleware
//!
//! Sits in front of the scoring route. In free mode every request passes.
//! Otherwise the request must carry `Authorization: Bearer <proof>` and the
//! configured verifier must accept the proof; any failure short-circuits to
//! a 402 carrying the payment terms. Nothing is remembered between requests.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::PaymentError;
use crate::error::OracleError;
use crate::server::AppState;

/// Pulls the proof out of a bearer Authorization header.
pub fn extract_bearer_proof(headers: &HeaderMap) -> Result<&str, PaymentError> {
    let header = headers.get(AUTHORIZATION).ok_or(PaymentError::Missing)?;
    let value = header
        .to_str()
        .map_err(|_| PaymentError::Malformed("Authorization header is not valid ASCII".to_string()))?;

    let (scheme, proof) = value
        .trim()
        .split_once(' ')
        .ok_or_else(|| PaymentError::Malformed("Authorization header must use Bearer scheme".to_string()))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(PaymentError::Malformed("Authorization header must use Bearer scheme".to_string()));
    }

    let proof = proof.trim();
    if proof.is_empty() {
        return Err(PaymentError::Malformed("Bearer proof is empty".to_string()));
    }
    Ok(proof)
}

pub async fn payment_gate(State(state): State<Arc<AppState>>, request: Request, next: Next) -> Response {
    if state.config.free_mode {
        return next.run(request).await;
    }

    let terms = state.config.payment_terms();

    // Owned copy: the request body is not Sync, so no borrow may cross the await
    let proof = extract_bearer_proof(request.headers()).map(str::to_string);

    let outcome = match proof {
        Ok(proof) => state.verifier.verify(&proof, &terms).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(()) => {
            tracing::debug!(verifier = state.verifier.verifier_name(), "Payment accepted");
            next.run(request).await
        }
        Err(err) => {
            tracing::warn!(
                verifier = state.verifier.verifier_name(),
                error = %err,
                "Payment rejected"
            );
            OracleError::PaymentRequired {
                terms,
                reason: err.to_string(),
            }
            .into_response()
        }
    }
}
