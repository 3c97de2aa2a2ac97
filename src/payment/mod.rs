// src/payment/mod.rs

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// What a client must pay for a single check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentTerms {
    pub price: f64,
    pub token: String,
    pub pay_to: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum PaymentError {
    #[error("missing Authorization header")]
    Missing,
    #[error("malformed payment proof: {0}")]
    Malformed(String),
    #[error("payment rejected: {0}")]
    Rejected(String),
    #[error("payment verification timed out")]
    Timeout,
    #[error("payment verifier unreachable: {0}")]
    Network(String),
    #[error("payment verifier returned status {0}")]
    UpstreamStatus(u16),
    #[error("invalid verifier response: {0}")]
    InvalidResponse(String),
}

impl PaymentError {
    /// Worth another attempt against an external verifier.
    pub fn is_transient(&self) -> bool {
        match self {
            PaymentError::Timeout | PaymentError::Network(_) => true,
            PaymentError::UpstreamStatus(status) => *status >= 500,
            _ => false,
        }
    }
}

/// Decides whether a bearer proof pays for one check under the given terms.
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    fn verifier_name(&self) -> &str;

    async fn verify(&self, proof: &str, terms: &PaymentTerms) -> Result<(), PaymentError>;
}

// Module declarations
pub mod bearer;
pub mod facilitator;
pub mod gate;
pub mod mocks;

pub use bearer::BearerProofVerifier;
pub use facilitator::FacilitatorVerifier;
pub use gate::{extract_bearer_proof, payment_gate};
pub use mocks::MockVerifier;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(PaymentError::Timeout.is_transient());
        assert!(PaymentError::Network("reset".into()).is_transient());
        assert!(PaymentError::UpstreamStatus(503).is_transient());

        assert!(!PaymentError::UpstreamStatus(400).is_transient());
        assert!(!PaymentError::Rejected("insufficient".into()).is_transient());
        assert!(!PaymentError::InvalidResponse("not json".into()).is_transient());
        assert!(!PaymentError::Missing.is_transient());
    }
}
