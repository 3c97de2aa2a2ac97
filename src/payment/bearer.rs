use async_trait::async_trait;

use super::{PaymentError, PaymentTerms, PaymentVerifier};

pub const MAX_PROOF_LEN: usize = 4096;

/// Local verifier used when no facilitator is configured.
///
/// Only the proof's shape is checked: non-empty, at most [`MAX_PROOF_LEN`]
/// bytes, printable ASCII with no whitespace. No settlement is confirmed.
#[derive(Clone, Debug, Default)]
pub struct BearerProofVerifier;

impl BearerProofVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentVerifier for BearerProofVerifier {
    fn verifier_name(&self) -> &str {
        "bearer"
    }

    async fn verify(&self, proof: &str, _terms: &PaymentTerms) -> Result<(), PaymentError> {
        if proof.is_empty() {
            return Err(PaymentError::Malformed("empty proof".to_string()));
        }
        if proof.len() > MAX_PROOF_LEN {
            return Err(PaymentError::Malformed(format!("proof exceeds {} bytes", MAX_PROOF_LEN)));
        }
        if !proof.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(PaymentError::Malformed("proof contains non-printable characters".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> PaymentTerms {
        PaymentTerms {
            price: 0.01,
            token: "USDC".to_string(),
            pay_to: "oracle".to_string(),
        }
    }

    #[tokio::test]
    async fn test_accepts_opaque_proof() {
        let verifier = BearerProofVerifier::new();

        assert!(verifier.verify("eyJ0eCI6IjB4YWJjIn0=", &terms()).await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_empty_and_oversized() {
        let verifier = BearerProofVerifier::new();

        assert!(matches!(verifier.verify("", &terms()).await, Err(PaymentError::Malformed(_))));

        let huge = "a".repeat(MAX_PROOF_LEN + 1);
        assert!(matches!(verifier.verify(&huge, &terms()).await, Err(PaymentError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_rejects_whitespace() {
        let verifier = BearerProofVerifier::new();

        assert!(verifier.verify("two parts", &terms()).await.is_err());
    }
}
