use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{PaymentError, PaymentTerms, PaymentVerifier};

/// Accepts a fixed set of proofs and counts how often it was asked.
pub struct MockVerifier {
    pub name: String,
    pub accepted: HashSet<String>,
    calls: AtomicUsize,
}

impl MockVerifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            accepted: HashSet::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn accepting(mut self, proof: &str) -> Self {
        self.accepted.insert(proof.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentVerifier for MockVerifier {
    fn verifier_name(&self) -> &str {
        &self.name
    }

    async fn verify(&self, proof: &str, _terms: &PaymentTerms) -> Result<(), PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.accepted.contains(proof) {
            Ok(())
        } else {
            Err(PaymentError::Rejected("unknown proof".to_string()))
        }
    }
}
