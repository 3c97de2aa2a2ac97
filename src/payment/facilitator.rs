use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::{PaymentError, PaymentTerms, PaymentVerifier};

const RETRY_BACKOFF: Duration = Duration::from_millis(100);

/// Delegates proof checks to an external x402 facilitator.
///
/// Each attempt is bounded by the client timeout. Transient failures
/// (timeout, connection error, 5xx) are retried up to `max_retries` extra
/// times; anything else rejects immediately.
pub struct FacilitatorVerifier {
    client: reqwest::Client,
    verify_url: String,
    max_retries: u32,
}

#[derive(Debug, Deserialize)]
struct VerifyReply {
    valid: bool,
    #[serde(default)]
    reason: Option<String>,
}

impl FacilitatorVerifier {
    pub fn new(base_url: &str, timeout: Duration, max_retries: u32) -> Result<Self, PaymentError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        Ok(Self {
            client,
            verify_url: format!("{}/verify", base_url.trim_end_matches('/')),
            max_retries,
        })
    }

    async fn verify_once(&self, proof: &str, terms: &PaymentTerms) -> Result<(), PaymentError> {
        let body = json!({
            "proof": proof,
            "amount": terms.price,
            "token": terms.token,
            "pay_to": terms.pay_to,
        });

        let response = self
            .client
            .post(&self.verify_url)
            .json(&body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PaymentError::UpstreamStatus(status.as_u16()));
        }

        let reply: VerifyReply = response
            .json()
            .await
            .map_err(|e| PaymentError::InvalidResponse(e.to_string()))?;

        if reply.valid {
            Ok(())
        } else {
            Err(PaymentError::Rejected(
                reply.reason.unwrap_or_else(|| "facilitator declined proof".to_string()),
            ))
        }
    }
}

fn classify(err: reqwest::Error) -> PaymentError {
    if err.is_timeout() {
        PaymentError::Timeout
    } else {
        PaymentError::Network(err.to_string())
    }
}

#[async_trait]
impl PaymentVerifier for FacilitatorVerifier {
    fn verifier_name(&self) -> &str {
        "facilitator"
    }

    async fn verify(&self, proof: &str, terms: &PaymentTerms) -> Result<(), PaymentError> {
        let mut attempt = 0;
        loop {
            match self.verify_once(proof, terms).await {
                Ok(()) => return Ok(()),
                Err(err) if err.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        error = %err,
                        attempt,
                        max_retries = self.max_retries,
                        "Transient facilitator failure, retrying"
                    );
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
