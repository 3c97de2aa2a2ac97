use crate::config::OracleConfig;
use crate::scoring::{score_token, ScoringThresholds};
use crate::types::*;
use super::types::*;
use std::time::{SystemTime, UNIX_EPOCH};

/// Scores a validated request and wraps the verdict in the response envelope.
pub fn check(request: CheckRequest, thresholds: &ScoringThresholds, config: &OracleConfig) -> CheckResponse {
    let verdict = score_token(&request, thresholds);
    envelope(request, verdict, current_timestamp(), config)
}

pub fn envelope(request: CheckRequest, verdict: SafetyVerdict, timestamp: u64, config: &OracleConfig) -> CheckResponse {
    CheckResponse {
        safe: verdict.safe,
        safety_score: verdict.safety_score,
        rug_pull_risk: verdict.rug_pull_risk,
        is_honeypot: verdict.is_honeypot,
        recommendation: verdict.recommendation,
        checks: verdict.checks,
        chain: request.chain,
        token_address: request.token_address,
        pool_address: request.pool_address,
        dex: request.dex,
        timestamp,
        x402: PaymentInfo {
            price: config.price_per_check,
            token: config.payment_token.clone(),
            free_mode: config.free_mode,
        },
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> CheckRequest {
        CheckRequest {
            chain: Chain::Base,
            token_address: "0xfeed".to_string(),
            pool_address: Some("0xpool".to_string()),
            dex: None,
            metadata: TokenMetadata {
                holder_count: 2500,
                liquidity_usd: 250_000.0,
                age_minutes: 1440,
                name: "Degen".to_string(),
                is_verified: true,
                owner_renounced: true,
                ..TokenMetadata::default()
            },
        }
    }

    #[test]
    fn test_envelope_carries_request_identity() {
        let config = OracleConfig::default();
        let response = check(request(), &ScoringThresholds::default(), &config);

        assert_eq!(response.chain, Chain::Base);
        assert_eq!(response.token_address, "0xfeed");
        assert_eq!(response.pool_address.as_deref(), Some("0xpool"));
        assert!(response.timestamp > 0);
        assert_eq!(response.x402.token, "USDC");
        assert!(!response.x402.free_mode);
    }

    #[test]
    fn test_envelope_serialization_shape() {
        let config = OracleConfig::default();
        let verdict = score_token(&request(), &ScoringThresholds::default());
        let value = serde_json::to_value(envelope(request(), verdict, 1_700_000_000, &config)).unwrap();

        assert_eq!(value["chain"], json!("base"));
        assert_eq!(value["timestamp"], json!(1_700_000_000u64));
        assert_eq!(value["safe"], json!(true));
        assert!(value.get("dex").is_none());
        assert_eq!(value["checks"]["name_check"], json!("PASS"));
        assert_eq!(value["x402"]["price"], json!(0.01));
    }
}
