use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::OracleError;
use crate::types::*;

/// `POST /check` body as it arrives on the wire. Everything is optional here
/// so that validation can name the offending field instead of failing in
/// the JSON extractor.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CheckRequestBody {
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub pool_address: Option<String>,
    #[serde(default)]
    pub dex: Option<String>,
    #[serde(default)]
    pub metadata: Option<MetadataBody>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MetadataBody {
    pub holder_count: Option<i64>,
    pub liquidity_usd: Option<f64>,
    /// Fractional minutes are accepted and truncated.
    pub age_minutes: Option<f64>,
    pub name: Option<String>,
    pub is_verified: Option<bool>,
    pub has_mint_function: Option<bool>,
    pub has_burn_function: Option<bool>,
    pub owner_renounced: Option<bool>,
    pub flagged_honeypot: Option<bool>,
}

impl TryFrom<CheckRequestBody> for CheckRequest {
    type Error = OracleError;

    fn try_from(body: CheckRequestBody) -> Result<Self, Self::Error> {
        let raw_chain = body
            .chain
            .ok_or_else(|| OracleError::validation("chain", "is required"))?;
        let chain = raw_chain
            .parse::<Chain>()
            .map_err(|_| OracleError::UnsupportedChain(raw_chain.clone()))?;

        let token_address = body.token_address.unwrap_or_default().trim().to_string();
        if token_address.is_empty() {
            return Err(OracleError::validation("token_address", "is required"));
        }

        let metadata = match body.metadata {
            Some(metadata) => metadata.try_into()?,
            None => TokenMetadata::default(),
        };

        Ok(CheckRequest {
            chain,
            token_address,
            pool_address: non_blank(body.pool_address),
            dex: non_blank(body.dex),
            metadata,
        })
    }
}

impl TryFrom<MetadataBody> for TokenMetadata {
    type Error = OracleError;

    fn try_from(body: MetadataBody) -> Result<Self, Self::Error> {
        let holder_count = match body.holder_count {
            Some(count) if count < 0 => {
                return Err(OracleError::validation("metadata.holder_count", "must be non-negative"))
            }
            Some(count) => count as u64,
            None => 0,
        };

        let liquidity_usd = match body.liquidity_usd {
            Some(usd) if !usd.is_finite() || usd < 0.0 => {
                return Err(OracleError::validation(
                    "metadata.liquidity_usd",
                    "must be a non-negative number",
                ))
            }
            Some(usd) => usd,
            None => 0.0,
        };

        let age_minutes = match body.age_minutes {
            Some(age) if !age.is_finite() || age < 0.0 => {
                return Err(OracleError::validation(
                    "metadata.age_minutes",
                    "must be a non-negative number",
                ))
            }
            Some(age) => age.trunc() as u64,
            None => 0,
        };

        Ok(TokenMetadata {
            holder_count,
            liquidity_usd,
            age_minutes,
            name: body.name.unwrap_or_default(),
            is_verified: body.is_verified.unwrap_or(false),
            has_mint_function: body.has_mint_function.unwrap_or(false),
            has_burn_function: body.has_burn_function.unwrap_or(false),
            owner_renounced: body.owner_renounced.unwrap_or(false),
            flagged_honeypot: body.flagged_honeypot.unwrap_or(false),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[derive(Clone, Debug, Serialize)]
pub struct CheckResponse {
    pub safe: bool,
    pub safety_score: u8,
    pub rug_pull_risk: u8,
    pub is_honeypot: bool,
    pub recommendation: String,
    pub checks: BTreeMap<String, serde_json::Value>,
    pub chain: Chain,
    pub token_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dex: Option<String>,
    pub timestamp: u64,
    pub x402: PaymentInfo,
}

#[derive(Clone, Debug, Serialize)]
pub struct PaymentInfo {
    pub price: f64,
    pub token: String,
    pub free_mode: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub free_mode: bool,
    pub supported_chains: usize,
    pub chain_ids: Vec<&'static str>,
    pub checks_served: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChainInfo {
    pub key: Chain,
    pub name: &'static str,
    pub chain_id: ChainId,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChainsResponse {
    pub chains: Vec<ChainInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: serde_json::Value) -> CheckRequestBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_metadata_defaults() {
        let request = CheckRequest::try_from(body(json!({
            "chain": "solana",
            "token_address": "Tkn1",
        })))
        .unwrap();

        assert_eq!(request.chain, Chain::Solana);
        assert_eq!(request.metadata, TokenMetadata::default());
        assert_eq!(request.pool_address, None);
    }

    #[test]
    fn test_partial_metadata_defaults_rest() {
        let request = CheckRequest::try_from(body(json!({
            "chain": "Ethereum",
            "token_address": "0xabc",
            "pool_address": "  ",
            "dex": "uniswap",
            "metadata": { "holder_count": 12, "age_minutes": 4.9 },
        })))
        .unwrap();

        assert_eq!(request.chain, Chain::Ethereum);
        assert_eq!(request.metadata.holder_count, 12);
        assert_eq!(request.metadata.age_minutes, 4);
        assert_eq!(request.metadata.liquidity_usd, 0.0);
        assert!(!request.metadata.owner_renounced);
        assert_eq!(request.pool_address, None);
        assert_eq!(request.dex.as_deref(), Some("uniswap"));
    }

    #[test]
    fn test_unsupported_chain() {
        let err = CheckRequest::try_from(body(json!({
            "chain": "dogecoin",
            "token_address": "D123",
        })))
        .unwrap_err();

        assert_eq!(err, OracleError::UnsupportedChain("dogecoin".to_string()));
    }

    #[test]
    fn test_required_fields_named() {
        let err = CheckRequest::try_from(body(json!({ "token_address": "x" }))).unwrap_err();
        assert!(matches!(err, OracleError::Validation { ref field, .. } if field == "chain"));

        let err = CheckRequest::try_from(body(json!({ "chain": "base", "token_address": " " }))).unwrap_err();
        assert!(matches!(err, OracleError::Validation { ref field, .. } if field == "token_address"));
    }

    #[test]
    fn test_negative_metadata_rejected() {
        for (key, value) in [("holder_count", json!(-1)), ("liquidity_usd", json!(-0.5)), ("age_minutes", json!(-3))] {
            let mut metadata = serde_json::Map::new();
            metadata.insert(key.to_string(), value);

            let err = CheckRequest::try_from(body(json!({
                "chain": "base",
                "token_address": "0xabc",
                "metadata": metadata,
            })))
            .unwrap_err();

            let expected = format!("metadata.{}", key);
            assert!(
                matches!(err, OracleError::Validation { ref field, .. } if *field == expected),
                "{} should be rejected",
                key
            );
        }
    }
}
