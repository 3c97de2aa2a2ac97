// src/types.rs

use candid::{CandidType, Deserialize};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CandidType, Serialize, Deserialize)]
pub enum Chain {
    #[serde(rename = "solana")]
    Solana,
    #[serde(rename = "ethereum")]
    Ethereum,
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "arbitrum")]
    Arbitrum,
    #[serde(rename = "polygon")]
    Polygon,
}

impl Chain {
    pub const ALL: [Chain; 5] = [
        Chain::Solana,
        Chain::Ethereum,
        Chain::Base,
        Chain::Arbitrum,
        Chain::Polygon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Solana => "solana",
            Chain::Ethereum => "ethereum",
            Chain::Base => "base",
            Chain::Arbitrum => "arbitrum",
            Chain::Polygon => "polygon",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Chain::Solana => "Solana",
            Chain::Ethereum => "Ethereum",
            Chain::Base => "Base",
            Chain::Arbitrum => "Arbitrum",
            Chain::Polygon => "Polygon",
        }
    }

    pub fn chain_id(&self) -> ChainId {
        match self {
            Chain::Solana => ChainId::Named("solana-mainnet"),
            Chain::Ethereum => ChainId::Evm(1),
            Chain::Base => ChainId::Evm(8453),
            Chain::Arbitrum => ChainId::Evm(42161),
            Chain::Polygon => ChainId::Evm(137),
        }
    }

    /// Contract flag checks only apply to EVM chains.
    pub fn is_evm(&self) -> bool {
        !matches!(self, Chain::Solana)
    }

    pub fn keys() -> Vec<&'static str> {
        Chain::ALL.iter().map(Chain::as_str).collect()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solana" => Ok(Chain::Solana),
            "ethereum" => Ok(Chain::Ethereum),
            "base" => Ok(Chain::Base),
            "arbitrum" => Ok(Chain::Arbitrum),
            "polygon" => Ok(Chain::Polygon),
            _ => Err(format!("Unsupported chain: {}", s)),
        }
    }
}

/// Solana reports a cluster name, EVM chains a numeric chain id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChainId {
    Named(&'static str),
    Evm(u64),
}

/// Caller-supplied token facts with every default already applied.
#[derive(Clone, Debug, Default, PartialEq, CandidType, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub holder_count: u64,
    pub liquidity_usd: f64,
    pub age_minutes: u64,
    pub name: String,
    pub is_verified: bool,
    pub has_mint_function: bool,
    pub has_burn_function: bool,
    pub owner_renounced: bool,
    pub flagged_honeypot: bool,
}

/// A request that has passed boundary validation.
#[derive(Clone, Debug, PartialEq, CandidType, Serialize, Deserialize)]
pub struct CheckRequest {
    pub chain: Chain,
    pub token_address: String,
    pub pool_address: Option<String>,
    pub dex: Option<String>,
    pub metadata: TokenMetadata,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => f.write_str("PASS"),
            CheckStatus::Warn => f.write_str("WARN"),
            CheckStatus::Fail => f.write_str("FAIL"),
        }
    }
}

// Raw metrics stay as serde_json::Value so each check can report its own shape
#[derive(Clone, Debug, PartialEq)]
pub struct CheckResult {
    pub id: String,
    pub status: CheckStatus,
    pub reason: Option<String>,
    pub observed: BTreeMap<String, serde_json::Value>,
    pub score_delta: i32,
    pub risk_delta: i32,
}

impl CheckResult {
    /// "PASS", or "FAIL - Too few holders" when a reason is attached.
    pub fn verdict(&self) -> String {
        match &self.reason {
            Some(reason) => format!("{} - {}", self.status, reason),
            None => self.status.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SafetyVerdict {
    pub safe: bool,
    pub safety_score: u8,
    pub rug_pull_risk: u8,
    pub is_honeypot: bool,
    pub recommendation: String,
    pub checks: BTreeMap<String, serde_json::Value>,
}
