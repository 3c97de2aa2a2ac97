use serde_json::{json, Value};

use crate::config::OracleConfig;
use crate::types::Chain;
use super::types::*;

pub const SERVICE_NAME: &str = "token-safety-oracle";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn health(config: &OracleConfig, checks_served: u64) -> HealthResponse {
    HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        free_mode: config.free_mode,
        supported_chains: Chain::ALL.len(),
        chain_ids: Chain::keys(),
        checks_served,
    }
}

pub fn chains() -> ChainsResponse {
    ChainsResponse {
        chains: Chain::ALL
            .iter()
            .map(|chain| ChainInfo {
                key: *chain,
                name: chain.display_name(),
                chain_id: chain.chain_id(),
            })
            .collect(),
    }
}

pub fn index(config: &OracleConfig) -> Value {
    json!({
        "service": "x402 Token Safety Oracle",
        "version": SERVICE_VERSION,
        "description": "Multi-chain token safety analysis with x402 micropayment support",
        "endpoints": {
            "/health": "Health check",
            "/check": "Check token safety (POST)",
            "/chains": "Get supported chains",
            "/": "This documentation",
        },
        "supported_chains": Chain::keys(),
        "x402": {
            "enabled": !config.free_mode,
            "price_per_check": config.price_per_check,
            "payment_token": config.payment_token,
        },
    })
}
