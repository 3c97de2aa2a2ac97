// src/checks/mod.rs

pub mod holder_distribution;
pub mod liquidity;
pub mod token_age;
pub mod name_sanity;
pub mod contract_flags;
pub mod honeypot;

// Re-export check functions
pub use holder_distribution::check_holder_distribution;
pub use liquidity::check_liquidity;
pub use token_age::check_token_age;
pub use name_sanity::check_name_sanity;
pub use contract_flags::{check_mint_function, check_ownership_renounced, check_contract_verified};
pub use honeypot::check_honeypot;

use crate::scoring::thresholds::{Delta, TieredDeltas};
use crate::types::{CheckResult, CheckStatus};
use serde_json::Value;
use std::collections::BTreeMap;

/// Places `value` into FAIL (< low), WARN (< mid) or PASS.
pub(crate) fn tier<T: PartialOrd>(value: T, low: T, mid: T) -> CheckStatus {
    if value < low {
        CheckStatus::Fail
    } else if value < mid {
        CheckStatus::Warn
    } else {
        CheckStatus::Pass
    }
}

pub(crate) fn tier_delta(status: CheckStatus, deltas: &TieredDeltas) -> Delta {
    match status {
        CheckStatus::Fail => deltas.fail,
        CheckStatus::Warn => deltas.warn,
        CheckStatus::Pass => deltas.pass,
    }
}

pub(crate) fn build_result(
    id: &str,
    status: CheckStatus,
    reason: Option<&str>,
    observed: Vec<(&str, Value)>,
    delta: Delta,
) -> CheckResult {
    CheckResult {
        id: id.to_string(),
        status,
        reason: reason.map(str::to_string),
        observed: observed
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<BTreeMap<_, _>>(),
        score_delta: delta.score,
        risk_delta: delta.risk,
    }
}
