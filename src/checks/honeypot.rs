use crate::scoring::thresholds::{Delta, ScoringThresholds};
use crate::types::*;
use serde_json::json;

use super::build_result;

/// Honeypot heuristic, evaluated after every other check has contributed
/// its risk.
///
/// Fires when any of these holds:
/// - the caller flagged the token explicitly,
/// - liquidity is below the minimum while ownership is retained and the
///   contract is unverified,
/// - risk added on top of the baseline exceeds the trigger and the holder
///   base is tiny.
///
/// The result carries no delta; the aggregator applies the score cap and
/// risk floor when the status is FAIL.
pub fn check_honeypot(metadata: &TokenMetadata, added_risk: i32, thresholds: &ScoringThresholds) -> CheckResult {
    let locked_liquidity = metadata.liquidity_usd < thresholds.liquidity_min_usd
        && !metadata.owner_renounced
        && !metadata.is_verified;
    let crowded_risk = added_risk > thresholds.honeypot_risk_trigger
        && metadata.holder_count < thresholds.honeypot_holder_ceiling;

    let mut signals = Vec::new();
    if metadata.flagged_honeypot {
        signals.push("flagged");
    }
    if locked_liquidity {
        signals.push("low_liquidity_unrenounced_unverified");
    }
    if crowded_risk {
        signals.push("high_risk_few_holders");
    }

    if signals.is_empty() {
        build_result("honeypot_check", CheckStatus::Pass, None, vec![], Delta::ZERO)
    } else {
        build_result(
            "honeypot_check",
            CheckStatus::Fail,
            Some("Likely honeypot"),
            vec![("honeypot_signals", json!(signals))],
            Delta::ZERO,
        )
    }
}
