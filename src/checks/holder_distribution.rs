use crate::scoring::thresholds::ScoringThresholds;
use crate::types::*;
use serde_json::json;

use super::{build_result, tier, tier_delta};

pub fn check_holder_distribution(metadata: &TokenMetadata, thresholds: &ScoringThresholds) -> CheckResult {
    let count = metadata.holder_count;
    let status = tier(count, thresholds.holders_low, thresholds.holders_mid);

    let reason = match status {
        CheckStatus::Fail => Some("Too few holders"),
        CheckStatus::Warn => Some("Limited holder base"),
        CheckStatus::Pass => None,
    };

    build_result(
        "holder_distribution",
        status,
        reason,
        vec![("holder_count", json!(count))],
        tier_delta(status, &thresholds.holders),
    )
}
