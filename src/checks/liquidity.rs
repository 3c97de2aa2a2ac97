use crate::scoring::thresholds::ScoringThresholds;
use crate::types::*;
use serde_json::json;

use super::{build_result, tier, tier_delta};

pub fn check_liquidity(metadata: &TokenMetadata, thresholds: &ScoringThresholds) -> CheckResult {
    let liquidity = metadata.liquidity_usd;
    let status = tier(
        liquidity,
        thresholds.liquidity_min_usd,
        thresholds.liquidity_healthy_usd,
    );

    let reason = match status {
        CheckStatus::Fail => Some("Low liquidity"),
        CheckStatus::Warn => Some("Thin liquidity"),
        CheckStatus::Pass => None,
    };

    build_result(
        "liquidity_check",
        status,
        reason,
        vec![("liquidity_usd", json!(liquidity))],
        tier_delta(status, &thresholds.liquidity),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_liquidity(liquidity_usd: f64) -> TokenMetadata {
        TokenMetadata {
            liquidity_usd,
            ..TokenMetadata::default()
        }
    }

    #[test]
    fn test_no_liquidity_fail_raises_risk() {
        let t = ScoringThresholds::default();
        let result = check_liquidity(&with_liquidity(0.0), &t);

        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.verdict(), "FAIL - Low liquidity");
        assert_eq!(result.risk_delta, t.liquidity.fail.risk);
        assert!(result.risk_delta > 0);
    }

    #[test]
    fn test_thin_liquidity_warns() {
        let result = check_liquidity(&with_liquidity(25_000.0), &ScoringThresholds::default());

        assert_eq!(result.status, CheckStatus::Warn);
    }

    #[test]
    fn test_healthy_floor_passes() {
        let result = check_liquidity(&with_liquidity(50_000.0), &ScoringThresholds::default());

        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.observed["liquidity_usd"], json!(50_000.0));
    }
}
