use crate::checks::*;
use crate::types::*;
use super::thresholds::ScoringThresholds;
use serde_json::Value;
use std::collections::BTreeMap;

pub const RECOMMENDATION_HONEYPOT: &str = "HONEYPOT DETECTED - Avoid";
pub const RECOMMENDATION_SAFE: &str = "SAFE - Low risk, recommended for trading";
pub const RECOMMENDATION_CAUTION: &str = "CAUTION - Moderate risk, do your own research";
pub const RECOMMENDATION_HIGH_RISK: &str = "HIGH RISK - Significant concerns identified";
pub const RECOMMENDATION_DANGER: &str = "DANGER - Extreme risk, avoid";

/// Scores a validated request. Pure: no I/O, no clock.
pub fn score_token(request: &CheckRequest, thresholds: &ScoringThresholds) -> SafetyVerdict {
    let mut checks = run_checks(request.chain, &request.metadata, thresholds);

    // Measured from the baseline, not from zero
    let added_risk = checks.iter().map(|c| c.risk_delta).sum::<i32>();
    checks.push(check_honeypot(&request.metadata, added_risk, thresholds));

    aggregate(&checks, thresholds)
}

/// Every independent check for the chain, honeypot excluded.
pub fn run_checks(chain: Chain, metadata: &TokenMetadata, thresholds: &ScoringThresholds) -> Vec<CheckResult> {
    vec![
        check_holder_distribution(metadata, thresholds),
        check_liquidity(metadata, thresholds),
        check_token_age(metadata, thresholds),
        check_name_sanity(metadata, thresholds),
        check_contract_verified(chain, metadata, thresholds),
        check_mint_function(chain, metadata, thresholds),
        check_ownership_renounced(chain, metadata, thresholds),
    ]
}

/// Folds check deltas into a verdict. Sums run in i32 and are clamped once
/// at the end, so intermediate values may leave 0..=100.
pub fn aggregate(checks: &[CheckResult], thresholds: &ScoringThresholds) -> SafetyVerdict {
    let mut score = thresholds.baseline_score;
    let mut risk = thresholds.baseline_risk;
    let mut is_honeypot = false;
    let mut rendered: BTreeMap<String, Value> = BTreeMap::new();

    for check in checks {
        score += check.score_delta;
        risk += check.risk_delta;

        if check.id == "honeypot_check" && check.status == CheckStatus::Fail {
            is_honeypot = true;
        }

        for (key, value) in &check.observed {
            rendered.insert(key.clone(), value.clone());
        }
        rendered.insert(check.id.clone(), Value::String(check.verdict()));
    }

    if is_honeypot {
        score = score.min(thresholds.honeypot_score_cap);
        risk = risk.max(thresholds.honeypot_risk_floor);
    }

    let safety_score = clamp_percent(score);
    let rug_pull_risk = clamp_percent(risk);

    SafetyVerdict {
        safe: safety_score >= thresholds.safe_floor && !is_honeypot,
        safety_score,
        rug_pull_risk,
        is_honeypot,
        recommendation: recommendation_for(safety_score, is_honeypot, thresholds).to_string(),
        checks: rendered,
    }
}

pub fn recommendation_for(score: u8, is_honeypot: bool, thresholds: &ScoringThresholds) -> &'static str {
    if is_honeypot {
        RECOMMENDATION_HONEYPOT
    } else if score >= thresholds.safe_floor {
        RECOMMENDATION_SAFE
    } else if score >= thresholds.caution_floor {
        RECOMMENDATION_CAUTION
    } else if score >= thresholds.high_risk_floor {
        RECOMMENDATION_HIGH_RISK
    } else {
        RECOMMENDATION_DANGER
    }
}

fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}
