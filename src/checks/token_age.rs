use crate::scoring::thresholds::ScoringThresholds;
use crate::types::*;
use serde_json::json;

use super::{build_result, tier, tier_delta};

/// Fresh launches carry the heaviest risk weighting of the tiered checks.
pub fn check_token_age(metadata: &TokenMetadata, thresholds: &ScoringThresholds) -> CheckResult {
    let age = metadata.age_minutes;
    let status = tier(age, thresholds.age_very_new_minutes, thresholds.age_young_minutes);

    let reason = match status {
        CheckStatus::Fail => Some("Very new token (high risk)"),
        CheckStatus::Warn => Some("New token"),
        CheckStatus::Pass => None,
    };

    build_result(
        "age_check",
        status,
        reason,
        vec![("age_minutes", json!(age))],
        tier_delta(status, &thresholds.age),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aged(age_minutes: u64) -> TokenMetadata {
        TokenMetadata {
            age_minutes,
            ..TokenMetadata::default()
        }
    }

    #[test]
    fn test_token_age_very_new() {
        let t = ScoringThresholds::default();
        let result = check_token_age(&aged(1), &t);

        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.score_delta, t.age.fail.score);
        assert_eq!(result.risk_delta, t.age.fail.risk);
    }

    #[test]
    fn test_token_age_young() {
        let result = check_token_age(&aged(10), &ScoringThresholds::default());

        assert_eq!(result.status, CheckStatus::Warn);
        assert_eq!(result.verdict(), "WARN - New token");
    }

    #[test]
    fn test_token_age_mature() {
        let result = check_token_age(&aged(30), &ScoringThresholds::default());

        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.observed["age_minutes"], json!(30));
    }
}
