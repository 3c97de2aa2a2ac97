use crate::scoring::thresholds::{Delta, ScoringThresholds};
use crate::types::*;
use serde_json::json;

use super::build_result;

pub fn check_name_sanity(metadata: &TokenMetadata, thresholds: &ScoringThresholds) -> CheckResult {
    let name = metadata.name.trim().to_lowercase();

    let matched = thresholds
        .scam_keywords
        .iter()
        .find(|keyword| name.contains(keyword.as_str()));

    let (status, reason, delta) = if name.is_empty() {
        (CheckStatus::Fail, Some("Missing name"), thresholds.missing_name)
    } else if matched.is_some() {
        (CheckStatus::Fail, Some("Suspicious name"), thresholds.suspicious_name)
    } else {
        (CheckStatus::Pass, None, Delta::ZERO)
    };

    let mut observed = vec![("token_name", json!(name))];
    if let Some(keyword) = matched {
        observed.push(("matched_keyword", json!(keyword)));
    }

    build_result("name_check", status, reason, observed, delta)
}
