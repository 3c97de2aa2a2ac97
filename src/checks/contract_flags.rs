//! EVM contract flag checks.
//!
//! Solana SPL tokens have no owner-controlled contract code to inspect, so on
//! Solana every flag check reports PASS with a not-applicable note and no
//! score change. The raw flags are still echoed for the caller.

use crate::scoring::thresholds::{Delta, ScoringThresholds};
use crate::types::*;
use serde_json::json;

use super::build_result;

const NOT_APPLICABLE: &str = "Not applicable on Solana";

/// Mint capability lets the owner inflate supply. A burn function is
/// reported alongside but never penalised.
pub fn check_mint_function(chain: Chain, metadata: &TokenMetadata, thresholds: &ScoringThresholds) -> CheckResult {
    let observed = vec![
        ("has_mint_function", json!(metadata.has_mint_function)),
        ("has_burn_function", json!(metadata.has_burn_function)),
    ];

    if !chain.is_evm() {
        return build_result("mint_check", CheckStatus::Pass, Some(NOT_APPLICABLE), observed, Delta::ZERO);
    }

    if metadata.has_mint_function {
        build_result(
            "mint_check",
            CheckStatus::Warn,
            Some("Mint function exists"),
            observed,
            thresholds.mint_function,
        )
    } else {
        build_result("mint_check", CheckStatus::Pass, None, observed, Delta::ZERO)
    }
}

pub fn check_ownership_renounced(chain: Chain, metadata: &TokenMetadata, thresholds: &ScoringThresholds) -> CheckResult {
    let observed = vec![("owner_renounced", json!(metadata.owner_renounced))];

    if !chain.is_evm() {
        return build_result("ownership_check", CheckStatus::Pass, Some(NOT_APPLICABLE), observed, Delta::ZERO);
    }

    if metadata.owner_renounced {
        build_result("ownership_check", CheckStatus::Pass, None, observed, Delta::ZERO)
    } else {
        build_result(
            "ownership_check",
            CheckStatus::Warn,
            Some("Ownership not renounced"),
            observed,
            thresholds.owner_not_renounced,
        )
    }
}

pub fn check_contract_verified(chain: Chain, metadata: &TokenMetadata, thresholds: &ScoringThresholds) -> CheckResult {
    let observed = vec![("contract_verified", json!(metadata.is_verified))];

    if !chain.is_evm() {
        return build_result("verification_check", CheckStatus::Pass, Some(NOT_APPLICABLE), observed, Delta::ZERO);
    }

    if metadata.is_verified {
        build_result("verification_check", CheckStatus::Pass, None, observed, Delta::ZERO)
    } else {
        build_result(
            "verification_check",
            CheckStatus::Fail,
            Some("Contract not verified"),
            observed,
            thresholds.unverified_contract,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risky_contract() -> TokenMetadata {
        TokenMetadata {
            has_mint_function: true,
            has_burn_function: true,
            owner_renounced: false,
            is_verified: false,
            ..TokenMetadata::default()
        }
    }

    #[test]
    fn test_solana_flags_not_applicable() {
        let t = ScoringThresholds::default();
        let metadata = risky_contract();

        for result in [
            check_mint_function(Chain::Solana, &metadata, &t),
            check_ownership_renounced(Chain::Solana, &metadata, &t),
            check_contract_verified(Chain::Solana, &metadata, &t),
        ] {
            assert_eq!(result.status, CheckStatus::Pass, "{}", result.id);
            assert_eq!(result.score_delta, 0);
            assert_eq!(result.risk_delta, 0);
            assert_eq!(result.verdict(), "PASS - Not applicable on Solana");
        }
    }

    #[test]
    fn test_evm_mint_function_penalised() {
        let t = ScoringThresholds::default();
        let result = check_mint_function(Chain::Ethereum, &risky_contract(), &t);

        assert_eq!(result.status, CheckStatus::Warn);
        assert_eq!(result.score_delta, t.mint_function.score);
        assert_eq!(result.observed["has_burn_function"], json!(true));
    }

    #[test]
    fn test_burn_function_alone_is_informational() {
        let metadata = TokenMetadata {
            has_burn_function: true,
            ..TokenMetadata::default()
        };
        let result = check_mint_function(Chain::Base, &metadata, &ScoringThresholds::default());

        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.score_delta, 0);
    }

    #[test]
    fn test_evm_owner_and_verification() {
        let t = ScoringThresholds::default();
        let metadata = risky_contract();

        let ownership = check_ownership_renounced(Chain::Arbitrum, &metadata, &t);
        assert_eq!(ownership.status, CheckStatus::Warn);
        assert_eq!(ownership.score_delta, t.owner_not_renounced.score);

        let verified = check_contract_verified(Chain::Polygon, &metadata, &t);
        assert_eq!(verified.status, CheckStatus::Fail);
        assert_eq!(verified.verdict(), "FAIL - Contract not verified");
    }

    #[test]
    fn test_evm_clean_contract_pass() {
        let t = ScoringThresholds::default();
        let metadata = TokenMetadata {
            owner_renounced: true,
            is_verified: true,
            ..TokenMetadata::default()
        };

        assert_eq!(check_ownership_renounced(Chain::Base, &metadata, &t).status, CheckStatus::Pass);
        assert_eq!(check_contract_verified(Chain::Base, &metadata, &t).status, CheckStatus::Pass);
        assert_eq!(check_mint_function(Chain::Base, &metadata, &t).status, CheckStatus::Pass);
    }
}
