use serde::Serialize;

/// Score and risk adjustment applied by one check outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Delta {
    pub score: i32,
    pub risk: i32,
}

impl Delta {
    pub const ZERO: Delta = Delta { score: 0, risk: 0 };

    pub const fn new(score: i32, risk: i32) -> Self {
        Self { score, risk }
    }
}

/// Outcome deltas for a three-way (FAIL / WARN / PASS) threshold check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TieredDeltas {
    pub fail: Delta,
    pub warn: Delta,
    pub pass: Delta,
}

/// Every cutoff and point value the scoring engine uses.
///
/// Ordering constraint: for each tiered check `fail.score <= warn.score <= pass.score`
/// and `fail.risk >= warn.risk >= pass.risk`, which keeps the score monotone in
/// holder count, liquidity and age.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoringThresholds {
    pub baseline_score: i32,
    pub baseline_risk: i32,

    pub holders_low: u64,
    pub holders_mid: u64,
    pub holders: TieredDeltas,

    pub liquidity_min_usd: f64,
    pub liquidity_healthy_usd: f64,
    pub liquidity: TieredDeltas,

    pub age_very_new_minutes: u64,
    pub age_young_minutes: u64,
    pub age: TieredDeltas,

    pub scam_keywords: Vec<String>,
    pub missing_name: Delta,
    pub suspicious_name: Delta,

    pub mint_function: Delta,
    pub owner_not_renounced: Delta,
    pub unverified_contract: Delta,

    /// Heuristic trigger: risk added above `baseline_risk` exceeding this
    /// with few holders.
    pub honeypot_risk_trigger: i32,
    pub honeypot_holder_ceiling: u64,
    pub honeypot_score_cap: i32,
    pub honeypot_risk_floor: i32,

    pub safe_floor: u8,
    pub caution_floor: u8,
    pub high_risk_floor: u8,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            baseline_score: 50,
            baseline_risk: 50,

            holders_low: 100,
            holders_mid: 500,
            holders: TieredDeltas {
                fail: Delta::new(-20, 20),
                warn: Delta::new(-5, 5),
                pass: Delta::new(15, -10),
            },

            liquidity_min_usd: 10_000.0,
            liquidity_healthy_usd: 50_000.0,
            liquidity: TieredDeltas {
                fail: Delta::new(-20, 25),
                warn: Delta::new(-5, 5),
                pass: Delta::new(15, -15),
            },

            age_very_new_minutes: 2,
            age_young_minutes: 30,
            age: TieredDeltas {
                fail: Delta::new(-25, 25),
                warn: Delta::new(-10, 10),
                pass: Delta::new(10, -10),
            },

            scam_keywords: ["test", "fake", "scam", "rug", "honeypot", "xxx"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            missing_name: Delta::new(-5, 5),
            suspicious_name: Delta::new(-30, 30),

            mint_function: Delta::new(-10, 10),
            owner_not_renounced: Delta::new(-10, 10),
            unverified_contract: Delta::new(-15, 15),

            honeypot_risk_trigger: 50,
            honeypot_holder_ceiling: 50,
            honeypot_score_cap: 30,
            honeypot_risk_floor: 70,

            safe_floor: 80,
            caution_floor: 60,
            high_risk_floor: 40,
        }
    }
}
