// src/scoring/mod.rs

pub mod aggregator;
pub mod thresholds;

pub use aggregator::{aggregate, recommendation_for, run_checks, score_token};
pub use thresholds::{Delta, ScoringThresholds, TieredDeltas};
