// src/lib.rs

pub mod types;
pub mod checks;
pub mod scoring;
pub mod payment;
pub mod api;
pub mod config;
pub mod error;
pub mod server;

// Re-export commonly used types
pub use types::*;
pub use scoring::{score_token, ScoringThresholds};
pub use payment::{PaymentTerms, PaymentVerifier};
pub use api::{check, CheckRequestBody, CheckResponse};
pub use config::OracleConfig;
pub use error::OracleError;
pub use server::{build_router, AppState};
