use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::payment::PaymentTerms;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_PRICE_PER_CHECK: f64 = 0.01;
pub const DEFAULT_PAYMENT_TOKEN: &str = "USDC";
pub const DEFAULT_PAY_TO: &str = "token-safety-oracle";
pub const DEFAULT_VERIFY_TIMEOUT_MS: u64 = 3000;
pub const DEFAULT_VERIFY_RETRIES: u32 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Process-wide settings, read once at startup and never mutated.
///
/// `.env` is loaded by `main` via dotenvy before [`OracleConfig::from_env`]
/// runs, so everything here can come from either source.
#[derive(Clone, Debug, PartialEq)]
pub struct OracleConfig {
    pub port: u16,
    /// Admit every request without a payment proof.
    pub free_mode: bool,
    pub price_per_check: f64,
    pub payment_token: String,
    /// Destination the client pays to, echoed in 402 terms.
    pub pay_to: String,
    /// External verifier; when unset proofs are checked locally.
    pub facilitator_url: Option<String>,
    pub verify_timeout: Duration,
    /// Extra attempts after a transient facilitator failure.
    pub verify_retries: u32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            free_mode: false,
            price_per_check: DEFAULT_PRICE_PER_CHECK,
            payment_token: DEFAULT_PAYMENT_TOKEN.to_string(),
            pay_to: DEFAULT_PAY_TO.to_string(),
            facilitator_url: None,
            verify_timeout: Duration::from_millis(DEFAULT_VERIFY_TIMEOUT_MS),
            verify_retries: DEFAULT_VERIFY_RETRIES,
        }
    }
}

impl OracleConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or blank keys fall back
    /// to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| invalid("PORT", "port number", raw))?,
            None => defaults.port,
        };

        let free_mode = match get("X402_FREE_MODE") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| invalid("X402_FREE_MODE", "boolean", raw))?,
            None => defaults.free_mode,
        };

        let price_per_check = match get("X402_PRICE_PER_CHECK") {
            Some(raw) => match raw.parse::<f64>() {
                Ok(price) if price.is_finite() && price >= 0.0 => price,
                _ => return Err(invalid("X402_PRICE_PER_CHECK", "non-negative amount", raw)),
            },
            None => defaults.price_per_check,
        };

        let verify_timeout = match get("X402_VERIFY_TIMEOUT_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(invalid("X402_VERIFY_TIMEOUT_MS", "positive millisecond count", raw)),
            },
            None => defaults.verify_timeout,
        };

        let verify_retries = match get("X402_VERIFY_RETRIES") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| invalid("X402_VERIFY_RETRIES", "retry count", raw))?,
            None => defaults.verify_retries,
        };

        Ok(Self {
            port,
            free_mode,
            price_per_check,
            payment_token: get("X402_PAYMENT_TOKEN").unwrap_or(defaults.payment_token),
            pay_to: get("X402_PAY_TO").unwrap_or(defaults.pay_to),
            facilitator_url: get("X402_FACILITATOR_URL"),
            verify_timeout,
            verify_retries,
        })
    }

    pub fn payment_terms(&self) -> PaymentTerms {
        PaymentTerms {
            price: self.price_per_check,
            token: self.payment_token.clone(),
            pay_to: self.pay_to.clone(),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(var: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid { var, expected, value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<OracleConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        OracleConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();

        assert_eq!(config, OracleConfig::default());
        assert!(!config.free_mode);
        assert_eq!(config.payment_token, "USDC");
        assert_eq!(config.price_per_check, 0.01);
    }

    #[test]
    fn test_reads_overrides() {
        let config = load(&[
            ("PORT", "9100"),
            ("X402_FREE_MODE", "TRUE"),
            ("X402_PRICE_PER_CHECK", "0.25"),
            ("X402_PAYMENT_TOKEN", "USDT"),
            ("X402_PAY_TO", "0xabc"),
            ("X402_FACILITATOR_URL", "http://localhost:4021"),
            ("X402_VERIFY_TIMEOUT_MS", "500"),
            ("X402_VERIFY_RETRIES", "0"),
        ])
        .unwrap();

        assert_eq!(config.port, 9100);
        assert!(config.free_mode);
        assert_eq!(config.price_per_check, 0.25);
        assert_eq!(config.payment_token, "USDT");
        assert_eq!(config.pay_to, "0xabc");
        assert_eq!(config.facilitator_url.as_deref(), Some("http://localhost:4021"));
        assert_eq!(config.verify_timeout, Duration::from_millis(500));
        assert_eq!(config.verify_retries, 0);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = load(&[("X402_PAYMENT_TOKEN", "  "), ("X402_FACILITATOR_URL", "")]).unwrap();

        assert_eq!(config.payment_token, DEFAULT_PAYMENT_TOKEN);
        assert_eq!(config.facilitator_url, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = load(&[("X402_PRICE_PER_CHECK", "-1")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "X402_PRICE_PER_CHECK", .. }));

        assert!(load(&[("X402_PRICE_PER_CHECK", "NaN")]).is_err());
        assert!(load(&[("X402_FREE_MODE", "maybe")]).is_err());
        assert!(load(&[("PORT", "70000")]).is_err());
        assert!(load(&[("X402_VERIFY_TIMEOUT_MS", "0")]).is_err());
    }

    #[test]
    fn test_payment_terms_mirror_config() {
        let terms = load(&[("X402_PRICE_PER_CHECK", "0.05")]).unwrap().payment_terms();

        assert_eq!(terms.price, 0.05);
        assert_eq!(terms.token, "USDC");
        assert_eq!(terms.pay_to, DEFAULT_PAY_TO);
    }
}
