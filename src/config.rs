// config.rs
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::domain::logic::{ClassifyOptions, ExpiryPolicy, EXPIRING_SOON_DAYS};

pub const ENV_EXPIRY_POLICY: &str = "FRIDGE_EXPIRY_POLICY";
pub const ENV_EXPIRY_WARNING_DAYS: &str = "FRIDGE_EXPIRY_WARNING_DAYS";
pub const ENV_POLL_INTERVAL_SECS: &str = "FRIDGE_POLL_INTERVAL_SECS";

/// Every view refreshes on this cadence unless configured otherwise.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: expected `buffered` or `immediate`, got `{value}`")]
    UnknownPolicy { key: &'static str, value: String },
    #[error("{key}: expected a non-negative whole number, got `{value}`")]
    InvalidDays { key: &'static str, value: String },
    #[error("{key}: expected a positive number of seconds, got `{value}`")]
    InvalidInterval { key: &'static str, value: String },
}

/// A policy name that is neither `buffered` nor `immediate`. Carries no
/// source, so the env loader and the `--policy` flag can each report their own.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected `buffered` or `immediate`, got `{0}`")]
pub struct ParsePolicyError(pub String);

impl std::str::FromStr for ExpiryPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buffered" => Ok(ExpiryPolicy::Buffered),
            "immediate" => Ok(ExpiryPolicy::Immediate),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Settings shared by every dashboard view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifierConfig {
    pub expiry_policy: ExpiryPolicy,
    pub expiring_soon_days: i64,
    pub poll_interval: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            expiry_policy: ExpiryPolicy::default(),
            expiring_soon_days: EXPIRING_SOON_DAYS,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl ClassifierConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(ENV_EXPIRY_POLICY) {
            config.expiry_policy = raw
                .parse()
                .map_err(|ParsePolicyError(value)| ConfigError::UnknownPolicy {
                    key: ENV_EXPIRY_POLICY,
                    value,
                })?;
        }

        if let Some(raw) = get(ENV_EXPIRY_WARNING_DAYS) {
            config.expiring_soon_days = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|d| *d >= 0)
                .ok_or(ConfigError::InvalidDays {
                    key: ENV_EXPIRY_WARNING_DAYS,
                    value: raw.clone(),
                })?;
        }

        if let Some(raw) = get(ENV_POLL_INTERVAL_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidInterval {
                    key: ENV_POLL_INTERVAL_SECS,
                    value: raw.clone(),
                })?;
            config.poll_interval = Duration::from_secs(secs);
        }

        tracing::debug!(?config, "loaded classifier config");
        Ok(config)
    }

    pub fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions {
            policy: self.expiry_policy,
            expiring_soon_days: self.expiring_soon_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = ClassifierConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClassifierConfig::default());
        assert_eq!(config.expiry_policy, ExpiryPolicy::Buffered);
        assert_eq!(config.expiring_soon_days, 3);
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = ClassifierConfig::from_lookup(lookup(&[
            (ENV_EXPIRY_POLICY, "Immediate"),
            (ENV_EXPIRY_WARNING_DAYS, "5"),
            (ENV_POLL_INTERVAL_SECS, "10"),
        ]))
        .unwrap();

        assert_eq!(config.expiry_policy, ExpiryPolicy::Immediate);
        assert_eq!(config.expiring_soon_days, 5);
        assert_eq!(config.poll_interval, Duration::from_secs(10));

        let options = config.classify_options();
        assert_eq!(options.policy, ExpiryPolicy::Immediate);
        assert_eq!(options.expiring_soon_days, 5);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = ClassifierConfig::from_lookup(lookup(&[(ENV_EXPIRY_POLICY, "  ")])).unwrap();
        assert_eq!(config.expiry_policy, ExpiryPolicy::Buffered);
    }

    #[test]
    fn policy_parse_error_names_no_env_key() {
        let err = "lenient".parse::<ExpiryPolicy>().unwrap_err();

        assert_eq!(err, ParsePolicyError("lenient".to_string()));
        assert_eq!(err.to_string(), "expected `buffered` or `immediate`, got `lenient`");
        assert!(!err.to_string().contains(ENV_EXPIRY_POLICY));
    }

    #[test]
    fn env_policy_error_names_the_key() {
        let err = ClassifierConfig::from_lookup(lookup(&[(ENV_EXPIRY_POLICY, "lenient")]))
            .unwrap_err();
        assert!(err.to_string().starts_with("FRIDGE_EXPIRY_POLICY: "));
    }

    #[test]
    fn rejects_bad_values() {
        let err = ClassifierConfig::from_lookup(lookup(&[(ENV_EXPIRY_POLICY, "lenient")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownPolicy {
                key: ENV_EXPIRY_POLICY,
                value: "lenient".to_string()
            }
        );

        assert!(ClassifierConfig::from_lookup(lookup(&[(ENV_EXPIRY_WARNING_DAYS, "-1")])).is_err());
        assert!(ClassifierConfig::from_lookup(lookup(&[(ENV_POLL_INTERVAL_SECS, "0")])).is_err());
        assert!(
            ClassifierConfig::from_lookup(lookup(&[(ENV_POLL_INTERVAL_SECS, "soon")])).is_err()
        );
    }
}
