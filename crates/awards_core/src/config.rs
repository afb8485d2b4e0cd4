//! Runtime configuration resolved from environment variables.
//!
//! | Variable                  | Default          |
//! |---------------------------|------------------|
//! | `AWARDS_DELETE_POLICY`    | `allow_orphans`  |
//! | `AWARDS_SEED_SAMPLE_DATA` | `false`          |
//! | `AWARDS_LOG_LEVEL`        | build dependent  |
//! | `AWARDS_LOG_DIR`          | unset (no file logging) |

use crate::logging::{default_log_level, normalize_level};
use crate::store::policy::CategoryDeletePolicy;
use crate::store::{AwardsStore, StoreResult};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DELETE_POLICY: &str = "AWARDS_DELETE_POLICY";
pub const ENV_SEED_SAMPLE_DATA: &str = "AWARDS_SEED_SAMPLE_DATA";
pub const ENV_LOG_LEVEL: &str = "AWARDS_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "AWARDS_LOG_DIR";

/// Resolved awards configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardsConfig {
    pub delete_policy: CategoryDeletePolicy,
    pub seed_sample_data: bool,
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl Default for AwardsConfig {
    fn default() -> Self {
        Self {
            delete_policy: CategoryDeletePolicy::default(),
            seed_sample_data: false,
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl AwardsConfig {
    /// Reads and validates the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(value) = read(ENV_DELETE_POLICY) {
            config.delete_policy = CategoryDeletePolicy::parse(&value)
                .ok_or(ConfigError::InvalidDeletePolicy(value))?;
        }
        if let Some(value) = read(ENV_SEED_SAMPLE_DATA) {
            config.seed_sample_data = parse_flag(ENV_SEED_SAMPLE_DATA, &value)?;
        }
        if let Some(value) = read(ENV_LOG_LEVEL) {
            config.log_level =
                normalize_level(&value).map_err(|_| ConfigError::InvalidLogLevel(value))?;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);

        Ok(config)
    }

    /// Builds the in-memory store this configuration describes.
    pub fn build_store(&self) -> StoreResult<AwardsStore> {
        let mut store = AwardsStore::new().with_delete_policy(self.delete_policy);
        if self.seed_sample_data {
            store.seed_sample_data()?;
        }
        Ok(store)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

/// Configuration loading errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDeletePolicy(String),
    InvalidFlag { key: &'static str, value: String },
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDeletePolicy(value) => write!(
                f,
                "{ENV_DELETE_POLICY} must be one of reject_if_nominated|cascade|allow_orphans (got {value})"
            ),
            Self::InvalidFlag { key, value } => {
                write!(f, "{key} must be a boolean flag (got {value})")
            }
            Self::InvalidLogLevel(value) => write!(
                f,
                "{ENV_LOG_LEVEL} must be one of trace|debug|info|warn|error (got {value})"
            ),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{AwardsConfig, ConfigError, ENV_DELETE_POLICY, ENV_LOG_DIR, ENV_SEED_SAMPLE_DATA};
    use crate::store::policy::CategoryDeletePolicy;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AwardsConfig::from_lookup(lookup(&[])).expect("defaults");
        assert_eq!(config, AwardsConfig::default());
        assert_eq!(config.delete_policy, CategoryDeletePolicy::AllowOrphans);
    }

    #[test]
    fn reads_all_variables() {
        let config = AwardsConfig::from_lookup(lookup(&[
            (ENV_DELETE_POLICY, "cascade"),
            (ENV_SEED_SAMPLE_DATA, "yes"),
            ("AWARDS_LOG_LEVEL", "WARN"),
            (ENV_LOG_DIR, "/var/log/awards"),
        ]))
        .expect("config");

        assert_eq!(config.delete_policy, CategoryDeletePolicy::Cascade);
        assert!(config.seed_sample_data);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/awards")));
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            AwardsConfig::from_lookup(lookup(&[(ENV_DELETE_POLICY, "archive")]))
                .expect_err("bad policy"),
            ConfigError::InvalidDeletePolicy("archive".to_string())
        );
        assert!(matches!(
            AwardsConfig::from_lookup(lookup(&[(ENV_SEED_SAMPLE_DATA, "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }

    #[test]
    fn build_store_applies_policy_and_seed() {
        let config = AwardsConfig {
            delete_policy: CategoryDeletePolicy::RejectIfNominated,
            seed_sample_data: true,
            ..AwardsConfig::default()
        };
        let store = config.build_store().expect("store");
        assert_eq!(store.delete_policy(), CategoryDeletePolicy::RejectIfNominated);
        assert_eq!(store.categories().len(), 3);
    }
}
