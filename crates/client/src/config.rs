//! Client configuration from the environment.

use std::time::Duration;

use thiserror::Error;

use crate::store::WritePolicy;

pub const DEFAULT_API_URL: &str = "https://ganesh-backend.onrender.com";
/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_URL: &str = "GANESH_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "GANESH_HTTP_TIMEOUT_SECS";
pub const ENV_WRITE_POLICY: &str = "GANESH_WRITE_POLICY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub write_policy: WritePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            write_policy: WritePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let trimmed = url.trim();
            if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                return Err(ConfigError::invalid(
                    ENV_API_URL,
                    &url,
                    "expected an http(s) URL",
                ));
            }
            config.api_url = trimmed.to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    ConfigError::invalid(ENV_TIMEOUT_SECS, &raw, "expected a positive integer")
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(ENV_WRITE_POLICY) {
            config.write_policy = raw
                .parse()
                .map_err(|reason: String| ConfigError::invalid(ENV_WRITE_POLICY, &raw, reason))?;
        }

        Ok(config)
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.write_policy, WritePolicy::Optimistic);
    }

    #[test]
    fn reads_all_keys() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_URL, " http://localhost:5000 "),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_WRITE_POLICY, "rollback"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.write_policy, WritePolicy::RollbackOnFailure);
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ENV_TIMEOUT_SECS, .. }));
    }

    #[test]
    fn rejects_non_http_url() {
        assert!(ClientConfig::from_lookup(lookup(&[(ENV_API_URL, "ftp://x")])).is_err());
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_WRITE_POLICY, "yolo")])).unwrap_err();
        assert!(err.to_string().contains("GANESH_WRITE_POLICY"));
    }
}
