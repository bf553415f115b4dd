//! Client configuration
//!
//! The token is always passed in explicitly. [`ClientConfig::from_env`] is a
//! convenience for binaries; the library never reads the environment on its own.

use crate::{
    constants::{API_KEY_ENV, BASE_URL_ENV, COINCAP_API_URL, DEFAULT_TIMEOUT_SECS, TIMEOUT_ENV},
    error::ClientError,
};
use reqwest::Url;
use std::fmt;
use std::time::Duration;

/// Settings needed to build a [`CoinCapClient`](crate::client::CoinCapClient)
#[derive(Clone)]
pub struct ClientConfig {
    /// Bearer token sent with every request
    pub api_key: String,

    /// Timeout applied to each HTTP exchange
    pub timeout: Duration,

    /// API base URL, without a trailing slash
    pub base_url: String,
}

impl ClientConfig {
    /// Creates a config pointing at the public CoinCap API
    pub fn new(timeout: Duration, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            timeout,
            base_url: COINCAP_API_URL.to_string(),
        }
    }

    /// Overrides the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads the config from process environment variables
    ///
    /// * `API_KEY` - bearer token (missing is reported later by `validate`)
    /// * `COINCAP_TIMEOUT_SECS` - optional timeout in seconds, defaults to 10
    /// * `COINCAP_BASE_URL` - optional base URL override
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).unwrap_or_default();

        let timeout = match lookup(TIMEOUT_ENV) {
            Some(raw) => parse_timeout_secs(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| COINCAP_API_URL.to_string());

        Ok(Self {
            api_key,
            timeout,
            base_url,
        })
    }

    /// Checks the config and normalizes the base URL
    pub fn validate(mut self) -> Result<Self, ClientError> {
        if self.timeout.is_zero() {
            return Err(ClientError::invalid_configuration("timeout can't be zero"));
        }

        self.api_key = self.api_key.trim().to_string();
        if self.api_key.is_empty() {
            return Err(ClientError::invalid_configuration(format!(
                "API key not found (set {})",
                API_KEY_ENV
            )));
        }

        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| {
            ClientError::invalid_configuration(format!("invalid base URL {:?}: {}", base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ClientError::invalid_configuration(format!(
                "base URL must be an absolute http(s) URL, got {:?}",
                base_url
            )));
        }
        self.base_url = base_url;

        Ok(self)
    }
}

// The token must not end up in logs through `{:?}`
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, ClientError> {
    let secs: f64 = raw.trim().parse().map_err(|_| {
        ClientError::invalid_configuration(format!("{} is not a number: {:?}", TIMEOUT_ENV, raw))
    })?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(ClientError::invalid_configuration(format!(
            "{} must be greater than zero, got {}",
            TIMEOUT_ENV, raw
        )));
    }

    Duration::try_from_secs_f64(secs).map_err(|e| {
        ClientError::invalid_configuration(format!("{} is out of range ({}): {}", TIMEOUT_ENV, e, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.base_url, COINCAP_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            ("API_KEY", "secret"),
            ("COINCAP_TIMEOUT_SECS", "2.5"),
            ("COINCAP_BASE_URL", "http://127.0.0.1:8080/v3/"),
        ]))
        .unwrap()
        .validate()
        .unwrap();

        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.base_url, "http://127.0.0.1:8080/v3");
    }

    #[test]
    fn test_negative_or_zero_timeout_rejected() {
        for raw in ["0", "-3", "abc", "NaN", "1e30", "inf"] {
            let err = ClientConfig::from_lookup(lookup_from(&[
                ("API_KEY", "secret"),
                ("COINCAP_TIMEOUT_SECS", raw),
            ]))
            .unwrap_err();
            assert!(err.is_configuration(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let zero = ClientConfig::new(Duration::ZERO, "secret").validate();
        assert!(matches!(zero, Err(ClientError::InvalidConfiguration(_))));

        let missing = ClientConfig::from_lookup(lookup_from(&[])).unwrap().validate();
        assert!(matches!(missing, Err(ClientError::InvalidConfiguration(_))));

        let blank = ClientConfig::new(Duration::from_secs(1), "   ").validate();
        assert!(matches!(blank, Err(ClientError::InvalidConfiguration(_))));

        let bad_url = ClientConfig::new(Duration::from_secs(1), "secret")
            .with_base_url("ftp://example.com")
            .validate();
        assert!(matches!(bad_url, Err(ClientError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_validate_trims_token_once() {
        let config = ClientConfig::new(Duration::from_secs(1), "  padded-token\n")
            .validate()
            .unwrap();
        assert_eq!(config.api_key, "padded-token");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new(Duration::from_secs(1), "super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
