//! Client configuration and credentials

use crate::{PaygateError, Result};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Default gateway API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com/v1";

/// Environment variable holding the API key id
pub const ENV_API_KEY_ID: &str = "RAZORPAY_API_KEY_ID";
/// Environment variable holding the API key secret
pub const ENV_API_KEY_SECRET: &str = "RAZORPAY_API_KEY_SECRET";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "RAZORPAY_BASE_URL";

/// API key id / secret pair sent as HTTP basic auth
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    key_id: String,
    key_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from a key id and secret
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        }
    }

    /// Read credentials from `RAZORPAY_API_KEY_ID` / `RAZORPAY_API_KEY_SECRET`.
    ///
    /// Unset variables become empty strings; the gateway will then reject
    /// requests with an authentication error.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name).unwrap_or_else(|| {
                warn!("{} is not set; requests will be sent without it", name);
                String::new()
            })
        };

        let key_id = read(ENV_API_KEY_ID);
        let key_secret = read(ENV_API_KEY_SECRET);
        Self { key_id, key_secret }
    }

    /// API key id
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// API key secret
    pub fn key_secret(&self) -> &str {
        &self.key_secret
    }

    /// Whether either half of the pair is missing
    pub fn is_empty(&self) -> bool {
        self.key_id.is_empty() || self.key_secret.is_empty()
    }
}

/// Transport configuration for [`crate::GatewayClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway API, e.g. `https://api.razorpay.com/v1`
    pub base_url: String,
    /// Total request timeout; transport default when `None`
    pub timeout: Option<Duration>,
    /// Connect timeout; transport default when `None`
    pub connect_timeout: Option<Duration>,
    /// Basic auth credentials
    pub credentials: Credentials,
}

impl ClientConfig {
    /// Create a config for the default base URL
    pub fn new(credentials: Credentials) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            credentials,
        }
    }

    /// Build a config from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(ENV_BASE_URL).filter(|url| !url.is_empty());
        let config = Self::new(Credentials::from_lookup(&lookup));
        match base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the total request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(PaygateError::config("Base URL cannot be empty"));
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| PaygateError::config(format!("Invalid base URL: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PaygateError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_credentials_from_lookup() {
        let credentials = Credentials::from_lookup(lookup_from(&[
            (ENV_API_KEY_ID, "rzp_test_key"),
            (ENV_API_KEY_SECRET, "rzp_test_secret"),
        ]));

        assert_eq!(credentials.key_id(), "rzp_test_key");
        assert_eq!(credentials.key_secret(), "rzp_test_secret");
        assert!(!credentials.is_empty());
    }

    #[test]
    fn test_missing_credentials_become_empty() {
        let credentials = Credentials::from_lookup(lookup_from(&[]));
        assert_eq!(credentials.key_id(), "");
        assert_eq!(credentials.key_secret(), "");
        assert!(credentials.is_empty());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("rzp_test_key", "hunter2");
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("rzp_test_key"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new(Credentials::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
        assert_eq!(config.connect_timeout, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_base_url_override() {
        let config = ClientConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "http://127.0.0.1:9999")]));
        assert_eq!(config.base_url, "http://127.0.0.1:9999");

        let config = ClientConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "")]));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new(Credentials::new("id", "secret"))
            .with_timeout(Duration::from_secs(30))
            .with_connect_timeout(Duration::from_secs(5));

        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_config_validation() {
        let config = ClientConfig::new(Credentials::default()).with_base_url("");
        assert!(config.validate().is_err());

        let config = ClientConfig::new(Credentials::default()).with_base_url("not a url");
        assert!(config.validate().is_err());

        let config = ClientConfig::new(Credentials::default()).with_base_url("ftp://example.com");
        assert!(config.validate().is_err());
    }
}
