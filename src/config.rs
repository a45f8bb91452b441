//! # Configuration
//!
//! Process settings, read once at startup.
//!
//! Values come from built-in defaults, an optional `config/default.toml`
//! file, and the process environment (highest priority). Environment keys
//! are the upper-case field names: `PORT`, `RAINFOREST_API_KEY`, ...
//!
//! # Examples
//!
//! ```
//! use price_compare::config::Settings;
//! use std::collections::HashMap;
//!
//! let env = HashMap::from([("PORT".to_string(), "8080".to_string())]);
//! let settings = Settings::load_from(Some(env)).unwrap();
//! assert_eq!(settings.port, 8080);
//! ```

use crate::infrastructure::providers::{FlipkartConfig, RainforestConfig, flipkart, rainforest};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Source could not be read or a value has the wrong type.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// Host and port do not form a socket address.
    #[error("invalid listen address {host}:{port}")]
    InvalidAddress {
        /// Configured host.
        host: String,
        /// Configured port.
        port: u16,
    },
}

/// Upstream API credential. Never printed.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a raw key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw key for use in an outbound request.
    #[inline]
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Listen host.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Rainforest API credential.
    pub rainforest_api_key: Option<ApiKey>,
    /// Rainforest API host.
    pub rainforest_base_url: String,
    /// Flipkart scraper host.
    pub flipkart_base_url: String,
    /// Outbound request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Directory served at `/`, if it exists.
    pub static_dir: Option<PathBuf>,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Settings {
    /// Loads settings from defaults, `config/default.toml` and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads settings, reading environment values from `env` instead of the
    /// process environment when given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if a source is malformed.
    pub fn load_from(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("rainforest_base_url", rainforest::DEFAULT_BASE_URL)?
            .set_default("flipkart_base_url", flipkart::DEFAULT_BASE_URL)?
            .set_default("request_timeout_ms", 30_000)?
            .set_default("static_dir", "public")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::default().source(env))
            .build()?;

        let mut settings: Self = settings.try_deserialize()?;
        if settings
            .rainforest_api_key
            .as_ref()
            .is_some_and(|k| k.expose().is_empty())
        {
            settings.rainforest_api_key = None;
        }
        Ok(settings)
    }

    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] if host is not an IP address.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }

    /// Rainforest adapter configuration.
    #[must_use]
    pub fn rainforest(&self) -> RainforestConfig {
        RainforestConfig::new(self.rainforest_api_key.clone())
            .with_base_url(self.rainforest_base_url.clone())
    }

    /// Flipkart adapter configuration.
    #[must_use]
    pub fn flipkart(&self) -> FlipkartConfig {
        FlipkartConfig {
            base_url: self.flipkart_base_url.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults() {
        let settings = Settings::load_from(env(&[])).unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.host, "0.0.0.0");
        assert!(settings.rainforest_api_key.is_none());
        assert_eq!(settings.rainforest_base_url, rainforest::DEFAULT_BASE_URL);
        assert_eq!(settings.flipkart_base_url, flipkart::DEFAULT_BASE_URL);
        assert_eq!(settings.request_timeout_ms, 30_000);
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }

    #[test]
    fn environment_overrides() {
        let settings = Settings::load_from(env(&[
            ("PORT", "8081"),
            ("RAINFOREST_API_KEY", "secret-key"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 8081);
        assert_eq!(
            settings.rainforest_api_key.as_ref().map(ApiKey::expose),
            Some("secret-key")
        );
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.listen_addr().unwrap().port(), 8081);
    }

    #[test]
    fn api_key_is_kept_verbatim() {
        for raw in ["0123456789", "1e3", "12345678901234567890123", "TRUE"] {
            let settings = Settings::load_from(env(&[("RAINFOREST_API_KEY", raw)])).unwrap();
            assert_eq!(
                settings.rainforest_api_key.as_ref().map(ApiKey::expose),
                Some(raw)
            );
        }
    }

    #[test]
    fn empty_api_key_is_unset() {
        let settings = Settings::load_from(env(&[("RAINFOREST_API_KEY", "")])).unwrap();
        assert!(settings.rainforest_api_key.is_none());
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(Settings::load_from(env(&[("PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert!(!format!("{:?}", key).contains("super-secret"));
    }

    #[test]
    fn adapter_configs() {
        let settings = Settings::load_from(env(&[
            ("RAINFOREST_BASE_URL", "http://localhost:1"),
            ("FLIPKART_BASE_URL", "http://localhost:2"),
        ]))
        .unwrap();
        assert_eq!(settings.rainforest().base_url, "http://localhost:1");
        assert_eq!(settings.rainforest().amazon_domain, "amazon.in");
        assert_eq!(settings.flipkart().base_url, "http://localhost:2");
    }
}
