//! Configuration for the resolver and the HTTP transport.
//!
//! # Environment Variables
//!
//! - `PAYID_TIMEOUT_SECS` - request timeout for the HTTP transport
//! - `PAYID_USER_AGENT` - `User-Agent` header sent by the HTTP transport
//! - `PAYID_MAX_DISCOVERY_HOPS` - ceiling on WebFinger fetches per resolution
//!
//! # Example
//!
//! ```rust
//! use payid_lib::config::{resolver_config_from_env, ResolverConfig};
//!
//! let config = ResolverConfig::default().with_max_discovery_hops(3);
//! assert_eq!(config.max_discovery_hops, 3);
//!
//! // Or start from the environment
//! let _config = resolver_config_from_env();
//! ```

use serde::{Deserialize, Serialize};

/// Default ceiling on WebFinger fetches performed by one resolution.
pub const DEFAULT_MAX_DISCOVERY_HOPS: u32 = 5;

/// Resolver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Maximum number of WebFinger fetches, counting the initial one.
    ///
    /// Reaching this many fetches while still being delegated fails the
    /// resolution.
    #[serde(default = "default_max_discovery_hops")]
    pub max_discovery_hops: u32,
}

fn default_max_discovery_hops() -> u32 {
    DEFAULT_MAX_DISCOVERY_HOPS
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_discovery_hops: default_max_discovery_hops(),
        }
    }
}

impl ResolverConfig {
    /// Set the discovery hop ceiling. Values below 1 are clamped to 1.
    pub fn with_max_discovery_hops(mut self, hops: u32) -> Self {
        self.max_discovery_hops = hops.max(1);
        self
    }
}

/// Configuration for the reqwest-backed HTTP transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpTransportConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("payid-lib/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpTransportConfig {
    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Load resolver configuration, applying environment overrides to the defaults.
///
/// Unparseable values are ignored.
pub fn resolver_config_from_env() -> ResolverConfig {
    let mut config = ResolverConfig::default();

    if let Ok(hops) = std::env::var("PAYID_MAX_DISCOVERY_HOPS") {
        if let Ok(hops) = hops.parse::<u32>() {
            config = config.with_max_discovery_hops(hops);
        }
    }

    config
}

/// Load HTTP transport configuration, applying environment overrides to the defaults.
///
/// Unparseable values are ignored.
pub fn http_transport_config_from_env() -> HttpTransportConfig {
    let mut config = HttpTransportConfig::default();

    if let Ok(timeout) = std::env::var("PAYID_TIMEOUT_SECS") {
        if let Ok(secs) = timeout.parse::<u64>() {
            config = config.with_timeout(secs);
        }
    }

    if let Ok(user_agent) = std::env::var("PAYID_USER_AGENT") {
        if !user_agent.trim().is_empty() {
            config = config.with_user_agent(user_agent);
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ResolverConfig::default().max_discovery_hops, 5);
        let http = HttpTransportConfig::default();
        assert_eq!(http.timeout_secs, 30);
        assert!(http.user_agent.starts_with("payid-lib/"));
    }

    #[test]
    fn test_hops_clamped() {
        let config = ResolverConfig::default().with_max_discovery_hops(0);
        assert_eq!(config.max_discovery_hops, 1);
    }

    #[test]
    fn test_serde_defaults() {
        let config: ResolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ResolverConfig::default());

        let http: HttpTransportConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(http.timeout_secs, 5);
        assert_eq!(http.user_agent, default_user_agent());
    }
}
