//! CLI command implementations

pub mod inspect;
pub mod parse;
pub mod resolve;

use anyhow::{Context, Result};
use payid_lib::config::{
    http_transport_config_from_env, resolver_config_from_env, HttpTransportConfig, ResolverConfig,
};
use payid_lib::transport::ReqwestTransport;
use payid_lib::{PayId, PayIdResolver};

/// Configuration shared by every command: environment defaults with
/// command-line overrides applied on top.
#[derive(Clone, Debug)]
pub struct Settings {
    pub resolver: ResolverConfig,
    pub http: HttpTransportConfig,
}

impl Settings {
    pub fn load(timeout: Option<u64>, max_hops: Option<u32>) -> Self {
        let mut resolver = resolver_config_from_env();
        let mut http = http_transport_config_from_env();

        if let Some(secs) = timeout {
            http = http.with_timeout(secs);
        }
        if let Some(hops) = max_hops {
            resolver = resolver.with_max_discovery_hops(hops);
        }

        Self { resolver, http }
    }

    /// Build a resolver over a fresh HTTP transport.
    pub fn resolver(&self) -> Result<PayIdResolver<ReqwestTransport>> {
        let transport =
            ReqwestTransport::new(self.http.clone()).context("Failed to create HTTP transport")?;
        Ok(PayIdResolver::with_config(transport, self.resolver.clone()))
    }
}

/// Parse a PayID argument.
pub fn parse_payid(input: &str) -> Result<PayId> {
    PayId::parse(input).with_context(|| format!("'{}' is not a valid PayID", input))
}
