//! reqwest-backed HTTP transport.
//!
//! # Feature Flags
//!
//! Compiled only with the `http-transport` feature:
//!
//! ```toml
//! [dependencies]
//! payid-lib = { version = "0.1", features = ["http-transport"] }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::traits::{HttpResponse, HttpTransport, TransportError};
use crate::config::HttpTransportConfig;
use crate::{PayIdError, Result};

/// HTTP transport over a pooled `reqwest::Client`.
///
/// Cookies are not stored and redirects follow reqwest's default policy.
/// The client is cheap to clone and safe to share between resolvers.
#[derive(Clone)]
pub struct ReqwestTransport {
    config: HttpTransportConfig,
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the given configuration.
    pub fn new(config: HttpTransportConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PayIdError::Unknown(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create a transport with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpTransportConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    fn map_reqwest_error(&self, url: &Url, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                timeout_ms: timeout_ms(self.config.timeout_secs),
            }
        } else if e.is_connect() {
            TransportError::Connect {
                target: url.to_string(),
                reason: e.to_string(),
            }
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

fn timeout_ms(timeout_secs: u64) -> u64 {
    timeout_secs.saturating_mul(1000)
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl HttpTransport for ReqwestTransport {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, headers), fields(url = %url)))]
    async fn get(
        &self,
        url: &Url,
        headers: &[(&str, &str)],
    ) -> std::result::Result<HttpResponse, TransportError> {
        let mut request = self.client.get(url.clone());
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(url, e))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(HttpResponse {
            status,
            body: if text.is_empty() { None } else { Some(text) },
        })
    }
}
