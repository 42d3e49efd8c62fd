use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, `None` when the server sent nothing.
    pub body: Option<String>,
}

impl HttpResponse {
    /// A response with the given status and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    /// A response with the given status and no body.
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// Failures raised when an HTTP exchange cannot be completed.
///
/// A response with an error status is not a transport failure; it is
/// returned as an [`HttpResponse`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    #[error("connection to {target} failed: {reason}")]
    Connect { target: String, reason: String },
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Minimal HTTP capability needed for WebFinger discovery.
///
/// Implementations own connection pooling, TLS and timeouts. They must not
/// retry on their own; the resolver treats every error as final.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait HttpTransport {
    /// Performs a GET request against `url` with the given headers.
    async fn get(
        &self,
        url: &Url,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError>;
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<T> HttpTransport for Arc<T>
where
    T: HttpTransport + Send + Sync + ?Sized,
{
    async fn get(
        &self,
        url: &Url,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        (**self).get(url, headers).await
    }
}
