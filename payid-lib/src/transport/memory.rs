//! In-memory HTTP transport.
//!
//! Serves canned responses keyed by URL and records every request it sees.
//! Nothing leaves the process, which makes it suitable for tests and for
//! exercising discovery logic offline.
//!
//! # Thread Safety
//!
//! Routes and the request log live behind `RwLock`s. Lock poisoning while
//! serving a request is reported as a [`TransportError`] rather than a panic.
//! Adding routes recovers a poisoned table so no route is lost.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use url::Url;

use super::traits::{HttpResponse, HttpTransport, TransportError};

/// What the transport does when a route is hit.
#[derive(Clone, Debug)]
enum Route {
    Respond(HttpResponse),
    Fail(String),
}

/// A request observed by [`InMemoryTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Requested URL.
    pub url: Url,
    /// Headers sent with the request, in order.
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Value of the first header matching `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Canned-response transport.
///
/// Unrouted URLs answer `404` with no body.
///
/// # Example
///
/// ```
/// use payid_lib::transport::InMemoryTransport;
///
/// let transport = InMemoryTransport::new();
/// transport.respond("https://example.com/.well-known/webfinger", 200, "{\"links\":[]}");
/// assert_eq!(transport.request_count(), 0);
/// ```
pub struct InMemoryTransport {
    routes: RwLock<HashMap<String, Route>>,
    requests: RwLock<Vec<RecordedRequest>>,
}

fn lock_error(context: &str) -> TransportError {
    TransportError::Request(format!(
        "InMemoryTransport: lock poisoned during {}",
        context
    ))
}

/// Normalizes a URL string the same way request URLs are normalized.
fn route_key(url: &str) -> String {
    Url::parse(url)
        .map(|parsed| parsed.to_string())
        .unwrap_or_else(|_| url.to_string())
}

impl InMemoryTransport {
    /// Create a transport with no routes.
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(HashMap::new()),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Scripting never drops a route: a poisoned route table is recovered.
    fn insert(&self, url: &str, route: Route) {
        self.routes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(route_key(url), route);
    }

    /// Answer requests for `url` with `status` and `body`.
    pub fn respond(&self, url: &str, status: u16, body: impl Into<String>) {
        self.insert(url, Route::Respond(HttpResponse::new(status, body)));
    }

    /// Answer requests for `url` with `200` and the serialized JSON value.
    pub fn respond_json(&self, url: &str, body: &serde_json::Value) {
        self.respond(url, 200, body.to_string());
    }

    /// Answer requests for `url` with `status` and no body.
    pub fn respond_empty(&self, url: &str, status: u16) {
        self.insert(url, Route::Respond(HttpResponse::empty(status)));
    }

    /// Fail requests for `url` at the transport level.
    pub fn fail(&self, url: &str, reason: impl Into<String>) {
        self.insert(url, Route::Fail(reason.into()));
    }

    /// All requests seen so far, oldest first.
    ///
    /// Returns an empty list if the lock is poisoned.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .read()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests.read().map(|r| r.len()).unwrap_or(0)
    }
}

impl Default for InMemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl HttpTransport for InMemoryTransport {
    async fn get(
        &self,
        url: &Url,
        headers: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        self.requests
            .write()
            .map_err(|_| lock_error("record"))?
            .push(RecordedRequest {
                url: url.clone(),
                headers: headers
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            });

        let route = self
            .routes
            .read()
            .map_err(|_| lock_error("lookup"))?
            .get(url.as_str())
            .cloned();

        match route {
            Some(Route::Respond(response)) => Ok(response),
            Some(Route::Fail(reason)) => Err(TransportError::Connect {
                target: url.to_string(),
                reason,
            }),
            None => Ok(HttpResponse::empty(404)),
        }
    }
}
