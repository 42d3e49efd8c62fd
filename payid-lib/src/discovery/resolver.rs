//! WebFinger fetching and the bounded delegation loop.

use percent_encoding::utf8_percent_encode;
use url::Url;

use super::{expand_url_template, select_link, Link, ResourceDescriptor};
use super::{QUERY_COMPONENT, WEBFINGER_PATH};
use crate::config::ResolverConfig;
use crate::transport::HttpTransport;
use crate::{PayId, PayIdError, Result};

const JRD_HEADERS: [(&str, &str); 2] = [
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

/// The WebFinger URL queried first for `payid`:
/// `https://{host}/.well-known/webfinger?resource={account}${host}`.
pub fn webfinger_url(payid: &PayId) -> Result<Url> {
    let mut url = Url::parse(&format!("https://{}{}", payid.host(), WEBFINGER_PATH))
        .map_err(|e| PayIdError::invalid_payid(payid.to_string(), e.to_string()))?;
    let resource = utf8_percent_encode(&payid.to_string(), QUERY_COMPONENT).to_string();
    url.set_query(Some(&format!("resource={}", resource)));
    Ok(url)
}

/// Resolves PayIDs to HTTPS URLs using WebFinger discovery.
///
/// The resolver holds no state besides its transport and configuration, so a
/// single instance can serve concurrent resolutions when the transport is
/// shareable.
///
/// # Example
///
/// ```rust
/// use payid_lib::discovery::PayIdResolver;
/// use payid_lib::transport::InMemoryTransport;
/// use payid_lib::PayId;
///
/// # async fn demo() -> payid_lib::Result<()> {
/// let transport = InMemoryTransport::new();
/// transport.respond_json(
///     "https://example.com/.well-known/webfinger?resource=alice$example.com",
///     &serde_json::json!({
///         "links": [{
///             "rel": "http://payid.org/rel/payid/1.0",
///             "template": "https://pay.example.com/{acctpart}"
///         }]
///     }),
/// );
///
/// let resolver = PayIdResolver::new(transport);
/// let url = resolver.resolve(&PayId::parse("alice$example.com")?).await?;
/// assert_eq!(url.as_str(), "https://pay.example.com/alice");
/// # Ok(())
/// # }
/// ```
pub struct PayIdResolver<T> {
    transport: T,
    config: ResolverConfig,
}

impl<T> PayIdResolver<T> {
    /// Create a resolver with default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ResolverConfig::default())
    }

    /// Create a resolver with the given configuration.
    pub fn with_config(transport: T, config: ResolverConfig) -> Self {
        Self { transport, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T> PayIdResolver<T>
where
    T: HttpTransport,
{
    /// Resolve `payid` to the HTTPS URL of its PayID endpoint.
    ///
    /// # Errors
    ///
    /// - `RequestFailed` when a request cannot be completed
    /// - `ErrorResponse` when a WebFinger server answers with a non-200 status
    /// - `InvalidResponse` when a descriptor is missing, malformed, has no
    ///   usable link, or delegates without an href
    /// - `Unknown` when delegation is still going after the hop ceiling
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, payid), fields(payid = %payid)))]
    pub async fn resolve(&self, payid: &PayId) -> Result<Url> {
        let start = webfinger_url(payid)?;
        self.resolve_from(&start, payid).await
    }

    /// Run discovery starting at an explicit WebFinger URL instead of the
    /// PayID's host. Hop counting and failure rules match [`resolve`].
    ///
    /// [`resolve`]: PayIdResolver::resolve
    pub async fn resolve_from(&self, discovery_url: &Url, payid: &PayId) -> Result<Url> {
        let mut link = self.fetch_link(discovery_url).await?;
        let mut fetches: u32 = 1;

        while link.is_discovery() {
            if fetches >= self.config.max_discovery_hops {
                #[cfg(feature = "tracing")]
                tracing::warn!(fetches, "giving up on WebFinger delegation");
                return Err(PayIdError::Unknown(
                    "maximum discovery retries reached".to_string(),
                ));
            }

            let href = link.href.as_deref().ok_or_else(|| {
                PayIdError::invalid_response(
                    "discovery delegation improperly configured, missing href",
                )
            })?;
            let next = Url::parse(href).map_err(|e| {
                PayIdError::invalid_response(format!("invalid discovery href '{}': {}", href, e))
            })?;

            #[cfg(feature = "tracing")]
            tracing::debug!(hop = fetches + 1, url = %next, "following WebFinger delegation");

            link = self.fetch_link(&next).await?;
            fetches += 1;
        }

        let target = link.target()?;
        expand_url_template(target, payid)
    }

    /// Fetch the descriptor for `payid`'s host and select its link.
    pub async fn fetch_link_for(&self, payid: &PayId) -> Result<Link> {
        let url = webfinger_url(payid)?;
        self.fetch_link(&url).await
    }

    /// Fetch the descriptor at `url` and select its link.
    pub async fn fetch_link(&self, url: &Url) -> Result<Link> {
        let descriptor = self.fetch_descriptor(url).await?;
        select_link(&descriptor).cloned()
    }

    /// Fetch and decode the resource descriptor at `url`.
    ///
    /// Performs exactly one request; nothing is retried.
    pub async fn fetch_descriptor(&self, url: &Url) -> Result<ResourceDescriptor> {
        let response = self.transport.get(url, &JRD_HEADERS).await.map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(%url, "failed to execute WebFinger request: {err}");
            PayIdError::RequestFailed(format!("failed to execute WebFinger request: {}", err))
        })?;

        if response.status != 200 {
            #[cfg(feature = "tracing")]
            tracing::warn!(%url, status = response.status, "WebFinger request returned an error");
            return Err(PayIdError::error_response(response.status));
        }

        let body = response
            .body
            .filter(|body| !body.trim().is_empty())
            .ok_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::warn!(%url, "WebFinger response had no body");
                PayIdError::invalid_response("WebFinger server didn't return a JRD")
            })?;

        serde_json::from_str(&body).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(%url, "unable to deserialize WebFinger JRD: {err}");
            PayIdError::from(err)
        })
    }
}
