//! PayID discovery library.
//!
//! Resolves a PayID (`account$host`) to the HTTPS URL of its PayID endpoint
//! by querying the host's WebFinger resource descriptor, following bounded
//! discovery delegation and expanding the final URL template.
//!
//! The library is transport-agnostic: requests go through the
//! [`HttpTransport`] trait, injected into a [`PayIdResolver`].
//!
//! # Features
//!
//! - **`http-transport`**: `ReqwestTransport`, a reqwest-backed transport
//! - **`tracing`**: spans and events for every request and delegation hop
//!
//! # Example
//!
//! ```rust
//! use payid_lib::transport::InMemoryTransport;
//! use payid_lib::{resolve_payid_url, PayId};
//!
//! # async fn demo() -> payid_lib::Result<()> {
//! let transport = InMemoryTransport::new();
//! transport.respond_json(
//!     "https://example.com/.well-known/webfinger?resource=alice$example.com",
//!     &serde_json::json!({
//!         "links": [{
//!             "rel": "http://payid.org/rel/payid/1.0",
//!             "href": "https://example.com/alice"
//!         }]
//!     }),
//! );
//!
//! let url = resolve_payid_url(transport, &"alice$example.com".parse()?).await?;
//! assert_eq!(url.as_str(), "https://example.com/alice");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discovery;
pub mod errors;
pub mod ledger;
pub mod payid;
pub mod prelude;
pub mod transport;

pub use discovery::{Link, PayIdResolver, ResourceDescriptor, DISCOVERY_REL, PAYID_REL};
pub use errors::{PayIdError, PayIdErrorCode, PayIdErrorKind};
pub use payid::PayId;
pub use transport::{HttpResponse, HttpTransport, TransportError};

pub use url::Url;

/// Common result alias for PayID operations.
pub type Result<T> = std::result::Result<T, PayIdError>;

/// Resolve `payid` with a default-configured resolver over `transport`.
///
/// Shorthand for `PayIdResolver::new(transport).resolve(payid)`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(transport)))]
pub async fn resolve_payid_url<T>(transport: T, payid: &PayId) -> Result<Url>
where
    T: HttpTransport,
{
    PayIdResolver::new(transport).resolve(payid).await
}
