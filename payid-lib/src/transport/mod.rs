//! HTTP transport abstraction used by the resolver.
//!
//! The resolver only needs "GET(url, headers) → status + body". Two
//! implementations ship with the crate:
//!
//! - [`ReqwestTransport`] performs real requests (requires the
//!   `http-transport` feature).
//! - [`InMemoryTransport`] serves canned responses and records every request,
//!   for offline use and tests.

mod memory;
mod traits;

#[cfg(feature = "http-transport")]
mod http;

pub use memory::{InMemoryTransport, RecordedRequest};
pub use traits::{HttpResponse, HttpTransport, TransportError};

#[cfg(feature = "http-transport")]
pub use http::ReqwestTransport;
