//! Prelude module for convenient imports.
//!
//! ```rust
//! use payid_lib::prelude::*;
//! ```
//!
//! ## What's Included
//!
//! - Core types: `PayId`, `Link`, `ResourceDescriptor`, `PayIdResolver`
//! - Error types: `PayIdError`, `PayIdErrorCode`, `PayIdErrorKind`, `Result`
//! - Transport: `HttpTransport`, `HttpResponse`, `InMemoryTransport`
//! - Configuration: `ResolverConfig`, `HttpTransportConfig`

// Core types
pub use crate::discovery::{
    expand_url_template, select_link, webfinger_url, Link, PayIdResolver, ResourceDescriptor,
};
pub use crate::PayId;
pub use crate::{resolve_payid_url, Url};

// Error handling
pub use crate::errors::{PayIdError, PayIdErrorCode, PayIdErrorKind};
pub use crate::Result;

// Transport
pub use crate::transport::{HttpResponse, HttpTransport, InMemoryTransport, TransportError};

#[cfg(feature = "http-transport")]
pub use crate::transport::ReqwestTransport;

// Configuration
pub use crate::config::{HttpTransportConfig, ResolverConfig};

// Ledger
pub use crate::ledger::RawTransactionStatus;
