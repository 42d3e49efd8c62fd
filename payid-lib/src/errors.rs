//! Error types for PayID discovery.
//!
//! Resolution failures fall into a flat taxonomy: the request could not be
//! made, the server answered with an error status, the answer was unusable,
//! or something else went wrong (including runaway delegation). Parsing a
//! PayID string has its own variant since it happens before any discovery.

use std::fmt;

use crate::transport::TransportError;

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum PayIdErrorCode {
    /// Transport could not complete the exchange
    RequestFailed = 2000,
    /// Server responded with a non-200 status
    ErrorResponse = 4000,
    /// Response was unusable
    InvalidResponse = 5000,
    /// PayID string could not be parsed
    InvalidPayId = 5001,
    /// Internal/unexpected error
    Unknown = 9999,
}

/// Coarse classification of a [`PayIdError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayIdErrorKind {
    RequestFailed,
    ErrorResponse,
    InvalidResponse,
    InvalidPayId,
    Unknown,
}

impl PayIdErrorKind {
    /// Stable kebab-case name, as shown to end users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestFailed => "request-failed",
            Self::ErrorResponse => "error-response",
            Self::InvalidResponse => "invalid-response",
            Self::InvalidPayId => "invalid-payid",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PayIdErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for PayID parsing and discovery.
#[derive(Debug)]
pub enum PayIdError {
    /// The transport could not complete the HTTP exchange (I/O, TLS, DNS, timeout).
    RequestFailed(String),

    /// The server responded with a non-200 status.
    ErrorResponse {
        /// HTTP status code returned by the server
        status: u16,
        /// Human-readable description
        message: String,
    },

    /// The response was 200 but could not be used for discovery.
    InvalidResponse(String),

    /// The input string is not a valid PayID.
    InvalidPayId {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// Delegation ceiling reached or another unexpected condition.
    Unknown(String),
}

impl PayIdError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> PayIdErrorCode {
        match self {
            Self::RequestFailed(_) => PayIdErrorCode::RequestFailed,
            Self::ErrorResponse { .. } => PayIdErrorCode::ErrorResponse,
            Self::InvalidResponse(_) => PayIdErrorCode::InvalidResponse,
            Self::InvalidPayId { .. } => PayIdErrorCode::InvalidPayId,
            Self::Unknown(_) => PayIdErrorCode::Unknown,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> PayIdErrorKind {
        match self {
            Self::RequestFailed(_) => PayIdErrorKind::RequestFailed,
            Self::ErrorResponse { .. } => PayIdErrorKind::ErrorResponse,
            Self::InvalidResponse(_) => PayIdErrorKind::InvalidResponse,
            Self::InvalidPayId { .. } => PayIdErrorKind::InvalidPayId,
            Self::Unknown(_) => PayIdErrorKind::Unknown,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Create an error-response error for the given HTTP status.
    pub fn error_response(status: u16) -> Self {
        Self::ErrorResponse {
            status,
            message: format!("WebFinger server returned error code {}", status),
        }
    }

    /// Create an invalid-response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create an invalid PayID error.
    pub fn invalid_payid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPayId {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PayIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed(msg) => write!(f, "request failed: {}", msg),
            Self::ErrorResponse { message, .. } => write!(f, "error response: {}", message),
            Self::InvalidResponse(msg) => write!(f, "invalid response: {}", msg),
            Self::InvalidPayId { input, reason } => {
                write!(f, "invalid PayID '{}': {}", input, reason)
            }
            Self::Unknown(msg) => write!(f, "unknown error: {}", msg),
        }
    }
}

impl std::error::Error for PayIdError {}

impl From<serde_json::Error> for PayIdError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(format!("unable to deserialize WebFinger JRD: {}", err))
    }
}

impl From<TransportError> for PayIdError {
    fn from(err: TransportError) -> Self {
        Self::RequestFailed(err.to_string())
    }
}
