//! PayID identifiers.
//!
//! A PayID has the shape `account$host`, optionally written as a URI with
//! the `payid:` scheme:
//!
//! ```rust
//! use payid_lib::PayId;
//!
//! let payid: PayId = "alice$example.com".parse()?;
//! assert_eq!(payid.account(), "alice");
//! assert_eq!(payid.host(), "example.com");
//!
//! let same = PayId::parse("payid:alice$Example.COM")?;
//! assert_eq!(payid, same);
//! # Ok::<(), payid_lib::PayIdError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{PayIdError, Result};

const PAYID_SCHEME: &str = "payid:";

/// A parsed PayID: an account at a host.
///
/// Both parts are non-empty. The canonical string form, used as the
/// WebFinger `resource` parameter, is `account$host`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PayId {
    account: String,
    host: String,
}

impl PayId {
    /// Build a PayID from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`PayIdError::InvalidPayId`] if either part is empty or blank,
    /// or if the host contains whitespace or URL delimiters.
    pub fn new(account: impl Into<String>, host: impl Into<String>) -> Result<Self> {
        let account = account.into();
        let host = host.into();
        let input = format!("{}${}", account, host);

        if account.trim().is_empty() {
            return Err(PayIdError::invalid_payid(input, "account is empty"));
        }
        validate_host(&input, &host)?;

        Ok(Self { account, host })
    }

    /// Parse a PayID string.
    ///
    /// # Supported Formats
    ///
    /// 1. `account$host`
    /// 2. `payid:account$host` (scheme is case-insensitive)
    ///
    /// The split happens at the last `$`, so accounts may themselves contain
    /// `$`. The host is lowercased; the account is kept verbatim.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let body = match trimmed.get(..PAYID_SCHEME.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(PAYID_SCHEME) => {
                &trimmed[PAYID_SCHEME.len()..]
            }
            _ => trimmed,
        };

        let (account, host) = body
            .rsplit_once('$')
            .ok_or_else(|| PayIdError::invalid_payid(input, "missing '$' separator"))?;

        if account.is_empty() {
            return Err(PayIdError::invalid_payid(input, "account is empty"));
        }
        validate_host(input, host)?;

        Ok(Self {
            account: account.to_string(),
            host: host.to_ascii_lowercase(),
        })
    }

    /// The account part (left of `$`).
    pub fn account(&self) -> &str {
        &self.account
    }

    /// The host part (right of `$`).
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Reject hosts that would not address a WebFinger endpoint on their own.
fn validate_host(input: &str, host: &str) -> Result<()> {
    if host.trim().is_empty() {
        return Err(PayIdError::invalid_payid(input, "host is empty"));
    }
    if host.chars().any(char::is_whitespace) {
        return Err(PayIdError::invalid_payid(input, "host contains whitespace"));
    }
    if host.contains(['/', '?', '#', '@', '\\']) {
        return Err(PayIdError::invalid_payid(input, "host contains URL delimiters"));
    }
    Ok(())
}

impl fmt::Display for PayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}${}", self.account, self.host)
    }
}

impl FromStr for PayId {
    type Err = PayIdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PayIdErrorKind;

    #[test]
    fn test_parse_plain() {
        let payid = PayId::parse("alice$example.com").unwrap();
        assert_eq!(payid.account(), "alice");
        assert_eq!(payid.host(), "example.com");
        assert_eq!(payid.to_string(), "alice$example.com");
    }

    #[test]
    fn test_parse_with_scheme() {
        let payid = PayId::parse("  PAYID:bob$wallet.example  ").unwrap();
        assert_eq!(payid.account(), "bob");
        assert_eq!(payid.host(), "wallet.example");
    }

    #[test]
    fn test_parse_splits_on_last_dollar() {
        let payid = PayId::parse("a$b$example.com").unwrap();
        assert_eq!(payid.account(), "a$b");
        assert_eq!(payid.host(), "example.com");
    }

    #[test]
    fn test_parse_keeps_account_case() {
        let payid = PayId::parse("Alice$EXAMPLE.com").unwrap();
        assert_eq!(payid.account(), "Alice");
        assert_eq!(payid.host(), "example.com");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let inputs = [
            "alice",
            "$example.com",
            "alice$",
            "payid:",
            "alice$exa mple.com",
            "alice$evil.com/x",
            "alice$a@b.com",
        ];
        for input in inputs {
            let err = PayId::parse(input).unwrap_err();
            assert_eq!(err.kind(), PayIdErrorKind::InvalidPayId, "input: {input}");
        }
    }

    #[test]
    fn test_new_rejects_empty_parts() {
        assert!(PayId::new("", "example.com").is_err());
        assert!(PayId::new("alice", "  ").is_err());
        assert!(PayId::new("alice bob", "example.com").is_ok());
    }

    #[test]
    fn test_new_rejects_bad_hosts() {
        for host in ["example.com/x", "example.com/evil?", "a@b.com", "exa mple.com", "ex#ample"] {
            let err = PayId::new("alice", host).unwrap_err();
            assert_eq!(err.kind(), PayIdErrorKind::InvalidPayId, "host: {host}");
        }
        assert!(PayId::new("alice", "127.0.0.1:8443").is_ok());
    }
}
