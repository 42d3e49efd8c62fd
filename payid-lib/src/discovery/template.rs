//! PayID URI template expansion.
//!
//! The account part of a PayID is substituted for `{acctpart}`. Where the
//! placeholder sits decides how the account is encoded. When it forms a whole
//! path segment it is inserted raw and the URL parser escapes what it must.
//! Anywhere else it is query-encoded first with spaces written as `%20`.

use percent_encoding::{percent_decode_str, utf8_percent_encode};
use url::{form_urlencoded, Url};

use super::{ACCT_PART_PLACEHOLDER, QUERY_COMPONENT};
use crate::{PayId, PayIdError, Result};

/// Expand a PayID URL or URI template into the final HTTPS URL.
///
/// The result always uses the `https` scheme and keeps the template's host,
/// path segments, query parameters (in order) and fragment. The port is not
/// carried over.
///
/// # Errors
///
/// Returns [`PayIdError::InvalidResponse`] when the expanded string is not a
/// URL with a host.
///
/// # Example
///
/// ```rust
/// use payid_lib::{discovery::expand_url_template, PayId};
///
/// let payid = PayId::new("alice bob", "example.com")?;
/// let url = expand_url_template("http://example.com/pay?user={acctpart}", &payid)?;
/// assert_eq!(url.as_str(), "https://example.com/pay?user=alice%20bob");
/// # Ok::<(), payid_lib::PayIdError>(())
/// ```
pub fn expand_url_template(template: &str, payid: &PayId) -> Result<Url> {
    let account = if placeholder_in_path(template) {
        payid.account().to_string()
    } else {
        encode_query_value(payid.account())
    };

    let expanded = template.replace(ACCT_PART_PLACEHOLDER, &account);
    let parsed = Url::parse(&expanded).map_err(|e| {
        PayIdError::invalid_response(format!("invalid URL template '{}': {}", template, e))
    })?;
    let host = parsed.host_str().ok_or_else(|| {
        PayIdError::invalid_response(format!("invalid URL template '{}': missing host", template))
    })?;

    let mut url = Url::parse(&format!("https://{}/", host)).map_err(|e| {
        PayIdError::invalid_response(format!("invalid URL template '{}': {}", template, e))
    })?;

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|segments| segments.collect())
        .unwrap_or_default();
    url.set_path(&segments.join("/"));

    let query = rebuild_query(&parsed);
    url.set_query(query.as_deref());
    url.set_fragment(parsed.fragment());

    Ok(url)
}

/// Whether some path segment of `template` is exactly `{acctpart}`.
///
/// Segments are compared after percent-decoding. A placeholder sharing a
/// segment with other text, or a template that does not parse, counts as
/// query-positioned and gets the encoded account.
fn placeholder_in_path(template: &str) -> bool {
    let Ok(parsed) = Url::parse(template) else {
        return false;
    };
    parsed
        .path_segments()
        .map(|mut segments| {
            segments.any(|segment| {
                percent_decode_str(segment).decode_utf8_lossy() == ACCT_PART_PLACEHOLDER
            })
        })
        .unwrap_or(false)
}

/// Form-encode `account` for use in a query, writing spaces as `%20`.
///
/// Form encoding cannot fail, so there is no raw fallback path.
fn encode_query_value(account: &str) -> String {
    form_urlencoded::byte_serialize(account.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Re-encode every query parameter of `parsed`, preserving order and duplicates.
///
/// Parameters written without `=` stay bare.
fn rebuild_query(parsed: &Url) -> Option<String> {
    let query = parsed.query().filter(|q| !q.is_empty())?;
    let pairs: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => format!(
                "{}={}",
                utf8_percent_encode(&decode_form_component(name), QUERY_COMPONENT),
                utf8_percent_encode(&decode_form_component(value), QUERY_COMPONENT)
            ),
            None => utf8_percent_encode(&decode_form_component(pair), QUERY_COMPONENT).to_string(),
        })
        .collect();
    Some(pairs.join("&"))
}

/// Decode one form-encoded query component (`+` is a space).
fn decode_form_component(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}
