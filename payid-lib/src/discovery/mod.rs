//! PayID discovery over WebFinger.
//!
//! Resolution asks the PayID's host for a resource descriptor, follows
//! discovery-relation links to other WebFinger endpoints for a bounded number
//! of hops, then expands the terminal link's template (or takes its href)
//! into the final HTTPS URL.
//!
//! ```text
//! PayId ──► https://{host}/.well-known/webfinger?resource=account$host
//!             │
//!             ├─ payid link ─────────► expand template/href ──► Url
//!             └─ discovery link ─► fetch href ─► (repeat, bounded)
//! ```

use percent_encoding::{AsciiSet, CONTROLS};

mod descriptor;
mod resolver;
mod template;

pub use descriptor::{select_link, Link, ResourceDescriptor};
pub use resolver::{webfinger_url, PayIdResolver};
pub use template::expand_url_template;

/// Relation of a link that delegates discovery to another WebFinger endpoint.
pub const DISCOVERY_REL: &str = "http://payid.org/rel/discovery/1.0";

/// Relation of a link that points at the PayID endpoint itself.
pub const PAYID_REL: &str = "http://payid.org/rel/payid/1.0";

/// Path of the WebFinger endpoint on a PayID host.
pub const WEBFINGER_PATH: &str = "/.well-known/webfinger";

/// Placeholder substituted with the account part in URI templates.
pub const ACCT_PART_PLACEHOLDER: &str = "{acctpart}";

/// Characters escaped in rebuilt query names and values.
pub(crate) const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');
