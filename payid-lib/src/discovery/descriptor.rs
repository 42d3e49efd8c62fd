//! WebFinger resource descriptors and link selection.

use serde::{Deserialize, Serialize};

use super::{DISCOVERY_REL, PAYID_REL};
use crate::{PayIdError, Result};

/// A typed link from a WebFinger resource descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation type of the link.
    #[serde(rename = "rel")]
    pub relation: String,
    /// Literal target URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// URI template containing the `{acctpart}` placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Link {
    /// A link with only a relation.
    pub fn new(relation: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            href: None,
            template: None,
        }
    }

    /// Set the href.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Whether this link delegates discovery to another WebFinger endpoint.
    pub fn is_discovery(&self) -> bool {
        self.relation == DISCOVERY_REL
    }

    /// Whether this link carries the PayID relation.
    pub fn is_payid(&self) -> bool {
        self.relation == PAYID_REL
    }

    /// The string to expand when this link ends discovery: the template if
    /// present, otherwise the href.
    pub fn target(&self) -> Result<&str> {
        self.template
            .as_deref()
            .or(self.href.as_deref())
            .ok_or_else(|| PayIdError::invalid_response("no href or template found"))
    }
}

/// JSON Resource Descriptor returned by a WebFinger endpoint.
///
/// Only `links` is interpreted; other members are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Links in document order.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl ResourceDescriptor {
    /// A descriptor with the given links.
    pub fn new(links: Vec<Link>) -> Self {
        Self { links }
    }
}

/// Pick the link that drives the next discovery step.
///
/// The first PayID-relation link wins; failing that, the first
/// discovery-relation link. Links with other relations are ignored.
pub fn select_link(descriptor: &ResourceDescriptor) -> Result<&Link> {
    descriptor
        .links
        .iter()
        .find(|link| link.is_payid())
        .or_else(|| descriptor.links.iter().find(|link| link.is_discovery()))
        .ok_or_else(|| PayIdError::invalid_response("no acceptable link relation found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PayIdErrorKind;

    #[test]
    fn test_decode_jrd() {
        let json = r#"{
            "subject": "payid:alice$example.com",
            "links": [
                {"rel": "http://webfinger.net/rel/profile-page", "href": "https://example.com/~alice"},
                {"rel": "http://payid.org/rel/payid/1.0", "template": "https://example.com/{acctpart}"}
            ]
        }"#;
        let descriptor: ResourceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.links.len(), 2);
        assert!(descriptor.links[1].is_payid());
        assert_eq!(descriptor.links[1].href, None);
    }

    #[test]
    fn test_missing_links_is_empty() {
        let descriptor: ResourceDescriptor = serde_json::from_str("{}").unwrap();
        assert!(descriptor.links.is_empty());
    }

    #[test]
    fn test_payid_beats_discovery_regardless_of_order() {
        let descriptor = ResourceDescriptor::new(vec![
            Link::new(DISCOVERY_REL).with_href("https://next.example/"),
            Link::new("other").with_href("https://ignored.example/"),
            Link::new(PAYID_REL).with_href("https://first.example/"),
            Link::new(PAYID_REL).with_href("https://second.example/"),
        ]);
        let link = select_link(&descriptor).unwrap();
        assert_eq!(link.href.as_deref(), Some("https://first.example/"));
    }

    #[test]
    fn test_first_discovery_link_when_no_payid() {
        let descriptor = ResourceDescriptor::new(vec![
            Link::new("other"),
            Link::new(DISCOVERY_REL).with_href("https://one.example/"),
            Link::new(DISCOVERY_REL).with_href("https://two.example/"),
        ]);
        let link = select_link(&descriptor).unwrap();
        assert_eq!(link.href.as_deref(), Some("https://one.example/"));
    }

    #[test]
    fn test_no_acceptable_link() {
        let descriptor = ResourceDescriptor::new(vec![Link::new("other").with_href("x")]);
        let err = select_link(&descriptor).unwrap_err();
        assert_eq!(err.kind(), PayIdErrorKind::InvalidResponse);
        assert!(err.to_string().contains("no acceptable link relation"));
    }

    #[test]
    fn test_target_prefers_template() {
        let link = Link::new(PAYID_REL)
            .with_href("https://href.example/")
            .with_template("https://template.example/{acctpart}");
        assert_eq!(link.target().unwrap(), "https://template.example/{acctpart}");

        let link = Link::new(PAYID_REL).with_href("https://href.example/");
        assert_eq!(link.target().unwrap(), "https://href.example/");

        let err = Link::new(PAYID_REL).target().unwrap_err();
        assert_eq!(err.kind(), PayIdErrorKind::InvalidResponse);
    }
}
