//! Property-based tests for URL template expansion and PayID parsing.
//!
//! These tests use proptest to verify invariants across a wide range of inputs.

#[cfg(test)]
mod expansion_properties {
    use payid_lib::discovery::expand_url_template;
    use payid_lib::PayId;
    use percent_encoding::percent_decode_str;
    use proptest::prelude::*;

    fn payid(account: &str) -> PayId {
        PayId::new(account, "example.com").unwrap()
    }

    proptest! {
        /// The result is always https on the template's host
        #[test]
        fn scheme_is_https(
            scheme in prop::sample::select(vec!["http", "https"]),
            host in "[a-z]{1,10}\\.(com|org|example)",
            account in "[a-zA-Z0-9]{1,16}",
        ) {
            let template = format!("{scheme}://{host}/pay/{{acctpart}}");
            let url = expand_url_template(&template, &payid(&account)).unwrap();

            prop_assert_eq!(url.scheme(), "https");
            prop_assert_eq!(url.host_str(), Some(host.as_str()));
        }

        /// A query-positioned account decodes back to itself and never leaves a raw space or plus
        #[test]
        fn query_value_round_trips(account in "[a-zA-Z0-9 ._+&=#%-]{1,20}") {
            prop_assume!(!account.trim().is_empty());

            let url = expand_url_template(
                "https://example.com/lookup?user={acctpart}&v=1",
                &payid(&account),
            )
            .unwrap();

            let query = url.query().unwrap();
            prop_assert!(!query.contains(' '));
            prop_assert!(!query.contains('+'));

            let (first, rest) = query.split_once('&').unwrap();
            prop_assert_eq!(rest, "v=1");
            let value = first.strip_prefix("user=").unwrap();
            prop_assert_eq!(percent_decode_str(value).decode_utf8_lossy(), account);
        }

        /// A path-positioned account survives verbatim once decoded
        #[test]
        fn path_segment_round_trips(account in "[a-zA-Z0-9]([a-zA-Z0-9 _+~-]{0,14}[a-zA-Z0-9])?") {
            let url = expand_url_template("https://example.com/users/{acctpart}", &payid(&account))
                .unwrap();

            let last = url.path_segments().unwrap().last().unwrap();
            prop_assert_eq!(percent_decode_str(last).decode_utf8_lossy(), account);
            prop_assert!(url.query().is_none());
        }

        /// Literal hrefs without a placeholder come back unchanged
        #[test]
        fn literal_href_unchanged(
            host in "[a-z]{1,10}\\.com",
            segments in prop::collection::vec("[a-z0-9]{1,8}", 0..4),
        ) {
            let href = format!("https://{}/{}", host, segments.join("/"));
            let url = expand_url_template(&href, &payid("alice")).unwrap();
            prop_assert_eq!(url.as_str(), href);
        }
    }
}

#[cfg(test)]
mod payid_properties {
    use payid_lib::PayId;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse yields the same PayID
        #[test]
        fn display_parse_round_trip(
            account in "[a-zA-Z0-9._$-]{1,16}",
            host in "[a-z0-9]{1,10}\\.[a-z]{2,5}",
        ) {
            let payid = PayId::new(account.clone(), host.clone()).unwrap();
            let parsed = PayId::parse(&payid.to_string()).unwrap();

            prop_assert_eq!(parsed.account(), account.as_str());
            prop_assert_eq!(parsed.host(), host.as_str());
        }

        /// The host is case-insensitive, the account is not
        #[test]
        fn host_lowercased(
            account in "[a-zA-Z]{1,10}",
            host in "[a-zA-Z]{1,10}\\.COM",
        ) {
            let parsed = PayId::parse(&format!("payid:{account}${host}")).unwrap();
            prop_assert_eq!(parsed.account(), account.as_str());
            prop_assert_eq!(parsed.host(), host.to_ascii_lowercase());
        }
    }
}
