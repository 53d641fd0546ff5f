//! Tests for the individual pipeline stages and the suffix list seam.

use std::collections::HashSet;

use urlextract::url::*;
use urlextract::*;

#[test]
fn test_input_normalization() {
    let test_cases = vec![
        ("HTTPS://EXAMPLE.COM/", "https://example.com/"),
        ("  www.example.com\n", "www.example.com"),
        ("Exa\tmple .Org", "example.org"),
        ("CAFÉ.com", "café.com"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(normalize_input(input), expected, "Normalization failed for: {:?}", input);
    }
}

#[test]
fn test_input_normalization_idempotent() {
    let inputs = vec!["https://www.example.com/a?b#c", "user@host.example.org:80", "bücher.de"];

    for input in inputs {
        let normalized = normalize_input(input);
        assert_eq!(normalize_input(&normalized), normalized);
    }
}

#[test]
fn test_stages_in_order() {
    let input = normalize_input("HTTPS://Me:Pw@Shop.Example.co.uk:8443/Cart/Items?id=7&x=/y#top");

    let (s, scheme) = strip_scheme(&input);
    assert_eq!(scheme, "https");

    let (s, fragment) = strip_fragment(&s);
    assert_eq!(fragment, "top");

    let (s, query) = strip_query(&s);
    assert_eq!(query, "id=7&x=/y");

    let (s, path) = strip_path(&s);
    assert_eq!(path, "cart/items");

    let (s, user_info) = strip_user_info(&s);
    assert_eq!(user_info, "me:pw");

    let (s, port) = strip_port(&s);
    assert_eq!(port, 8443);
    assert_eq!(s, "shop.example.co.uk");

    let host = normalize_host(&s).unwrap();
    let split = split_host_with_psl(&host, &PublicSuffixList, SplitOptions::default()).unwrap();
    assert_eq!(split.sub_domain, "shop");
    assert_eq!(split.apex_domain, "example");
    assert_eq!(split.tld, "co.uk");

    // The pipeline gives the same answer in one call
    let parsed = extract("HTTPS://Me:Pw@Shop.Example.co.uk:8443/Cart/Items?id=7&x=/y#top").unwrap();
    assert_eq!(parsed.scheme, scheme);
    assert_eq!(parsed.fragment, fragment);
    assert_eq!(parsed.query, query);
    assert_eq!(parsed.path, path);
    assert_eq!(parsed.user_info, user_info);
    assert_eq!(parsed.port, port);
    assert_eq!(parsed.sub_domain, split.sub_domain);
}

#[test]
fn test_absent_delimiters() {
    let host = "www.example.com";

    assert_eq!(strip_scheme(host).0, host);
    assert_eq!(strip_fragment(host).0, host);
    assert_eq!(strip_query(host).0, host);
    assert_eq!(strip_path(host).0, host);
    assert_eq!(strip_user_info(host).0, host);
    assert_eq!(strip_port(host).0, host);

    let parsed = extract(host).unwrap();
    assert_eq!(parsed.host(), host);
    assert!(!parsed.has_port());
    assert!(!parsed.has_user_info());
    assert!(!parsed.has_path());
    assert!(!parsed.has_query());
    assert!(!parsed.has_fragment());
}

#[test]
fn test_label_validators() {
    assert!(validate_apex_domain("example").is_ok());
    assert!(validate_apex_domain("exa--mple").is_ok());
    assert!(validate_apex_domain("-example").is_err());
    assert!(validate_apex_domain("_example").is_err());

    assert!(validate_sub_domain("_dmarc").is_ok());
    assert!(validate_sub_domain("www.eu-west").is_ok());
    assert_eq!(
        validate_sub_domain("www.bad$label"),
        Err(ExtractError::InvalidSubDomain("bad$label".to_string()))
    );
}

/// Suffix table where every listed rule is ICANN and matches only exactly.
struct StaticList(HashSet<&'static str>);

impl SuffixList for StaticList {
    fn public_suffix(&self, candidate: &str) -> Option<SuffixMatch> {
        let labels: Vec<&str> = candidate.split('.').collect();
        (0..labels.len())
            .map(|start| labels[start..].join("."))
            .find(|tail| self.0.contains(tail.as_str()))
            .map(|suffix| SuffixMatch {
                suffix,
                section: Some(Section::Icann),
            })
    }
}

#[test]
fn test_longest_suffix_preference() {
    let list = StaticList(["d", "c.d", "b.c.d"].into_iter().collect());
    let extractor = Extractor::with_suffix_list(list);

    let parsed = extractor.extract("a.b.c.d").unwrap();
    assert_eq!(parsed.apex_domain, "a");
    assert_eq!(parsed.tld, "b.c.d");
    assert_eq!(parsed.sub_domain, "");

    let parsed = extractor.extract("https://www.a.b.c.d/index").unwrap();
    assert_eq!(parsed.sub_domain, "www");
    assert_eq!(parsed.apex_domain, "a");
    assert_eq!(parsed.tld, "b.c.d");
}

#[test]
fn test_custom_list_without_match() {
    let list = StaticList(["test"].into_iter().collect());
    let extractor = Extractor::with_suffix_list(list);

    assert_eq!(
        extractor.extract("www.example.com"),
        Err(ExtractError::MissingTld("www.example.com".to_string()))
    );
    assert!(extractor.extract("www.example.test").is_ok());
}

#[test]
fn test_component_accessor() {
    let parsed = extract("https://api.example.com:8443/v1?q=1#top").unwrap();

    let expected = vec![
        (UrlComponent::Scheme, "https"),
        (UrlComponent::UserInfo, ""),
        (UrlComponent::Host, "api.example.com"),
        (UrlComponent::SubDomain, "api"),
        (UrlComponent::ApexDomain, "example"),
        (UrlComponent::RegistrableDomain, "example.com"),
        (UrlComponent::Tld, "com"),
        (UrlComponent::Port, "8443"),
        (UrlComponent::Path, "v1"),
        (UrlComponent::Query, "q=1"),
        (UrlComponent::Fragment, "top"),
    ];

    for (component, value) in expected {
        assert_eq!(parsed.component(component), value, "Mismatch for {:?}", component);
    }
}
