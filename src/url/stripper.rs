//! Component stripping for URL-like strings.
//!
//! Each function looks for one delimiter, splits the input and returns
//! `(remainder, extracted)`. None of them fail: when the delimiter is absent
//! or the split is rejected, the input comes back unchanged with an empty
//! component. The extractor applies them in a fixed order so that earlier
//! cuts hide characters from later stages:
//!
//! scheme, fragment, query, path, user info, port.

/// Split off the scheme at `://`.
///
/// When `://` occurs more than once the split is ambiguous and the input is
/// returned whole with an empty scheme.
///
/// # Examples
///
/// ```
/// use urlextract::url::strip_scheme;
///
/// assert_eq!(strip_scheme("https://example.com"), ("example.com".to_string(), "https".to_string()));
/// assert_eq!(strip_scheme("example.com"), ("example.com".to_string(), String::new()));
/// ```
pub fn strip_scheme(input: &str) -> (String, String) {
    let parts: Vec<&str> = input.split("://").collect();
    if parts.len() != 2 {
        return (input.to_string(), String::new());
    }
    (parts[1].to_string(), parts[0].to_string())
}

/// Split off a fragment at the first `#`.
///
/// An empty fragment is not extracted and the `#` stays in the remainder.
pub fn strip_fragment(input: &str) -> (String, String) {
    split_non_empty_suffix(input, '#')
}

/// Split off a query at the first `?`.
///
/// An empty query is not extracted and the `?` stays in the remainder.
pub fn strip_query(input: &str) -> (String, String) {
    split_non_empty_suffix(input, '?')
}

fn split_non_empty_suffix(input: &str, delimiter: char) -> (String, String) {
    match input.split_once(delimiter) {
        Some((rest, suffix)) if !suffix.is_empty() => (rest.to_string(), suffix.to_string()),
        _ => (input.to_string(), String::new()),
    }
}

/// Split off a path at the first `/`.
///
/// A bare trailing `/` is dropped from the remainder and yields an empty path.
///
/// # Examples
///
/// ```
/// use urlextract::url::strip_path;
///
/// assert_eq!(strip_path("example.com/a/b"), ("example.com".to_string(), "a/b".to_string()));
/// assert_eq!(strip_path("example.com/"), ("example.com".to_string(), String::new()));
/// ```
pub fn strip_path(input: &str) -> (String, String) {
    match input.split_once('/') {
        Some((rest, path)) => (rest.to_string(), path.to_string()),
        None => (input.to_string(), String::new()),
    }
}

/// Split off user info at `@`.
///
/// With several `@` only the text after the last one is the host; everything
/// before that last `@`, other `@` included, is user info.
pub fn strip_user_info(input: &str) -> (String, String) {
    match input.rsplit_once('@') {
        Some((user_info, host)) => (host.to_string(), user_info.to_string()),
        None => (input.to_string(), String::new()),
    }
}

/// Split off a port at the last `:`.
///
/// The port is only taken when it parses to an integer in `1..=65535`.
/// Anything else leaves the colon and suffix in place and reports port `0`.
pub fn strip_port(input: &str) -> (String, u16) {
    if let Some((host, port)) = input.rsplit_once(':') {
        if let Ok(port) = port.parse::<u16>() {
            if port != 0 {
                return (host.to_string(), port);
            }
        }
    }
    (input.to_string(), 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("https://example.com"), pair("example.com", "https"));
        assert_eq!(strip_scheme("ftp://files.example.com/a"), pair("files.example.com/a", "ftp"));
        assert_eq!(strip_scheme("example.com"), pair("example.com", ""));
        assert_eq!(strip_scheme("://example.com"), pair("example.com", ""));
    }

    #[test]
    fn test_strip_scheme_ambiguous() {
        // Two separators: not split at all
        assert_eq!(
            strip_scheme("https://example.com/?next=http://other.com"),
            pair("https://example.com/?next=http://other.com", "")
        );
    }

    #[test]
    fn test_strip_fragment() {
        assert_eq!(strip_fragment("example.com#frag"), pair("example.com", "frag"));
        assert_eq!(strip_fragment("example.com#a#b"), pair("example.com", "a#b"));
        assert_eq!(strip_fragment("example.com"), pair("example.com", ""));
    }

    #[test]
    fn test_strip_fragment_empty_kept() {
        assert_eq!(strip_fragment("example.com#"), pair("example.com#", ""));
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(strip_query("example.com/p?q=1&r=2"), pair("example.com/p", "q=1&r=2"));
        assert_eq!(strip_query("example.com?"), pair("example.com?", ""));
        assert_eq!(strip_query("example.com"), pair("example.com", ""));
    }

    #[test]
    fn test_strip_path() {
        assert_eq!(strip_path("example.com/path"), pair("example.com", "path"));
        assert_eq!(strip_path("example.com/a/b/c.html"), pair("example.com", "a/b/c.html"));
        assert_eq!(strip_path("example.com/"), pair("example.com", ""));
        assert_eq!(strip_path("example.com"), pair("example.com", ""));
    }

    #[test]
    fn test_strip_path_before_user_info() {
        // The '@' lives in the path and must not reach the user info stage
        let (rest, path) = strip_path("example.com/users/@me");
        assert_eq!(path, "users/@me");
        assert_eq!(strip_user_info(&rest), pair("example.com", ""));
    }

    #[test]
    fn test_strip_user_info() {
        assert_eq!(strip_user_info("user@example.com"), pair("example.com", "user"));
        assert_eq!(strip_user_info("user:pass@example.com"), pair("example.com", "user:pass"));
        assert_eq!(strip_user_info("example.com"), pair("example.com", ""));
    }

    #[test]
    fn test_strip_user_info_multiple_at() {
        assert_eq!(strip_user_info("a@b@example.com"), pair("example.com", "a@b"));
        assert_eq!(strip_user_info("me@x.org:pw@example.com"), pair("example.com", "me@x.org:pw"));
    }

    #[test]
    fn test_strip_port() {
        assert_eq!(strip_port("example.com:8080"), ("example.com".to_string(), 8080));
        assert_eq!(strip_port("example.com:65535"), ("example.com".to_string(), 65535));
        assert_eq!(strip_port("example.com:1"), ("example.com".to_string(), 1));
        assert_eq!(strip_port("example.com"), ("example.com".to_string(), 0));
    }

    #[test]
    fn test_strip_port_rejected() {
        let rejected = vec![
            "example.com:0",
            "example.com:65536",
            "example.com:99999999",
            "example.com:http",
            "example.com:",
            "example.com:-1",
        ];

        for input in rejected {
            assert_eq!(strip_port(input), (input.to_string(), 0), "Port should be rejected: {}", input);
        }
    }

    #[test]
    fn test_strip_port_uses_last_colon() {
        assert_eq!(strip_port("a:b:8080"), ("a:b".to_string(), 8080));
    }

    #[test]
    fn test_absent_delimiters_are_noops() {
        let host = "www.example.co.uk";
        assert_eq!(strip_scheme(host), pair(host, ""));
        assert_eq!(strip_fragment(host), pair(host, ""));
        assert_eq!(strip_query(host), pair(host, ""));
        assert_eq!(strip_path(host), pair(host, ""));
        assert_eq!(strip_user_info(host), pair(host, ""));
        assert_eq!(strip_port(host), (host.to_string(), 0));
    }
}
