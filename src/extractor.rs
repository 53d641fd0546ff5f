//! URL extraction pipeline.
//!
//! This module provides the main API for splitting URL-like strings into
//! their components.

use tracing::{debug, trace};

use crate::error::ExtractError;
use crate::types::ParsedUrl;
use crate::url::normalizer::{normalize_host, normalize_input};
use crate::url::psl::{split_host_with_psl, PublicSuffixList, SplitOptions, SuffixList};
use crate::url::stripper::{
    strip_fragment, strip_path, strip_port, strip_query, strip_scheme, strip_user_info,
};
use crate::url::validator::{validate_apex_domain, validate_sub_domain};

/// Tunable limits for an [`Extractor`].
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Minimum length of the host candidate left after the scheme is removed (in characters)
    pub min_host_len: usize,
    /// Longest public suffix tried, in labels
    pub max_suffix_labels: usize,
    /// Only accept ICANN suffixes as a registry boundary
    pub require_icann: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_host_len: 4,
            max_suffix_labels: 3,
            require_icann: true,
        }
    }
}

/// Splits URL-like strings using a public suffix knowledge base.
///
/// The extractor holds no mutable state; one instance can serve any number
/// of threads when its suffix list is `Sync`.
#[derive(Debug, Clone)]
pub struct Extractor<L = PublicSuffixList> {
    list: L,
    config: ExtractorConfig,
}

impl Extractor<PublicSuffixList> {
    /// Create an extractor backed by the embedded Public Suffix List.
    pub fn new() -> Self {
        Self::with_suffix_list(PublicSuffixList)
    }
}

impl Default for Extractor<PublicSuffixList> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SuffixList> Extractor<L> {
    /// Create an extractor backed by a custom suffix list.
    pub fn with_suffix_list(list: L) -> Self {
        Self {
            list,
            config: ExtractorConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Split a URL-like string into its components.
    ///
    /// Stages run in a fixed order, each one cutting its component off the
    /// remaining buffer:
    /// 1. Lowercase and drop whitespace
    /// 2. Scheme, then the minimum length check
    /// 3. Fragment, query, path, user info, port
    /// 4. IDNA conversion of the bare host
    /// 5. Public suffix split into subdomain, apex domain and TLD
    /// 6. Apex domain and subdomain label validation
    ///
    /// # Examples
    ///
    /// ```
    /// use urlextract::Extractor;
    ///
    /// let extractor = Extractor::new();
    /// let parsed = extractor.extract("user@sub.example.co.uk:8080/")?;
    /// assert_eq!(parsed.user_info, "user");
    /// assert_eq!(parsed.sub_domain, "sub");
    /// assert_eq!(parsed.tld, "co.uk");
    /// assert_eq!(parsed.port, 8080);
    /// # Ok::<(), urlextract::ExtractError>(())
    /// ```
    pub fn extract(&self, input: &str) -> Result<ParsedUrl, ExtractError> {
        let mut parsed = ParsedUrl::default();

        let s = normalize_input(input);

        let (s, scheme) = strip_scheme(&s);
        parsed.scheme = scheme;

        if s.chars().count() < self.config.min_host_len {
            debug!(candidate = %s, "host candidate too short");
            return Err(ExtractError::TooShort(s));
        }

        let (s, fragment) = strip_fragment(&s);
        parsed.fragment = fragment;

        let (s, query) = strip_query(&s);
        parsed.query = query;

        let (s, path) = strip_path(&s);
        parsed.path = path;

        let (s, user_info) = strip_user_info(&s);
        parsed.user_info = user_info;

        let (s, port) = strip_port(&s);
        parsed.port = port;

        trace!(host = %s, "components stripped");

        let host = normalize_host(&s)?;

        let options = SplitOptions {
            max_suffix_labels: self.config.max_suffix_labels,
            require_icann: self.config.require_icann,
        };
        let split = split_host_with_psl(&host, &self.list, options)?;

        validate_apex_domain(&split.apex_domain)?;
        // An empty leading label (".example.com") still counts as a subdomain
        if host.len() > split.apex_domain.len() + split.tld.len() + 1 {
            validate_sub_domain(&split.sub_domain)?;
        }

        parsed.sub_domain = split.sub_domain;
        parsed.apex_domain = split.apex_domain;
        parsed.tld = split.tld;

        Ok(parsed)
    }
}

/// Split a URL-like string into its components.
///
/// Uses the embedded Public Suffix List and the default configuration.
///
/// # Examples
///
/// ```
/// use urlextract::extract;
///
/// let parsed = extract("https://www.example.com/path?q=1#frag")?;
/// assert_eq!(parsed.scheme, "https");
/// assert_eq!(parsed.sub_domain, "www");
/// assert_eq!(parsed.apex_domain, "example");
/// assert_eq!(parsed.tld, "com");
/// assert_eq!(parsed.path, "path");
/// assert_eq!(parsed.query, "q=1");
/// assert_eq!(parsed.fragment, "frag");
/// # Ok::<(), urlextract::ExtractError>(())
/// ```
pub fn extract(input: &str) -> Result<ParsedUrl, ExtractError> {
    Extractor::new().extract(input)
}
