//! Core data structures produced by URL extraction.

/// URL components extracted from a URL-like string.
///
/// Absent text components are empty strings and an absent port is `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Text before `://` (e.g., "https")
    pub scheme: String,
    /// Text before the host's `@` (e.g., "user:pass")
    pub user_info: String,
    /// Labels left of the apex domain (e.g., "api.v2" or empty string)
    pub sub_domain: String,
    /// Registrable label left of the TLD (e.g., "example")
    pub apex_domain: String,
    /// Public suffix, possibly multi-label (e.g., "com", "co.uk")
    pub tld: String,
    /// Port number (0 if not specified)
    pub port: u16,
    /// Path without the leading slash, not decoded (e.g., "search/all")
    pub path: String,
    /// Query string without leading ? (e.g., "q=test")
    pub query: String,
    /// Fragment without leading # (e.g., "results")
    pub fragment: String,
}

impl ParsedUrl {
    /// Check if subdomain is present.
    pub fn has_sub_domain(&self) -> bool {
        !self.sub_domain.is_empty()
    }

    /// Check if user info is present.
    pub fn has_user_info(&self) -> bool {
        !self.user_info.is_empty()
    }

    /// Check if port is explicitly specified.
    pub fn has_port(&self) -> bool {
        self.port != 0
    }

    /// Check if a non-empty path is present.
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Check if query parameters are present.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Check if fragment is present.
    pub fn has_fragment(&self) -> bool {
        !self.fragment.is_empty()
    }

    /// The registrable domain, apex label plus public suffix (e.g., "example.co.uk").
    pub fn registrable_domain(&self) -> String {
        format!("{}.{}", self.apex_domain, self.tld)
    }

    /// The full ASCII host the components were split from.
    pub fn host(&self) -> String {
        if self.has_sub_domain() {
            format!("{}.{}", self.sub_domain, self.registrable_domain())
        } else {
            self.registrable_domain()
        }
    }

    /// Get a single component as a string.
    ///
    /// An absent port renders as an empty string.
    pub fn component(&self, component: UrlComponent) -> String {
        match component {
            UrlComponent::Scheme => self.scheme.clone(),
            UrlComponent::UserInfo => self.user_info.clone(),
            UrlComponent::Host => self.host(),
            UrlComponent::SubDomain => self.sub_domain.clone(),
            UrlComponent::ApexDomain => self.apex_domain.clone(),
            UrlComponent::RegistrableDomain => self.registrable_domain(),
            UrlComponent::Tld => self.tld.clone(),
            UrlComponent::Port => {
                if self.has_port() {
                    self.port.to_string()
                } else {
                    String::new()
                }
            }
            UrlComponent::Path => self.path.clone(),
            UrlComponent::Query => self.query.clone(),
            UrlComponent::Fragment => self.fragment.clone(),
        }
    }
}

/// Enum for specifying which URL component to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlComponent {
    /// URL scheme (https, ftp, ...)
    Scheme,
    /// User info (user:pass)
    UserInfo,
    /// Full hostname (api.example.com)
    Host,
    /// Subdomain if present (api)
    SubDomain,
    /// Apex domain label only (example)
    ApexDomain,
    /// Apex domain with its suffix (example.com)
    RegistrableDomain,
    /// Top-level domain (com, org, co.uk)
    Tld,
    /// Port number
    Port,
    /// Path component (api/v1/users)
    Path,
    /// Query string (foo=bar&baz=qux)
    Query,
    /// Fragment/anchor (section1)
    Fragment,
}

impl UrlComponent {
    /// All components, in the order they are printed by the command line tool.
    pub const ALL: [UrlComponent; 11] = [
        UrlComponent::Scheme,
        UrlComponent::UserInfo,
        UrlComponent::Host,
        UrlComponent::SubDomain,
        UrlComponent::ApexDomain,
        UrlComponent::RegistrableDomain,
        UrlComponent::Tld,
        UrlComponent::Port,
        UrlComponent::Path,
        UrlComponent::Query,
        UrlComponent::Fragment,
    ];

    /// Short lowercase name of the component.
    pub fn name(&self) -> &'static str {
        match self {
            UrlComponent::Scheme => "scheme",
            UrlComponent::UserInfo => "user_info",
            UrlComponent::Host => "host",
            UrlComponent::SubDomain => "sub_domain",
            UrlComponent::ApexDomain => "apex_domain",
            UrlComponent::RegistrableDomain => "registrable_domain",
            UrlComponent::Tld => "tld",
            UrlComponent::Port => "port",
            UrlComponent::Path => "path",
            UrlComponent::Query => "query",
            UrlComponent::Fragment => "fragment",
        }
    }
}
