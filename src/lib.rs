//! urlextract - Split URL-like strings into validated domain components
//!
//! This crate takes a URL or bare domain, as a user would type it, and breaks
//! it into scheme, user info, subdomain, apex domain, public suffix, port,
//! path, query and fragment. Domains come out lowercase, ASCII encoded and
//! split at the public suffix boundary.
//!
//! # Features
//!
//! - **Forgiving input**: whitespace and case are normalized, the scheme is optional
//! - **Public Suffix List aware**: multi-label suffixes like `co.uk` are detected
//! - **IDNA**: Unicode hosts are converted to their `xn--` form
//! - **Validated**: apex domain and subdomain labels are checked before returning
//! - **Pluggable**: the suffix knowledge base is a trait and can be swapped out
//!
//! # Quick Start
//!
//! ```
//! use urlextract::extract;
//!
//! let parsed = extract("https://www.example.com/path?q=1#frag")?;
//! assert_eq!(parsed.sub_domain, "www");
//! assert_eq!(parsed.apex_domain, "example");
//! assert_eq!(parsed.tld, "com");
//!
//! let parsed = extract("user@sub.example.co.uk:8080/")?;
//! assert_eq!(parsed.tld, "co.uk");
//! assert_eq!(parsed.port, 8080);
//! # Ok::<(), urlextract::ExtractError>(())
//! ```
//!
//! # Extraction Order
//!
//! | Step | Cut at      | Field        |
//! |------|-------------|--------------|
//! | 1    | `://`       | `scheme`     |
//! | 2    | first `#`   | `fragment`   |
//! | 3    | first `?`   | `query`      |
//! | 4    | first `/`   | `path`       |
//! | 5    | last `@`    | `user_info`  |
//! | 6    | last `:`    | `port`       |
//!
//! What remains is the host, which is IDNA encoded, split at its public
//! suffix and validated.
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, ExtractError>`. Common error cases:
//!
//! - Input shorter than 4 characters once the scheme is gone
//! - Hosts without a recognized public suffix
//! - Labels with leading hyphens or characters outside `[a-z0-9-]`

// Re-export main extraction functions
pub use extractor::{extract, Extractor, ExtractorConfig};

// Re-export public types
pub use error::ExtractError;
pub use types::{ParsedUrl, UrlComponent};
pub use url::{PublicSuffixList, Section, SuffixList, SuffixMatch};

// Module declarations
pub mod error;
pub mod extractor;
pub mod logging;
pub mod types;
pub mod url;
