//! URL processing stages.
//!
//! This module contains the pieces the extractor chains together:
//! - Input and host normalization (including IDNA)
//! - Component stripping (scheme, fragment, query, path, user info, port)
//! - Public Suffix List (PSL) domain splitting
//! - Label syntax validation

pub mod normalizer;
pub mod psl;
pub mod stripper;
pub mod validator;

// Re-export main functionality
pub use self::normalizer::{normalize_host, normalize_input};
pub use self::psl::{
    split_host_with_psl, PublicSuffixList, Section, SplitHost, SplitOptions, SuffixList,
    SuffixMatch,
};
pub use self::stripper::{
    strip_fragment, strip_path, strip_port, strip_query, strip_scheme, strip_user_info,
};
pub use self::validator::{
    is_valid_apex_label, is_valid_sub_domain_label, validate_apex_domain, validate_sub_domain,
};
