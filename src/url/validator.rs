//! Label syntax validation for apex domains and subdomains.
//!
//! Patterns are compiled once and shared by every extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;

// One leading alnum, up to 60 alnum/hyphen, one optional trailing alnum
static RE_APEX_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9-]{0,60}[a-z0-9]?$").expect("valid apex label regex")
});

// Same shape, but a leading underscore is allowed (_dmarc, _acme-challenge)
static RE_SUB_DOMAIN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9_][a-z0-9-]{0,60}[a-z0-9]?$").expect("valid subdomain label regex")
});

/// Check a single apex domain label.
pub fn is_valid_apex_label(label: &str) -> bool {
    RE_APEX_LABEL.is_match(label)
}

/// Check a single subdomain label.
pub fn is_valid_sub_domain_label(label: &str) -> bool {
    RE_SUB_DOMAIN_LABEL.is_match(label)
}

/// Validate the apex domain label.
pub fn validate_apex_domain(apex_domain: &str) -> Result<(), ExtractError> {
    if !is_valid_apex_label(apex_domain) {
        return Err(ExtractError::InvalidApexDomain(apex_domain.to_string()));
    }
    Ok(())
}

/// Validate every dot-separated label of a subdomain.
///
/// The error names the first label that fails.
pub fn validate_sub_domain(sub_domain: &str) -> Result<(), ExtractError> {
    match sub_domain.split('.').find(|label| !is_valid_sub_domain_label(label)) {
        Some(label) => Err(ExtractError::InvalidSubDomain(label.to_string())),
        None => Ok(()),
    }
}
