//! Error types for URL extraction.

use thiserror::Error;

/// Errors that can occur while extracting URL components.
///
/// Every variant carries the offending substring so callers can report
/// what was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The host candidate left after removing the scheme is too short.
    #[error("invalid domain - string too short: {0}")]
    TooShort(String),

    /// The host could not be converted to its ASCII-compatible form.
    #[error("invalid domain - cannot encode {host}: {reason}")]
    InvalidEncoding {
        /// Host as it was handed to the IDNA conversion
        host: String,
        /// Description of the IDNA failure
        reason: String,
    },

    /// The host has a single label or no recognized public suffix.
    #[error("invalid domain - missing valid TLD in string: {0}")]
    MissingTld(String),

    /// The apex domain label contains invalid characters or structure.
    #[error("invalid domain - invalid apex domain: {0}")]
    InvalidApexDomain(String),

    /// A subdomain label contains invalid characters or structure.
    #[error("invalid domain - invalid sub domain: {0}")]
    InvalidSubDomain(String),
}

impl ExtractError {
    /// The substring that caused the failure.
    pub fn offending(&self) -> &str {
        match self {
            ExtractError::TooShort(s)
            | ExtractError::MissingTld(s)
            | ExtractError::InvalidApexDomain(s)
            | ExtractError::InvalidSubDomain(s) => s,
            ExtractError::InvalidEncoding { host, .. } => host,
        }
    }
}
