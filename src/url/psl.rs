//! Public Suffix List integration for proper domain splitting.

use psl::{List, Psl, Type};
use tracing::{debug, trace};

use crate::error::ExtractError;

/// Section of the Public Suffix List a rule comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Rules managed by ICANN registries (com, co.uk, ...)
    Icann,
    /// Privately registered suffixes (github.io, blogspot.com, ...)
    Private,
}

/// The suffix a list derives for a candidate string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMatch {
    /// Canonical public suffix of the candidate
    pub suffix: String,
    /// List section of the matching rule, `None` when only the implicit `*` rule applied
    pub section: Option<Section>,
}

impl SuffixMatch {
    /// Check if the match comes from an ICANN rule.
    pub fn is_icann(&self) -> bool {
        self.section == Some(Section::Icann)
    }

    /// Check if the match comes from any listed rule.
    pub fn is_known(&self) -> bool {
        self.section.is_some()
    }
}

/// A public suffix knowledge base.
///
/// Implementations must be immutable once built; the extractor only reads.
pub trait SuffixList {
    /// Derive the public suffix of `candidate` (a lowercase ASCII domain).
    fn public_suffix(&self, candidate: &str) -> Option<SuffixMatch>;
}

impl<L: SuffixList + ?Sized> SuffixList for &L {
    fn public_suffix(&self, candidate: &str) -> Option<SuffixMatch> {
        (**self).public_suffix(candidate)
    }
}

/// The Public Suffix List compiled into the `psl` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixList;

impl SuffixList for PublicSuffixList {
    fn public_suffix(&self, candidate: &str) -> Option<SuffixMatch> {
        let suffix = List.suffix(candidate.as_bytes())?;
        let text = std::str::from_utf8(suffix.as_bytes()).ok()?;

        let section = match suffix.typ() {
            Some(Type::Icann) => Some(Section::Icann),
            Some(Type::Private) => Some(Section::Private),
            None => None,
        };

        Some(SuffixMatch {
            suffix: text.to_string(),
            section,
        })
    }
}

/// Result of splitting a host at its public suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitHost {
    /// Labels left of the apex domain, joined with dots
    pub sub_domain: String,
    /// Registrable label immediately left of the TLD
    pub apex_domain: String,
    /// The public suffix (can be multi-label like "co.uk")
    pub tld: String,
}

/// Options for [`split_host_with_psl`].
#[derive(Debug, Clone, Copy)]
pub struct SplitOptions {
    /// Longest suffix candidate tried, in labels
    pub max_suffix_labels: usize,
    /// Only accept ICANN rules as a registry boundary
    pub require_icann: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            max_suffix_labels: 3,
            require_icann: true,
        }
    }
}

/// Split a hostname into subdomain, apex domain and TLD using a suffix list.
///
/// Suffix candidates made of the trailing labels are tried longest first,
/// starting at `max_suffix_labels` labels. A candidate is accepted when the
/// list recognizes exactly that string as a suffix (ICANN only, unless
/// `require_icann` is off) and the label in front of it is non-empty; that
/// label becomes the apex domain.
///
/// # Examples
///
/// ```
/// use urlextract::url::{split_host_with_psl, PublicSuffixList, SplitOptions};
///
/// let split = split_host_with_psl("api.example.co.uk", &PublicSuffixList, SplitOptions::default())?;
/// assert_eq!(split.sub_domain, "api");
/// assert_eq!(split.apex_domain, "example");
/// assert_eq!(split.tld, "co.uk");
/// # Ok::<(), urlextract::ExtractError>(())
/// ```
pub fn split_host_with_psl<L: SuffixList>(
    host: &str,
    list: &L,
    options: SplitOptions,
) -> Result<SplitHost, ExtractError> {
    let labels: Vec<&str> = host.split('.').collect();

    // A trailing dot leaves an empty last label; no suffix is empty
    if labels.len() < 2 || labels.last().map_or(true, |label| label.is_empty()) {
        return Err(ExtractError::MissingTld(host.to_string()));
    }

    // A suffix of n labels needs one more label in front of it for the apex
    let longest = options.max_suffix_labels.max(1).min(labels.len() - 1);

    let mut found = None;
    for n in (1..=longest).rev() {
        let apex = labels[labels.len() - n - 1];
        if apex.is_empty() {
            continue;
        }

        let candidate = labels[labels.len() - n..].join(".");
        if accepts_suffix(list, &candidate, options.require_icann) {
            found = Some((n, apex, candidate));
            break;
        }
        trace!(candidate = %candidate, "suffix candidate rejected");
    }

    let (n, apex_domain, tld) =
        found.ok_or_else(|| ExtractError::MissingTld(host.to_string()))?;

    // Every label left of the apex, empty ones included
    let sub_domain = labels[..labels.len() - n - 1].join(".");

    debug!(host, sub_domain = %sub_domain, apex_domain, tld = %tld, "host split at public suffix");

    Ok(SplitHost {
        sub_domain,
        apex_domain: apex_domain.to_string(),
        tld,
    })
}

fn accepts_suffix<L: SuffixList>(list: &L, candidate: &str, require_icann: bool) -> bool {
    match list.public_suffix(candidate) {
        Some(found) if found.suffix == candidate => {
            if require_icann {
                found.is_icann()
            } else {
                found.is_known()
            }
        }
        _ => false,
    }
}
