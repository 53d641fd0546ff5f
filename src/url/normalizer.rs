//! Input and host normalization.

use crate::error::ExtractError;
use tracing::trace;

/// Normalize raw input before any component is stripped.
///
/// This function:
/// 1. Removes every whitespace character
/// 2. Converts to lowercase (Unicode aware)
///
/// Original casing is not recoverable afterwards.
pub fn normalize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Normalize a bare hostname to its ASCII-compatible form.
///
/// Applies IDNA UTS-46 ASCII conversion. Unicode labels are punycode
/// encoded (`café` becomes `xn--caf-dma`), ASCII labels pass through.
pub fn normalize_host(host: &str) -> Result<String, ExtractError> {
    let ascii_host = idna::domain_to_ascii(host).map_err(|err| ExtractError::InvalidEncoding {
        host: host.to_string(),
        reason: err.to_string(),
    })?;

    if ascii_host != host {
        trace!(host, ascii_host = %ascii_host, "host converted to ASCII");
    }

    Ok(ascii_host)
}
