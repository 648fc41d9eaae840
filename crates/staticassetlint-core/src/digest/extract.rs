//! Digest extraction from filenames

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Algorithm;

/// Single-case hex runs of every accepted length, longest first.
///
/// Leftmost-first alternation means a 64-character run is never reported as
/// one of the shorter lengths.
#[allow(clippy::expect_used)]
static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = Algorithm::ALL
        .iter()
        .map(|algorithm| {
            let digits = algorithm.hex_len();
            format!("[0-9a-f]{{{digits}}}|[0-9A-F]{{{digits}}}")
        })
        .collect();
    Regex::new(&alternatives.join("|")).expect("built-in hex pattern must compile")
});

/// A digest embedded in a filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedDigest {
    /// Lowercase hex digest
    pub hex: String,
    pub algorithm: Algorithm,
}

/// Find the digest a filename claims for its contents
///
/// Only the final path component is inspected. Returns `None` when the name
/// carries no single-case hex run of 32, 40 or 64 characters.
#[must_use]
pub fn extract_hex_digest(name: impl AsRef<Path>) -> Option<ExpectedDigest> {
    let file_name = name.as_ref().file_name()?.to_string_lossy();
    let found = HEX_PATTERN.find(&file_name)?;
    let algorithm = Algorithm::from_hex_len(found.len())?;
    Some(ExpectedDigest {
        hex: found.as_str().to_ascii_lowercase(),
        algorithm,
    })
}
