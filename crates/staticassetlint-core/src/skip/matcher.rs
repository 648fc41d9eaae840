//! Compiled skip patterns

use regex::Regex;

use crate::error::ConfigError;

/// Filenames no skip pattern is allowed to match
pub const FORBIDDEN_NAMES: &[&str] = &[
    "",
    "''",
    ".",
    "..",
    ".DS_Store",
    ".htaccess",
    "\"\"",
    "favicon.ico",
    "index.html",
    "robots.txt",
];

/// Whole-filename regular expressions for files that should not be checked
#[derive(Debug, Clone, Default)]
pub struct SkipMatcher {
    patterns: Vec<Regex>,
}

impl SkipMatcher {
    /// Compile skip patterns
    ///
    /// Each pattern must match an entire filename. An empty list yields a
    /// matcher that matches nothing.
    ///
    /// # Errors
    /// Returns an error if a pattern is not a valid regular expression, or if
    /// it matches any of [`FORBIDDEN_NAMES`].
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| compile(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Check whether a bare filename matches any skip pattern
    #[must_use]
    pub fn is_match(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|r| r.is_match(file_name))
    }

    /// Number of compiled patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns were supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Compile one pattern anchored to the whole filename
///
/// The raw pattern is compiled on its own first so an unbalanced group cannot
/// escape the anchoring wrapper.
fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    let invalid = |source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    };
    Regex::new(pattern).map_err(invalid)?;
    let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)?;

    if let Some(name) = FORBIDDEN_NAMES
        .iter()
        .copied()
        .find(|name| regex.is_match(name))
    {
        return Err(ConfigError::ForbiddenMatch {
            pattern: pattern.to_string(),
            name,
        });
    }

    Ok(regex)
}
