//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`crate::SkipMatcher`]
///
/// These are fatal before any scanning starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("skip pattern {pattern:?} is not a valid regular expression")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("skip pattern {pattern:?} is invalid because it matched {name:?}")]
    ForbiddenMatch {
        pattern: String,
        name: &'static str,
    },
}

/// The directory walk itself could not proceed
///
/// A scan that fails this way returns no report at all.
#[derive(Debug, Error)]
#[error("failed to walk {}: {source}", .root.display())]
pub struct ScanError {
    pub root: PathBuf,
    #[source]
    pub source: walkdir::Error,
}

/// A single file could not be opened or fully read
#[derive(Debug, Error)]
#[error("failed to read {}: {source}", .path.display())]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl FileReadError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}
