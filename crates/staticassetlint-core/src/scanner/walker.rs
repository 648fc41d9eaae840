//! Directory walker: Classifies every entry in a directory tree

use std::fs::FileType;
use std::path::Path;

use tracing::info;
use walkdir::WalkDir;

use super::{EntryOutcome, Report};
use crate::digest::{digest_file, extract_hex_digest};
use crate::error::{ConfigError, ScanError};
use crate::skip::SkipMatcher;

/// Checks directory trees for digest-named files
///
/// Holds only the compiled skip patterns, so one scanner can be reused for
/// any number of directories.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    skip: SkipMatcher,
}

impl Scanner {
    /// Create a scanner that skips files matching any of `skip_patterns`
    ///
    /// # Errors
    /// Returns an error if a skip pattern is invalid or too broad.
    pub fn new<I, S>(skip_patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_matcher(SkipMatcher::new(skip_patterns)?))
    }

    /// Create a scanner from an already compiled matcher
    #[must_use]
    pub fn with_matcher(skip: SkipMatcher) -> Self {
        Self { skip }
    }

    /// Get the skip patterns in use
    #[must_use]
    pub fn skip_matcher(&self) -> &SkipMatcher {
        &self.skip
    }

    /// Check every file in a directory and its children
    ///
    /// Problems opening or reading individual files are recorded in the
    /// report; only a failure of the walk itself is returned as an error.
    ///
    /// # Errors
    /// Returns an error if the root or any directory beneath it cannot be read.
    pub fn scan_directory(&self, root: impl AsRef<Path>) -> Result<Report, ScanError> {
        let root = root.as_ref();
        let mut report = Report::new();

        // A symlinked root is recorded as non-regular, not descended into
        let walker = WalkDir::new(root)
            .follow_links(false)
            .follow_root_links(false);
        for entry in walker {
            let entry = entry.map_err(|source| ScanError {
                root: root.to_path_buf(),
                source,
            })?;
            let outcome = self.classify(entry.path(), entry.file_type());
            report.record(entry.into_path(), outcome);
        }

        report.sort();
        info!(
            "Scanned {}: {} passed, {} skipped, {} failed, {} non-regular, {} unreadable",
            root.display(),
            report.passed.len(),
            report.skipped.len(),
            report.failed.len(),
            report.non_regular.len(),
            report.file_errors.len()
        );
        Ok(report)
    }

    /// Decide what to do with one entry
    fn classify(&self, path: &Path, file_type: FileType) -> EntryOutcome {
        if file_type.is_dir() {
            return EntryOutcome::Directory;
        }
        if !file_type.is_file() {
            // Symlinks may point anywhere, including devices
            return EntryOutcome::NonRegular;
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        if self.skip.is_match(&file_name) {
            return EntryOutcome::Skipped;
        }

        Self::check_file(path)
    }

    /// Verify a regular file against the digest in its name
    ///
    /// Files whose name carries no digest fail without being opened.
    #[must_use]
    pub fn check_file(path: &Path) -> EntryOutcome {
        let Some(expected) = extract_hex_digest(path) else {
            return EntryOutcome::Failed;
        };

        match digest_file(path, expected.algorithm) {
            Ok(actual) if actual == expected.hex => EntryOutcome::Passed,
            Ok(_) => EntryOutcome::Failed,
            Err(error) => EntryOutcome::Errored(error),
        }
    }
}
