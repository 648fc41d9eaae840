//! Scan results

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::EntryOutcome;
use crate::error::FileReadError;

/// Classified paths from one or more directory scans
///
/// A path appears in at most one list, and files with read errors appear
/// only as keys of `file_errors`.
#[derive(Debug, Default)]
pub struct Report {
    /// Files that contain their digest in the filename
    pub passed: Vec<PathBuf>,

    /// Files whose name matched a skip pattern
    pub skipped: Vec<PathBuf>,

    /// Files that don't contain a matching digest in the filename
    pub failed: Vec<PathBuf>,

    /// Entries that were not checked because opening them is probably unsafe
    pub non_regular: Vec<PathBuf>,

    /// Files that could not be opened or read
    pub file_errors: BTreeMap<PathBuf, FileReadError>,
}

impl Report {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenate several reports and sort the result
    #[must_use]
    pub fn merged(reports: impl IntoIterator<Item = Self>) -> Self {
        let mut merged = Self::new();
        for report in reports {
            merged.merge(report);
        }
        merged.sort();
        merged
    }

    /// File a path under the list its outcome selects
    pub fn record(&mut self, path: PathBuf, outcome: EntryOutcome) {
        tracing::debug!("{}: {}", outcome.label(), path.display());
        match outcome {
            EntryOutcome::Directory => {}
            EntryOutcome::NonRegular => self.non_regular.push(path),
            EntryOutcome::Skipped => self.skipped.push(path),
            EntryOutcome::Passed => self.passed.push(path),
            EntryOutcome::Failed => self.failed.push(path),
            EntryOutcome::Errored(error) => {
                self.file_errors.insert(path, error);
            }
        }
    }

    /// Append another report's entries without re-sorting
    pub fn merge(&mut self, other: Self) {
        self.passed.extend(other.passed);
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
        self.non_regular.extend(other.non_regular);
        self.file_errors.extend(other.file_errors);
    }

    /// Sort every path list lexicographically
    pub fn sort(&mut self) {
        self.passed.sort();
        self.skipped.sort();
        self.failed.sort();
        self.non_regular.sort();
    }

    /// Number of entries recorded in any category
    #[must_use]
    pub fn total(&self) -> usize {
        self.passed.len()
            + self.skipped.len()
            + self.failed.len()
            + self.non_regular.len()
            + self.file_errors.len()
    }

    /// Whether nothing at all was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
