//! Per-entry classification

use crate::error::FileReadError;

/// What a scan decided about one directory entry
#[derive(Debug)]
pub enum EntryOutcome {
    /// Descended into; not recorded
    Directory,
    /// Symlink, device, socket or fifo; never opened
    NonRegular,
    /// Name matched a skip pattern; not hashed
    Skipped,
    /// Name embeds the digest of the contents
    Passed,
    /// Name embeds no digest, or the wrong one
    Failed,
    /// The file could not be read
    Errored(FileReadError),
}

impl EntryOutcome {
    /// Short label used in logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::NonRegular => "non-regular",
            Self::Skipped => "skipped",
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Errored(_) => "error",
        }
    }
}
