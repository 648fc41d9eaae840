//! Scanner module: Directory walking and per-file verification
//!
//! Responsible for walking directory trees without following symlinks,
//! classifying each entry, and collecting the outcomes into a [`Report`].

mod outcome;
mod report;
mod walker;

pub use outcome::EntryOutcome;
pub use report::Report;
pub use walker::Scanner;
