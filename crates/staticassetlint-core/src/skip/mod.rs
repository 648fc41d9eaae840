//! Skip module: User-supplied filename exemptions
//!
//! Skip patterns exempt files from digest checks. A pattern broad enough to
//! match common infrastructure files is refused outright.

mod matcher;

pub use matcher::{SkipMatcher, FORBIDDEN_NAMES};
