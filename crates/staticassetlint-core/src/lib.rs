//! staticassetlint-core: Verify that static assets are named after their content
//!
//! Asset-fingerprinting pipelines name files like `bundle-<sha256>.js` so they
//! can be cached forever. This library walks directory trees and checks that
//! every regular file embeds a hex digest that matches its bytes.
//!
//! # Recognised digests
//!
//! - **32** hex characters - MD5
//! - **40** hex characters - SHA-1
//! - **64** hex characters - SHA-256

pub mod digest;
pub mod error;
pub mod scanner;
pub mod skip;

// Re-export commonly used types
pub use digest::{extract_hex_digest, Algorithm, ExpectedDigest};
pub use error::{ConfigError, FileReadError, ScanError};
pub use scanner::{EntryOutcome, Report, Scanner};
pub use skip::SkipMatcher;
