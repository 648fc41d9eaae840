//! staticassetlint-cli library
//!
//! Exposes argument parsing, logging setup and the check command so they can
//! be tested without spawning the binary.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::Cli;
pub use commands::check::{CheckOptions, Verdict};
