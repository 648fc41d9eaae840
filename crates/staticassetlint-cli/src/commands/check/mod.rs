//! Check command: Verify digest-named files under each directory
//!
//! Traversal failures and unreadable files abort before the report is
//! printed; they are a different kind of failure than misnamed files.

mod render;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use staticassetlint_core::{Report, Scanner};
use tracing::{debug, info};

pub use render::write_report;

/// Inputs for one check run
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub dirs: Vec<PathBuf>,
    pub skip_patterns: Vec<String>,
    pub verbose: bool,
}

/// Overall result of a check run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    /// Process exit status for this verdict
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Pass => ExitCode::SUCCESS,
            Self::Fail => ExitCode::FAILURE,
        }
    }
}

/// Run the check command
///
/// The report goes to `out`; errors and failure listings go to `err`.
///
/// # Errors
/// Returns an error if a skip pattern is invalid or writing output fails.
pub fn run<O: Write, E: Write>(
    options: &CheckOptions,
    out: &mut O,
    err: &mut E,
) -> Result<Verdict> {
    let scanner = Scanner::new(&options.skip_patterns).context("invalid --skip pattern")?;
    debug!("Compiled {} skip patterns", scanner.skip_matcher().len());

    let mut verdict = Verdict::Pass;
    let mut reports = Vec::with_capacity(options.dirs.len());
    for dir in &options.dirs {
        info!("Scanning {}", dir.display());
        match scanner.scan_directory(dir) {
            Ok(report) => reports.push(report),
            Err(e) => {
                info!("Scan of {} aborted", dir.display());
                writeln!(err, "ERROR: {e}")?;
                verdict = Verdict::Fail;
            }
        }
    }

    for report in &reports {
        for error in report.file_errors.values() {
            writeln!(err, "ERROR: {error}")?;
            verdict = Verdict::Fail;
        }
    }

    if verdict == Verdict::Fail {
        return Ok(verdict);
    }

    let merged = Report::merged(reports);
    Ok(write_report(&merged, options.verbose, out, err)?)
}
