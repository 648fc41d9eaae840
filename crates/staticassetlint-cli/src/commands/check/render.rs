//! Report output

use std::io::{self, Write};
use std::path::PathBuf;

use staticassetlint_core::Report;

use super::Verdict;

/// Print a merged report and decide the verdict
///
/// Non-regular entries and misnamed files are listed on `err` and fail the
/// run. Skipped and passed counts go to `out`, with names when `verbose`.
///
/// # Errors
/// Returns an error if writing to either stream fails.
pub fn write_report<O: Write, E: Write>(
    report: &Report,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> io::Result<Verdict> {
    let mut verdict = Verdict::Pass;

    if !report.non_regular.is_empty() {
        let heading = format!("ERROR: found {} non-regular files", report.non_regular.len());
        write_listing(err, &heading, &report.non_regular, true)?;
        verdict = Verdict::Fail;
    }

    if !report.failed.is_empty() {
        let heading = format!("ERROR: found {} files with invalid names", report.failed.len());
        write_listing(err, &heading, &report.failed, true)?;
        verdict = Verdict::Fail;
    }

    let heading = format!("INFO: skipped checking {} files", report.skipped.len());
    write_listing(out, &heading, &report.skipped, verbose)?;

    if report.passed.is_empty() && report.skipped.is_empty() {
        writeln!(err, "WARNING: no files with valid names found")?;
        return Ok(verdict);
    }

    let heading = format!("INFO: found {} files with valid names", report.passed.len());
    write_listing(out, &heading, &report.passed, verbose)?;

    Ok(verdict)
}

fn write_listing<W: Write>(
    w: &mut W,
    heading: &str,
    paths: &[PathBuf],
    with_paths: bool,
) -> io::Result<()> {
    if !with_paths {
        return writeln!(w, "{heading}");
    }
    writeln!(w, "{heading}:")?;
    for path in paths {
        writeln!(w, "\t{path:?}")?;
    }
    Ok(())
}
