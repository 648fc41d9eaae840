//! staticassetlint: Check that static asset filenames embed a digest of their contents

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use staticassetlint_cli::commands::check;
use staticassetlint_cli::logging::setup_logging;
use staticassetlint_cli::{CheckOptions, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let options = CheckOptions::from(cli);
    let mut stderr = io::stderr().lock();
    match check::run(&options, &mut io::stdout().lock(), &mut stderr) {
        Ok(verdict) => verdict.exit_code(),
        Err(e) => {
            let _ = writeln!(stderr, "ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}
