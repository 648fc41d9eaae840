//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::commands::check::CheckOptions;

#[derive(Debug, Parser)]
#[command(name = "staticassetlint")]
#[command(
    author,
    version,
    about = "Check that static asset filenames embed a digest of their contents",
    long_about = None
)]
pub struct Cli {
    /// Print the names of files with valid names
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip checking files with names matching any of these regex patterns
    #[arg(long, value_name = "REGEX")]
    pub skip: Vec<String>,

    /// Directories containing files to check
    #[arg(required = true, value_name = "DIR", value_parser = existing_dir)]
    pub dirs: Vec<PathBuf>,
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("{value:?} is not an existing directory"))
    }
}

impl From<Cli> for CheckOptions {
    fn from(cli: Cli) -> Self {
        Self {
            dirs: cli.dirs,
            skip_patterns: cli.skip,
            verbose: cli.verbose,
        }
    }
}
