use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

use crate::types;

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "loctop",
    version,
    about = "Report the files with the most lines in a project",
    long_about = None
)]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "PATH", default_value = ".", value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// Number of files to report
    #[arg(long = "top", short = 'n', value_name = "N", default_value_t = types::DEFAULT_TOP)]
    pub top: usize,

    /// Limit by comma-separated extensions (dots optional), e.g. py,ts,md
    #[arg(long = "ext", value_name = "LIST")]
    pub extensions: Option<String>,

    /// Follow symlinks
    #[arg(long = "follow-symlinks", action = ArgAction::SetTrue)]
    pub follow_symlinks: bool,

    /// Show a progress bar while counting
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    pub progress: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if command execution fails.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
