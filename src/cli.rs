//! CLI Argument Parsing
//!
//! Sweep is a single-purpose tool, so the parser is flat: running the
//! binary with no arguments performs the default cleanup in the current
//! directory.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Sweep - post-refactor workspace cleanup tool
#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to clean
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Dry run - show what would be removed
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Exit without waiting for a keypress
    #[arg(long)]
    pub no_pause: bool,
}
