//! Sweep CLI - post-refactor workspace cleanup tool
//!
//! Running `sweep` with no arguments removes the configured obsolete
//! artifacts from the current directory, prints a summary of what was
//! removed and what was kept, and waits for a keypress.

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    commands::clean::cmd_clean(&cli)
}
