//! Main entry point for the `sls` CLI application.
//!
//! `sls` is a simple analog of the Unix `ls` command. It lists files and
//! directory contents as a single column, a comma separated line, row-major
//! or column-major columns, or one detailed line per entry.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Resolves every target before printing anything
//! - Builds a [`sls::ListingRequest`] and hands it to the group presenter
//! - Writes to stdout, mirrored to `--log FILE` when given
//!
//! # Flags of Interest
//! - `-l`: long listing format
//! - `-a`: include dotfiles
//! - `-S`: sort by size, largest first
//! - `--format long|single-column|commas|horizontal|vertical|across`

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use sls::Args;
use sls::output::{OutputSink, present};
use sls::scan::collect_groups;

fn main() -> Result<()> {
    let args = Args::parse();

    // Parse args → collect_groups → to_request → present
    let groups = collect_groups(&args.file)?;
    let request = args.to_request(groups)?;

    let mut sink = OutputSink::open(&args.sink_config()).with_context(|| match &args.log {
        Some(path) => format!("Failed to open log file '{}'", path.display()),
        None => "Failed to open standard output".to_string(),
    })?;
    present(&request, Local::now(), &mut sink)?;

    Ok(())
}
