//! CLI interface definitions for the `sls` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`Args::to_request`]: conversion into a typed [`ListingRequest`]
//! - [`Args::sink_config`]: where the rendered lines go
//!
//! # Example
//!
//! ```bash
//! sls -laS --block-size 1024 src docs
//! sls --format commas -I '*.o' build
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use crate::data::{
    EntryGroup, HiddenPolicy, ListingFormat, ListingRequest, SizeOrder, SizeStyle, SortPolicy,
};
use crate::error::Result;
use crate::output::SinkConfig;
use crate::utils::{build_ignore_matcher, output_width};
use clap::Parser;
use std::num::NonZeroU64;
use std::path::PathBuf;

/// Command-line arguments for the `sls` listing tool.
///
/// Short flags combine as usual, e.g. `-laS`.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sls",
    version,
    about = "A simple analog of the 'ls' command",
    disable_help_flag = true
)]
pub struct Args {
    /// Files and/or directories (defaults to the current directory)
    #[arg(default_value = ".")]
    pub file: Vec<PathBuf>,

    /// Use a long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// Do not ignore entries starting with "."
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Sort by file size, largest first
    #[arg(short = 'S')]
    pub sort_by_size: bool,

    /// Reverse the size order (smallest first); only meaningful with -S
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Show sizes as a number of blocks of the given size (rounded up)
    #[arg(long, value_name = "N")]
    pub block_size: Option<NonZeroU64>,

    /// Print sizes in human readable form (e.g. 1.2 kB) in the long format
    #[arg(short = 'h', long)]
    pub human_readable: bool,

    /// Output one entry per line
    #[arg(short = '1')]
    pub one: bool,

    /// Output layout; -l always selects long
    #[arg(long, value_enum, default_value_t = ListingFormat::Vertical)]
    pub format: ListingFormat,

    /// Do not list entries whose names match the glob PATTERN
    #[arg(short = 'I', long, value_name = "PATTERN", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Assume the output is N columns wide instead of detecting it
    #[arg(short = 'w', long, value_name = "N")]
    pub width: Option<usize>,

    /// Also write the listing to FILE (truncated first)
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}

impl Args {
    /// The format actually used: `-l` overrides `--format`.
    pub fn effective_format(&self) -> ListingFormat {
        if self.long {
            ListingFormat::Long
        } else {
            self.format
        }
    }

    pub fn sort_policy(&self) -> SortPolicy {
        match (self.sort_by_size, self.reverse) {
            (false, _) => SortPolicy::Unsorted,
            (true, false) => SortPolicy::BySize(SizeOrder::Descending),
            (true, true) => SortPolicy::BySize(SizeOrder::Ascending),
        }
    }

    /// Builds the listing request for already collected groups.
    ///
    /// # Errors
    /// Returns an error if an `--ignore` pattern is not a valid glob.
    pub fn to_request(&self, groups: Vec<EntryGroup>) -> Result<ListingRequest> {
        Ok(ListingRequest {
            groups,
            hidden: HiddenPolicy::from_show_all(self.all),
            sort: self.sort_policy(),
            format: self.effective_format(),
            force_single_column: self.one,
            block_size: self.block_size,
            size_style: if self.human_readable {
                SizeStyle::Human
            } else {
                SizeStyle::Bytes
            },
            ignore: build_ignore_matcher(&self.ignore)?,
            output_width: output_width(self.width),
        })
    }

    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig::stdout().with_log_file(self.log.clone())
    }
}
