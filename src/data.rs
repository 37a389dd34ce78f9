//! Data structures for representing listing entries and requests.
//!
//! This module defines the core data structures used throughout the `sls`
//! application: the [`Entry`] records produced by the collector, the
//! [`EntryGroup`]s they are owned by, and the [`ListingRequest`] that drives
//! the formatting pipeline.

use clap::ValueEnum;
use globset::GlobSet;
use std::num::NonZeroU64;
use std::time::SystemTime;

/// Represents a single file or directory entry to be listed.
///
/// # Fields
/// * `name` - The name shown in the listing (a child name, or the target as given)
/// * `kind` - Type of entry (file or directory)
/// * `mode` - Permission bits, including setuid/setgid/sticky
/// * `link_count` - Number of hard links
/// * `owner_id` - Numeric user id of the owner
/// * `size_bytes` - Size in bytes
/// * `modified_at` - Last modification time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub mode: u32,
    pub link_count: u64,
    pub owner_id: u32,
    pub size_bytes: u64,
    pub modified_at: SystemTime,
}

impl Entry {
    /// Returns true if the name starts with the hidden-file marker.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Represents the type of a listed entry.
///
/// # Variants
/// * `File` - Anything that is not a directory
/// * `Directory` - A directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Returns the type character used in the mode string.
    ///
    /// # Returns
    /// * `'-'` for `EntryKind::File`
    /// * `'d'` for `EntryKind::Directory`
    pub fn type_char(&self) -> char {
        match self {
            EntryKind::File => '-',
            EntryKind::Directory => 'd',
        }
    }
}

/// An independently formatted unit of the listing.
///
/// The bare top-level file list has no label; every directory target
/// produces a group labeled with the path as it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGroup {
    pub label: Option<String>,
    pub entries: Vec<Entry>,
}

impl EntryGroup {
    pub fn files(entries: Vec<Entry>) -> Self {
        Self {
            label: None,
            entries,
        }
    }

    pub fn directory(label: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            label: Some(label.into()),
            entries,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.label.is_some()
    }
}

/// Output layouts supported by the formatter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum ListingFormat {
    /// One attribute line per entry
    Long,
    /// One name per line
    SingleColumn,
    /// All names on one line, separated by ", "
    Commas,
    /// Names fill a row left to right before the next row
    Horizontal,
    /// Names fill a column top to bottom before the next column
    #[value(alias = "across")]
    Vertical,
}

/// Whether dotfiles are shown.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum HiddenPolicy {
    ShowHidden,
    #[default]
    HideHidden,
}

impl HiddenPolicy {
    pub fn from_show_all(all: bool) -> Self {
        if all {
            HiddenPolicy::ShowHidden
        } else {
            HiddenPolicy::HideHidden
        }
    }
}

/// Direction used when sorting by size.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SizeOrder {
    /// Largest first
    #[default]
    Descending,
    /// Smallest first
    Ascending,
}

/// How entries inside a group are ordered.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SortPolicy {
    /// Keep the order in which the collector produced the entries
    #[default]
    Unsorted,
    BySize(SizeOrder),
}

/// How the size column of the long format is shown.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SizeStyle {
    #[default]
    Bytes,
    /// Decimal units, e.g. "1.2 kB"
    Human,
}

/// Everything the formatting pipeline needs for one invocation.
///
/// Built once from the parsed command line (see [`crate::cli::Args::to_request`])
/// and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ListingRequest {
    pub groups: Vec<EntryGroup>,
    pub hidden: HiddenPolicy,
    pub sort: SortPolicy,
    pub format: ListingFormat,
    pub force_single_column: bool,
    pub block_size: Option<NonZeroU64>,
    pub size_style: SizeStyle,
    pub ignore: GlobSet,
    pub output_width: usize,
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            hidden: HiddenPolicy::default(),
            sort: SortPolicy::default(),
            format: ListingFormat::Vertical,
            force_single_column: false,
            block_size: None,
            size_style: SizeStyle::default(),
            ignore: GlobSet::empty(),
            output_width: 80,
        }
    }
}
