//! Utility functions for the `sls` listing tool.
//!
//! This module provides:
//! - Hidden-file and ignore-pattern filtering
//! - Stable size sorting
//! - Display-width measurement and padding of names
//! - Glob-based ignore pattern parsing
//! - Output width detection
//!
//! Everything here is pure except [`output_width`], which reads the
//! environment and the controlling terminal.

use crate::data::{Entry, HiddenPolicy, SizeOrder, SortPolicy};
use crate::error::{ListingError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use unicode_width::UnicodeWidthStr;

/// Width used when neither the caller, `COLUMNS` nor the terminal provide one.
pub const DEFAULT_OUTPUT_WIDTH: usize = 80;

/// Removes hidden and ignored entries in place.
///
/// # Behavior
/// * `HiddenPolicy::HideHidden` - drops names starting with `.`
/// * `HiddenPolicy::ShowHidden` - keeps them
/// * Names matching `ignore` are always dropped
///
/// Applying the same filter twice changes nothing.
pub fn filter_entries(entries: &mut Vec<Entry>, hidden: HiddenPolicy, ignore: &GlobSet) {
    entries.retain(|entry| {
        let hidden_ok = hidden == HiddenPolicy::ShowHidden || !entry.is_hidden();
        hidden_ok && !ignore.is_match(&entry.name)
    });
}

/// Sorts entries based on the provided policy.
///
/// # Behavior
/// * `SortPolicy::Unsorted` - leaves the collection order untouched
/// * `SortPolicy::BySize(SizeOrder::Descending)` - largest first
/// * `SortPolicy::BySize(SizeOrder::Ascending)` - smallest first
///
/// The sort is stable: entries of equal size keep their relative order.
pub fn sort_entries(entries: &mut [Entry], policy: SortPolicy) {
    match policy {
        SortPolicy::Unsorted => {}
        SortPolicy::BySize(SizeOrder::Descending) => {
            entries.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes))
        }
        SortPolicy::BySize(SizeOrder::Ascending) => {
            entries.sort_by(|a, b| a.size_bytes.cmp(&b.size_bytes))
        }
    }
}

/// Number of terminal cells `name` occupies.
pub fn display_width(name: &str) -> usize {
    UnicodeWidthStr::width(name)
}

/// Left-aligns `name` in a cell of `width` terminal cells.
///
/// Names already wider than the cell are returned unchanged.
pub fn pad_to_width(name: &str, width: usize) -> String {
    let used = display_width(name);
    let mut cell = String::with_capacity(name.len() + width.saturating_sub(used));
    cell.push_str(name);
    cell.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    cell
}

/// Compiles a list of glob patterns into a `GlobSet` matched against entry names.
pub fn build_ignore_matcher(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ListingError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ListingError::Pattern {
        pattern: patterns.join(" "),
        source,
    })
}

/// Picks the output width from, in order: an explicit value, the `COLUMNS`
/// variable, the terminal size, and finally [`DEFAULT_OUTPUT_WIDTH`].
///
/// An explicit width is taken as is, zero included, and the layout then
/// falls back to one column. Zero or unparsable detected values are skipped.
pub fn resolve_width(
    explicit: Option<usize>,
    columns_env: Option<&str>,
    terminal: Option<usize>,
) -> usize {
    explicit
        .or_else(|| {
            columns_env
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|w| *w > 0)
        })
        .or_else(|| terminal.filter(|w| *w > 0))
        .unwrap_or(DEFAULT_OUTPUT_WIDTH)
}

/// Returns the width of the output device.
pub fn output_width(explicit: Option<usize>) -> usize {
    let columns_env = std::env::var("COLUMNS").ok();
    let terminal = terminal_size::terminal_size().map(|(w, _)| w.0 as usize);
    resolve_width(explicit, columns_env.as_deref(), terminal)
}
