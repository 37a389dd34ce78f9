//! Long-format attribute lines.
//!
//! Each entry becomes one line of fixed-width fields:
//!
//! ```text
//! drwxr-xr-x   2 1000     4096 Mar 04 09:15 src
//! -rw-r--r--   1 1000  2010000 Nov 30  2023 archive.tar
//! ```
//!
//! Fields are mode, link count, owner id, size, modification time and name.

use crate::data::{Entry, EntryKind, SizeStyle};
use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};
use std::num::NonZeroU64;
use std::time::SystemTime;

/// Timestamp layout for entries modified within roughly the last six months.
pub const RECENT_TIME_FORMAT: &str = "%b %d %H:%M";
/// Timestamp layout for older (or much older) entries.
pub const OLD_TIME_FORMAT: &str = "%b %d  %Y";

// Entries older than this many 30-day months show the year instead of the time.
const RECENT_MONTHS: i64 = 6;

/// Options that affect the size column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongOptions {
    pub block_size: Option<NonZeroU64>,
    pub size_style: SizeStyle,
}

/// Renders one line per entry.
pub fn render_long(entries: &[Entry], options: LongOptions, now: DateTime<Local>) -> Vec<String> {
    entries
        .iter()
        .map(|entry| render_long_entry(entry, options, now))
        .collect()
}

pub fn render_long_entry(entry: &Entry, options: LongOptions, now: DateTime<Local>) -> String {
    format!(
        "{} {:>3} {:>3} {:>8} {} {}",
        mode_string(entry.kind, entry.mode),
        entry.link_count,
        entry.owner_id,
        size_field(entry.size_bytes, options),
        format_timestamp(entry.modified_at, now),
        entry.name
    )
}

/// Formats permission bits as a 10-character string like `drwxr-xr-x`.
///
/// Setuid and setgid show as `s` (or `S` without execute) in the owner and
/// group triplets; the sticky bit shows as `t`/`T` in the other triplet.
pub fn mode_string(kind: EntryKind, mode: u32) -> String {
    // (shift of the rwx triplet, special bit, character shown for it)
    const TRIPLETS: [(u32, u32, char); 3] =
        [(6, 0o4000, 's'), (3, 0o2000, 's'), (0, 0o1000, 't')];

    let mut out = String::with_capacity(10);
    out.push(kind.type_char());
    for (shift, special_bit, special_char) in TRIPLETS {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        let exec = bits & 0o1 != 0;
        out.push(match (mode & special_bit != 0, exec) {
            (true, true) => special_char,
            (true, false) => special_char.to_ascii_uppercase(),
            (false, true) => 'x',
            (false, false) => '-',
        });
    }
    out
}

/// Size column contents before alignment.
///
/// A configured block size wins over the human-readable style; the block
/// count is rounded up so a partially used block still counts.
pub fn size_field(size_bytes: u64, options: LongOptions) -> String {
    match (options.block_size, options.size_style) {
        (Some(block), _) => size_bytes.div_ceil(block.get()).to_string(),
        (None, SizeStyle::Human) => format_size(size_bytes, DECIMAL),
        (None, SizeStyle::Bytes) => size_bytes.to_string(),
    }
}

/// Formats a modification time relative to `now`.
pub fn format_timestamp(modified: SystemTime, now: DateTime<Local>) -> String {
    let modified: DateTime<Local> = DateTime::from(modified);
    let age_days = now.signed_duration_since(modified).num_days();
    let layout = if age_days > RECENT_MONTHS * 30 {
        OLD_TIME_FORMAT
    } else {
        RECENT_TIME_FORMAT
    };
    modified.format(layout).to_string()
}
