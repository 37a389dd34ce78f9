//! Group presenter: runs the pipeline for every group and assembles the
//! final listing.
//!
//! For each group, in input order, the presenter filters, sorts, plans and
//! renders the entries, then decides whether the group gets a header:
//!
//! - a lone directory target (no bare files, exactly one directory) is
//!   listed without a header, like a plain `ls dir`
//! - otherwise every directory group is introduced by `"<label>:"`
//! - the bare file list never has a header
//!
//! Consecutive groups are separated by exactly one blank line.

use crate::data::{EntryGroup, ListingFormat, ListingRequest};
use crate::error::Result;
use crate::layout::LayoutPlan;
use crate::output::columns::{render_commas, render_horizontal, render_vertical};
use crate::output::long::{LongOptions, render_long};
use crate::output::sink::LineSink;
use crate::utils::{filter_entries, sort_entries};
use chrono::{DateTime, Local};
use tracing::{debug, trace};

/// Renders the whole request and writes it line by line to `sink`.
pub fn present<S: LineSink + ?Sized>(
    request: &ListingRequest,
    now: DateTime<Local>,
    sink: &mut S,
) -> Result<()> {
    for line in render_listing(request, now) {
        sink.emit(&line)?;
    }
    sink.flush()
}

/// Renders the whole request into ordered output lines.
pub fn render_listing(request: &ListingRequest, now: DateTime<Local>) -> Vec<String> {
    let show_headers = needs_headers(&request.groups);
    debug!(
        groups = request.groups.len(),
        show_headers,
        format = ?request.format,
        "rendering listing"
    );

    let mut lines = Vec::new();
    for (index, group) in request.groups.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        if show_headers {
            if let Some(label) = &group.label {
                lines.push(format!("{}:", label));
            }
        }
        lines.extend(render_group(group, request, now));
    }
    lines
}

/// Headers are shown unless the listing is exactly one directory.
pub fn needs_headers(groups: &[EntryGroup]) -> bool {
    !(groups.len() == 1 && groups[0].is_directory())
}

/// Filters, sorts and renders the body of a single group.
pub fn render_group(
    group: &EntryGroup,
    request: &ListingRequest,
    now: DateTime<Local>,
) -> Vec<String> {
    let mut entries = group.entries.clone();
    filter_entries(&mut entries, request.hidden, &request.ignore);
    sort_entries(&mut entries, request.sort);
    trace!(label = ?group.label, kept = entries.len(), "group prepared");

    if request.format == ListingFormat::Long {
        let options = LongOptions {
            block_size: request.block_size,
            size_style: request.size_style,
        };
        return render_long(&entries, options, now);
    }

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    if names.is_empty() {
        return Vec::new();
    }

    let single_column =
        request.force_single_column || request.format == ListingFormat::SingleColumn;
    match request.format {
        ListingFormat::Commas => vec![render_commas(&names)],
        _ if single_column => render_horizontal(&names, LayoutPlan::single_column(&names)),
        ListingFormat::Horizontal => {
            render_horizontal(&names, LayoutPlan::for_names(&names, request.output_width))
        }
        _ => render_vertical(&names, LayoutPlan::for_names(&names, request.output_width)),
    }
}
