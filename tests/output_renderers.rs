use chrono::{Duration, Local, TimeZone};
use sls::data::{Entry, EntryGroup, EntryKind, ListingFormat, ListingRequest};
use sls::layout::LayoutPlan;
use sls::output::columns::{COMMA_SEPARATOR, render_commas, render_horizontal, render_vertical};
use sls::output::long::{LongOptions, render_long};
use sls::output::render_listing;
use std::num::NonZeroU64;

fn entry(name: &str, kind: EntryKind, mode: u32, size_bytes: u64) -> Entry {
    let modified = Local.with_ymd_and_hms(2024, 3, 4, 9, 15, 0).unwrap();
    Entry {
        name: name.to_string(),
        kind,
        mode,
        link_count: 2,
        owner_id: 501,
        size_bytes,
        modified_at: modified.into(),
    }
}

#[test]
fn test_commas_round_trip() {
    let names = ["Cargo.toml", "src", "README.md", "x"];
    let line = render_commas(&names);
    let recovered: Vec<_> = line.split(COMMA_SEPARATOR).collect();
    assert_eq!(recovered, names);
}

#[test]
fn test_column_renderers_use_same_width() {
    let names = ["one", "three", "five", "seven", "nine"];
    let plan = LayoutPlan::for_names(&names, 13);
    assert_eq!(plan.column_width, 6);
    assert_eq!(plan.columns, 2);

    let horizontal = render_horizontal(&names, plan);
    assert_eq!(horizontal, vec!["one   three ", "five  seven ", "nine  "]);

    let vertical = render_vertical(&names, plan);
    assert_eq!(vertical, vec!["one   seven ", "three nine  ", "five  "]);
}

#[test]
fn test_long_renderer_fields() {
    let now = Local.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    let entries = vec![
        entry("src", EntryKind::Directory, 0o755, 4096),
        entry("run.sh", EntryKind::File, 0o4750, 1025),
    ];
    let options = LongOptions {
        block_size: NonZeroU64::new(512),
        ..Default::default()
    };

    let lines = render_long(&entries, options, now);
    assert_eq!(
        lines,
        vec![
            "drwxr-xr-x   2 501        8 Mar 04 09:15 src",
            "-rwsr-x---   2 501        3 Mar 04 09:15 run.sh",
        ]
    );
}

#[test]
fn test_long_renderer_old_files_show_year() {
    let now = Local::now();
    let old = now - Duration::days(400);
    let mut file = entry("old.log", EntryKind::File, 0o644, 7);
    file.modified_at = old.into();

    let lines = render_long(&[file], LongOptions::default(), now);
    let expected_date = old.format("%b %d  %Y").to_string();
    assert!(lines[0].contains(&expected_date), "line was {:?}", lines[0]);
}

#[test]
fn test_listing_long_format_multiple_groups() {
    let now = Local.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
    let request = ListingRequest {
        groups: vec![
            EntryGroup::files(vec![entry("notes.txt", EntryKind::File, 0o644, 12)]),
            EntryGroup::directory("bin", vec![entry("tool", EntryKind::File, 0o755, 900)]),
        ],
        format: ListingFormat::Long,
        ..Default::default()
    };

    assert_eq!(
        render_listing(&request, now),
        vec![
            "-rw-r--r--   2 501       12 Mar 04 09:15 notes.txt",
            "",
            "bin:",
            "-rwxr-xr-x   2 501      900 Mar 04 09:15 tool",
        ]
    );
}
