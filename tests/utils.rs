use globset::GlobSet;
use sls::data::{Entry, EntryKind, HiddenPolicy, SizeOrder, SortPolicy};
use sls::utils::{build_ignore_matcher, filter_entries, sort_entries};
use std::time::SystemTime;

fn file(name: &str, size_bytes: u64) -> Entry {
    Entry {
        name: name.to_string(),
        kind: EntryKind::File,
        mode: 0o644,
        link_count: 1,
        owner_id: 1000,
        size_bytes,
        modified_at: SystemTime::UNIX_EPOCH,
    }
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_filter_hidden() {
    let mut entries = vec![file(".git", 0), file("src", 0), file(".env", 0), file("a.b", 0)];

    filter_entries(&mut entries, HiddenPolicy::HideHidden, &GlobSet::empty());
    assert_eq!(names(&entries), vec!["src", "a.b"]);
}

#[test]
fn test_filter_show_hidden_keeps_everything() {
    let mut entries = vec![file(".git", 0), file("src", 0)];
    filter_entries(&mut entries, HiddenPolicy::ShowHidden, &GlobSet::empty());
    assert_eq!(names(&entries), vec![".git", "src"]);
}

#[test]
fn test_filter_ignore_patterns() {
    let matcher = build_ignore_matcher(&["*.o".to_string(), "target".to_string()]).unwrap();
    let mut entries = vec![
        file("main.o", 0),
        file("main.c", 0),
        file("target", 0),
        file(".cache.o", 0),
    ];

    filter_entries(&mut entries, HiddenPolicy::ShowHidden, &matcher);
    assert_eq!(names(&entries), vec!["main.c"]);
}

#[test]
fn test_sort_entries_by_size() {
    let entries = vec![file("b.txt", 1024), file("a.txt", 2048), file("c.txt", 512)];

    // Unsorted keeps collection order
    let mut unsorted = entries.clone();
    sort_entries(&mut unsorted, SortPolicy::Unsorted);
    assert_eq!(names(&unsorted), vec!["b.txt", "a.txt", "c.txt"]);

    // Largest first
    let mut descending = entries.clone();
    sort_entries(&mut descending, SortPolicy::BySize(SizeOrder::Descending));
    assert_eq!(names(&descending), vec!["a.txt", "b.txt", "c.txt"]);

    // Smallest first
    let mut ascending = entries.clone();
    sort_entries(&mut ascending, SortPolicy::BySize(SizeOrder::Ascending));
    assert_eq!(names(&ascending), vec!["c.txt", "b.txt", "a.txt"]);
}

#[test]
fn test_sort_is_stable_for_equal_sizes() {
    let mut entries = vec![
        file("first", 10),
        file("big", 99),
        file("second", 10),
        file("third", 10),
    ];
    sort_entries(&mut entries, SortPolicy::BySize(SizeOrder::Descending));
    assert_eq!(names(&entries), vec!["big", "first", "second", "third"]);
}

#[test]
fn test_build_ignore_matcher_invalid_pattern() {
    let patterns = vec![
        "[invalid".to_string(), // Invalid glob pattern
    ];

    let matcher = build_ignore_matcher(&patterns);
    assert!(matcher.is_err());
}
