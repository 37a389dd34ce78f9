//! Target collection for `sls`.
//!
//! This module handles:
//! - Classifying each target as a file or a directory
//! - Listing a directory's direct children using `WalkDir` limited to depth 1
//! - Reading the metadata the long format and the size sort need
//!
//! The main entry point is [`collect_groups`], which returns:
//! - one unlabeled [`EntryGroup`] holding every file target, when there are any
//! - one labeled group per directory target, in the order the targets were given
//!
//! Collection aborts on the first target that is neither a file nor a
//! directory, before anything is printed. A child whose link target cannot
//! be read (for example a dangling symlink) is listed with the metadata of
//! the link itself; only a child that cannot be read at all is skipped with
//! a warning.

use crate::data::{Entry, EntryGroup, EntryKind};
use crate::error::{ListingError, Result};
use std::fs::{self, Metadata};
use std::io::ErrorKind;
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Resolves targets into entry groups.
///
/// # Arguments
/// * `targets` - Paths exactly as the user typed them
///
/// # Errors
/// Returns an error if:
/// - A target does not exist or is neither a file nor a directory
/// - A target exists but its metadata cannot be read
/// - A directory target cannot be read
pub fn collect_groups<P: AsRef<Path>>(targets: &[P]) -> Result<Vec<EntryGroup>> {
    let mut files = Vec::new();
    let mut directories = Vec::new();

    for target in targets {
        let path = target.as_ref();
        let label = path.to_string_lossy().into_owned();
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ListingError::UnknownTarget { target: label });
            }
            Err(source) => {
                return Err(ListingError::Metadata {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        if meta.is_file() {
            files.push(entry_from_metadata(label, &meta));
        } else if meta.is_dir() {
            let children = list_children(path)?;
            directories.push(EntryGroup::directory(label, children));
        } else {
            return Err(ListingError::UnknownTarget { target: label });
        }
    }

    debug!(
        files = files.len(),
        directories = directories.len(),
        "targets resolved"
    );

    let mut groups = Vec::with_capacity(directories.len() + 1);
    if !files.is_empty() {
        groups.push(EntryGroup::files(files));
    }
    groups.extend(directories);
    Ok(groups)
}

/// Lists the direct children of `dir`, sorted by file name.
///
/// Symlinks are followed for metadata, so a link to a directory is listed
/// as a directory. A link whose target is missing keeps its own metadata
/// and is listed as a file.
pub fn list_children(dir: &Path) -> Result<Vec<Entry>> {
    let mut children = Vec::new();

    for item in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let item = match item {
            Ok(item) => item,
            Err(err) if err.depth() == 0 => {
                return Err(ListingError::ReadDir {
                    path: dir.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                eprintln!("Warning: skipping entry in '{}': {}", dir.display(), err);
                continue;
            }
        };

        let name = item.file_name().to_string_lossy().into_owned();
        match child_metadata(item.path()) {
            Ok(meta) => children.push(entry_from_metadata(name, &meta)),
            Err(err) => {
                eprintln!(
                    "Warning: cannot read metadata of '{}': {}",
                    item.path().display(),
                    err
                );
            }
        }
    }

    Ok(children)
}

/// Stats `path` through symlinks, falling back to the link itself.
fn child_metadata(path: &Path) -> std::io::Result<Metadata> {
    fs::metadata(path).or_else(|err| {
        trace!(path = %path.display(), error = %err, "target unreadable, using lstat");
        fs::symlink_metadata(path)
    })
}

fn entry_from_metadata(name: String, meta: &Metadata) -> Entry {
    let modified_at = meta.modified().unwrap_or_else(|err| {
        debug!(name = %name, error = %err, "no modification time, using epoch");
        SystemTime::UNIX_EPOCH
    });
    Entry {
        name,
        kind: if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        },
        mode: meta.mode(),
        link_count: meta.nlink(),
        owner_id: meta.uid(),
        size_bytes: meta.size(),
        modified_at,
    }
}
