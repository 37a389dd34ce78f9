//! Error types for the listing pipeline.
//!
//! Only the collector and the sink can fail; layout and rendering work on
//! already-resolved entries and have no error path.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListingError>;

#[derive(Debug, Error)]
pub enum ListingError {
    /// A requested target is neither a file nor a directory.
    #[error("Unknown file/directory {target}")]
    UnknownTarget { target: String },

    /// A target's own metadata could not be read.
    #[error("Cannot read metadata of '{}'", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory target could not be listed.
    #[error("Cannot read directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid ignore pattern: '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Writing to standard output or the log file failed.
    #[error("Failed to write listing output")]
    Sink(#[from] io::Error),
}
