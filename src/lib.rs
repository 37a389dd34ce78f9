//! Library crate for sls
//!
//! This exposes the listing pipeline for testing and potential library usage.
//!
//! # Features
//!
//! - **Target Collection**: Classify targets and read each entry's metadata
//! - **Filtering and Sorting**: Hidden files, ignore globs, stable size sort
//! - **Layout Planning**: Row-major and column-major column layouts
//! - **Modular Output System**: Column, comma and long formatters writing to a line sink
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`Entry`, `EntryGroup`, `ListingRequest`)
//! - [`cli`]: Command-line interface definitions
//! - [`error`]: The `ListingError` type
//! - [`layout`]: Column count and row placement
//! - [`output`]: Formatters, the group presenter and line sinks
//! - [`scan`]: Target resolution and metadata collection
//! - [`utils`]: Filtering, sorting, text width and output width helpers

pub mod cli;
pub mod data;
pub mod error;
pub mod layout;
pub mod output;
pub mod scan;
pub mod utils;

pub use cli::Args;
pub use data::{Entry, EntryGroup, EntryKind, ListingFormat, ListingRequest};
pub use error::ListingError;
