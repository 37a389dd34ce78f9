//! Output formatters for the `sls` application.
//!
//! # Available Formatters
//!
//! - **Columns**: single column, commas, horizontal and vertical layouts
//! - **Long**: one attribute line per entry
//!
//! The [`present`] module ties them together per group and writes the
//! result to a [`sink::LineSink`].

pub mod columns;
pub mod long;
pub mod present;
pub mod sink;

// Re-export the main entry points for convenience

/// Renders and emits a whole request.
///
/// See [`present::present`] for full documentation.
pub use present::{present, render_listing};
pub use sink::{LineSink, OutputSink, SinkConfig};
