//! Line sinks that receive the rendered listing.
//!
//! The presenter never prints directly; it writes each finished line to a
//! [`LineSink`]. The command-line tool uses an [`OutputSink`] configured to
//! write to standard output and, with `--log FILE`, to mirror every line
//! into that file.

use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Destination for rendered lines.
pub trait LineSink {
    fn emit(&mut self, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Collects lines in memory; handy for tests and for callers that post-process.
impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Where an [`OutputSink`] writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkConfig {
    /// Mirror file; created (or truncated) when the sink is opened
    pub write_to_file: Option<PathBuf>,
    /// Write to standard output
    pub write_to_stream: bool,
}

impl SinkConfig {
    pub fn stdout() -> Self {
        Self {
            write_to_file: None,
            write_to_stream: true,
        }
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.write_to_file = path;
        self
    }
}

/// A sink writing newline-terminated lines to any number of writers.
pub struct OutputSink {
    targets: Vec<Box<dyn Write>>,
}

impl OutputSink {
    /// Opens every destination named by `config`.
    pub fn open(config: &SinkConfig) -> Result<Self> {
        let mut targets: Vec<Box<dyn Write>> = Vec::new();
        if config.write_to_stream {
            targets.push(Box::new(io::stdout().lock()));
        }
        if let Some(path) = &config.write_to_file {
            targets.push(Box::new(BufWriter::new(File::create(path)?)));
        }
        Ok(Self { targets })
    }

    pub fn from_writers(targets: Vec<Box<dyn Write>>) -> Self {
        Self { targets }
    }
}

impl LineSink for OutputSink {
    fn emit(&mut self, line: &str) -> Result<()> {
        for target in &mut self.targets {
            writeln!(target, "{}", line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        for target in &mut self.targets {
            target.flush()?;
        }
        Ok(())
    }
}
