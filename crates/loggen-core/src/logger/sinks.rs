//! Console and file sinks
//!
//! A sink is a `tracing-subscriber` [`MakeWriter`] that receives each
//! rendered line. Records are written directly once they pass the logger's
//! threshold, so `tracing`'s compile-time level features never filter them.

use crate::errors::{LogGenError, Result};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;

/// Where the console sink writes
#[derive(Debug, Clone, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
    /// In-memory buffer, for tests and hosts that collect output themselves
    Buffer(SharedBuffer),
}

impl ConsoleTarget {
    fn make_writer(&self) -> BoxMakeWriter {
        match self {
            ConsoleTarget::Stdout => BoxMakeWriter::new(io::stdout),
            ConsoleTarget::Stderr => BoxMakeWriter::new(io::stderr),
            ConsoleTarget::Buffer(buffer) => BoxMakeWriter::new(buffer.clone()),
        }
    }
}

/// Cloneable in-memory writer; clones share one buffer
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        let bytes = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Destination for rendered lines
pub(crate) struct Sink {
    kind: &'static str,
    writer: BoxMakeWriter,
}

impl Sink {
    /// Write one line; a failed write is reported on stderr and the record
    /// is dropped for this sink only
    pub(crate) fn write_line(&self, line: &str) {
        let mut writer = self.writer.make_writer();
        if let Err(err) = writer.write_all(line.as_bytes()) {
            eprintln!("loggen: {} sink write failed: {}", self.kind, err);
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("kind", &self.kind).finish()
    }
}

/// Console sink at maximum verbosity
pub(crate) fn console_sink(target: &ConsoleTarget) -> Sink {
    Sink {
        kind: "console",
        writer: target.make_writer(),
    }
}

/// File sink appending to `path`, creating the file if needed
///
/// # Errors
///
/// Returns `SinkAttach` when the file cannot be opened for writing.
pub(crate) fn file_sink(path: &Path) -> Result<Sink> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogGenError::SinkAttach {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Sink {
        kind: "file",
        writer: BoxMakeWriter::new(Mutex::new(file)),
    })
}
