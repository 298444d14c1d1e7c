use super::sinks::Sink;
use crate::format::{Record, TemplateFormat};
use chrono::Local;
use loggen_core_types::{Level, Threshold};
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

/// Handle to a materialized logger
///
/// Clones share the same sinks and the same threshold, so a level change
/// made through the configurator is seen by every handle already bound.
/// Records below the threshold are dropped before they reach any sink.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    threshold: AtomicU16,
    format: TemplateFormat,
    sinks: Vec<Sink>,
}

impl Logger {
    pub(crate) fn new(
        name: impl Into<String>,
        format: TemplateFormat,
        sinks: Vec<Sink>,
        threshold: Threshold,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                threshold: AtomicU16::new(threshold.value()),
                format,
                sinks,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn threshold(&self) -> Threshold {
        // Only values produced by `Threshold::value` are ever stored.
        Threshold::from_value(self.inner.threshold.load(Ordering::Acquire))
            .unwrap_or(Threshold::SILENT)
    }

    pub(crate) fn set_threshold(&self, threshold: Threshold) {
        self.inner
            .threshold
            .store(threshold.value(), Ordering::Release);
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        self.threshold().admits(level)
    }

    /// Whether both handles refer to the same materialized logger
    pub fn same_logger(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Emit `message` at `level`, attributed to the caller's source location
    #[track_caller]
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.is_enabled_for(level) {
            return;
        }
        let location = Location::caller();
        self.emit(level, location.file(), location.line(), &message);
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Level::Warning, message);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Level::Critical, message);
    }

    fn emit(&self, level: Level, file: &str, line: u32, message: &dyn fmt::Display) {
        if self.inner.sinks.is_empty() {
            return;
        }
        let message = message.to_string();
        let record = Record {
            timestamp: Local::now(),
            level,
            path: file,
            line: Some(line),
            logger: &self.inner.name,
            message: &message,
        };
        let rendered = self.inner.format.format_line(&record);
        for sink in &self.inner.sinks {
            sink.write_line(&rendered);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("threshold", &self.threshold())
            .field("sinks", &self.inner.sinks)
            .finish()
    }
}
