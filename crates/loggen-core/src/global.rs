//! Process-wide default configurator
//!
//! Convenience for programs that want one logger configured at startup.
//! Access is serialized by a mutex, which also covers the
//! generate-on-first-use race between threads.

use crate::configurator::LoggerConfigurator;
use std::sync::{Mutex, OnceLock, PoisonError};

static GLOBAL: OnceLock<Mutex<LoggerConfigurator>> = OnceLock::new();

/// The process-wide configurator, created on first access
pub fn global() -> &'static Mutex<LoggerConfigurator> {
    GLOBAL.get_or_init(|| Mutex::new(LoggerConfigurator::new()))
}

/// Run `f` with exclusive access to the process-wide configurator
///
/// # Example
///
/// ```
/// use loggen_core::with_global;
///
/// let log = with_global(|configurator| {
///     if !configurator.is_generated() {
///         configurator.set_file_enabled(false)?;
///     }
///     configurator.handle()
/// })
/// .unwrap();
/// log.info("started");
/// ```
pub fn with_global<T>(f: impl FnOnce(&mut LoggerConfigurator) -> T) -> T {
    let mut guard = global().lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}
