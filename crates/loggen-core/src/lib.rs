//! loggen core - one-time logger configuration
//!
//! This crate provides:
//! - [`LoggerConfigurator`]: collects sink, folder, filename and template
//!   settings, then materializes a logger exactly once
//! - [`Logger`]: cloneable handle with console and file sinks and a
//!   runtime-adjustable threshold (set, pause, resume)
//! - [`Namespace`]: registration target for `bind`
//! - [`LoggerSettings`]: TOML settings applied through the same setters
//! - [`global`] / [`with_global`]: optional process-wide default instance

pub mod configurator;
pub mod errors;
pub mod format;
pub mod global;
pub mod logger;
pub mod namespace;
pub mod settings;

// Re-export commonly used types
pub use configurator::{LoggerConfigurator, Phase};
pub use errors::{ErrorKind, LogGenError, Result};
pub use format::Template;
pub use global::{global, with_global};
pub use logger::{ConsoleTarget, Logger, SharedBuffer};
pub use loggen_core_types::{Level, Threshold};
pub use namespace::Namespace;
pub use settings::LoggerSettings;
