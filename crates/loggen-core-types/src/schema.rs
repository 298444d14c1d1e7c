//! Canonical schema constants for log records and diagnostics
//!
//! These constants keep diagnostic events, template placeholders and file
//! naming consistent across crates.

// Diagnostic event names for the facade's own events
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Template placeholders
pub const PLACEHOLDER_TIMESTAMP: &str = "timestamp";
pub const PLACEHOLDER_LEVEL: &str = "level";
pub const PLACEHOLDER_LEVELNO: &str = "levelno";
pub const PLACEHOLDER_FILE: &str = "file";
pub const PLACEHOLDER_PATH: &str = "path";
pub const PLACEHOLDER_LINE: &str = "line";
pub const PLACEHOLDER_NAME: &str = "name";
pub const PLACEHOLDER_MESSAGE: &str = "message";

/// Template used until `set_format` replaces it
pub const DEFAULT_FORMAT: &str = "{timestamp} - {level} ({file}) : {message}";

/// chrono pattern for `{timestamp}`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// chrono pattern for the stem of auto-named log files
pub const LOG_FILE_STEM_FORMAT: &str = "%Y%m%d-%H%M%S";
pub const LOG_FILE_EXTENSION: &str = "log";

/// Key a bound logger is registered under
pub const BIND_KEY: &str = "log";

pub const DEFAULT_LOGGER_NAME: &str = "loggen";
