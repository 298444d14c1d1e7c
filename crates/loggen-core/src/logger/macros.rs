//! Formatting macros for logger handles
//!
//! Each macro formats its arguments lazily through `format_args!` and
//! records the invocation site as the source location.

/// Log at DEBUG
///
/// # Example
///
/// ```
/// # use loggen_core::{log_debug, LoggerConfigurator};
/// let mut configurator = LoggerConfigurator::new();
/// configurator.set_print_enabled(false).unwrap();
/// configurator.set_file_enabled(false).unwrap();
/// let log = configurator.handle().unwrap();
/// log_debug!(log, "cache warmed in {} ms", 12);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log($crate::Level::Debug, format_args!($($arg)+))
    };
}

/// Log at INFO
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log($crate::Level::Info, format_args!($($arg)+))
    };
}

/// Log at WARNING
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log($crate::Level::Warning, format_args!($($arg)+))
    };
}

/// Log at ERROR
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log($crate::Level::Error, format_args!($($arg)+))
    };
}

/// Log at CRITICAL
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log($crate::Level::Critical, format_args!($($arg)+))
    };
}
