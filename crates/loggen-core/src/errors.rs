use crate::configurator::Phase;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogGenError
pub type Result<T> = std::result::Result<T, LogGenError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match
/// on without depending on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Lifecycle contract
    Precondition,
    AlreadyConfigured,
    NoSavedLevel,

    // Validation
    InvalidPath,
    UnknownLevel,
    InvalidFormat,

    // Sinks
    SinkAttach,

    // Settings
    SettingsRead,
    SettingsParse,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Precondition => "ERR_PRECONDITION",
            ErrorKind::AlreadyConfigured => "ERR_ALREADY_CONFIGURED",
            ErrorKind::NoSavedLevel => "ERR_NO_SAVED_LEVEL",
            ErrorKind::InvalidPath => "ERR_INVALID_PATH",
            ErrorKind::UnknownLevel => "ERR_UNKNOWN_LEVEL",
            ErrorKind::InvalidFormat => "ERR_INVALID_FORMAT",
            ErrorKind::SinkAttach => "ERR_SINK_ATTACH",
            ErrorKind::SettingsRead => "ERR_SETTINGS_READ",
            ErrorKind::SettingsParse => "ERR_SETTINGS_PARSE",
        }
    }
}

/// Errors raised by the logger configurator and its collaborators
#[derive(Error, Debug)]
pub enum LogGenError {
    /// Operation called in the wrong lifecycle phase
    #[error("{op} requires a {expected} logger")]
    Precondition { op: &'static str, expected: Phase },

    /// Log folder already assigned once
    #[error("log folder already set to {}", folder.display())]
    AlreadyConfigured { folder: PathBuf },

    /// Log folder does not exist
    #[error("log folder does not exist: {}", path.display())]
    InvalidPath { path: PathBuf },

    /// Level name outside the fixed mapping
    #[error("unknown level name: {name:?}")]
    UnknownLevel { name: String },

    /// `resume` without a prior `pause` or `set_level`
    #[error("no saved level to resume")]
    NoSavedLevel,

    /// Message template could not be parsed
    #[error("invalid format template {template:?}: {reason}")]
    InvalidFormat { template: String, reason: String },

    /// A sink could not be attached during generation
    #[error("cannot attach file sink at {}", path.display())]
    SinkAttach {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read settings file {}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {source}")]
    SettingsParse {
        #[source]
        source: toml::de::Error,
    },
}

impl LogGenError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            LogGenError::Precondition { .. } => ErrorKind::Precondition,
            LogGenError::AlreadyConfigured { .. } => ErrorKind::AlreadyConfigured,
            LogGenError::InvalidPath { .. } => ErrorKind::InvalidPath,
            LogGenError::UnknownLevel { .. } => ErrorKind::UnknownLevel,
            LogGenError::NoSavedLevel => ErrorKind::NoSavedLevel,
            LogGenError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            LogGenError::SinkAttach { .. } => ErrorKind::SinkAttach,
            LogGenError::SettingsRead { .. } => ErrorKind::SettingsRead,
            LogGenError::SettingsParse { .. } => ErrorKind::SettingsParse,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl From<loggen_core_types::ParseLevelError> for LogGenError {
    fn from(err: loggen_core_types::ParseLevelError) -> Self {
        LogGenError::UnknownLevel { name: err.name }
    }
}
