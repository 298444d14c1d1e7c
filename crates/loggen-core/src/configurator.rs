//! One-time logger generation
//!
//! [`LoggerConfigurator`] collects settings while [`Phase::Unconfigured`],
//! materializes a [`Logger`] exactly once on first use, and afterwards only
//! accepts level changes. The transition is one-way:
//!
//! ```text
//! Unconfigured --(setters)*--> Unconfigured --generate()--> Configured
//!                                  Configured --(set_level|pause|resume|get_level)*
//! ```
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use loggen_core::{Logger, LoggerConfigurator};
//!
//! let mut configurator = LoggerConfigurator::new();
//! configurator.set_file_enabled(false).unwrap();
//!
//! let mut namespace: HashMap<String, Logger> = HashMap::new();
//! configurator.bind(&mut namespace).unwrap();
//! namespace["log"].info("ready");
//! ```

use crate::errors::{LogGenError, Result};
use crate::format::{Template, TemplateFormat};
use crate::logger::sinks::{console_sink, file_sink};
use crate::logger::{ConsoleTarget, Logger};
use crate::namespace::Namespace;
use chrono::{DateTime, Local};
use loggen_core_types::schema::{
    BIND_KEY, DEFAULT_LOGGER_NAME, EVENT_END, EVENT_END_ERROR, EVENT_START, LOG_FILE_EXTENSION,
    LOG_FILE_STEM_FORMAT,
};
use loggen_core_types::{Level, Threshold};
use std::fmt;
use std::path::{Path, PathBuf};

/// Lifecycle phase of a configurator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Settings may still change; no logger exists yet
    Unconfigured,
    /// The logger exists; only level operations are legal
    Configured,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Unconfigured => f.write_str("unconfigured"),
            Phase::Configured => f.write_str("configured"),
        }
    }
}

#[derive(Debug)]
enum State {
    Unconfigured,
    Configured(Generated),
}

#[derive(Debug)]
struct Generated {
    logger: Logger,
    log_path: Option<PathBuf>,
}

/// Builds a logger once from accumulated settings
#[derive(Debug)]
pub struct LoggerConfigurator {
    name: String,
    folder: PathBuf,
    folder_set: bool,
    filename: Option<PathBuf>,
    template: Template,
    print_enabled: bool,
    file_enabled: bool,
    console: ConsoleTarget,
    saved: Option<Threshold>,
    state: State,
}

impl Default for LoggerConfigurator {
    fn default() -> Self {
        Self::named(DEFAULT_LOGGER_NAME)
    }
}

impl LoggerConfigurator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configurator whose logger reports `name` in `{name}`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folder: PathBuf::from("."),
            folder_set: false,
            filename: None,
            template: Template::default(),
            print_enabled: true,
            file_enabled: true,
            console: ConsoleTarget::default(),
            saved: None,
            state: State::Unconfigured,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Unconfigured => Phase::Unconfigured,
            State::Configured(_) => Phase::Configured,
        }
    }

    pub fn is_generated(&self) -> bool {
        self.phase() == Phase::Configured
    }

    fn require(&self, op: &'static str, expected: Phase) -> Result<()> {
        if self.phase() == expected {
            Ok(())
        } else {
            Err(LogGenError::Precondition { op, expected })
        }
    }

    fn generated(&self, op: &'static str) -> Result<&Generated> {
        match &self.state {
            State::Configured(generated) => Ok(generated),
            State::Unconfigured => Err(LogGenError::Precondition {
                op,
                expected: Phase::Configured,
            }),
        }
    }

    // ===== Pre-generation =====

    /// Use `path` as the log file instead of an auto-generated name
    ///
    /// The path is not checked until the file sink is attached.
    ///
    /// # Errors
    ///
    /// `Precondition` once the logger has been generated.
    pub fn set_filename(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.require("set_filename", Phase::Unconfigured)?;
        self.filename = Some(path.into());
        Ok(())
    }

    /// Replace the message template
    ///
    /// # Errors
    ///
    /// `Precondition` once generated; `InvalidFormat` if the template does
    /// not parse, in which case the previous template is kept.
    pub fn set_format(&mut self, template: &str) -> Result<()> {
        self.require("set_format", Phase::Unconfigured)?;
        self.template = Template::parse(template)?;
        Ok(())
    }

    /// Set the directory auto-named log files are created in
    ///
    /// The folder can be set once.
    ///
    /// # Errors
    ///
    /// `Precondition` once generated; `AlreadyConfigured` on a second call;
    /// `InvalidPath` if `path` is not an existing directory.
    pub fn set_folder(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.require("set_folder", Phase::Unconfigured)?;
        if self.folder_set {
            return Err(LogGenError::AlreadyConfigured {
                folder: self.folder.clone(),
            });
        }
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(LogGenError::InvalidPath {
                path: path.to_path_buf(),
            });
        }
        self.folder = path.to_path_buf();
        self.folder_set = true;
        Ok(())
    }

    /// # Errors
    ///
    /// `Precondition` once generated.
    pub fn set_print_enabled(&mut self, enabled: bool) -> Result<()> {
        self.require("set_print_enabled", Phase::Unconfigured)?;
        self.print_enabled = enabled;
        Ok(())
    }

    /// # Errors
    ///
    /// `Precondition` once generated.
    pub fn set_file_enabled(&mut self, enabled: bool) -> Result<()> {
        self.require("set_file_enabled", Phase::Unconfigured)?;
        self.file_enabled = enabled;
        Ok(())
    }

    /// Redirect the console sink
    ///
    /// # Errors
    ///
    /// `Precondition` once generated.
    pub fn set_console_target(&mut self, target: ConsoleTarget) -> Result<()> {
        self.require("set_console_target", Phase::Unconfigured)?;
        self.console = target;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn format(&self) -> &str {
        self.template.as_str()
    }

    pub fn print_enabled(&self) -> bool {
        self.print_enabled
    }

    pub fn file_enabled(&self) -> bool {
        self.file_enabled
    }

    /// Log file path as it would be resolved at `now`
    pub fn resolve_log_path(&self, now: DateTime<Local>) -> PathBuf {
        match &self.filename {
            Some(filename) => filename.clone(),
            None => {
                let stem = now.format(LOG_FILE_STEM_FORMAT);
                self.folder.join(format!("{}.{}", stem, LOG_FILE_EXTENSION))
            }
        }
    }

    // ===== Generation =====

    /// Materialize the logger if that has not happened yet
    ///
    /// Nothing is committed unless every enabled sink attaches, so a failed
    /// generation leaves the configurator unconfigured and may be retried.
    ///
    /// # Errors
    ///
    /// `SinkAttach` when the file sink cannot be opened.
    pub fn generate(&mut self) -> Result<()> {
        if self.is_generated() {
            return Ok(());
        }
        tracing::debug!(
            component = module_path!(),
            op = "generate",
            event = EVENT_START,
            logger = %self.name,
        );

        let mut sinks = Vec::new();
        if self.print_enabled {
            sinks.push(console_sink(&self.console));
        }

        let log_path = if self.file_enabled {
            let path = self.resolve_log_path(Local::now());
            match file_sink(&path) {
                Ok(sink) => sinks.push(sink),
                Err(err) => {
                    tracing::debug!(
                        component = module_path!(),
                        op = "generate",
                        event = EVENT_END_ERROR,
                        err_code = err.code(),
                    );
                    return Err(err);
                }
            }
            Some(path)
        } else {
            None
        };

        let logger = Logger::new(
            self.name.clone(),
            TemplateFormat::new(self.template.clone()),
            sinks,
            Level::Debug.into(),
        );
        tracing::debug!(
            component = module_path!(),
            op = "generate",
            event = EVENT_END,
            log_path = ?log_path,
        );
        self.state = State::Configured(Generated { logger, log_path });
        Ok(())
    }

    /// Generate if needed and return a handle to the logger
    ///
    /// # Errors
    ///
    /// Propagates generation errors.
    pub fn handle(&mut self) -> Result<Logger> {
        self.generate()?;
        self.logger().cloned()
    }

    /// Generate if needed and register the logger under `"log"`
    ///
    /// Repeated calls register the same logger; generation happens once.
    ///
    /// # Errors
    ///
    /// Propagates generation errors.
    pub fn bind<N: Namespace + ?Sized>(&mut self, namespace: &mut N) -> Result<()> {
        let logger = self.handle()?;
        namespace.register(BIND_KEY, logger);
        Ok(())
    }

    // ===== Post-generation =====

    /// # Errors
    ///
    /// `Precondition` before generation.
    pub fn logger(&self) -> Result<&Logger> {
        Ok(&self.generated("logger")?.logger)
    }

    /// Resolved log file path, when a file sink is attached
    pub fn log_path(&self) -> Option<&Path> {
        match &self.state {
            State::Configured(generated) => generated.log_path.as_deref(),
            State::Unconfigured => None,
        }
    }

    /// # Errors
    ///
    /// `Precondition` before generation.
    pub fn threshold(&self) -> Result<Threshold> {
        Ok(self.generated("threshold")?.logger.threshold())
    }

    /// Name of the current level; `SILENT` while paused
    ///
    /// # Errors
    ///
    /// `Precondition` before generation.
    pub fn get_level(&self) -> Result<&'static str> {
        Ok(self.generated("get_level")?.logger.threshold().name())
    }

    /// Apply the level called `name`, remembering the previous one
    ///
    /// # Errors
    ///
    /// `Precondition` before generation; `UnknownLevel` if `name` is not one
    /// of the fixed level names.
    pub fn set_level(&mut self, name: &str) -> Result<()> {
        let logger = self.generated("set_level")?.logger.clone();
        let level: Level = name.parse()?;

        self.saved = Some(logger.threshold());
        logger.set_threshold(level.into());
        tracing::debug!(
            component = module_path!(),
            op = "set_level",
            event = EVENT_END,
            level = level.name(),
        );
        Ok(())
    }

    /// Silence the logger, remembering the current level
    ///
    /// Pausing an already silent logger keeps the level saved by the first
    /// pause.
    ///
    /// # Errors
    ///
    /// `Precondition` before generation.
    pub fn pause(&mut self) -> Result<()> {
        let logger = self.generated("pause")?.logger.clone();
        let current = logger.threshold();
        if !current.is_silent() {
            self.saved = Some(current);
        }
        logger.set_threshold(Threshold::SILENT);
        Ok(())
    }

    /// Restore the level saved by the last `pause` or `set_level`
    ///
    /// # Errors
    ///
    /// `Precondition` before generation; `NoSavedLevel` if no level was
    /// ever saved.
    pub fn resume(&mut self) -> Result<()> {
        let logger = &self.generated("resume")?.logger;
        let saved = self.saved.ok_or(LogGenError::NoSavedLevel)?;
        logger.set_threshold(saved);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn silent_configurator() -> LoggerConfigurator {
        let mut configurator = LoggerConfigurator::new();
        configurator.set_print_enabled(false).unwrap();
        configurator.set_file_enabled(false).unwrap();
        configurator
    }

    #[test]
    fn test_defaults() {
        let configurator = LoggerConfigurator::new();
        assert_eq!(configurator.phase(), Phase::Unconfigured);
        assert_eq!(configurator.name(), DEFAULT_LOGGER_NAME);
        assert_eq!(configurator.folder(), Path::new("."));
        assert_eq!(
            configurator.format(),
            loggen_core_types::schema::DEFAULT_FORMAT
        );
        assert!(configurator.print_enabled());
        assert!(configurator.file_enabled());
    }

    #[test]
    fn test_post_generation_ops_require_generation() {
        let mut configurator = silent_configurator();

        let errs = [
            configurator.get_level().map(|_| ()).unwrap_err(),
            configurator.set_level("INFO").unwrap_err(),
            configurator.pause().unwrap_err(),
            configurator.resume().unwrap_err(),
            configurator.threshold().map(|_| ()).unwrap_err(),
        ];
        for err in errs {
            assert!(matches!(
                err,
                LogGenError::Precondition {
                    expected: Phase::Configured,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_generation_starts_at_debug() {
        let mut configurator = silent_configurator();
        configurator.generate().unwrap();

        assert_eq!(configurator.phase(), Phase::Configured);
        assert_eq!(configurator.get_level().unwrap(), "DEBUG");
        assert!(configurator.log_path().is_none());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let mut configurator = silent_configurator();
        configurator.generate().unwrap();
        let first = configurator.logger().unwrap().clone();
        configurator.generate().unwrap();

        assert!(first.same_logger(configurator.logger().unwrap()));
    }

    #[test]
    fn test_set_format_keeps_previous_template_on_error() {
        let mut configurator = LoggerConfigurator::new();
        configurator.set_format("{level}: {message}").unwrap();
        let err = configurator.set_format("{nope}").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(configurator.format(), "{level}: {message}");
    }

    #[test]
    fn test_unknown_level_leaves_threshold() {
        let mut configurator = silent_configurator();
        configurator.generate().unwrap();
        configurator.set_level("WARNING").unwrap();

        let err = configurator.set_level("Warning").unwrap_err();
        assert!(matches!(err, LogGenError::UnknownLevel { ref name } if name == "Warning"));
        assert_eq!(configurator.get_level().unwrap(), "WARNING");
    }

    #[test]
    fn test_resume_without_saved_level() {
        let mut configurator = silent_configurator();
        configurator.generate().unwrap();

        let err = configurator.resume().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSavedLevel);
    }

    #[test]
    fn test_resume_after_set_level_restores_previous() {
        let mut configurator = silent_configurator();
        configurator.generate().unwrap();
        configurator.set_level("ERROR").unwrap();
        configurator.resume().unwrap();

        assert_eq!(configurator.get_level().unwrap(), "DEBUG");
    }

    #[test]
    fn test_double_pause_keeps_first_saved_level() {
        let mut configurator = silent_configurator();
        configurator.generate().unwrap();
        configurator.set_level("INFO").unwrap();
        configurator.pause().unwrap();
        configurator.pause().unwrap();
        assert_eq!(configurator.get_level().unwrap(), "SILENT");

        configurator.resume().unwrap();
        assert_eq!(configurator.get_level().unwrap(), "INFO");
    }

    #[test]
    fn test_resolve_log_path_prefers_explicit_filename() {
        let mut configurator = LoggerConfigurator::new();
        configurator.set_filename("custom/app.log").unwrap();

        assert_eq!(
            configurator.resolve_log_path(Local::now()),
            PathBuf::from("custom/app.log")
        );
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Unconfigured.to_string(), "unconfigured");
        assert_eq!(Phase::Configured.to_string(), "configured");
    }
}
