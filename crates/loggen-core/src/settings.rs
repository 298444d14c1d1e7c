//! TOML settings for a configurator
//!
//! Every field is optional; anything left out keeps the configurator
//! default.
//!
//! ```toml
//! name = "billing"
//! folder = "/var/log/billing"
//! format = "{timestamp} [{level}] {name}: {message}"
//! print = false
//! file = true
//! level = "INFO"
//! ```

use crate::configurator::LoggerConfigurator;
use crate::errors::{LogGenError, Result};
use loggen_core_types::Level;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerSettings {
    pub name: Option<String>,
    pub folder: Option<PathBuf>,
    pub filename: Option<PathBuf>,
    pub format: Option<String>,
    pub print: Option<bool>,
    pub file: Option<bool>,
    /// Applied after generation
    pub level: Option<Level>,
}

impl LoggerSettings {
    /// # Errors
    ///
    /// `SettingsParse` on malformed TOML, unknown keys or unknown level names.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|source| LogGenError::SettingsParse { source })
    }

    /// # Errors
    ///
    /// `SettingsRead` if the file cannot be read, otherwise as
    /// [`LoggerSettings::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LogGenError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Field-wise merge; values present in `overrides` win
    pub fn merged_with(self, overrides: LoggerSettings) -> LoggerSettings {
        LoggerSettings {
            name: overrides.name.or(self.name),
            folder: overrides.folder.or(self.folder),
            filename: overrides.filename.or(self.filename),
            format: overrides.format.or(self.format),
            print: overrides.print.or(self.print),
            file: overrides.file.or(self.file),
            level: overrides.level.or(self.level),
        }
    }

    /// New unconfigured configurator with these settings applied
    ///
    /// # Errors
    ///
    /// Propagates setter errors (`InvalidPath`, `InvalidFormat`).
    pub fn configurator(&self) -> Result<LoggerConfigurator> {
        let mut configurator = match &self.name {
            Some(name) => LoggerConfigurator::named(name.clone()),
            None => LoggerConfigurator::new(),
        };
        self.apply(&mut configurator)?;
        Ok(configurator)
    }

    /// Run the pre-generation setters for every present field
    ///
    /// # Errors
    ///
    /// Propagates setter errors, including `Precondition` on a generated
    /// configurator.
    pub fn apply(&self, configurator: &mut LoggerConfigurator) -> Result<()> {
        if let Some(folder) = &self.folder {
            configurator.set_folder(folder)?;
        }
        if let Some(filename) = &self.filename {
            configurator.set_filename(filename.clone())?;
        }
        if let Some(format) = &self.format {
            configurator.set_format(format)?;
        }
        if let Some(print) = self.print {
            configurator.set_print_enabled(print)?;
        }
        if let Some(file) = self.file {
            configurator.set_file_enabled(file)?;
        }
        Ok(())
    }

    /// Apply `level`, if present, to a generated configurator
    ///
    /// # Errors
    ///
    /// `Precondition` before generation.
    pub fn apply_level(&self, configurator: &mut LoggerConfigurator) -> Result<()> {
        if let Some(level) = self.level {
            configurator.set_level(level.name())?;
        }
        Ok(())
    }
}
