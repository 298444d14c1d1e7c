pub mod check;
pub mod emit;

use clap::Args;
use loggen_core::LoggerSettings;
use std::path::PathBuf;

/// Settings shared by every command; flags override the config file
#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Logger name reported by `{name}`
    #[arg(long)]
    pub name: Option<String>,

    /// Existing directory for auto-named log files
    #[arg(long)]
    pub folder: Option<PathBuf>,

    /// Explicit log file path
    #[arg(long)]
    pub filename: Option<PathBuf>,

    /// Message template
    #[arg(long)]
    pub format: Option<String>,

    /// Do not attach the console sink
    #[arg(long)]
    pub no_print: bool,

    /// Do not attach the file sink
    #[arg(long)]
    pub no_file: bool,
}

impl SettingsArgs {
    /// Settings from `--config`, overridden by explicit flags
    pub fn resolve(&self) -> loggen_core::Result<LoggerSettings> {
        let base = match &self.config {
            Some(path) => LoggerSettings::load(path)?,
            None => LoggerSettings::default(),
        };
        let overrides = LoggerSettings {
            name: self.name.clone(),
            folder: self.folder.clone(),
            filename: self.filename.clone(),
            format: self.format.clone(),
            print: self.no_print.then_some(false),
            file: self.no_file.then_some(false),
            level: None,
        };
        Ok(base.merged_with(overrides))
    }
}
