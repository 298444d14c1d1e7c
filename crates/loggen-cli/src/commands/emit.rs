//! Emit command
//!
//! Usage: loggen emit [SETTINGS] [--level <LEVEL>] [--at <LEVEL>] <MESSAGE>...

use super::SettingsArgs;
use clap::Args;
use loggen_core::Level;

#[derive(Debug, Args)]
pub struct EmitArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Logger level applied after generation (overrides the config file)
    #[arg(long)]
    pub level: Option<Level>,

    /// Severity of the emitted message
    #[arg(long, default_value = "INFO")]
    pub at: Level,

    /// Message words, joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = args.settings.resolve()?;
    if args.level.is_some() {
        settings.level = args.level;
    }

    let mut configurator = settings.configurator()?;
    let log = configurator.handle()?;
    settings.apply_level(&mut configurator)?;

    log.log(args.at, args.message.join(" "));

    if let Some(path) = configurator.log_path() {
        eprintln!("{}", path.display());
    }

    Ok(())
}
