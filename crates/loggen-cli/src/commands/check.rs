//! Check command
//!
//! Usage: loggen check [SETTINGS] [--level <LEVEL>]
//!
//! Applies the settings to a fresh configurator without generating it, so
//! folder and template problems surface without creating any file.

use super::SettingsArgs;
use clap::Args;
use loggen_core::Level;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Level that would be applied after generation
    #[arg(long)]
    pub level: Option<Level>,
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.settings.resolve()?;
    let configurator = settings.configurator()?;
    let level = args.level.or(settings.level);

    println!("name:   {}", configurator.name());
    println!("format: {}", configurator.format());
    println!("print:  {}", configurator.print_enabled());
    if configurator.file_enabled() {
        match &settings.filename {
            Some(filename) => println!("file:   {}", filename.display()),
            None => println!("file:   {}/<timestamp>.log", configurator.folder().display()),
        }
    } else {
        println!("file:   disabled");
    }
    match level {
        Some(level) => println!("level:  {}", level),
        None => println!("level:  {}", Level::Debug),
    }
    println!("✓ Settings are valid");

    Ok(())
}
