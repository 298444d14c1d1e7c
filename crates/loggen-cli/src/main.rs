//! loggen CLI
//!
//! Command-line front end for configuring a logger and writing to it

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "loggen")]
#[command(about = "loggen - configure a console/file logger once and write to it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Configure a logger and emit one message through it
    Emit(commands::emit::EmitArgs),
    /// Validate settings and template without creating any sink
    Check(commands::check::CheckArgs),
}

/// Diagnostics for loggen itself, only when RUST_LOG is set
fn init_diagnostics() {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() {
    init_diagnostics();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Check(args) => commands::check::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
