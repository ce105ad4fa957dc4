//! linefit command-line entry point

use clap::Parser;
use linefit_cli::commands::Commands;

/// Fit free-form script text into fixed-length voice-over lines
#[derive(Debug, Parser)]
#[command(name = "linefit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
