//! qrstudio CLI - styled QR code generator.

mod commands;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrstudio")]
#[command(about = "Generate styled QR codes and export them as PNG", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a QR code from flags and export it
    Generate(commands::GenerateArgs),
    /// List the color presets
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit the form line by line (default)
    Interactive {
        /// Directory to save qrcode.png into
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("qrstudio_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive { out: None }) {
        Commands::Generate(args) => commands::generate(args)?,
        Commands::Presets { json } => commands::list_presets(json)?,
        Commands::Interactive { out } => commands::run_interactive(out)?,
    }

    Ok(())
}
