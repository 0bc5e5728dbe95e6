//! credits-gen - credits screen data generator
//!
//! Reads a subscriber export (CSV) and writes the credits chunk table as
//! assembler data (`credits_data.i` by default).
//!
//! ```bash
//! # From an export, leaving out two names
//! credits-gen -I subscriber-list.csv -x "alice,bob"
//!
//! # Placeholder names for testing the credits routine
//! credits-gen --dummy -o build/credits_data.i
//! ```

use anyhow::Result;
use clap::Parser;

use credits_gen::{generate, GenerateArgs};

#[derive(Parser)]
#[command(name = "credits-gen")]
#[command(about = "Credits screen data generator")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    generate::run(&cli.args)?;
    Ok(())
}
