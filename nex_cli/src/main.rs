//! nex - Command-line harness for the nex_core rules engine
//!
//! Run with: `nex <command>`. Set `RUST_LOG=debug` to trace rolls and
//! transitions on stderr.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CanEquip, Caps, PeLimit, Roll, Rules, StopBleeding, Turn};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Dice, resource and turn rules for NEX campaigns
#[derive(Parser)]
#[command(name = "nex")]
#[command(about = "Rules engine for NEX campaigns", long_about = None)]
#[command(version)]
struct Cli {
    /// Rules file overriding the class table and rule constants
    #[arg(long, global = true, value_name = "FILE.toml")]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Roll a dice formula such as 2d6+3
    Roll(Roll),

    /// Show PV/SAN/PE caps and Defense for a class at a NEX
    Caps(Caps),

    /// Show the PE-per-turn limit for a NEX
    PeLimit(PeLimit),

    /// Process one turn for a character file
    Turn(Turn),

    /// Attempt the stop-bleeding check for a character file
    StopBleeding(StopBleeding),

    /// Check whether a rank may carry another item of a category
    CanEquip(CanEquip),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let rules = Rules::load(cli.rules.as_deref())?;

    match cli.command {
        Command::Roll(cmd) => cmd.execute(),
        Command::Caps(cmd) => cmd.execute(&rules),
        Command::PeLimit(cmd) => cmd.execute(),
        Command::Turn(cmd) => cmd.execute(&rules),
        Command::StopBleeding(cmd) => cmd.execute(&rules),
        Command::CanEquip(cmd) => cmd.execute(),
    }
}
