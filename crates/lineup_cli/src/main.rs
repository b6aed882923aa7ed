//! Lineup CLI
//!
//! Catalog lookups, formation arrangement and drop evaluation on roster
//! JSON files.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "lineup")]
#[command(about = "Arrange team formations and evaluate lineup edits", long_about = None)]
struct Cli {
    /// Board config file (YAML or JSON); falls back to LINEUP_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print positions, formations and capacity of a sport
    Catalog {
        #[arg(long)]
        sport: String,
    },

    /// Arrange the starters of a roster file into a formation
    Arrange {
        /// Roster JSON file
        #[arg(long)]
        roster: PathBuf,

        /// Formation name (e.g. "4-4-2")
        #[arg(long)]
        formation: String,

        /// Write the arranged roster here
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Drag a player and drop it on the field or the bench
    Drop {
        /// Roster JSON file
        #[arg(long)]
        roster: PathBuf,

        /// Id of the dragged player
        #[arg(long)]
        player: String,

        /// Horizontal drop position, percent of field width
        #[arg(long, required_unless_present = "bench", allow_negative_numbers = true)]
        x: Option<f32>,

        /// Vertical drop position, percent of field height
        #[arg(long, required_unless_present = "bench", allow_negative_numbers = true)]
        y: Option<f32>,

        /// Drop on the bench instead of the field
        #[arg(long, conflicts_with_all = ["x", "y"])]
        bench: bool,

        /// Write the updated roster here
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = lineup_cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Catalog { sport } => {
            let report = lineup_cli::catalog_report(&sport)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Arrange { roster, formation, out } => {
            let roster = lineup_cli::RosterFile::load(&roster)?;
            let report = lineup_cli::arrange(roster, &formation, config)?;
            if let Some(path) = out {
                report.roster.save(&path)?;
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Drop { roster, player, x, y, bench, out } => {
            let roster = lineup_cli::RosterFile::load(&roster)?;
            let target = match (bench, x, y) {
                (true, _, _) => None,
                (false, Some(x), Some(y)) => Some((x, y)),
                _ => anyhow::bail!("--x and --y are required unless --bench is given"),
            };
            let report = lineup_cli::drop_player(roster, &player, target, config)?;
            if let Some(path) = out {
                report.roster.save(&path)?;
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("lineup CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
