//! CLI frontend for the Ringwerk upkeep simulation.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ringwerk",
    about = "Ringwerk — effect-sustaining rings with metered upkeep",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate the ring variants a content pack produces
    Catalog {
        /// Content pack JSON file
        #[arg(short, long)]
        pack: PathBuf,

        /// Seed cost for each ring (default: creative sentinel)
        #[arg(long, default_value = "-1", allow_hyphen_values = true)]
        cost: i32,
    },

    /// Render the tooltip for a ring's persisted tag data
    Tooltip {
        /// Tag map JSON file
        file: PathBuf,

        /// Content pack JSON file (for effect names)
        #[arg(short, long)]
        pack: PathBuf,
    },

    /// Run a tick-based upkeep simulation from a scenario file
    Simulate {
        /// Scenario JSON file
        file: PathBuf,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "120")]
        ticks: u64,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// In-world seconds per tick
        #[arg(long, default_value = "1.0")]
        speed: f64,

        /// Show all events (not just summary)
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Catalog { pack, cost } => commands::catalog::run(&pack, cost),
        Commands::Tooltip { file, pack } => commands::tooltip::run(&file, &pack),
        Commands::Simulate {
            file,
            ticks,
            seed,
            speed,
            verbose,
        } => commands::simulate::run(&file, ticks, seed, speed, verbose),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
