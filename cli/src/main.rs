mod logging;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use stridelog_core::{Settings, WorkoutLog};
use tracing::info;

#[derive(Parser)]
#[command(name = "stridelog")]
#[command(about = "Log workout distances by day", long_about = None)]
struct Cli {
    /// Settings file to use instead of the one in the config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the Terminal User Interface
    Tui {
        /// Start with a few sample workouts
        #[arg(long)]
        sample: bool,
    },
    /// Add entries to an empty log and print it (usage: report 20.07.19:5.7 19.07.19:3)
    Report {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Entries as DATE:KM, applied in order
        #[arg(required = true)]
        entries: Vec<String>,
    },
}

fn run_tui(settings: &Settings, sample: bool) -> Result<()> {
    if let Err(e) = logging::init_file(settings) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let log = if sample || settings.sample_data {
        WorkoutLog::with_sample_data()
    } else {
        WorkoutLog::new()
    };
    info!(entries = log.len(), "starting tui");
    tui::run(log)?;
    info!("tui closed");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    match cli.command {
        Some(Commands::Tui { sample }) => run_tui(&settings, sample)?,
        Some(Commands::Report { json, entries }) => {
            logging::init_stderr(&settings);
            report::run(&entries, json)?;
        }
        None => run_tui(&settings, false)?,
    }
    Ok(())
}
