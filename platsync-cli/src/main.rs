//! platsync command-line driver
//!
//! Pushes residence points from a sketch drawing into the shared master
//! store, and pulls a section's points back out, with the picks supplied
//! as a JSON job file.
//!
//! Usage:
//!   platsync --store /srv/plats/master.json push --job job.json
//!   platsync --store /srv/plats/master.json pull --job job.json --out placed.json

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use platsync_cli::{load_config, JobFile, JsonPlacement};
use platsync_sync::SyncOrchestrator;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "platsync")]
#[command(about = "Sync residence points between sketch drawings and the master store")]
struct Args {
    /// Master store path (overrides config file and PLATSYNC_STORE)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an empty master store if none exists
    Init,
    /// Show the store path and how many points it holds
    Inspect,
    /// Map local points into the true frame and append them to the master
    Push {
        /// Job file with section, reference edges and points
        #[arg(short, long)]
        job: PathBuf,
    },
    /// Map the section's master points into the sketch frame
    Pull {
        /// Job file with section and reference edges
        #[arg(short, long)]
        job: PathBuf,
        /// Write placed points here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = load_config(args.config.as_deref(), args.store)?;
    let tolerances = config.tolerances;
    let orchestrator = SyncOrchestrator::new(config);
    let store = orchestrator.store();

    match args.command {
        Command::Init => {
            if store.ensure_exists().context("Failed to create master store")? {
                info!("Created master store at {}", store.path().display());
            } else {
                info!("Master store already exists at {}", store.path().display());
            }
        }
        Command::Inspect => match store.count().context("Failed to read master store")? {
            Some(count) => println!("{}: {count} point(s)", store.path().display()),
            None => println!("{}: no master store", store.path().display()),
        },
        Command::Push { job } => {
            let (mut references, mut points) = JobFile::load(&job)?.into_ports(tolerances.length);
            let report = orchestrator
                .run_push(&mut references, &mut points)
                .context("Push failed")?;
            println!("{report}");
        }
        Command::Pull { job, out } => {
            let (mut references, _) = JobFile::load(&job)?.into_ports(tolerances.length);
            let mut placement = JsonPlacement::new(out);
            let report = orchestrator
                .run_pull(&mut references, &mut placement)
                .context("Pull failed")?;
            info!("{report}");
        }
    }

    Ok(())
}
