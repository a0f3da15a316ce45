mod config;
mod consts;
mod data;
mod error;
mod generate;
mod gui;
mod loader;
mod plot;

use crate::{config::Config, plot::PolarPlot};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering::*},
        Arc,
    },
};
use tracing::{debug, info};

/// Plots a LIDAR scan CSV (angle in degrees, distance) as a polar scatter.
#[derive(Parser)]
#[clap(args_conflicts_with_subcommands = true)]
struct Opts {
    /// Scan file. The first line is a header and is skipped. A file named
    /// `generate` must be given as `./generate`.
    pub csv_path: Option<PathBuf>,
    /// JSON5 file overriding the plot style.
    #[clap(long)]
    pub config: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write a synthetic scan to a CSV file.
    Generate {
        #[clap(short, long, default_value = "scan_data.csv")]
        output: PathBuf,
        /// Seed for reproducible output.
        #[clap(long)]
        seed: Option<u64>,
    },
}

enum Action {
    Usage,
    Plot {
        csv_path: PathBuf,
        config: Option<PathBuf>,
    },
    Generate {
        output: PathBuf,
        seed: Option<u64>,
    },
}

impl Opts {
    fn into_action(self) -> Action {
        match (self.command, self.csv_path) {
            (Some(Command::Generate { output, seed }), _) => Action::Generate { output, seed },
            (None, Some(csv_path)) => Action::Plot {
                csv_path,
                config: self.config,
            },
            (None, None) => Action::Usage,
        }
    }
}

fn main() -> Result<()> {
    // Enable logging
    tracing_subscriber::fmt::init();

    // Parse command line arguments
    let opts = Opts::parse();

    match opts.into_action() {
        Action::Usage => {
            println!("{}", Opts::command().render_usage());
            Ok(())
        }
        Action::Plot { csv_path, config } => plot_scan(csv_path, config),
        Action::Generate { output, seed } => generate_scan(output, seed),
    }
}

fn plot_scan(csv_path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let samples = loader::load_scan(&csv_path)?;
    info!("Loaded {} samples from '{}'", samples.len(), csv_path.display());

    let plot = PolarPlot::new(&samples, &config.plot)
        .with_context(|| format!("cannot plot '{}'", csv_path.display()))?;
    debug!("Radial axis spans 0..{}", plot.radial_max);

    // Close the window on Ctrl-C
    let is_terminated = Arc::new(AtomicBool::new(false));
    {
        let is_terminated = is_terminated.clone();
        ctrlc::set_handler(move || is_terminated.store(true, SeqCst))?;
    }

    gui::run_gui(plot, &config.plot, is_terminated)
}

fn generate_scan(output: PathBuf, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scan = generate::synthetic_scan(&mut rng);
    generate::export_scan(&scan, &output)?;
    info!("Wrote {} samples to '{}'", scan.len(), output.display());
    Ok(())
}
