//! Estimate the cruise speed implied by observed flight durations.
//!
//! Run:
//! ```bash
//! $ cruise-fit -h
//! ```
//! to see which parameters can be tweaked.

mod params;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cruise_fit::analyzer::{self, analyze};
use cruise_fit::dataset::RawDataset;
use cruise_fit::report::{ConsoleReporter, Reporter};

use params::Params;

fn main() {
    let params = Params::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(params.log_level())
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {e}");
    }

    if params.no_color {
        yansi::Paint::disable();
    }

    if let Err(e) = run(&params) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(params: &Params) -> Result<()> {
    let flights = RawDataset::builtin()
        .context("could not load the built-in dataset")?
        .resolve()
        .context("could not resolve flights")?;
    info!(flights = flights.len(), "dataset loaded");

    let analyzer_params = analyzer::Params {
        color_scale: params.color_scale,
    };

    let mut reporter = ConsoleReporter::stdout();
    for &metric in params.metric.metrics() {
        let analysis = analyze(&flights, &metric, analyzer_params)
            .with_context(|| format!("could not analyze flights with the {metric} model"))?;
        reporter
            .analysis(metric.name(), &analysis)
            .context("could not write the report")?;
    }

    Ok(())
}
