//! Use clap crate to parse command line arguments

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use common::constants::DEFAULT_COLOR_SCALE;
use cruise_fit::metric::Metric;

/// Which distance models to fit
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricChoice {
    Sphere,
    AeMap,
    Both,
}

impl MetricChoice {
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            MetricChoice::Sphere => &[Metric::Sphere],
            MetricChoice::AeMap => &[Metric::AeMap],
            MetricChoice::Both => &Metric::ALL,
        }
    }
}

/// Estimate the cruise speed implied by observed flight durations and show how far each
/// flight is off
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Params {
    /// The distance model(s) to fit
    #[arg(long, value_enum, default_value_t = MetricChoice::Both)]
    pub metric: MetricChoice,

    /// The error is multiplied by this before being mapped to a colour
    #[arg(long, default_value_t = DEFAULT_COLOR_SCALE, value_parser = parse_color_scale)]
    pub color_scale: f64,

    /// Do not colour the output
    #[arg(long)]
    pub no_color: bool,

    /// Log more (may be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Params {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn parse_color_scale(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err("must be a finite number".to_owned())
    }
}
