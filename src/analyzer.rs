//! Fit a single speed constant to a batch of flights and judge every flight against it

use std::fmt;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use common::color::{error_to_color, Rgb};
use common::constants::DEFAULT_COLOR_SCALE;
use common::error::{Error, Result};
use common::maths::mean;
use common::structs::Coordinate;
use common::utils::DisplayPercents;

use crate::metric::DistanceMetric;

/// A flight with all its observed durations
#[derive(Debug, Clone)]
pub struct Flight {
    name: String,
    route: Option<String>,
    durations: Vec<f64>,
    src: Coordinate,
    dst: Coordinate,
}

impl Flight {
    /// Durations are in hours. There must be at least one, and all of them must be positive.
    pub fn new(
        name: impl Into<String>,
        durations: Vec<f64>,
        src: Coordinate,
        dst: Coordinate,
    ) -> Result<Self> {
        let name = name.into();
        if durations.is_empty() {
            return Err(Error::EmptySampleList { flight: name });
        }
        if let Some(bad) = durations.iter().find(|t| !(**t > 0.0 && t.is_finite())) {
            return Err(Error::NonPositiveDuration {
                input: bad.to_string(),
            });
        }
        Ok(Self {
            name,
            route: None,
            durations,
            src,
            dst,
        })
    }

    /// Attach a route label, such as `GRU-DOH`, shown next to the name
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    pub fn src(&self) -> Coordinate {
        self.src
    }

    pub fn dst(&self) -> Coordinate {
        self.dst
    }

    pub fn average_duration(&self) -> f64 {
        mean(&self.durations)
    }
}

/// Distance per hour, fitted to a whole batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Fit the factor to `(average duration, distance)` pairs.
    pub fn fit(legs: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let (count, total_duration, total_distance) = legs.into_iter().fold(
            (0usize, 0.0, 0.0),
            |(count, total_duration, total_distance), (duration, distance)| {
                (count + 1, total_duration + duration, total_distance + distance)
            },
        );
        if count == 0 {
            return Err(Error::EmptyBatch);
        }
        if total_distance == 0.0 {
            return Err(Error::DegenerateBatch);
        }
        Ok(Self(total_distance / total_duration))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn predict(self, duration: f64) -> f64 {
        self.0 * duration
    }

    /// Signed fractional deviation of `distance` from the predicted one
    pub fn error(self, duration: f64, distance: f64) -> f64 {
        let prediction = self.predict(duration);
        (distance - prediction) / prediction
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Params {
    /// The error is multiplied by this before being turned into a colour
    pub color_scale: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            color_scale: DEFAULT_COLOR_SCALE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzedFlight<'a> {
    pub flight: &'a Flight,
    pub average_duration: f64,
    pub distance: f64,
    pub error: f64,
    pub color: Rgb,
}

impl AnalyzedFlight<'_> {
    /// The line which is shown for this flight
    pub fn report_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AnalyzedFlight<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " - {}", self.flight.name)?;
        if let Some(route) = &self.flight.route {
            write!(f, " ({route})")?;
        }
        write!(f, ": {} off", DisplayPercents(self.error))
    }
}

#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    pub scale: ScaleFactor,
    pub flights: Vec<AnalyzedFlight<'a>>,
}

/// Run the two pass fit over `flights`.
///
/// The first pass measures every flight, the scale factor is then fitted to the totals, and
/// only after that are the per-flight errors computed.
pub fn analyze<'a, M>(flights: &'a [Flight], metric: &M, params: Params) -> Result<Analysis<'a>>
where
    M: DistanceMetric + Sync + ?Sized,
{
    let legs: Vec<(f64, f64)> = flights
        .par_iter()
        .map(|flight| {
            let average = flight.average_duration();
            let distance = metric.distance(flight.src, flight.dst);
            (average, distance)
        })
        .collect();

    let scale = ScaleFactor::fit(legs.iter().copied())?;
    info!(scale = scale.get(), flights = flights.len(), "fitted scale factor");

    let flights = flights
        .iter()
        .zip(legs)
        .map(|(flight, (average_duration, distance))| {
            if distance == 0.0 {
                warn!(flight = %flight.name, "source and destination coincide");
            }
            let error = scale.error(average_duration, distance);
            debug!(
                flight = %flight.name,
                average_duration,
                distance,
                error,
                "analyzed flight"
            );
            AnalyzedFlight {
                flight,
                average_duration,
                distance,
                error,
                color: error_to_color(error * params.color_scale),
            }
        })
        .collect();

    Ok(Analysis { scale, flights })
}
