//! The built-in airports and flights.
//!
//! Flights name their endpoints by airport code; codes are resolved to coordinates here, once,
//! before any analysis runs.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use common::error::{Error, Result};
use common::structs::Coordinate;
use common::time::parse_time_list;

use crate::analyzer::Flight;

const BUILTIN: &str = include_str!("../data/flights.toml");

/// A flight as it is written in the dataset
#[derive(Deserialize, Debug, Clone)]
pub struct RawFlight {
    pub name: String,
    pub src: String,
    pub dst: String,
    /// One `HH:MM` duration per line
    pub times: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawDataset {
    pub airports: BTreeMap<String, Coordinate>,
    #[serde(default)]
    pub flight: Vec<RawFlight>,
}

impl RawDataset {
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn airport(&self, code: &str, flight: &str) -> Result<Coordinate> {
        self.airports
            .get(code)
            .copied()
            .ok_or_else(|| Error::UnknownAirportCode {
                code: code.to_owned(),
                flight: flight.to_owned(),
            })
    }

    /// Parse durations and look up both endpoints of every flight.
    ///
    /// Fails on the first flight which cannot be resolved; a partial batch is useless since
    /// the fit is shared by all of its flights.
    pub fn resolve(&self) -> Result<Vec<Flight>> {
        self.flight
            .iter()
            .map(|raw| {
                let src = self.airport(&raw.src, &raw.name)?;
                let dst = self.airport(&raw.dst, &raw.name)?;
                let times = parse_time_list(&raw.times, &raw.name)?;
                debug!(flight = %raw.name, %src, %dst, samples = times.len(), "resolved flight");
                Ok(Flight::new(raw.name.clone(), times, src, dst)?
                    .with_route(format!("{}-{}", raw.src, raw.dst)))
            })
            .collect()
    }
}
