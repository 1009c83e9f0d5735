//! Errors which can happen while preparing or analyzing a batch of flights

use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed duration {input:?}")]
    MalformedDuration { input: String },
    #[error("duration {input:?} is not positive")]
    NonPositiveDuration { input: String },
    #[error("flight {flight} has no duration samples")]
    EmptySampleList { flight: String },
    #[error("cannot fit a scale factor to an empty batch")]
    EmptyBatch,
    #[error("every flight in the batch has zero distance")]
    DegenerateBatch,
    #[error("flight {flight} references unknown airport {code}")]
    UnknownAirportCode { code: String, flight: String },
    #[error("coordinate ({lat}, {lon}) is out of range")]
    InvalidCoordinate { lat: f64, lon: f64 },
    #[error("invalid dataset")]
    InvalidDataset(#[from] toml::de::Error),
}
