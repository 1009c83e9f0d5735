//! Parse flight durations written as `HH:MM` (or `HH:MM:SS`, and so on)

use crate::constants::SEXAGESIMAL_BASE;
use crate::error::{Error, Result};

/// Parse a colon separated duration into fractional hours.
///
/// The field at index `i` is worth `60^-i` hours, so `"1:30"` is `1.5` and `"0:00:30"` is
/// `1/120`.
pub fn parse_time(time: &str) -> Result<f64> {
    time.split(':')
        .enumerate()
        .map(|(i, field)| {
            let value: f64 = field.trim().parse().map_err(|_| Error::MalformedDuration {
                input: time.to_owned(),
            })?;
            if !value.is_finite() {
                return Err(Error::MalformedDuration {
                    input: time.to_owned(),
                });
            }
            Ok(value * SEXAGESIMAL_BASE.powi(-(i as i32)))
        })
        .sum()
}

/// Parse a block with one duration per line.
///
/// Surrounding whitespace and blank lines are ignored. An empty block is an error, the
/// `flight` is only used to name the culprit.
pub fn parse_time_list(block: &str, flight: &str) -> Result<Vec<f64>> {
    let times = block
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_time)
        .collect::<Result<Vec<_>>>()?;
    if times.is_empty() {
        return Err(Error::EmptySampleList {
            flight: flight.to_owned(),
        });
    }
    Ok(times)
}
