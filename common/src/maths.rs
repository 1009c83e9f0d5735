//! Some useful mathematical functions

use std::f64::consts::PI;

pub const fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Central angle (in radians) subtended by a chord of the unit sphere.
///
/// The chord can never be longer than the diameter, but rounding may push it slightly past 2
/// for antipodal points, so the ratio is clamped.
pub fn chord_to_angle(chord: f64) -> f64 {
    f64::asin((chord * 0.5).min(1.0)) * 2.0
}

/// Arithmetic mean. Returns NaN if slice is empty.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
