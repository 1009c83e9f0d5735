//! The two distance models

use std::fmt;

use common::maths::chord_to_angle;
use common::structs::Coordinate;

/// A pure, symmetric, non-negative distance between two points on Earth
pub trait DistanceMetric {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64;
}

impl<F> DistanceMetric for F
where
    F: Fn(Coordinate, Coordinate) -> f64,
{
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        self(a, b)
    }
}

/// Central angle between `a` and `b`, in radians, computed from their chord on the unit
/// sphere. Always in `[0, PI]`.
pub fn sphere_distance(a: Coordinate, b: Coordinate) -> f64 {
    let chord = (b.to_unit_sphere() - a.to_unit_sphere()).norm();
    chord_to_angle(chord)
}

/// Straight line distance between `a` and `b` on the north pole centered disk map.
pub fn map_distance(a: Coordinate, b: Coordinate) -> f64 {
    (b.to_ae_map() - a.to_ae_map()).norm()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Sphere,
    AeMap,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Sphere, Metric::AeMap];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Sphere => "Sphere",
            Metric::AeMap => "AE Map",
        }
    }
}

impl DistanceMetric for Metric {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            Metric::Sphere => sphere_distance(a, b),
            Metric::AeMap => map_distance(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
