use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Vec2, Vec3};
use crate::constants::{AE_MAP_RADIUS, DEGREE_SYM};
use crate::error::{Error, Result};
use crate::maths::to_radians;

/// A point on the surface of the Earth. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
            Ok(Self { lat, lon })
        } else {
            Err(Error::InvalidCoordinate { lat, lon })
        }
    }

    pub fn lat(self) -> f64 {
        self.lat
    }

    pub fn lon(self) -> f64 {
        self.lon
    }

    /// Embed into the unit sphere.
    ///
    /// Note the axes: `y` points to the north pole and `z` to `(0, 0)`. Only chord lengths
    /// are ever used, so the orientation does not matter.
    pub fn to_unit_sphere(self) -> Vec3 {
        let (sin_lat, cos_lat) = to_radians(self.lat).sin_cos();
        let (sin_lon, cos_lon) = to_radians(self.lon).sin_cos();
        Vec3::new(sin_lon * cos_lat, sin_lat, cos_lon * cos_lat)
    }

    /// Project onto a disk map centered at the north pole.
    ///
    /// The distance from the centre grows linearly with the colatitude, reaching
    /// `AE_MAP_RADIUS` at the south pole. The map centre is at `(0.5, 0.5)`.
    pub fn to_ae_map(self) -> Vec2 {
        let r = (90.0 - self.lat) / 360.0;
        let (sin_lon, cos_lon) = to_radians(self.lon).sin_cos();
        Vec2::new(AE_MAP_RADIUS + sin_lon * r, AE_MAP_RADIUS + cos_lon * r)
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = Error;

    fn try_from([lat, lon]: [f64; 2]) -> Result<Self> {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lon]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.lat >= 0. { 'N' } else { 'S' };
        let lon_dir = if self.lon >= 0. { 'E' } else { 'W' };
        write!(
            f,
            "({:.2}{}{}, {:.2}{}{})",
            self.lat.abs(),
            DEGREE_SYM,
            lat_dir,
            self.lon.abs(),
            DEGREE_SYM,
            lon_dir,
        )
    }
}
