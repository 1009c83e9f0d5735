//! Basic structures such as Vec3

mod coordinate;
pub use coordinate::Coordinate;

pub type Vec3 = nalgebra::Vector3<f64>;

pub type Vec2 = nalgebra::Vector2<f64>;
