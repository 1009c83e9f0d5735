//! Useful constants to have

/// Unicode's degree symbol
pub const DEGREE_SYM: char = '\u{00b0}';

/// Minutes in an hour, seconds in a minute
pub const SEXAGESIMAL_BASE: f64 = 60.0;

/// Radius of the azimuthal-equidistant map disk, measured from its centre to the point
/// where the south pole lands.
pub const AE_MAP_RADIUS: f64 = 0.5;

/// The default factor applied to a flight's error before it is mapped to a colour.
pub const DEFAULT_COLOR_SCALE: f64 = 2.0;
