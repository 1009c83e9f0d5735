//! Map a fractional error to a display colour

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Positive errors fade from white towards blue, negative ones from white towards red.
///
/// Both branches agree at `error == 0`, which is pure white.
pub fn error_to_color(error: f64) -> Rgb {
    if error >= 0.0 {
        let alpha = channel((1.0 - error) * 255.0);
        Rgb(alpha, alpha, 255)
    } else {
        let inv = 1.0 / (error + 1.0) - 1.0;
        let alpha = channel((1.0 - inv) * 255.0);
        Rgb(255, alpha, alpha)
    }
}

/// Truncate towards zero and saturate to `[0, 255]`. NaN becomes 0.
fn channel(value: f64) -> u8 {
    value.trunc().clamp(0.0, 255.0) as u8
}
