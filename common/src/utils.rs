use std::fmt;

/// Displays a fraction as a percentage with one decimal, `0.1234` as `12.3%`
#[derive(Debug, Clone, Copy)]
pub struct DisplayPercents(pub f64);

impl fmt::Display for DisplayPercents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
