//! This program estimates the cruise speed implied by observed flight durations.
//!
//! Every flight's distance is measured with one of two models: the central angle on a unit
//! sphere, or the straight line on a disk map centered at the north pole. A single speed
//! constant (total distance over total duration) is then fitted to the whole batch and each
//! flight is judged by how far its distance deviates from the one the constant predicts.

pub mod analyzer;
pub mod dataset;
pub mod metric;
pub mod report;

pub use common;
