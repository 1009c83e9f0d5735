#![allow(clippy::excessive_precision)]

pub use serde;
pub use toml;

pub mod color;
pub mod constants;
pub mod error;
pub mod maths;
pub mod structs;
pub mod time;
pub mod utils;
