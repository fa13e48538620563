//! Helpers for preparing and inspecting data sets used in sorting benchmarks.

mod error;
pub mod generator;
pub mod printer;
pub mod stats;

pub use error::{Error, Result};
pub use generator::{generate_vec, generate_vec_seeded, GenMode};
pub use printer::{print, Truncated};
pub use stats::{stat, AsF64, StatResult};
