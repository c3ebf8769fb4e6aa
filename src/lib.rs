//! drawbias: population-based evolutionary search over number sets.
//!
//! Players carry floating-point genomes that reweight an external model's
//! per-number output into fixed-size selections; rounds against historical
//! draws feed a step reward curve, mid-cycle generational pressure and
//! champion-centered repopulation at cycle boundaries.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod model;
pub mod snapshot;

pub use error::{DrawbiasError, Result};
