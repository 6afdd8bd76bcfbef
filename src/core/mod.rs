//! Core support types: game outcomes and deterministic RNG.
//!
//! Everything here is independent of the learning algorithm; the training
//! modules build on these plus the `chess` crate's rules engine.

pub mod outcome;
pub mod rng;

pub use outcome::Outcome;
pub use rng::TrainRng;
