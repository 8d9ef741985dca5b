//! Forage simulation and garden loading.
//!
//! Provides the turn-by-turn forage loop (the simulator proper) and
//! utilities for reading garden matrices from JSON files or strings.

/// Garden input from JSON descriptions.
pub mod loader;

mod simulator;

pub use simulator::{Phase, Simulator};
