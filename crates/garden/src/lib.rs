//! Garden forage simulator library.
//!
//! This crate implements a deterministic garden-foraging simulation: a rabbit is
//! placed at the computed center of a rectangular carrot grid, eats the carrots
//! on its cell, hops to the richest adjacent cell, and falls asleep when a hop
//! lands outside the garden or on a cell with nothing to eat. It provides:
//! 1. **Garden:** Validated rectangular grid, clamped neighbor reads, center selection.
//! 2. **Simulation:** Turn-by-turn forage loop with a bit-exact tie-break order.
//! 3. **Path:** Hop log and arrow rendering for diagnostics.
//! 4. **Loading:** JSON garden matrices from files or strings.
//! 5. **Reporting:** Forage statistics collection and a printable summary.

/// Common types (directions, positions, construction errors).
pub mod common;
/// Simulator configuration (trace switches, JSON deserialization).
pub mod config;
/// Garden grid (validation, reads, center selection, snapshot rendering).
pub mod garden;
/// Forage simulation (run loop, phases, path log) and garden loading.
pub mod sim;
/// Forage statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Garden grid type; construct with `Garden::new`.
pub use crate::garden::Garden;
/// Top-level simulator; owns a garden, drives the forage loop.
pub use crate::sim::{Phase, Simulator};
