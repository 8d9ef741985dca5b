//! Common types used throughout the forage simulator.
//!
//! This module provides the fundamental building blocks shared across the
//! crate. It includes:
//! 1. **Directions:** The four hop directions and their fixed evaluation order.
//! 2. **Positions:** Zero-indexed cell coordinates and hop arithmetic.
//! 3. **Error Handling:** Garden construction errors.

/// Hop direction definitions and the movement scan order.
pub mod direction;

/// Garden construction error types.
pub mod error;

/// Cell coordinate type and hop arithmetic.
pub mod position;

pub use direction::Direction;
pub use error::GardenError;
pub use position::Position;
