//! Garden input from JSON descriptions.
//!
//! A garden file is a bare JSON matrix of non-negative carrot counts, e.g.
//! `[[5, 7, 8], [0, 0, 7]]`. Negative numbers, fractions, and non-array
//! payloads are rejected at parse time; shape problems (no cells, ragged
//! rows) are rejected by garden validation.

use std::fs;

use thiserror::Error;

use crate::common::GardenError;
use crate::garden::Garden;

/// Errors raised when reading a garden description.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("could not read garden file: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a JSON matrix of non-negative integers.
    #[error("could not parse garden JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The matrix parsed but does not describe a valid garden.
    #[error(transparent)]
    Invalid(#[from] GardenError),
}

/// Reads a garden matrix from a JSON file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read,
/// [`LoadError::Json`] on malformed JSON, and [`LoadError::Invalid`] when
/// the matrix fails garden validation.
pub fn from_file(path: &str) -> Result<Garden, LoadError> {
    let text = fs::read_to_string(path)?;
    from_json(&text)
}

/// Parses a garden matrix from a JSON string.
///
/// # Errors
///
/// Returns [`LoadError::Json`] on malformed JSON and [`LoadError::Invalid`]
/// when the matrix fails garden validation.
pub fn from_json(text: &str) -> Result<Garden, LoadError> {
    let matrix: Vec<Vec<u32>> = serde_json::from_str(text)?;
    Ok(Garden::new(matrix)?)
}
