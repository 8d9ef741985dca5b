//! Configuration for the forage simulator.
//!
//! This module defines the configuration structure used to parameterize a
//! simulation run. It provides:
//! 1. **Trace switch:** Per-turn narration to stderr for watching a forage live.
//! 2. **Deserialization:** JSON config files via serde, with defaults for
//!    every field so an empty object is a valid configuration.
//!
//! Configuration is supplied as JSON (CLI `--config` file) or built with
//! `Config::default()` and adjusted in code.

use serde::Deserialize;

/// Simulation configuration.
///
/// Every field has a default, so any subset may be given in JSON.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use hopsim_core::Config;
///
/// let config = Config::default();
/// assert!(!config.trace_steps);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use hopsim_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{"trace_steps": true}"#).unwrap();
/// assert!(config.trace_steps);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Narrate each turn to stderr: garden snapshot, chosen start, every meal
    /// and hop, and a final summary. Output only; results are unaffected.
    #[serde(default)]
    pub trace_steps: bool,
}
