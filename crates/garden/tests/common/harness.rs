//! Test harness: logging bootstrap and fixture builders.

use hopsim_core::{Config, Garden, Simulator};

/// Initializes tracing output for a test process.
///
/// Safe to call from every test; only the first call installs the
/// subscriber and later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a garden from a literal matrix, panicking on invalid fixtures.
pub fn garden(matrix: Vec<Vec<u32>>) -> Garden {
    Garden::new(matrix).unwrap()
}

/// Builds a simulator over `matrix` with tracing hooked up and step
/// narration off.
pub fn simulator(matrix: Vec<Vec<u32>>) -> Simulator {
    init_logging();
    Simulator::new(garden(matrix), &Config::default())
}

/// Builds a simulator over `matrix` with per-turn stderr narration on.
pub fn loud_simulator(matrix: Vec<Vec<u32>>) -> Simulator {
    init_logging();
    let config = Config { trace_steps: true };
    Simulator::new(garden(matrix), &config)
}

/// The 4x5 garden from the original foraging challenge.
///
/// The rabbit wakes at (1,2), eats 27 carrots along `C↑←←`, and falls
/// asleep on the zeroed cell at (1,0).
pub fn challenge_matrix() -> Vec<Vec<u32>> {
    vec![
        vec![5, 7, 8, 6, 3],
        vec![0, 0, 7, 0, 4],
        vec![4, 6, 3, 4, 9],
        vec![3, 1, 0, 5, 8],
    ]
}
