//! Forage statistics collection and reporting.
//!
//! This module tracks what a run consumed. It provides:
//! 1. **Counters:** Initial stock, carrots eaten, cells grazed, logged hops.
//! 2. **Reporting:** A bordered summary block with coverage percentages and
//!    host wall-clock time.

use std::time::Instant;

/// Counters describing one forage run.
///
/// Counters are public and updated by the simulator as the run progresses;
/// the derived figures (leftovers, percentages) are computed at print time.
#[derive(Clone, Debug)]
pub struct ForageStats {
    start_time: Instant,
    /// Carrots in the garden before the first meal.
    pub carrots_initial: u64,
    /// Cells in the garden.
    pub cells_total: u64,
    /// Carrots eaten so far.
    pub carrots_eaten: u64,
    /// Cells grazed to zero so far.
    pub cells_grazed: u64,
    /// Hops that reached another meal. The terminal hop onto a grazed or
    /// out-of-garden cell is not counted.
    pub hops: u64,
}

impl Default for ForageStats {
    /// Returns zeroed counters with the clock started now.
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl ForageStats {
    /// Creates counters for a garden holding `carrots_initial` carrots
    /// across `cells_total` cells.
    pub fn new(carrots_initial: u64, cells_total: u64) -> Self {
        Self {
            start_time: Instant::now(),
            carrots_initial,
            cells_total,
            carrots_eaten: 0,
            cells_grazed: 0,
            hops: 0,
        }
    }

    /// Prints the statistics block to stdout.
    ///
    /// Percentages divide by the initial stock and cell count clamped to at
    /// least 1, so an empty run reports 0.00% instead of NaN.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let initial = self.carrots_initial.max(1);
        let cells = self.cells_total.max(1);
        let eaten_pct = (self.carrots_eaten as f64 / initial as f64) * 100.0;
        let grazed_pct = (self.cells_grazed as f64 / cells as f64) * 100.0;

        println!("\n==========================================================");
        println!("GARDEN FORAGE STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("carrots_initial          {}", self.carrots_initial);
        println!(
            "carrots_eaten            {} ({:.2}%)",
            self.carrots_eaten, eaten_pct
        );
        println!(
            "carrots_left             {}",
            self.carrots_initial.saturating_sub(self.carrots_eaten)
        );
        println!("----------------------------------------------------------");
        println!("cells_total              {}", self.cells_total);
        println!(
            "cells_grazed             {} ({:.2}%)",
            self.cells_grazed, grazed_pct
        );
        println!("path_hops                {}", self.hops);
        println!("==========================================================");
    }
}
