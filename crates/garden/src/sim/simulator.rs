//! Simulator: owns the garden and the rabbit's cursor.
//!
//! One turn eats the carrots on the current cell and hops to the clamped
//! neighbor holding the most, scanning down, up, right, left so ties resolve
//! identically on every run. The rabbit falls asleep when the cursor rests
//! outside the garden or on a cell with nothing left to eat.

use crate::common::{Direction, Position};
use crate::config::Config;
use crate::garden::Garden;
use crate::stats::ForageStats;

/// Lifecycle of one forage run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Constructed; no turn has been taken yet.
    Unstarted,
    /// Mid-run: the previous turn hopped somewhere worth checking.
    Eating,
    /// Terminal: the cursor left the garden or reached a grazed cell.
    /// No transitions lead out of this phase.
    Asleep,
}

/// Top-level simulator: garden, cursor, and forage bookkeeping.
///
/// Each instance is independent and single-use: construct, run, read
/// results. Running again after the rabbit sleeps is a no-op returning the
/// same total.
///
/// # Examples
///
/// ```
/// use hopsim_core::{Config, Garden, Simulator};
///
/// let garden = Garden::new(vec![
///     vec![5, 7, 8, 6, 3],
///     vec![0, 0, 7, 0, 4],
///     vec![4, 6, 3, 4, 9],
///     vec![3, 1, 0, 5, 8],
/// ])
/// .unwrap();
/// let mut sim = Simulator::new(garden, &Config::default());
/// assert_eq!(sim.run(), 27);
/// assert_eq!(sim.path_string(), "C↑←←");
/// ```
#[derive(Debug)]
pub struct Simulator {
    garden: Garden,
    phase: Phase,
    /// Cursor. After the terminal hop this may rest one row below the last
    /// garden row; it is never negative in either coordinate.
    position: Position,
    start: Position,
    eaten: u64,
    /// Hops that reached another meal. The terminal hop stays out.
    hops: Vec<Direction>,
    stats: ForageStats,
    trace: bool,
}

impl Simulator {
    /// Creates a simulator owning `garden`, configured by `config`.
    ///
    /// The start cell is located here: the garden cannot change between
    /// construction and the first turn, so the result is identical to
    /// locating it lazily.
    pub fn new(garden: Garden, config: &Config) -> Self {
        let start = garden.center();
        let stats = ForageStats::new(
            garden.remaining_carrots(),
            (garden.rows() * garden.cols()) as u64,
        );
        tracing::debug!(
            rows = garden.rows(),
            cols = garden.cols(),
            start_row = start.row,
            start_col = start.col,
            "simulator ready"
        );
        Self {
            garden,
            phase: Phase::Unstarted,
            position: start,
            start,
            eaten: 0,
            hops: Vec::new(),
            stats,
            trace: config.trace_steps,
        }
    }

    /// Runs the forage to completion and returns the carrots eaten.
    ///
    /// Calling this on a sleeping simulator is a no-op: the garden stays
    /// untouched and the total stays what the first run reported.
    pub fn run(&mut self) -> u64 {
        while self.step() != Phase::Asleep {}
        self.eaten
    }

    /// Advances the simulation by one turn and returns the phase after it.
    ///
    /// A turn checks the cursor: on a positive in-bounds cell the rabbit
    /// eats it bare and hops toward the richest clamped neighbor; otherwise
    /// it falls asleep. Calling `step` on a sleeping simulator is a no-op.
    pub fn step(&mut self) -> Phase {
        match self.phase {
            Phase::Asleep => Phase::Asleep,
            Phase::Unstarted => {
                self.trace_intro();
                self.phase = Phase::Eating;
                self.turn()
            }
            Phase::Eating => self.turn(),
        }
    }

    /// Phase after the most recent turn.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The located start cell.
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Current cursor. May rest one row below the garden once asleep.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Carrots eaten so far.
    pub const fn carrots_eaten(&self) -> u64 {
        self.eaten
    }

    /// Hops that reached another meal, in order.
    pub fn hops(&self) -> &[Direction] {
        &self.hops
    }

    /// The path rendered as `C` followed by one arrow per logged hop.
    pub fn path_string(&self) -> String {
        let mut path = String::with_capacity(1 + self.hops.len() * 3);
        path.push('C');
        for dir in &self.hops {
            path.push(dir.arrow());
        }
        path
    }

    /// The garden in its current (possibly partly grazed) state.
    pub const fn garden(&self) -> &Garden {
        &self.garden
    }

    /// Forage statistics collected so far.
    pub const fn stats(&self) -> &ForageStats {
        &self.stats
    }

    /// One loop iteration: check the cursor, eat, hop.
    fn turn(&mut self) -> Phase {
        let pos = self.position;
        let Some(meal) = self.garden.take(pos).filter(|&count| count > 0) else {
            self.fall_asleep();
            return Phase::Asleep;
        };
        self.eaten += u64::from(meal);
        self.stats.carrots_eaten += u64::from(meal);
        self.stats.cells_grazed += 1;
        if self.trace {
            eprintln!("EAT {pos} carrots={meal} total={}", self.eaten);
        }

        let dir = self.choose_hop(pos);
        let next = pos.hop(dir);
        self.position = next;
        // Only a hop that reaches another meal belongs in the path log; the
        // terminal hop onto a grazed or out-of-garden cell is dropped.
        if self.garden.get(next).is_some_and(|count| count > 0) {
            self.hops.push(dir);
            self.stats.hops += 1;
        }
        if self.trace {
            eprintln!("HOP {} -> {next}", dir.name());
        }
        tracing::trace!(
            row = pos.row,
            col = pos.col,
            meal,
            dir = dir.name(),
            "turn"
        );
        Phase::Eating
    }

    /// Picks the hop: the first direction in scan order (down, up, right,
    /// left) whose clamped neighbor holds the richest count. With every
    /// neighbor at zero the scan keeps down, which is also how the rabbit
    /// eventually leaves a grazed garden through the bottom edge.
    fn choose_hop(&self, pos: Position) -> Direction {
        let mut best_dir = Direction::Down;
        let mut best = 0;
        for dir in Direction::SCAN_ORDER {
            let count = self.garden.neighbor_clamped(pos, dir);
            if count > best {
                best = count;
                best_dir = dir;
            }
        }
        best_dir
    }

    fn fall_asleep(&mut self) {
        self.phase = Phase::Asleep;
        if self.trace {
            eprintln!(
                "ZZZ total={} path={} left={}",
                self.eaten,
                self.path_string(),
                self.garden.remaining_carrots()
            );
        }
        tracing::debug!(total = self.eaten, hops = self.hops.len(), "asleep");
    }

    fn trace_intro(&self) {
        if !self.trace {
            return;
        }
        eprintln!(
            "SIM {}x{} garden, {} carrots",
            self.garden.rows(),
            self.garden.cols(),
            self.stats.carrots_initial
        );
        for line in self.garden.to_string().lines() {
            eprintln!("    {line}");
        }
        eprintln!(
            "SIM start={} carrots={}",
            self.start,
            self.garden.get(self.start).unwrap_or(0)
        );
    }
}
