//! Foraging run unit tests.
//!
//! Drives complete walks over reference gardens with hand-checked outcomes:
//! where the rabbit wakes, what it eats, the path it hops, and where it
//! falls asleep.

use crate::common::harness::{challenge_matrix, simulator};
use hopsim_core::Phase;
use hopsim_core::common::Position;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ──────────────────────────────────────────────────────────
// Reference gardens
// ──────────────────────────────────────────────────────────

#[rstest]
#[case::challenge_garden(challenge_matrix(), (1, 2), 27, "C↑←←", (1, 0), 56)]
#[case::five_by_five(vec![
    vec![5, 7, 8, 6, 3],
    vec![0, 0, 7, 0, 4],
    vec![2, 5, 2, 3, 7],
    vec![4, 6, 3, 4, 9],
    vec![3, 1, 0, 5, 8],
], (2, 2), 29, "C↑↑←←", (1, 0), 73)]
#[case::two_by_four(vec![
    vec![5, 8, 9, 6],
    vec![0, 0, 7, 0],
], (0, 2), 22, "C←←", (1, 0), 13)]
#[case::single_cell(vec![vec![5]], (0, 0), 5, "C", (1, 0), 0)]
#[case::three_by_two(vec![
    vec![5, 7],
    vec![8, 6],
    vec![0, 0],
], (1, 0), 26, "C→↑←", (1, 0), 0)]
#[case::four_way_tie_hops_down(vec![
    vec![0, 9, 0],
    vec![9, 5, 9],
    vec![0, 9, 0],
], (1, 1), 14, "C↓", (3, 1), 27)]
#[case::snake_walk(vec![
    vec![1, 2, 3, 4],
    vec![8, 7, 6, 5],
    vec![9, 10, 11, 12],
], (1, 1), 58, "C↓→→↑←↑→", (1, 3), 20)]
#[case::asleep_on_a_bare_start(vec![
    vec![9, 0, 9],
    vec![0, 0, 0],
    vec![9, 0, 9],
], (1, 1), 0, "C", (1, 1), 36)]
#[case::nothing_to_eat(vec![
    vec![0, 0, 0],
    vec![0, 0, 0],
], (1, 1), 0, "C", (1, 1), 0)]
fn reference_walks(
    #[case] matrix: Vec<Vec<u32>>,
    #[case] start: (usize, usize),
    #[case] total: u64,
    #[case] path: &str,
    #[case] rest: (usize, usize),
    #[case] left: u64,
) {
    let mut sim = simulator(matrix);
    assert_eq!(sim.start(), Position::new(start.0, start.1));

    assert_eq!(sim.run(), total);

    assert_eq!(sim.phase(), Phase::Asleep);
    assert_eq!(sim.carrots_eaten(), total);
    assert_eq!(sim.path_string(), path);
    assert_eq!(sim.position(), Position::new(rest.0, rest.1));
    assert_eq!(sim.garden().remaining_carrots(), left);
}

// ──────────────────────────────────────────────────────────
// Step-by-step behavior
// ──────────────────────────────────────────────────────────

#[test]
fn phases_progress_through_the_walk() {
    let mut sim = simulator(vec![vec![5]]);
    assert_eq!(sim.phase(), Phase::Unstarted);

    // First step: eat the only carrot and hop off the bottom edge.
    assert_eq!(sim.step(), Phase::Eating);
    assert_eq!(sim.carrots_eaten(), 5);
    assert_eq!(sim.position(), Position::new(1, 0));

    // Second step: wake up outside the garden, fall asleep.
    assert_eq!(sim.step(), Phase::Asleep);
    assert_eq!(sim.step(), Phase::Asleep);
    assert_eq!(sim.carrots_eaten(), 5);
}

#[test]
fn grazing_zeroes_the_eaten_cells() {
    let mut sim = simulator(challenge_matrix());
    sim.run();

    for pos in [(1, 2), (0, 2), (0, 1), (0, 0)] {
        assert_eq!(sim.garden().get(Position::new(pos.0, pos.1)), Some(0));
    }
    // A cell the rabbit never visited keeps its carrots.
    assert_eq!(sim.garden().get(Position::new(3, 4)), Some(8));
}

#[test]
fn richer_cells_beat_scan_order() {
    // From (1,0) the down and left reads clamp to the freshly grazed start
    // cell, so the single carrot to the right wins the first hop.
    let mut sim = simulator(vec![
        vec![0, 6],
        vec![6, 1],
    ]);
    assert_eq!(sim.start(), Position::new(1, 0));
    assert_eq!(sim.run(), 13);
    assert_eq!(sim.path_string(), "C→↑");
}
