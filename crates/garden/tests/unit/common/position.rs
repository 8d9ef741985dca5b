//! Grid position unit tests.
//!
//! Verifies hop arithmetic in all four directions, including the saturating
//! edges: hopping up from the top row or left from the first column keeps
//! the rabbit in place rather than wrapping.

use hopsim_core::common::{Direction, Position};

#[test]
fn new_stores_coordinates() {
    let pos = Position::new(2, 7);
    assert_eq!(pos.row, 2);
    assert_eq!(pos.col, 7);
}

#[test]
fn hops_from_an_interior_cell() {
    let pos = Position::new(3, 4);
    assert_eq!(pos.hop(Direction::Down), Position::new(4, 4));
    assert_eq!(pos.hop(Direction::Up), Position::new(2, 4));
    assert_eq!(pos.hop(Direction::Right), Position::new(3, 5));
    assert_eq!(pos.hop(Direction::Left), Position::new(3, 3));
}

#[test]
fn hop_up_saturates_at_the_top_row() {
    let pos = Position::new(0, 2);
    assert_eq!(pos.hop(Direction::Up), Position::new(0, 2));
}

#[test]
fn hop_left_saturates_at_the_first_column() {
    let pos = Position::new(2, 0);
    assert_eq!(pos.hop(Direction::Left), Position::new(2, 0));
}

#[test]
fn hop_down_can_leave_the_grid() {
    // The terminal hop lands one row below the bottom edge; nothing in
    // the coordinate type itself clamps it.
    let pos = Position::new(9, 0);
    assert_eq!(pos.hop(Direction::Down), Position::new(10, 0));
}

#[test]
fn display_is_a_coordinate_pair() {
    assert_eq!(Position::new(1, 2).to_string(), "(1,2)");
    assert_eq!(Position::new(0, 0).to_string(), "(0,0)");
}
