use rand::Rng;

use crate::physics::fallingsand::{
    elements::element::{cell_type_at, Element, ElementType},
    util::{grid::Grid, vectors::RowColVector},
};

/// Default solid element behavior
/// Returns the cell a grain at `pos` should move to this tick, if any
///   1. Straight down if below is empty
///   2. Otherwise one of the two diagonally-below cells, whichever is empty
///   3. If both diagonals are empty, flip a fair coin
/// Anything outside the grid counts as rock, so grains never leave it
pub fn solid_target<R: Rng>(
    grid: &Grid<Element>,
    pos: RowColVector,
    rng: &mut R,
) -> Option<RowColVector> {
    let below = pos.below();
    if cell_type_at(grid, below) == ElementType::None {
        return Some(below);
    }

    let is_free = |idx: &RowColVector| cell_type_at(grid, *idx) == ElementType::None;
    let left = pos.below_left().filter(is_free);
    let right = Some(pos.below_right()).filter(is_free);

    match (left, right) {
        (Some(left), Some(right)) => {
            if rng.gen_bool(0.5) {
                Some(left)
            } else {
                Some(right)
            }
        }
        (left, right) => left.or(right),
    }
}
