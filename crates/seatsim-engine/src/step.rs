//! One simultaneous round over the whole grid.
//!
//! # Simultaneity
//!
//! Every cell's next state is computed from the input grid alone. The
//! output is assembled by [`Grid::map`] into a separate buffer and only
//! becomes visible once the whole round is done, so no cell can observe a
//! neighbour's next state within the same round. The signature enforces
//! this: the input is borrowed shared and the output is a new value.

use seatsim_core::Cell;
use seatsim_grid::{Grid, NeighbourCounter};

use crate::rule::transition;

/// Apply one round of the seating rule to every cell of `grid`.
pub fn step<C>(grid: &Grid, counter: &C, threshold: usize) -> Grid
where
    C: NeighbourCounter + ?Sized,
{
    step_counted(grid, counter, threshold).0
}

/// [`step`], also returning how many cells changed state.
///
/// A change count of zero means the returned grid equals the input: a
/// fixed point.
pub fn step_counted<C>(grid: &Grid, counter: &C, threshold: usize) -> (Grid, usize)
where
    C: NeighbourCounter + ?Sized,
{
    let mut changed = 0;
    let next = grid.map(|r, c, cell| {
        // Floor is inert; skip the neighbour walk.
        if cell == Cell::Floor {
            return cell;
        }
        let occupied = counter.occupied_neighbours(grid, r, c);
        let next = transition(cell, occupied, threshold);
        if next != cell {
            changed += 1;
        }
        next
    });
    (next, changed)
}
