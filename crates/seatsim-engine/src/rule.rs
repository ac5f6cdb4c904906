//! The per-cell seating rule.

use seatsim_core::Cell;

/// Next state of `cell` given how many occupied seats it sees.
///
/// - empty with nothing occupied in view becomes occupied
/// - occupied with at least `threshold` occupied in view becomes empty
/// - anything else, floor included, is unchanged
#[inline]
pub fn transition(cell: Cell, occupied: usize, threshold: usize) -> Cell {
    match cell {
        Cell::Empty if occupied == 0 => Cell::Occupied,
        Cell::Occupied if occupied >= threshold => Cell::Empty,
        other => other,
    }
}

/// [`transition`] with its vacate threshold bound.
///
/// Threshold 4 pairs with adjacent visibility, 5 with line of sight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionRule {
    threshold: usize,
}

impl TransitionRule {
    /// A rule that vacates occupied seats seeing `threshold` or more
    /// occupied neighbours.
    pub const fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// The vacate threshold.
    pub const fn threshold(self) -> usize {
        self.threshold
    }

    /// Apply the rule to one cell.
    #[inline]
    pub fn apply(self, cell: Cell, occupied: usize) -> Cell {
        transition(cell, occupied, self.threshold)
    }
}
