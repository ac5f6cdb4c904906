//! The eight compass directions a seat can look in.

/// A unit step on the grid, cardinal or diagonal.
///
/// Offsets are `(d_row, d_col)`: north is towards row 0, west is towards
/// column 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up one row.
    N,
    /// Down one row.
    S,
    /// Right one column.
    E,
    /// Left one column.
    W,
    /// Up and right.
    NE,
    /// Up and left.
    NW,
    /// Down and right.
    SE,
    /// Down and left.
    SW,
}

impl Direction {
    /// All 8 directions: N, S, W, E, NW, NE, SW, SE.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::W,
        Direction::E,
        Direction::NW,
        Direction::NE,
        Direction::SW,
        Direction::SE,
    ];

    /// Unit offset `(d_row, d_col)`. Never `(0, 0)`.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::N => (-1, 0),
            Direction::S => (1, 0),
            Direction::W => (0, -1),
            Direction::E => (0, 1),
            Direction::NW => (-1, -1),
            Direction::NE => (-1, 1),
            Direction::SW => (1, -1),
            Direction::SE => (1, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::W => Direction::E,
            Direction::E => Direction::W,
            Direction::NW => Direction::SE,
            Direction::NE => Direction::SW,
            Direction::SW => Direction::NE,
            Direction::SE => Direction::NW,
        }
    }
}
