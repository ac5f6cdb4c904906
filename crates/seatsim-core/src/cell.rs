//! Per-cell seat state.

use std::fmt;

/// State of a single grid position.
///
/// `Floor` is inert: no rule ever turns it into a seat, and no seat ever
/// becomes floor. `Empty` and `Occupied` are the two seat states the
/// transition rule moves between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Floor (`.`). Never changes.
    Floor,
    /// An empty seat (`L`).
    Empty,
    /// An occupied seat (`#`).
    Occupied,
}

impl Cell {
    /// Map a layout symbol to its cell state.
    ///
    /// Returns `None` for anything outside `{'.', 'L', '#'}`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Floor),
            'L' => Some(Self::Empty),
            '#' => Some(Self::Occupied),
            _ => None,
        }
    }

    /// The layout symbol for this state.
    pub fn symbol(self) -> char {
        match self {
            Self::Floor => '.',
            Self::Empty => 'L',
            Self::Occupied => '#',
        }
    }

    /// `true` for `Empty` and `Occupied`.
    pub fn is_seat(self) -> bool {
        !matches!(self, Self::Floor)
    }

    /// `true` only for `Occupied`.
    pub fn is_occupied(self) -> bool {
        matches!(self, Self::Occupied)
    }
}

impl TryFrom<char> for Cell {
    /// The rejected symbol.
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(symbol)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
