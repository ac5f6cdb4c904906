//! Error types for grid construction and cell access.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or coordinate access.
///
/// Every variant except [`OutOfRange`](Self::OutOfRange) describes a
/// malformed layout and is reported once, at construction time.
/// `OutOfRange` only comes from an explicit `Grid::get` on a bad coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The layout has no rows, or its rows have no columns.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A character outside `{'.', 'L', '#'}`.
    InvalidSymbol {
        /// Zero-based row of the symbol.
        row: usize,
        /// Zero-based column of the symbol.
        col: usize,
        /// The rejected character.
        symbol: char,
    },
    /// A flat cell buffer does not hold `rows * cols` cells.
    CellCountMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied buffer.
        found: usize,
    },
    /// A coordinate is outside the grid.
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
}

impl GridError {
    /// `true` for every construction-time failure (a malformed layout).
    pub fn is_malformed(&self) -> bool {
        !matches!(self, Self::OutOfRange { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "malformed grid: layout must have at least one row and column"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidSymbol { row, col, symbol } => write!(
                f,
                "malformed grid: invalid symbol {symbol:?} at row {row}, column {col}"
            ),
            Self::CellCountMismatch { expected, found } => write!(
                f,
                "malformed grid: expected {expected} cells, got {found}"
            ),
            Self::OutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "coordinate ({row}, {col}) out of range: [0, {rows}) x [0, {cols})"
            ),
        }
    }
}

impl Error for GridError {}
