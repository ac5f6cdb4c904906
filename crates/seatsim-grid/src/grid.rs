//! The immutable seat-layout grid.

use seatsim_core::{Cell, Direction, GridError};
use std::fmt;
use std::str::FromStr;

/// A rectangular seat layout, fixed at construction.
///
/// Cells are stored row-major. There is no `&mut` API: every simulation
/// round builds a fresh `Grid` (see [`Grid::from_fn`]), so a grid being
/// read as the current round can never be written by the next one.
///
/// Equality is structural: same dimensions, same state at every
/// coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from layout rows over `{'.', 'L', '#'}`.
    ///
    /// Returns [`GridError::Empty`] for no rows or zero-width rows,
    /// [`GridError::RaggedRow`] if any row length differs from the first,
    /// and [`GridError::InvalidSymbol`] for any other character.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut cols = 0;
        let mut row_count = 0;
        for (r, line) in rows.into_iter().enumerate() {
            let start = cells.len();
            for (c, symbol) in line.as_ref().chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(GridError::InvalidSymbol {
                    row: r,
                    col: c,
                    symbol,
                })?;
                cells.push(cell);
            }
            let width = cells.len() - start;
            if r == 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::RaggedRow {
                    row: r,
                    expected: cols,
                    found: width,
                });
            }
            row_count += 1;
        }
        if row_count == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Parse a whole layout text.
    ///
    /// Lines may end in `\n` or `\r\n`; trailing blank lines are ignored so
    /// a file with a final newline parses.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Self::from_rows(lines)
    }

    /// Build a grid from a row-major cell buffer.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::CellCountMismatch {
                expected: usize::MAX,
                found: cells.len(),
            })?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a `rows * cols` grid by evaluating `f(row, col)` for every cell
    /// in row-major order.
    ///
    /// Returns [`GridError::Empty`] if either dimension is zero.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> Cell,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(f(r, c));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// A new grid of the same shape whose cell at `(row, col)` is
    /// `f(row, col, self[row, col])`.
    ///
    /// `self` is only borrowed, so `f` may freely read it: every output
    /// cell is computed from this grid, never from the one being built.
    pub fn map(&self, mut f: impl FnMut(usize, usize, Cell) -> Cell) -> Grid {
        let cells = self
            .cells()
            .map(|((r, c), cell)| f(r, c, cell))
            .collect();
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// State at `(row, col)`, or [`GridError::OutOfRange`].
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.cell(row, col).ok_or(GridError::OutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// State at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// The coordinate `distance` steps from `(row, col)` in `direction`,
    /// if it lies inside the grid.
    #[inline]
    pub fn neighbour(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
        distance: usize,
    ) -> Option<(usize, usize)> {
        let distance = isize::try_from(distance).ok()?;
        let (dr, dc) = direction.offset();
        let r = row.checked_add_signed(dr.checked_mul(distance)?)?;
        let c = col.checked_add_signed(dc.checked_mul(distance)?)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Number of occupied seats.
    pub fn occupied_count(&self) -> usize {
        self.count(Cell::Occupied)
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / cols, i % cols), cell))
    }

    /// Number of coordinates whose state differs from `other`.
    ///
    /// If the dimensions differ, every cell of `self` counts as changed.
    pub fn diff_count(&self, other: &Grid) -> usize {
        if self.dimensions() != other.dimensions() {
            return self.len();
        }
        self.cells
            .iter()
            .zip(&other.cells)
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn from_rows_maps_symbols() {
        let g = Grid::from_rows(["L.#", "#L."]).unwrap();
        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(g.get(0, 0), Ok(Cell::Empty));
        assert_eq!(g.get(0, 1), Ok(Cell::Floor));
        assert_eq!(g.get(0, 2), Ok(Cell::Occupied));
        assert_eq!(g.get(1, 0), Ok(Cell::Occupied));
    }

    #[test]
    fn empty_input_is_malformed() {
        let rows: [&str; 0] = [];
        assert_eq!(Grid::from_rows(rows), Err(GridError::Empty));
        assert_eq!(Grid::from_rows([""]), Err(GridError::Empty));
        assert_eq!(Grid::parse("\n\n"), Err(GridError::Empty));
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let err = Grid::from_rows(["LL", "LL", "L"]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            }
        );
        assert!(err.is_malformed());
    }

    #[test]
    fn unknown_symbol_is_malformed() {
        assert_eq!(
            Grid::from_rows(["L.L", "L?L"]),
            Err(GridError::InvalidSymbol {
                row: 1,
                col: 1,
                symbol: '?'
            })
        );
    }

    #[test]
    fn parse_ignores_trailing_newlines_and_crlf() {
        let g = Grid::parse("L.\r\n#L\r\n\n").unwrap();
        assert_eq!(g.dimensions(), (2, 2));
        assert_eq!(g.to_string(), "L.\n#L");
    }

    #[test]
    fn parse_rejects_interior_blank_line() {
        assert!(matches!(
            Grid::parse("LL\n\nLL"),
            Err(GridError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn from_cells_checks_length() {
        assert_eq!(
            Grid::from_cells(2, 2, vec![Cell::Empty; 3]),
            Err(GridError::CellCountMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(Grid::from_cells(0, 2, vec![]), Err(GridError::Empty));
        let g = Grid::from_cells(1, 2, vec![Cell::Floor, Cell::Occupied]).unwrap();
        assert_eq!(g.to_string(), ".#");
    }

    #[test]
    fn from_fn_is_row_major() {
        let g = Grid::from_fn(2, 3, |r, c| if r == c { Cell::Occupied } else { Cell::Empty })
            .unwrap();
        assert_eq!(g.to_string(), "#LL\nL#L");
        assert_eq!(Grid::from_fn(3, 0, |_, _| Cell::Floor), Err(GridError::Empty));
    }

    #[test]
    fn map_reads_source_grid() {
        let g = Grid::parse("L#L").unwrap();
        // Each output cell copies its west neighbour from the source; a
        // write-through implementation would smear the first cell.
        let shifted = g.map(|r, c, cell| {
            if c == 0 {
                cell
            } else {
                g.get(r, c - 1).unwrap()
            }
        });
        assert_eq!(shifted.to_string(), "LL#");
        assert_eq!(g.to_string(), "L#L");
    }

    // ── Access ──────────────────────────────────────────────────

    #[test]
    fn get_out_of_range() {
        let g = Grid::parse("LL\nLL").unwrap();
        assert_eq!(
            g.get(2, 0),
            Err(GridError::OutOfRange {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
        assert!(g.get(0, 2).is_err());
        assert_eq!(g.cell(1, 1), Some(Cell::Empty));
        assert_eq!(g.cell(1, 2), None);
    }

    #[test]
    fn neighbour_respects_bounds() {
        let g = Grid::parse("...\n...\n...").unwrap();
        assert_eq!(g.neighbour(0, 0, Direction::N, 1), None);
        assert_eq!(g.neighbour(0, 0, Direction::W, 1), None);
        assert_eq!(g.neighbour(0, 0, Direction::SE, 1), Some((1, 1)));
        assert_eq!(g.neighbour(0, 0, Direction::SE, 2), Some((2, 2)));
        assert_eq!(g.neighbour(0, 0, Direction::SE, 3), None);
        assert_eq!(g.neighbour(2, 0, Direction::NE, 2), Some((0, 2)));
        assert_eq!(g.neighbour(1, 1, Direction::E, usize::MAX), None);
    }

    #[test]
    fn counts_and_iteration() {
        let g = Grid::parse("#.L\nL##").unwrap();
        assert_eq!(g.occupied_count(), 3);
        assert_eq!(g.count(Cell::Empty), 2);
        assert_eq!(g.count(Cell::Floor), 1);
        let coords: Vec<(usize, usize)> = g.cells().map(|(rc, _)| rc).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn diff_count_and_equality() {
        let a = Grid::parse("#.L\nL##").unwrap();
        let b = Grid::parse("#.#\nL#L").unwrap();
        assert_eq!(a.diff_count(&a), 0);
        assert_eq!(a.diff_count(&b), 2);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        let c = Grid::parse("#.\nL#").unwrap();
        assert_eq!(a.diff_count(&c), 6);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_rows() -> impl Strategy<Value = Vec<String>> {
        (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(
                prop::collection::vec(prop_oneof![Just('.'), Just('L'), Just('#')], cols)
                    .prop_map(|row| row.into_iter().collect::<String>()),
                rows,
            )
        })
    }

    proptest! {
        #[test]
        fn display_reproduces_layout(rows in arb_rows()) {
            let g = Grid::from_rows(&rows).unwrap();
            prop_assert_eq!(g.to_string(), rows.join("\n"));
            prop_assert_eq!(g.dimensions(), (rows.len(), rows[0].len()));
        }

        #[test]
        fn occupied_count_matches_symbols(rows in arb_rows()) {
            let g = Grid::from_rows(&rows).unwrap();
            let hashes = rows.iter().flat_map(|r| r.chars()).filter(|&c| c == '#').count();
            prop_assert_eq!(g.occupied_count(), hashes);
        }
    }
}
