//! Neighbour visibility policies.
//!
//! A [`NeighbourCounter`] decides, for one cell and one compass direction,
//! which cell (if any) that seat "sees". The number of occupied seats seen
//! across all eight directions is what the transition rule consumes.
//!
//! Both policies read only the grid they are given. The engine always passes
//! the current round's snapshot, never the one being assembled.

use crate::grid::Grid;
use seatsim_core::{Cell, Direction};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Visibility policy used to count a cell's occupied neighbours.
///
/// # Contract
///
/// - `look()` MUST be pure: same grid and coordinate, same answer.
/// - `look()` never returns a cell outside the grid; walking off the edge
///   yields `None`.
///
/// # Object safety
///
/// This trait is object-safe; configuration stores policies as
/// `&'static dyn NeighbourCounter`.
///
/// # Examples
///
/// ```
/// use seatsim_grid::{Adjacent, Grid, LineOfSight, NeighbourCounter};
///
/// let grid: Grid = ".#.\n.L.\n...".parse().unwrap();
/// assert_eq!(Adjacent.occupied_neighbours(&grid, 1, 1), 1);
///
/// let wide: Grid = "#..L".parse().unwrap();
/// assert_eq!(Adjacent.occupied_neighbours(&wide, 0, 3), 0);
/// assert_eq!(LineOfSight.occupied_neighbours(&wide, 0, 3), 1);
/// ```
pub trait NeighbourCounter: fmt::Debug + Send + Sync {
    /// The cell seen from `(row, col)` looking in `direction`, if any.
    fn look(&self, grid: &Grid, row: usize, col: usize, direction: Direction) -> Option<Cell>;

    /// Every cell seen from `(row, col)`, in [`Direction::ALL`] order.
    ///
    /// At most eight entries; directions that see nothing are omitted.
    fn visible(&self, grid: &Grid, row: usize, col: usize) -> SmallVec<[Cell; 8]> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.look(grid, row, col, d))
            .collect()
    }

    /// Number of occupied seats seen from `(row, col)`. Always `<= 8`.
    fn occupied_neighbours(&self, grid: &Grid, row: usize, col: usize) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&d| self.look(grid, row, col, d) == Some(Cell::Occupied))
            .count()
    }
}

/// The single cell one step away in each direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Adjacent;

impl NeighbourCounter for Adjacent {
    #[inline]
    fn look(&self, grid: &Grid, row: usize, col: usize, direction: Direction) -> Option<Cell> {
        let (r, c) = grid.neighbour(row, col, direction, 1)?;
        grid.cell(r, c)
    }
}

/// The first seat in each direction, looking past any floor.
///
/// The walk starts one step away and stops at the first non-floor cell.
/// A walk that leaves the grid having seen only floor sees nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineOfSight;

impl NeighbourCounter for LineOfSight {
    fn look(&self, grid: &Grid, row: usize, col: usize, direction: Direction) -> Option<Cell> {
        let (mut r, mut c) = (row, col);
        loop {
            (r, c) = grid.neighbour(r, c, direction, 1)?;
            match grid.cell(r, c)? {
                Cell::Floor => continue,
                seat => return Some(seat),
            }
        }
    }
}

/// Names the two built-in policies for configuration and the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NeighbourPolicy {
    /// [`Adjacent`].
    #[default]
    Adjacent,
    /// [`LineOfSight`].
    LineOfSight,
}

impl NeighbourPolicy {
    /// The counter implementing this policy.
    pub fn counter(self) -> &'static dyn NeighbourCounter {
        match self {
            Self::Adjacent => &Adjacent,
            Self::LineOfSight => &LineOfSight,
        }
    }

    /// Stable lowercase name, accepted back by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adjacent => "adjacent",
            Self::LineOfSight => "line-of-sight",
        }
    }
}

impl fmt::Display for NeighbourPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A policy name that is neither `adjacent` nor `line-of-sight`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown neighbour policy '{}' (expected adjacent or line-of-sight)",
            self.0
        )
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for NeighbourPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "adjacent" => Ok(Self::Adjacent),
            "line-of-sight" | "line_of_sight" | "los" => Ok(Self::LineOfSight),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(text: &str) -> Grid {
        Grid::parse(text).unwrap()
    }

    // ── Adjacent ────────────────────────────────────────────────

    #[test]
    fn adjacent_interior_all_occupied() {
        let g = grid("###\n#L#\n###");
        assert_eq!(Adjacent.occupied_neighbours(&g, 1, 1), 8);
        assert_eq!(Adjacent.visible(&g, 1, 1).len(), 8);
    }

    #[test]
    fn adjacent_corner_sees_three() {
        let g = grid("###\n###\n###");
        assert_eq!(Adjacent.visible(&g, 0, 0).len(), 3);
        assert_eq!(Adjacent.occupied_neighbours(&g, 0, 0), 3);
        assert_eq!(Adjacent.occupied_neighbours(&g, 0, 1), 5);
    }

    #[test]
    fn adjacent_does_not_look_past_floor() {
        let g = grid("#.L");
        assert_eq!(Adjacent.look(&g, 0, 2, Direction::W), Some(Cell::Floor));
        assert_eq!(Adjacent.occupied_neighbours(&g, 0, 2), 0);
    }

    #[test]
    fn single_cell_sees_nothing() {
        let g = grid("L");
        assert!(Adjacent.visible(&g, 0, 0).is_empty());
        assert!(LineOfSight.visible(&g, 0, 0).is_empty());
    }

    // ── Line of sight ───────────────────────────────────────────

    #[test]
    fn line_of_sight_sees_eight_occupied() {
        let g = grid(
            ".......#.\n\
             ...#.....\n\
             .#.......\n\
             .........\n\
             ..#L....#\n\
             ....#....\n\
             .........\n\
             #........\n\
             ...#.....",
        );
        assert_eq!(g.get(4, 3), Ok(Cell::Empty));
        assert_eq!(LineOfSight.occupied_neighbours(&g, 4, 3), 8);
    }

    #[test]
    fn line_of_sight_blocked_by_empty_seat() {
        let g = grid(
            ".............\n\
             .L.L.#.#.#.#.\n\
             .............",
        );
        assert_eq!(LineOfSight.occupied_neighbours(&g, 1, 1), 0);
        assert_eq!(LineOfSight.look(&g, 1, 1, Direction::E), Some(Cell::Empty));
        assert_eq!(LineOfSight.visible(&g, 1, 1).as_slice(), &[Cell::Empty]);
    }

    #[test]
    fn line_of_sight_sees_nothing_through_gaps() {
        let g = grid(
            ".##.##.\n\
             #.#.#.#\n\
             ##...##\n\
             ...L...\n\
             ##...##\n\
             #.#.#.#\n\
             .##.##.",
        );
        assert_eq!(LineOfSight.occupied_neighbours(&g, 3, 3), 0);
        assert!(LineOfSight.visible(&g, 3, 3).is_empty());
    }

    #[test]
    fn line_of_sight_walk_exits_grid() {
        let g = grid("L....");
        assert_eq!(LineOfSight.look(&g, 0, 0, Direction::E), None);
        assert_eq!(LineOfSight.look(&g, 0, 4, Direction::W), Some(Cell::Empty));
    }

    // ── Policy naming ───────────────────────────────────────────

    #[test]
    fn policy_parses_and_displays() {
        assert_eq!("adjacent".parse(), Ok(NeighbourPolicy::Adjacent));
        assert_eq!("Line-Of-Sight".parse(), Ok(NeighbourPolicy::LineOfSight));
        assert_eq!(
            "diagonal".parse::<NeighbourPolicy>(),
            Err(UnknownPolicy("diagonal".into()))
        );
        for p in [NeighbourPolicy::Adjacent, NeighbourPolicy::LineOfSight] {
            assert_eq!(p.to_string().parse(), Ok(p));
        }
    }

    #[test]
    fn policy_counter_dispatches() {
        let g = grid("#..L");
        assert_eq!(
            NeighbourPolicy::Adjacent.counter().occupied_neighbours(&g, 0, 3),
            0
        );
        assert_eq!(
            NeighbourPolicy::LineOfSight
                .counter()
                .occupied_neighbours(&g, 0, 3),
            1
        );
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_grid(symbols: &'static [char]) -> impl Strategy<Value = Grid> {
        (1usize..9, 1usize..9).prop_flat_map(move |(rows, cols)| {
            prop::collection::vec(prop::sample::select(symbols), rows * cols).prop_map(
                move |syms| {
                    let text: Vec<String> = syms
                        .chunks(cols)
                        .map(|row| row.iter().collect())
                        .collect();
                    Grid::from_rows(text).unwrap()
                },
            )
        })
    }

    proptest! {
        #[test]
        fn counts_are_bounded(g in arb_grid(&['.', 'L', '#'])) {
            for ((r, c), _) in g.cells() {
                prop_assert!(Adjacent.occupied_neighbours(&g, r, c) <= 8);
                prop_assert!(LineOfSight.occupied_neighbours(&g, r, c) <= 8);
            }
        }

        #[test]
        fn policies_agree_without_floor(g in arb_grid(&['L', '#'])) {
            for ((r, c), _) in g.cells() {
                prop_assert_eq!(
                    Adjacent.occupied_neighbours(&g, r, c),
                    LineOfSight.occupied_neighbours(&g, r, c)
                );
            }
        }

        #[test]
        fn line_of_sight_never_sees_floor(g in arb_grid(&['.', 'L', '#'])) {
            for ((r, c), _) in g.cells() {
                prop_assert!(LineOfSight.visible(&g, r, c).iter().all(|cell| cell.is_seat()));
            }
        }

        #[test]
        fn line_of_sight_sees_at_least_adjacent_seats(g in arb_grid(&['.', 'L', '#'])) {
            for ((r, c), _) in g.cells() {
                let near = Adjacent.visible(&g, r, c).iter().filter(|c| c.is_seat()).count();
                prop_assert!(LineOfSight.visible(&g, r, c).len() >= near);
            }
        }
    }
}
