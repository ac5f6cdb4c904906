//! Reference layouts.
//!
//! - [`SAMPLE_LAYOUT`]: the 10x10 waiting area used by the end-to-end tests.
//! - [`SAMPLE_ADJACENT_ROUNDS`] / [`SAMPLE_LINE_OF_SIGHT_ROUNDS`]: every
//!   round of the sample under each rule set, initial layout first. The
//!   last entry is the fixed point.
//! - Visibility fixtures with a known line-of-sight count at a known cell.

/// The sample waiting area.
pub const SAMPLE_LAYOUT: &str = "\
L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL";

/// Occupied seats once the sample settles under the adjacent rules.
pub const SAMPLE_ADJACENT_OCCUPIED: usize = 37;

/// Occupied seats once the sample settles under the line-of-sight rules.
pub const SAMPLE_LINE_OF_SIGHT_OCCUPIED: usize = 26;

/// Sample rounds under adjacent visibility, threshold 4.
pub const SAMPLE_ADJACENT_ROUNDS: [&str; 6] = [
    SAMPLE_LAYOUT,
    "\
#.##.##.##
#######.##
#.#.#..#..
####.##.##
#.##.##.##
#.#####.##
..#.#.....
##########
#.######.#
#.#####.##",
    "\
#.LL.L#.##
#LLLLLL.L#
L.L.L..L..
#LLL.LL.L#
#.LL.LL.LL
#.LLLL#.##
..L.L.....
#LLLLLLLL#
#.LLLLLL.L
#.#LLLL.##",
    "\
#.##.L#.##
#L###LL.L#
L.#.#..#..
#L##.##.L#
#.##.LL.LL
#.###L#.##
..#.#.....
#L######L#
#.LL###L.L
#.#L###.##",
    "\
#.#L.L#.##
#LLL#LL.L#
L.L.L..#..
#LLL.##.L#
#.LL.LL.LL
#.LL#L#.##
..L.L.....
#L#LLLL#L#
#.LLLLLL.L
#.#L#L#.##",
    "\
#.#L.L#.##
#LLL#LL.L#
L.#.L..#..
#L##.##.L#
#.#L.LL.LL
#.#L#L#.##
..L.L.....
#L#L##L#L#
#.LLLLLL.L
#.#L#L#.##",
];

/// Sample rounds under line-of-sight visibility, threshold 5.
pub const SAMPLE_LINE_OF_SIGHT_ROUNDS: [&str; 7] = [
    SAMPLE_LAYOUT,
    "\
#.##.##.##
#######.##
#.#.#..#..
####.##.##
#.##.##.##
#.#####.##
..#.#.....
##########
#.######.#
#.#####.##",
    "\
#.LL.LL.L#
#LLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLL#
#.LLLLLL.L
#.LLLLL.L#",
    "\
#.L#.##.L#
#L#####.LL
L.#.#..#..
##L#.##.##
#.##.#L.##
#.#####.#L
..#.#.....
LLL####LL#
#.L#####.L
#.L####.L#",
    "\
#.L#.L#.L#
#LLLLLL.LL
L.L.L..#..
##LL.LL.L#
L.LL.LL.L#
#.LLLLL.LL
..L.L.....
LLLLLLLLL#
#.LLLLL#.L
#.L#LL#.L#",
    "\
#.L#.L#.L#
#LLLLLL.LL
L.L.L..#..
##L#.#L.L#
L.L#.#L.L#
#.L####.LL
..#.#.....
LLL###LLL#
#.LLLLL#.L
#.L#LL#.L#",
    "\
#.L#.L#.L#
#LLLLLL.LL
L.L.L..#..
##L#.#L.L#
L.L#.LL.L#
#.LLLL#.LL
..#.L.....
LLL###LLL#
#.LLLLL#.L
#.L#LL#.L#",
];

/// A 10x10 layout whose only empty seat, at [`EIGHT_VISIBLE_SEAT`], sees
/// exactly one occupied seat in each of the eight directions.
pub const EIGHT_VISIBLE_LAYOUT: &str = "\
.......#..
...#......
.#........
..........
..#L....#.
....#.....
..........
#.........
...#......
..........";

/// `(row, col)` of the empty seat in [`EIGHT_VISIBLE_LAYOUT`].
pub const EIGHT_VISIBLE_SEAT: (usize, usize) = (4, 3);

/// The empty seat at [`BLOCKED_SEAT`] sees a single empty seat and none of
/// the occupied ones behind it.
pub const BLOCKED_LAYOUT: &str = "\
.............
.L.L.#.#.#.#.
.............";

/// `(row, col)` of the observing seat in [`BLOCKED_LAYOUT`].
pub const BLOCKED_SEAT: (usize, usize) = (1, 1);

/// The empty seat at [`NOTHING_VISIBLE_SEAT`] sees no seats at all.
pub const NOTHING_VISIBLE_LAYOUT: &str = "\
.##.##.
#.#.#.#
##...##
...L...
##...##
#.#.#.#
.##.##.";

/// `(row, col)` of the observing seat in [`NOTHING_VISIBLE_LAYOUT`].
pub const NOTHING_VISIBLE_SEAT: (usize, usize) = (3, 3);
