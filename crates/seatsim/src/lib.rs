//! Seatsim: a seating-system cellular automaton.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the seatsim sub-crates, plus the input loader and two-part solver used
//! by the `seatsim` binary.
//!
//! # Quick start
//!
//! ```rust
//! use seatsim::prelude::*;
//!
//! let grid: Grid = "L.LL\nLLLL\nL.L.".parse().unwrap();
//! let part_one = stabilize(&grid, &Adjacent, 4);
//! let part_two = stabilize(&grid, &LineOfSight, 5);
//! assert!(part_one <= grid.len());
//! assert!(part_two <= grid.len());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seatsim-core` | Cell state, directions, grid errors |
//! | [`grid`] | `seatsim-grid` | `Grid` and neighbour policies |
//! | [`engine`] | `seatsim-engine` | Step function, stabilizer, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod input;
pub mod solve;

/// Cell state, compass directions, and grid errors (`seatsim-core`).
pub use seatsim_core as types;

/// The immutable [`grid::Grid`] and the [`grid::NeighbourCounter`] policies
/// [`grid::Adjacent`] and [`grid::LineOfSight`] (`seatsim-grid`).
pub use seatsim_grid as grid;

/// Step function, [`engine::Stabilizer`] and [`engine::SimulationConfig`]
/// (`seatsim-engine`).
pub use seatsim_engine as engine;

/// Common imports for typical seatsim usage.
///
/// ```rust
/// use seatsim::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use seatsim_core::{Cell, Direction, GridError};

    // Grid and policies
    pub use seatsim_grid::{Adjacent, Grid, LineOfSight, NeighbourCounter, NeighbourPolicy};

    // Engine
    pub use seatsim_engine::{
        simulate, stabilize, step, ConfigError, Convergence, SimulationConfig, StabilizeError,
        StabilizeMetrics, Stabilizer, StabilizerState,
    };

    // Facade
    pub use crate::input::load_layout;
    pub use crate::solve::{solve_parts, Part, PartSolution};
}
