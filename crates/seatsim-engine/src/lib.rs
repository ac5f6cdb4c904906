//! Seating simulation engine.
//!
//! Drives a [`Grid`](seatsim_grid::Grid) to its fixed point. Each round
//! applies the [`TransitionRule`] to every cell at once via [`step()`];
//! [`Stabilizer`] repeats rounds until one changes nothing.
//!
//! ```
//! use seatsim_engine::{stabilize, SimulationConfig, Stabilizer};
//! use seatsim_grid::{Adjacent, Grid};
//!
//! let grid: Grid = "LL\nLL".parse().unwrap();
//! assert_eq!(stabilize(&grid, &Adjacent, 4), 4);
//!
//! let done = Stabilizer::with_config(grid, &SimulationConfig::line_of_sight())
//!     .unwrap()
//!     .run()
//!     .unwrap();
//! assert_eq!(done.rounds, 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod rule;
pub mod stabilizer;
pub mod step;

pub use config::{ConfigError, SimulationConfig};
pub use error::StabilizeError;
pub use metrics::StabilizeMetrics;
pub use rule::{transition, TransitionRule};
pub use stabilizer::{simulate, stabilize, Convergence, Stabilizer, StabilizerState};
pub use step::{step, step_counted};
