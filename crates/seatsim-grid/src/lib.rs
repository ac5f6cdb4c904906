//! Seat-layout grid and neighbour visibility for seatsim.
//!
//! This crate defines [`Grid`], the immutable rectangular snapshot every
//! simulation round reads from, and the [`NeighbourCounter`] trait through
//! which the engine asks how many occupied seats a cell can see.
//!
//! # Policies
//!
//! - [`Adjacent`]: the single cell one step away in each direction
//! - [`LineOfSight`]: the first seat in each direction, looking past floor
//!
//! [`NeighbourPolicy`] names the two for configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbours;

pub use grid::Grid;
pub use neighbours::{Adjacent, LineOfSight, NeighbourCounter, NeighbourPolicy, UnknownPolicy};
pub use seatsim_core::{Cell, Direction, GridError};
