//! Core types for the seatsim seating automaton.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the per-cell state, the eight compass directions used by every
//! neighbour policy, and the error types shared by the grid and engine
//! crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;

pub use cell::Cell;
pub use direction::Direction;
pub use error::GridError;
