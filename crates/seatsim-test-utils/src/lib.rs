//! Test utilities for seatsim development.
//!
//! Fixtures are plain layout text so any crate in the workspace can use
//! them, including from its own unit tests, without a dependency cycle on
//! the grid types. Parse them with `Grid::parse`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod layouts;

pub use fixtures::*;
pub use layouts::{random_layout, random_seat_only_layout};
