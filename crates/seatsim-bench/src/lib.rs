//! Benchmark layouts for the seatsim workspace.
//!
//! - [`reference_layout`]: 100x100 seeded layout (10K cells)
//! - [`stress_layout`]: 316x316 seeded layout (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seatsim_grid::Grid;
use seatsim_test_utils::random_layout;

/// Build a seeded `rows x cols` grid.
pub fn seeded_grid(rows: usize, cols: usize, seed: u64) -> Grid {
    Grid::parse(&random_layout(rows, cols, seed)).expect("generated layouts are well-formed")
}

/// 100x100 grid (10K cells).
pub fn reference_layout(seed: u64) -> Grid {
    seeded_grid(100, 100, seed)
}

/// 316x316 grid (~100K cells).
pub fn stress_layout(seed: u64) -> Grid {
    seeded_grid(316, 316, seed)
}
