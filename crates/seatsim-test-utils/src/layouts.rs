//! Seeded random layouts for property-style and benchmark workloads.
//!
//! Generation is deterministic in `seed`: the same arguments always produce
//! the same text.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A `rows x cols` layout with roughly 1/4 floor, 1/2 empty, 1/4 occupied.
pub fn random_layout(rows: usize, cols: usize, seed: u64) -> String {
    generate(rows, cols, seed, |roll| match roll % 4 {
        0 => '.',
        1 | 2 => 'L',
        _ => '#',
    })
}

/// A `rows x cols` layout with no floor: half empty, half occupied.
pub fn random_seat_only_layout(rows: usize, cols: usize, seed: u64) -> String {
    generate(rows, cols, seed, |roll| if roll % 2 == 0 { 'L' } else { '#' })
}

fn generate(rows: usize, cols: usize, seed: u64, pick: impl Fn(u32) -> char) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = String::with_capacity(rows * (cols + 1));
    for r in 0..rows {
        if r > 0 {
            out.push('\n');
        }
        for _ in 0..cols {
            out.push(pick(rng.next_u32()));
        }
    }
    out
}
