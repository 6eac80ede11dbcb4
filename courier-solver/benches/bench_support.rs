//! Benchmark support utilities for the tour algorithms.
//!
//! Provides seeded, uniformly scattered stop sets so that every run measures
//! the same inputs.

use courier_core::{Stop, StopSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Side length of the square the stops are scattered over.
const AREA_SIZE: f64 = 1000.0;

/// Largest weight assigned to a generated stop.
const MAX_WEIGHT: u32 = 20;

/// Generate `count` stops uniformly over the benchmark area.
///
/// The depot sits at the centre; the remaining stops are random.
#[must_use]
pub fn generate_stops(count: usize, seed: u64) -> StopSet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let centre = AREA_SIZE / 2.0;

    (0_u64..)
        .take(count)
        .map(|id| {
            if id == 0 {
                Stop::at(id, centre, centre, 0)
            } else {
                Stop::at(
                    id,
                    rng.gen_range(0.0..AREA_SIZE),
                    rng.gen_range(0.0..AREA_SIZE),
                    rng.gen_range(1..=MAX_WEIGHT),
                )
            }
        })
        .collect()
}
