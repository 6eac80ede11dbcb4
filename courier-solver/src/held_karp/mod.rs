//! Exact tours via the Held-Karp subset dynamic programme.
//!
//! The table is keyed by `(visited subset, endpoint)`. The depot is part of
//! every subset, so it is left implicit: bit `k` of a mask stands for stop
//! `k + 1`, and a stop set of `n` entries needs `2^(n-1) · (n-1)` cells.
//! Costs and parents live in flat, contiguous arrays indexed by
//! `mask · width + endpoint`.

use std::time::Instant;

use courier_core::{Algorithm, OptimizationResult, StopSet, Tour, TourSolver};

use crate::greedy::nearest_neighbour;
use crate::matrix::DistanceMatrix;

/// Largest stop count solved exactly by default.
pub const DEFAULT_EXACT_CEILING: usize = 20;

/// Upper bound accepted by [`HeldKarp::with_ceiling`].
///
/// The cost and parent tables hold `2^(n-1) · (n-1)` cells of nine bytes
/// each. At 20 stops that is about 90 MB; at 24 stops it is about 1.7 GB,
/// all allocated up front for the duration of one run.
pub const MAX_EXACT_CEILING: usize = 24;

/// Parent marker for endpoints reached straight from the depot.
const FROM_DEPOT: u8 = u8::MAX;

/// Held-Karp solver with a stop-count ceiling.
///
/// Stop sets larger than the ceiling are handed to the nearest-neighbour
/// builder unchanged, counters included.
///
/// # Examples
/// ```
/// use courier_core::{Stop, StopSet, TourSolver};
/// use courier_solver::HeldKarp;
///
/// let stops = StopSet::new(vec![
///     Stop::at(0, 0.0, 0.0, 0),
///     Stop::at(1, 3.0, 4.0, 5),
///     Stop::at(2, 6.0, 8.0, 5),
/// ]);
/// let result = HeldKarp::new().solve(&stops);
/// assert_eq!(result.tour.as_slice(), &[0, 1, 2]);
/// assert!((result.total_distance - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldKarp {
    ceiling: usize,
}

impl Default for HeldKarp {
    fn default() -> Self {
        Self::new()
    }
}

impl HeldKarp {
    /// Solver using [`DEFAULT_EXACT_CEILING`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ceiling: DEFAULT_EXACT_CEILING,
        }
    }

    /// Solver with a custom ceiling, clamped to [`MAX_EXACT_CEILING`].
    #[must_use]
    pub fn with_ceiling(ceiling: usize) -> Self {
        if ceiling > MAX_EXACT_CEILING {
            log::warn!(
                "exact ceiling {ceiling} exceeds the supported maximum; clamping to {MAX_EXACT_CEILING}"
            );
        }
        Self {
            ceiling: ceiling.min(MAX_EXACT_CEILING),
        }
    }

    /// Largest stop count this solver handles exactly.
    #[must_use]
    pub const fn ceiling(&self) -> usize {
        self.ceiling
    }
}

impl TourSolver for HeldKarp {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HeldKarp
    }

    fn solve(&self, stops: &StopSet) -> OptimizationResult {
        let n = stops.len();
        if n <= 1 {
            return OptimizationResult {
                tour: Tour::new((0..n).collect()),
                ..OptimizationResult::empty()
            };
        }
        if n > self.ceiling {
            log::warn!(
                "{n} stops exceed the exact ceiling of {}; using the nearest-neighbour tour",
                self.ceiling
            );
            return nearest_neighbour(stops);
        }

        let started_at = Instant::now();
        let matrix = DistanceMatrix::from_stops(stops);
        let table = SubsetTable::fill(&matrix, n - 1);
        let (path, steps_checked) = table.best_tour();
        let total_distance = stops.path_distance(&path);
        log::debug!("held-karp tour over {n} stops evaluated {steps_checked} transitions");

        OptimizationResult {
            tour: Tour::new(path),
            total_distance,
            computation_time: started_at.elapsed(),
            steps_checked,
            capacity: None,
        }
    }
}

/// Solve `stops` exactly with the default ceiling.
#[must_use]
pub fn held_karp(stops: &StopSet) -> OptimizationResult {
    HeldKarp::new().solve(stops)
}

/// Minimum cost and predecessor for every `(subset, endpoint)` state.
struct SubsetTable {
    width: usize,
    cost: Vec<f64>,
    parent: Vec<u8>,
    steps_checked: u64,
}

impl SubsetTable {
    /// Fill the table for `width` non-depot stops.
    ///
    /// Subsets are processed by increasing size, so every predecessor state
    /// is final before it is read. Minima are kept on strict improvement
    /// only, which makes the lowest predecessor index win ties.
    #[expect(
        clippy::float_arithmetic,
        reason = "tour costs accumulate floating-point leg distances"
    )]
    fn fill(matrix: &DistanceMatrix, width: usize) -> Self {
        let states = (1_usize << width) * width;
        let mut table = Self {
            width,
            cost: vec![f64::INFINITY; states],
            parent: vec![FROM_DEPOT; states],
            steps_checked: 0,
        };

        for end in 0..width {
            table.record(1 << end, end, matrix.get(0, end + 1), FROM_DEPOT);
            table.steps_checked += 1;
        }

        for size in 2..=width {
            for mask in masks_of_size(width, size) {
                for end in members(mask) {
                    let previous = mask ^ (1 << end);
                    let mut best: Option<(f64, usize)> = None;
                    for before in members(previous) {
                        table.steps_checked += 1;
                        let candidate =
                            table.cost_of(previous, before) + matrix.get(before + 1, end + 1);
                        if best.is_none_or(|(best_cost, _)| candidate < best_cost) {
                            best = Some((candidate, before));
                        }
                    }
                    if let Some((best_cost, before)) = best {
                        table.record(mask, end, best_cost, parent_marker(before));
                    }
                }
            }
        }

        table
    }

    /// Pick the cheapest complete tour and walk the parents back to the depot.
    ///
    /// Returns the path in forward order together with the work counter,
    /// which includes one step per final endpoint considered.
    fn best_tour(mut self) -> (Vec<usize>, u64) {
        let full = (1_usize << self.width) - 1;
        let mut last: Option<(f64, usize)> = None;
        for end in 0..self.width {
            self.steps_checked += 1;
            let cost = self.cost_of(full, end);
            if last.is_none_or(|(best_cost, _)| cost < best_cost) {
                last = Some((cost, end));
            }
        }

        let mut path = Vec::with_capacity(self.width + 1);
        let mut mask = full;
        let mut current = last.map(|(_, end)| end);
        while let Some(end) = current {
            path.push(end + 1);
            let parent = self.parent_of(mask, end);
            mask ^= 1 << end;
            current = (parent != FROM_DEPOT).then_some(usize::from(parent));
        }
        path.push(0);
        path.reverse();

        (path, self.steps_checked)
    }

    const fn slot(&self, mask: usize, end: usize) -> usize {
        mask * self.width + end
    }

    fn cost_of(&self, mask: usize, end: usize) -> f64 {
        self.cost
            .get(self.slot(mask, end))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn parent_of(&self, mask: usize, end: usize) -> u8 {
        self.parent
            .get(self.slot(mask, end))
            .copied()
            .unwrap_or(FROM_DEPOT)
    }

    fn record(&mut self, mask: usize, end: usize, cost: f64, parent: u8) {
        let slot = self.slot(mask, end);
        if let (Some(cost_cell), Some(parent_cell)) =
            (self.cost.get_mut(slot), self.parent.get_mut(slot))
        {
            *cost_cell = cost;
            *parent_cell = parent;
        }
    }
}

fn parent_marker(endpoint: usize) -> u8 {
    u8::try_from(endpoint).unwrap_or(FROM_DEPOT)
}

/// Indices of the set bits of `mask`, ascending.
fn members(mask: usize) -> impl Iterator<Item = usize> {
    std::iter::successors((mask != 0).then_some(mask), |&rest| {
        let next = rest & (rest - 1);
        (next != 0).then_some(next)
    })
    .map(|rest| rest.trailing_zeros() as usize)
}

/// Every `width`-bit mask with exactly `size` bits set, ascending.
///
/// Uses Gosper's hack to step between masks of equal popcount.
fn masks_of_size(width: usize, size: usize) -> impl Iterator<Item = usize> {
    let limit = 1_usize << width;
    let first = (size > 0 && size <= width).then(|| (1_usize << size) - 1);
    std::iter::successors(first, move |&mask| {
        let lowest = mask & mask.wrapping_neg();
        let ripple = mask + lowest;
        let next = (((ripple ^ mask) >> 2) >> lowest.trailing_zeros()) | ripple;
        (next < limit).then_some(next)
    })
}
