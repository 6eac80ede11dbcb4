//! Side-by-side runs of every tour algorithm on one stop set.

use courier_core::{Algorithm, OptimizationResult, StopSet};

use crate::optimizer::RouteOptimizer;

/// One algorithm's run within a [`Comparison`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    /// Algorithm that produced `result`.
    pub algorithm: Algorithm,
    /// The unfiltered run.
    pub result: OptimizationResult,
}

/// Outcome of [`RouteOptimizer::compare`].
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Runs in [`Algorithm::ALL`] order, greedy first.
    pub entries: Vec<ComparisonEntry>,
    /// Algorithm with the shortest tour; greedy on ties.
    pub best: Algorithm,
    /// How much shorter the exact tour is than the greedy one, in percent.
    pub distance_saving_pct: f64,
}

impl Comparison {
    /// Entry for `algorithm`, if it was run.
    #[must_use]
    pub fn entry(&self, algorithm: Algorithm) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|entry| entry.algorithm == algorithm)
    }
}

impl RouteOptimizer {
    /// Run both tour algorithms on the full stop set.
    ///
    /// No capacity filter is applied. The two runs share nothing, so they
    /// execute in parallel on the rayon pool.
    ///
    /// # Examples
    /// ```
    /// use courier_core::{Algorithm, Stop, StopSet};
    /// use courier_solver::RouteOptimizer;
    ///
    /// let stops = StopSet::new(vec![
    ///     Stop::at(0, 0.0, 0.0, 0),
    ///     Stop::at(1, 1.0, 0.0, 1),
    ///     Stop::at(2, -2.0, 0.0, 1),
    ///     Stop::at(3, 5.0, 0.0, 1),
    /// ]);
    /// let comparison = RouteOptimizer::new().compare(&stops);
    /// assert_eq!(comparison.best, Algorithm::HeldKarp);
    /// assert!(comparison.distance_saving_pct > 18.0);
    /// ```
    #[must_use]
    pub fn compare(&self, stops: &StopSet) -> Comparison {
        let greedy_solver = self.solver_for(Algorithm::Greedy);
        let exact_solver = self.solver_for(Algorithm::HeldKarp);
        let (greedy, exact) = rayon::join(
            || greedy_solver.solve(stops),
            || exact_solver.solve(stops),
        );

        let best = if exact.total_distance < greedy.total_distance {
            Algorithm::HeldKarp
        } else {
            Algorithm::Greedy
        };
        let distance_saving_pct = saving_pct(greedy.total_distance, exact.total_distance);

        Comparison {
            entries: vec![
                ComparisonEntry {
                    algorithm: Algorithm::Greedy,
                    result: greedy,
                },
                ComparisonEntry {
                    algorithm: Algorithm::HeldKarp,
                    result: exact,
                },
            ],
            best,
            distance_saving_pct,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "percentages are ratios of floating-point distances"
)]
fn saving_pct(baseline: f64, improved: f64) -> f64 {
    if baseline > 0.0 {
        (baseline - improved) / baseline * 100.0
    } else {
        0.0
    }
}
