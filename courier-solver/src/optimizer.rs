//! Request orchestration: capacity filtering followed by one tour run.

use courier_core::{Algorithm, OptimizationRequest, OptimizationResult, TourSolver};

use crate::capacity::select_within_capacity;
use crate::greedy::NearestNeighbour;
use crate::held_karp::{DEFAULT_EXACT_CEILING, HeldKarp};

/// Configuration for [`RouteOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Largest stop count the exact solver handles before falling back.
    pub exact_ceiling: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            exact_ceiling: DEFAULT_EXACT_CEILING,
        }
    }
}

/// Chains the capacity selector with the requested tour algorithm.
///
/// Holds no per-run state, so a single optimiser can serve any number of
/// requests, including concurrently.
///
/// # Examples
/// ```
/// use courier_core::{Algorithm, OptimizationRequest, Stop, StopSet};
/// use courier_solver::RouteOptimizer;
///
/// let stops = StopSet::new(vec![
///     Stop::at(0, 0.0, 0.0, 0),
///     Stop::at(1, 3.0, 4.0, 5),
///     Stop::at(2, 6.0, 8.0, 5),
/// ]);
/// let request = OptimizationRequest::new(stops, Algorithm::HeldKarp).with_capacity(5);
/// let result = RouteOptimizer::new().optimize(&request);
///
/// let selection = result.capacity.as_ref().map(|c| c.selected.clone());
/// assert_eq!(selection, Some(vec![0, 1]));
/// assert_eq!(result.tour.as_slice(), &[0, 1]);
/// assert_eq!(result.resolve_path(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
    greedy: NearestNeighbour,
    exact: HeldKarp,
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteOptimizer {
    /// Construct an optimiser using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(OptimizerConfig::default())
    }

    /// Construct an optimiser with explicit configuration.
    #[must_use]
    pub fn with_config(config: OptimizerConfig) -> Self {
        Self {
            config,
            greedy: NearestNeighbour,
            exact: HeldKarp::with_ceiling(config.exact_ceiling),
        }
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Tour solver backing `algorithm`.
    #[must_use]
    pub fn solver_for(&self, algorithm: Algorithm) -> &dyn TourSolver {
        match algorithm {
            Algorithm::Greedy => &self.greedy,
            Algorithm::HeldKarp => &self.exact,
        }
    }

    /// Run one optimisation request.
    ///
    /// With the capacity filter enabled the tour is computed over the
    /// selected stops only, and its indices refer to that reduced set; see
    /// [`OptimizationResult::resolve_path`]. When nothing fits the budget no
    /// tour algorithm runs and the result is empty apart from the selection.
    ///
    /// The request is not validated here; call
    /// [`OptimizationRequest::validate`] first.
    #[must_use]
    pub fn optimize(&self, request: &OptimizationRequest) -> OptimizationResult {
        let solver = self.solver_for(request.algorithm);
        let Some(capacity) = request.capacity_budget() else {
            return solver.solve(&request.stops);
        };

        let selection = select_within_capacity(&request.stops, capacity);
        if selection.selected.is_empty() {
            return OptimizationResult::empty().with_capacity(selection);
        }

        let reduced = request.stops.subset(&selection.selected);
        solver.solve(&reduced).with_capacity(selection)
    }
}
