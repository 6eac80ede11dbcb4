//! The seam between the domain model and the tour algorithms.

use crate::{Algorithm, OptimizationResult, StopSet};

/// Build a tour over a stop set.
///
/// Implementations are pure: the same stops always yield the same tour and
/// work counter, and no state survives between calls. Solvers must be
/// `Send + Sync` so independent runs can proceed on separate threads.
///
/// Solving never fails. Empty and single-stop sets produce empty or trivial
/// tours; callers validate malformed input beforehand with
/// [`OptimizationRequest::validate`](crate::OptimizationRequest::validate).
///
/// # Examples
/// ```
/// use courier_core::{Algorithm, OptimizationResult, StopSet, Tour, TourSolver};
///
/// struct InputOrder;
///
/// impl TourSolver for InputOrder {
///     fn algorithm(&self) -> Algorithm {
///         Algorithm::Greedy
///     }
///
///     fn solve(&self, stops: &StopSet) -> OptimizationResult {
///         let path: Vec<usize> = (0..stops.len()).collect();
///         OptimizationResult {
///             total_distance: stops.path_distance(&path),
///             tour: Tour::new(path),
///             ..OptimizationResult::empty()
///         }
///     }
/// }
///
/// let result = InputOrder.solve(&StopSet::default());
/// assert!(result.tour.is_empty());
/// ```
pub trait TourSolver: Send + Sync {
    /// The strategy this solver implements.
    fn algorithm(&self) -> Algorithm;

    /// Build a tour over `stops`, starting at index `0`.
    fn solve(&self, stops: &StopSet) -> OptimizationResult;
}
