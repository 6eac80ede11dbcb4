//! Facade crate for the Courier routing engine.
//!
//! This crate re-exports the core domain types and, behind the `solver`
//! feature, the tour algorithms and the request orchestrator.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "solver")]
//! # {
//! use courier_engine::{Algorithm, OptimizationRequest, RouteOptimizer, Stop, StopSet};
//!
//! let stops = StopSet::new(vec![
//!     Stop::at(0, 0.0, 0.0, 0),
//!     Stop::at(1, 3.0, 4.0, 5),
//!     Stop::at(2, 6.0, 8.0, 5),
//! ]);
//! let request = OptimizationRequest::new(stops, Algorithm::HeldKarp);
//! let result = RouteOptimizer::new().optimize(&request);
//! assert_eq!(result.tour.as_slice(), &[0, 1, 2]);
//! # }
//! ```

#![forbid(unsafe_code)]

pub use courier_core::{
    Algorithm, CapacitySelection, DEFAULT_CAPACITY, MAX_CAPACITY, OptimizationRequest,
    OptimizationResult, ParseAlgorithmError, RequestValidationError, Stop, StopSet, Tour,
    TourSolver, distance,
};

#[cfg(feature = "solver")]
pub use courier_solver::{
    Comparison, ComparisonEntry, DEFAULT_EXACT_CEILING, HeldKarp, MAX_EXACT_CEILING,
    NearestNeighbour, OptimizerConfig, RouteOptimizer, held_karp, nearest_neighbour,
    select_within_capacity,
};
