//! Tour algorithms and request orchestration for the Courier routing engine.
//!
//! Two [`TourSolver`](courier_core::TourSolver) implementations are provided:
//! [`NearestNeighbour`], an `O(n²)` greedy builder, and [`HeldKarp`], an exact
//! subset dynamic programme that hands oversized stop sets to the greedy
//! builder. [`select_within_capacity`] picks the largest stop subset that
//! fits a weight budget, and [`RouteOptimizer`] chains the two stages for an
//! [`OptimizationRequest`](courier_core::OptimizationRequest).
//!
//! Every entry point is a pure function of its input. Work counters are
//! threaded through each run and returned in the result, so independent runs
//! may execute in parallel; [`RouteOptimizer::compare`] does exactly that.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod capacity;
mod compare;
mod greedy;
mod held_karp;
mod matrix;
mod optimizer;

pub use capacity::select_within_capacity;
pub use compare::{Comparison, ComparisonEntry};
pub use greedy::{NearestNeighbour, nearest_neighbour};
pub use held_karp::{DEFAULT_EXACT_CEILING, HeldKarp, MAX_EXACT_CEILING, held_karp};
pub use optimizer::{OptimizerConfig, RouteOptimizer};
