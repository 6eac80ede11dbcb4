//! Core domain types for the Courier routing engine.
//!
//! The crate models the inputs and outputs of a single optimisation run:
//! weighted [`Stop`]s grouped into a [`StopSet`] whose first entry is the
//! depot, the [`Tour`] produced by a [`TourSolver`], and the
//! [`OptimizationResult`] reported back to callers. Algorithms live in
//! `courier-solver`; this crate only defines the shared vocabulary and the
//! Euclidean [`distance`] model they build on.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod algorithm;
mod distance;
mod request;
mod result;
mod solver;
mod stop;
mod tour;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use distance::distance;
pub use request::{
    DEFAULT_CAPACITY, MAX_CAPACITY, OptimizationRequest, RequestValidationError,
};
pub use result::{CapacitySelection, OptimizationResult};
pub use solver::TourSolver;
pub use stop::{Stop, StopSet};
pub use tour::Tour;
