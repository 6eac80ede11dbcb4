//! Request payload consumed by the optimiser and its validation rules.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Algorithm, StopSet};

/// Capacity budget applied when a request does not name one.
pub const DEFAULT_CAPACITY: u32 = 100;

/// Largest capacity accepted by [`OptimizationRequest::validate`].
///
/// The capacity filter allocates one table row of `capacity + 1` cells per
/// stop, so the budget must stay bounded.
pub const MAX_CAPACITY: u32 = 100_000;

/// Parameters for a single optimisation run.
///
/// # Examples
/// ```
/// use courier_core::{Algorithm, OptimizationRequest, Stop, StopSet};
///
/// let request = OptimizationRequest::new(
///     StopSet::new(vec![Stop::at(0, 0.0, 0.0, 0), Stop::at(1, 3.0, 4.0, 5)]),
///     Algorithm::HeldKarp,
/// )
/// .with_capacity(5);
/// assert_eq!(request.capacity_budget(), Some(5));
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct OptimizationRequest {
    /// Stops to route, depot first.
    pub stops: StopSet,
    /// Tour algorithm to run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub algorithm: Algorithm,
    /// Whether to filter stops through the capacity selector first.
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_capacity_constraint: bool,
    /// Weight budget for the capacity selector.
    #[cfg_attr(feature = "serde", serde(default = "default_capacity"))]
    pub capacity: u32,
}

#[cfg(feature = "serde")]
const fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

/// Reasons an [`OptimizationRequest`] is rejected before it reaches a solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    /// A stop has a NaN or infinite coordinate.
    #[error("stop at index {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending stop.
        index: usize,
    },
    /// Two stops share the same identifier.
    #[error("stop id {id} appears more than once")]
    DuplicateStopId {
        /// The repeated identifier.
        id: u64,
    },
    /// The capacity budget exceeds [`MAX_CAPACITY`].
    #[error("capacity {capacity} exceeds the supported maximum of {limit}")]
    CapacityTooLarge {
        /// Requested budget.
        capacity: u32,
        /// Largest accepted budget.
        limit: u32,
    },
}

impl OptimizationRequest {
    /// Request with the capacity filter disabled.
    #[must_use]
    pub const fn new(stops: StopSet, algorithm: Algorithm) -> Self {
        Self {
            stops,
            algorithm,
            use_capacity_constraint: false,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Enable the capacity filter with `capacity` as the budget.
    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.use_capacity_constraint = true;
        self.capacity = capacity;
        self
    }

    /// The budget to filter with, when the filter is enabled.
    #[must_use]
    pub const fn capacity_budget(&self) -> Option<u32> {
        if self.use_capacity_constraint {
            Some(self.capacity)
        } else {
            None
        }
    }

    /// Check the preconditions the algorithms rely on.
    ///
    /// The capacity bound is only enforced when the filter is enabled.
    ///
    /// # Errors
    ///
    /// Returns the first [`RequestValidationError`] encountered, scanning
    /// stops in order.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        let mut seen = HashSet::with_capacity(self.stops.len());
        for (index, stop) in self.stops.iter().enumerate() {
            if !(stop.location.x.is_finite() && stop.location.y.is_finite()) {
                return Err(RequestValidationError::NonFiniteCoordinate { index });
            }
            if !seen.insert(stop.id) {
                return Err(RequestValidationError::DuplicateStopId { id: stop.id });
            }
        }
        if self.use_capacity_constraint && self.capacity > MAX_CAPACITY {
            return Err(RequestValidationError::CapacityTooLarge {
                capacity: self.capacity,
                limit: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stop;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stops() -> StopSet {
        StopSet::new(vec![
            Stop::at(0, 0.0, 0.0, 0),
            Stop::at(1, 3.0, 4.0, 5),
            Stop::at(2, 6.0, 8.0, 5),
        ])
    }

    #[rstest]
    fn accepts_well_formed_request(stops: StopSet) {
        let request = OptimizationRequest::new(stops, Algorithm::Greedy).with_capacity(5);
        assert_eq!(request.validate(), Ok(()));
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(f64::NEG_INFINITY, 1.0)]
    fn rejects_non_finite_coordinates(#[case] x: f64, #[case] y: f64) {
        let stops = StopSet::new(vec![Stop::at(0, 0.0, 0.0, 0), Stop::at(1, x, y, 1)]);
        let request = OptimizationRequest::new(stops, Algorithm::Greedy);
        assert_eq!(
            request.validate(),
            Err(RequestValidationError::NonFiniteCoordinate { index: 1 })
        );
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let stops = StopSet::new(vec![Stop::at(3, 0.0, 0.0, 0), Stop::at(3, 1.0, 1.0, 1)]);
        let request = OptimizationRequest::new(stops, Algorithm::HeldKarp);
        assert_eq!(
            request.validate(),
            Err(RequestValidationError::DuplicateStopId { id: 3 })
        );
    }

    #[rstest]
    fn rejects_oversized_capacity_only_when_enabled(stops: StopSet) {
        let mut request = OptimizationRequest::new(stops, Algorithm::Greedy);
        request.capacity = MAX_CAPACITY + 1;
        assert_eq!(request.validate(), Ok(()));

        request.use_capacity_constraint = true;
        assert_eq!(
            request.validate(),
            Err(RequestValidationError::CapacityTooLarge {
                capacity: MAX_CAPACITY + 1,
                limit: MAX_CAPACITY,
            })
        );
    }

    #[rstest]
    fn capacity_budget_follows_enable_flag(stops: StopSet) {
        let request = OptimizationRequest::new(stops, Algorithm::Greedy);
        assert_eq!(request.capacity_budget(), None);
        assert_eq!(request.with_capacity(0).capacity_budget(), Some(0));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_with_planner_defaults() {
        let request: OptimizationRequest = serde_json::from_str(
            r#"{ "stops": [{ "id": 0, "x": 0.0, "y": 0.0, "weight": 0 }] }"#,
        )
        .expect("request should parse");
        assert_eq!(request.algorithm, Algorithm::Greedy);
        assert!(!request.use_capacity_constraint);
        assert_eq!(request.capacity, DEFAULT_CAPACITY);
        assert_eq!(request.stops.len(), 1);
    }
}
