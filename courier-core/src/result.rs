//! Outcome of an optimisation run and its capacity metadata.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Tour;

/// Stops chosen by the capacity filter.
///
/// `selected` and `skipped` are ascending, disjoint, and together cover
/// every index of the original stop set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacitySelection {
    /// Original indices kept under the budget.
    pub selected: Vec<usize>,
    /// Original indices left out.
    pub skipped: Vec<usize>,
    /// Sum of the selected weights.
    pub total_weight: u64,
}

impl CapacitySelection {
    /// Selection that keeps nothing out of `n` stops.
    #[must_use]
    pub fn none_of(n: usize) -> Self {
        Self {
            selected: Vec::new(),
            skipped: (0..n).collect(),
            total_weight: 0,
        }
    }
}

/// Result of a single optimisation run.
///
/// When `capacity` is present the tour indexes into `capacity.selected`
/// rather than the original stop set; use [`resolve_path`] to map it back.
///
/// Serialises to the flat `path`/`distance`/`computationTime`/`stepsChecked`
/// shape, with `selectedHouses`/`skippedHouses`/`totalWeight` added when a
/// capacity filter ran.
///
/// [`resolve_path`]: OptimizationResult::resolve_path
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "wire::ResultPayload", from = "wire::ResultPayload")
)]
pub struct OptimizationResult {
    /// Visiting order.
    pub tour: Tour,
    /// Length of the tour, without a return leg.
    pub total_distance: f64,
    /// Wall-clock time spent building the tour.
    pub computation_time: Duration,
    /// Work counter for cross-algorithm comparison.
    pub steps_checked: u64,
    /// Metadata from the capacity filter, when it ran.
    pub capacity: Option<CapacitySelection>,
}

impl OptimizationResult {
    /// Result with an empty tour and zeroed counters.
    ///
    /// # Examples
    /// ```
    /// use courier_core::OptimizationResult;
    ///
    /// let result = OptimizationResult::empty();
    /// assert!(result.tour.is_empty());
    /// assert_eq!(result.steps_checked, 0);
    /// assert!(result.capacity.is_none());
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach capacity filter metadata.
    #[must_use]
    pub fn with_capacity(mut self, selection: CapacitySelection) -> Self {
        self.capacity = Some(selection);
        self
    }

    /// Tour expressed in original stop-set indices.
    ///
    /// Without capacity metadata the tour is returned as-is. With it, every
    /// tour index is looked up in `selected`; indices with no counterpart
    /// are dropped.
    ///
    /// # Examples
    /// ```
    /// use courier_core::{CapacitySelection, OptimizationResult, Tour};
    ///
    /// let result = OptimizationResult {
    ///     tour: Tour::new(vec![0, 2, 1]),
    ///     ..OptimizationResult::empty()
    /// }
    /// .with_capacity(CapacitySelection {
    ///     selected: vec![0, 3, 4],
    ///     skipped: vec![1, 2],
    ///     total_weight: 9,
    /// });
    /// assert_eq!(result.resolve_path(), vec![0, 4, 3]);
    /// ```
    #[must_use]
    pub fn resolve_path(&self) -> Vec<usize> {
        match &self.capacity {
            None => self.tour.as_slice().to_vec(),
            Some(selection) => self
                .tour
                .iter()
                .filter_map(|&index| selection.selected.get(index).copied())
                .collect(),
        }
    }
}

#[cfg(feature = "serde")]
mod wire {
    use std::time::Duration;

    use serde::{Deserialize, Serialize};

    use super::{CapacitySelection, OptimizationResult};
    use crate::Tour;

    /// Flat wire representation of [`OptimizationResult`].
    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub(super) struct ResultPayload {
        path: Vec<usize>,
        distance: f64,
        computation_time: f64,
        steps_checked: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selected_houses: Option<Vec<usize>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        skipped_houses: Option<Vec<usize>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_weight: Option<u64>,
    }

    impl From<OptimizationResult> for ResultPayload {
        fn from(result: OptimizationResult) -> Self {
            let (selected_houses, skipped_houses, total_weight) = match result.capacity {
                Some(selection) => (
                    Some(selection.selected),
                    Some(selection.skipped),
                    Some(selection.total_weight),
                ),
                None => (None, None, None),
            };
            Self {
                path: result.tour.into_vec(),
                distance: result.total_distance,
                computation_time: result.computation_time.as_secs_f64(),
                steps_checked: result.steps_checked,
                selected_houses,
                skipped_houses,
                total_weight,
            }
        }
    }

    impl From<ResultPayload> for OptimizationResult {
        fn from(payload: ResultPayload) -> Self {
            let capacity = payload
                .selected_houses
                .map(|selected| CapacitySelection {
                    selected,
                    skipped: payload.skipped_houses.unwrap_or_default(),
                    total_weight: payload.total_weight.unwrap_or(0),
                });
            Self {
                tour: Tour::new(payload.path),
                total_distance: payload.distance,
                computation_time: Duration::try_from_secs_f64(payload.computation_time)
                    .unwrap_or_default(),
                steps_checked: payload.steps_checked,
                capacity,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn none_of_skips_everything() {
        let selection = CapacitySelection::none_of(3);
        assert!(selection.selected.is_empty());
        assert_eq!(selection.skipped, vec![0, 1, 2]);
        assert_eq!(selection.total_weight, 0);
    }

    #[rstest]
    fn resolve_path_is_identity_without_capacity() {
        let result = OptimizationResult {
            tour: Tour::new(vec![0, 2, 1]),
            ..OptimizationResult::empty()
        };
        assert_eq!(result.resolve_path(), vec![0, 2, 1]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_flat_shape_without_capacity_fields() {
        let result = OptimizationResult {
            tour: Tour::new(vec![0, 1, 2]),
            total_distance: 10.0,
            computation_time: Duration::from_millis(250),
            steps_checked: 7,
            capacity: None,
        };
        let value = serde_json::to_value(&result).expect("serialise result");
        assert_eq!(
            value,
            serde_json::json!({
                "path": [0, 1, 2],
                "distance": 10.0,
                "computationTime": 0.25,
                "stepsChecked": 7,
            })
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_capacity_metadata_as_house_lists() {
        let result = OptimizationResult::empty().with_capacity(CapacitySelection {
            selected: Vec::new(),
            skipped: vec![0, 1],
            total_weight: 0,
        });
        let value = serde_json::to_value(&result).expect("serialise result");
        assert_eq!(value["selectedHouses"], serde_json::json!([]));
        assert_eq!(value["skippedHouses"], serde_json::json!([0, 1]));
        assert_eq!(value["totalWeight"], serde_json::json!(0));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn reads_payload_emitted_by_consumers() {
        let result: OptimizationResult = serde_json::from_str(
            r#"{
                "path": [0, 1],
                "distance": 5.0,
                "computationTime": 0.5,
                "stepsChecked": 3,
                "selectedHouses": [0, 2],
                "skippedHouses": [1],
                "totalWeight": 5
            }"#,
        )
        .expect("payload should parse");
        assert_eq!(result.computation_time, Duration::from_millis(500));
        assert_eq!(result.resolve_path(), vec![0, 2]);
        assert_eq!(
            result.capacity.map(|selection| selection.skipped),
            Some(vec![1])
        );
    }
}
