//! Weighted stops and the ordered stop set a run operates on.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::distance;

/// A weighted point to visit.
///
/// Coordinates live in the Euclidean plane. `weight` is the load delivered
/// at the stop ("gift count"); the capacity filter budgets against it.
///
/// # Examples
/// ```
/// use courier_core::Stop;
///
/// let stop = Stop::at(7, 3.0, 4.0, 2);
/// assert_eq!(stop.id, 7);
/// assert_eq!(stop.weight, 2);
/// assert_eq!(stop.location.x, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stop {
    /// Opaque identifier assigned by the caller.
    pub id: u64,
    /// Planar position, flattened to `x`/`y` on the wire.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub location: Coord<f64>,
    /// Load delivered at this stop.
    #[cfg_attr(feature = "serde", serde(default, alias = "gifts"))]
    pub weight: u32,
}

impl Stop {
    /// Construct a stop from a coordinate.
    #[must_use]
    pub const fn new(id: u64, location: Coord<f64>, weight: u32) -> Self {
        Self {
            id,
            location,
            weight,
        }
    }

    /// Construct a stop from raw `x`/`y` values.
    #[must_use]
    pub const fn at(id: u64, x: f64, y: f64, weight: u32) -> Self {
        Self::new(id, Coord { x, y }, weight)
    }

    /// Euclidean distance to another stop.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance(self.location, other.location)
    }
}

/// Ordered stops for one optimisation run.
///
/// Index `0` is the depot. The order defines the index space used by every
/// algorithm and by the tours they return.
///
/// # Examples
/// ```
/// use courier_core::{Stop, StopSet};
///
/// let stops = StopSet::new(vec![
///     Stop::at(0, 0.0, 0.0, 0),
///     Stop::at(1, 3.0, 4.0, 5),
/// ]);
/// assert_eq!(stops.len(), 2);
/// assert_eq!(stops.depot().map(|s| s.id), Some(0));
/// assert!((stops.path_distance(&[0, 1]) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StopSet {
    stops: Vec<Stop>,
}

impl StopSet {
    /// Wrap an ordered list of stops.
    #[must_use]
    pub const fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Number of stops, depot included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the set has no stops at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The depot, if the set is non-empty.
    #[must_use]
    pub fn depot(&self) -> Option<&Stop> {
        self.stops.first()
    }

    /// Stop at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// Borrow the stops in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Stop] {
        &self.stops
    }

    /// Iterate over the stops in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Stop> {
        self.stops.iter()
    }

    /// Distance between the stops at `from` and `to`.
    ///
    /// Returns `None` when either index is out of range.
    #[must_use]
    pub fn leg(&self, from: usize, to: usize) -> Option<f64> {
        let a = self.stops.get(from)?;
        let b = self.stops.get(to)?;
        Some(a.distance_to(b))
    }

    /// Sum of consecutive leg distances along `path`.
    ///
    /// There is no return leg to the depot. Out-of-range indices contribute
    /// nothing, and paths shorter than two stops measure `+0.0`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "path length accumulates floating-point leg distances"
    )]
    pub fn path_distance(&self, path: &[usize]) -> f64 {
        path.windows(2)
            .filter_map(|pair| match pair {
                [from, to] => self.leg(*from, *to),
                _ => None,
            })
            .fold(0.0, |total, leg| total + leg)
    }

    /// Build a reduced set from `indices`, keeping their relative order.
    ///
    /// Indices that fall outside the set are ignored.
    #[must_use]
    pub fn subset(&self, indices: &[usize]) -> Self {
        indices
            .iter()
            .filter_map(|&index| self.stops.get(index).copied())
            .collect()
    }

    /// Sum of the weights of the stops at `indices`.
    #[must_use]
    pub fn total_weight(&self, indices: &[usize]) -> u64 {
        indices
            .iter()
            .filter_map(|&index| self.stops.get(index))
            .map(|stop| u64::from(stop.weight))
            .sum()
    }
}

impl From<Vec<Stop>> for StopSet {
    fn from(stops: Vec<Stop>) -> Self {
        Self::new(stops)
    }
}

impl FromIterator<Stop> for StopSet {
    fn from_iter<I: IntoIterator<Item = Stop>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StopSet {
    type Item = &'a Stop;
    type IntoIter = std::slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn line() -> StopSet {
        StopSet::new(vec![
            Stop::at(0, 0.0, 0.0, 0),
            Stop::at(1, 3.0, 4.0, 5),
            Stop::at(2, 6.0, 8.0, 5),
        ])
    }

    #[rstest]
    fn path_distance_sums_legs_without_return(line: StopSet) {
        assert!((line.path_distance(&[0, 1, 2]) - 10.0).abs() < 1e-12);
        assert!((line.path_distance(&[0, 2, 1]) - 15.0).abs() < 1e-12);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[1])]
    fn short_paths_have_zero_distance(line: StopSet, #[case] path: &[usize]) {
        let distance = line.path_distance(path);
        assert_eq!(distance.to_bits(), 0.0_f64.to_bits());
        assert!(!distance.is_sign_negative());
    }

    #[rstest]
    fn subset_preserves_relative_order(line: StopSet) {
        let reduced = line.subset(&[0, 2]);
        let ids: Vec<u64> = reduced.iter().map(|stop| stop.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[rstest]
    fn total_weight_sums_selected(line: StopSet) {
        assert_eq!(line.total_weight(&[1, 2]), 10);
        assert_eq!(line.total_weight(&[]), 0);
    }

    #[rstest]
    fn empty_set_has_no_depot() {
        assert!(StopSet::default().depot().is_none());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn stop_reads_flat_wire_shape_with_gift_alias() {
        let stop: Stop =
            serde_json::from_str(r#"{ "id": 4, "x": 1.5, "y": -2.0, "gifts": 3 }"#)
                .expect("stop should parse");
        assert_eq!(stop, Stop::at(4, 1.5, -2.0, 3));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn stop_writes_flat_wire_shape() {
        let value = serde_json::to_value(Stop::at(1, 3.0, 4.0, 5)).expect("serialise stop");
        assert_eq!(
            value,
            serde_json::json!({ "id": 1, "x": 3.0, "y": 4.0, "weight": 5 })
        );
    }
}
