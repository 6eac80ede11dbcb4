//! Nearest-neighbour tour construction.

use std::time::Instant;

use courier_core::{Algorithm, OptimizationResult, StopSet, Tour, TourSolver};

/// Greedy heuristic that always moves to the closest unvisited stop.
///
/// Runs in `O(n²)`. Distance ties go to the lowest index.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighbour;

impl TourSolver for NearestNeighbour {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Greedy
    }

    fn solve(&self, stops: &StopSet) -> OptimizationResult {
        nearest_neighbour(stops)
    }
}

/// Build a nearest-neighbour tour starting at the depot.
///
/// `steps_checked` counts every candidate index examined by the inner scan,
/// visited or not, so the counter is `(n - 1) · n` for `n` stops.
///
/// # Examples
/// ```
/// use courier_core::{Stop, StopSet};
/// use courier_solver::nearest_neighbour;
///
/// let stops = StopSet::new(vec![
///     Stop::at(0, 0.0, 0.0, 0),
///     Stop::at(1, 6.0, 8.0, 5),
///     Stop::at(2, 3.0, 4.0, 5),
/// ]);
/// let result = nearest_neighbour(&stops);
/// assert_eq!(result.tour.as_slice(), &[0, 2, 1]);
/// assert_eq!(result.steps_checked, 6);
/// ```
#[must_use]
pub fn nearest_neighbour(stops: &StopSet) -> OptimizationResult {
    let started_at = Instant::now();
    let n = stops.len();
    if n == 0 {
        return OptimizationResult::empty();
    }

    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n);
    let mut current = 0_usize;
    let mut steps_checked = 0_u64;
    mark_visited(&mut visited, current);
    path.push(current);

    for _ in 1..n {
        let mut nearest: Option<(usize, f64)> = None;
        for (candidate, &seen) in visited.iter().enumerate() {
            steps_checked += 1;
            if seen {
                continue;
            }
            let leg = stops.leg(current, candidate).unwrap_or(f64::INFINITY);
            if nearest.is_none_or(|(_, best)| leg < best) {
                nearest = Some((candidate, leg));
            }
        }

        if let Some((next, _)) = nearest {
            mark_visited(&mut visited, next);
            path.push(next);
            current = next;
        }
    }

    let total_distance = stops.path_distance(&path);
    log::debug!("nearest-neighbour tour over {n} stops checked {steps_checked} candidates");

    OptimizationResult {
        tour: Tour::new(path),
        total_distance,
        computation_time: started_at.elapsed(),
        steps_checked,
        capacity: None,
    }
}

fn mark_visited(visited: &mut [bool], index: usize) {
    if let Some(slot) = visited.get_mut(index) {
        *slot = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::Stop;
    use rstest::rstest;

    #[rstest]
    fn empty_set_yields_empty_result() {
        let result = nearest_neighbour(&StopSet::default());
        assert!(result.tour.is_empty());
        assert_eq!(result.steps_checked, 0);
        assert_eq!(result.total_distance, 0.0);
        assert!(result.capacity.is_none());
    }

    #[rstest]
    fn single_stop_stays_at_depot() {
        let stops = StopSet::new(vec![Stop::at(0, 2.0, 2.0, 1)]);
        let result = nearest_neighbour(&stops);
        assert_eq!(result.tour.as_slice(), &[0]);
        assert_eq!(result.total_distance.to_bits(), 0.0_f64.to_bits());
        assert!(!result.total_distance.is_sign_negative());
        assert_eq!(result.steps_checked, 0);
    }

    #[rstest]
    fn follows_closest_unvisited_stop() {
        let stops = StopSet::new(vec![
            Stop::at(0, 0.0, 0.0, 0),
            Stop::at(1, 10.0, 0.0, 1),
            Stop::at(2, 1.0, 0.0, 1),
            Stop::at(3, 4.0, 0.0, 1),
        ]);
        let result = nearest_neighbour(&stops);
        assert_eq!(result.tour.as_slice(), &[0, 2, 3, 1]);
        assert!((result.total_distance - 10.0).abs() < 1e-12);
    }

    #[rstest]
    fn ties_go_to_lowest_index() {
        let stops = StopSet::new(vec![
            Stop::at(0, 0.0, 0.0, 0),
            Stop::at(1, -1.0, 0.0, 1),
            Stop::at(2, 1.0, 0.0, 1),
        ]);
        let result = nearest_neighbour(&stops);
        assert_eq!(result.tour.as_slice(), &[0, 1, 2]);
    }

    #[rstest]
    #[case(2, 2)]
    #[case(3, 6)]
    #[case(5, 20)]
    fn counts_every_inner_scan_iteration(#[case] n: usize, #[case] expected: u64) {
        let stops: StopSet = (0_u32..)
            .take(n)
            .map(|i| Stop::at(u64::from(i), f64::from(i), 0.0, 1))
            .collect();
        assert_eq!(nearest_neighbour(&stops).steps_checked, expected);
    }
}
