//! Capacity-constrained stop selection.
//!
//! A 0/1 knapsack where every stop is worth exactly one: the selector keeps
//! as many stops as possible whose combined weight fits the budget. Weight
//! is a cost only, so many light stops always beat fewer heavy ones.

use courier_core::{CapacitySelection, StopSet};

/// Select the largest number of stops whose weights fit in `capacity`.
///
/// The table row for stop `i` holds, per residual budget, the most stops
/// selectable from the first `i`. A stop is taken only when it fits and
/// strictly improves on skipping it. The selection is recovered by walking
/// the rows backwards from the full budget; `selected` and `skipped` come
/// back in ascending index order.
///
/// Time and space are `O(n · capacity)`; callers bound `capacity` first
/// (see [`courier_core::MAX_CAPACITY`]).
///
/// # Examples
/// ```
/// use courier_core::{Stop, StopSet};
/// use courier_solver::select_within_capacity;
///
/// let stops = StopSet::new(vec![
///     Stop::at(0, 0.0, 0.0, 0),
///     Stop::at(1, 3.0, 4.0, 5),
///     Stop::at(2, 6.0, 8.0, 5),
/// ]);
/// let selection = select_within_capacity(&stops, 5);
/// assert_eq!(selection.selected, vec![0, 1]);
/// assert_eq!(selection.skipped, vec![2]);
/// assert_eq!(selection.total_weight, 5);
/// ```
#[must_use]
pub fn select_within_capacity(stops: &StopSet, capacity: u32) -> CapacitySelection {
    let n = stops.len();
    let budget = capacity as usize;
    let rows = fill_rows(stops, budget);

    let mut selected = Vec::new();
    let mut residual = budget;
    for (index, pair) in rows.windows(2).enumerate().rev() {
        let [above, here] = pair else {
            continue;
        };
        if here.get(residual) != above.get(residual) {
            selected.push(index);
            let weight = stops.get(index).map_or(0, |stop| stop.weight as usize);
            residual = residual.saturating_sub(weight);
        }
    }
    selected.reverse();

    let mut is_selected = vec![false; n];
    for &index in &selected {
        if let Some(flag) = is_selected.get_mut(index) {
            *flag = true;
        }
    }
    let skipped = is_selected
        .iter()
        .enumerate()
        .filter_map(|(index, &kept)| (!kept).then_some(index))
        .collect();
    let total_weight = stops.total_weight(&selected);

    log::debug!(
        "capacity {capacity} keeps {} of {n} stops (weight {total_weight})",
        selected.len()
    );

    CapacitySelection {
        selected,
        skipped,
        total_weight,
    }
}

/// Build the `(n + 1) × (budget + 1)` count table, one row per stop prefix.
fn fill_rows(stops: &StopSet, budget: usize) -> Vec<Vec<u32>> {
    let mut rows: Vec<Vec<u32>> = Vec::with_capacity(stops.len() + 1);
    rows.push(vec![0; budget + 1]);

    for stop in stops {
        let Some(above) = rows.last() else {
            break;
        };
        let weight = stop.weight as usize;
        let row = (0..=budget)
            .map(|residual| {
                let skip = above.get(residual).copied().unwrap_or(0);
                let take = residual
                    .checked_sub(weight)
                    .and_then(|rest| above.get(rest))
                    .map(|count| count + 1);
                match take {
                    Some(count) if count > skip => count,
                    _ => skip,
                }
            })
            .collect();
        rows.push(row);
    }

    rows
}
