//! Dense pairwise distance table.

use courier_core::StopSet;

/// Row-major `n × n` matrix of leg distances.
#[derive(Debug, Clone)]
pub(crate) struct DistanceMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Precompute every pairwise distance of `stops`.
    pub(crate) fn from_stops(stops: &StopSet) -> Self {
        let size = stops.len();
        let cells = stops
            .iter()
            .flat_map(|from| stops.iter().map(move |to| from.distance_to(to)))
            .collect();
        Self { size, cells }
    }

    /// Distance from stop `from` to stop `to`.
    ///
    /// Out-of-range pairs read as unreachable.
    pub(crate) fn get(&self, from: usize, to: usize) -> f64 {
        if from >= self.size || to >= self.size {
            return f64::INFINITY;
        }
        self.cells
            .get(from * self.size + to)
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}
