//! Planar distance model shared by every tour algorithm.

use geo::Coord;

/// Euclidean distance between two planar coordinates.
///
/// The function is symmetric, returns zero only for coincident points and
/// never allocates; solvers call it `O(n²)` times per run.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use courier_core::distance;
///
/// let d = distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance is defined over floating-point coordinates"
)]
pub fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coord(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[rstest]
    #[case(coord(0.0, 0.0), coord(3.0, 4.0), 5.0)]
    #[case(coord(3.0, 4.0), coord(6.0, 8.0), 5.0)]
    #[case(coord(-1.0, -1.0), coord(-1.0, 2.0), 3.0)]
    #[case(coord(2.5, 2.5), coord(2.5, 2.5), 0.0)]
    fn computes_euclidean_length(#[case] a: Coord<f64>, #[case] b: Coord<f64>, #[case] want: f64) {
        assert!((distance(a, b) - want).abs() < 1e-12);
    }

    #[rstest]
    fn is_symmetric() {
        let a = coord(1.25, -7.5);
        let b = coord(-3.0, 4.75);
        assert_eq!(distance(a, b).to_bits(), distance(b, a).to_bits());
    }

    #[rstest]
    fn satisfies_triangle_inequality() {
        let a = coord(0.0, 0.0);
        let b = coord(10.0, 1.0);
        let c = coord(4.0, 9.0);
        assert!(distance(a, c) <= distance(a, b) + distance(b, c) + 1e-12);
    }
}
