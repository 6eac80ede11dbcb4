//! Visitation order produced by a tour algorithm.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered stop indices starting at the depot.
///
/// A tour built over `n` stops is a permutation of `0..n` whose first entry
/// is `0`. There is no return leg.
///
/// # Examples
/// ```
/// use courier_core::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1]);
/// assert!(tour.is_permutation_of(3));
/// assert_eq!(tour.as_slice(), &[0, 2, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wrap an ordered list of indices.
    #[must_use]
    pub const fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// The empty tour.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of visits.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the tour visits nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Borrow the indices in visiting order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Consume the tour, returning its indices.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }

    /// Iterate over the indices in visiting order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.order.iter()
    }

    /// Whether the tour starts at the depot and visits each of `0..n`
    /// exactly once.
    #[must_use]
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        if n > 0 && self.order.first() != Some(&0) {
            return false;
        }
        let mut seen = vec![false; n];
        self.order.iter().all(|&index| match seen.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        })
    }
}

impl From<Vec<usize>> for Tour {
    fn from(order: Vec<usize>) -> Self {
        Self::new(order)
    }
}
