//! Tour-construction strategies a caller can pick between.
//!
//! # Examples
//! ```
//! use courier_core::Algorithm;
//!
//! assert_eq!(Algorithm::HeldKarp.as_str(), "held-karp");
//! assert_eq!("exact".parse::<Algorithm>(), Ok(Algorithm::HeldKarp));
//! assert_eq!(Algorithm::Greedy.to_string(), "greedy");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tour algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Nearest-neighbour heuristic.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "greedy"))]
    Greedy,
    /// Exact Held-Karp dynamic programme with a greedy fallback.
    #[cfg_attr(feature = "serde", serde(rename = "held-karp", alias = "exact"))]
    HeldKarp,
}

impl Algorithm {
    /// Every algorithm, in comparison order.
    pub const ALL: [Self; 2] = [Self::Greedy, Self::HeldKarp];

    /// Machine-readable name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::HeldKarp => "held-karp",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Greedy => "Greedy Nearest Neighbour",
            Self::HeldKarp => "Dynamic Programming (Held-Karp)",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected 'greedy' or 'held-karp')")]
pub struct ParseAlgorithmError(pub String);

impl std::str::FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "held-karp" | "heldkarp" | "exact" => Ok(Self::HeldKarp),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}
