//! Coordinate types shared across topologies.

use std::fmt;

/// A two-component integer coordinate.
///
/// Rectangle maps read it as cartesian `(x, y)`; hex maps read it as
/// axial `(q, r)`.
pub type PairCoord = (i64, i64);

/// A coordinate with its topology erased.
///
/// Only used where a coordinate has to travel outside its own topology,
/// such as inside an out-of-bounds error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnyCoord {
    /// A line position.
    Single(i64),
    /// A rectangle `(x, y)` or hex `(q, r)` position.
    Pair(i64, i64),
}

impl From<i64> for AnyCoord {
    fn from(i: i64) -> Self {
        Self::Single(i)
    }
}

impl From<PairCoord> for AnyCoord {
    fn from((a, b): PairCoord) -> Self {
        Self::Pair(a, b)
    }
}

impl fmt::Display for AnyCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(i) => write!(f, "{i}"),
            Self::Pair(a, b) => write!(f, "({a}, {b})"),
        }
    }
}
