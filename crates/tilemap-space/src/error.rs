//! Error types for coordinate lookups.

use std::fmt;
use tilemap_core::{AnyCoord, Topology};

/// Errors arising from map and space operations.
///
/// Every fallible operation fails the same way: the caller supplied a
/// coordinate the topology does not contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: AnyCoord,
        /// Shape of the space that rejected it.
        topology: Topology,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, topology } => {
                write!(f, "coordinate {coord} outside tilemap bounds: {topology}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
