//! Shape descriptors for the three supported topologies.

use std::fmt;

/// The shape a map was constructed with.
///
/// A map's topology is fixed for its whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// A one-dimensional row of `length` slots.
    Line {
        /// Number of slots.
        length: u32,
    },
    /// A cartesian `width * height` grid.
    Rectangle {
        /// Number of columns (`x` extent).
        width: u32,
        /// Number of rows (`y` extent).
        height: u32,
    },
    /// A rhombus-shaped axial hex board of `width * height` tiles.
    Hex {
        /// Tiles per row.
        width: u32,
        /// Number of rows.
        height: u32,
    },
}

impl Topology {
    /// Total number of tiles.
    pub fn cell_count(&self) -> usize {
        match *self {
            Self::Line { length } => length as usize,
            Self::Rectangle { width, height } | Self::Hex { width, height } => {
                width as usize * height as usize
            }
        }
    }

    /// Short lowercase name of the topology kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Rectangle { .. } => "rectangle",
            Self::Hex { .. } => "hex",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line { length } => write!(f, "line of {length} (i in [0, {length}))"),
            Self::Rectangle { width, height } => write!(
                f,
                "rectangle {width}x{height} (x in [0, {width}), y in [0, {height}))"
            ),
            Self::Hex { width, height } => write!(
                f,
                "hex {width}x{height} (r in [0, {height}), q in [-(r+1)/2, {width} - (r+1)/2))"
            ),
        }
    }
}
