//! Compass directions and the per-topology offset tables.
//!
//! Each table lists `(direction, offset)` pairs in the order adjacency
//! queries report neighbours. The tables are the only place unit offsets
//! are defined.

use crate::coord::PairCoord;
use std::fmt;

/// One of the eight compass directions.
///
/// No topology uses all eight: lines use [`LEFT`](Self::LEFT) and
/// [`RIGHT`](Self::RIGHT), rectangles the four cardinals, hexes the six
/// directions other than north and south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards decreasing `y` (rectangle).
    North,
    /// Up and to the right (hex).
    NorthEast,
    /// Towards increasing `x` or `q`.
    East,
    /// Down and to the right (hex).
    SouthEast,
    /// Towards increasing `y` (rectangle).
    South,
    /// Down and to the left (hex).
    SouthWest,
    /// Towards decreasing `x` or `q`.
    West,
    /// Up and to the left (hex).
    NorthWest,
}

impl Direction {
    /// Towards the start of a line.
    pub const LEFT: Self = Self::West;
    /// Towards the end of a line.
    pub const RIGHT: Self = Self::East;
    /// Short alias for [`NorthEast`](Self::NorthEast).
    pub const NE: Self = Self::NorthEast;
    /// Short alias for [`NorthWest`](Self::NorthWest).
    pub const NW: Self = Self::NorthWest;
    /// Short alias for [`SouthEast`](Self::SouthEast).
    pub const SE: Self = Self::SouthEast;
    /// Short alias for [`SouthWest`](Self::SouthWest).
    pub const SW: Self = Self::SouthWest;

    /// All eight directions, clockwise from north.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        };
        f.write_str(name)
    }
}

/// Line offsets: left, right.
pub const LINE_DIRECTIONS: [(Direction, i64); 2] = [(Direction::LEFT, -1), (Direction::RIGHT, 1)];

/// Rectangle offsets in `(dx, dy)` order: N, E, S, W. No diagonals.
pub const RECT_DIRECTIONS: [(Direction, PairCoord); 4] = [
    (Direction::North, (0, -1)),
    (Direction::East, (1, 0)),
    (Direction::South, (0, 1)),
    (Direction::West, (-1, 0)),
];

/// Axial hex offsets in `(dq, dr)` order: NE, E, SE, SW, W, NW.
pub const HEX_DIRECTIONS: [(Direction, PairCoord); 6] = [
    (Direction::NE, (1, -1)),
    (Direction::East, (1, 0)),
    (Direction::SE, (0, 1)),
    (Direction::SW, (-1, 1)),
    (Direction::West, (-1, 0)),
    (Direction::NW, (0, -1)),
];
