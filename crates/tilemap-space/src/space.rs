//! The core `Space` trait.

use crate::error::SpaceError;
use smallvec::SmallVec;
use std::fmt;
use std::hash::Hash;
use tilemap_core::{AnyCoord, Direction, Topology};

/// Coordinate system of one map topology.
///
/// A map delegates every bounds, enumeration and neighbour question to
/// its space. Implementations are small value types; the map engine is
/// generic over them.
///
/// # Canonical order
///
/// [`tile_coords`](Self::tile_coords) yields every valid coordinate
/// exactly once, in the same order on every call, and
/// [`canonical_rank`](Self::canonical_rank) returns a coordinate's
/// position in that sequence. Maps store cells at those positions.
pub trait Space: fmt::Debug + Clone + 'static {
    /// The coordinate key of this topology.
    type Coord: Copy + Eq + Hash + fmt::Debug + Into<AnyCoord> + 'static;

    /// A unit step in one direction.
    type Offset: Copy + fmt::Debug + 'static;

    /// Shape and size of the space.
    fn topology(&self) -> Topology;

    /// Total number of tiles.
    fn cell_count(&self) -> usize {
        self.topology().cell_count()
    }

    /// Position of `coord` in the canonical ordering, or `None` if the
    /// coordinate is not part of the space.
    fn canonical_rank(&self, coord: Self::Coord) -> Option<usize>;

    /// Whether `coord` is part of the space.
    fn exists(&self, coord: Self::Coord) -> bool {
        self.canonical_rank(coord).is_some()
    }

    /// Like [`canonical_rank`](Self::canonical_rank) but failing with
    /// [`SpaceError::CoordOutOfBounds`] for a missing coordinate.
    fn check_bounds(&self, coord: Self::Coord) -> Result<usize, SpaceError> {
        self.canonical_rank(coord)
            .ok_or_else(|| SpaceError::CoordOutOfBounds {
                coord: coord.into(),
                topology: self.topology(),
            })
    }

    /// All coordinates in canonical order.
    fn tile_coords(&self) -> Box<dyn Iterator<Item = Self::Coord> + '_>;

    /// Coordinates on the boundary of the space.
    ///
    /// Boards too small to have an interior (any axis shorter than 3)
    /// report every coordinate.
    fn side_coords(&self) -> Box<dyn Iterator<Item = Self::Coord> + '_>;

    /// The direction table, in adjacency order.
    fn directions(&self) -> &'static [(Direction, Self::Offset)];

    /// Apply one offset to a coordinate. The result may lie outside the
    /// space.
    fn shift(&self, coord: Self::Coord, offset: Self::Offset) -> Self::Coord;

    /// Offset for `direction`, if this topology has that direction.
    fn offset(&self, direction: Direction) -> Option<Self::Offset> {
        self.directions()
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|&(_, offset)| offset)
    }

    /// In-bounds neighbours of `coord`, in direction-table order.
    fn neighbours(&self, coord: Self::Coord) -> SmallVec<[Self::Coord; 6]> {
        self.directions()
            .iter()
            .map(|&(_, offset)| self.shift(coord, offset))
            .filter(|&n| self.exists(n))
            .collect()
    }
}
