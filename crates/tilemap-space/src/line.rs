//! 1D line of slots.

use crate::space::Space;
use tilemap_core::{Direction, Topology, LINE_DIRECTIONS};

/// A one-dimensional line of tiles.
///
/// Each tile has coordinate `i` where `0 <= i < len`. Neighbours are the
/// slots immediately left and right; the ends have only one.
///
/// # Examples
///
/// ```
/// use tilemap_space::{Line, Space};
///
/// let line = Line::new(5);
/// assert_eq!(line.cell_count(), 5);
/// assert!(line.exists(4));
/// assert!(!line.exists(5));
///
/// // End slots have one neighbour, interior slots two.
/// assert_eq!(line.neighbours(0).as_slice(), &[1]);
/// assert_eq!(line.neighbours(2).as_slice(), &[1, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    len: u32,
}

impl Line {
    /// Create a line with `len` slots. A zero-length line is valid and
    /// contains no coordinates.
    pub fn new(len: u32) -> Self {
        Self { len }
    }

    /// Number of slots.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Whether the line has no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Space for Line {
    type Coord = i64;
    type Offset = i64;

    fn topology(&self) -> Topology {
        Topology::Line { length: self.len }
    }

    fn canonical_rank(&self, coord: i64) -> Option<usize> {
        (0..i64::from(self.len))
            .contains(&coord)
            .then_some(coord as usize)
    }

    fn tile_coords(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        Box::new(0..i64::from(self.len))
    }

    fn side_coords(&self) -> Box<dyn Iterator<Item = i64> + '_> {
        let len = i64::from(self.len);
        if len < 3 {
            return self.tile_coords();
        }
        Box::new([0, len - 1].into_iter())
    }

    fn directions(&self) -> &'static [(Direction, i64)] {
        &LINE_DIRECTIONS
    }

    fn shift(&self, coord: i64, offset: i64) -> i64 {
        coord.saturating_add(offset)
    }
}
