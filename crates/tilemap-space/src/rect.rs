//! 2D cartesian grid with 4-connected neighbourhood (N/E/S/W).

use crate::space::Space;
use tilemap_core::{Direction, PairCoord, Topology, RECT_DIRECTIONS};

/// A two-dimensional cartesian grid.
///
/// Each tile has coordinate `(x, y)` where `0 <= x < width` and
/// `0 <= y < height`. Neighbours are the four cardinal directions; edge
/// tiles simply have fewer.
///
/// Canonical ordering is x-then-y: outer loop over x, inner loop over y.
///
/// # Examples
///
/// ```
/// use tilemap_space::{Rect, Space};
///
/// let rect = Rect::new(3, 4);
/// assert_eq!(rect.cell_count(), 12);
/// assert!(rect.exists((2, 3)));
/// assert!(!rect.exists((3, 1)));
///
/// // Corner has 2 neighbours, interior has 4.
/// assert_eq!(rect.neighbours((0, 0)).len(), 2);
/// assert_eq!(rect.neighbours((1, 1)).len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    width: u32,
    height: u32,
}

impl Rect {
    /// Create a `width * height` grid. Either dimension may be zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Too small on some axis to have interior tiles.
    fn is_degenerate(&self) -> bool {
        self.width < 3 || self.height < 3
    }
}

impl Space for Rect {
    type Coord = PairCoord;
    type Offset = PairCoord;

    fn topology(&self) -> Topology {
        Topology::Rectangle {
            width: self.width,
            height: self.height,
        }
    }

    fn canonical_rank(&self, (x, y): PairCoord) -> Option<usize> {
        let w = i64::from(self.width);
        let h = i64::from(self.height);
        if x < 0 || x >= w || y < 0 || y >= h {
            return None;
        }
        Some(x as usize * self.height as usize + y as usize)
    }

    fn tile_coords(&self) -> Box<dyn Iterator<Item = PairCoord> + '_> {
        let h = i64::from(self.height);
        Box::new((0..i64::from(self.width)).flat_map(move |x| (0..h).map(move |y| (x, y))))
    }

    fn side_coords(&self) -> Box<dyn Iterator<Item = PairCoord> + '_> {
        if self.is_degenerate() {
            return self.tile_coords();
        }
        let w = i64::from(self.width);
        let h = i64::from(self.height);
        // Full rows top and bottom, then the remaining column ends.
        let rows = (0..w).flat_map(move |x| [(x, 0), (x, h - 1)]);
        let cols = (1..h - 1).flat_map(move |y| [(0, y), (w - 1, y)]);
        Box::new(rows.chain(cols))
    }

    fn directions(&self) -> &'static [(Direction, PairCoord)] {
        &RECT_DIRECTIONS
    }

    fn shift(&self, (x, y): PairCoord, (dx, dy): PairCoord) -> PairCoord {
        (x.saturating_add(dx), y.saturating_add(dy))
    }
}
