//! Rhombus-shaped hex board with axial coordinates.

use crate::space::Space;
use tilemap_core::{Direction, PairCoord, Topology, HEX_DIRECTIONS};

/// A hex board laid out as a rhombus in axial coordinates.
///
/// Each tile has coordinate `(q, r)` with `0 <= r < height`. Successive
/// rows are shifted by half a tile, alternating, so row `r` starts at
/// `q = -row_offset(r)` where `row_offset(r) = (r + 1) / 2`, and holds
/// `width` tiles. The board drawn for `width = 3, height = 4`:
///
/// ```text
///     (0,0)  (1,0)  (2,0)
/// (-1,1) (0,1)  (1,1)
///    (-1,2) (0,2)  (1,2)
/// (-2,3) (-1,3) (0,3)
/// ```
///
/// Neighbours are the six axial directions NE, E, SE, SW, W, NW.
/// Canonical ordering is r-then-q: outer loop over r, inner loop over q.
///
/// # Examples
///
/// ```
/// use tilemap_space::{Hex, Space};
///
/// let hex = Hex::new(3, 4);
/// assert_eq!(hex.cell_count(), 12);
/// assert!(hex.exists((2, 0)));
/// assert!(hex.exists((-2, 3)));
/// assert!(!hex.exists((-3, 3)));
///
/// // Interior tile has 6 neighbours.
/// assert_eq!(hex.neighbours((0, 1)).len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hex {
    width: u32,
    height: u32,
}

impl Hex {
    /// Create a board of `height` rows with `width` tiles each. Either
    /// dimension may be zero.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Tiles per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Horizontal shift of row `r`: `q` starts at `-row_offset(r)`.
    pub fn row_offset(r: i64) -> i64 {
        (r + 1).div_euclid(2)
    }

    /// Valid `q` range of row `r`, or `None` if `r` is not a row.
    pub fn row_bounds(&self, r: i64) -> Option<std::ops::Range<i64>> {
        if r < 0 || r >= i64::from(self.height) {
            return None;
        }
        let offset = Self::row_offset(r);
        Some(-offset..i64::from(self.width) - offset)
    }

    fn is_degenerate(&self) -> bool {
        self.width < 3 || self.height < 3
    }
}

impl Space for Hex {
    type Coord = PairCoord;
    type Offset = PairCoord;

    fn topology(&self) -> Topology {
        Topology::Hex {
            width: self.width,
            height: self.height,
        }
    }

    fn canonical_rank(&self, (q, r): PairCoord) -> Option<usize> {
        let bounds = self.row_bounds(r)?;
        if !bounds.contains(&q) {
            return None;
        }
        let column = (q - bounds.start) as usize;
        Some(r as usize * self.width as usize + column)
    }

    fn tile_coords(&self) -> Box<dyn Iterator<Item = PairCoord> + '_> {
        let w = i64::from(self.width);
        Box::new((0..i64::from(self.height)).flat_map(move |r| {
            let offset = Self::row_offset(r);
            (-offset..w - offset).map(move |q| (q, r))
        }))
    }

    fn side_coords(&self) -> Box<dyn Iterator<Item = PairCoord> + '_> {
        if self.is_degenerate() {
            return self.tile_coords();
        }
        let w = i64::from(self.width);
        let last = i64::from(self.height) - 1;
        let last_offset = Self::row_offset(last);
        // Top and bottom rows column by column, then the row ends between.
        let rows = (0..w).flat_map(move |i| [(i, 0), (i - last_offset, last)]);
        let ends = (1..last).flat_map(move |r| {
            let offset = Self::row_offset(r);
            [(-offset, r), (w - 1 - offset, r)]
        });
        Box::new(rows.chain(ends))
    }

    fn directions(&self) -> &'static [(Direction, PairCoord)] {
        &HEX_DIRECTIONS
    }

    fn shift(&self, (q, r): PairCoord, (dq, dr): PairCoord) -> PairCoord {
        (q.saturating_add(dq), r.saturating_add(dr))
    }
}
