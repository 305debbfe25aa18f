//! The generic tile map engine.

use crate::tracking::Tracker;
use tilemap_core::{Direction, Topology};
use tilemap_space::{Hex, Line, Rect, Space, SpaceError};

/// A map over a one-dimensional [`Line`].
pub type LineMap<T> = Map<Line, T>;
/// A map over a cartesian [`Rect`].
pub type RectMap<T> = Map<Rect, T>;
/// A map over a rhombus-shaped [`Hex`] board.
pub type HexMap<T> = Map<Hex, T>;

/// Tile storage over one topology.
///
/// Every coordinate of the space holds exactly one slot: `Some(content)`
/// or `None`, the empty sentinel. Shape and direction table are fixed at
/// construction.
///
/// # Tracking
///
/// [`track`](Self::track) gives the content at a coordinate a name.
/// The name follows that content through [`move_tile`](Self::move_tile)
/// and [`swap`](Self::swap). Once the content is overwritten by
/// [`set`](Self::set) or displaced by a move onto its coordinate, the
/// name's [`property`](Self::property) becomes absent for good; only a
/// fresh `track` call revives it.
///
/// # Examples
///
/// ```
/// use tilemap_map::create_line_map;
///
/// let mut map = create_line_map::<&str>(8);
/// map.set(5, "bishop").unwrap();
/// map.track(5, "bishop").unwrap();
///
/// map.move_tile(5, 4).unwrap();
/// assert_eq!(map.property("bishop"), Some(4));
///
/// map.set(4, "queen").unwrap();
/// assert_eq!(map.property("bishop"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Map<S: Space, T> {
    space: S,
    directions: &'static [(Direction, S::Offset)],
    cells: Vec<Option<T>>,
    tracker: Tracker<S::Coord>,
}

impl<S: Space, T> Map<S, T> {
    /// Create a map over `space` with every tile empty.
    pub fn new(space: S) -> Self {
        let cell_count = space.cell_count();
        let cells = std::iter::repeat_with(|| None).take(cell_count).collect();
        tracing::debug!(topology = %space.topology(), cell_count, "map created");
        Self {
            directions: space.directions(),
            space,
            cells,
            tracker: Tracker::new(),
        }
    }

    /// The coordinate system this map is bound to.
    pub fn space(&self) -> &S {
        &self.space
    }

    /// Shape and size of the map.
    pub fn topology(&self) -> Topology {
        self.space.topology()
    }

    /// Total number of tiles.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The direction table used for adjacency, in adjacency order.
    pub fn directions(&self) -> &'static [(Direction, S::Offset)] {
        self.directions
    }

    /// Whether `coord` is a tile of this map.
    pub fn exists(&self, coord: S::Coord) -> bool {
        self.space.exists(coord)
    }

    /// Content of the tile at `coord`; `None` for an empty tile.
    pub fn get(&self, coord: S::Coord) -> Result<Option<&T>, SpaceError> {
        let index = self.space.check_bounds(coord)?;
        Ok(self.cells[index].as_ref())
    }

    /// Write `content` (or `None` to empty the tile) at `coord` and return
    /// what was there before. A name tracking `coord` is invalidated.
    pub fn set(
        &mut self,
        coord: S::Coord,
        content: impl Into<Option<T>>,
    ) -> Result<Option<T>, SpaceError> {
        let index = self.space.check_bounds(coord)?;
        let previous = std::mem::replace(&mut self.cells[index], content.into());
        self.tracker.invalidate(coord);
        Ok(previous)
    }

    /// Every tile as `(coord, content)`, in the topology's canonical order.
    pub fn tiles(&self) -> impl Iterator<Item = (S::Coord, Option<&T>)> + '_ {
        // Cells are stored in canonical order, so the two line up.
        self.space
            .tile_coords()
            .zip(self.cells.iter().map(Option::as_ref))
    }

    /// Tiles on the boundary of the map. Boards too small to have an
    /// interior yield every tile.
    pub fn sides(&self) -> impl Iterator<Item = (S::Coord, Option<&T>)> + '_ {
        self.space
            .side_coords()
            .filter_map(move |coord| self.lookup(coord))
    }

    /// Existing neighbours of `coord` with their content, in
    /// direction-table order. Neighbours off the board are skipped.
    pub fn adjacent(
        &self,
        coord: S::Coord,
    ) -> Result<impl Iterator<Item = (S::Coord, Option<&T>)> + '_, SpaceError> {
        self.space.check_bounds(coord)?;
        Ok(self
            .directions
            .iter()
            .filter_map(move |&(_, offset)| self.lookup(self.space.shift(coord, offset))))
    }

    /// The neighbour of `coord` in one direction. `Ok(None)` when the
    /// direction is not part of this topology or points off the board.
    pub fn neighbour(
        &self,
        coord: S::Coord,
        direction: Direction,
    ) -> Result<Option<(S::Coord, Option<&T>)>, SpaceError> {
        self.space.check_bounds(coord)?;
        Ok(self
            .directions
            .iter()
            .find(|(d, _)| *d == direction)
            .and_then(|&(_, offset)| self.lookup(self.space.shift(coord, offset))))
    }

    /// Move the content at `start` to `end`, leaving `start` empty, and
    /// return the content displaced from `end`.
    ///
    /// Both coordinates are checked before anything changes. A name
    /// tracking `end` is invalidated; a name tracking `start` follows the
    /// content to `end`. Moving a tile onto itself keeps the content,
    /// returns `None` and invalidates any name tracking it.
    pub fn move_tile(
        &mut self,
        start: S::Coord,
        end: S::Coord,
    ) -> Result<Option<T>, SpaceError> {
        let from = self.space.check_bounds(start)?;
        let to = self.space.check_bounds(end)?;
        if from == to {
            self.tracker.invalidate(end);
            return Ok(None);
        }
        let content = self.cells[from].take();
        let displaced = std::mem::replace(&mut self.cells[to], content);
        self.tracker.invalidate(end);
        self.tracker.relocate(start, end);
        Ok(displaced)
    }

    /// Exchange the contents of `a` and `b`.
    ///
    /// Names travel with their content: a name tracking `a` ends up at
    /// `b` and vice versa, so swapping twice restores both content and
    /// tracking. Both coordinates are checked before anything changes.
    pub fn swap(&mut self, a: S::Coord, b: S::Coord) -> Result<(), SpaceError> {
        let i = self.space.check_bounds(a)?;
        let j = self.space.check_bounds(b)?;
        if i == j {
            return Ok(());
        }
        self.cells.swap(i, j);
        self.tracker.exchange(a, b);
        Ok(())
    }

    /// Track the content at `coord` under `name`.
    ///
    /// Re-tracking is last-write-wins: a name already live elsewhere is
    /// rebound to `coord`, and a different name already tracking `coord`
    /// is invalidated.
    pub fn track(&mut self, coord: S::Coord, name: impl Into<String>) -> Result<(), SpaceError> {
        self.space.check_bounds(coord)?;
        self.tracker.track(coord, name);
        Ok(())
    }

    /// Current coordinate of the content tracked as `name`. `None` if the
    /// name was never tracked or its content has been overwritten or
    /// displaced.
    pub fn property(&self, name: &str) -> Option<S::Coord> {
        self.tracker.property(name)
    }

    /// Whether `name` currently tracks some content. Invalidated names
    /// report `false`.
    pub fn is_tracked(&self, name: &str) -> bool {
        self.tracker.property(name).is_some()
    }

    /// Name tracking the content at `coord`, if any.
    pub fn tracked_name(&self, coord: S::Coord) -> Option<&str> {
        self.tracker.name_at(coord)
    }

    /// All tracked names with their coordinates, invalidated ones
    /// included, in first-registration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, Option<S::Coord>)> + '_ {
        self.tracker.properties()
    }

    /// The tracking table.
    pub fn tracker(&self) -> &Tracker<S::Coord> {
        &self.tracker
    }

    fn lookup(&self, coord: S::Coord) -> Option<(S::Coord, Option<&T>)> {
        self.space
            .canonical_rank(coord)
            .map(|index| (coord, self.cells[index].as_ref()))
    }
}
