//! Constructors for ready-to-use maps.
//!
//! These are the only entry points that create a map of a given shape.
//! The content type is chosen by the caller.

use crate::map::{HexMap, LineMap, Map, RectMap};
use tilemap_space::{Hex, Line, Rect};

/// A line of `length` empty slots, coordinates `0..length`.
pub fn create_line_map<T>(length: u32) -> LineMap<T> {
    Map::new(Line::new(length))
}

/// A cartesian `width * height` map of empty tiles, coordinates `(x, y)`.
pub fn create_rectangle_map<T>(width: u32, height: u32) -> RectMap<T> {
    Map::new(Rect::new(width, height))
}

/// A rhombus-shaped axial hex map of `width * height` empty tiles,
/// coordinates `(q, r)`. See [`Hex`] for the layout.
pub fn create_rectangle_hex_map<T>(width: u32, height: u32) -> HexMap<T> {
    Map::new(Hex::new(width, height))
}
