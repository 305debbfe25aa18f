//! Benchmark helpers for tilemap.
//!
//! Builds densely populated maps so the benches measure lookups rather
//! than empty-slot shortcuts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]

use tilemap_map::{create_line_map, create_rectangle_hex_map, create_rectangle_map};
use tilemap_map::{HexMap, LineMap, RectMap};
use tilemap_space::Space;

/// A `len`-slot line with every slot holding its own index.
pub fn filled_line(len: u32) -> LineMap<u64> {
    let mut map = create_line_map(len);
    let coords: Vec<_> = map.space().tile_coords().collect();
    for (i, c) in coords.into_iter().enumerate() {
        map.set(c, i as u64).expect("tile_coords are in bounds");
    }
    map
}

/// A `width * height` rectangle with every tile filled.
pub fn filled_rect(width: u32, height: u32) -> RectMap<u64> {
    let mut map = create_rectangle_map(width, height);
    let coords: Vec<_> = map.space().tile_coords().collect();
    for (i, c) in coords.into_iter().enumerate() {
        map.set(c, i as u64).expect("tile_coords are in bounds");
    }
    map
}

/// A `width * height` hex board with every tile filled.
pub fn filled_hex(width: u32, height: u32) -> HexMap<u64> {
    let mut map = create_rectangle_hex_map(width, height);
    let coords: Vec<_> = map.space().tile_coords().collect();
    for (i, c) in coords.into_iter().enumerate() {
        map.set(c, i as u64).expect("tile_coords are in bounds");
    }
    map
}
