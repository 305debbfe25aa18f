//! Pre-populated fixture maps.
//!
//! - [`simple_line_map`] — length 8, black pawn at 2, white bishop at 5.
//! - [`simple_rect_map`] — 3x4, pawn at (1,1), bishop at (2,0), queen at (0,3).
//! - [`simple_hex_map`] — 3x4, pawn at (0,1), bishop at (-1,2), queen at (0,3).

use crate::piece;
use crate::GamePiece;
use tilemap_map::{
    create_line_map, create_rectangle_hex_map, create_rectangle_map, HexMap, LineMap, RectMap,
};

pub fn simple_line_map() -> LineMap<GamePiece> {
    let mut map = create_line_map(8);
    for (coord, p) in [(2, piece("pawn", "black")), (5, piece("bishop", "white"))] {
        map.set(coord, p).expect("fixture coordinate in bounds");
    }
    map
}

pub fn simple_rect_map() -> RectMap<GamePiece> {
    let mut map = create_rectangle_map(3, 4);
    for (coord, p) in [
        ((1, 1), piece("pawn", "black")),
        ((2, 0), piece("bishop", "white")),
        ((0, 3), piece("queen", "black")),
    ] {
        map.set(coord, p).expect("fixture coordinate in bounds");
    }
    map
}

pub fn simple_hex_map() -> HexMap<GamePiece> {
    let mut map = create_rectangle_hex_map(3, 4);
    for (coord, p) in [
        ((0, 1), piece("pawn", "black")),
        ((-1, 2), piece("bishop", "white")),
        ((0, 3), piece("queen", "black")),
    ] {
        map.set(coord, p).expect("fixture coordinate in bounds");
    }
    map
}
