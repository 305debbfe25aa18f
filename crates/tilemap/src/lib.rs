//! Tilemap: coordinate-indexed tile storage for board and tile games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all tilemap sub-crates. For most users, adding `tilemap` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tilemap::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Piece(&'static str);
//!
//! let mut board = create_rectangle_hex_map::<Piece>(3, 4);
//! board.set((0, 1), Piece("pawn")).unwrap();
//! board.track((0, 1), "pawn").unwrap();
//!
//! // Step the pawn south-west and follow it by name.
//! board.move_tile((0, 1), (-1, 2)).unwrap();
//! assert_eq!(board.property("pawn"), Some((-1, 2)));
//!
//! // Off-board coordinates are rejected.
//! assert!(board.get((-3, 3)).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tilemap-core` | Coordinates, directions, topology descriptors |
//! | [`space`] | `tilemap-space` | The `Space` trait and Line/Rect/Hex backends |
//! | [`map`] | `tilemap-map` | The `Map` engine, tracking, factory functions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`tilemap-core`).
///
/// Contains [`types::Direction`] and its per-topology tables,
/// [`types::Topology`], and [`types::AnyCoord`].
pub use tilemap_core as types;

/// Coordinate systems (`tilemap-space`).
///
/// Provides the [`space::Space`] trait and its backends:
/// [`space::Line`], [`space::Rect`] and [`space::Hex`].
pub use tilemap_space as space;

/// The map engine (`tilemap-map`).
pub use tilemap_map as map;

/// Common imports for typical usage.
///
/// ```rust
/// use tilemap::prelude::*;
/// ```
pub mod prelude {
    pub use tilemap_core::{Direction, PairCoord, Topology};
    pub use tilemap_map::{
        create_line_map, create_rectangle_hex_map, create_rectangle_map, HexMap, LineMap, Map,
        RectMap,
    };
    pub use tilemap_space::{Hex, Line, Rect, Space, SpaceError};
}
