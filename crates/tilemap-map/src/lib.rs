//! Tile map engine for tilemap.
//!
//! [`Map`] stores one content slot per coordinate of a [`Space`] and
//! implements the shared contract of every topology: get, set,
//! enumeration, adjacency, move, swap and tracking. Use the factory
//! functions to build a ready map:
//!
//! - [`create_line_map`]
//! - [`create_rectangle_map`]
//! - [`create_rectangle_hex_map`]
//!
//! [`Space`]: tilemap_space::Space

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod factory;
pub mod map;
pub mod tracking;

pub use factory::{create_line_map, create_rectangle_hex_map, create_rectangle_map};
pub use map::{HexMap, LineMap, Map, RectMap};
pub use tracking::Tracker;
