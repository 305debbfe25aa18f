//! Coordinate systems for tilemap.
//!
//! This crate defines the [`Space`] trait — the contract every map
//! topology implements — along with its three backends.
//!
//! # Backends
//!
//! - [`Line`]: 1D row of slots, neighbours left and right
//! - [`Rect`]: 2D cartesian grid, 4-connected (no diagonals)
//! - [`Hex`]: rhombus-shaped axial hex board, 6-connected
//!
//! Every backend enumerates its coordinates in a fixed canonical order
//! and reports each coordinate's rank in that order, which is what lets
//! a map store its cells in a flat vector.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hex;
pub mod line;
pub mod rect;
pub mod space;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use hex::Hex;
pub use line::Line;
pub use rect::Rect;
pub use space::Space;
pub use tilemap_core::{AnyCoord, Direction, PairCoord, Topology};
