//! Core types for the tilemap workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate: topology-erased
//! coordinates, the compass [`Direction`] enum with the per-topology
//! direction tables, and the [`Topology`] shape descriptor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod direction;
pub mod topology;

pub use coord::{AnyCoord, PairCoord};
pub use direction::{Direction, HEX_DIRECTIONS, LINE_DIRECTIONS, RECT_DIRECTIONS};
pub use topology::Topology;
