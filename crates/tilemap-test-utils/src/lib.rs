//! Test content and map fixtures for tilemap development.
//!
//! Provides [`GamePiece`], a small equality-comparable content type, and
//! fixture maps pre-populated the same way across the integration tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{simple_hex_map, simple_line_map, simple_rect_map};

/// A board game piece: a name and a colour.
///
/// Two pieces are equal when both fields match, so two separately built
/// black pawns compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GamePiece {
    pub name: String,
    pub color: String,
}

impl GamePiece {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Shorthand for [`GamePiece::new`].
pub fn piece(name: &str, color: &str) -> GamePiece {
    GamePiece::new(name, color)
}
