//! Space trait compliance test helpers.
//!
//! These functions verify that a Space implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules (Line, Rect, Hex).

use crate::space::Space;
use indexmap::IndexSet;

/// Assert that two calls to `tile_coords` return the same sequence.
pub fn assert_tile_coords_deterministic<S: Space>(space: &S) {
    let a: Vec<_> = space.tile_coords().collect();
    let b: Vec<_> = space.tile_coords().collect();
    assert_eq!(a, b, "tile_coords is non-deterministic");
}

/// Assert that `tile_coords` yields exactly `cell_count` unique coords,
/// each at the position reported by `canonical_rank`.
pub fn assert_tile_coords_ranked<S: Space>(space: &S) {
    let mut seen = IndexSet::new();
    for (i, coord) in space.tile_coords().enumerate() {
        assert_eq!(
            space.canonical_rank(coord),
            Some(i),
            "canonical_rank({coord:?}) disagrees with enumeration position {i}"
        );
        assert!(seen.insert(coord), "tile_coords yields {coord:?} twice");
    }
    assert_eq!(
        seen.len(),
        space.cell_count(),
        "tile_coords length ({}) != cell_count ({})",
        seen.len(),
        space.cell_count()
    );
}

/// Assert that `exists(c)` holds exactly for the enumerated coordinates,
/// probing every candidate.
pub fn assert_exists_iff_enumerated<S: Space>(
    space: &S,
    candidates: impl IntoIterator<Item = S::Coord>,
) {
    let tiles: IndexSet<_> = space.tile_coords().collect();
    for coord in candidates {
        assert_eq!(
            space.exists(coord),
            tiles.contains(&coord),
            "exists({coord:?}) disagrees with tile_coords"
        );
    }
}

/// Assert that `side_coords` has no duplicates, stays inside the space,
/// and contains every cell with a missing neighbour.
pub fn assert_sides_cover_boundary<S: Space>(space: &S) {
    let mut sides = IndexSet::new();
    for coord in space.side_coords() {
        assert!(space.exists(coord), "side {coord:?} is not in the space");
        assert!(sides.insert(coord), "side_coords yields {coord:?} twice");
    }
    let degree = space.directions().len();
    for coord in space.tile_coords() {
        if space.neighbours(coord).len() < degree {
            assert!(sides.contains(&coord), "boundary cell {coord:?} missing from sides");
        }
    }
}

/// Assert that `side_coords` is exactly the set of cells with a missing
/// neighbour. Only holds for boards with an interior.
pub fn assert_sides_exactly_boundary<S: Space>(space: &S) {
    let sides: IndexSet<_> = space.side_coords().collect();
    let degree = space.directions().len();
    let boundary: IndexSet<_> = space
        .tile_coords()
        .filter(|&c| space.neighbours(c).len() < degree)
        .collect();
    assert_eq!(
        sides.len(),
        boundary.len(),
        "side count {} != boundary count {}",
        sides.len(),
        boundary.len()
    );
    for coord in &boundary {
        assert!(sides.contains(coord), "boundary cell {coord:?} missing from sides");
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`, and
/// that no cell neighbours itself.
pub fn assert_neighbours_symmetric<S: Space>(space: &S) {
    for coord in space.tile_coords() {
        for nb in space.neighbours(coord) {
            assert_ne!(nb, coord, "{coord:?} is its own neighbour");
            assert!(
                space.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb:?} in N({coord:?}) but {coord:?} not in N({nb:?})"
            );
        }
    }
}

/// Run all compliance checks on a space.
pub fn run_full_compliance<S: Space>(space: &S, candidates: impl IntoIterator<Item = S::Coord>) {
    assert_tile_coords_deterministic(space);
    assert_tile_coords_ranked(space);
    assert_exists_iff_enumerated(space, candidates);
    assert_sides_cover_boundary(space);
    assert_neighbours_symmetric(space);
}
