use tilemap_map::create_rectangle_map;
use tilemap_test_utils::{piece, simple_rect_map, GamePiece};

#[test]
fn get() {
    let map = simple_rect_map();
    assert_eq!(map.get((0, 0)).unwrap(), None);
    assert_eq!(map.get((0, 3)).unwrap(), Some(&piece("queen", "black")));
    assert_eq!(map.get((2, 2)).unwrap(), None);
    assert_eq!(map.get((2, 0)).unwrap(), Some(&piece("bishop", "white")));
    assert_eq!(map.get((1, 1)).unwrap(), Some(&piece("pawn", "black")));
}

#[test]
fn get_out_of_bounds() {
    let map = create_rectangle_map::<GamePiece>(3, 4);
    for c in [(3, 1), (2, 4), (-1, 0), (1, -1)] {
        assert!(map.get(c).is_err(), "{c:?}");
    }
    for c in [(0, 0), (2, 3), (2, 0), (0, 3)] {
        assert!(map.get(c).is_ok(), "{c:?}");
    }
}

#[test]
fn set_out_of_bounds() {
    let mut map = create_rectangle_map(3, 4);
    for c in [(0, -1), (-1, 0), (3, 1), (2, 4), (6, 7)] {
        assert!(map.set(c, piece("meeple", "yellow")).is_err(), "{c:?}");
    }
    assert!(map.set((0, 0), piece("cube", "brown")).is_ok());
    assert!(map.set((2, 3), piece("road", "blue")).is_ok());
}

#[test]
fn sides_are_the_perimeter() {
    let map = simple_rect_map();
    let sides: Vec<_> = map.sides().collect();
    assert_eq!(sides.len(), 2 * 3 + 2 * 2);
    assert!(sides.contains(&((0, 3), Some(&piece("queen", "black")))));
    assert!(sides.contains(&((2, 0), Some(&piece("bishop", "white")))));
    assert!(sides.iter().all(|(c, _)| *c != (1, 1) && *c != (1, 2)));
}

#[test]
fn tiles_x_major_order() {
    let map = simple_rect_map();
    let coords: Vec<_> = map.tiles().map(|(c, _)| c).collect();
    assert_eq!(coords.len(), 12);
    assert_eq!(&coords[..5], &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 0)]);
    for c in coords {
        assert!(map.exists(c));
    }
}

#[test]
fn adjacent_never_diagonal() {
    let map = simple_rect_map();
    let adj: Vec<_> = map.adjacent((1, 1)).unwrap().map(|(c, _)| c).collect();
    assert_eq!(adj, vec![(1, 0), (2, 1), (1, 2), (0, 1)]);
    let corner: Vec<_> = map.adjacent((0, 3)).unwrap().collect();
    assert_eq!(corner, vec![((0, 2), None), ((1, 3), None)]);
}

#[test]
fn move_across_grid() {
    let mut map = simple_rect_map();
    let displaced = map.move_tile((1, 1), (2, 0)).unwrap();
    assert_eq!(displaced, Some(piece("bishop", "white")));
    assert_eq!(map.get((1, 1)).unwrap(), None);
    assert_eq!(map.get((2, 0)).unwrap(), Some(&piece("pawn", "black")));
}
