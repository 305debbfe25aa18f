use tilemap_map::{create_line_map, create_rectangle_hex_map};
use tilemap_test_utils::{piece, simple_line_map, simple_rect_map};

#[test]
fn name_follows_moved_content_until_overwritten() {
    let mut map = simple_line_map();
    map.track(5, "bishop").unwrap();
    map.move_tile(5, 4).unwrap();
    assert_eq!(map.property("bishop"), Some(4));
    assert_eq!(map.tracked_name(4), Some("bishop"));

    map.set(4, piece("rook", "white")).unwrap();
    assert_eq!(map.property("bishop"), None);
    assert_eq!(map.tracked_name(4), None);
}

#[test]
fn invalidated_name_stays_absent_after_content_returns() {
    let mut map = simple_line_map();
    map.track(5, "bishop").unwrap();
    map.set(5, None).unwrap();
    map.set(5, piece("bishop", "white")).unwrap();
    assert_eq!(map.property("bishop"), None);
    map.track(5, "bishop").unwrap();
    assert_eq!(map.property("bishop"), Some(5));
}

#[test]
fn displaced_content_loses_its_name() {
    let mut map = simple_line_map();
    map.track(2, "pawn").unwrap();
    map.track(5, "bishop").unwrap();
    let displaced = map.move_tile(5, 2).unwrap();
    assert_eq!(displaced, Some(piece("pawn", "black")));
    assert_eq!(map.property("pawn"), None);
    assert_eq!(map.property("bishop"), Some(2));
}

#[test]
fn swap_relocates_both_names() {
    let mut map = simple_line_map();
    map.track(2, "pawn").unwrap();
    map.track(5, "bishop").unwrap();
    map.swap(2, 5).unwrap();
    assert_eq!(map.property("pawn"), Some(5));
    assert_eq!(map.property("bishop"), Some(2));
    assert_eq!(map.get(5).unwrap(), Some(&piece("pawn", "black")));
}

#[test]
fn swap_with_first_side_tracked_moves_name_to_second() {
    let mut map = simple_line_map();
    map.track(2, "pawn").unwrap();
    map.swap(2, 5).unwrap();
    assert_eq!(map.property("pawn"), Some(5));
    assert_eq!(map.tracked_name(2), None);
}

#[test]
fn swap_twice_restores_tracking() {
    let mut map = simple_rect_map();
    map.track((1, 1), "pawn").unwrap();
    map.track((0, 3), "queen").unwrap();
    map.swap((1, 1), (0, 3)).unwrap();
    map.swap((1, 1), (0, 3)).unwrap();
    assert_eq!(map.property("pawn"), Some((1, 1)));
    assert_eq!(map.property("queen"), Some((0, 3)));
}

#[test]
fn retrack_name_last_write_wins() {
    let mut map = create_line_map::<u8>(8);
    map.track(1, "hero").unwrap();
    map.track(6, "hero").unwrap();
    assert_eq!(map.property("hero"), Some(6));
    assert_eq!(map.tracked_name(1), None);
    // Writing at the old coordinate must not touch the rebound name.
    map.set(1, 9).unwrap();
    assert_eq!(map.property("hero"), Some(6));
}

#[test]
fn retrack_coordinate_invalidates_previous_name() {
    let mut map = create_line_map::<u8>(8);
    map.track(3, "old").unwrap();
    map.track(3, "new").unwrap();
    assert_eq!(map.property("old"), None);
    assert_eq!(map.property("new"), Some(3));
    map.move_tile(3, 0).unwrap();
    assert_eq!(map.property("old"), None);
    assert_eq!(map.property("new"), Some(0));
}

#[test]
fn tracking_empty_tile_follows_the_empty_slot() {
    let mut map = create_rectangle_hex_map::<u8>(3, 4);
    map.track((0, 0), "hole").unwrap();
    map.move_tile((0, 0), (0, 1)).unwrap();
    assert_eq!(map.property("hole"), Some((0, 1)));
}

#[test]
fn properties_lists_every_name() {
    let mut map = simple_line_map();
    map.track(2, "pawn").unwrap();
    map.track(5, "bishop").unwrap();
    map.set(2, None).unwrap();
    let all: Vec<_> = map.properties().collect();
    assert_eq!(all, vec![("pawn", None), ("bishop", Some(5))]);
}

#[test]
fn out_of_bounds_track_registers_nothing() {
    let mut map = simple_line_map();
    assert!(map.track(9, "ghost").is_err());
    assert_eq!(map.properties().count(), 0);
}
