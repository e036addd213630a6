use super::*;
use crate::room::RoomStatus;

fn room(id: &str, x: f64, y: f64, w: f64, h: f64) -> Room {
    Room::new(id, id, Rect::new(x, y, w, h), RoomStatus::Office)
}

fn floor() -> Vec<Room> {
    vec![room("a", 0.0, 0.0, 100.0, 100.0), room("b", 150.0, 0.0, 50.0, 50.0), room("c", 50.0, 50.0, 100.0, 100.0)]
}

fn hit_id(pt: Point, rooms: &[Room]) -> Option<&str> {
    hit_test(pt, rooms).map(HitTarget::target_id)
}

#[test]
fn hit_inside_room() {
    assert_eq!(hit_id(Point::new(160.0, 10.0), &floor()), Some("b"));
}

#[test]
fn miss_returns_none() {
    assert_eq!(hit_id(Point::new(500.0, 500.0), &floor()), None);
}

#[test]
fn empty_floor_never_hits() {
    assert_eq!(hit_id(Point::new(0.0, 0.0), &[]), None);
}

#[test]
fn edges_are_inclusive() {
    let rooms = floor();
    assert_eq!(hit_id(Point::new(200.0, 50.0), &rooms), Some("b"));
    assert_eq!(hit_id(Point::new(150.0, 0.0), &rooms), Some("b"));
}

#[test]
fn overlap_resolves_to_last_drawn() {
    assert_eq!(hit_id(Point::new(75.0, 75.0), &floor()), Some("c"));
}

#[test]
fn non_overlapping_part_of_lower_room() {
    assert_eq!(hit_id(Point::new(10.0, 10.0), &floor()), Some("a"));
}

#[test]
fn screen_hit_applies_camera() {
    let cam = Camera { pan_x: 100.0, pan_y: 100.0, zoom: 2.0 };
    // screen (420, 120) -> world (160, 10)
    assert_eq!(hit_test_screen(Point::new(420.0, 120.0), &cam, &floor()).map(|r| r.id.as_str()), Some("b"));
}

#[test]
fn screen_hit_misses_outside_after_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 0.5 };
    // screen (150, 150) -> world (300, 300)
    assert!(hit_test_screen(Point::new(150.0, 150.0), &cam, &floor()).is_none());
}
