#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{CONTENT_MARGIN, MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH};
use crate::datasets::desk_floor;
use crate::room::RoomStatus;

fn room_at(id: &str, x: f64, y: f64, w: f64, h: f64) -> Room {
    Room::new(id, id, Rect::new(x, y, w, h), RoomStatus::Office)
}

fn minimum() -> Size {
    Size::new(MIN_CANVAS_WIDTH, MIN_CANVAS_HEIGHT)
}

#[test]
fn extent_of_empty_set_is_none() {
    assert!(room_extent(&[]).is_none());
}

#[test]
fn extent_unions_rooms() {
    let rooms = [room_at("a", 10.0, 20.0, 30.0, 40.0), room_at("b", 100.0, 5.0, 10.0, 10.0)];
    assert_eq!(room_extent(&rooms), Some(Rect::new(10.0, 5.0, 100.0, 55.0)));
}

#[test]
fn content_bounds_is_far_corner_plus_margin() {
    let rooms = [room_at("a", 10.0, 20.0, 30.0, 40.0), room_at("b", 100.0, 5.0, 10.0, 10.0)];
    assert_eq!(content_bounds(&rooms, 100.0), Size::new(210.0, 160.0));
}

#[test]
fn content_bounds_of_empty_set_is_zero() {
    assert_eq!(content_bounds(&[], CONTENT_MARGIN), Size::default());
}

#[test]
fn small_room_set_gets_minimum_canvas() {
    let rooms = [room_at("a", 0.0, 0.0, 50.0, 50.0)];
    let size = canvas_size(&rooms, Size::new(300.0, 200.0), minimum(), CONTENT_MARGIN);
    assert_eq!(size, minimum());
}

#[test]
fn empty_room_set_gets_minimum_canvas() {
    assert_eq!(canvas_size(&[], Size::default(), minimum(), CONTENT_MARGIN), minimum());
}

#[test]
fn large_container_wins() {
    let size = canvas_size(&desk_floor(), Size::new(1920.0, 1080.0), minimum(), CONTENT_MARGIN);
    assert_eq!(size, Size::new(1920.0, 1080.0));
}

#[test]
fn far_rooms_extend_canvas_per_axis() {
    let rooms = [room_at("far", 1500.0, 10.0, 200.0, 10.0)];
    let size = canvas_size(&rooms, Size::default(), minimum(), CONTENT_MARGIN);
    assert_eq!(size, Size::new(1800.0, MIN_CANVAS_HEIGHT));
}

#[test]
fn canvas_is_never_smaller_than_content_or_minimum() {
    let rooms = desk_floor();
    let bounds = content_bounds(&rooms, CONTENT_MARGIN);
    let size = canvas_size(&rooms, Size::new(640.0, 480.0), minimum(), CONTENT_MARGIN);
    assert!(size.width >= bounds.width && size.height >= bounds.height);
    assert!(size.width >= MIN_CANVAS_WIDTH && size.height >= MIN_CANVAS_HEIGHT);
    assert_eq!(bounds, Size::new(1120.0, 650.0));
}

#[test]
fn size_is_positive() {
    assert!(Size::new(1.0, 1.0).is_positive());
    assert!(!Size::new(0.0, 1.0).is_positive());
}
