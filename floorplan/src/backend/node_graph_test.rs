#![allow(clippy::float_cmp)]

use super::*;
use crate::datasets::desk_floor;
use crate::room::RoomStatus;

fn node_for(status: RoomStatus, w: f64, h: f64) -> FlowNode {
    let rooms = [Room::new("n", "Node", Rect::new(5.0, 7.0, w, h), status)];
    NodeGraphBackend::nodes(&Scene::from_rooms(&rooms)).remove(0)
}

#[test]
fn one_node_per_room_in_order() {
    let rooms = desk_floor();
    let nodes = NodeGraphBackend::nodes(&Scene::from_rooms(&rooms));
    assert_eq!(nodes.len(), rooms.len());
    assert!(nodes.iter().zip(&rooms).all(|(n, r)| n.id == r.id));
}

#[test]
fn nodes_are_never_draggable() {
    let nodes = NodeGraphBackend::nodes(&Scene::from_rooms(&desk_floor()));
    assert!(nodes.iter().all(|n| !n.draggable));
}

#[test]
fn node_sits_at_room_position() {
    let node = node_for(RoomStatus::Office, 80.0, 60.0);
    assert_eq!(node.position, Point::new(5.0, 7.0));
    assert_eq!((node.width, node.height), (80.0, 60.0));
}

#[test]
fn filled_status_uses_style_colors() {
    let node = node_for(RoomStatus::Forecast, 80.0, 60.0);
    assert_eq!(node.style.background, "#bfdbfe");
    assert_eq!(node.style.border_color, "#2563eb");
    assert_eq!(node.style.border_width, 1.0);
    assert_eq!(node.style.opacity, 1.0);
}

#[test]
fn outlined_status_is_faded_with_thick_border() {
    for status in [RoomStatus::Vacant, RoomStatus::Pending] {
        let node = node_for(status, 80.0, 60.0);
        assert_eq!(node.style.background, "#ffffff");
        assert_eq!(node.style.border_width, 2.0);
        assert_eq!(node.style.opacity, 0.8);
    }
}

#[test]
fn font_sizes_scale_with_node() {
    let small = node_for(RoomStatus::Office, 40.0, 48.0);
    assert_eq!(small.name_font_px, 5.0);
    assert_eq!(small.id_font_px, 40.0 / 12.0);

    let large = node_for(RoomStatus::Office, 400.0, 400.0);
    assert_eq!(large.name_font_px, 12.0);
    assert_eq!(large.id_font_px, 10.0);
}

#[test]
fn hover_and_focus_carry_over() {
    let rooms = [Room::new("a", "A", Rect::new(0.0, 0.0, 50.0, 50.0), RoomStatus::Office)];
    let mut scene = Scene::from_rooms(&rooms);
    scene.set_hover(Some("a"));
    scene.set_focus(Some("a"));
    let node = &NodeGraphBackend::nodes(&scene)[0];
    assert!(node.hovered);
    assert!(node.focused);
}

#[test]
fn content_bounds_is_room_extent() {
    let rooms = [
        Room::new("a", "A", Rect::new(10.0, 10.0, 50.0, 50.0), RoomStatus::Office),
        Room::new("b", "B", Rect::new(100.0, 200.0, 50.0, 50.0), RoomStatus::Office),
    ];
    let scene = Scene::from_rooms(&rooms);
    assert_eq!(NodeGraphBackend.content_bounds(&scene), Rect::new(10.0, 10.0, 140.0, 240.0));
}

#[test]
fn empty_scene_has_empty_bounds() {
    assert_eq!(NodeGraphBackend.content_bounds(&Scene::default()), Rect::new(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn output_is_node_list() {
    let scene = Scene::from_rooms(&desk_floor());
    match NodeGraphBackend.output(&scene) {
        Ok(BackendOutput::Nodes(nodes)) => assert_eq!(nodes.len(), 37),
        other => panic!("expected nodes, got {other:?}"),
    }
}

#[test]
fn hit_test_finds_room() {
    let rooms = [Room::new("a", "A", Rect::new(0.0, 0.0, 50.0, 50.0), RoomStatus::Office)];
    let scene = Scene::from_rooms(&rooms);
    assert_eq!(NodeGraphBackend.hit_test(&scene, Point::new(25.0, 25.0)), Some("a".to_owned()));
}
