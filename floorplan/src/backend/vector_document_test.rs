use super::*;
use crate::datasets::conference_registry;
use crate::room::RoomStatus;

const PLAN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 500 300">
  <rect id="room-101" x="10" y="10" width="100" height="80"/>
  <rect id="Conference-Room-B" x="120" y="10" width="100" height="80"/>
  <rect id="storage_closet" x="230" y="10" width="40" height="40" class="closet"/>
  <text id="room-101">Conference Room A</text>
</svg>"#;

fn loaded() -> (VectorDocumentBackend, RoomRegistry) {
    let registry = conference_registry().expect("built-in rooms are valid");
    let doc = FloorDocument::parse(PLAN).expect("parse plan");
    let mut backend = VectorDocumentBackend::new();
    let reconciliation = backend.load(doc, &registry);
    (backend, reconciliation.registry)
}

fn markup(backend: &VectorDocumentBackend, scene: &Scene) -> String {
    match backend.output(scene) {
        Ok(BackendOutput::Markup(m)) => m,
        other => panic!("expected markup, got {other:?}"),
    }
}

#[test]
fn unloaded_backend_has_nothing_to_draw() {
    let backend = VectorDocumentBackend::new();
    let scene = Scene::default();
    assert!(matches!(backend.output(&scene), Err(BackendError::NotLoaded)));
    assert_eq!(backend.shape_count(&scene), 0);
    assert!(backend.scene_rooms(&RoomRegistry::default()).is_empty());
}

#[test]
fn shapes_match_by_id_and_normalized_name() {
    let (backend, _) = loaded();
    assert_eq!(backend.room_for_shape("room-101").map(String::as_str), Some("room-101"));
    assert_eq!(backend.room_for_shape("Conference-Room-B").map(String::as_str), Some("room-102"));
    assert!(backend.is_matched("room-101"));
    assert!(!backend.is_matched("storage_closet"));
}

#[test]
fn unmatched_shape_becomes_placeholder_room() {
    let (backend, registry) = loaded();
    let rooms = backend.scene_rooms(&registry);
    let ids: Vec<_> = rooms.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["room-101", "room-102", "storage_closet"]);

    let closet = &rooms[2];
    assert_eq!(closet.name, "Storage Closet");
    assert_eq!(closet.status, RoomStatus::Available);
}

#[test]
fn shape_count_counts_document_shapes() {
    let (backend, registry) = loaded();
    let scene = Scene::from_rooms(&backend.scene_rooms(&registry));
    assert_eq!(backend.shape_count(&scene), 3);
}

#[test]
fn hit_test_uses_document_geometry() {
    let (backend, registry) = loaded();
    let scene = Scene::from_rooms(&backend.scene_rooms(&registry));
    assert_eq!(backend.hit_test(&scene, Point::new(150.0, 50.0)), Some("room-102".to_owned()));
    assert_eq!(backend.hit_test(&scene, Point::new(400.0, 200.0)), None);
}

#[test]
fn content_bounds_cover_shapes() {
    let (backend, _) = loaded();
    assert_eq!(backend.content_bounds(&Scene::default()), Rect::new(10.0, 10.0, 260.0, 80.0));
}

#[test]
fn markup_rewrites_root() {
    let (backend, registry) = loaded();
    let scene = Scene::from_rooms(&backend.scene_rooms(&registry));
    let out = markup(&backend, &scene);
    assert!(out.starts_with("<svg"));
    assert!(out.contains(r#"id="svgplan""#));
    assert!(out.contains(r#"width="100%""#));
    assert!(out.contains(r#"class="floor-plan-svg""#));
    assert!(!out.contains("xmlns="));
}

#[test]
fn mobile_root_id_and_class() {
    let registry = conference_registry().expect("built-in rooms are valid");
    let mut backend = VectorDocumentBackend::mobile();
    backend.load(FloorDocument::parse(PLAN).expect("parse plan"), &registry);
    let out = markup(&backend, &Scene::default());
    assert!(out.contains(r#"id="mobile-svgplan""#));
    assert!(!out.contains(r#"id="svgplan""#));
    assert!(out.contains(r#"class="floor-plan-svg mobile-floor-plan""#));
}

#[test]
fn matched_shapes_take_status_colors() {
    let (backend, registry) = loaded();
    let scene = Scene::from_rooms(&backend.scene_rooms(&registry));
    let out = markup(&backend, &scene);
    // room-101 is available; room-102 has an unrecognized status.
    assert!(out.contains("fill:#c8e6c9"));
    assert!(out.contains("fill:#f3f4f6"));
}

#[test]
fn placeholder_keeps_document_styling() {
    let (backend, registry) = loaded();
    let scene = Scene::from_rooms(&backend.scene_rooms(&registry));
    let out = markup(&backend, &scene);
    let closet = out.split("<rect").find(|s| s.contains("storage_closet")).expect("closet element");
    assert!(closet.contains(r#"class="closet room""#));
    assert!(!closet.contains("style="));
}

#[test]
fn labels_get_label_class() {
    let (backend, registry) = loaded();
    let scene = Scene::from_rooms(&backend.scene_rooms(&registry));
    let out = markup(&backend, &scene);
    assert!(out.contains(r#"class="room-label""#));
}

#[test]
fn hovered_shape_gets_hover_class() {
    let (backend, registry) = loaded();
    let mut scene = Scene::from_rooms(&backend.scene_rooms(&registry));
    scene.set_hover(Some("room-102"));
    let out = markup(&backend, &scene);
    assert!(out.contains("room room-hover"));
}

#[test]
fn unload_clears_document() {
    let (mut backend, _) = loaded();
    backend.unload();
    assert!(backend.document().is_none());
    assert_eq!(backend.shape_count(&Scene::default()), 0);
}
