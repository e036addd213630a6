#![allow(clippy::float_cmp)]

use super::*;
use crate::datasets::{conference_registry, desk_floor, desk_floor_registry};
use crate::room::{Rect, RoomStatus};

fn desk_core() -> EngineCore {
    let registry = desk_floor_registry().expect("built-in rooms are valid");
    EngineCore::shape_graph(registry, ViewerConfig::shape_graph())
}

fn vector_core() -> EngineCore {
    let registry = conference_registry().expect("built-in rooms are valid");
    EngineCore::vector_document(registry, ViewerConfig::vector_document(), false)
}

fn screen_center_of(core: &EngineCore, id: &str) -> Point {
    let rect = core.scene.node(id).expect("room in scene").rect;
    core.camera().world_to_screen(rect.center())
}

fn click(core: &mut EngineCore, at: Point) -> Vec<Action> {
    core.on_pointer_down(at, Button::Primary, Modifiers::default());
    core.on_pointer_up(at, Button::Primary, Modifiers::default())
}

fn key(core: &mut EngineCore, name: &str, shift: bool) -> Vec<Action> {
    let modifiers = Modifiers { shift, ..Modifiers::default() };
    core.on_key_down(&Key(name.to_owned()), modifiers)
}

const PLAN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 200">
  <rect id="room-101" x="0" y="0" width="100" height="100"/>
  <rect id="copy_room" x="200" y="0" width="100" height="100"/>
</svg>"#;

// =============================================================
// Construction
// =============================================================

#[test]
fn shape_graph_scene_holds_every_room() {
    let core = desk_core();
    assert_eq!(core.scene.len(), 37);
    assert_eq!(core.shape_count(), 37);
}

#[test]
fn shape_graph_opens_at_initial_zoom() {
    let core = desk_core();
    assert!(core.viewport.is_attached());
    assert_eq!(core.camera().zoom, 0.6);
}

#[test]
fn vector_viewer_waits_for_document() {
    let core = vector_core();
    assert!(core.scene.is_empty());
    assert!(!core.viewport.is_attached());
    assert!(matches!(core.output(), Err(BackendError::NotLoaded)));
}

// =============================================================
// Pointer
// =============================================================

#[test]
fn click_on_room_selects_it() {
    let mut core = desk_core();
    let at = screen_center_of(&core, "LB001");
    let actions = click(&mut core, at);
    assert_eq!(actions, vec![Action::RoomSelected("LB001".into()), Action::RenderNeeded]);
    assert_eq!(core.selected_room().map(|r| r.name.as_str()), Some("Main Lobby"));
}

#[test]
fn second_activation_replaces_selection() {
    let mut core = desk_core();
    let first = screen_center_of(&core, "LB001");
    let second = screen_center_of(&core, "FC201");
    click(&mut core, first);
    click(&mut core, second);
    assert_eq!(core.selection.selected_id(), Some("FC201"));
}

#[test]
fn click_on_empty_floor_selects_nothing() {
    let mut core = desk_core();
    let at = core.camera().world_to_screen(Point::new(5.0, 5.0));
    let actions = click(&mut core, at);
    assert!(actions.is_empty());
    assert!(!core.selection.is_selected());
}

#[test]
fn drag_pans_instead_of_selecting() {
    let mut core = desk_core();
    let start = screen_center_of(&core, "LB001");
    let before = core.camera();

    core.on_pointer_down(start, Button::Primary, Modifiers::default());
    let end = Point::new(start.x + 50.0, start.y + 20.0);
    let moved = core.on_pointer_move(end, Modifiers::default());
    assert!(moved.contains(&Action::RenderNeeded));
    core.on_pointer_up(end, Button::Primary, Modifiers::default());

    let after = core.camera();
    assert!((after.pan_x - before.pan_x - 50.0).abs() < 1e-9);
    assert!((after.pan_y - before.pan_y - 20.0).abs() < 1e-9);
    assert!(!core.selection.is_selected());
}

#[test]
fn small_jitter_still_counts_as_click() {
    let mut core = desk_core();
    let start = screen_center_of(&core, "LB001");
    core.on_pointer_down(start, Button::Primary, Modifiers::default());
    core.on_pointer_move(Point::new(start.x + 2.0, start.y + 1.0), Modifiers::default());
    let actions = core.on_pointer_up(Point::new(start.x + 2.0, start.y + 1.0), Button::Primary, Modifiers::default());
    assert!(actions.contains(&Action::RoomSelected("LB001".into())));
}

#[test]
fn secondary_button_is_ignored() {
    let mut core = desk_core();
    let at = screen_center_of(&core, "LB001");
    core.on_pointer_down(at, Button::Secondary, Modifiers::default());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn hover_sets_pointer_cursor_and_clears_on_leave() {
    let mut core = desk_core();
    let at = screen_center_of(&core, "OF101");
    let actions = core.on_pointer_move(at, Modifiers::default());
    assert_eq!(actions, vec![Action::SetCursor("pointer".into()), Action::RenderNeeded]);
    assert_eq!(core.scene.hovered(), Some("OF101"));

    // Moving within the same room changes nothing.
    assert!(core.on_pointer_move(Point::new(at.x + 1.0, at.y), Modifiers::default()).is_empty());

    let left = core.on_pointer_leave();
    assert_eq!(left, vec![Action::SetCursor("default".into()), Action::RenderNeeded]);
    assert_eq!(core.scene.hovered(), None);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn tab_walks_rooms_in_registry_order() {
    let mut core = desk_core();
    key(&mut core, "Tab", false);
    assert_eq!(core.scene.focused(), Some("LB001"));
    key(&mut core, "Tab", false);
    assert_eq!(core.scene.focused(), Some("OF101"));
    key(&mut core, "Tab", true);
    assert_eq!(core.scene.focused(), Some("LB001"));
}

#[test]
fn enter_and_space_activate_focused_room() {
    let mut core = desk_core();
    key(&mut core, "Tab", false);
    let actions = key(&mut core, "Enter", false);
    assert!(actions.contains(&Action::RoomSelected("LB001".into())));

    key(&mut core, "Tab", false);
    key(&mut core, " ", false);
    assert_eq!(core.selection.selected_id(), Some("OF101"));
}

#[test]
fn enter_without_focus_does_nothing() {
    let mut core = desk_core();
    assert!(key(&mut core, "Enter", false).is_empty());
}

#[test]
fn escape_clears_selection() {
    let mut core = desk_core();
    core.activate_room("LB001");
    assert_eq!(key(&mut core, "Escape", false), vec![Action::SelectionCleared]);
    assert!(!core.selection.is_selected());
    assert!(key(&mut core, "Escape", false).is_empty());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn close_control_and_backdrop_return_to_idle() {
    let mut core = desk_core();
    core.activate_room("LB001");
    assert_eq!(core.dismiss(DismissReason::CloseControl), vec![Action::SelectionCleared]);

    core.activate_room("LB001");
    assert_eq!(core.backdrop_click(true), vec![Action::SelectionCleared]);
}

#[test]
fn bubbled_child_click_keeps_selection() {
    let mut core = desk_core();
    core.activate_room("LB001");
    assert!(core.backdrop_click(false).is_empty());
    assert!(core.selection.is_selected());
}

#[test]
fn reserving_available_room_emits_once() {
    let registry = conference_registry().expect("built-in rooms are valid");
    let mut core = EngineCore::node_graph(registry, ViewerConfig::shape_graph());
    core.activate_room("room-101");

    let actions = core.reserve();
    assert_eq!(
        actions,
        vec![
            Action::RoomReserved { room_id: "room-101".into(), room_name: "Conference Room A".into() },
            Action::SelectionCleared,
        ]
    );
    assert!(!core.selection.is_selected());
    assert!(core.reserve().is_empty());
}

#[test]
fn reserved_room_cannot_be_reserved() {
    let registry = conference_registry().expect("built-in rooms are valid");
    let mut core = EngineCore::node_graph(registry, ViewerConfig::shape_graph());
    core.activate_room("room-102");
    assert!(core.reserve().is_empty());
    assert_eq!(core.selection.selected_id(), Some("room-102"));
}

#[test]
fn activating_unknown_identifier_selects_placeholder() {
    let mut core = desk_core();
    core.activate_room("supply_closet");
    let room = core.selected_room().expect("placeholder selected");
    assert_eq!(room.name, "Supply Closet");
    assert_eq!(room.status, RoomStatus::Available);
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn zoom_buttons_stop_at_limits() {
    let mut core = desk_core();
    for _ in 0..20 {
        core.zoom_in();
    }
    assert_eq!(core.camera().zoom, 2.5);
    assert!(core.zoom_in().is_empty());

    for _ in 0..20 {
        core.zoom_out();
    }
    assert_eq!(core.camera().zoom, 0.3);
}

#[test]
fn reset_view_restores_initial_zoom() {
    let mut core = desk_core();
    core.zoom_in();
    core.reset_view();
    assert_eq!(core.camera().zoom, 0.6);
}

#[test]
fn wheel_up_zooms_in() {
    let mut core = desk_core();
    let actions = core.on_wheel(Point::new(100.0, 100.0), WheelDelta { dx: 0.0, dy: -100.0 }, Modifiers::default());
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert!(core.camera().zoom > 0.6);
}

#[test]
fn pinch_spreading_zooms_in() {
    let mut core = desk_core();
    core.on_pinch_start(100.0);
    core.on_pinch_move(Point::new(200.0, 200.0), 150.0);
    assert!(core.camera().zoom > 0.6);
    core.on_pinch_end();
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn fullscreen_toggles() {
    let mut core = desk_core();
    assert!(core.toggle_fullscreen().contains(&Action::FullscreenToggled(true)));
    assert!(core.toggle_fullscreen().contains(&Action::FullscreenToggled(false)));
}

#[test]
fn zoom_is_noop_without_capability() {
    let mut core = vector_core();
    assert!(core.zoom_in().is_empty());
    assert!(core.on_wheel(Point::new(0.0, 0.0), WheelDelta { dx: 0.0, dy: 100.0 }, Modifiers::default()).is_empty());
    assert!(core.toggle_fullscreen().is_empty());
}

#[test]
fn first_container_size_refits() {
    let registry = desk_floor_registry().expect("built-in rooms are valid");
    let mut core = EngineCore::node_graph(registry, ViewerConfig::vector_document());
    core.set_container(Size::new(800.0, 600.0));
    // Room extent is 960 x 470; width is the tighter fit.
    assert_eq!(core.camera().zoom, 800.0 / 960.0);
    assert_eq!(core.container(), Size::new(800.0, 600.0));
}

// =============================================================
// Floor document
// =============================================================

#[test]
fn begin_load_is_fire_once() {
    let mut core = vector_core();
    assert_eq!(
        core.begin_load().as_deref(),
        Some("https://app.devttest.com/space-reserve-mtworks/OR045101S.svg")
    );
    assert_eq!(core.begin_load(), None);
}

#[test]
fn http_failure_becomes_fault() {
    let mut core = vector_core();
    core.begin_load();
    let actions = core.complete_load(Err(LoadError::Http { status: 404, status_text: "Not Found".into() }));
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.fault().as_deref(), Some("Failed to load SVG: Not Found"));
    assert_eq!(core.shape_count(), 0);
    assert!(core.output().is_err());
}

#[test]
fn missing_root_becomes_fault() {
    let mut core = vector_core();
    core.begin_load();
    core.complete_load(Ok("<html></html>".into()));
    assert_eq!(core.fault().as_deref(), Some("SVG not found in file"));
}

#[test]
fn completion_without_begin_is_ignored() {
    let mut core = vector_core();
    assert!(core.complete_load(Ok(PLAN.into())).is_empty());
    assert_eq!(core.shape_count(), 0);
}

#[test]
fn loaded_document_binds_shapes() {
    let mut core = vector_core();
    core.begin_load();
    core.complete_load(Ok(PLAN.into()));

    assert!(core.fault().is_none());
    assert_eq!(core.shape_count(), 2);
    assert!(core.viewport.is_attached());
    assert!(core.registry.get("copy_room").is_some());
    assert!(matches!(core.output(), Ok(BackendOutput::Markup(_))));
}

#[test]
fn loaded_document_shapes_are_clickable() {
    let mut core = vector_core();
    core.begin_load();
    core.complete_load(Ok(PLAN.into()));

    let at = core.camera().world_to_screen(Point::new(250.0, 50.0));
    let actions = click(&mut core, at);
    assert!(actions.contains(&Action::RoomSelected("copy_room".into())));
    assert_eq!(core.selected_room().map(|r| r.name.as_str()), Some("Copy Room"));
}

#[test]
fn teardown_detaches_viewport() {
    let mut core = vector_core();
    core.begin_load();
    core.complete_load(Ok(PLAN.into()));
    core.teardown();
    assert!(!core.viewport.is_attached());
    assert!(core.begin_load().is_some());
}

// =============================================================
// Data and legend
// =============================================================

#[test]
fn legend_counts_track_room_changes() {
    let mut core = desk_core();
    let vacant = |core: &EngineCore| {
        core.legend_counts().into_iter().find(|e| e.descriptor.status == RoomStatus::Vacant).map(|e| e.count)
    };
    assert_eq!(vacant(&core), Some(4));

    let mut rooms = desk_floor();
    rooms.retain(|r| r.status != RoomStatus::Vacant);
    core.load_rooms(rooms).expect("valid rooms");
    assert_eq!(vacant(&core), Some(0));
}

#[test]
fn invalid_rooms_leave_registry_untouched() {
    let mut core = desk_core();
    let dup = vec![
        Room::new("a", "A", Rect::new(0.0, 0.0, 10.0, 10.0), RoomStatus::Office),
        Room::new("a", "B", Rect::new(0.0, 0.0, 10.0, 10.0), RoomStatus::Office),
    ];
    assert!(core.load_rooms(dup).is_err());
    assert_eq!(core.registry.len(), 37);
}

#[test]
fn load_rooms_reports_scene_changes() {
    let mut core = desk_core();
    let mut rooms = desk_floor();
    rooms.truncate(36);
    let changes = core.load_rooms(rooms).expect("valid rooms");
    assert_eq!(changes, vec![SceneChange::Removed("CR007".into())]);
}

#[test]
fn legend_toggle_uses_shared_flag_when_present() {
    let mut core = desk_core();
    assert_eq!(core.toggle_legend(Some(false)), LegendToggle::External(true));
    assert_eq!(core.toggle_legend(None), LegendToggle::Internal(true));
}
