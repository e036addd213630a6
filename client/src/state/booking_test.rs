use super::*;

fn complete_form() -> BookingState {
    let mut form = BookingState::default();
    form.request_date = "2026-10-20".to_owned();
    form.set_building("Walnut Creek Medical Center");
    form.floor = "Floor 1".to_owned();
    form.apply_room_selection("room-101", "Conference Room A");
    form
}

#[test]
fn default_requests_for_self_all_day() {
    let form = BookingState::default();
    assert!(form.request_for_me);
    assert_eq!(form.time_slot, TimeSlot::AllDay);
    assert!(form.room.is_empty());
    assert_eq!(form.reservation_seq, 0);
}

#[test]
fn room_selection_stores_name_in_room_field() {
    let mut form = BookingState::default();
    form.apply_room_selection("room-101", "Conference Room A");
    assert_eq!(form.room, "Conference Room A");
    assert_eq!(form.room_id.as_deref(), Some("room-101"));
    assert_eq!(form.reservation_seq, 1);
}

#[test]
fn later_selection_replaces_room() {
    let mut form = BookingState::default();
    form.apply_room_selection("room-101", "Conference Room A");
    form.apply_room_selection("room-105", "Executive Room");
    assert_eq!(form.room, "Executive Room");
    assert_eq!(form.reservation_seq, 2);
}

#[test]
fn changing_building_clears_floor() {
    let mut form = complete_form();
    form.set_building("Walnut Creek Medical Center");
    assert_eq!(form.floor, "Floor 1");
    form.set_building("Antioch Medical Center");
    assert!(form.floor.is_empty());
}

#[test]
fn missing_fields_lists_gaps() {
    let form = BookingState::default();
    assert_eq!(form.missing_fields(), vec!["Request date", "Building", "Floor", "Room"]);
}

#[test]
fn requested_for_needed_only_when_not_for_me() {
    let mut form = complete_form();
    assert!(form.is_complete());
    form.request_for_me = false;
    assert_eq!(form.missing_fields(), vec!["Requested for"]);
    form.requested_for = "Dana".to_owned();
    assert!(form.is_complete());
}

#[test]
fn time_slot_parses_wire_names() {
    for slot in TimeSlot::ALL {
        assert_eq!(TimeSlot::parse(slot.as_str()), Some(slot));
    }
    assert_eq!(TimeSlot::parse("evening"), None);
}
