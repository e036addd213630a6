use super::*;

fn complete_booking() -> BookingState {
    let mut booking = BookingState { request_date: "2024-05-01".to_owned(), ..BookingState::default() };
    booking.set_building(BUILDINGS[0]);
    booking.floor = FLOORS[1].to_owned();
    booking.apply_room_selection("room-101", "Conference Room A");
    booking
}

#[test]
fn page_starts_on_form() {
    assert_eq!(MobileView::default(), MobileView::Form);
}

#[test]
fn no_floors_until_building_chosen() {
    assert!(floor_options("").is_empty());
    assert_eq!(floor_options(BUILDINGS[2]).len(), 5);
}

#[test]
fn submit_message_lists_missing_fields() {
    let message = submit_message(&BookingState::default());
    assert_eq!(message, "Missing: Request date, Building, Floor, Room");
}

#[test]
fn submit_message_names_room_when_complete() {
    assert_eq!(submit_message(&complete_booking()), "Request submitted for Conference Room A");
}

#[test]
fn requested_for_needed_when_not_for_me() {
    let mut booking = complete_booking();
    booking.request_for_me = false;
    assert_eq!(submit_message(&booking), "Missing: Requested for");
}
