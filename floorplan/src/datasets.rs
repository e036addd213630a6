//! Built-in room datasets.
//!
//! `desk_floor` is the hand-authored level-one layout used by the shape-graph
//! and node-graph viewers. `conference_rooms` is the mobile booking set whose
//! rooms are matched against shapes in an external floor document by id or
//! normalized name; their layout fields are nominal.

#[cfg(test)]
#[path = "datasets_test.rs"]
mod datasets_test;

use crate::consts::PLACEHOLDER_ROOM_SIZE;
use crate::registry::{RegistryError, RoomRegistry};
use crate::room::{Rect, Room, RoomStatus};

type DeskRow = (&'static str, &'static str, f64, f64, f64, f64, RoomStatus);

const DESK_FLOOR: [DeskRow; 37] = [
    ("LB001", "Main Lobby", 60.0, 80.0, 200.0, 120.0, RoomStatus::Office),
    ("OF101", "Executive Office", 60.0, 220.0, 120.0, 80.0, RoomStatus::Office),
    ("OF102", "Manager Office", 60.0, 320.0, 80.0, 70.0, RoomStatus::Office),
    ("OF103", "Senior Office", 160.0, 320.0, 80.0, 70.0, RoomStatus::Office),
    ("OF104", "Team Office", 60.0, 410.0, 120.0, 80.0, RoomStatus::Office),
    ("RC001", "Reception", 280.0, 80.0, 100.0, 60.0, RoomStatus::Office),
    ("WT001", "Waiting Area", 280.0, 160.0, 100.0, 60.0, RoomStatus::Office),
    ("CF101", "Conference A", 280.0, 240.0, 120.0, 90.0, RoomStatus::Office),
    ("CF102", "Conference B", 280.0, 350.0, 120.0, 90.0, RoomStatus::Office),
    ("CF103", "Meeting Room", 280.0, 460.0, 120.0, 80.0, RoomStatus::Office),
    ("FC201", "Forecast Hub 1", 420.0, 80.0, 110.0, 80.0, RoomStatus::Forecast),
    ("FC202", "Forecast Hub 2", 550.0, 80.0, 110.0, 80.0, RoomStatus::Forecast),
    ("FC203", "Forecast Center", 420.0, 180.0, 140.0, 100.0, RoomStatus::Forecast),
    ("HT301", "Hot Desk A", 420.0, 300.0, 80.0, 60.0, RoomStatus::Hoteling),
    ("HT302", "Hot Desk B", 520.0, 300.0, 80.0, 60.0, RoomStatus::Hoteling),
    ("HT303", "Hot Desk C", 420.0, 380.0, 80.0, 60.0, RoomStatus::Hoteling),
    ("HT304", "Hot Desk D", 520.0, 380.0, 80.0, 60.0, RoomStatus::Hoteling),
    ("CR001", "Corner Office L1", 420.0, 460.0, 90.0, 80.0, RoomStatus::Office),
    ("CR002", "Corner Office L2", 530.0, 460.0, 70.0, 50.0, RoomStatus::Office),
    ("VT401", "Available Suite", 680.0, 80.0, 120.0, 100.0, RoomStatus::Vacant),
    ("VT402", "Vacant Office", 680.0, 200.0, 90.0, 80.0, RoomStatus::Vacant),
    ("OF201", "Private Office 1", 790.0, 200.0, 80.0, 80.0, RoomStatus::Office),
    ("PN501", "Pending Suite A", 680.0, 300.0, 100.0, 90.0, RoomStatus::Pending),
    ("PN502", "Pending Suite B", 800.0, 300.0, 100.0, 90.0, RoomStatus::Pending),
    ("CR003", "Corner Unit 1", 680.0, 410.0, 70.0, 60.0, RoomStatus::Forecast),
    ("CR004", "Corner Unit 2", 770.0, 410.0, 60.0, 70.0, RoomStatus::Forecast),
    ("CR005", "Corner Extension", 680.0, 490.0, 90.0, 50.0, RoomStatus::Hoteling),
    ("OF301", "End Office 1", 920.0, 80.0, 100.0, 80.0, RoomStatus::Office),
    ("OF302", "End Office 2", 920.0, 180.0, 100.0, 80.0, RoomStatus::Office),
    ("VT403", "End Vacant", 920.0, 280.0, 100.0, 80.0, RoomStatus::Vacant),
    ("PN503", "End Pending", 920.0, 380.0, 100.0, 80.0, RoomStatus::Pending),
    ("HT305", "End Hoteling", 920.0, 480.0, 100.0, 60.0, RoomStatus::Hoteling),
    ("UT001", "Storage", 60.0, 510.0, 60.0, 40.0, RoomStatus::Vacant),
    ("UT002", "Copy Room", 140.0, 510.0, 60.0, 40.0, RoomStatus::Office),
    ("UT003", "Break Room", 220.0, 510.0, 80.0, 40.0, RoomStatus::Office),
    ("CR006", "Corner Complex", 850.0, 410.0, 60.0, 90.0, RoomStatus::Pending),
    ("CR007", "Corner Annex", 850.0, 510.0, 90.0, 40.0, RoomStatus::Hoteling),
];

/// The level-one desk floor rooms in display order.
#[must_use]
pub fn desk_floor() -> Vec<Room> {
    DESK_FLOOR
        .into_iter()
        .map(|(id, name, x, y, w, h, status)| Room::new(id, name, Rect::new(x, y, w, h), status))
        .collect()
}

/// Conference rooms offered by the mobile booking flow.
#[must_use]
pub fn conference_rooms() -> Vec<Room> {
    [
        ("room-101", "Conference Room A", "available", 8, &["Projector", "Whiteboard"][..], "Large conference room with modern amenities"),
        ("room-102", "Conference Room B", "reserved", 6, &["TV Screen", "Conference Phone"][..], "Medium-sized room perfect for team meetings"),
        ("room-103", "Meeting Room 1", "available", 4, &["Whiteboard"][..], "Small meeting room for focused discussions"),
        ("room-104", "Meeting Room 2", "vacant", 4, &["TV Screen"][..], "Compact room for small team meetings"),
        ("room-105", "Executive Room", "available", 12, &["Projector", "Sound System", "Video Conference"][..], "Premium executive boardroom"),
        ("room-106", "Training Room", "pending", 20, &["Projector", "Sound System", "Microphone"][..], "Large training room for workshops and presentations"),
    ]
    .into_iter()
    .map(|(id, name, status, capacity, equipment, description)| Room {
        capacity: Some(capacity),
        equipment: equipment.iter().map(|e| (*e).to_owned()).collect(),
        description: Some(description.to_owned()),
        ..Room::new(
            id,
            name,
            Rect::new(0.0, 0.0, PLACEHOLDER_ROOM_SIZE, PLACEHOLDER_ROOM_SIZE),
            RoomStatus::from(status),
        )
    })
    .collect()
}

/// Registry over [`desk_floor`].
///
/// # Errors
///
/// Propagates registry validation errors; the built-in data passes them.
pub fn desk_floor_registry() -> Result<RoomRegistry, RegistryError> {
    RoomRegistry::new(desk_floor())
}

/// Registry over [`conference_rooms`].
///
/// # Errors
///
/// Propagates registry validation errors; the built-in data passes them.
pub fn conference_registry() -> Result<RoomRegistry, RegistryError> {
    RoomRegistry::new(conference_rooms())
}
