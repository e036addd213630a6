//! Booking form state fed by the floor viewers.
//!
//! The form itself is a thin collaborator: the viewers only ever write the
//! chosen room's display name into it.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

/// Which part of the day a request covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeSlot {
    #[default]
    AllDay,
    Morning,
    Afternoon,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [Self::AllDay, Self::Morning, Self::Afternoon];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllDay => "all-day",
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AllDay => "All Day",
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == raw)
    }
}

/// Booking request form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingState {
    pub request_date: String,
    pub request_for_me: bool,
    pub requested_for: String,
    pub time_slot: TimeSlot,
    pub building: String,
    pub floor: String,
    /// Display name of the room picked on the floor plan.
    pub room: String,
    /// Id of the last room reserved through a viewer.
    pub room_id: Option<String>,
    /// Bumped on every reservation so pages can react to repeats.
    pub reservation_seq: u64,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            request_date: String::new(),
            request_for_me: true,
            requested_for: String::new(),
            time_slot: TimeSlot::AllDay,
            building: String::new(),
            floor: String::new(),
            room: String::new(),
            room_id: None,
            reservation_seq: 0,
        }
    }
}

impl BookingState {
    /// Take a reservation from a floor viewer.
    pub fn apply_room_selection(&mut self, room_id: &str, room_name: &str) {
        room_name.clone_into(&mut self.room);
        self.room_id = Some(room_id.to_owned());
        self.reservation_seq += 1;
    }

    /// Changing the building invalidates the floor choice.
    pub fn set_building(&mut self, building: &str) {
        if self.building != building {
            building.clone_into(&mut self.building);
            self.floor.clear();
        }
    }

    /// Fields still missing before the request can be submitted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.request_date.trim().is_empty() {
            missing.push("Request date");
        }
        if !self.request_for_me && self.requested_for.trim().is_empty() {
            missing.push("Requested for");
        }
        if self.building.is_empty() {
            missing.push("Building");
        }
        if self.floor.is_empty() {
            missing.push("Floor");
        }
        if self.room.is_empty() {
            missing.push("Room");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
