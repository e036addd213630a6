//! Room selection and detail-panel state.
//!
//! `Idle -> Selected(room) -> Idle`. Activating another room while one is
//! selected replaces it. The panel closes on its close control, a click on
//! the backdrop itself, or Escape. Reserving is only offered for
//! [`RoomStatus::Available`] rooms and always ends in `Idle`.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::room::{Room, RoomId, RoomStatus};

/// Why the detail panel was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The panel's close button.
    CloseControl,
    /// A click whose target is the backdrop element itself.
    Backdrop,
    /// The Escape key.
    Escape,
}

/// Reservation request handed to the booking flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub room_id: RoomId,
    pub room_name: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(Room),
}

impl Selection {
    /// Select `room`, replacing any current selection.
    pub fn select(&mut self, room: Room) {
        *self = Self::Selected(room);
    }

    /// Return to `Idle`. Returns whether a room was selected.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        let was_selected = self.is_selected();
        if was_selected {
            log::debug!("selection: dismissed via {reason:?}");
        }
        *self = Self::Idle;
        was_selected
    }

    /// Handle a click that reached the backdrop. Clicks that bubbled up from
    /// a child of the panel (`target_is_backdrop == false`) are ignored.
    pub fn on_backdrop_click(&mut self, target_is_backdrop: bool) -> bool {
        if target_is_backdrop { self.dismiss(DismissReason::Backdrop) } else { false }
    }

    /// Whether the Reserve action should be offered.
    #[must_use]
    pub fn can_reserve(&self) -> bool {
        matches!(self, Self::Selected(room) if room.status == RoomStatus::Available)
    }

    /// Reserve the selected room. Emits at most one reservation and always
    /// leaves the selection `Idle` when one is emitted.
    pub fn reserve(&mut self) -> Option<Reservation> {
        if !self.can_reserve() {
            return None;
        }
        match std::mem::take(self) {
            Self::Selected(room) => {
                log::info!("selection: reserving {} ({})", room.name, room.id);
                Some(Reservation { room_id: room.id, room_name: room.name })
            }
            Self::Idle => None,
        }
    }

    #[must_use]
    pub fn room(&self) -> Option<&Room> {
        match self {
            Self::Selected(room) => Some(room),
            Self::Idle => None,
        }
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.room().map(|r| r.id.as_str())
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}
