//! Room registry: the read-only, ordered room set a viewer renders.
//!
//! The registry is built once per load from a static dataset or JSON and is
//! never mutated by the viewer. Besides id lookup it resolves identifiers
//! found in externally authored floor documents, matching either a room id or
//! a room's normalized name, and synthesizes placeholder rooms for shapes it
//! has no record of so every shape stays renderable and selectable.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

use crate::consts::PLACEHOLDER_ROOM_SIZE;
use crate::room::{Rect, Room, RoomId, RoomStatus};

/// Errors raised while building a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two rooms share an id.
    #[error("duplicate room id: {0}")]
    DuplicateId(RoomId),
    /// A room has a zero or negative width or height.
    #[error("room {id} has non-positive size {width} × {height}")]
    InvalidSize { id: RoomId, width: f64, height: f64 },
    /// The JSON room list could not be decoded.
    #[error("failed to decode room list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Lowercase a name and collapse whitespace runs into single hyphens.
///
/// `"Conference Room A"` becomes `"conference-room-a"`.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}

/// Derive a display name from a shape identifier.
///
/// Hyphens and underscores become spaces and the first character of every
/// word is uppercased: `"room-101"` becomes `"Room 101"`.
#[must_use]
pub fn display_name_from_identifier(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut prev_word = false;
    for ch in identifier.chars() {
        let ch = if ch == '-' || ch == '_' { ' ' } else { ch };
        let is_word = ch.is_ascii_alphanumeric();
        if is_word && !prev_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        prev_word = is_word;
    }
    out
}

/// Minimal room standing in for a shape the registry has no record of.
#[must_use]
pub fn placeholder_room(identifier: &str) -> Room {
    Room {
        capacity: Some(1),
        description: Some(format!("Room {identifier}")),
        ..Room::new(
            identifier,
            &display_name_from_identifier(identifier),
            Rect::new(0.0, 0.0, PLACEHOLDER_ROOM_SIZE, PLACEHOLDER_ROOM_SIZE),
            RoomStatus::Available,
        )
    }
}

/// Result of matching a floor document's shape identifiers to rooms.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// Registry rooms followed by placeholders for unmatched shapes.
    pub registry: RoomRegistry,
    /// Shape identifier to the id of the room it renders.
    pub shape_rooms: HashMap<String, RoomId>,
    /// Shape identifiers that required a placeholder, in document order.
    pub placeholders: Vec<String>,
}

/// Ordered, read-only set of rooms with id and normalized-name indexes.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
    by_id: HashMap<RoomId, usize>,
    by_name: HashMap<String, usize>,
}

impl RoomRegistry {
    /// Build a registry, rejecting duplicate ids and non-positive sizes.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] or [`RegistryError::InvalidSize`]
    /// for the first offending room.
    pub fn new(rooms: Vec<Room>) -> Result<Self, RegistryError> {
        let mut by_id = HashMap::with_capacity(rooms.len());
        let mut by_name = HashMap::with_capacity(rooms.len());
        for (index, room) in rooms.iter().enumerate() {
            if room.width <= 0.0 || room.height <= 0.0 {
                return Err(RegistryError::InvalidSize {
                    id: room.id.clone(),
                    width: room.width,
                    height: room.height,
                });
            }
            if by_id.insert(room.id.clone(), index).is_some() {
                return Err(RegistryError::DuplicateId(room.id.clone()));
            }
            by_name.entry(normalize_name(&room.name)).or_insert(index);
        }
        Ok(Self { rooms, by_id, by_name })
    }

    /// Decode a JSON array of rooms and build a registry from it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Decode`] on malformed JSON, otherwise the
    /// validation errors of [`RoomRegistry::new`].
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let rooms: Vec<Room> = serde_json::from_str(raw)?;
        Self::new(rooms)
    }

    /// Rooms in registry order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Look up a room by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Room> {
        self.by_id.get(id).map(|&i| &self.rooms[i])
    }

    /// Find the room an external shape identifier refers to.
    ///
    /// An identifier matches a room whose id equals it exactly, or whose
    /// normalized name equals the lowercased identifier.
    #[must_use]
    pub fn find_by_shape_id(&self, shape_id: &str) -> Option<&Room> {
        self.get(shape_id).or_else(|| {
            self.by_name
                .get(&shape_id.to_lowercase())
                .map(|&i| &self.rooms[i])
        })
    }

    /// Resolve a shape identifier to a room, synthesizing a placeholder for
    /// identifiers with no matching record.
    #[must_use]
    pub fn resolve_shape(&self, shape_id: &str) -> Room {
        if let Some(room) = self.find_by_shape_id(shape_id) {
            return room.clone();
        }
        log::debug!("no room record for shape {shape_id}, using placeholder");
        placeholder_room(shape_id)
    }

    /// Match every shape identifier against this registry.
    #[must_use]
    pub fn reconcile<'a, I>(&self, shape_ids: I) -> Reconciliation
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rooms = self.rooms.clone();
        let mut shape_rooms = HashMap::new();
        let mut placeholders = Vec::new();
        let mut by_id = self.by_id.clone();

        for shape_id in shape_ids {
            if shape_rooms.contains_key(shape_id) {
                continue;
            }
            let room_id = if let Some(room) = self.find_by_shape_id(shape_id) {
                room.id.clone()
            } else {
                log::debug!("no room record for shape {shape_id}, using placeholder");
                by_id.insert(shape_id.to_owned(), rooms.len());
                rooms.push(placeholder_room(shape_id));
                placeholders.push(shape_id.to_owned());
                shape_id.to_owned()
            };
            shape_rooms.insert(shape_id.to_owned(), room_id);
        }

        let mut by_name = self.by_name.clone();
        for (index, room) in rooms.iter().enumerate().skip(self.rooms.len()) {
            by_name.entry(normalize_name(&room.name)).or_insert(index);
        }

        Reconciliation {
            registry: Self { rooms, by_id, by_name },
            shape_rooms,
            placeholders,
        }
    }

    /// Number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the registry holds no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
