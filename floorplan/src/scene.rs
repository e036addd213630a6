//! Declarative scene graph for the floor.
//!
//! ARCHITECTURE
//! ============
//! Each room becomes one [`SceneNode`] that carries its geometry, resolved
//! style and the interaction bindings it participates in. Backends render
//! nodes and route pointer hits back through node ids; they never consult the
//! registry directly.
//!
//! DESIGN
//! ======
//! The scene is rebuilt from the registry whenever room data changes and the
//! new scene is diffed against the old one. Transient interaction state
//! (hover, keyboard focus) lives on the nodes and survives a sync for any node
//! whose id is still present.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::hit::HitTarget;
use crate::room::{Rect, Room, RoomId, RoomStatus};
use crate::style::{RoomStyle, status_to_style};

/// Interactions a node responds to.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    /// Pointer enter/leave toggles hover.
    pub hoverable: bool,
    /// Click, tap, Enter and Space select the room.
    pub activatable: bool,
    /// Reachable with Tab.
    pub focusable: bool,
}

impl Bindings {
    /// Bindings every room carries.
    pub const ROOM: Self = Self { hoverable: true, activatable: true, focusable: true };
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: RoomId,
    pub name: String,
    pub status: RoomStatus,
    pub rect: Rect,
    pub style: RoomStyle,
    pub aria_label: String,
    pub bindings: Bindings,
    pub hovered: bool,
    pub focused: bool,
}

impl SceneNode {
    #[must_use]
    pub fn from_room(room: &Room) -> Self {
        Self {
            id: room.id.clone(),
            name: room.name.clone(),
            status: room.status.clone(),
            rect: room.rect(),
            style: status_to_style(&room.status),
            aria_label: room.aria_label(),
            bindings: Bindings::ROOM,
            hovered: false,
            focused: false,
        }
    }
}

impl HitTarget for SceneNode {
    fn target_id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// One difference between two scenes, keyed by node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneChange {
    Added(RoomId),
    Removed(RoomId),
    /// Status (and therefore style) changed.
    Restyled(RoomId),
    /// Position or size changed.
    Moved(RoomId),
    /// Display name changed.
    Relabeled(RoomId),
}

/// Ordered set of nodes; draw order is slice order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    #[must_use]
    pub fn from_rooms(rooms: &[Room]) -> Self {
        Self { nodes: rooms.iter().map(SceneNode::from_room).collect() }
    }

    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Changes that turn `self` into `next`. Removals come first, then
    /// per-node changes and additions in `next` order.
    #[must_use]
    pub fn diff(&self, next: &Scene) -> Vec<SceneChange> {
        let mut changes: Vec<SceneChange> = self
            .nodes
            .iter()
            .filter(|old| next.node(&old.id).is_none())
            .map(|old| SceneChange::Removed(old.id.clone()))
            .collect();

        for node in &next.nodes {
            let Some(old) = self.node(&node.id) else {
                changes.push(SceneChange::Added(node.id.clone()));
                continue;
            };
            if old.status != node.status {
                changes.push(SceneChange::Restyled(node.id.clone()));
            }
            if old.rect != node.rect {
                changes.push(SceneChange::Moved(node.id.clone()));
            }
            if old.name != node.name {
                changes.push(SceneChange::Relabeled(node.id.clone()));
            }
        }
        changes
    }

    /// Rebuild from `rooms`, keeping hover/focus on surviving nodes.
    pub fn sync(&mut self, rooms: &[Room]) -> Vec<SceneChange> {
        let mut next = Self::from_rooms(rooms);
        let changes = self.diff(&next);
        for node in &mut next.nodes {
            if let Some(old) = self.node(&node.id) {
                node.hovered = old.hovered;
                node.focused = old.focused;
            }
        }
        *self = next;
        changes
    }

    // ── Hover ───────────────────────────────────────────────────

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.nodes.iter().find(|n| n.hovered).map(|n| n.id.as_str())
    }

    /// Move hover to `id` (or clear it). Returns whether anything changed.
    pub fn set_hover(&mut self, id: Option<&str>) -> bool {
        let mut changed = false;
        for node in &mut self.nodes {
            let hovered = node.bindings.hoverable && Some(node.id.as_str()) == id;
            if node.hovered != hovered {
                node.hovered = hovered;
                changed = true;
            }
        }
        changed
    }

    // ── Focus ───────────────────────────────────────────────────

    #[must_use]
    pub fn focused(&self) -> Option<&str> {
        self.nodes.iter().find(|n| n.focused).map(|n| n.id.as_str())
    }

    /// Put focus on `id` (or clear it). Returns whether anything changed.
    pub fn set_focus(&mut self, id: Option<&str>) -> bool {
        let mut changed = false;
        for node in &mut self.nodes {
            let focused = node.bindings.focusable && Some(node.id.as_str()) == id;
            if node.focused != focused {
                node.focused = focused;
                changed = true;
            }
        }
        changed
    }

    /// Advance focus through focusable nodes in order, wrapping at either
    /// end. With no current focus, forward starts at the first node and
    /// backward at the last.
    pub fn cycle_focus(&mut self, backward: bool) -> Option<RoomId> {
        let focusable: Vec<usize> =
            self.nodes.iter().enumerate().filter(|(_, n)| n.bindings.focusable).map(|(i, _)| i).collect();
        if focusable.is_empty() {
            return None;
        }
        let current = focusable.iter().position(|&i| self.nodes[i].focused);
        let next_pos = match (current, backward) {
            (None, false) => 0,
            (None, true) => focusable.len() - 1,
            (Some(pos), false) => (pos + 1) % focusable.len(),
            (Some(pos), true) => (pos + focusable.len() - 1) % focusable.len(),
        };
        let id = self.nodes[focusable[next_pos]].id.clone();
        self.set_focus(Some(&id));
        Some(id)
    }
}
