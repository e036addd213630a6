//! External vector floor document: shapes styled and bound in place.
//!
//! The document is the source of geometry. Each shape with an `id` is
//! matched against the registry; matched shapes take their room's status
//! colors, unmatched ones become placeholder rooms drawn with the document's
//! own styling.

#[cfg(test)]
#[path = "vector_document_test.rs"]
mod vector_document_test;

use std::collections::{HashMap, HashSet};

use super::{BackendError, BackendKind, BackendOutput, FloorBackend};
use crate::camera::Point;
use crate::registry::{Reconciliation, RoomRegistry};
use crate::room::{Rect, Room, RoomId};
use crate::scene::Scene;
use crate::style::status_to_style;
use crate::svg::{
    Decoration, ElementRole, FloorDocument, HOVER_CLASS, LABEL_CLASS, RootAttributes, SHAPE_CLASS,
};

/// Backend for an SVG floor plan fetched at runtime.
#[derive(Debug, Clone)]
pub struct VectorDocumentBackend {
    doc: Option<FloorDocument>,
    shape_rooms: HashMap<String, RoomId>,
    matched: HashSet<String>,
    root: RootAttributes<'static>,
}

impl Default for VectorDocumentBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorDocumentBackend {
    #[must_use]
    pub fn new() -> Self {
        Self { doc: None, shape_rooms: HashMap::new(), matched: HashSet::new(), root: RootAttributes::default() }
    }

    /// Variant whose root carries the mobile id and layout class.
    #[must_use]
    pub fn mobile() -> Self {
        Self { root: RootAttributes::mobile(), ..Self::new() }
    }

    /// Bind `doc` to `registry`.
    ///
    /// The returned reconciliation's registry holds the original rooms plus a
    /// placeholder for every unmatched shape; the caller should adopt it so
    /// placeholders become selectable.
    pub fn load(&mut self, doc: FloorDocument, registry: &RoomRegistry) -> Reconciliation {
        let reconciliation = registry.reconcile(doc.shape_ids());
        self.matched = doc
            .shape_ids()
            .filter(|id| !reconciliation.placeholders.iter().any(|p| p == id))
            .map(str::to_owned)
            .collect();
        self.shape_rooms.clone_from(&reconciliation.shape_rooms);
        log::debug!(
            "bound {} shapes ({} placeholders)",
            self.shape_rooms.len(),
            reconciliation.placeholders.len()
        );
        self.doc = Some(doc);
        reconciliation
    }

    /// Drop the current document.
    pub fn unload(&mut self) {
        self.doc = None;
        self.shape_rooms.clear();
        self.matched.clear();
    }

    #[must_use]
    pub fn document(&self) -> Option<&FloorDocument> {
        self.doc.as_ref()
    }

    /// Whether `shape_id` matched a registry room rather than a placeholder.
    #[must_use]
    pub fn is_matched(&self, shape_id: &str) -> bool {
        self.matched.contains(shape_id)
    }

    /// Room a shape or label identifier renders.
    #[must_use]
    pub fn room_for_shape(&self, shape_id: &str) -> Option<&RoomId> {
        self.shape_rooms.get(shape_id)
    }

    fn decorate(&self, scene: &Scene, role: ElementRole, id: &str) -> Decoration {
        let ElementRole::Shape(_) = role else {
            return Decoration { class: LABEL_CLASS.to_owned(), style: None };
        };
        let node = self.room_for_shape(id).and_then(|room_id| scene.node(room_id));
        let mut class = SHAPE_CLASS.to_owned();
        if node.is_some_and(|n| n.hovered) {
            class.push(' ');
            class.push_str(HOVER_CLASS);
        }
        let style = node
            .filter(|_| self.is_matched(id))
            .map(|n| status_to_style(&n.status).svg_declarations());
        Decoration { class, style }
    }
}

impl FloorBackend for VectorDocumentBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::VectorDocument
    }

    fn load_document(&mut self, doc: FloorDocument, registry: &RoomRegistry) -> Option<Reconciliation> {
        Some(self.load(doc, registry))
    }

    fn scene_rooms(&self, registry: &RoomRegistry) -> Vec<Room> {
        let Some(doc) = &self.doc else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        doc.shape_ids()
            .filter_map(|shape_id| {
                let room = match self.room_for_shape(shape_id).and_then(|id| registry.get(id)) {
                    Some(room) => room.clone(),
                    None => registry.resolve_shape(shape_id),
                };
                seen.insert(room.id.clone()).then_some(room)
            })
            .collect()
    }

    fn content_bounds(&self, _scene: &Scene) -> Rect {
        self.doc
            .as_ref()
            .and_then(FloorDocument::extent)
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 0.0, 0.0))
    }

    fn hit_test(&self, _scene: &Scene, world: Point) -> Option<RoomId> {
        let shape = self.doc.as_ref()?.shape_at(world)?;
        self.room_for_shape(&shape.id).cloned()
    }

    fn shape_count(&self, _scene: &Scene) -> usize {
        self.doc.as_ref().map_or(0, |d| d.shapes.len())
    }

    fn output(&self, scene: &Scene) -> Result<BackendOutput, BackendError> {
        let doc = self.doc.as_ref().ok_or(BackendError::NotLoaded)?;
        let markup = doc.rewrite(self.root, &mut |role, id| self.decorate(scene, role, id))?;
        Ok(BackendOutput::Markup(markup))
    }
}
