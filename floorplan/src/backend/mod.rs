//! Renderer backends.
//!
//! ARCHITECTURE
//! ============
//! Every viewer draws the same [`Scene`] through one [`FloorBackend`]. A
//! backend decides which rooms make up the scene, how big the content is,
//! which room sits under a world-space point, and what it hands to the host
//! for drawing:
//!
//! | Backend | Output | Host does |
//! |---------|--------|-----------|
//! | [`ShapeGraphBackend`] | [`DisplayList`] | replays it on a Canvas 2D context |
//! | [`VectorDocumentBackend`] | SVG markup | injects it into the DOM |
//! | [`NodeGraphBackend`] | [`FlowNode`]s | positions one element per node |
//!
//! Selection, hover and focus semantics live in the scene and the engine,
//! so all three backends behave identically from the user's point of view.

mod node_graph;
mod shape_graph;
mod vector_document;

pub use node_graph::{FlowNode, FlowNodeStyle, NodeGraphBackend};
pub use shape_graph::{DisplayList, DrawCmd, FOCUS_RING_COLOR, HOVER_BRIGHTNESS, ShapeGraphBackend, TextAlign};
pub use vector_document::VectorDocumentBackend;

use crate::camera::Point;
use crate::layout::Size;
use crate::registry::{Reconciliation, RoomRegistry};
use crate::room::{Rect, Room, RoomId};
use crate::scene::Scene;
use crate::svg::{FloorDocument, SvgError};

/// Which backend a viewer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    ShapeGraph,
    VectorDocument,
    NodeGraph,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The vector document has not finished loading.
    #[error("floor document not loaded")]
    NotLoaded,

    #[error(transparent)]
    Svg(#[from] SvgError),
}

/// What a backend hands to the host for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendOutput {
    DisplayList(DisplayList),
    Markup(String),
    Nodes(Vec<FlowNode>),
}

/// Renderer contract shared by the three viewers.
pub trait FloorBackend {
    fn kind(&self) -> BackendKind;

    /// Rooms the scene should hold, in draw order.
    fn scene_rooms(&self, registry: &RoomRegistry) -> Vec<Room>;

    /// Container size changed.
    fn resize(&mut self, _container: Size) {}

    /// Bind a freshly loaded floor document. Backends that draw from the
    /// registry alone ignore it and return `None`.
    fn load_document(&mut self, _doc: FloorDocument, _registry: &RoomRegistry) -> Option<Reconciliation> {
        None
    }

    /// World-space extent the viewport fits to.
    fn content_bounds(&self, scene: &Scene) -> Rect;

    /// Room under `world`, topmost first.
    fn hit_test(&self, scene: &Scene, world: Point) -> Option<RoomId>;

    /// Number of selectable shapes currently rendered.
    fn shape_count(&self, scene: &Scene) -> usize;

    /// Produce output for the current scene.
    ///
    /// # Errors
    ///
    /// [`BackendError::NotLoaded`] when the backend has nothing to draw yet,
    /// [`BackendError::Svg`] if document rewriting fails.
    fn output(&self, scene: &Scene) -> Result<BackendOutput, BackendError>;
}
