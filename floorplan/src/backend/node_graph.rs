//! Node graph: one positioned, non-draggable node per room.

#[cfg(test)]
#[path = "node_graph_test.rs"]
mod node_graph_test;

use super::{BackendError, BackendKind, BackendOutput, FloorBackend};
use crate::camera::Point;
use crate::hit;
use crate::registry::RoomRegistry;
use crate::room::{Rect, Room, RoomId};
use crate::scene::{Scene, SceneNode};
use crate::style::is_outlined;

const NAME_FONT_MAX: f64 = 12.0;
const ID_FONT_MAX: f64 = 10.0;
const OUTLINED_OPACITY: f64 = 0.8;

/// Visual attributes of a node, derived from the status style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowNodeStyle {
    pub background: &'static str,
    pub border_color: &'static str,
    pub border_width: f64,
    pub opacity: f64,
}

/// A room as the host positions it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub id: RoomId,
    pub label: String,
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub style: FlowNodeStyle,
    pub draggable: bool,
    pub name_font_px: f64,
    pub id_font_px: f64,
    pub hovered: bool,
    pub focused: bool,
    pub aria_label: String,
}

impl FlowNode {
    #[must_use]
    pub fn from_scene_node(node: &SceneNode) -> Self {
        let outlined = is_outlined(&node.status);
        let Rect { x, y, width, height } = node.rect;
        Self {
            id: node.id.clone(),
            label: node.name.clone(),
            position: Point::new(x, y),
            width,
            height,
            style: FlowNodeStyle {
                background: node.style.fill,
                border_color: node.style.stroke,
                border_width: if outlined { 2.0 } else { 1.0 },
                opacity: if outlined { OUTLINED_OPACITY } else { 1.0 },
            },
            draggable: false,
            name_font_px: (width / 8.0).min(height / 8.0).min(NAME_FONT_MAX),
            id_font_px: (width / 12.0).min(height / 12.0).min(ID_FONT_MAX),
            hovered: node.hovered,
            focused: node.focused,
            aria_label: node.aria_label.clone(),
        }
    }
}

/// Backend that hands the host a list of nodes to position.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeGraphBackend;

impl NodeGraphBackend {
    #[must_use]
    pub fn nodes(scene: &Scene) -> Vec<FlowNode> {
        scene.nodes().iter().map(FlowNode::from_scene_node).collect()
    }
}

impl FloorBackend for NodeGraphBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::NodeGraph
    }

    fn scene_rooms(&self, registry: &RoomRegistry) -> Vec<Room> {
        registry.rooms().to_vec()
    }

    fn content_bounds(&self, scene: &Scene) -> Rect {
        scene
            .nodes()
            .iter()
            .map(|n| n.rect)
            .reduce(|a, b| a.union(&b))
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 0.0, 0.0))
    }

    fn hit_test(&self, scene: &Scene, world: Point) -> Option<RoomId> {
        hit::hit_test(world, scene.nodes()).map(|n| n.id.clone())
    }

    fn shape_count(&self, scene: &Scene) -> usize {
        scene.len()
    }

    fn output(&self, scene: &Scene) -> Result<BackendOutput, BackendError> {
        Ok(BackendOutput::Nodes(Self::nodes(scene)))
    }
}
