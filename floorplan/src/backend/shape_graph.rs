//! Immediate-mode shape graph: the floor as a Canvas 2D display list.

#[cfg(test)]
#[path = "shape_graph_test.rs"]
mod shape_graph_test;

use super::{BackendError, BackendKind, BackendOutput, FloorBackend};
use crate::camera::Point;
use crate::config::ViewerConfig;
use crate::hit;
use crate::label::{ApproxMeasure, ID_COLOR, NAME_COLOR, RoomLabel, TextMeasure};
use crate::layout::{Size, surface_size};
use crate::registry::RoomRegistry;
use crate::room::{Rect, Room, RoomId};
use crate::scene::{Scene, SceneNode};
use crate::shell::{self, DoorKind, FloorShell, ShellText};

/// Brightness multiplier applied to a hovered room's fill.
pub const HOVER_BRIGHTNESS: f64 = 0.92;

/// Corner radius for rooms and the main entrance.
pub const ROOM_CORNER_RADIUS: f64 = 2.0;

/// Color of the keyboard focus ring.
pub const FOCUS_RING_COLOR: &str = "#2563eb";

/// Horizontal anchoring of a text command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `at` is the top-left corner.
    Start,
    /// `at` is the horizontal center and vertical middle.
    Center,
}

/// One drawing instruction in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        rect: Rect,
        fill: Option<&'static str>,
        stroke: Option<&'static str>,
        stroke_width: f64,
        corner_radius: f64,
        shadow: bool,
        brightness: f64,
    },
    Line {
        from: Point,
        to: Point,
        stroke: &'static str,
        width: f64,
    },
    Arc {
        center: Point,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        stroke: &'static str,
        dash: [f64; 2],
    },
    Circle {
        center: Point,
        radius: f64,
        fill: &'static str,
    },
    Text {
        text: String,
        at: Point,
        font_px: f64,
        bold: bool,
        color: &'static str,
        align: TextAlign,
    },
    /// Keyboard focus indicator around a room.
    FocusRing { rect: Rect },
}

/// Everything needed to paint one frame, bottom layer first.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    /// Drawing-surface size in world units.
    pub size: Size,
    pub commands: Vec<DrawCmd>,
}

/// Canvas backend drawing the architectural shell and one rectangle per room.
pub struct ShapeGraphBackend {
    margin: f64,
    minimum: Size,
    container: Size,
    show_shell: bool,
    measure: Box<dyn TextMeasure>,
}

impl ShapeGraphBackend {
    #[must_use]
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            margin: config.content_margin,
            minimum: Size::new(config.min_canvas_width, config.min_canvas_height),
            container: Size::default(),
            show_shell: true,
            measure: Box::new(ApproxMeasure),
        }
    }

    /// Use real text metrics for label truncation.
    #[must_use]
    pub fn with_measure(mut self, measure: Box<dyn TextMeasure>) -> Self {
        self.measure = measure;
        self
    }

    /// Draw rooms only, without walls, corridors and doors.
    #[must_use]
    pub fn without_shell(mut self) -> Self {
        self.show_shell = false;
        self
    }

    /// Drawing-surface size for the current scene and container.
    #[must_use]
    pub fn surface(&self, scene: &Scene) -> Size {
        let extent = scene.nodes().iter().map(|n| n.rect).reduce(|a, b| a.union(&b));
        surface_size(extent, self.container, self.minimum, self.margin)
    }

    fn push_shell(&self, size: Size, out: &mut Vec<DrawCmd>) {
        let shell = FloorShell::standard(size.width, size.height);

        out.push(DrawCmd::Rect {
            rect: shell.building,
            fill: Some(shell::SHELL_FILL),
            stroke: Some(shell::SHELL_STROKE),
            stroke_width: 1.0,
            corner_radius: 0.0,
            shadow: false,
            brightness: 1.0,
        });

        out.extend(shell.corridors.iter().map(|c| DrawCmd::Rect {
            rect: c.rect,
            fill: Some(shell::CORRIDOR_FILL),
            stroke: Some(shell::CORRIDOR_STROKE),
            stroke_width: 1.0,
            corner_radius: 0.0,
            shadow: false,
            brightness: 1.0,
        }));

        out.extend(shell.walls.iter().map(|w| DrawCmd::Line {
            from: w.from,
            to: w.to,
            stroke: w.kind.color(),
            width: w.kind.thickness(),
        }));

        for door in &shell.doors {
            let main = door.kind == DoorKind::Main;
            out.push(DrawCmd::Rect {
                rect: door.rect,
                fill: Some(if main { shell::MAIN_DOOR_FILL } else { shell::DOOR_FILL }),
                stroke: Some(if main { shell::MAIN_DOOR_STROKE } else { shell::DOOR_STROKE }),
                stroke_width: 1.0,
                corner_radius: if main { ROOM_CORNER_RADIUS } else { 0.0 },
                shadow: false,
                brightness: 1.0,
            });
            if let Some(label) = door.label() {
                out.push(DrawCmd::Text {
                    text: label.to_owned(),
                    at: Point::new(door.rect.center().x, door.rect.y - 11.0),
                    font_px: 8.0,
                    bold: true,
                    color: shell::MAIN_DOOR_FILL,
                    align: TextAlign::Center,
                });
            }
            if let Some(arc) = door.swing_arc() {
                out.push(DrawCmd::Arc {
                    center: arc.center,
                    radius: arc.radius,
                    start_deg: arc.start_deg,
                    sweep_deg: arc.sweep_deg,
                    stroke: shell::SWING_STROKE,
                    dash: shell::SWING_DASH,
                });
            }
            if let Some(handle) = door.handle() {
                out.push(DrawCmd::Circle { center: handle, radius: shell::HANDLE_RADIUS, fill: shell::DOOR_STROKE });
            }
        }

        out.push(shell_text(&shell.title, TextAlign::Start));
        out.push(shell_text(&shell.subtitle, TextAlign::Start));
        out.push(DrawCmd::Line { from: shell.scale.from, to: shell.scale.to, stroke: shell::TITLE_COLOR, width: 2.0 });
        out.push(shell_text(&shell.scale.caption, TextAlign::Center));
    }

    fn push_room(&self, node: &SceneNode, out: &mut Vec<DrawCmd>) {
        out.push(DrawCmd::Rect {
            rect: node.rect,
            fill: Some(node.style.fill),
            stroke: Some(node.style.stroke),
            stroke_width: node.style.stroke_width,
            corner_radius: ROOM_CORNER_RADIUS,
            shadow: true,
            brightness: if node.hovered { HOVER_BRIGHTNESS } else { 1.0 },
        });
        if node.focused {
            out.push(DrawCmd::FocusRing { rect: node.rect });
        }

        let room = Room::new(&node.id, &node.name, node.rect, node.status.clone());
        let label = RoomLabel::layout(&room, self.measure.as_ref());
        out.push(DrawCmd::Text {
            text: label.name.text,
            at: label.name.at,
            font_px: label.name.font_px,
            bold: true,
            color: NAME_COLOR,
            align: TextAlign::Center,
        });
        if let Some(id) = label.id {
            out.push(DrawCmd::Text {
                text: id.text,
                at: id.at,
                font_px: id.font_px,
                bold: false,
                color: ID_COLOR,
                align: TextAlign::Center,
            });
        }
    }

    /// Build the display list for `scene`.
    #[must_use]
    pub fn display_list(&self, scene: &Scene) -> DisplayList {
        let size = self.surface(scene);
        let mut commands = Vec::new();
        if self.show_shell {
            self.push_shell(size, &mut commands);
        }
        for node in scene.nodes() {
            self.push_room(node, &mut commands);
        }
        DisplayList { size, commands }
    }
}

fn shell_text(text: &ShellText, align: TextAlign) -> DrawCmd {
    DrawCmd::Text {
        text: text.text.to_owned(),
        at: text.at,
        font_px: text.font_px,
        bold: text.bold,
        color: text.color,
        align,
    }
}

impl FloorBackend for ShapeGraphBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::ShapeGraph
    }

    fn scene_rooms(&self, registry: &RoomRegistry) -> Vec<Room> {
        registry.rooms().to_vec()
    }

    fn resize(&mut self, container: Size) {
        self.container = container;
    }

    fn content_bounds(&self, scene: &Scene) -> Rect {
        let size = self.surface(scene);
        Rect::new(0.0, 0.0, size.width, size.height)
    }

    fn hit_test(&self, scene: &Scene, world: Point) -> Option<RoomId> {
        hit::hit_test(world, scene.nodes()).map(|n| n.id.clone())
    }

    fn shape_count(&self, scene: &Scene) -> usize {
        scene.len()
    }

    fn output(&self, scene: &Scene) -> Result<BackendOutput, BackendError> {
        Ok(BackendOutput::DisplayList(self.display_list(scene)))
    }
}
