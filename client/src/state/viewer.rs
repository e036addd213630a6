//! Floor viewer state published to chrome components.
//!
//! DESIGN
//! ======
//! The engine lives inside its host component and is not `Send`, so chrome
//! (modal, toolbar, legend) never touches it directly. Hosts publish
//! snapshots into [`ViewerState`]; chrome queues [`ViewerCommand`]s and bumps
//! `command_seq`, and the host drains the queue in order against its engine.
//! One click can queue several commands (a dialog button, then the bubbled
//! backdrop click), so nothing queued is ever overwritten.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use std::collections::VecDeque;

use floorplan::camera::Camera;
use floorplan::legend::LegendEntry;
use floorplan::room::{Room, RoomStatus};
use floorplan::selection::DismissReason;
use leptos::prelude::RwSignal;

/// Shared flag for the narrow-screen legend sheet, provided by the app root.
#[derive(Clone, Copy, Debug)]
pub struct ViewerContext {
    pub show_legend: RwSignal<bool>,
}

/// Request from chrome to the mounted viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerCommand {
    ZoomIn,
    ZoomOut,
    ResetView,
    ToggleFullscreen,
    Dismiss(DismissReason),
    /// Click on the modal backdrop; `true` when the backdrop itself was the target.
    BackdropClick(bool),
    Reserve,
}

/// Snapshot of one mounted viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerState {
    /// Room shown in the detail panel.
    pub selected: Option<Room>,
    pub camera: Camera,
    pub fullscreen: bool,
    pub loading: bool,
    /// Visible error text when the floor document failed.
    pub fault: Option<String>,
    pub legend: Vec<LegendEntry>,
    pub shape_count: usize,
    pub cursor: String,
    /// Commands requested over the viewer's lifetime.
    pub command_seq: u64,
    pub commands: VecDeque<ViewerCommand>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            selected: None,
            camera: Camera::default(),
            fullscreen: false,
            loading: false,
            fault: None,
            legend: Vec::new(),
            shape_count: 0,
            cursor: "default".to_owned(),
            command_seq: 0,
            commands: VecDeque::new(),
        }
    }
}

impl ViewerState {
    /// Queue `command` for the host.
    pub fn request(&mut self, command: ViewerCommand) {
        self.command_seq += 1;
        self.commands.push_back(command);
    }

    /// Drain every queued command, oldest first.
    pub fn take_commands(&mut self) -> Vec<ViewerCommand> {
        self.commands.drain(..).collect()
    }

    /// Zoom as a whole percentage for display.
    pub fn zoom_percent(&self) -> i64 {
        #[allow(clippy::cast_possible_truncation)]
        let percent = (self.camera.zoom * 100.0).round() as i64;
        percent
    }

    /// Whether the Reserve action applies to the selected room.
    pub fn can_reserve(&self) -> bool {
        self.selected.as_ref().is_some_and(|room| room.status == RoomStatus::Available)
    }
}
