//! Bridges between a mounted engine and the reactive viewer state.
//!
//! Every host funnels engine actions and chrome commands through here, so
//! the canvas, vector and node-graph viewers publish identical snapshots.
//! The state-only halves are plain functions over `&mut` state and are
//! tested without a reactive runtime.

#[cfg(test)]
#[path = "viewer_sync_test.rs"]
mod viewer_sync_test;

use floorplan::engine::{Action, EngineCore};
use floorplan::selection::Reservation;
use leptos::prelude::*;

use crate::state::booking::BookingState;
use crate::state::viewer::{ViewerCommand, ViewerState};

/// Run a chrome command against the engine.
pub fn run_command(core: &mut EngineCore, command: ViewerCommand) -> Vec<Action> {
    match command {
        ViewerCommand::ZoomIn => core.zoom_in(),
        ViewerCommand::ZoomOut => core.zoom_out(),
        ViewerCommand::ResetView => core.reset_view(),
        ViewerCommand::ToggleFullscreen => core.toggle_fullscreen(),
        ViewerCommand::Dismiss(reason) => core.dismiss(reason),
        ViewerCommand::BackdropClick(target_is_backdrop) => core.backdrop_click(target_is_backdrop),
        ViewerCommand::Reserve => core.reserve(),
    }
}

/// Run queued chrome commands in order, collecting every action.
pub fn run_commands(core: &mut EngineCore, commands: impl IntoIterator<Item = ViewerCommand>) -> Vec<Action> {
    commands.into_iter().flat_map(|command| run_command(core, command)).collect()
}

/// What the host must do after folding actions into the snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Applied {
    pub render: bool,
    /// Reservation to hand to the booking form.
    pub reservation: Option<Reservation>,
}

/// Fold `actions` into the snapshot.
pub fn apply_actions(actions: &[Action], core: &EngineCore, state: &mut ViewerState) -> Applied {
    let mut applied = Applied::default();
    for action in actions {
        match action {
            Action::RenderNeeded => applied.render = true,
            Action::SetCursor(cursor) => cursor.clone_into(&mut state.cursor),
            Action::RoomSelected(_) | Action::SelectionCleared => {}
            Action::RoomReserved { room_id, room_name } => {
                applied.reservation = Some(Reservation { room_id: room_id.clone(), room_name: room_name.clone() });
            }
            Action::FullscreenToggled(on) => state.fullscreen = *on,
        }
    }
    refresh_snapshot(core, state);
    applied
}

/// Copy the engine's observable state into `state`.
pub fn refresh_snapshot(core: &EngineCore, state: &mut ViewerState) {
    state.camera = core.camera();
    state.legend = core.legend_counts();
    state.shape_count = core.shape_count();
    state.loading = core.loader.state().is_loading();
    state.fault = core.fault();
    state.selected = core.selected_room().cloned();
}

/// Signal wrapper over [`apply_actions`]; forwards reservations to the
/// booking form. Returns whether the viewer must redraw.
pub fn publish_actions(
    actions: &[Action],
    core: &EngineCore,
    viewer: RwSignal<ViewerState>,
    booking: RwSignal<BookingState>,
) -> bool {
    if actions.is_empty() {
        return false;
    }
    let mut applied = Applied::default();
    viewer.update(|state| applied = apply_actions(actions, core, state));
    if let Some(reservation) = applied.reservation {
        booking.update(|form| form.apply_room_selection(&reservation.room_id, &reservation.room_name));
    }
    applied.render
}

/// Signal wrapper over [`refresh_snapshot`].
pub fn publish_snapshot(core: &EngineCore, viewer: RwSignal<ViewerState>) {
    viewer.update(|state| refresh_snapshot(core, state));
}
