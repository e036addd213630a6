//! Detail dialog for the room selected on the desktop floor map.
//!
//! Closes on the close controls, a click on the backdrop itself, or Escape.
//! Each path is sent to the mounted viewer as a [`ViewerCommand`] so the
//! engine's selection stays the single source of truth.

use leptos::prelude::*;

use floorplan::room::Room;
use floorplan::selection::DismissReason;
use floorplan::style::badge_class;

use crate::state::viewer::{ViewerCommand, ViewerState};

/// Modal over the floor map while a room is selected.
#[component]
pub fn RoomModal() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let selected = Memo::new(move |_| viewer.with(|v| v.selected.clone()));

    move || selected.get().map(|room| view! { <RoomModalDialog room=room viewer=viewer/> })
}

#[component]
fn RoomModalDialog(room: Room, viewer: RwSignal<ViewerState>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    let request = move |command: ViewerCommand| viewer.update(|v| v.request(command));

    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.focus();
        }
    });

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        let target_is_backdrop = ev.target() == ev.current_target();
        request(ViewerCommand::BackdropClick(target_is_backdrop));
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            request(ViewerCommand::Dismiss(DismissReason::Escape));
        }
    };
    let on_close = move |_| request(ViewerCommand::Dismiss(DismissReason::CloseControl));

    let badge = format!("room-modal__badge {}", badge_class(&room.status));

    view! {
        <div
            class="room-modal__backdrop"
            node_ref=dialog_ref
            tabindex="0"
            role="dialog"
            aria-labelledby="room-modal-title"
            aria-describedby="room-modal-description"
            on:click=on_backdrop
            on:keydown=on_keydown
        >
            <div class="room-modal">
                <div class="room-modal__header">
                    <h2 id="room-modal-title">{room.name.clone()}</h2>
                    <button class="room-modal__close" on:click=on_close aria-label="Close modal">
                        "✕"
                    </button>
                </div>
                <dl id="room-modal-description" class="room-modal__fields">
                    <dt>"Room ID:"</dt>
                    <dd class="room-modal__id">{room.id.clone()}</dd>
                    <dt>"Status:"</dt>
                    <dd>
                        <span class=badge>{room.status.display_name()}</span>
                    </dd>
                    <dt>"Dimensions:"</dt>
                    <dd>{room.dimensions_label()}</dd>
                    <dt>"Position:"</dt>
                    <dd>{room.position_label()}</dd>
                </dl>
                <div class="room-modal__footer">
                    <button class="room-modal__done" on:click=on_close>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
