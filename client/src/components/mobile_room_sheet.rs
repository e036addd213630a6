//! Bottom sheet with room details for the mobile booking flow.
//!
//! Adds capacity, description and equipment to the desktop fields. Only
//! `available` rooms offer Reserve, which hands the room to the booking form
//! through the viewer and closes the sheet.

use leptos::prelude::*;

use floorplan::room::{Room, RoomStatus};
use floorplan::selection::DismissReason;
use floorplan::style::status_dot_class;

use crate::state::viewer::{ViewerCommand, ViewerState};

#[component]
pub fn MobileRoomSheet() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let selected = Memo::new(move |_| viewer.with(|v| v.selected.clone()));

    move || selected.get().map(|room| view! { <MobileRoomSheetBody room=room viewer=viewer/> })
}

#[component]
fn MobileRoomSheetBody(room: Room, viewer: RwSignal<ViewerState>) -> impl IntoView {
    let request = move |command: ViewerCommand| viewer.update(|v| v.request(command));
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
    let on_reserve = move |_| request(ViewerCommand::Reserve);

    let reservable = room.status == RoomStatus::Available;
    let dot = format!("room-sheet__dot {}", status_dot_class(&room.status));
    let capacity = room.capacity.map(|seats| {
        view! { <div class="room-sheet__capacity">{format!("Capacity: {seats} people")}</div> }
    });
    let description = room.description.clone().map(|text| {
        view! {
            <div class="room-sheet__section">
                <h4>"Description"</h4>
                <p>{text}</p>
            </div>
        }
    });
    let equipment = (!room.equipment.is_empty()).then(|| {
        let items = room.equipment.clone();
        view! {
            <div class="room-sheet__section">
                <h4>"Equipment"</h4>
                <div class="room-sheet__chips">
                    {items
                        .into_iter()
                        .map(|item| view! { <span class="room-sheet__chip">{item}</span> })
                        .collect_view()}
                </div>
            </div>
        }
    });

    view! {
        <div class="room-sheet__backdrop" tabindex="0" role="dialog" on:click=on_backdrop on:keydown=on_keydown>
            <div class="room-sheet">
                <div class="room-sheet__header">
                    <h3>{room.name.clone()}</h3>
                    <button class="room-sheet__close" on:click=on_close aria-label="Close">
                        "✕"
                    </button>
                </div>
                <div class="room-sheet__content">
                    <div class="room-sheet__status">
                        <span class=dot></span>
                        <span>{room.status.display_name()}</span>
                    </div>
                    {capacity}
                    {description}
                    {equipment}
                </div>
                <div class="room-sheet__actions">
                    <Show
                        when=move || reservable
                        fallback=move || {
                            view! {
                                <button class="room-sheet__button" on:click=on_close>
                                    "Close"
                                </button>
                            }
                        }
                    >
                        <button class="room-sheet__button" on:click=on_close>
                            "Cancel"
                        </button>
                        <button class="room-sheet__button room-sheet__button--reserve" on:click=on_reserve>
                            "Reserve"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
