//! Zoom, reset and fullscreen controls overlaid on a floor viewer.

use leptos::prelude::*;

use crate::state::viewer::{ViewerCommand, ViewerState};

#[component]
pub fn ZoomToolbar(#[prop(optional)] with_fullscreen: bool) -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let request = move |command: ViewerCommand| viewer.update(|v| v.request(command));
    let zoom_label = move || format!("{}%", viewer.with(ViewerState::zoom_percent));
    let fullscreen_label = move || if viewer.with(|v| v.fullscreen) { "Exit fullscreen" } else { "Fullscreen" };

    view! {
        <div class="zoom-toolbar" role="toolbar" aria-label="Floor map controls">
            <button class="zoom-toolbar__button" title="Zoom In" on:click=move |_| request(ViewerCommand::ZoomIn)>
                "+"
            </button>
            <span class="zoom-toolbar__level">{zoom_label}</span>
            <button class="zoom-toolbar__button" title="Zoom Out" on:click=move |_| request(ViewerCommand::ZoomOut)>
                "−"
            </button>
            <button
                class="zoom-toolbar__button"
                title="Reset View"
                on:click=move |_| request(ViewerCommand::ResetView)
            >
                "⟲"
            </button>
            <Show when=move || with_fullscreen>
                <button
                    class="zoom-toolbar__button"
                    title=fullscreen_label
                    on:click=move |_| request(ViewerCommand::ToggleFullscreen)
                >
                    "⛶"
                </button>
            </Show>
        </div>
    }
}
