//! Desktop floor page: canvas or node-graph map with legend and detail modal.
//!
//! ARCHITECTURE
//! ============
//! The page owns a fresh [`ViewerState`] for whichever viewer is mounted, so
//! switching renderers starts from a clean selection and camera. The legend,
//! toolbar and modal only talk to that state.

#[cfg(test)]
#[path = "desktop_floor_test.rs"]
mod desktop_floor_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use floorplan::config::ViewerConfig;
use floorplan::datasets::desk_floor_registry;

use crate::components::floor_canvas_host::FloorCanvasHost;
use crate::components::graph_floor_map::GraphFloorMap;
use crate::components::legend_panel::LegendPanel;
use crate::components::room_modal::RoomModal;
use crate::components::zoom_toolbar::ZoomToolbar;
use crate::state::viewer::ViewerState;

/// Renderer shown on the desktop page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DesktopView {
    #[default]
    Canvas,
    Graph,
}

impl DesktopView {
    pub fn label(self) -> &'static str {
        match self {
            Self::Canvas => "Floor plan",
            Self::Graph => "Room graph",
        }
    }
}

fn page_class(fullscreen: bool) -> &'static str {
    if fullscreen { "floor-page floor-page--fullscreen" } else { "floor-page" }
}

fn view_button_class(active: bool) -> &'static str {
    if active { "floor-page__view-button floor-page__view-button--active" } else { "floor-page__view-button" }
}

#[component]
pub fn DesktopFloorPage() -> impl IntoView {
    let viewer = RwSignal::new(ViewerState::default());
    provide_context(viewer);
    let active_view = RwSignal::new(DesktopView::default());

    let switch_to = move |next: DesktopView| {
        if active_view.get_untracked() != next {
            viewer.set(ViewerState::default());
            active_view.set(next);
        }
    };

    let floor = move || match desk_floor_registry() {
        Ok(registry) => match active_view.get() {
            DesktopView::Canvas => {
                view! { <FloorCanvasHost registry=registry config=ViewerConfig::shape_graph()/> }.into_any()
            }
            DesktopView::Graph => {
                view! { <GraphFloorMap registry=registry config=ViewerConfig::shape_graph()/> }.into_any()
            }
        },
        Err(err) => view! { <p class="floor-page__error">{err.to_string()}</p> }.into_any(),
    };

    view! {
        <div class=move || page_class(viewer.with(|v| v.fullscreen))>
            <header class="floor-page__header">
                <h1>"Space Reserve"</h1>
                <nav class="floor-page__views">
                    {[DesktopView::Canvas, DesktopView::Graph]
                        .into_iter()
                        .map(|view_kind| {
                            view! {
                                <button
                                    class=move || view_button_class(active_view.get() == view_kind)
                                    on:click=move |_| switch_to(view_kind)
                                >
                                    {view_kind.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <main class="floor-page__body">
                <div class="floor-page__map">
                    {floor}
                    <ZoomToolbar with_fullscreen=true/>
                </div>
                <LegendPanel/>
            </main>
            <RoomModal/>
        </div>
    }
}
