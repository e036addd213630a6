//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{desktop_floor::DesktopFloorPage, mobile_reservations::MobileReservationsPage};
use crate::state::{booking::BookingState, viewer::ViewerContext};

/// Root application component.
///
/// Provides the booking form and legend-sheet contexts shared by both routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ViewerContext { show_legend: RwSignal::new(false) });
    provide_context(RwSignal::new(BookingState::default()));

    view! {
        <Title text="Space Reserve"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MobileReservationsPage/>
                <Route path=StaticSegment("space-reserve-desktop") view=DesktopFloorPage/>
            </Routes>
        </Router>
    }
}
