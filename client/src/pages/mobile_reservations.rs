//! Mobile reservation page: booking form plus a full-screen floor picker.
//!
//! The form and the picker share the app-wide [`BookingState`]. Reserving a
//! room on the picker writes its name into the form and flips back.

#[cfg(test)]
#[path = "mobile_reservations_test.rs"]
mod mobile_reservations_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use floorplan::config::ViewerConfig;
use floorplan::datasets::conference_registry;

use crate::components::legend_panel::LegendSheetToggle;
use crate::components::mobile_room_sheet::MobileRoomSheet;
use crate::components::svg_floor_map::SvgFloorMap;
use crate::components::zoom_toolbar::ZoomToolbar;
use crate::state::booking::{BookingState, TimeSlot};
use crate::state::viewer::ViewerState;
use crate::util::environment::viewer_config;

pub const BUILDINGS: [&str; 4] = [
    "Walnut Creek Medical Center",
    "Oakland Medical Center",
    "San Francisco Medical Center",
    "San Jose Medical Center",
];

pub const FLOORS: [&str; 5] = ["Floor 1", "Floor 2", "Floor 3", "Floor 4", "Floor 5"];

/// Which screen the page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MobileView {
    #[default]
    Form,
    FloorMap,
}

/// Feedback line shown after a submit attempt.
pub fn submit_message(booking: &BookingState) -> String {
    let missing = booking.missing_fields();
    if missing.is_empty() {
        format!("Request submitted for {}", booking.room)
    } else {
        format!("Missing: {}", missing.join(", "))
    }
}

/// Floors offered for the chosen building.
pub fn floor_options(building: &str) -> &'static [&'static str] {
    if building.is_empty() { &[] } else { &FLOORS }
}

#[component]
pub fn MobileReservationsPage() -> impl IntoView {
    let booking = expect_context::<RwSignal<BookingState>>();
    let view_mode = RwSignal::new(MobileView::default());

    // A new reservation returns to the form.
    let seen_seq = StoredValue::new(booking.with_untracked(|b| b.reservation_seq));
    Effect::new(move || {
        let seq = booking.with(|b| b.reservation_seq);
        if seq != seen_seq.get_value() {
            seen_seq.set_value(seq);
            view_mode.set(MobileView::Form);
        }
    });

    move || match view_mode.get() {
        MobileView::Form => view! { <BookingForm on_pick=move || view_mode.set(MobileView::FloorMap)/> }.into_any(),
        MobileView::FloorMap => view! { <FloorPicker on_back=move || view_mode.set(MobileView::Form)/> }.into_any(),
    }
}

#[component]
fn BookingForm(on_pick: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let booking = expect_context::<RwSignal<BookingState>>();
    let feedback = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let message = booking.with_untracked(submit_message);
        #[cfg(feature = "hydrate")]
        log::info!("booking submit: {message}");
        feedback.set(Some(message));
    };

    let slot_inputs = TimeSlot::ALL
        .into_iter()
        .map(|slot| {
            view! {
                <label class="booking-form__radio">
                    <input
                        type="radio"
                        name="time-slot"
                        value=slot.as_str()
                        prop:checked=move || booking.with(|b| b.time_slot == slot)
                        on:change=move |ev| {
                            if let Some(next) = TimeSlot::parse(&event_target_value(&ev)) {
                                booking.update(|b| b.time_slot = next);
                            }
                        }
                    />
                    {slot.label()}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="booking-page">
            <header class="booking-page__header">
                <h1>"Room Reservations"</h1>
            </header>
            <form class="booking-form" on:submit=on_submit>
                <label class="booking-form__field">
                    "Request date"
                    <input
                        type="date"
                        prop:value=move || booking.with(|b| b.request_date.clone())
                        on:input=move |ev| booking.update(|b| b.request_date = event_target_value(&ev))
                    />
                </label>
                <label class="booking-form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || booking.with(|b| b.request_for_me)
                        on:change=move |ev| booking.update(|b| b.request_for_me = event_target_checked(&ev))
                    />
                    "Request for me"
                </label>
                <Show when=move || !booking.with(|b| b.request_for_me)>
                    <label class="booking-form__field">
                        "Requested for"
                        <input
                            type="text"
                            placeholder="Name"
                            prop:value=move || booking.with(|b| b.requested_for.clone())
                            on:input=move |ev| booking.update(|b| b.requested_for = event_target_value(&ev))
                        />
                    </label>
                </Show>
                <fieldset class="booking-form__slots">
                    <legend>"Time"</legend>
                    {slot_inputs}
                </fieldset>
                <label class="booking-form__field">
                    "Building"
                    <select
                        prop:value=move || booking.with(|b| b.building.clone())
                        on:change=move |ev| booking.update(|b| b.set_building(&event_target_value(&ev)))
                    >
                        <option value="">"Select building"</option>
                        {BUILDINGS.into_iter().map(|name| view! { <option value=name>{name}</option> }).collect_view()}
                    </select>
                </label>
                <label class="booking-form__field">
                    "Floor"
                    <select
                        prop:value=move || booking.with(|b| b.floor.clone())
                        disabled=move || booking.with(|b| b.building.is_empty())
                        on:change=move |ev| booking.update(|b| b.floor = event_target_value(&ev))
                    >
                        <option value="">"Select floor"</option>
                        {move || {
                            booking
                                .with(|b| floor_options(&b.building))
                                .iter()
                                .map(|name| view! { <option value=*name>{*name}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <div class="booking-form__field">
                    <span>"Room"</span>
                    <div class="booking-form__room">
                        <input
                            type="text"
                            readonly=true
                            placeholder="No room selected"
                            prop:value=move || booking.with(|b| b.room.clone())
                        />
                        <button type="button" class="btn" on:click=move |_| on_pick()>
                            "Select from floor plan"
                        </button>
                    </div>
                </div>
                <button type="submit" class="btn btn--primary">"Submit Request"</button>
                {move || feedback.get().map(|message| view! { <p class="booking-form__feedback">{message}</p> })}
            </form>
        </div>
    }
}

#[component]
fn FloorPicker(on_back: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let viewer = RwSignal::new(ViewerState::default());
    provide_context(viewer);

    let map = match conference_registry() {
        Ok(registry) => view! {
            <SvgFloorMap
                registry=registry
                config=viewer_config(ViewerConfig::vector_document(), None)
                mobile=true
            />
        }
        .into_any(),
        Err(err) => view! { <p class="floor-page__error">{err.to_string()}</p> }.into_any(),
    };

    view! {
        <div class="mobile-floor">
            <header class="mobile-floor__header">
                <button class="btn mobile-floor__back" on:click=move |_| on_back()>"Back"</button>
                <h1>"Select a Room"</h1>
                <LegendSheetToggle/>
            </header>
            <div class="mobile-floor__map">
                {map}
                <ZoomToolbar/>
            </div>
            <MobileRoomSheet/>
        </div>
    }
}
