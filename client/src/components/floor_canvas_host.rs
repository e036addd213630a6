//! Bridge component between Leptos state and the imperative canvas `Engine`.
//!
//! ARCHITECTURE
//! ============
//! The floorplan crate owns hit-testing, gestures and drawing. This host
//! forwards DOM events to the engine, replays chrome commands from
//! [`ViewerState`], and publishes snapshots back after every change.
//!
//! TRADE-OFFS
//! ==========
//! Frames are drawn synchronously after each handled event instead of being
//! coalesced to animation frames. The floor has a few dozen rooms, so a full
//! redraw is cheaper than the bookkeeping.

use leptos::prelude::*;

use floorplan::config::ViewerConfig;
use floorplan::registry::RoomRegistry;

use crate::state::booking::BookingState;
use crate::state::viewer::ViewerState;
#[cfg(feature = "hydrate")]
use crate::util::viewer_input::{
    PinchTracker, map_button, map_modifiers, mouse_point, pointer_point, should_prevent_default_key, wheel_point,
};
#[cfg(feature = "hydrate")]
use crate::util::viewer_sync::{publish_actions, publish_snapshot, run_commands};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use floorplan::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use floorplan::input::{Key, WheelDelta};

/// Read the canvas element's CSS size and device pixel ratio, then push them
/// to the engine.
#[cfg(feature = "hydrate")]
fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) -> Vec<Action> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return Vec::new();
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr)
}

#[cfg(feature = "hydrate")]
fn render(engine: &Engine) {
    if let Err(err) = engine.render() {
        log::warn!("floor canvas render failed: {err:?}");
    }
}

/// Publish `actions` and redraw. Fullscreen changes resize the canvas once
/// the new layout is in place.
#[cfg(feature = "hydrate")]
fn apply(
    engine_cell: &Rc<RefCell<Option<Engine>>>,
    engine: &mut Engine,
    actions: &[Action],
    canvas_ref: NodeRef<leptos::html::Canvas>,
    viewer: RwSignal<ViewerState>,
    booking: RwSignal<BookingState>,
) {
    publish_actions(actions, &engine.core, viewer, booking);
    render(engine);
    if actions.iter().any(|a| matches!(a, Action::FullscreenToggled(_))) {
        let engine_cell = Rc::clone(engine_cell);
        request_animation_frame(move || {
            if let Some(engine) = engine_cell.borrow_mut().as_mut() {
                let actions = sync_viewport(engine, &canvas_ref);
                publish_actions(&actions, &engine.core, viewer, booking);
                publish_snapshot(&engine.core, viewer);
                render(engine);
            }
        });
    }
}

/// Desktop floor map drawn on a `<canvas>`.
///
/// On hydration this mounts `floorplan::engine::Engine` over `registry`,
/// keeps it sized to the element, and renders on every handled event.
#[component]
pub fn FloorCanvasHost(registry: RoomRegistry, config: ViewerConfig) -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let booking = expect_context::<RwSignal<BookingState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "hydrate")]
    let engine = Rc::new(RefCell::new(None::<Engine>));
    #[cfg(feature = "hydrate")]
    let pinch = Rc::new(RefCell::new(PinchTracker::default()));
    #[cfg(not(feature = "hydrate"))]
    let _ = (registry, config, booking);

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let mut instance = match Engine::new(canvas, registry.clone(), config.clone()) {
                Ok(instance) => instance,
                Err(err) => {
                    log::warn!("floor canvas unavailable: {err:?}");
                    return;
                }
            };
            sync_viewport(&mut instance, &canvas_ref);
            publish_snapshot(&instance.core, viewer);
            render(&instance);
            *engine.borrow_mut() = Some(instance);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            viewer.track();
            let mut commands = Vec::new();
            viewer.update_untracked(|v| commands = v.take_commands());
            if commands.is_empty() {
                return;
            }
            let mut slot = engine.borrow_mut();
            if let Some(instance) = slot.as_mut() {
                let actions = run_commands(&mut instance.core, commands);
                apply(&engine, instance, &actions, canvas_ref, viewer, booking);
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = sync_viewport(engine, &canvas_ref);
                publish_actions(&actions, &engine.core, viewer, booking);
                publish_snapshot(&engine.core, viewer);
                render(engine);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            let pinch = Rc::clone(&pinch);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.focus();
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                let point = pointer_point(&ev);
                let mut slot = engine.borrow_mut();
                let Some(instance) = slot.as_mut() else {
                    return;
                };
                let actions = match pinch.borrow_mut().down(ev.pointer_id(), point) {
                    Some(distance) => instance.core.on_pinch_start(distance),
                    None => {
                        let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                        instance.on_pointer_down(point, map_button(ev.button()), modifiers)
                    }
                };
                apply(&engine, instance, &actions, canvas_ref, viewer, booking);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            let pinch = Rc::clone(&pinch);
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let mut slot = engine.borrow_mut();
                let Some(instance) = slot.as_mut() else {
                    return;
                };
                let pinching = pinch.borrow_mut().moved(ev.pointer_id(), point);
                let actions = match pinching {
                    Some((center, distance)) => instance.core.on_pinch_move(center, distance),
                    None => {
                        let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                        instance.on_pointer_move(point, modifiers)
                    }
                };
                if !actions.is_empty() {
                    apply(&engine, instance, &actions, canvas_ref, viewer, booking);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            let pinch = Rc::clone(&pinch);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                let point = pointer_point(&ev);
                let mut slot = engine.borrow_mut();
                let Some(instance) = slot.as_mut() else {
                    return;
                };
                let actions = if pinch.borrow_mut().up(ev.pointer_id()) {
                    instance.core.on_pinch_end()
                } else {
                    let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    instance.on_pointer_up(point, map_button(ev.button()), modifiers)
                };
                apply(&engine, instance, &actions, canvas_ref, viewer, booking);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                let mut slot = engine.borrow_mut();
                if let Some(instance) = slot.as_mut() {
                    let actions = instance.on_pointer_leave();
                    apply(&engine, instance, &actions, canvas_ref, viewer, booking);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let mut slot = engine.borrow_mut();
                if let Some(instance) = slot.as_mut() {
                    let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                    let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    let actions = instance.on_wheel(wheel_point(&ev), delta, modifiers);
                    apply(&engine, instance, &actions, canvas_ref, viewer, booking);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_double_click = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                let mut slot = engine.borrow_mut();
                if let Some(instance) = slot.as_mut() {
                    let actions = instance.on_double_click(mouse_point(&ev));
                    apply(&engine, instance, &actions, canvas_ref, viewer, booking);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                if should_prevent_default_key(&key) {
                    ev.prevent_default();
                }
                let mut slot = engine.borrow_mut();
                if let Some(instance) = slot.as_mut() {
                    let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    let actions = instance.on_key_down(&Key(key), modifiers);
                    apply(&engine, instance, &actions, canvas_ref, viewer, booking);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    let cursor = move || viewer.with(|v| v.cursor.clone());

    view! {
        <canvas
            class="floor-canvas"
            node_ref=canvas_ref
            tabindex="0"
            role="application"
            aria-label="Interactive floor map"
            style:cursor=cursor
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:dblclick=on_double_click
            on:wheel=on_wheel
            on:keydown=on_key_down
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
