//! Floor map backed by a fetched SVG document.
//!
//! ARCHITECTURE
//! ============
//! The engine binds the document's shapes to rooms and rewrites the markup
//! with room classes and status colors; this host injects that markup and
//! moves it with a CSS transform. Activation and hover use event delegation
//! on the container: the browser already knows which shape is under the
//! pointer, so `.room` / `.room-label` ids are resolved straight to rooms.
//! Only `.room` shapes take the hover class; labels are click targets.
//!
//! TRADE-OFFS
//! ==========
//! Hover toggles a class on the live element instead of re-rendering the
//! markup, so the injected DOM (and any listeners on it) survives hovering.

use leptos::prelude::*;

use floorplan::backend::BackendOutput;
use floorplan::config::ViewerConfig;
use floorplan::engine::EngineCore;
use floorplan::registry::RoomRegistry;

use crate::state::booking::BookingState;
use crate::state::viewer::ViewerState;
#[cfg(feature = "hydrate")]
use crate::net::floor_doc::fetch_floor_document;
#[cfg(feature = "hydrate")]
use crate::util::viewer_input::{
    DragPan, PinchTracker, client_point_in, hover_target, map_modifiers, room_target_id, should_prevent_default_key,
};
#[cfg(feature = "hydrate")]
use crate::util::viewer_sync::{publish_actions, publish_snapshot, run_commands};

use std::cell::RefCell;
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use floorplan::input::{Key, WheelDelta};
#[cfg(feature = "hydrate")]
use floorplan::layout::Size;
#[cfg(feature = "hydrate")]
use floorplan::svg::HOVER_CLASS;

/// Rewritten document markup, or `None` while nothing is loaded.
fn document_markup(core: &EngineCore) -> Option<String> {
    match core.output() {
        Ok(BackendOutput::Markup(markup)) => Some(markup),
        Ok(_) | Err(_) => None,
    }
}

/// Room id a shape or label id stands for.
#[cfg(feature = "hydrate")]
fn room_id_for_shape(core: &EngineCore, shape_id: &str) -> String {
    core.registry.find_by_shape_id(shape_id).map_or_else(|| shape_id.to_owned(), |room| room.id.clone())
}

#[cfg(feature = "hydrate")]
fn sync_container(core: &mut EngineCore, container_ref: &NodeRef<leptos::html::Div>) {
    if let Some(container) = container_ref.get_untracked() {
        let size = Size::new(f64::from(container.client_width()), f64::from(container.client_height()));
        core.set_container(size);
    }
}

/// Vector floor map for the mobile booking flow.
#[component]
pub fn SvgFloorMap(
    registry: RoomRegistry,
    config: ViewerConfig,
    #[prop(optional)] mobile: bool,
) -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let booking = expect_context::<RwSignal<BookingState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let core = Rc::new(RefCell::new(EngineCore::vector_document(registry, config, mobile)));
    let markup = RwSignal::new(document_markup(&core.borrow()));
    #[cfg(feature = "hydrate")]
    let drag = Rc::new(RefCell::new(DragPan::default()));
    #[cfg(feature = "hydrate")]
    let pinch = Rc::new(RefCell::new(PinchTracker::default()));
    #[cfg(feature = "hydrate")]
    let suppress_click = Rc::new(RefCell::new(false));
    #[cfg(feature = "hydrate")]
    let alive = Arc::new(AtomicBool::new(true));
    #[cfg(not(feature = "hydrate"))]
    let _ = booking;

    #[cfg(feature = "hydrate")]
    {
        let core = Rc::clone(&core);
        let alive_mount = Arc::clone(&alive);
        Effect::new(move || {
            if container_ref.get().is_none() {
                return;
            }
            let url = {
                let mut engine = core.borrow_mut();
                sync_container(&mut engine, &container_ref);
                let url = engine.begin_load();
                publish_snapshot(&engine, viewer);
                url
            };
            let Some(url) = url else {
                return;
            };
            let core = Rc::clone(&core);
            let alive = Arc::clone(&alive_mount);
            leptos::task::spawn_local(async move {
                let outcome = fetch_floor_document(&url).await;
                let mut engine = core.borrow_mut();
                if !alive.load(Ordering::Relaxed) {
                    engine.teardown();
                    return;
                }
                if let Err(err) = &outcome {
                    log::warn!("floor document {url} failed: {err}");
                }
                let actions = engine.complete_load(outcome);
                sync_container(&mut engine, &container_ref);
                publish_actions(&actions, &engine, viewer, booking);
                publish_snapshot(&engine, viewer);
                markup.set(document_markup(&engine));
            });
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    #[cfg(feature = "hydrate")]
    {
        let core = Rc::clone(&core);
        Effect::new(move || {
            viewer.track();
            let mut commands = Vec::new();
            viewer.update_untracked(|v| commands = v.take_commands());
            if commands.is_empty() {
                return;
            }
            let mut engine = core.borrow_mut();
            let actions = run_commands(&mut engine, commands);
            publish_actions(&actions, &engine, viewer, booking);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let core = Rc::clone(&core);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let mut engine = core.borrow_mut();
            sync_container(&mut engine, &container_ref);
            publish_snapshot(&engine, viewer);
        });
        on_cleanup(move || handle.remove());
    }

    let on_click = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            let suppress_click = Rc::clone(&suppress_click);
            move |ev: leptos::ev::MouseEvent| {
                if std::mem::take(&mut *suppress_click.borrow_mut()) {
                    return;
                }
                let Some(shape_id) = room_target_id(&ev) else {
                    return;
                };
                let mut engine = core.borrow_mut();
                let actions = engine.activate_room(&shape_id);
                publish_actions(&actions, &engine, viewer, booking);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_over = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            move |ev: leptos::ev::MouseEvent| {
                let Some(target) = hover_target(&ev) else {
                    return;
                };
                let _ = target.class_list().add_1(HOVER_CLASS);
                let mut engine = core.borrow_mut();
                let room_id = room_id_for_shape(&engine, &target.id());
                let actions = engine.hover_room(Some(&room_id));
                publish_actions(&actions, &engine, viewer, booking);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_out = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            move |ev: leptos::ev::MouseEvent| {
                let Some(target) = hover_target(&ev) else {
                    return;
                };
                let _ = target.class_list().remove_1(HOVER_CLASS);
                let mut engine = core.borrow_mut();
                let actions = engine.hover_room(None);
                publish_actions(&actions, &engine, viewer, booking);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            let drag = Rc::clone(&drag);
            let pinch = Rc::clone(&pinch);
            move |ev: leptos::ev::PointerEvent| {
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                let point = client_point_in(&ev, &container);
                if let Some(distance) = pinch.borrow_mut().down(ev.pointer_id(), point) {
                    *drag.borrow_mut() = DragPan::default();
                    core.borrow_mut().on_pinch_start(distance);
                    return;
                }
                if ev.button() == 0 {
                    drag.borrow_mut().start(point);
                }
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
            let core = Rc::clone(&core);
            let drag = Rc::clone(&drag);
            let pinch = Rc::clone(&pinch);
            move |ev: leptos::ev::PointerEvent| {
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                let point = client_point_in(&ev, &container);
                let mut engine = core.borrow_mut();
                if let Some((center, distance)) = pinch.borrow_mut().moved(ev.pointer_id(), point) {
                    let actions = engine.on_pinch_move(center, distance);
                    publish_actions(&actions, &engine, viewer, booking);
                    return;
                }
                let mut drag = drag.borrow_mut();
                let was_panning = drag.is_panning();
                if let Some((dx, dy)) = drag.move_to(point) {
                    if !was_panning {
                        let _ = container.set_pointer_capture(ev.pointer_id());
                    }
                    if engine.viewport.pan_by(dx, dy) {
                        publish_snapshot(&engine, viewer);
                    }
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
            let core = Rc::clone(&core);
            let drag = Rc::clone(&drag);
            let pinch = Rc::clone(&pinch);
            let suppress_click = Rc::clone(&suppress_click);
            move |ev: leptos::ev::PointerEvent| {
                if pinch.borrow_mut().up(ev.pointer_id()) {
                    core.borrow_mut().on_pinch_end();
                    *suppress_click.borrow_mut() = true;
                    return;
                }
                if drag.borrow_mut().finish() {
                    *suppress_click.borrow_mut() = true;
                    if let Some(container) = container_ref.get_untracked() {
                        let _ = container.release_pointer_capture(ev.pointer_id());
                    }
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
            let core = Rc::clone(&core);
            move |ev: leptos::ev::WheelEvent| {
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                ev.prevent_default();
                let mut engine = core.borrow_mut();
                let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                let actions = engine.on_wheel(client_point_in(&ev, &container), delta, modifiers);
                publish_actions(&actions, &engine, viewer, booking);
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
            let core = Rc::clone(&core);
            move |ev: leptos::ev::MouseEvent| {
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                let mut engine = core.borrow_mut();
                let actions = engine.on_double_click(client_point_in(&ev, &container));
                publish_actions(&actions, &engine, viewer, booking);
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
            let core = Rc::clone(&core);
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                if should_prevent_default_key(&key) {
                    ev.prevent_default();
                }
                let mut engine = core.borrow_mut();
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                let actions = engine.on_key_down(&Key(key), modifiers);
                publish_actions(&actions, &engine, viewer, booking);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    let layer_style = move || {
        let camera = viewer.with(|v| v.camera);
        format!("transform: {}; transform-origin: 0 0;", camera.css_transform())
    };
    let loading = move || viewer.with(|v| v.loading);
    let fault = move || viewer.with(|v| v.fault.clone());

    view! {
        <div
            class="svg-floor-map"
            node_ref=container_ref
            tabindex="0"
            role="application"
            aria-label="Interactive architectural floor map"
            on:click=on_click
            on:mouseover=on_mouse_over
            on:mouseout=on_mouse_out
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:wheel=on_wheel
            on:dblclick=on_double_click
            on:keydown=on_key_down
        >
            <Show when=loading>
                <div class="svg-floor-map__status">
                    <div class="svg-floor-map__spinner"></div>
                    <p>"Loading floor plan..."</p>
                </div>
            </Show>
            {move || {
                fault()
                    .map(|message| {
                        view! {
                            <div class="svg-floor-map__status svg-floor-map__status--fault" role="alert">
                                <p class="svg-floor-map__fault-title">"Failed to load floor plan"</p>
                                <p class="svg-floor-map__fault-message">{message}</p>
                            </div>
                        }
                    })
            }}
            <div class="svg-floor-map__layer" style=layer_style inner_html=move || markup.get().unwrap_or_default()></div>
        </div>
    }
}
