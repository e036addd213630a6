//! Floor map drawn as positioned, non-draggable nodes.
//!
//! Each room becomes an absolutely positioned box inside a layer that the
//! camera moves with a CSS transform. Node geometry matches room geometry,
//! so pointer input goes through the engine's own hit-testing exactly as it
//! does for the canvas viewer.

#[cfg(test)]
#[path = "graph_floor_map_test.rs"]
mod graph_floor_map_test;

use leptos::prelude::*;

use floorplan::backend::{BackendOutput, FlowNode};
use floorplan::config::ViewerConfig;
use floorplan::engine::EngineCore;
use floorplan::registry::RoomRegistry;

use crate::state::booking::BookingState;
use crate::state::viewer::ViewerState;
#[cfg(feature = "hydrate")]
use crate::util::viewer_input::{
    PinchTracker, client_point_in, map_button, map_modifiers, should_prevent_default_key,
};
#[cfg(feature = "hydrate")]
use crate::util::viewer_sync::{publish_actions, publish_snapshot, run_commands};

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use floorplan::engine::Action;
#[cfg(feature = "hydrate")]
use floorplan::input::{Key, WheelDelta};
#[cfg(feature = "hydrate")]
use floorplan::layout::Size;

fn graph_nodes(core: &EngineCore) -> Vec<FlowNode> {
    match core.output() {
        Ok(BackendOutput::Nodes(nodes)) => nodes,
        Ok(_) | Err(_) => Vec::new(),
    }
}

/// Inline style placing and painting one node.
fn node_style(node: &FlowNode) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; background: {}; border: {}px solid {}; opacity: {};",
        node.position.x,
        node.position.y,
        node.width,
        node.height,
        node.style.background,
        node.style.border_width,
        node.style.border_color,
        node.style.opacity,
    )
}

fn node_class(node: &FlowNode) -> String {
    let mut class = String::from("graph-node");
    if node.hovered {
        class.push_str(" graph-node--hover");
    }
    if node.focused {
        class.push_str(" graph-node--focus");
    }
    class
}

/// Node-graph floor map over `registry`.
#[component]
pub fn GraphFloorMap(registry: RoomRegistry, config: ViewerConfig) -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let booking = expect_context::<RwSignal<BookingState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let core = Rc::new(RefCell::new(EngineCore::node_graph(registry, config)));
    let nodes = RwSignal::new(graph_nodes(&core.borrow()));
    #[cfg(feature = "hydrate")]
    let pinch = Rc::new(RefCell::new(PinchTracker::default()));
    #[cfg(not(feature = "hydrate"))]
    let _ = booking;

    // Publish, and rebuild nodes when the engine asks for a redraw.
    #[cfg(feature = "hydrate")]
    let apply = move |core: &EngineCore, actions: &[Action]| {
        if publish_actions(actions, core, viewer, booking) {
            nodes.set(graph_nodes(core));
        }
    };

    #[cfg(feature = "hydrate")]
    let sync_container = move |core: &mut EngineCore| {
        if let Some(container) = container_ref.get_untracked() {
            let size = Size::new(f64::from(container.client_width()), f64::from(container.client_height()));
            core.set_container(size);
            publish_snapshot(core, viewer);
        }
    };

    #[cfg(feature = "hydrate")]
    {
        let core = Rc::clone(&core);
        Effect::new(move || {
            if container_ref.get().is_some() {
                sync_container(&mut core.borrow_mut());
            }
        });
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
            apply(&engine, &actions);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let core = Rc::clone(&core);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            sync_container(&mut core.borrow_mut());
        });
        on_cleanup(move || handle.remove());
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let core = Rc::clone(&core);
            let pinch = Rc::clone(&pinch);
            move |ev: leptos::ev::PointerEvent| {
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                let _ = container.focus();
                let _ = container.set_pointer_capture(ev.pointer_id());
                let point = client_point_in(&ev, &container);
                let mut engine = core.borrow_mut();
                let actions = match pinch.borrow_mut().down(ev.pointer_id(), point) {
                    Some(distance) => engine.on_pinch_start(distance),
                    None => {
                        let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                        engine.on_pointer_down(point, map_button(ev.button()), modifiers)
                    }
                };
                apply(&engine, &actions);
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
            let pinch = Rc::clone(&pinch);
            move |ev: leptos::ev::PointerEvent| {
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                let point = client_point_in(&ev, &container);
                let mut engine = core.borrow_mut();
                let pinching = pinch.borrow_mut().moved(ev.pointer_id(), point);
                let actions = match pinching {
                    Some((center, distance)) => engine.on_pinch_move(center, distance),
                    None => {
                        let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                        engine.on_pointer_move(point, modifiers)
                    }
                };
                apply(&engine, &actions);
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
            let pinch = Rc::clone(&pinch);
            move |ev: leptos::ev::PointerEvent| {
                let Some(container) = container_ref.get_untracked() else {
                    return;
                };
                let _ = container.release_pointer_capture(ev.pointer_id());
                let point = client_point_in(&ev, &container);
                let mut engine = core.borrow_mut();
                let actions = if pinch.borrow_mut().up(ev.pointer_id()) {
                    engine.on_pinch_end()
                } else {
                    let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    engine.on_pointer_up(point, map_button(ev.button()), modifiers)
                };
                apply(&engine, &actions);
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
            let core = Rc::clone(&core);
            move |_ev: leptos::ev::PointerEvent| {
                let mut engine = core.borrow_mut();
                let actions = engine.on_pointer_leave();
                apply(&engine, &actions);
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
                apply(&engine, &actions);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
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
                apply(&engine, &actions);
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
    let cursor = move || viewer.with(|v| v.cursor.clone());

    view! {
        <div
            class="graph-floor-map"
            node_ref=container_ref
            tabindex="0"
            role="application"
            aria-label="Interactive floor map"
            style:cursor=cursor
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:wheel=on_wheel
            on:keydown=on_key_down
        >
            <div class="graph-floor-map__layer" style=layer_style>
                <For
                    each=move || nodes.get()
                    key=|node| (node.id.clone(), node.hovered, node.focused)
                    children=move |node| {
                        let name_style = format!("font-size: {}px;", node.name_font_px);
                        let id_style = format!("font-size: {}px;", node.id_font_px);
                        view! {
                            <div
                                class=node_class(&node)
                                style=node_style(&node)
                                role="button"
                                aria-label=node.aria_label.clone()
                                draggable="false"
                            >
                                <span class="graph-node__name" style=name_style>
                                    {node.label.clone()}
                                </span>
                                <span class="graph-node__id" style=id_style>
                                    {node.id.clone()}
                                </span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
