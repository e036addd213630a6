//! # client
//!
//! Leptos + WASM front end for the floor-space reservation viewer.
//!
//! Two routes: a mobile booking form with an SVG floor picker, and a desktop
//! floor page with canvas and node-graph renderers. Both drive the
//! `floorplan` engine through the host components.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
