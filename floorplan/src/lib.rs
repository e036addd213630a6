//! Floor-plan viewer engine for the workspace reservation front-end.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! viewer lifecycle: building a scene from the room registry, translating raw
//! DOM input into hover/selection changes, maintaining the pan/zoom viewport,
//! hit-testing rooms, and producing output for one of three interchangeable
//! renderer backends. The host Leptos layer wires DOM events to the engine and
//! reacts to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`room`] | Room records, statuses and rectangles |
//! | [`registry`] | Read-only room registry with id and shape-name lookup |
//! | [`datasets`] | Built-in room datasets |
//! | [`style`] | Status-to-style mapping, badges and legend descriptors |
//! | [`layout`] | Content bounds and drawing-surface sizing |
//! | [`shell`] | Architectural background (walls, corridors, doors) |
//! | [`label`] | Room label sizing and ellipsis truncation |
//! | [`scene`] | Declarative scene graph built from the registry and diffed on change |
//! | [`backend`] | Renderer backend contract and the three backends |
//! | [`svg`] | Vector floor document parsing and markup rewriting |
//! | [`loader`] | Fire-once floor document load state |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`viewport`] | Viewport controller: clamped zoom, fit, pinch, fullscreen |
//! | [`panzoom`] | Optional pan/zoom capability slot |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against room rectangles |
//! | [`selection`] | Room selection / detail panel state machine |
//! | [`legend`] | Per-status counts and legend sheet visibility |
//! | [`config`] | Viewer configuration and floor document source |
//! | [`render`] | Canvas 2D replay of the shape-graph display list |
//! | [`consts`] | Shared numeric constants (zoom limits, margins, label sizes) |

pub mod backend;
pub mod camera;
pub mod config;
pub mod consts;
pub mod datasets;
pub mod engine;
pub mod hit;
pub mod input;
pub mod label;
pub mod layout;
pub mod legend;
pub mod loader;
pub mod panzoom;
pub mod registry;
pub mod render;
pub mod room;
pub mod scene;
pub mod selection;
pub mod shell;
pub mod style;
pub mod svg;
pub mod viewport;
