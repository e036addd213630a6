//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The floor hosts mount a `floorplan` engine and publish its results into
//! the `ViewerState` context. Everything else reads that state and sends
//! commands back through it.

pub mod floor_canvas_host;
pub mod graph_floor_map;
pub mod legend_panel;
pub mod mobile_room_sheet;
pub mod room_modal;
pub mod svg_floor_map;
pub mod zoom_toolbar;
