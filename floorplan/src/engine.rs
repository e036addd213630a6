//! Viewer engine: input routing, selection and backend orchestration.
//!
//! ARCHITECTURE
//! ============
//! [`EngineCore`] owns everything that does not touch the browser: the
//! registry, the scene, the active backend, the optional pan/zoom capability,
//! the gesture state machine, the current selection and the floor document
//! loader. Every handler returns a list of [`Action`]s for the host to apply
//! (re-render, change cursor, open or close the detail panel, forward a
//! reservation).
//!
//! [`Engine`] wraps the core together with the canvas element for the shape
//! graph viewer. The vector document and node graph viewers drive an
//! `EngineCore` directly and render its output into the DOM.
//!
//! TRADE-OFFS
//! ==========
//! Activation resolves identifiers through the registry on every call rather
//! than caching rooms on scene nodes, so a room reached through a vector
//! label or an unknown shape id still yields a selectable placeholder.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::backend::{
    BackendError, BackendOutput, FloorBackend, NodeGraphBackend, ShapeGraphBackend, VectorDocumentBackend,
};
use crate::camera::{Camera, Point};
use crate::config::ViewerConfig;
use crate::input::{Button, InputState, Key, Modifiers, WheelDelta};
use crate::layout::Size;
use crate::legend::{LegendEntry, LegendSheet, LegendToggle, legend_counts};
use crate::loader::{FloorLoader, LoadError, LoadState};
use crate::panzoom::PanZoomSlot;
use crate::registry::{RegistryError, RoomRegistry};
use crate::render;
use crate::room::{Room, RoomId};
use crate::scene::{Scene, SceneChange};
use crate::selection::{DismissReason, Selection};
use crate::viewport::ViewportController;

const CURSOR_POINTER: &str = "pointer";
const CURSOR_DEFAULT: &str = "default";
const CURSOR_GRABBING: &str = "grabbing";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RenderNeeded,
    SetCursor(String),
    /// Open the detail panel for this room.
    RoomSelected(RoomId),
    /// Close the detail panel.
    SelectionCleared,
    /// Forward to the booking form.
    RoomReserved { room_id: RoomId, room_name: String },
    FullscreenToggled(bool),
}

/// Core engine state: all logic that doesn't depend on the canvas element.
pub struct EngineCore {
    pub registry: RoomRegistry,
    pub scene: Scene,
    backend: Box<dyn FloorBackend>,
    pub viewport: PanZoomSlot,
    pub input: InputState,
    pub selection: Selection,
    pub legend: LegendSheet,
    pub config: ViewerConfig,
    pub loader: FloorLoader,
    container: Size,
}

impl EngineCore {
    /// Engine drawing through `backend`. Pan/zoom is not attached yet.
    #[must_use]
    pub fn new(backend: Box<dyn FloorBackend>, config: ViewerConfig) -> Self {
        Self {
            registry: RoomRegistry::default(),
            scene: Scene::default(),
            backend,
            viewport: PanZoomSlot::default(),
            input: InputState::default(),
            selection: Selection::default(),
            legend: LegendSheet::default(),
            config,
            loader: FloorLoader::default(),
            container: Size::default(),
        }
    }

    /// Canvas viewer over `registry`, pan/zoom ready immediately.
    #[must_use]
    pub fn shape_graph(registry: RoomRegistry, config: ViewerConfig) -> Self {
        let backend = ShapeGraphBackend::new(&config);
        Self::with_registry(Box::new(backend), config, registry)
    }

    /// Node graph viewer over `registry`, pan/zoom ready immediately.
    #[must_use]
    pub fn node_graph(registry: RoomRegistry, config: ViewerConfig) -> Self {
        Self::with_registry(Box::new(NodeGraphBackend), config, registry)
    }

    /// Vector document viewer. Rooms appear and pan/zoom attaches once the
    /// floor document has loaded.
    #[must_use]
    pub fn vector_document(registry: RoomRegistry, config: ViewerConfig, mobile: bool) -> Self {
        let backend = if mobile { VectorDocumentBackend::mobile() } else { VectorDocumentBackend::new() };
        let mut core = Self::new(Box::new(backend), config);
        core.registry = registry;
        core
    }

    fn with_registry(backend: Box<dyn FloorBackend>, config: ViewerConfig, registry: RoomRegistry) -> Self {
        let mut core = Self::new(backend, config);
        core.set_registry(registry);
        core.attach_viewport();
        core
    }

    // --- Data inputs ---

    /// Replace the room set from raw records.
    ///
    /// # Errors
    ///
    /// Propagates [`RegistryError`] when the records are invalid; the current
    /// rooms are left untouched.
    pub fn load_rooms(&mut self, rooms: Vec<Room>) -> Result<Vec<SceneChange>, RegistryError> {
        let registry = RoomRegistry::new(rooms)?;
        Ok(self.set_registry(registry))
    }

    /// Replace the registry and resync the scene.
    pub fn set_registry(&mut self, registry: RoomRegistry) -> Vec<SceneChange> {
        self.registry = registry;
        self.refresh_scene()
    }

    fn refresh_scene(&mut self) -> Vec<SceneChange> {
        let rooms = self.backend.scene_rooms(&self.registry);
        let changes = self.scene.sync(&rooms);
        let content = self.backend.content_bounds(&self.scene);
        self.viewport.set_content(content);
        changes
    }

    /// Install the pan/zoom capability and fit the content. Returns `false`
    /// if one is already attached.
    pub fn attach_viewport(&mut self) -> bool {
        let mut controller = ViewportController::from_config(&self.config);
        controller.resize(self.container);
        controller.set_content(self.backend.content_bounds(&self.scene));
        controller.reset_to_fit();
        self.viewport.attach(Box::new(controller))
    }

    /// Container size changed (window resize).
    /// The first real size refits the content.
    pub fn set_container(&mut self, container: Size) -> Vec<Action> {
        let first_layout = !self.container.is_positive();
        self.container = container;
        self.backend.resize(container);
        self.viewport.resize(container);
        let content = self.backend.content_bounds(&self.scene);
        self.viewport.set_content(content);
        if first_layout {
            self.viewport.reset();
        }
        vec![Action::RenderNeeded]
    }

    // --- Floor document ---

    /// Start fetching the configured floor document. Returns the URL to
    /// fetch, or `None` if a load already started.
    pub fn begin_load(&mut self) -> Option<String> {
        let url = self.config.source.url();
        self.loader.begin(&url).then_some(url)
    }

    /// Resolve the load started with [`EngineCore::begin_load`].
    pub fn complete_load(&mut self, outcome: Result<String, LoadError>) -> Vec<Action> {
        if !self.loader.complete(outcome) {
            return Vec::new();
        }
        let LoadState::Loaded(doc) = self.loader.state() else {
            return vec![Action::RenderNeeded];
        };
        let doc = doc.clone();
        if let Some(reconciliation) = self.backend.load_document(doc, &self.registry) {
            self.registry = reconciliation.registry;
        }
        self.refresh_scene();
        self.attach_viewport();
        vec![Action::RenderNeeded]
    }

    /// Fault message for a failed floor document load.
    #[must_use]
    pub fn fault(&self) -> Option<String> {
        self.loader.state().fault()
    }

    /// Release the pan/zoom capability and load state on unmount.
    pub fn teardown(&mut self) {
        self.viewport.detach();
        self.loader.reset();
        self.input = InputState::Idle;
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let room = self.room_at_screen(screen_pt);
        self.input = InputState::Pressed { start_screen: screen_pt, room };
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        match self.input.clone() {
            InputState::Pressed { start_screen, .. } => {
                if !InputState::exceeds_drag_threshold(start_screen, screen_pt) {
                    return Vec::new();
                }
                self.input = InputState::Panning { last_screen: screen_pt };
                self.viewport.pan_by(screen_pt.x - start_screen.x, screen_pt.y - start_screen.y);
                vec![Action::SetCursor(CURSOR_GRABBING.to_owned()), Action::RenderNeeded]
            }
            InputState::Panning { last_screen } => {
                self.input = InputState::Panning { last_screen: screen_pt };
                if self.viewport.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y) {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            InputState::Idle => {
                let hit = self.room_at_screen(screen_pt);
                self.hover_room(hit.as_deref())
            }
            InputState::Pinching { .. } => Vec::new(),
        }
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        match std::mem::take(&mut self.input) {
            InputState::Pressed { room: Some(pressed), .. } => {
                // Activation needs press and release on the same room.
                if self.room_at_screen(screen_pt).as_deref() == Some(pressed.as_str()) {
                    self.activate_room(&pressed)
                } else {
                    Vec::new()
                }
            }
            InputState::Panning { .. } => {
                let cursor = if self.scene.hovered().is_some() { CURSOR_POINTER } else { CURSOR_DEFAULT };
                vec![Action::SetCursor(cursor.to_owned())]
            }
            _ => Vec::new(),
        }
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        self.hover_room(None)
    }

    /// Set or clear hover directly, for hosts that receive per-element
    /// enter/leave events.
    pub fn hover_room(&mut self, id: Option<&str>) -> Vec<Action> {
        if !self.scene.set_hover(id) {
            return Vec::new();
        }
        let cursor = if id.is_some() { CURSOR_POINTER } else { CURSOR_DEFAULT };
        vec![Action::SetCursor(cursor.to_owned()), Action::RenderNeeded]
    }

    fn room_at_screen(&self, screen_pt: Point) -> Option<RoomId> {
        let world = self.camera().screen_to_world(screen_pt);
        self.backend.hit_test(&self.scene, world)
    }

    // --- Viewport ---

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        render_if(self.viewport.wheel(screen_pt, delta.dy))
    }

    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        render_if(self.viewport.double_click(screen_pt))
    }

    /// Two fingers went down `distance` pixels apart.
    pub fn on_pinch_start(&mut self, distance: f64) -> Vec<Action> {
        self.input = InputState::Pinching { last_distance: distance };
        Vec::new()
    }

    /// Fingers moved; `center` is their screen-space midpoint.
    pub fn on_pinch_move(&mut self, center: Point, distance: f64) -> Vec<Action> {
        let InputState::Pinching { last_distance } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Pinching { last_distance: distance };
        if last_distance <= 0.0 {
            return Vec::new();
        }
        render_if(self.viewport.pinch(center, distance / last_distance))
    }

    pub fn on_pinch_end(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        Vec::new()
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        render_if(self.viewport.zoom_in())
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        render_if(self.viewport.zoom_out())
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        render_if(self.viewport.reset())
    }

    pub fn toggle_fullscreen(&mut self) -> Vec<Action> {
        match self.viewport.toggle_fullscreen() {
            Some(on) => vec![Action::FullscreenToggled(on), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.is_escape() {
            return self.dismiss(DismissReason::Escape);
        }
        if key.is_tab() {
            return match self.scene.cycle_focus(modifiers.shift) {
                Some(_) => vec![Action::RenderNeeded],
                None => Vec::new(),
            };
        }
        if key.is_activate() {
            if let Some(id) = self.scene.focused().map(str::to_owned) {
                return self.activate_room(&id);
            }
        }
        Vec::new()
    }

    // --- Selection ---

    /// Select the room behind `id` (a room id, shape id or label id).
    pub fn activate_room(&mut self, id: &str) -> Vec<Action> {
        let room = self.registry.resolve_shape(id);
        let room_id = room.id.clone();
        self.selection.select(room);
        vec![Action::RoomSelected(room_id), Action::RenderNeeded]
    }

    pub fn dismiss(&mut self, reason: DismissReason) -> Vec<Action> {
        if self.selection.dismiss(reason) {
            vec![Action::SelectionCleared]
        } else {
            Vec::new()
        }
    }

    /// Click on the detail panel backdrop or anything bubbling through it.
    pub fn backdrop_click(&mut self, target_is_backdrop: bool) -> Vec<Action> {
        if self.selection.on_backdrop_click(target_is_backdrop) {
            vec![Action::SelectionCleared]
        } else {
            Vec::new()
        }
    }

    /// Reserve the selected room, if it is available.
    pub fn reserve(&mut self) -> Vec<Action> {
        match self.selection.reserve() {
            Some(reservation) => vec![
                Action::RoomReserved { room_id: reservation.room_id, room_name: reservation.room_name },
                Action::SelectionCleared,
            ],
            None => Vec::new(),
        }
    }

    // --- Legend ---

    /// Per-status counts over the current rooms.
    #[must_use]
    pub fn legend_counts(&self) -> Vec<LegendEntry> {
        legend_counts(self.registry.rooms())
    }

    pub fn toggle_legend(&mut self, shared: Option<bool>) -> LegendToggle {
        self.legend.toggle(shared)
    }

    // --- Queries ---

    /// Produce the backend output for the current scene.
    ///
    /// # Errors
    ///
    /// Propagates [`BackendError`] from the backend.
    pub fn output(&self) -> Result<BackendOutput, BackendError> {
        self.backend.output(&self.scene)
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.viewport.camera()
    }

    #[must_use]
    pub fn selected_room(&self) -> Option<&Room> {
        self.selection.room()
    }

    /// Selectable shapes currently on screen.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.backend.shape_count(&self.scene)
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }
}

fn render_if(changed: bool) -> Vec<Action> {
    if changed { vec![Action::RenderNeeded] } else { Vec::new() }
}

/// The canvas viewer. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
    dpr: f64,
}

impl Engine {
    /// Create a shape graph viewer bound to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, registry: RoomRegistry, config: ViewerConfig) -> Result<Self, JsValue> {
        let ctx = render::context_2d(&canvas)?;
        let backend = ShapeGraphBackend::new(&config).with_measure(Box::new(render::CanvasMeasure::new(ctx)));
        let mut core = EngineCore::new(Box::new(backend), config);
        core.set_registry(registry);
        core.attach_viewport();
        Ok(Self { canvas, core, dpr: 1.0 })
    }

    /// Update viewport dimensions and device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.canvas.set_width((width_css * self.dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * self.dpr).round().max(0.0) as u32);
        self.core.set_container(Size::new(width_css, height_css))
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_double_click(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_double_click(screen_pt)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend has nothing to draw or a `Canvas2D` call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let BackendOutput::DisplayList(list) = self.core.output().map_err(|e| JsValue::from_str(&e.to_string()))?
        else {
            return Ok(());
        };
        let ctx = render::context_2d(&self.canvas)?;
        let view = self.core.container();
        render::draw(&ctx, &list, &self.core.camera(), view.width, view.height, self.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn selected_room(&self) -> Option<&Room> {
        self.core.selected_room()
    }
}
