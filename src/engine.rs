use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Camera;
use crate::config::ChartConfig;
use crate::doc::ChartRecords;
use crate::geometry::Point;
use crate::hit::hit_test;
use crate::input::{Button, UiState};
use crate::render;
use crate::scene::{Scene, build_scene};
use crate::tooth::ToothId;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A tooth was activated; the host decides what that means.
    ToothClicked(ToothId),
    SetCursor(String),
    RenderNeeded,
}

/// Engine actions folded into what the host wrapper has to do.
///
/// The wrapper redraws and records the cursor first and reports clicks last,
/// after it has released the engine, so a click handler may call back into
/// the chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    /// Teeth to report, in dispatch order.
    pub clicked: Vec<ToothId>,
    /// Last cursor change, if any.
    pub cursor: Option<String>,
    pub render: bool,
}

impl Effects {
    #[must_use]
    pub fn collect(actions: Vec<Action>) -> Self {
        let mut effects = Self::default();
        for action in actions {
            match action {
                Action::ToothClicked(id) => effects.clicked.push(id),
                Action::SetCursor(cursor) => effects.cursor = Some(cursor),
                Action::RenderNeeded => effects.render = true,
            }
        }
        effects
    }
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// The engine never edits records: the host owns them and pushes a fresh
/// snapshot after handling a `ToothClicked`.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub records: ChartRecords,
    pub config: ChartConfig,
    pub camera: Camera,
    pub ui: UiState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            records: ChartRecords::new(),
            config: ChartConfig::default(),
            camera: Camera::default(),
            ui: UiState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the record snapshot.
    pub fn load_records(&mut self, records: ChartRecords) {
        tracing::debug!(records = records.len(), "loading tooth records");
        self.records = records;
    }

    /// Set the selected tooth. `None` clears the highlight.
    pub fn set_selection(&mut self, selected: Option<ToothId>) {
        self.ui.selected = selected;
    }

    /// Gate click reporting.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.ui.read_only = read_only;
    }

    /// Replace the configuration and refit the chart to the viewport.
    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
        self.refit();
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.refit();
    }

    fn refit(&mut self) {
        let (w, h) = self.config.content_size();
        self.camera = Camera::fit(w, h, self.viewport_width, self.viewport_height);
    }

    // --- Input events ---

    /// Pointer press at a screen point. Only a primary press on a tooth can
    /// produce a `ToothClicked`, and never while read-only.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let chart_pt = self.camera.screen_to_chart(screen_pt);
        match hit_test(chart_pt, &self.scene()) {
            Some(hit) => self.dispatch(hit.tooth),
            None => Vec::new(),
        }
    }

    /// Track hover. Emits a cursor change and a redraw when the hovered tooth
    /// changes.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let chart_pt = self.camera.screen_to_chart(screen_pt);
        let hovered = hit_test(chart_pt, &self.scene()).map(|hit| hit.tooth);
        self.set_hover(hovered)
    }

    /// Pointer left the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.set_hover(None)
    }

    /// Activate a tooth without a pointer, e.g. from keyboard navigation.
    /// Subject to the same read-only gate as a click.
    pub fn activate(&mut self, id: ToothId) -> Vec<Action> {
        self.dispatch(id)
    }

    fn dispatch(&self, id: ToothId) -> Vec<Action> {
        if !self.ui.accepts_clicks() {
            tracing::debug!(tooth = %id, "click suppressed: chart is read-only");
            return Vec::new();
        }
        tracing::debug!(tooth = %id, "tooth clicked");
        vec![Action::ToothClicked(id)]
    }

    fn set_hover(&mut self, hovered: Option<ToothId>) -> Vec<Action> {
        if hovered == self.ui.hovered {
            return Vec::new();
        }
        self.ui.hovered = hovered;
        let cursor = if hovered.is_some() && self.ui.accepts_clicks() { "pointer" } else { "default" };
        vec![Action::SetCursor(cursor.to_owned()), Action::RenderNeeded]
    }

    // --- Queries ---

    /// The visual tree for the current snapshot.
    #[must_use]
    pub fn scene(&self) -> Scene {
        build_scene(&self.records, self.ui.selected, &self.config.layout)
    }

    /// The currently selected tooth, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ToothId> {
        self.ui.selected
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ToothId> {
        self.ui.hovered
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.ui.read_only
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }
}

/// The full chart engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn load_records(&mut self, records: ChartRecords) {
        self.core.load_records(records);
    }

    pub fn set_selection(&mut self, selected: Option<ToothId>) {
        self.core.set_selection(selected);
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.core.set_read_only(read_only);
    }

    pub fn set_config(&mut self, config: ChartConfig) {
        self.core.set_config(config);
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let dpr = self.core.dpr;
        self.canvas.set_width((width_css * dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(0.0) as u32);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn activate(&mut self, id: ToothId) -> Vec<Action> {
        self.core.activate(id)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let core = &self.core;
        render::draw(
            &ctx,
            &core.scene(),
            &render::Frame {
                config: &core.config,
                camera: &core.camera,
                hovered: core.ui.hovered,
                read_only: core.ui.read_only,
                viewport_w: core.viewport_width,
                viewport_h: core.viewport_height,
                dpr: core.dpr,
            },
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ToothId> {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn records(&self) -> &ChartRecords {
        &self.core.records
    }
}
