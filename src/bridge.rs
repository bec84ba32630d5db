//! JavaScript surface of the chart.
//!
//! `OdontogramChart` is what the host page constructs. It forwards DOM events
//! to the engine, draws on demand, and calls the registered click callback with
//! a single integer tooth identifier. Records and selection flow one way, from
//! the host into the chart.
//!
//! Every method takes `&self` and the engine sits behind a `RefCell`, so the
//! click callback may call back into the chart synchronously (typically
//! `set_selected(id)` then `render()`). Clicks are reported only after the
//! engine borrow is released and the chart has redrawn.

use std::cell::RefCell;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::ChartConfig;
use crate::doc::ChartRecords;
use crate::engine::{Action, Effects, Engine};
use crate::error::ChartError;
use crate::geometry::Point;
use crate::input::Button;
use crate::style::legend;
use crate::summary::{describe, summarize};
use crate::tooth::ToothId;

fn js_error(e: ChartError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn json_error(e: serde_json::Error) -> JsValue {
    js_error(ChartError::Json(e))
}

#[wasm_bindgen]
pub struct OdontogramChart {
    engine: RefCell<Engine>,
    on_click: RefCell<Option<Function>>,
}

#[wasm_bindgen]
impl OdontogramChart {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> OdontogramChart {
        Self { engine: RefCell::new(Engine::new(canvas)), on_click: RefCell::new(None) }
    }

    /// Apply a JSON configuration; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Rejects JSON that does not parse as a configuration.
    pub fn set_config(&self, json: &str) -> Result<(), JsValue> {
        let config = ChartConfig::from_json_str(json).map_err(js_error)?;
        self.engine.borrow_mut().set_config(config);
        Ok(())
    }

    /// Replace all tooth records with a JSON object keyed by FDI code.
    ///
    /// # Errors
    ///
    /// Rejects malformed JSON or a non-object top level. Bad individual entries
    /// are dropped instead.
    pub fn set_records(&self, json: &str) -> Result<(), JsValue> {
        let records = ChartRecords::from_json_str(json).map_err(js_error)?;
        self.engine.borrow_mut().load_records(records);
        Ok(())
    }

    /// Set or clear the selected tooth. Codes outside the FDI set clear it.
    pub fn set_selected(&self, tooth: Option<u8>) {
        let selected = tooth.and_then(ToothId::new);
        if tooth.is_some() && selected.is_none() {
            tracing::warn!(?tooth, "ignoring selection of invalid tooth identifier");
        }
        self.engine.borrow_mut().set_selection(selected);
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.engine.borrow_mut().set_read_only(read_only);
    }

    /// Register the click callback, replacing any previous one.
    pub fn on_click(&self, callback: Function) {
        *self.on_click.borrow_mut() = Some(callback);
    }

    /// Resize the backing store and redraw.
    ///
    /// # Errors
    ///
    /// Propagates canvas failures.
    pub fn resize(&self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        let mut engine = self.engine.borrow_mut();
        engine.set_viewport(width_css, height_css, dpr);
        engine.render()
    }

    /// # Errors
    ///
    /// Propagates canvas failures and exceptions thrown by the click callback.
    pub fn pointer_down(&self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let actions = self.engine.borrow_mut().on_pointer_down(Point::new(x, y), Button::from_dom(button));
        self.run(actions).map(|_| ())
    }

    /// Returns the new CSS cursor when it changes.
    ///
    /// # Errors
    ///
    /// Propagates canvas failures.
    pub fn pointer_move(&self, x: f64, y: f64) -> Result<Option<String>, JsValue> {
        let actions = self.engine.borrow_mut().on_pointer_move(Point::new(x, y));
        self.run(actions)
    }

    /// # Errors
    ///
    /// Propagates canvas failures.
    pub fn pointer_leave(&self) -> Result<Option<String>, JsValue> {
        let actions = self.engine.borrow_mut().on_pointer_leave();
        self.run(actions)
    }

    /// Activate a tooth from the keyboard. Invalid codes are ignored.
    ///
    /// # Errors
    ///
    /// Propagates exceptions thrown by the click callback.
    pub fn activate(&self, tooth: u8) -> Result<(), JsValue> {
        let Some(id) = ToothId::new(tooth) else {
            tracing::warn!(tooth, "ignoring activation of invalid tooth identifier");
            return Ok(());
        };
        let actions = self.engine.borrow_mut().activate(id);
        self.run(actions).map(|_| ())
    }

    /// # Errors
    ///
    /// Propagates canvas failures.
    pub fn render(&self) -> Result<(), JsValue> {
        self.engine.borrow().render()
    }

    /// Legend rows as JSON: `[{"condition", "label", "swatch"}]`.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn legend_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&legend()).map_err(json_error)
    }

    /// Chart summary as JSON.
    ///
    /// # Errors
    ///
    /// Fails only if serialization fails.
    pub fn summary_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&summarize(self.engine.borrow().records())).map_err(json_error)
    }

    /// Description of a tooth, or `None` for an invalid code.
    #[must_use]
    pub fn describe(&self, tooth: u8) -> Option<String> {
        ToothId::new(tooth).map(|id| describe(id, self.engine.borrow().records()))
    }
}

impl OdontogramChart {
    /// Carry out engine actions. Returns the last cursor change, if any.
    ///
    /// Must be called with no borrow of `engine` or `on_click` outstanding.
    fn run(&self, actions: Vec<Action>) -> Result<Option<String>, JsValue> {
        let effects = Effects::collect(actions);
        if effects.render {
            self.engine.borrow().render()?;
        }
        if !effects.clicked.is_empty() {
            let callback = self.on_click.borrow().clone();
            if let Some(callback) = callback {
                for id in effects.clicked {
                    callback.call1(&JsValue::NULL, &JsValue::from(id.code()))?;
                }
            }
        }
        Ok(effects.cursor)
    }
}
