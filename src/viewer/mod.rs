//! Main `GridView` struct - the entry point for the virtual grid.
//!
//! This module provides the wasm-exported `GridView` struct that
//! handles:
//! - Validating host options and constructing the engine
//! - Building the physical window, scrollbar chrome, and hidden ranges
//! - Routing drag/wheel/keyboard/resize input into clamped scrolls
//! - Committing cell edits and firing the edit-commit hook
//!
//! Event handlers are registered automatically when the grid is created
//! - no manual JavaScript wiring required. On non-wasm targets the
//! struct wraps a bare [`GridEngine`] so the same semantics are
//! drivable from native tests.

mod events;
mod resize;
mod scrollbars;

pub use resize::ResizeDebounce;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;

use crate::engine::GridEngine;

#[cfg(target_arch = "wasm32")]
use crate::config::GridOptions;
#[cfg(target_arch = "wasm32")]
use crate::error::GridError;
#[cfg(target_arch = "wasm32")]
use crate::labels::parse_col_label;
#[cfg(target_arch = "wasm32")]
use crate::layout::Axis;
#[cfg(target_arch = "wasm32")]
use crate::render::RenderWindow;
#[cfg(target_arch = "wasm32")]
use crate::scroll::DragState;
#[cfg(target_arch = "wasm32")]
use events::EventClosures;
#[cfg(target_arch = "wasm32")]
use scrollbars::ScrollChrome;

/// Shared state accessed by every event handler (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) engine: GridEngine,
    pub(crate) container: HtmlElement,
    pub(crate) window: Option<RenderWindow>,
    pub(crate) chrome: Option<ScrollChrome>,
    pub(crate) drag: DragState,
    pub(crate) debounce: ResizeDebounce,
    pub(crate) resize_fire_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) edit_callback: Option<Function>,
}

/// The main grid struct exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    event_closures: EventClosures,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    window_resize_closure: Option<Closure<dyn FnMut()>>,

    // Non-wasm32 fields (for tests/tooling)
    #[cfg(not(target_arch = "wasm32"))]
    engine: GridEngine,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a live grid inside `container`.
    ///
    /// `options` is a plain object with camelCase keys (or
    /// undefined/null for the defaults). Construction either completes
    /// fully or tears down everything it attached and reports the
    /// error - no half-interactive grid is ever left behind.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: JsValue) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let options: GridOptions = if options.is_undefined() || options.is_null() {
            GridOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))?
        };
        let engine = GridEngine::new(options)?;

        let state = Rc::new(RefCell::new(SharedState {
            engine,
            container,
            window: None,
            chrome: None,
            drag: DragState::default(),
            debounce: ResizeDebounce::new(),
            resize_fire_closure: None,
            edit_callback: None,
        }));

        if let Err(e) = Self::build_dom(&state) {
            Self::teardown_dom(&state);
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "grid initialization failed: {e}"
            )));
            return Err(e.into());
        }

        let event_closures = Self::wire_events(&state);
        let window_resize_closure = Self::wire_resize(&state);

        Ok(GridView {
            state,
            event_closures,
            window_resize_closure,
        })
    }

    /// Register the edit-commit hook, fired as `(row, col, text)` on
    /// every committed cell write.
    #[wasm_bindgen(js_name = "setEditCallback")]
    pub fn set_edit_callback(&self, callback: Function) {
        self.state.borrow_mut().edit_callback = Some(callback);
    }

    /// Programmatic vertical scroll to a logical row (clamped).
    #[wasm_bindgen(js_name = "scrollToRow")]
    pub fn scroll_to_row(&self, row: u32) {
        Self::handle_scroll(&self.state, Axis::Row, f64::from(row));
    }

    /// Programmatic horizontal scroll to a logical column (clamped).
    #[wasm_bindgen(js_name = "scrollToCol")]
    pub fn scroll_to_col(&self, col: u32) {
        Self::handle_scroll(&self.state, Axis::Col, f64::from(col));
    }

    /// Scroll horizontally to a column given its spreadsheet label
    /// ("A", "ZZ", ...).
    ///
    /// # Errors
    /// Rejects labels that are not pure ASCII letters.
    #[wasm_bindgen(js_name = "scrollToLabel")]
    pub fn scroll_to_label(&self, label: &str) -> Result<(), JsValue> {
        let col = parse_col_label(label)
            .ok_or_else(|| JsValue::from_str(&format!("Invalid column label: {label}")))?;
        Self::handle_scroll(&self.state, Axis::Col, f64::from(col));
        Ok(())
    }

    /// Write a cell from the host (coordinates clamped into range).
    /// Fires the edit-commit hook and repaints.
    #[wasm_bindgen(js_name = "setCell")]
    pub fn set_cell(&self, row: u32, col: u32, text: &str) {
        let (row, col, callback) = {
            let s = &mut *self.state.borrow_mut();
            let (row, col) = s.engine.set_cell(row, col, text);
            (row, col, s.edit_callback.clone())
        };
        Self::repaint_window(&self.state);
        Self::invoke_edit_callback(callback, row, col, text);
    }

    /// Read a cell's text (coordinates clamped into range).
    #[wasm_bindgen(js_name = "cellText")]
    pub fn cell_text(&self, row: u32, col: u32) -> String {
        self.state.borrow().engine.cell_text(row, col).to_string()
    }

    /// Replace the logical grid bounds, re-clamping scroll offsets.
    ///
    /// # Errors
    /// Rejects zero extents.
    #[wasm_bindgen(js_name = "setExtents")]
    pub fn set_extents(&self, total_rows: u32, total_cols: u32) -> Result<(), JsValue> {
        {
            let mut s = self.state.borrow_mut();
            s.engine.set_extents(total_rows, total_cols)?;
        }
        Self::repaint_and_refresh(&self.state);
        Ok(())
    }

    /// Diagnostic snapshot of the scroll state.
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be serialized.
    #[wasm_bindgen(js_name = "scrollMetrics")]
    pub fn scroll_metrics(&self) -> Result<JsValue, JsValue> {
        let metrics = self.state.borrow().engine.scroll_metrics();
        serde_wasm_bindgen::to_value(&metrics)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

// Internal helpers shared by the constructor and the event handlers.
#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Measure the container, build the scrollbar chrome and the first
    /// render window, and paint the initial state.
    fn build_dom(state: &Rc<RefCell<SharedState>>) -> Result<(), GridError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GridError::Dom("no document".to_string()))?;

        {
            let s = &mut *state.borrow_mut();
            let rect = s.container.get_bounding_client_rect();
            let (width, height) = (rect.width(), rect.height());
            s.engine.recompute_visible_extents(width, height);
            let chrome = ScrollChrome::build(&document, &s.container)?;
            s.chrome = Some(chrome);
        }
        Self::rebuild_window(state)?;
        Self::repaint_and_refresh(state);
        Ok(())
    }

    /// Detach everything construction attached. Dropping the handles
    /// removes their elements from the DOM.
    fn teardown_dom(state: &Rc<RefCell<SharedState>>) {
        let s = &mut *state.borrow_mut();
        s.window = None;
        s.chrome = None;
    }

    /// Discard the physical window (if any) and build a fresh one at
    /// the viewport's current physical dimensions.
    pub(crate) fn rebuild_window(state: &Rc<RefCell<SharedState>>) -> Result<(), GridError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GridError::Dom("no document".to_string()))?;

        let (physical_rows, physical_cols, container) = {
            let mut s = state.borrow_mut();
            // Drop the old table before the replacement attaches
            s.window = None;
            let viewport = s.engine.viewport();
            (
                viewport.physical_rows(),
                viewport.physical_cols(),
                s.container.clone(),
            )
        };

        let weak_state = Rc::downgrade(state);
        let dispatch: Rc<dyn Fn(u32, u32, String)> = Rc::new(move |r, c, text| {
            if let Some(state) = weak_state.upgrade() {
                GridView::dispatch_edit(&state, r, c, &text);
            }
        });

        let window = RenderWindow::build(&document, physical_rows, physical_cols, dispatch)?;
        window.attach(&container);
        state.borrow_mut().window = Some(window);
        Ok(())
    }

    /// Repaint cells and headers in place.
    pub(crate) fn repaint_window(state: &Rc<RefCell<SharedState>>) {
        let s = state.borrow();
        if let Some(window) = &s.window {
            window.repaint(&s.engine);
        }
    }

    /// Repaint plus scrollbar geometry and range-mirror refresh.
    pub(crate) fn repaint_and_refresh(state: &Rc<RefCell<SharedState>>) {
        let s = state.borrow();
        if let Some(window) = &s.window {
            window.repaint(&s.engine);
        }
        if let Some(chrome) = &s.chrome {
            chrome.refresh(&s.engine);
        }
    }

    /// Clamped scroll on one axis; repaints and refreshes only when the
    /// offset actually changed.
    pub(crate) fn handle_scroll(state: &Rc<RefCell<SharedState>>, axis: Axis, requested: f64) {
        let changed = state.borrow_mut().engine.scroll_to(axis, requested);
        if changed {
            Self::repaint_and_refresh(state);
        }
    }

    /// Apply a wheel notch to the vertical axis.
    pub(crate) fn handle_wheel(state: &Rc<RefCell<SharedState>>, delta_y: f64) {
        let changed = state.borrow_mut().engine.wheel_by(delta_y);
        if changed {
            Self::repaint_and_refresh(state);
        }
    }

    /// Apply thumb-drag pointer geometry to one axis.
    pub(crate) fn handle_drag(
        state: &Rc<RefCell<SharedState>>,
        axis: Axis,
        pointer: f64,
        track_len: f64,
    ) {
        let changed = state
            .borrow_mut()
            .engine
            .apply_drag(axis, pointer, track_len);
        if changed {
            Self::repaint_and_refresh(state);
        }
    }

    /// Edit Dispatcher target: commit an edit observed at a physical
    /// cell, mapping through the viewport at the time of the edit. The
    /// cell already displays the typed text, so no repaint happens here
    /// (repainting would reset the caret).
    pub(crate) fn dispatch_edit(
        state: &Rc<RefCell<SharedState>>,
        physical_row: u32,
        physical_col: u32,
        text: &str,
    ) {
        let (row, col, callback) = {
            let s = &mut *state.borrow_mut();
            let (row, col) = s.engine.edit_physical(physical_row, physical_col, text);
            (row, col, s.edit_callback.clone())
        };
        Self::invoke_edit_callback(callback, row, col, text);
    }

    fn invoke_edit_callback(callback: Option<Function>, row: u32, col: u32, text: &str) {
        if let Some(callback) = callback {
            let _ = callback.call3(
                &JsValue::NULL,
                &JsValue::from_f64(f64::from(row)),
                &JsValue::from_f64(f64::from(col)),
                &JsValue::from_str(text),
            );
        }
    }
}

// ============================================================================
// Non-WASM32 Implementation (native tests and tooling)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Build a headless grid over a bare engine.
    ///
    /// # Errors
    /// Returns [`crate::error::GridError::Config`] for invalid options.
    pub fn new(options: crate::config::GridOptions) -> crate::error::Result<GridView> {
        Ok(GridView {
            engine: GridEngine::new(options)?,
        })
    }

    /// The wrapped engine.
    #[must_use]
    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Mutable access to the wrapped engine.
    pub fn engine_mut(&mut self) -> &mut GridEngine {
        &mut self.engine
    }
}
