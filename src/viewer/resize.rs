//! Debounced resize coordination.
//!
//! Container resizes arrive in bursts; each burst collapses to a single
//! trailing rebuild. Rebuild is the only path that changes the physical
//! window dimensions; scroll-driven repaints never do.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
use super::{GridView, SharedState};

/// Tracks the single pending resize timer.
///
/// Scheduling replaces whatever was pending, so at most one rebuild can
/// ever be outstanding: the caller cancels the superseded timer id that
/// [`replace`] hands back, and [`take`] clears the slot when the timer
/// fires (or on teardown).
///
/// [`replace`]: ResizeDebounce::replace
/// [`take`]: ResizeDebounce::take
#[derive(Debug, Default)]
pub struct ResizeDebounce {
    pending: Option<i32>,
}

impl ResizeDebounce {
    /// Create with no pending timer.
    #[must_use]
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Record a newly scheduled timer, returning the superseded one.
    pub fn replace(&mut self, timer_id: i32) -> Option<i32> {
        self.pending.replace(timer_id)
    }

    /// Clear and return the pending timer id.
    pub fn take(&mut self) -> Option<i32> {
        self.pending.take()
    }

    /// Whether a rebuild is currently pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Attach the window `resize` listener. Returns the closure the
    /// caller must keep alive.
    pub(crate) fn wire_resize(state: &Rc<RefCell<SharedState>>) -> Option<Closure<dyn FnMut()>> {
        let window = web_sys::window()?;
        let state = Rc::clone(state);
        let closure = Closure::wrap(Box::new(move || {
            Self::schedule_rebuild(&state);
        }) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        Some(closure)
    }

    /// (Re)schedule the trailing rebuild, cancelling any pending timer.
    pub(crate) fn schedule_rebuild(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();

        // Cancel any existing timer
        if let Some(timer_id) = s.debounce.take() {
            window.clear_timeout_with_handle(timer_id);
        }

        if s.resize_fire_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    GridView::rebuild_after_resize(&state);
                }
            }) as Box<dyn FnMut()>);
            s.resize_fire_closure = Some(closure);
        }
        let Some(callback) = s.resize_fire_closure.as_ref() else {
            return;
        };

        let delay = i32::try_from(s.engine.options().resize_debounce_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(id) => {
                let _ = s.debounce.replace(id);
            }
            Err(_) => {
                let _ = s.debounce.take();
            }
        }
    }

    /// The debounced rebuild: re-derive extents from the container size
    /// at fire time, rebuild the physical window, repaint, and refresh
    /// the scrollbars.
    pub(crate) fn rebuild_after_resize(state: &Rc<RefCell<SharedState>>) {
        {
            let mut s = state.borrow_mut();
            let _ = s.debounce.take();
            let rect = s.container.get_bounding_client_rect();
            let (width, height) = (rect.width(), rect.height());
            s.engine.recompute_visible_extents(width, height);
        }
        if Self::rebuild_window(state).is_err() {
            return;
        }
        Self::repaint_and_refresh(state);
    }
}
