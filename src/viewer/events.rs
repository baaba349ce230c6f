//! Pointer, wheel, and range-input event wiring for `GridView`.
//!
//! All methods here are `pub(crate)` helpers called from the
//! wasm-exported public API that lives in `mod.rs`. Thumb drags capture
//! the pointer at the document level, so a drag stays continuous even
//! when the pointer leaves the track.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Event, EventTarget, MouseEvent, WheelEvent};

#[cfg(target_arch = "wasm32")]
use super::{GridView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::layout::Axis;

/// Closures retained for the lifetime of the grid; dropping them would
/// detach the listeners.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub(crate) struct EventClosures {
    pub(crate) mouse: Vec<Closure<dyn FnMut(MouseEvent)>>,
    pub(crate) wheel: Option<Closure<dyn FnMut(WheelEvent)>>,
    pub(crate) range: Vec<Closure<dyn FnMut(Event)>>,
}

#[cfg(target_arch = "wasm32")]
fn listen<T: ?Sized>(target: &EventTarget, event: &str, closure: &Closure<T>) {
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
}

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Wire every input path: thumb drags, wheel, and the hidden range
    /// inputs. Returns the closures the caller must keep alive.
    pub(crate) fn wire_events(state: &Rc<RefCell<SharedState>>) -> EventClosures {
        let mut closures = EventClosures::default();

        let (vertical_thumb, horizontal_thumb, vertical_range, horizontal_range, container) = {
            let s = state.borrow();
            let Some(chrome) = &s.chrome else {
                return closures;
            };
            (
                chrome.vertical_thumb.clone(),
                chrome.horizontal_thumb.clone(),
                chrome.vertical_range.clone(),
                chrome.horizontal_range.clone(),
                s.container.clone(),
            )
        };

        // Thumb presses enter per-axis drag state
        for (thumb, axis) in [
            (vertical_thumb, Axis::Row),
            (horizontal_thumb, Axis::Col),
        ] {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                state.borrow_mut().drag.begin(axis);
            }) as Box<dyn FnMut(MouseEvent)>);
            listen(&thumb, "mousedown", &closure);
            closures.mouse.push(closure);
        }

        // Drag motion and release are observed on the document so the
        // capture survives the pointer leaving the track
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            {
                let state = Rc::clone(state);
                let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                    Self::internal_pointer_move(&state, event.client_x(), event.client_y());
                }) as Box<dyn FnMut(MouseEvent)>);
                listen(&document, "mousemove", &closure);
                closures.mouse.push(closure);
            }
            {
                let state = Rc::clone(state);
                let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                    state.borrow_mut().drag.end();
                }) as Box<dyn FnMut(MouseEvent)>);
                listen(&document, "mouseup", &closure);
                closures.mouse.push(closure);
            }
        }

        // Wheel scrolls the vertical axis by a fixed row step
        {
            let state = Rc::clone(state);
            let closure = Closure::wrap(Box::new(move |event: WheelEvent| {
                event.prevent_default();
                Self::handle_wheel(&state, event.delta_y());
            }) as Box<dyn FnMut(WheelEvent)>);
            listen(&container, "wheel", &closure);
            closures.wheel = Some(closure);
        }

        // Hidden range inputs: the keyboard/assistive path
        for (range, axis) in [
            (vertical_range, Axis::Row),
            (horizontal_range, Axis::Col),
        ] {
            let state = Rc::clone(state);
            let input = range.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                let requested = input.value().parse::<f64>().unwrap_or(0.0);
                Self::handle_scroll(&state, axis, requested);
            }) as Box<dyn FnMut(Event)>);
            listen(&range, "input", &closure);
            closures.range.push(closure);
        }

        closures
    }

    /// Route pointer motion into whichever axis is dragging.
    pub(crate) fn internal_pointer_move(
        state: &Rc<RefCell<SharedState>>,
        client_x: i32,
        client_y: i32,
    ) {
        let (row_drag, col_drag) = {
            let s = state.borrow();
            (s.drag.active(Axis::Row), s.drag.active(Axis::Col))
        };

        if row_drag {
            let geometry = {
                let s = state.borrow();
                s.chrome.as_ref().map(|chrome| {
                    let rect = chrome.vertical_track.get_bounding_client_rect();
                    (f64::from(client_y) - rect.top(), rect.height())
                })
            };
            if let Some((pointer, track_len)) = geometry {
                Self::handle_drag(state, Axis::Row, pointer, track_len);
            }
        }

        if col_drag {
            let geometry = {
                let s = state.borrow();
                s.chrome.as_ref().map(|chrome| {
                    let rect = chrome.horizontal_track.get_bounding_client_rect();
                    (f64::from(client_x) - rect.left(), rect.width())
                })
            };
            if let Some((pointer, track_len)) = geometry {
                Self::handle_drag(state, Axis::Col, pointer, track_len);
            }
        }
    }
}
