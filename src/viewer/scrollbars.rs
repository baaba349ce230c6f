//! Custom scrollbar chrome: tracks, thumbs, and hidden range inputs.
//!
//! One track/thumb pair per axis plus a hidden `<input type="range">`
//! per axis that mirrors `[0, max_offset]` and the current offset, so
//! keyboard and assistive input funnel through the same clamped scroll
//! path as pointer drags.

#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Element, HtmlDivElement, HtmlElement, HtmlInputElement};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
use crate::engine::GridEngine;
#[cfg(target_arch = "wasm32")]
use crate::error::{GridError, Result};
#[cfg(target_arch = "wasm32")]
use crate::layout::Axis;

/// DOM handles for both scrollbars and their hidden range mirrors.
#[cfg(target_arch = "wasm32")]
pub(crate) struct ScrollChrome {
    pub(crate) vertical_track: HtmlDivElement,
    pub(crate) vertical_thumb: HtmlDivElement,
    pub(crate) horizontal_track: HtmlDivElement,
    pub(crate) horizontal_thumb: HtmlDivElement,
    pub(crate) vertical_range: HtmlInputElement,
    pub(crate) horizontal_range: HtmlInputElement,
}

#[cfg(target_arch = "wasm32")]
fn create_div(document: &Document, class_name: &str) -> Result<HtmlDivElement> {
    let div = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlDivElement>().ok())
        .ok_or_else(|| GridError::Dom("failed to create <div>".to_string()))?;
    div.set_class_name(class_name);
    Ok(div)
}

#[cfg(target_arch = "wasm32")]
fn create_hidden_range(document: &Document) -> Result<HtmlInputElement> {
    let input = document
        .create_element("input")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| GridError::Dom("failed to create <input>".to_string()))?;
    input.set_type("range");
    input.set_min("0");
    let _ = input.style().set_property("display", "none");
    Ok(input)
}

#[cfg(target_arch = "wasm32")]
impl ScrollChrome {
    /// Build and attach the scrollbar chrome to `container`.
    ///
    /// # Errors
    /// Returns [`GridError::Dom`] if element creation fails; anything
    /// already attached is removed by `Drop` when the partial chrome is
    /// discarded.
    pub(crate) fn build(document: &Document, container: &HtmlElement) -> Result<Self> {
        let vertical_track = create_div(document, "vertical-scrollbar")?;
        let vertical_thumb = create_div(document, "vertical-thumb")?;
        let horizontal_track = create_div(document, "horizontal-scrollbar")?;
        let horizontal_thumb = create_div(document, "horizontal-thumb")?;

        // Positional styles the chrome cannot work without; cosmetic
        // styling is left to the host stylesheet via the class names.
        let track_style = vertical_track.style();
        let _ = track_style.set_property("position", "absolute");
        let _ = track_style.set_property("top", "0");
        let _ = track_style.set_property("right", "0");
        let _ = track_style.set_property("width", "12px");
        let _ = track_style.set_property("height", "100%");

        let thumb_style = vertical_thumb.style();
        let _ = thumb_style.set_property("position", "absolute");
        let _ = thumb_style.set_property("left", "0");
        let _ = thumb_style.set_property("width", "100%");

        let track_style = horizontal_track.style();
        let _ = track_style.set_property("position", "absolute");
        let _ = track_style.set_property("left", "0");
        let _ = track_style.set_property("bottom", "0");
        let _ = track_style.set_property("height", "12px");
        let _ = track_style.set_property("width", "100%");

        let thumb_style = horizontal_thumb.style();
        let _ = thumb_style.set_property("position", "absolute");
        let _ = thumb_style.set_property("top", "0");
        let _ = thumb_style.set_property("height", "100%");

        let vertical_range = create_hidden_range(document)?;
        let horizontal_range = create_hidden_range(document)?;

        let _ = vertical_track.append_child(&vertical_thumb);
        let _ = horizontal_track.append_child(&horizontal_thumb);
        let _ = container.append_child(&vertical_track);
        let _ = container.append_child(&horizontal_track);
        let _ = container.append_child(&vertical_range);
        let _ = container.append_child(&horizontal_range);

        Ok(Self {
            vertical_track,
            vertical_thumb,
            horizontal_track,
            horizontal_thumb,
            vertical_range,
            horizontal_range,
        })
    }

    /// Pixel length of an axis track.
    pub(crate) fn track_len(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => f64::from(self.vertical_track.client_height()),
            Axis::Col => f64::from(self.horizontal_track.client_width()),
        }
    }

    /// Refresh thumb geometry and range bounds from engine state.
    pub(crate) fn refresh(&self, engine: &GridEngine) {
        let thumb = engine.thumb(Axis::Row, self.track_len(Axis::Row));
        let style = self.vertical_thumb.style();
        let _ = style.set_property("height", &format!("{}px", thumb.length));
        let _ = style.set_property("top", &format!("{}px", thumb.position));

        let thumb = engine.thumb(Axis::Col, self.track_len(Axis::Col));
        let style = self.horizontal_thumb.style();
        let _ = style.set_property("width", &format!("{}px", thumb.length));
        let _ = style.set_property("left", &format!("{}px", thumb.position));

        let bounds = engine.range_bounds(Axis::Row);
        self.vertical_range.set_max(&bounds.max.to_string());
        self.vertical_range.set_value(&bounds.value.to_string());

        let bounds = engine.range_bounds(Axis::Col);
        self.horizontal_range.set_max(&bounds.max.to_string());
        self.horizontal_range.set_value(&bounds.value.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollChrome {
    fn drop(&mut self) {
        let detach = |el: &Element| {
            if let Some(parent) = el.parent_node() {
                let _ = parent.remove_child(el);
            }
        };
        detach(&self.vertical_track);
        detach(&self.horizontal_track);
        detach(&self.vertical_range);
        detach(&self.horizontal_range);
    }
}
