//! The per-grid virtualization engine.
//!
//! `GridEngine` owns the configuration, viewport state, and sparse store
//! and expresses every grid operation as plain Rust. The DOM layer in
//! `viewer` stays a thin projection over it, which keeps the whole
//! engine drivable from native tests.

use serde::Serialize;

use crate::config::GridOptions;
use crate::error::Result;
use crate::labels::col_label;
use crate::layout::{Axis, ViewportState};
use crate::scroll::{drag_ratio, thumb_metrics, wheel_step, RangeBounds, ThumbMetrics};
use crate::store::SparseStore;

/// Diagnostic snapshot of the engine's scroll state.
#[derive(Debug, Serialize)]
pub struct ScrollMetrics {
    pub current_row: u32,
    pub current_col: u32,
    pub max_row_offset: u32,
    pub max_col_offset: u32,
    pub visible_rows: u32,
    pub visible_cols: u32,
    pub physical_rows: u32,
    pub physical_cols: u32,
    pub total_rows: u32,
    pub total_cols: u32,
    pub stored_cells: usize,
}

/// One grid instance: configuration, viewport, and cell contents.
///
/// Constructed once per grid; there is no process-wide state.
pub struct GridEngine {
    options: GridOptions,
    viewport: ViewportState,
    store: SparseStore,
}

impl GridEngine {
    /// Build an engine from host options.
    ///
    /// # Errors
    /// Returns [`crate::error::GridError::Config`] when the options fail
    /// validation; no engine state is constructed in that case.
    pub fn new(options: GridOptions) -> Result<Self> {
        options.validate()?;
        let viewport = ViewportState::new(&options);
        Ok(Self {
            options,
            viewport,
            store: SparseStore::new(),
        })
    }

    /// The validated options this engine was built from.
    #[must_use]
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Current viewport state.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// The sparse cell store.
    #[must_use]
    pub fn store(&self) -> &SparseStore {
        &self.store
    }

    /// Clamped scroll on one axis. Returns whether the offset changed.
    pub fn scroll_to(&mut self, axis: Axis, requested: f64) -> bool {
        self.viewport.scroll_to(axis, requested)
    }

    /// Apply a wheel event: step `current_row` by the configured row
    /// step in the direction of `delta_y`, clamped.
    pub fn wheel_by(&mut self, delta_y: f64) -> bool {
        let step = wheel_step(delta_y, self.options.wheel_row_step);
        let target = f64::from(self.viewport.current_row) + step;
        self.viewport.scroll_to(Axis::Row, target)
    }

    /// Apply a thumb drag: `pointer` is the pointer coordinate relative
    /// to the track origin, `track_len` the track's pixel length. The
    /// resulting ratio of thumb travel maps linearly onto
    /// `[0, max_offset]`.
    pub fn apply_drag(&mut self, axis: Axis, pointer: f64, track_len: f64) -> bool {
        let thumb = self.thumb(axis, track_len);
        let ratio = drag_ratio(pointer, track_len, thumb.length);
        let target = (ratio * f64::from(self.viewport.max_offset(axis))).round();
        self.viewport.scroll_to(axis, target)
    }

    /// Commit an edit observed at a physical window position.
    ///
    /// The logical target is resolved against the viewport *at the time
    /// of the edit*; the clamp in the mapping guarantees the store never
    /// sees an out-of-range coordinate. Returns the logical coordinates
    /// written.
    pub fn edit_physical(&mut self, physical_row: u32, physical_col: u32, text: &str) -> (u32, u32) {
        let row = self.viewport.logical_row(physical_row);
        let col = self.viewport.logical_col(physical_col);
        self.store.set(row, col, text);
        (row, col)
    }

    /// Host-side write at logical coordinates, clamped into range.
    /// Returns the coordinates actually written.
    pub fn set_cell(&mut self, row: u32, col: u32, text: &str) -> (u32, u32) {
        let row = row.min(self.viewport.total_rows.saturating_sub(1));
        let col = col.min(self.viewport.total_cols.saturating_sub(1));
        self.store.set(row, col, text);
        (row, col)
    }

    /// Text stored at logical coordinates, clamped into range.
    #[must_use]
    pub fn cell_text(&self, row: u32, col: u32) -> &str {
        let row = row.min(self.viewport.total_rows.saturating_sub(1));
        let col = col.min(self.viewport.total_cols.saturating_sub(1));
        self.store.get(row, col)
    }

    /// Text to display at a physical window position.
    #[must_use]
    pub fn cell_text_at(&self, physical_row: u32, physical_col: u32) -> &str {
        self.store.get(
            self.viewport.logical_row(physical_row),
            self.viewport.logical_col(physical_col),
        )
    }

    /// Row-header text for a physical row (1-based logical row number).
    #[must_use]
    pub fn row_label_at(&self, physical_row: u32) -> String {
        let logical = u64::from(self.viewport.logical_row(physical_row));
        (logical + 1).to_string()
    }

    /// Column-header text for a physical column.
    #[must_use]
    pub fn col_label_at(&self, physical_col: u32) -> String {
        col_label(self.viewport.logical_col(physical_col))
    }

    /// Thumb geometry for an axis on a track of `track_len` pixels.
    #[must_use]
    pub fn thumb(&self, axis: Axis, track_len: f64) -> ThumbMetrics {
        thumb_metrics(
            self.viewport.visible(axis),
            self.viewport.total(axis),
            self.viewport.offset(axis),
            self.viewport.max_offset(axis),
            track_len,
            self.options.min_thumb_px,
        )
    }

    /// Bounds and value for the hidden range input of an axis.
    #[must_use]
    pub fn range_bounds(&self, axis: Axis) -> RangeBounds {
        RangeBounds {
            max: self.viewport.max_offset(axis),
            value: self.viewport.offset(axis),
        }
    }

    /// Re-derive visible extents from the container's pixel size.
    pub fn recompute_visible_extents(&mut self, width: f64, height: f64) {
        self.viewport
            .recompute_visible_extents(width, height, &self.options);
    }

    /// Replace the logical grid bounds, re-clamping scroll offsets.
    ///
    /// # Errors
    /// Returns [`crate::error::GridError::Config`] for zero extents.
    pub fn set_extents(&mut self, total_rows: u32, total_cols: u32) -> Result<()> {
        let next = GridOptions {
            total_rows,
            total_cols,
            ..self.options.clone()
        };
        next.validate()?;
        self.options = next;
        self.viewport.set_totals(total_rows, total_cols);
        Ok(())
    }

    /// Snapshot of the scroll state for diagnostics.
    #[must_use]
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            current_row: self.viewport.current_row,
            current_col: self.viewport.current_col,
            max_row_offset: self.viewport.max_offset(Axis::Row),
            max_col_offset: self.viewport.max_offset(Axis::Col),
            visible_rows: self.viewport.visible_rows,
            visible_cols: self.viewport.visible_cols,
            physical_rows: self.viewport.physical_rows(),
            physical_cols: self.viewport.physical_cols(),
            total_rows: self.viewport.total_rows,
            total_cols: self.viewport.total_cols,
            stored_cells: self.store.len(),
        }
    }
}
