//! Viewport state management for the virtual window.

use crate::config::GridOptions;

use super::coords::to_logical;

/// Scroll axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Vertical axis (rows).
    Row,
    /// Horizontal axis (columns).
    Col,
}

/// Viewport state - the logical position and extent of the render window.
///
/// Invariant: `current_row <= max(0, total_rows - visible_rows)`,
/// symmetrically for columns. Every mutation goes through [`scroll_to`]
/// or re-establishes the invariant itself, so offsets are always valid.
///
/// [`scroll_to`]: ViewportState::scroll_to
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Logical row of the window's reference corner.
    pub current_row: u32,
    /// Logical column of the window's reference corner.
    pub current_col: u32,
    /// Rows rendered simultaneously, derived from container height.
    pub visible_rows: u32,
    /// Columns rendered simultaneously, derived from container width.
    pub visible_cols: u32,
    /// Overscan rows beyond each vertical edge of the visible area.
    pub buffer_rows: u32,
    /// Overscan columns beyond each horizontal edge.
    pub buffer_cols: u32,
    /// Total logical rows.
    pub total_rows: u32,
    /// Total logical columns.
    pub total_cols: u32,
}

impl ViewportState {
    /// Create a viewport at the origin from validated options.
    #[must_use]
    pub fn new(options: &GridOptions) -> Self {
        Self {
            current_row: 0,
            current_col: 0,
            visible_rows: options.visible_rows.max(1),
            visible_cols: options.visible_cols.max(1),
            buffer_rows: options.buffer_rows,
            buffer_cols: options.buffer_cols,
            total_rows: options.total_rows,
            total_cols: options.total_cols,
        }
    }

    /// Current offset on an axis.
    #[must_use]
    pub fn offset(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.current_row,
            Axis::Col => self.current_col,
        }
    }

    /// Visible extent on an axis.
    #[must_use]
    pub fn visible(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.visible_rows,
            Axis::Col => self.visible_cols,
        }
    }

    /// Total logical extent on an axis.
    #[must_use]
    pub fn total(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.total_rows,
            Axis::Col => self.total_cols,
        }
    }

    /// Largest valid offset on an axis: `max(0, total - visible)`.
    #[must_use]
    pub fn max_offset(&self, axis: Axis) -> u32 {
        self.total(axis).saturating_sub(self.visible(axis))
    }

    /// Set an axis offset to `requested`, rounded and clamped into
    /// `[0, max_offset]`. Returns whether the offset actually changed,
    /// so callers can skip repaints on idempotent calls.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scroll_to(&mut self, axis: Axis, requested: f64) -> bool {
        let max_offset = self.max_offset(axis);
        let clamped = if requested.is_finite() {
            requested.round().clamp(0.0, f64::from(max_offset))
        } else {
            0.0
        };
        // The clamp bounds the value into [0, u32::MAX]
        let next = clamped as u32;

        match axis {
            Axis::Row => {
                let changed = self.current_row != next;
                self.current_row = next;
                changed
            }
            Axis::Col => {
                let changed = self.current_col != next;
                self.current_col = next;
                changed
            }
        }
    }

    /// Derive visible extents from the container's pixel size.
    ///
    /// `visible_rows = ceil((height - header_height) / row_height)` and
    /// `visible_cols = ceil((width - row_header_width) / col_width)`,
    /// each floored at 1. Offsets are re-clamped against the new extents.
    pub fn recompute_visible_extents(&mut self, width: f64, height: f64, options: &GridOptions) {
        self.visible_rows = derived_extent(height, options.header_height, options.row_height);
        self.visible_cols = derived_extent(width, options.row_header_width, options.col_width);
        self.reclamp();
    }

    /// Replace the logical bounds, re-clamping both offsets.
    pub fn set_totals(&mut self, total_rows: u32, total_cols: u32) {
        self.total_rows = total_rows;
        self.total_cols = total_cols;
        self.reclamp();
    }

    /// Physical window height: `visible_rows + 2 * buffer_rows`.
    #[must_use]
    pub fn physical_rows(&self) -> u32 {
        self.visible_rows + 2 * self.buffer_rows
    }

    /// Physical window width: `visible_cols + 2 * buffer_cols`.
    #[must_use]
    pub fn physical_cols(&self) -> u32 {
        self.visible_cols + 2 * self.buffer_cols
    }

    /// Logical row displayed at a physical row index.
    #[must_use]
    pub fn logical_row(&self, physical_row: u32) -> u32 {
        to_logical(
            self.current_row,
            physical_row,
            self.buffer_rows,
            self.total_rows,
        )
    }

    /// Logical column displayed at a physical column index.
    #[must_use]
    pub fn logical_col(&self, physical_col: u32) -> u32 {
        to_logical(
            self.current_col,
            physical_col,
            self.buffer_cols,
            self.total_cols,
        )
    }

    fn reclamp(&mut self) {
        self.current_row = self.current_row.min(self.max_offset(Axis::Row));
        self.current_col = self.current_col.min(self.max_offset(Axis::Col));
    }
}

/// Count of cells fitting in `container_px` after subtracting the header
/// chrome, rounded up and floored at 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn derived_extent(container_px: f64, chrome_px: f64, cell_px: f64) -> u32 {
    if cell_px.is_nan() || cell_px <= 0.0 {
        return 1;
    }
    let count = ((container_px - chrome_px) / cell_px).ceil();
    if count.is_nan() || count < 1.0 {
        return 1;
    }
    if count >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    // Bounded by the checks above
    count as u32
}
