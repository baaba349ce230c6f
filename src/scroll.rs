//! Scrollbar geometry and drag-state tracking.
//!
//! Pure math only: the DOM chrome in `viewer::scrollbars` applies these
//! results to thumb styles and the hidden range inputs.

use crate::layout::Axis;

/// Computed thumb geometry for one scrollbar track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbMetrics {
    /// Thumb length along the track, in pixels.
    pub length: f64,
    /// Thumb offset from the track origin, in pixels.
    pub position: f64,
}

/// Bounds mirrored onto the hidden range input for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBounds {
    /// Largest valid offset on the axis.
    pub max: u32,
    /// Current offset on the axis.
    pub value: u32,
}

/// Compute thumb geometry for an axis.
///
/// `length = max(min_thumb, visible / total * track_len)`;
/// `position = offset / max_offset * (track_len - length)`. When the
/// whole axis fits (`max_offset == 0`) the thumb parks at the origin
/// rather than dividing by zero.
#[must_use]
pub fn thumb_metrics(
    visible: u32,
    total: u32,
    offset: u32,
    max_offset: u32,
    track_len: f64,
    min_thumb: f64,
) -> ThumbMetrics {
    let proportional = if total == 0 {
        track_len
    } else {
        f64::from(visible) / f64::from(total) * track_len
    };
    let length = proportional.max(min_thumb);
    let position = if max_offset == 0 {
        0.0
    } else {
        f64::from(offset) / f64::from(max_offset) * (track_len - length).max(0.0)
    };
    ThumbMetrics { length, position }
}

/// Convert a pointer coordinate into a scroll ratio in `[0, 1]`.
///
/// `pointer` is relative to the track origin. Degenerate tracks
/// (`track_len <= thumb_len`) yield ratio 0 rather than a division
/// fault.
#[must_use]
pub fn drag_ratio(pointer: f64, track_len: f64, thumb_len: f64) -> f64 {
    let travel = track_len - thumb_len;
    if travel.is_nan() || travel <= 0.0 {
        return 0.0;
    }
    pointer.clamp(0.0, travel) / travel
}

/// Logical-row delta for a wheel event: the sign of the vertical delta
/// times the configured row step. Scrolling down is positive.
#[must_use]
pub fn wheel_step(delta_y: f64, row_step: u32) -> f64 {
    if delta_y > 0.0 {
        f64::from(row_step)
    } else {
        -f64::from(row_step)
    }
}

/// Exclusive per-axis drag state for the custom scrollbar thumbs.
///
/// A thumb press captures the pointer globally until release, so the
/// drag stays continuous even when the pointer leaves the track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    row: bool,
    col: bool,
}

impl DragState {
    /// Enter dragging state for an axis.
    pub fn begin(&mut self, axis: Axis) {
        match axis {
            Axis::Row => self.row = true,
            Axis::Col => self.col = true,
        }
    }

    /// Exit dragging state for both axes (pointer released).
    pub fn end(&mut self) {
        self.row = false;
        self.col = false;
    }

    /// Whether an axis is currently being dragged.
    #[must_use]
    pub fn active(&self, axis: Axis) -> bool {
        match axis {
            Axis::Row => self.row,
            Axis::Col => self.col,
        }
    }
}
