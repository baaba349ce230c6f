//! Viewport and scroll clamping tests
//!
//! Drives the engine the way the event layer does: wheel notches, drag
//! ratios, and direct scroll requests, all against the reference
//! 10,000,000 x 100 grid.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::config::GridOptions;
use gridview::engine::GridEngine;
use gridview::layout::Axis;

fn reference_engine() -> GridEngine {
    GridEngine::new(GridOptions::default()).expect("default options are valid")
}

// =============================================================================
// CLAMPING
// =============================================================================

#[test]
fn scroll_above_max_clamps_to_max() {
    let mut engine = reference_engine();
    engine.scroll_to(Axis::Row, 9_999_999_999.0);
    assert_eq!(
        engine.viewport().current_row,
        10_000_000 - 50,
        "offset should clamp to total_rows - visible_rows"
    );
}

#[test]
fn scroll_below_zero_clamps_to_zero() {
    let mut engine = reference_engine();
    engine.scroll_to(Axis::Row, 100.0);
    engine.scroll_to(Axis::Row, -37.0);
    assert_eq!(engine.viewport().current_row, 0);
}

#[test]
fn scroll_rounds_fractional_requests() {
    let mut engine = reference_engine();
    engine.scroll_to(Axis::Row, 41.6);
    assert_eq!(engine.viewport().current_row, 42);
}

#[test]
fn scroll_is_idempotent() {
    let mut engine = reference_engine();
    assert!(engine.scroll_to(Axis::Col, 30.0), "first call changes state");
    assert!(
        !engine.scroll_to(Axis::Col, 30.0),
        "second call with the same offset is a no-op"
    );
    assert_eq!(engine.viewport().current_col, 30);
}

#[test]
fn fully_visible_axis_has_zero_max_offset() {
    let options = GridOptions {
        total_rows: 20,
        total_cols: 10,
        visible_rows: 50,
        visible_cols: 20,
        ..GridOptions::default()
    };
    let mut engine = GridEngine::new(options).unwrap();
    assert_eq!(engine.viewport().max_offset(Axis::Row), 0);
    engine.scroll_to(Axis::Row, 1_000.0);
    assert_eq!(engine.viewport().current_row, 0);
}

// =============================================================================
// WHEEL PROTOCOL
// =============================================================================

#[test]
fn five_wheel_notches_land_on_row_25() {
    let mut engine = reference_engine();
    for _ in 0..5 {
        engine.wheel_by(120.0);
    }
    assert_eq!(engine.viewport().current_row, 25);
}

#[test]
fn wheel_up_from_origin_stays_at_zero() {
    let mut engine = reference_engine();
    assert!(!engine.wheel_by(-120.0), "no observable change at the top");
    assert_eq!(engine.viewport().current_row, 0);
}

#[test]
fn wheel_near_bottom_clamps() {
    let mut engine = reference_engine();
    engine.scroll_to(Axis::Row, 9_999_948.0);
    engine.wheel_by(120.0);
    assert_eq!(
        engine.viewport().current_row,
        9_999_950,
        "wheel past the end clamps to max offset"
    );
}

// =============================================================================
// DRAG PROTOCOL
// =============================================================================

#[test]
fn drag_to_track_end_reaches_max_offset() {
    let mut engine = reference_engine();
    engine.apply_drag(Axis::Row, 500.0, 500.0);
    assert_eq!(engine.viewport().current_row, 9_999_950);
}

#[test]
fn drag_to_track_origin_reaches_zero() {
    let mut engine = reference_engine();
    engine.scroll_to(Axis::Row, 5_000.0);
    engine.apply_drag(Axis::Row, -10.0, 500.0);
    assert_eq!(engine.viewport().current_row, 0);
}

#[test]
fn drag_midpoint_lands_mid_grid() {
    let mut engine = reference_engine();
    // Thumb is the 20px minimum on a 500px track, so travel is 480px
    engine.apply_drag(Axis::Row, 240.0, 500.0);
    assert_eq!(engine.viewport().current_row, 4_999_975);
}

#[test]
fn drag_on_degenerate_track_is_harmless() {
    let options = GridOptions {
        total_rows: 20,
        visible_rows: 50,
        ..GridOptions::default()
    };
    let mut engine = GridEngine::new(options).unwrap();
    assert!(!engine.apply_drag(Axis::Row, 50.0, 10.0));
    assert_eq!(engine.viewport().current_row, 0);
}

// =============================================================================
// RESIZE-DRIVEN EXTENTS
// =============================================================================

#[test]
fn extents_follow_container_size() {
    let mut engine = reference_engine();
    // 630px tall: (630 - 30) / 30 = 20 rows; 880px wide: (880 - 80) / 80 = 10 cols
    engine.recompute_visible_extents(880.0, 630.0);
    assert_eq!(engine.viewport().visible_rows, 20);
    assert_eq!(engine.viewport().visible_cols, 10);
}

#[test]
fn tiny_container_still_shows_one_cell() {
    let mut engine = reference_engine();
    engine.recompute_visible_extents(4.0, 4.0);
    assert_eq!(engine.viewport().visible_rows, 1);
    assert_eq!(engine.viewport().visible_cols, 1);
}

#[test]
fn growing_viewport_reclamps_offset() {
    let mut engine = reference_engine();
    engine.scroll_to(Axis::Row, 9_999_950.0);
    // Doubling the visible rows shrinks max offset; the current offset
    // must follow it down
    engine.recompute_visible_extents(880.0, 3_030.0);
    let viewport = engine.viewport();
    assert_eq!(viewport.visible_rows, 100);
    assert_eq!(viewport.current_row, 10_000_000 - 100);
}

// =============================================================================
// BOUNDS RESIZE SEAM
// =============================================================================

#[test]
fn set_extents_reclamps_and_validates() {
    let mut engine = reference_engine();
    engine.scroll_to(Axis::Row, 9_999_950.0);
    engine.set_extents(1_000, 100).unwrap();
    assert_eq!(engine.viewport().current_row, 950);
    assert!(engine.set_extents(0, 100).is_err(), "zero extents rejected");
}
