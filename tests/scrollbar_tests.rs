//! Scrollbar geometry tests
//!
//! Thumb geometry and the hidden range mirrors, including the
//! degenerate cases that must never hit a division fault.

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
use gridview::scroll::{drag_ratio, thumb_metrics};

fn reference_engine() -> GridEngine {
    GridEngine::new(GridOptions::default()).expect("default options are valid")
}

// =============================================================================
// THUMB GEOMETRY
// =============================================================================

#[test]
fn minimum_thumb_length_enforced() {
    // 50 visible rows of 10,000,000 on a 500px track: proportional
    // length would be 0.0025px
    let thumb = thumb_metrics(50, 10_000_000, 0, 9_999_950, 500.0, 20.0);
    assert_eq!(thumb.length, 20.0);
}

#[test]
fn proportional_thumb_when_large_enough() {
    // 50 of 100 rows on a 500px track: half the track
    let thumb = thumb_metrics(50, 100, 25, 50, 500.0, 20.0);
    assert_eq!(thumb.length, 250.0);
    assert_eq!(thumb.position, 125.0);
}

#[test]
fn thumb_position_zero_when_axis_fits() {
    let thumb = thumb_metrics(50, 30, 0, 0, 500.0, 20.0);
    assert_eq!(thumb.position, 0.0, "max_offset 0 must not divide");
}

#[test]
fn engine_thumb_uses_configured_minimum() {
    let options = GridOptions {
        min_thumb_px: 44.0,
        ..GridOptions::default()
    };
    let engine = GridEngine::new(options).unwrap();
    let thumb = engine.thumb(Axis::Row, 500.0);
    assert_eq!(thumb.length, 44.0);
}

#[test]
fn thumb_tracks_offset_linearly() {
    let mut engine = reference_engine();
    engine.scroll_to(Axis::Row, 9_999_950.0);
    let thumb = engine.thumb(Axis::Row, 500.0);
    assert_eq!(
        thumb.position, 480.0,
        "at max offset the thumb rests at track end minus its length"
    );
}

// =============================================================================
// DRAG RATIO DEGENERACY
// =============================================================================

#[test]
fn degenerate_track_yields_zero_ratio() {
    assert_eq!(drag_ratio(100.0, 20.0, 20.0), 0.0);
    assert_eq!(drag_ratio(100.0, 10.0, 20.0), 0.0);
}

#[test]
fn ratio_clamps_to_unit_interval() {
    assert!(drag_ratio(-1_000.0, 500.0, 20.0) == 0.0);
    assert!(drag_ratio(10_000.0, 500.0, 20.0) == 1.0);
}

// =============================================================================
// RANGE MIRRORS
// =============================================================================

#[test]
fn range_bounds_mirror_offset_and_max() {
    let mut engine = reference_engine();
    engine.scroll_to(Axis::Row, 123.0);
    let bounds = engine.range_bounds(Axis::Row);
    assert_eq!(bounds.max, 9_999_950);
    assert_eq!(bounds.value, 123);
}

#[test]
fn range_bounds_follow_extent_changes() {
    let mut engine = reference_engine();
    engine.recompute_visible_extents(880.0, 3_030.0);
    let bounds = engine.range_bounds(Axis::Row);
    assert_eq!(bounds.max, 10_000_000 - 100);
}

#[test]
fn column_range_covers_horizontal_axis() {
    let engine = reference_engine();
    let bounds = engine.range_bounds(Axis::Col);
    assert_eq!(bounds.max, 100 - 20);
    assert_eq!(bounds.value, 0);
}
