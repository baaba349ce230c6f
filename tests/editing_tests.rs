//! Edit dispatch tests
//!
//! Edits observed at physical window positions must resolve against the
//! viewport at the time of the edit, land in the sparse store, and
//! survive scrolling away and back.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridview::config::GridOptions;
use gridview::engine::GridEngine;
use gridview::layout::Axis;

fn engine_with_buffers(buffer_rows: u32, buffer_cols: u32) -> GridEngine {
    let options = GridOptions {
        buffer_rows,
        buffer_cols,
        ..GridOptions::default()
    };
    GridEngine::new(options).expect("options are valid")
}

#[test]
fn edit_maps_through_viewport_at_edit_time() {
    let mut engine = engine_with_buffers(0, 0);
    engine.scroll_to(Axis::Row, 10.0);
    engine.scroll_to(Axis::Col, 5.0);

    let (row, col) = engine.edit_physical(0, 0, "hello");
    assert_eq!((row, col), (10, 5), "physical (0,0) maps to logical (10,5)");
    assert_eq!(engine.store().get(10, 5), "hello");
}

#[test]
fn edited_value_survives_scroll_round_trip() {
    let mut engine = engine_with_buffers(0, 0);
    engine.scroll_to(Axis::Row, 10.0);
    engine.scroll_to(Axis::Col, 5.0);
    engine.edit_physical(0, 0, "persistent");

    // Scroll away and back; repaint reads the same logical cell
    engine.scroll_to(Axis::Row, 20.0);
    assert_eq!(engine.cell_text_at(0, 0), "", "row 20 was never edited");
    engine.scroll_to(Axis::Row, 10.0);
    assert_eq!(engine.cell_text_at(0, 0), "persistent");
}

#[test]
fn later_edits_use_later_viewport() {
    let mut engine = engine_with_buffers(0, 0);
    engine.edit_physical(3, 3, "first");
    engine.scroll_to(Axis::Row, 100.0);
    engine.edit_physical(3, 3, "second");

    assert_eq!(engine.store().get(3, 3), "first");
    assert_eq!(engine.store().get(103, 3), "second");
}

#[test]
fn edit_with_buffers_subtracts_overscan() {
    let mut engine = engine_with_buffers(2, 1);
    engine.scroll_to(Axis::Row, 50.0);
    // Physical row 0 sits buffer_rows above the visible area
    let (row, col) = engine.edit_physical(0, 0, "x");
    assert_eq!((row, col), (48, 0));
}

#[test]
fn edit_at_origin_with_buffers_clamps_to_row_zero() {
    let mut engine = engine_with_buffers(2, 0);
    let (row, _) = engine.edit_physical(0, 0, "clamped");
    assert_eq!(row, 0, "overscan above the grid clamps to the boundary row");
}

#[test]
fn repaint_plan_shows_headers_for_current_window() {
    let mut engine = engine_with_buffers(0, 0);
    engine.scroll_to(Axis::Row, 99.0);
    engine.scroll_to(Axis::Col, 26.0);

    assert_eq!(engine.row_label_at(0), "100", "row headers are 1-based");
    assert_eq!(engine.col_label_at(0), "AA");
    assert_eq!(engine.col_label_at(1), "AB");
}

#[test]
fn host_writes_clamp_into_range() {
    let mut engine = engine_with_buffers(0, 0);
    let (row, col) = engine.set_cell(u32::MAX, u32::MAX, "edge");
    assert_eq!((row, col), (9_999_999, 99));
    assert_eq!(engine.cell_text(u32::MAX, u32::MAX), "edge");
}

#[test]
fn store_size_tracks_distinct_cells_only() {
    let mut engine = engine_with_buffers(0, 0);
    for i in 0..10 {
        engine.edit_physical(i, 0, "v");
        engine.edit_physical(i, 0, "w");
    }
    assert_eq!(engine.store().len(), 10);
    assert_eq!(engine.scroll_metrics().stored_cells, 10);
}
