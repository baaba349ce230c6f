//! gridview - virtualized spreadsheet grid for the web
//!
//! Presents an effectively unbounded logical grid (tens of millions of
//! rows, hundreds of columns) through a small fixed-size DOM window via
//! WebAssembly:
//! - Sparse storage: only edited cells occupy memory
//! - Physical window rebuilt on resize, repainted in place on scroll
//! - Custom scrollbars with proportional thumbs and document-level drag
//!   capture
//! - Hidden range inputs for keyboard/assistive scrolling
//! - Debounced resize handling
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const grid = new GridView(container, { totalRows: 10000000, totalCols: 100 });
//! grid.setEditCallback((row, col, text) => persist(row, col, text));
//! ```

// Engine modules (native + wasm)
pub mod config;
pub mod engine;
pub mod error;
pub mod labels;
pub mod layout;
pub mod scroll;
pub mod store;

// DOM modules (wasm)
pub mod render;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main structs
pub use config::GridOptions;
pub use engine::GridEngine;
pub use viewer::GridView;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
