//! Layout engine mapping the physical render window onto the logical grid.
//!
//! This module handles:
//! - Physical-to-logical coordinate mapping with edge clamping
//! - Viewport state (scroll offsets, visible extents, overscan buffers)
//! - Clamped scroll operations and extent recomputation on resize

mod coords;
mod viewport;

pub use coords::to_logical;
pub use viewport::{Axis, ViewportState};
