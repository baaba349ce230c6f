//! Grid configuration supplied by the host page.
//!
//! Options cross the JS boundary as a plain object and are deserialized
//! via `serde-wasm-bindgen`; every field has a default, so `new
//! GridView(container)` with no options produces the reference
//! 10,000,000 x 100 grid.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Host-supplied grid options.
///
/// Pixel sizes are logical (CSS) pixels. `visible_rows`/`visible_cols`
/// are starting values only; they are recomputed from the container size
/// at construction and on every debounced resize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    /// Total logical rows in the grid.
    pub total_rows: u32,
    /// Total logical columns in the grid.
    pub total_cols: u32,
    /// Row height in pixels (kept in sync with the host stylesheet).
    pub row_height: f64,
    /// Column width in pixels (kept in sync with the host stylesheet).
    pub col_width: f64,
    /// Starting count of simultaneously rendered rows.
    pub visible_rows: u32,
    /// Starting count of simultaneously rendered columns.
    pub visible_cols: u32,
    /// Overscan rows rendered beyond each vertical edge of the viewport.
    pub buffer_rows: u32,
    /// Overscan columns rendered beyond each horizontal edge.
    pub buffer_cols: u32,
    /// Logical rows scrolled per wheel notch.
    pub wheel_row_step: u32,
    /// Minimum scrollbar thumb length in pixels.
    pub min_thumb_px: f64,
    /// Trailing debounce delay for resize-triggered rebuilds, in ms.
    pub resize_debounce_ms: u32,
    /// Height of the column-header row in pixels.
    pub header_height: f64,
    /// Width of the row-header column in pixels.
    pub row_header_width: f64,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            total_rows: 10_000_000,
            total_cols: 100,
            row_height: 30.0,
            col_width: 80.0,
            visible_rows: 50,
            visible_cols: 20,
            buffer_rows: 0,
            buffer_cols: 0,
            wheel_row_step: 5,
            min_thumb_px: 20.0,
            resize_debounce_ms: 200,
            header_height: 30.0,
            row_header_width: 80.0,
        }
    }
}

impl GridOptions {
    /// Validate the options once at construction.
    ///
    /// # Errors
    /// Returns [`GridError::Config`] for zero extents or non-positive
    /// pixel sizes; the grid must not be built from such options.
    pub fn validate(&self) -> Result<()> {
        if self.total_rows == 0 || self.total_cols == 0 {
            return Err(GridError::Config(format!(
                "grid extents must be positive, got {}x{}",
                self.total_rows, self.total_cols
            )));
        }
        if self.row_height.is_nan()
            || self.col_width.is_nan()
            || self.row_height <= 0.0
            || self.col_width <= 0.0
        {
            return Err(GridError::Config(format!(
                "cell pixel sizes must be positive, got {}x{}",
                self.col_width, self.row_height
            )));
        }
        if self.header_height.is_nan()
            || self.row_header_width.is_nan()
            || self.header_height < 0.0
            || self.row_header_width < 0.0
        {
            return Err(GridError::Config(
                "header sizes must not be negative".to_string(),
            ));
        }
        if self.min_thumb_px.is_nan() || self.min_thumb_px < 0.0 {
            return Err(GridError::Config(
                "minimum thumb length must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GridOptions::default().validate().is_ok());
    }

    #[test]
    fn zero_rows_rejected() {
        let options = GridOptions {
            total_rows: 0,
            ..GridOptions::default()
        };
        assert!(matches!(options.validate(), Err(GridError::Config(_))));
    }

    #[test]
    fn non_positive_pixel_sizes_rejected() {
        let options = GridOptions {
            row_height: 0.0,
            ..GridOptions::default()
        };
        assert!(options.validate().is_err());

        let options = GridOptions {
            col_width: -80.0,
            ..GridOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn nan_pixel_sizes_rejected() {
        let options = GridOptions {
            row_height: f64::NAN,
            ..GridOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
