//! Structured error types for gridview.
//!
//! Failures here are structural (bad configuration, missing DOM
//! capabilities), never transient: every runtime computation clamps
//! rather than erroring.

/// All errors that can occur while constructing or driving the grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Rejected configuration: zero extents or non-positive pixel sizes.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A required DOM capability was missing or a DOM call failed.
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
