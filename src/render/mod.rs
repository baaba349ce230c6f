//! DOM rendering of the physical window.
//!
//! The render window is a disposable projection of engine state: it is
//! rebuilt wholesale on structural change (initial load, resize) and
//! repainted in place on scroll. Nothing in here owns cell data.

#[cfg(target_arch = "wasm32")]
mod window;

#[cfg(target_arch = "wasm32")]
pub use window::RenderWindow;
