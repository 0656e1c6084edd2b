//! Canvas 2D rendering module
//!
//! Read-only over the shared session state; all mutation happens in `sim`
//! and `input`.

pub mod canvas;

pub use canvas::CanvasRenderer;
