//! Materials and render-path selection.
//!
//! The glow material is a custom-lit shader that follows the orbiting
//! lights; the compositor decides whether the camera renders directly or
//! through a bloom pass.

/// Direct or bloom render path for the scene camera.
pub mod compositor;

/// Custom-lit glow shader material and its light uniform sync.
pub mod glow_material;
