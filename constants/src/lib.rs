//! Compile-time scene literals shared by the render engine.
//!
//! Every runtime resource in the engine takes its `Default` from here, so a
//! revision of the scene is tuned by editing these values.

pub mod camera;
pub mod glyph;
pub mod light_rig;
pub mod render_settings;
pub mod scene;
