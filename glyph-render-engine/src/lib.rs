//! Orbiting point lights over extruded "A" and "9" glyphs.
//!
//! Three scene revisions share one app: flat-colour glyphs, a glow-shaded
//! cube and glyphs, and the same glow composited through bloom.

pub mod engine;

pub use engine::core::app_setup::create_app;
