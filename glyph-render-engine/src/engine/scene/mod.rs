//! Static scene construction.
//!
//! Ground plane, ambient light, the orbiting point lights and, in shader
//! revisions, the glowing cube. Built once at startup.

/// Startup system spawning the static scene.
pub mod bootstrap;

/// Hex colour conversion and the flat-shaded material preset.
pub mod palette;
