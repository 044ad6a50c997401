//! Orbit camera for scene navigation.
//!
//! Left-drag orbits the target, right-drag pans it, the wheel zooms.

/// Orbit camera resource, camera spawning and the input controller.
pub mod orbit_camera;
