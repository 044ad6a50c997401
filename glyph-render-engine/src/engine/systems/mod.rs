//! Runtime diagnostics systems.

/// FPS overlay updates and periodic frame progress logging.
pub mod fps_tracking;
