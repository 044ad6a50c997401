//! Core application setup and configuration.
//!
//! Builds the app for native and WASM targets, holds the startup
//! configuration and the schedule ordering shared by the scene systems.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the app with the glow material, the typeface asset loader,
/// startup spawning and the per-frame animation schedule.
pub mod app_setup;

/// System sets ordering the per-frame work, and UI marker components.
pub mod app_state;

/// Scene revision selection and the startup configuration resource.
pub mod config;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
