//! Light rig choreography driven once per frame.
//!
//! The driver samples the scene clock a single time per update and moves
//! every orbiting light along its circular path.

/// Time bases the orbit phase can be derived from.
pub mod clock;

/// Per-frame driver system and the frame counter it advances.
pub mod driver;

/// Circular orbit paths and the light rig resource.
pub mod light_rig;
