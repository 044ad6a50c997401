use bevy::prelude::*;

use crate::engine::animation::clock::{SceneClock, orbit_phase};
use crate::engine::animation::light_rig::{LightRig, OrbitingLight};

/// The frame most recently handed to the renderer.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationFrame {
    /// Number of driver invocations so far; one rendered frame each.
    pub index: u64,
    /// Clock sample the frame's light positions were derived from.
    pub clock_seconds: f64,
}

/// Move the light rig to this frame's clock sample.
///
/// Runs once per update; the engine renders exactly one frame after each
/// update, so every invocation corresponds to one submitted frame.
pub fn animate_light_rig(
    clock: Res<SceneClock>,
    time: Res<Time>,
    rig: Res<LightRig>,
    mut frame: ResMut<AnimationFrame>,
    mut lights: Query<(&OrbitingLight, &mut Transform)>,
) {
    let seconds = clock.sample(&time);
    let phase = orbit_phase(seconds);

    for (light, mut transform) in &mut lights {
        if let Some(path) = rig.path(light.slot) {
            transform.translation = path.position_at(phase);
        }
    }

    frame.index += 1;
    frame.clock_seconds = seconds;
}
