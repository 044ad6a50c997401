use bevy::prelude::*;
use constants::light_rig::{ORBIT_HEIGHT, ORBIT_RADIUS, PHASE_OFFSETS};

/// Number of point lights the rig drives.
pub const LIGHT_COUNT: usize = 2;

/// A horizontal circle a light travels on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    pub radius: f32,
    pub height: f32,
    /// Added to the shared orbit phase, in radians.
    pub phase_offset: f32,
}

impl OrbitPath {
    pub fn new(radius: f32, height: f32, phase_offset: f32) -> Self {
        Self {
            radius,
            height,
            phase_offset,
        }
    }

    /// Position on the circle at orbit angle `phase`.
    pub fn position_at(&self, phase: f32) -> Vec3 {
        let angle = phase + self.phase_offset;
        Vec3::new(
            angle.cos() * self.radius,
            self.height,
            angle.sin() * self.radius,
        )
    }
}

/// The orbit paths of every point light, indexed by [`OrbitingLight::slot`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightRig {
    pub paths: [OrbitPath; LIGHT_COUNT],
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            paths: PHASE_OFFSETS.map(|offset| OrbitPath::new(ORBIT_RADIUS, ORBIT_HEIGHT, offset)),
        }
    }
}

impl LightRig {
    pub fn with_phase_offsets(offsets: [f32; LIGHT_COUNT]) -> Self {
        Self {
            paths: offsets.map(|offset| OrbitPath::new(ORBIT_RADIUS, ORBIT_HEIGHT, offset)),
        }
    }

    pub fn path(&self, slot: usize) -> Option<&OrbitPath> {
        self.paths.get(slot)
    }

    pub fn positions_at(&self, phase: f32) -> [Vec3; LIGHT_COUNT] {
        self.paths.map(|path| path.position_at(phase))
    }

    /// True when every light shares one offset and so one position.
    pub fn is_in_phase(&self) -> bool {
        self.paths
            .windows(2)
            .all(|pair| pair[0].phase_offset == pair[1].phase_offset)
    }
}

/// Marks a point light entity driven by the rig.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitingLight {
    pub slot: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f32 = 1e-4;

    #[test]
    fn stays_on_circle_at_fixed_height() {
        let rig = LightRig::default();
        for step in 0..500 {
            let phase = step as f32 * 0.0371;
            for position in rig.positions_at(phase) {
                let radius_sq = position.x * position.x + position.z * position.z;
                assert!((radius_sq - ORBIT_RADIUS * ORBIT_RADIUS).abs() < 1e-2);
                assert_eq!(position.y, ORBIT_HEIGHT);
            }
        }
    }

    #[test]
    fn quarter_turn_scenario() {
        let path = LightRig::default().paths[0];

        assert!(path.position_at(0.0).abs_diff_eq(Vec3::new(20.0, 15.0, 0.0), EPS));
        assert!(path.position_at(FRAC_PI_2).abs_diff_eq(Vec3::new(0.0, 15.0, 20.0), EPS));
        assert!(path.position_at(PI).abs_diff_eq(Vec3::new(-20.0, 15.0, 0.0), EPS));
    }

    #[test]
    fn default_rig_keeps_lights_coincident() {
        let rig = LightRig::default();
        assert!(rig.is_in_phase());

        for step in 0..100 {
            let [a, b] = rig.positions_at(step as f32 * 0.1);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn offsets_hold_a_constant_angle() {
        let rig = LightRig::with_phase_offsets([0.0, PI]);
        assert!(!rig.is_in_phase());

        for step in 0..100 {
            let [a, b] = rig.positions_at(step as f32 * 0.13);
            let angle_a = a.z.atan2(a.x);
            let angle_b = b.z.atan2(b.x);
            let delta = (angle_b - angle_a).rem_euclid(TAU);
            assert!((delta - PI).abs() < 1e-3, "delta was {delta}");
        }
    }

    #[test]
    fn unknown_slot_has_no_path() {
        assert!(LightRig::default().path(LIGHT_COUNT).is_none());
    }
}
