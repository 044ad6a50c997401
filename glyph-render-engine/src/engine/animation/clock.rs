use std::f64::consts::TAU;

use bevy::prelude::*;

/// Where the animation parameter `t` is measured from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeBase {
    /// Seconds since the app started.
    #[default]
    ProcessRelative,
    /// Seconds since 1970-01-01, as the first scene revision did.
    UnixEpoch,
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SceneClock {
    pub time_base: TimeBase,
}

impl SceneClock {
    pub fn new(time_base: TimeBase) -> Self {
        Self { time_base }
    }

    /// Take this frame's clock sample in seconds.
    pub fn sample(&self, time: &Time) -> f64 {
        match self.time_base {
            TimeBase::ProcessRelative => time.elapsed_secs_f64(),
            TimeBase::UnixEpoch => unix_seconds(),
        }
    }
}

/// Reduce a clock sample to an orbit angle in `[0, 2π)`.
///
/// The reduction happens in f64 so epoch-sized samples keep their
/// sub-second precision before the cast to f32.
pub fn orbit_phase(seconds: f64) -> f32 {
    let phase = seconds.rem_euclid(TAU) as f32;
    // rem_euclid can round up to exactly TAU after the cast
    if phase >= std::f32::consts::TAU {
        0.0
    } else {
        phase
    }
}

#[cfg(target_arch = "wasm32")]
fn unix_seconds() -> f64 {
    js_sys::Date::now() / 1000.0
}

#[cfg(not(target_arch = "wasm32"))]
fn unix_seconds() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn process_relative_follows_engine_time() {
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(2500));

        let clock = SceneClock::new(TimeBase::ProcessRelative);
        assert!((clock.sample(&time) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn unix_epoch_ignores_engine_time() {
        let time = Time::<()>::default();
        let clock = SceneClock::new(TimeBase::UnixEpoch);

        // Well past 2020-01-01 on any machine running these tests
        assert!(clock.sample(&time) > 1_577_836_800.0);
    }

    #[test]
    fn phase_wraps_epoch_sized_samples() {
        let seconds = 1_760_000_000.123_f64;
        let phase = orbit_phase(seconds);

        assert!((0.0..std::f32::consts::TAU).contains(&phase));
        assert!((phase.cos() as f64 - seconds.cos()).abs() < 1e-3);
        assert!((phase.sin() as f64 - seconds.sin()).abs() < 1e-3);
    }

    #[test]
    fn phase_is_identity_inside_first_turn() {
        assert_eq!(orbit_phase(0.0), 0.0);
        assert!((orbit_phase(std::f64::consts::PI) - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn phase_handles_negative_samples() {
        let phase = orbit_phase(-1.0);
        assert!((phase - (std::f32::consts::TAU - 1.0)).abs() < 1e-5);
    }
}
