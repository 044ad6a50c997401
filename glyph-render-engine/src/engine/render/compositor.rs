use bevy::core_pipeline::bloom::{Bloom, BloomCompositeMode, BloomPrefilter};
use constants::render_settings::{BLOOM_RADIUS, BLOOM_STRENGTH, BLOOM_THRESHOLD};

use crate::engine::core::config::SceneRevision;

/// Softness of the luminance threshold knee
const THRESHOLD_SOFTNESS: f32 = 0.1;

/// Bloom pass parameters in the scene's own terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomParams {
    /// Overall glow added back onto the image
    pub strength: f32,
    /// 0 keeps the glow tight, 1 spreads it widely
    pub radius: f32,
    /// Luminance a pixel needs before it blooms
    pub threshold: f32,
}

impl Default for BloomParams {
    fn default() -> Self {
        Self {
            strength: BLOOM_STRENGTH,
            radius: BLOOM_RADIUS,
            threshold: BLOOM_THRESHOLD,
        }
    }
}

impl BloomParams {
    /// Map onto the engine's bloom settings.
    ///
    /// Strength scales the additive intensity, radius trades high-frequency
    /// detail for a wider low-frequency halo, and the threshold feeds the
    /// prefilter, which only applies in additive mode.
    pub fn to_bloom(&self) -> Bloom {
        let radius = self.radius.clamp(0.0, 1.0);
        Bloom {
            intensity: (self.strength * 0.2).clamp(0.0, 1.0),
            low_frequency_boost: radius,
            high_pass_frequency: 1.0 - radius * 0.5,
            prefilter: BloomPrefilter {
                threshold: self.threshold.max(0.0),
                threshold_softness: THRESHOLD_SOFTNESS,
            },
            composite_mode: BloomCompositeMode::Additive,
            ..Bloom::NATURAL
        }
    }
}

/// How a frame reaches the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderPath {
    /// Single render of scene and camera.
    Direct,
    /// Base pass followed by a bloom pass.
    Bloom(BloomParams),
}

impl RenderPath {
    pub fn for_revision(revision: SceneRevision, params: BloomParams) -> Self {
        if revision.uses_bloom() {
            Self::Bloom(params)
        } else {
            Self::Direct
        }
    }

    /// Bloom needs the HDR target to find pixels above the threshold.
    pub fn is_hdr(&self) -> bool {
        matches!(self, Self::Bloom(_))
    }
}
