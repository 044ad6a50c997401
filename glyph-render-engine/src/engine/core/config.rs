use std::str::FromStr;

use bevy::prelude::*;
use constants::glyph::FONT_PATH;
use thiserror::Error;

use crate::engine::animation::clock::TimeBase;
use crate::engine::glyphs::{ExtrudeParams, GlyphPlacement};
use crate::engine::render::compositor::BloomParams;

/// The three incremental versions of the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SceneRevision {
    /// Flat-colour glyphs, direct rendering.
    Flat,
    /// Glow-shaded cube and glyphs, direct rendering.
    Glow,
    /// Glow shading composited through a bloom pass.
    #[default]
    Bloom,
}

impl SceneRevision {
    pub fn uses_glow_material(self) -> bool {
        !matches!(self, Self::Flat)
    }

    pub fn has_glow_cube(self) -> bool {
        self.uses_glow_material()
    }

    pub fn uses_bloom(self) -> bool {
        matches!(self, Self::Bloom)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown scene revision `{0}`, expected one of flat, glow, bloom")]
pub struct UnknownRevision(pub String);

impl FromStr for SceneRevision {
    type Err = UnknownRevision;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "flat" | "1" => Ok(Self::Flat),
            "glow" | "2" => Ok(Self::Glow),
            "bloom" | "3" => Ok(Self::Bloom),
            _ => Err(UnknownRevision(value.to_string())),
        }
    }
}

/// Startup configuration of the scene.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub revision: SceneRevision,
    pub time_base: TimeBase,
    /// Typeface path relative to the asset root
    pub font_path: String,
    pub glyphs: Vec<GlyphPlacement>,
    pub extrude: ExtrudeParams,
    pub bloom: BloomParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            revision: SceneRevision::default(),
            time_base: TimeBase::default(),
            font_path: FONT_PATH.to_string(),
            glyphs: GlyphPlacement::scene_defaults(),
            extrude: ExtrudeParams::default(),
            bloom: BloomParams::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_revision(mut self, revision: SceneRevision) -> Self {
        self.revision = revision;
        self
    }

    /// Apply overrides supplied by the host page. Native builds have none.
    pub fn with_host_overrides(self) -> Self {
        match host_revision() {
            Some(Ok(revision)) => self.with_revision(revision),
            Some(Err(err)) => {
                warn!("Ignoring revision override: {err}");
                self
            }
            None => self,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn host_revision() -> Option<Result<SceneRevision, UnknownRevision>> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("revision").map(|value| value.parse())
}

#[cfg(not(target_arch = "wasm32"))]
fn host_revision() -> Option<Result<SceneRevision, UnknownRevision>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_revision_names_and_numbers() {
        assert_eq!("flat".parse(), Ok(SceneRevision::Flat));
        assert_eq!(" Glow ".parse(), Ok(SceneRevision::Glow));
        assert_eq!("3".parse(), Ok(SceneRevision::Bloom));
        assert_eq!(
            "neon".parse::<SceneRevision>(),
            Err(UnknownRevision("neon".into()))
        );
    }

    #[test]
    fn revision_features_stack() {
        assert!(!SceneRevision::Flat.uses_glow_material());
        assert!(!SceneRevision::Flat.uses_bloom());
        assert!(SceneRevision::Glow.has_glow_cube());
        assert!(!SceneRevision::Glow.uses_bloom());
        assert!(SceneRevision::Bloom.has_glow_cube());
        assert!(SceneRevision::Bloom.uses_bloom());
    }

    #[test]
    fn defaults_match_the_latest_scene() {
        let config = SceneConfig::default();
        assert_eq!(config.revision, SceneRevision::Bloom);
        assert_eq!(config.time_base, TimeBase::ProcessRelative);
        assert_eq!(config.font_path, "fonts/helvetiker_regular.typeface.json");
        assert_eq!(config.glyphs.len(), 2);
        assert_eq!(config.extrude.size, 6.0);
        assert_eq!(config.extrude.depth, 2.0);
    }

    #[test]
    fn native_build_has_no_host_overrides() {
        let config = SceneConfig::default().with_revision(SceneRevision::Flat);
        assert_eq!(config.clone().with_host_overrides(), config);
    }
}
