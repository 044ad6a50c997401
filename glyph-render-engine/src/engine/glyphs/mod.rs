//! Extruded 3D text built from a typeface description.
//!
//! The typeface is a JSON asset; outlines are parsed into contours, grouped
//! into solids with holes, and extruded into cap and side-wall meshes.

/// Closed 2D contours and their grouping into solids with holes.
pub mod contour;

/// Error type for outline parsing and mesh construction.
pub mod error;

/// Cap tessellation and side-wall extrusion into mesh buffers.
pub mod extrude;

/// One-shot typeface load and glyph entity spawning.
pub mod loader;

/// Typeface outline command parsing and curve flattening.
pub mod outline;

/// Typeface JSON asset and text layout.
pub mod typeface;

use bevy::prelude::*;
use constants::glyph::{CURVE_SEGMENTS, GLYPH_DEPTH, GLYPH_SIDE_COLOUR, GLYPH_SIZE, GLYPHS};

use crate::engine::glyphs::contour::build_shapes;
use crate::engine::glyphs::error::GlyphError;
use crate::engine::glyphs::extrude::{GlyphGeometry, extrude_shapes};
use crate::engine::glyphs::typeface::Typeface;

/// Text geometry parameters shared by every glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeParams {
    pub size: f32,
    pub depth: f32,
    pub curve_segments: usize,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            size: GLYPH_SIZE,
            depth: GLYPH_DEPTH,
            curve_segments: CURVE_SEGMENTS,
        }
    }
}

/// One piece of text to place in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPlacement {
    pub text: String,
    pub offset: Vec3,
    pub cap_colour: u32,
    pub side_colour: u32,
}

impl GlyphPlacement {
    /// The glyph pair of the original scene: "A" on the left, "9" on the right.
    pub fn scene_defaults() -> Vec<Self> {
        GLYPHS
            .iter()
            .map(|(text, x, cap_colour)| Self {
                text: (*text).to_string(),
                offset: Vec3::new(*x, 0.0, 0.0),
                cap_colour: *cap_colour,
                side_colour: GLYPH_SIDE_COLOUR,
            })
            .collect()
    }
}

/// Lay out, tessellate and extrude `text` into cap and side-wall buffers.
pub fn build_glyph_geometry(
    typeface: &Typeface,
    text: &str,
    params: &ExtrudeParams,
) -> Result<GlyphGeometry, GlyphError> {
    let contours = typeface.text_contours(text, params.size, params.curve_segments)?;
    let shapes = build_shapes(contours);
    extrude_shapes(&shapes, params.depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_defaults_place_a_and_nine() {
        let placements = GlyphPlacement::scene_defaults();
        let placed: Vec<_> = placements.iter().map(|s| (s.text.as_str(), s.offset.x)).collect();
        assert_eq!(placed, vec![("A", -15.0), ("9", 15.0)]);
        assert!(placements.iter().all(|s| s.side_colour == 0x5c2301));
    }

    #[test]
    fn builds_both_scene_glyphs_from_sample_font() {
        let typeface = typeface::tests::sample_typeface();
        for placement in GlyphPlacement::scene_defaults() {
            let geometry = build_glyph_geometry(&typeface, &placement.text, &ExtrudeParams::default())
                .expect("sample glyph builds");
            assert!(geometry.caps.triangle_count() > 0);
            assert!(geometry.sides.triangle_count() > 0);
        }
    }
}
