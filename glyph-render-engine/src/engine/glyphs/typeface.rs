use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

use crate::engine::glyphs::contour::Contour;
use crate::engine::glyphs::error::GlyphError;
use crate::engine::glyphs::outline::parse_outline;

/// Typeface description as a Bevy asset. Mirrors the typeface JSON layout.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typeface {
    pub glyphs: HashMap<String, TypefaceGlyph>,
    #[serde(default)]
    pub family_name: String,
    /// Font units per em.
    pub resolution: f32,
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub underline_thickness: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypefaceGlyph {
    /// Horizontal advance in font units.
    pub ha: f32,
    /// Outline commands; absent for blank glyphs such as space.
    #[serde(default)]
    pub o: Option<String>,
}

impl Typeface {
    /// World units per font unit at `size`.
    pub fn scale(&self, size: f32) -> f32 {
        size / self.resolution
    }

    pub fn line_height(&self, size: f32) -> f32 {
        (self.bounding_box.y_max - self.bounding_box.y_min + self.underline_thickness)
            * self.scale(size)
    }

    pub fn glyph(&self, character: char) -> Option<&TypefaceGlyph> {
        let mut key = [0u8; 4];
        self.glyphs.get(character.encode_utf8(&mut key) as &str)
    }

    /// Lay out `text` from the origin and return every glyph contour.
    ///
    /// The pen advances by each glyph's `ha`; a newline returns it to `x = 0`
    /// one line lower.
    pub fn text_contours(
        &self,
        text: &str,
        size: f32,
        curve_segments: usize,
    ) -> Result<Vec<Contour>, GlyphError> {
        let scale = self.scale(size);
        let line_height = self.line_height(size);
        let mut pen = Vec2::ZERO;
        let mut contours = Vec::new();

        for character in text.chars() {
            if character == '\n' {
                pen = Vec2::new(0.0, pen.y - line_height);
                continue;
            }
            let glyph = self
                .glyph(character)
                .ok_or(GlyphError::MissingGlyph(character))?;
            if let Some(outline) = glyph.o.as_deref() {
                contours.extend(parse_outline(outline, scale, pen, curve_segments)?);
            }
            pen.x += glyph.ha * scale;
        }
        Ok(contours)
    }
}
