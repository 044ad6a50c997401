use std::str::SplitWhitespace;

use bevy::prelude::*;

use crate::engine::glyphs::contour::Contour;
use crate::engine::glyphs::error::GlyphError;

/// Parse a typeface outline string into closed contours.
///
/// Commands are `m x y`, `l x y`, `q x y cx cy` and `b x y c1x c1y c2x c2y`,
/// with the end point written before the control points. Coordinates are
/// scaled by `scale` then shifted by `offset`. Curves are flattened into
/// `curve_segments` line segments.
pub fn parse_outline(
    outline: &str,
    scale: f32,
    offset: Vec2,
    curve_segments: usize,
) -> Result<Vec<Contour>, GlyphError> {
    let segments = curve_segments.max(1);
    let mut tokens = OutlineTokens {
        tokens: outline.split_whitespace(),
        scale,
        offset,
    };
    let mut contours = Vec::new();
    let mut current: Option<Vec<Vec2>> = None;

    while let Some(command) = tokens.tokens.next() {
        match command {
            "m" => {
                let start = tokens.point('m')?;
                if let Some(points) = current.replace(vec![start]) {
                    contours.extend(Contour::closed(points));
                }
            }
            "l" => {
                let to = tokens.point('l')?;
                let points = current.as_mut().ok_or(GlyphError::MissingMoveTo('l'))?;
                points.push(to);
            }
            "q" => {
                let to = tokens.point('q')?;
                let control = tokens.point('q')?;
                let points = current.as_mut().ok_or(GlyphError::MissingMoveTo('q'))?;
                let from = last_point(points);
                points.extend(flatten_quadratic(from, control, to, segments));
            }
            "b" => {
                let to = tokens.point('b')?;
                let control_a = tokens.point('b')?;
                let control_b = tokens.point('b')?;
                let points = current.as_mut().ok_or(GlyphError::MissingMoveTo('b'))?;
                let from = last_point(points);
                points.extend(flatten_cubic(from, control_a, control_b, to, segments));
            }
            "z" => {}
            other => return Err(GlyphError::UnknownCommand(other.to_string())),
        }
    }

    if let Some(points) = current {
        contours.extend(Contour::closed(points));
    }
    Ok(contours)
}

struct OutlineTokens<'a> {
    tokens: SplitWhitespace<'a>,
    scale: f32,
    offset: Vec2,
}

impl OutlineTokens<'_> {
    fn number(&mut self, command: char) -> Result<f32, GlyphError> {
        let token = self
            .tokens
            .next()
            .ok_or(GlyphError::MissingCoordinate { command })?;
        token
            .parse::<f32>()
            .map_err(|_| GlyphError::InvalidNumber(token.to_string()))
    }

    fn point(&mut self, command: char) -> Result<Vec2, GlyphError> {
        let x = self.number(command)?;
        let y = self.number(command)?;
        Ok(Vec2::new(x, y) * self.scale + self.offset)
    }
}

fn last_point(points: &[Vec2]) -> Vec2 {
    points.last().copied().unwrap_or_default()
}

/// Sample a quadratic Bézier, excluding the start point.
fn flatten_quadratic(from: Vec2, control: Vec2, to: Vec2, segments: usize) -> Vec<Vec2> {
    (1..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let u = 1.0 - t;
            from * (u * u) + control * (2.0 * u * t) + to * (t * t)
        })
        .collect()
}

/// Sample a cubic Bézier, excluding the start point.
fn flatten_cubic(
    from: Vec2,
    control_a: Vec2,
    control_b: Vec2,
    to: Vec2,
    segments: usize,
) -> Vec<Vec2> {
    (1..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let u = 1.0 - t;
            from * (u * u * u)
                + control_a * (3.0 * u * u * t)
                + control_b * (3.0 * u * t * t)
                + to * (t * t * t)
        })
        .collect()
}
