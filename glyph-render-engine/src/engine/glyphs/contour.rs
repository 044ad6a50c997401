use bevy::prelude::*;

/// Points closer than this are merged when a contour is closed.
const MERGE_DISTANCE: f32 = 1e-6;

/// A closed polygon; the edge from the last point back to the first is implied.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Vec2>,
}

impl Contour {
    /// Close a point run, dropping repeated points and a duplicated end point.
    /// Returns `None` when fewer than three distinct points remain.
    pub fn closed(mut points: Vec<Vec2>) -> Option<Self> {
        points.dedup_by(|b, a| a.distance_squared(*b) <= MERGE_DISTANCE * MERGE_DISTANCE);
        while points.len() > 1
            && points[points.len() - 1].distance_squared(points[0])
                <= MERGE_DISTANCE * MERGE_DISTANCE
        {
            points.pop();
        }
        (points.len() >= 3).then_some(Self { points })
    }

    /// Shoelace area, positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        let twice: f32 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice * 0.5
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Even-odd point-in-polygon test.
    pub fn contains(&self, point: Vec2) -> bool {
        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if point.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    fn oriented(mut self, counter_clockwise: bool) -> Self {
        if self.is_counter_clockwise() != counter_clockwise {
            self.points.reverse();
        }
        self
    }

    fn probe(&self) -> Vec2 {
        self.points[0]
    }
}

/// A filled region: counter-clockwise outer contour, clockwise holes.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphShape {
    pub outer: Contour,
    pub holes: Vec<Contour>,
}

impl GlyphShape {
    /// Filled area, outer minus holes.
    pub fn area(&self) -> f32 {
        self.outer.signed_area().abs()
            - self
                .holes
                .iter()
                .map(|hole| hole.signed_area().abs())
                .sum::<f32>()
    }

    /// Outer contour followed by every hole.
    pub fn contours(&self) -> impl Iterator<Item = &Contour> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }
}

/// Group contours into shapes by nesting depth.
///
/// A contour enclosed by an even number of others is a solid; an odd count
/// makes it a hole of the smallest solid one level up that encloses it.
/// Fonts disagree on winding direction, so only nesting decides.
pub fn build_shapes(contours: Vec<Contour>) -> Vec<GlyphShape> {
    let depths: Vec<usize> = contours
        .iter()
        .enumerate()
        .map(|(i, contour)| {
            contours
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && other.contains(contour.probe()))
                .count()
        })
        .collect();

    let mut solids: Vec<(usize, GlyphShape)> = Vec::new();
    let mut holes: Vec<(usize, Contour)> = Vec::new();
    for (contour, depth) in contours.into_iter().zip(depths) {
        if depth % 2 == 0 {
            solids.push((
                depth,
                GlyphShape {
                    outer: contour.oriented(true),
                    holes: Vec::new(),
                },
            ));
        } else {
            holes.push((depth, contour.oriented(false)));
        }
    }

    for (depth, hole) in holes {
        let parent = solids
            .iter_mut()
            .filter(|(solid_depth, shape)| {
                *solid_depth + 1 == depth && shape.outer.contains(hole.probe())
            })
            .min_by(|(_, a), (_, b)| {
                a.outer
                    .signed_area()
                    .abs()
                    .total_cmp(&b.outer.signed_area().abs())
            });
        match parent {
            Some((_, shape)) => shape.holes.push(hole),
            None => debug!("Dropping glyph hole with no enclosing outline"),
        }
    }

    solids.into_iter().map(|(_, shape)| shape).collect()
}
