use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use lyon_tessellation::math::point;
use lyon_tessellation::path::Path;
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};

use crate::engine::glyphs::contour::GlyphShape;
use crate::engine::glyphs::error::GlyphError;

/// CPU-side triangle list, converted to a [`Mesh`] once complete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [tri[0], tri[1], tri[2]].map(|index| Vec3::from_array(self.positions[index as usize]))
        })
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        index
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals)
            .with_inserted_indices(Indices::U32(self.indices))
    }
}

/// Extruded text split by face group: caps take the front material, side
/// walls the second.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphGeometry {
    pub caps: MeshBuffers,
    pub sides: MeshBuffers,
}

/// Extrude shapes from `z = 0` to `z = depth`.
pub fn extrude_shapes(shapes: &[GlyphShape], depth: f32) -> Result<GlyphGeometry, GlyphError> {
    let mut geometry = GlyphGeometry::default();
    for shape in shapes {
        let (vertices, triangles) = tessellate_cap(shape)?;
        push_caps(&mut geometry.caps, &vertices, &triangles, depth);
        push_side_walls(&mut geometry.sides, shape, depth);
    }
    Ok(geometry)
}

/// Triangulate a shape's face. Triangles come back counter-clockwise.
fn tessellate_cap(shape: &GlyphShape) -> Result<(Vec<Vec2>, Vec<[u32; 3]>), GlyphError> {
    let mut builder = Path::builder();
    for contour in shape.contours() {
        let mut points = contour.points.iter();
        let Some(first) = points.next() else {
            continue;
        };
        builder.begin(point(first.x, first.y));
        for p in points {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(true);
    }
    let path = builder.build();

    let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();
    FillTessellator::new()
        .tessellate_path(
            &path,
            &FillOptions::default().with_fill_rule(FillRule::EvenOdd),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                let position = vertex.position();
                Vec2::new(position.x, position.y)
            }),
        )
        .map_err(|err| GlyphError::Tessellation(format!("{err:?}")))?;

    let triangles = buffers
        .indices
        .chunks_exact(3)
        .map(|tri| {
            let [a, b, c] = [tri[0], tri[1], tri[2]];
            let pa = buffers.vertices[a as usize];
            let pb = buffers.vertices[b as usize];
            let pc = buffers.vertices[c as usize];
            if (pb - pa).perp_dot(pc - pa) < 0.0 {
                [a, c, b]
            } else {
                [a, b, c]
            }
        })
        .collect();
    Ok((buffers.vertices, triangles))
}

fn push_caps(caps: &mut MeshBuffers, vertices: &[Vec2], triangles: &[[u32; 3]], depth: f32) {
    let front_base = caps.positions.len() as u32;
    for v in vertices {
        caps.push_vertex(v.extend(depth), Vec3::Z);
    }
    for [a, b, c] in triangles {
        caps.indices
            .extend_from_slice(&[front_base + a, front_base + b, front_base + c]);
    }

    let back_base = caps.positions.len() as u32;
    for v in vertices {
        caps.push_vertex(v.extend(0.0), Vec3::NEG_Z);
    }
    for [a, b, c] in triangles {
        caps.indices
            .extend_from_slice(&[back_base + a, back_base + c, back_base + b]);
    }
}

/// One flat quad per contour edge. Outer contours run counter-clockwise and
/// holes clockwise, so the right-hand normal of every edge faces out of the
/// solid.
fn push_side_walls(sides: &mut MeshBuffers, shape: &GlyphShape, depth: f32) {
    for contour in shape.contours() {
        let n = contour.points.len();
        for i in 0..n {
            let from = contour.points[i];
            let to = contour.points[(i + 1) % n];
            let edge = to - from;
            let Some(normal) = Vec2::new(edge.y, -edge.x).try_normalize() else {
                continue;
            };
            let normal = normal.extend(0.0);

            let a = sides.push_vertex(from.extend(0.0), normal);
            let b = sides.push_vertex(to.extend(0.0), normal);
            let c = sides.push_vertex(to.extend(depth), normal);
            let d = sides.push_vertex(from.extend(depth), normal);
            sides.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::glyphs::contour::{Contour, build_shapes};
    use crate::engine::glyphs::typeface::tests::sample_typeface;

    const DEPTH: f32 = 2.0;

    fn triangle_area(tri: &[Vec3; 3]) -> f32 {
        (tri[1] - tri[0]).cross(tri[2] - tri[0]).length() * 0.5
    }

    fn glyph_shapes(text: &str) -> Vec<GlyphShape> {
        let contours = sample_typeface()
            .text_contours(text, 6.0, 12)
            .expect("sample glyph lays out");
        build_shapes(contours)
    }

    #[test]
    fn counters_of_a_and_nine_are_holes() {
        for text in ["A", "9"] {
            let shapes = glyph_shapes(text);
            assert_eq!(shapes.len(), 1, "{text} is one solid");
            assert_eq!(shapes[0].holes.len(), 1, "{text} has one counter");
        }
    }

    #[test]
    fn caps_sit_on_both_faces() {
        let geometry = extrude_shapes(&glyph_shapes("A"), DEPTH).expect("A extrudes");
        let caps = &geometry.caps;

        for (position, normal) in caps.positions.iter().zip(&caps.normals) {
            let normal = Vec3::from_array(*normal);
            if normal == Vec3::Z {
                assert_eq!(position[2], DEPTH);
            } else if normal == Vec3::NEG_Z {
                assert_eq!(position[2], 0.0);
            } else {
                panic!("unexpected cap normal {normal}");
            }
        }
    }

    #[test]
    fn cap_triangles_face_their_normals() {
        let geometry = extrude_shapes(&glyph_shapes("9"), DEPTH).expect("9 extrudes");
        let caps = &geometry.caps;

        for tri in caps.indices.chunks_exact(3) {
            let [a, b, c] =
                [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(caps.positions[i as usize]));
            let winding = (b - a).cross(c - a);
            let normal = Vec3::from_array(caps.normals[tri[0] as usize]);
            assert!(winding.dot(normal) >= 0.0);
        }
    }

    #[test]
    fn both_caps_cover_the_shape_area() {
        for text in ["A", "9"] {
            let shapes = glyph_shapes(text);
            let expected: f32 = shapes.iter().map(GlyphShape::area).sum();
            assert!(expected > 0.0, "{text} encloses area");
            let geometry = extrude_shapes(&shapes, DEPTH).expect("glyph extrudes");

            for z in [0.0, DEPTH] {
                let covered: f32 = geometry
                    .caps
                    .triangles()
                    .filter(|tri| tri.iter().all(|p| p.z == z))
                    .map(|tri| triangle_area(&tri))
                    .sum();
                let tolerance = expected * 1e-4;
                assert!(
                    (covered - expected).abs() < tolerance,
                    "{text} at z={z}: covered {covered}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn side_walls_have_one_quad_per_edge() {
        for text in ["A", "9"] {
            let shapes = glyph_shapes(text);
            let edges: usize = shapes
                .iter()
                .flat_map(|shape| shape.contours())
                .map(|contour| contour.points.len())
                .sum();

            let geometry = extrude_shapes(&shapes, DEPTH).expect("glyph extrudes");
            assert_eq!(geometry.sides.positions.len(), edges * 4, "{text}");
            assert_eq!(geometry.sides.triangle_count(), edges * 2, "{text}");

            for normal in &geometry.sides.normals {
                let normal = Vec3::from_array(*normal);
                assert!((normal.length() - 1.0).abs() < 1e-5);
                assert_eq!(normal.z, 0.0);
            }
        }
    }

    #[test]
    fn side_normals_point_out_of_a_square() {
        let square = Contour::closed(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 0.0),
        ])
        .expect("valid square");
        let geometry = extrude_shapes(&build_shapes(vec![square]), 1.0).expect("square extrudes");

        let centre = Vec3::new(1.0, 1.0, 0.5);
        for (position, normal) in geometry.sides.positions.iter().zip(&geometry.sides.normals) {
            let outward = Vec3::from_array(*position) - centre;
            assert!(outward.dot(Vec3::from_array(*normal)) > 0.0);
        }
        assert_eq!(geometry.caps.triangle_count(), 4);
    }

    #[test]
    fn builds_a_renderable_mesh() {
        let geometry = extrude_shapes(&glyph_shapes("9"), DEPTH).expect("9 extrudes");
        let vertex_count = geometry.sides.positions.len();
        let mesh = geometry.sides.into_mesh();

        assert_eq!(mesh.count_vertices(), vertex_count);
        assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());
        assert!(mesh.indices().is_some());
    }
}
