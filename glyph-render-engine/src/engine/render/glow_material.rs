/// Custom-lit glow material for the cube and shader-revision glyphs
use bevy::prelude::*;
use bevy::render::render_resource::ShaderType;
use bevy::{
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef},
};
use constants::light_rig::LIGHT_RANGE;
use constants::render_settings::{GLOW_AMBIENT, GLOW_STRENGTH};

use crate::engine::animation::light_rig::{LIGHT_COUNT, OrbitingLight};

const GLOW_SHADER_PATH: &str = "shaders/glow.wgsl";

#[derive(Debug, Clone, Copy, PartialEq, ShaderType)]
#[repr(C)]
pub struct GlowUniform {
    pub base_colour: Vec4,
    pub glow_colour: Vec4,
    /// World-space light positions, w unused
    pub light_positions: [Vec4; LIGHT_COUNT],
    pub light_colours: [Vec4; LIGHT_COUNT],
    /// [glow strength, light range, ambient, unused]
    pub params: Vec4,
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GlowMaterial {
    #[uniform(0)]
    pub uniform: GlowUniform,
}

impl GlowMaterial {
    pub fn new(base_colour: Color, glow_colour: Color) -> Self {
        Self {
            uniform: GlowUniform {
                base_colour: colour_vec4(base_colour),
                glow_colour: colour_vec4(glow_colour),
                light_positions: [Vec4::ZERO; LIGHT_COUNT],
                light_colours: [Vec4::ZERO; LIGHT_COUNT],
                params: Vec4::new(GLOW_STRENGTH, LIGHT_RANGE, GLOW_AMBIENT, 0.0),
            },
        }
    }

    /// Whether the uniform already holds this light in `slot`.
    pub fn has_light(&self, slot: usize, position: Vec3, colour: Color) -> bool {
        slot >= LIGHT_COUNT
            || (self.uniform.light_positions[slot] == position.extend(1.0)
                && self.uniform.light_colours[slot] == colour_vec4(colour))
    }

    pub fn set_light(&mut self, slot: usize, position: Vec3, colour: Color) {
        if slot >= LIGHT_COUNT {
            return;
        }
        self.uniform.light_positions[slot] = position.extend(1.0);
        self.uniform.light_colours[slot] = colour_vec4(colour);
    }
}

impl Material for GlowMaterial {
    fn fragment_shader() -> ShaderRef {
        GLOW_SHADER_PATH.into()
    }
}

fn colour_vec4(colour: Color) -> Vec4 {
    let linear = colour.to_linear();
    Vec4::new(linear.red, linear.green, linear.blue, linear.alpha)
}

/// Copy this frame's light positions into the glow materials.
///
/// Only materials whose uniform is out of date are touched, so unchanged
/// materials keep their prepared bind groups.
pub fn sync_glow_lights(
    lights: Query<(&OrbitingLight, &Transform, &PointLight)>,
    mut materials: ResMut<Assets<GlowMaterial>>,
) {
    if materials.is_empty() {
        return;
    }
    let lights: Vec<(usize, Vec3, Color)> = lights
        .iter()
        .map(|(light, transform, point_light)| {
            (light.slot, transform.translation, point_light.color)
        })
        .collect();

    let stale: Vec<AssetId<GlowMaterial>> = materials
        .iter()
        .filter(|(_, material)| {
            lights
                .iter()
                .any(|(slot, position, colour)| !material.has_light(*slot, *position, *colour))
        })
        .map(|(id, _)| id)
        .collect();

    for id in stale {
        if let Some(material) = materials.get_mut(id) {
            for (slot, position, colour) in &lights {
                material.set_light(*slot, *position, *colour);
            }
        }
    }
}
