use bevy::pbr::PointLightShadowMap;
use bevy::prelude::*;
use constants::light_rig::{
    LIGHT_COLOURS, LIGHT_INTENSITY, LIGHT_RANGE, LIGHT_SHADOW_MAP_SIZE, LIGHT_SHADOWS,
};
use constants::scene::{
    AMBIENT_COLOUR, AMBIENT_STRENGTH, BACKGROUND_COLOUR, CUBE_COLOUR, CUBE_POSITION, CUBE_SIZE,
    GLOW_COLOUR, PLANE_COLOUR, PLANE_SIZE,
};

use crate::engine::animation::light_rig::{LightRig, OrbitingLight};
use crate::engine::core::config::SceneConfig;
use crate::engine::render::glow_material::GlowMaterial;
use crate::engine::scene::palette::{basic_double_sided_material, hex_colour};

#[derive(Component)]
pub struct GroundPlane;

#[derive(Component)]
pub struct GlowCube;

/// Build the static part of the scene.
pub fn spawn_scene(
    mut commands: Commands,
    config: Res<SceneConfig>,
    rig: Res<LightRig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut glow_materials: ResMut<Assets<GlowMaterial>>,
) {
    info!("=== ORBIT GLYPH SCENE ({:?} revision) ===", config.revision);

    commands.insert_resource(ClearColor(hex_colour(BACKGROUND_COLOUR)));
    spawn_ambient_light(&mut commands);
    spawn_ground_plane(&mut commands, &mut meshes, &mut materials);
    spawn_point_lights(&mut commands, &rig);

    if config.revision.has_glow_cube() {
        spawn_glow_cube(&mut commands, &mut meshes, &mut glow_materials);
    }
}

fn spawn_ambient_light(commands: &mut Commands) {
    let ambient = AmbientLight::default();
    commands.insert_resource(AmbientLight {
        color: hex_colour(AMBIENT_COLOUR),
        brightness: ambient.brightness * AMBIENT_STRENGTH,
        ..ambient
    });
}

fn spawn_ground_plane(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(PLANE_SIZE, PLANE_SIZE))),
        MeshMaterial3d(materials.add(basic_double_sided_material(PLANE_COLOUR))),
        Transform::IDENTITY,
        GroundPlane,
    ));
}

fn spawn_point_lights(commands: &mut Commands, rig: &LightRig) {
    commands.insert_resource(PointLightShadowMap {
        size: LIGHT_SHADOW_MAP_SIZE,
    });
    for (slot, colour) in LIGHT_COLOURS.iter().enumerate() {
        let start = rig
            .path(slot)
            .map(|path| path.position_at(0.0))
            .unwrap_or_default();
        commands.spawn((
            PointLight {
                color: hex_colour(*colour),
                intensity: LIGHT_INTENSITY,
                range: LIGHT_RANGE,
                shadows_enabled: LIGHT_SHADOWS,
                ..default()
            },
            Transform::from_translation(start),
            OrbitingLight { slot },
        ));
    }
}

fn spawn_glow_cube(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    glow_materials: &mut Assets<GlowMaterial>,
) {
    let material = GlowMaterial::new(hex_colour(CUBE_COLOUR), hex_colour(GLOW_COLOUR));
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_length(CUBE_SIZE))),
        MeshMaterial3d(glow_materials.add(material)),
        Transform::from_translation(CUBE_POSITION),
        GlowCube,
    ));
}
