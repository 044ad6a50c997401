use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::scene::GLOW_COLOUR;

use crate::engine::core::config::SceneConfig;
use crate::engine::glyphs::build_glyph_geometry;
use crate::engine::glyphs::extrude::GlyphGeometry;
use crate::engine::glyphs::typeface::Typeface;
use crate::engine::render::glow_material::GlowMaterial;
use crate::engine::scene::palette::{hex_colour, phong_material};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlyphLoadStatus {
    #[default]
    Idle,
    Pending,
    Spawned,
    Failed,
}

/// Tracks the single typeface load. Glyphs are inserted at most once.
#[derive(Resource, Default)]
pub struct GlyphLoader {
    handle: Option<Handle<Typeface>>,
    status: GlyphLoadStatus,
}

impl GlyphLoader {
    pub fn watch(&mut self, handle: Handle<Typeface>) {
        if self.status != GlyphLoadStatus::Idle {
            return;
        }
        self.handle = Some(handle);
        self.status = GlyphLoadStatus::Pending;
    }

    pub fn status(&self) -> GlyphLoadStatus {
        self.status
    }

    /// The loaded typeface, if the load is still pending and has resolved.
    pub fn ready<'a>(&self, typefaces: &'a Assets<Typeface>) -> Option<&'a Typeface> {
        if self.status != GlyphLoadStatus::Pending {
            return None;
        }
        self.handle.as_ref().and_then(|handle| typefaces.get(handle))
    }

    fn finish(&mut self, status: GlyphLoadStatus) {
        self.status = status;
        self.handle = None;
    }
}

/// Root entity of one extruded text, carrying its lateral offset.
#[derive(Component, Debug)]
pub struct GlyphMesh {
    pub text: String,
}

#[derive(Component)]
pub struct GlyphCaps;

#[derive(Component)]
pub struct GlyphSides;

pub fn start_glyph_loading(
    mut loader: ResMut<GlyphLoader>,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    info!("Loading typeface from: {}", config.font_path);
    loader.watch(asset_server.load(config.font_path.clone()));
}

pub fn watch_glyph_load_failure(mut loader: ResMut<GlyphLoader>, asset_server: Res<AssetServer>) {
    if loader.status != GlyphLoadStatus::Pending {
        return;
    }
    let Some(handle) = loader.handle.as_ref() else {
        return;
    };

    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        warn!("Typeface failed to load, glyphs will not be shown: {err}");
        loader.finish(GlyphLoadStatus::Failed);
    }
}

enum GlyphMaterials {
    Flat {
        caps: Handle<StandardMaterial>,
        sides: Handle<StandardMaterial>,
    },
    Glow {
        caps: Handle<GlowMaterial>,
        sides: Handle<GlowMaterial>,
    },
}

/// Build and insert every configured glyph once the typeface resolves.
pub fn spawn_glyphs_when_ready(
    mut commands: Commands,
    mut loader: ResMut<GlyphLoader>,
    typefaces: Res<Assets<Typeface>>,
    config: Res<SceneConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    mut glow_materials: ResMut<Assets<GlowMaterial>>,
) {
    let Some(typeface) = loader.ready(&typefaces) else {
        return;
    };
    debug!(
        "Typeface {} resolved with {} glyphs",
        typeface.family_name,
        typeface.glyphs.len()
    );

    let mut spawned = 0;
    for placement in &config.glyphs {
        let geometry = match build_glyph_geometry(typeface, &placement.text, &config.extrude) {
            Ok(geometry) => geometry,
            Err(err) => {
                warn!("Skipping glyph {:?}: {err}", placement.text);
                continue;
            }
        };

        let materials = if config.revision.uses_glow_material() {
            let glow = hex_colour(GLOW_COLOUR);
            GlyphMaterials::Glow {
                caps: glow_materials.add(GlowMaterial::new(hex_colour(placement.cap_colour), glow)),
                sides: glow_materials.add(GlowMaterial::new(hex_colour(placement.side_colour), glow)),
            }
        } else {
            GlyphMaterials::Flat {
                caps: standard_materials.add(phong_material(placement.cap_colour)),
                sides: standard_materials.add(phong_material(placement.side_colour)),
            }
        };

        spawn_glyph(
            &mut commands,
            &mut meshes,
            &placement.text,
            placement.offset,
            geometry,
            materials,
        );
        spawned += 1;
    }

    info!("✓ Spawned {spawned} of {} glyphs", config.glyphs.len());
    loader.finish(GlyphLoadStatus::Spawned);
}

fn spawn_glyph(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    text: &str,
    offset: Vec3,
    geometry: GlyphGeometry,
    materials: GlyphMaterials,
) {
    let caps = Mesh3d(meshes.add(geometry.caps.into_mesh()));
    let sides = Mesh3d(meshes.add(geometry.sides.into_mesh()));

    let mut root = commands.spawn((
        GlyphMesh {
            text: text.to_string(),
        },
        Transform::from_translation(offset),
        Visibility::default(),
    ));

    root.with_children(|parent| match materials {
        GlyphMaterials::Flat {
            caps: cap_material,
            sides: side_material,
        } => {
            parent.spawn((caps, MeshMaterial3d(cap_material), GlyphCaps));
            parent.spawn((sides, MeshMaterial3d(side_material), GlyphSides));
        }
        GlyphMaterials::Glow {
            caps: cap_material,
            sides: side_material,
        } => {
            parent.spawn((caps, MeshMaterial3d(cap_material), GlyphCaps));
            parent.spawn((sides, MeshMaterial3d(side_material), GlyphSides));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::animation::clock::SceneClock;
    use crate::engine::animation::driver::{AnimationFrame, animate_light_rig};
    use crate::engine::animation::light_rig::{LightRig, OrbitingLight};
    use crate::engine::core::config::SceneRevision;
    use crate::engine::glyphs::GlyphPlacement;
    use crate::engine::glyphs::typeface::tests::sample_typeface;
    use bevy::asset::AssetMetaCheck;
    use bevy_common_assets::json::JsonAssetPlugin;
    use std::time::Duration;

    fn glyph_app(revision: SceneRevision) -> App {
        let mut app = App::new();
        app.insert_resource(SceneConfig::default().with_revision(revision))
            .init_resource::<GlyphLoader>()
            .init_resource::<Assets<Typeface>>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<Assets<GlowMaterial>>()
            .add_systems(Update, spawn_glyphs_when_ready);
        app
    }

    fn resolve_typeface(app: &mut App) {
        let handle = app
            .world_mut()
            .resource_mut::<Assets<Typeface>>()
            .add(sample_typeface());
        app.world_mut().resource_mut::<GlyphLoader>().watch(handle);
    }

    fn glyph_offsets(app: &mut App) -> Vec<(String, f32)> {
        let mut query = app.world_mut().query::<(&GlyphMesh, &Transform)>();
        let mut offsets: Vec<_> = query
            .iter(app.world())
            .map(|(glyph, transform)| (glyph.text.clone(), transform.translation.x))
            .collect();
        offsets.sort_by(|a, b| a.1.total_cmp(&b.1));
        offsets
    }

    #[test]
    fn resolved_typeface_spawns_both_glyphs_once() {
        let mut app = glyph_app(SceneRevision::Flat);
        resolve_typeface(&mut app);

        app.update();
        let expected = vec![("A".to_string(), -15.0), ("9".to_string(), 15.0)];
        assert_eq!(glyph_offsets(&mut app), expected);
        assert_eq!(
            app.world().resource::<GlyphLoader>().status(),
            GlyphLoadStatus::Spawned
        );

        app.update();
        app.update();
        assert_eq!(glyph_offsets(&mut app), expected);
        assert_eq!(app.world().resource::<Assets<StandardMaterial>>().len(), 4);
    }

    #[test]
    fn each_glyph_has_separate_caps_and_sides() {
        let mut app = glyph_app(SceneRevision::Flat);
        resolve_typeface(&mut app);
        app.update();

        let mut caps = app.world_mut().query_filtered::<&ChildOf, With<GlyphCaps>>();
        assert_eq!(caps.iter(app.world()).count(), 2);
        let mut sides = app.world_mut().query_filtered::<&ChildOf, With<GlyphSides>>();
        assert_eq!(sides.iter(app.world()).count(), 2);
    }

    #[test]
    fn glow_revision_uses_the_glow_material() {
        let mut app = glyph_app(SceneRevision::Glow);
        resolve_typeface(&mut app);
        app.update();

        assert_eq!(glyph_offsets(&mut app).len(), 2);
        assert_eq!(app.world().resource::<Assets<GlowMaterial>>().len(), 4);
        assert!(app.world().resource::<Assets<StandardMaterial>>().is_empty());
    }

    #[test]
    fn unbuildable_glyph_is_skipped() {
        let mut app = glyph_app(SceneRevision::Flat);
        let mut placements = GlyphPlacement::scene_defaults();
        placements[1].text = "Q".into();
        app.world_mut().resource_mut::<SceneConfig>().glyphs = placements;
        resolve_typeface(&mut app);

        app.update();
        assert_eq!(glyph_offsets(&mut app), vec![("A".to_string(), -15.0)]);
        assert_eq!(
            app.world().resource::<GlyphLoader>().status(),
            GlyphLoadStatus::Spawned
        );
    }

    #[test]
    fn pending_load_leaves_the_scene_animating() {
        let mut app = glyph_app(SceneRevision::Flat);
        app.insert_resource(SceneClock::default())
            .init_resource::<LightRig>()
            .init_resource::<AnimationFrame>()
            .init_resource::<Time>()
            .add_systems(Update, animate_light_rig);
        app.world_mut()
            .resource_mut::<GlyphLoader>()
            .watch(Handle::default());
        let light = app
            .world_mut()
            .spawn((OrbitingLight { slot: 0 }, Transform::default()))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f64(std::f64::consts::FRAC_PI_2));
        app.update();
        app.update();

        assert!(glyph_offsets(&mut app).is_empty());
        assert_eq!(
            app.world().resource::<GlyphLoader>().status(),
            GlyphLoadStatus::Pending
        );
        assert_eq!(app.world().resource::<AnimationFrame>().index, 2);
        let position = app.world().get::<Transform>(light).map(|t| t.translation);
        assert!(position.is_some_and(|p| p.abs_diff_eq(Vec3::new(0.0, 15.0, 20.0), 1e-4)));
    }

    #[test]
    fn glyphs_spawn_once_after_a_late_resolve() {
        let mut app = glyph_app(SceneRevision::Flat);
        let handle = app
            .world_mut()
            .resource_mut::<Assets<Typeface>>()
            .reserve_handle();
        app.world_mut()
            .resource_mut::<GlyphLoader>()
            .watch(handle.clone());

        for _ in 0..5 {
            app.update();
        }
        assert!(glyph_offsets(&mut app).is_empty());

        let _ = app
            .world_mut()
            .resource_mut::<Assets<Typeface>>()
            .insert(handle.id(), sample_typeface());
        for _ in 0..5 {
            app.update();
        }

        assert_eq!(
            glyph_offsets(&mut app),
            vec![("A".to_string(), -15.0), ("9".to_string(), 15.0)]
        );
    }

    #[test]
    fn missing_typeface_fails_once_and_keeps_animating() {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin {
                meta_check: AssetMetaCheck::Never,
                ..default()
            },
            JsonAssetPlugin::<Typeface>::new(&["typeface.json"]),
        ));
        let mut config = SceneConfig::default();
        config.font_path = "fonts/not_shipped.typeface.json".into();
        app.insert_resource(config)
            .insert_resource(SceneClock::default())
            .init_resource::<LightRig>()
            .init_resource::<AnimationFrame>()
            .init_resource::<GlyphLoader>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<Assets<GlowMaterial>>()
            .add_systems(Startup, start_glyph_loading)
            .add_systems(
                Update,
                (
                    (watch_glyph_load_failure, spawn_glyphs_when_ready).chain(),
                    animate_light_rig,
                ),
            );

        let status = |app: &App| app.world().resource::<GlyphLoader>().status();
        for _ in 0..1000 {
            app.update();
            if status(&app) != GlyphLoadStatus::Pending {
                break;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        assert_eq!(status(&app), GlyphLoadStatus::Failed);

        let frames = app.world().resource::<AnimationFrame>().index;
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(status(&app), GlyphLoadStatus::Failed);
        assert_eq!(app.world().resource::<AnimationFrame>().index, frames + 3);
        assert!(glyph_offsets(&mut app).is_empty());
    }

    #[test]
    fn watch_is_one_shot() {
        let mut loader = GlyphLoader::default();
        loader.watch(Handle::default());
        loader.finish(GlyphLoadStatus::Failed);
        loader.watch(Handle::default());
        assert_eq!(loader.status(), GlyphLoadStatus::Failed);
    }
}
