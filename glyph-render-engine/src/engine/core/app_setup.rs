use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::LOG_FILTER;

// Crate engine modules
use crate::engine::animation::clock::SceneClock;
use crate::engine::animation::driver::{AnimationFrame, animate_light_rig};
use crate::engine::animation::light_rig::LightRig;
use crate::engine::camera::orbit_camera::{orbit_camera_controller, spawn_camera};
use crate::engine::core::app_state::SceneSet;
use crate::engine::core::config::SceneConfig;
use crate::engine::core::window_config::create_window_config;
use crate::engine::glyphs::loader::{
    GlyphLoader, spawn_glyphs_when_ready, start_glyph_loading, watch_glyph_load_failure,
};
use crate::engine::glyphs::typeface::Typeface;
use crate::engine::render::glow_material::{GlowMaterial, sync_glow_lights};
use crate::engine::scene::bootstrap::spawn_scene;
use crate::engine::systems::fps_tracking::log_frame_progress;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::{core::app_state::FpsText, systems::fps_tracking::fps_text_update_system};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<GlowMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers Typeface as a loadable asset type from typeface JSON files.
        .add_plugins(JsonAssetPlugin::<Typeface>::new(&["typeface.json"]));

    // The host page may pick the revision, so resolve it after logging is up
    let config = SceneConfig::default().with_host_overrides();
    info!("Scene revision: {:?}", config.revision);

    app.insert_resource(SceneClock::new(config.time_base))
        .insert_resource(config)
        .init_resource::<LightRig>()
        .init_resource::<AnimationFrame>()
        .init_resource::<GlyphLoader>();

    app.configure_sets(
        Update,
        (SceneSet::Load, SceneSet::Animate, SceneSet::SyncMaterials).chain(),
    );

    app.add_systems(
        Startup,
        (spawn_scene, spawn_camera, start_glyph_loading).chain(),
    )
    .add_systems(
        Update,
        (watch_glyph_load_failure, spawn_glyphs_when_ready)
            .chain()
            .in_set(SceneSet::Load),
    )
    .add_systems(Update, animate_light_rig.in_set(SceneSet::Animate))
    .add_systems(Update, sync_glow_lights.in_set(SceneSet::SyncMaterials))
    .add_systems(Update, (orbit_camera_controller, log_frame_progress));

    // The FPS overlay only exists in native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, create_native_overlays)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
