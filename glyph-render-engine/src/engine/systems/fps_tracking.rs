use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::FRAME_LOG_INTERVAL;

use crate::engine::animation::driver::AnimationFrame;
use crate::engine::core::app_state::FpsText;
use crate::engine::glyphs::loader::GlyphLoader;

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

pub fn log_frame_progress(
    frame: Res<AnimationFrame>,
    loader: Res<GlyphLoader>,
    diagnostics: Res<DiagnosticsStore>,
    mut last_log_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();
    if current_time - *last_log_time < FRAME_LOG_INTERVAL {
        return;
    }
    *last_log_time = current_time;

    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or_default();
    debug!(
        "frame {} at t={:.2}s, {fps:.1} fps, glyphs {:?}",
        frame.index,
        frame.clock_seconds,
        loader.status()
    );
}
