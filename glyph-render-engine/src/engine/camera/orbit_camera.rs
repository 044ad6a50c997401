use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::camera::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_POSITION, CAMERA_TARGET,
    ORBIT_MAX_DISTANCE, ORBIT_MAX_PITCH, ORBIT_MIN_DISTANCE, ORBIT_PAN_SENSITIVITY,
    ORBIT_ROTATE_SENSITIVITY, ORBIT_ZOOM_SENSITIVITY,
};

use crate::engine::core::config::SceneConfig;
use crate::engine::render::compositor::RenderPath;

/// Spherical camera placement around a target point.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Rotation about +Y, zero looking down -Z
    pub yaw: f32,
    /// Elevation above the target's horizontal plane
    pub pitch: f32,
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(ORBIT_MIN_DISTANCE);
        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ORBIT_ROTATE_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * ORBIT_ROTATE_SENSITIVITY)
            .clamp(-ORBIT_MAX_PITCH, ORBIT_MAX_PITCH);
    }

    /// Positive scroll moves towards the target.
    pub fn zoom(&mut self, scroll: f32) {
        self.distance = (self.distance * (-scroll * ORBIT_ZOOM_SENSITIVITY).exp())
            .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Slide the target in the view plane, scaled by distance.
    pub fn pan(&mut self, delta: Vec2) {
        let rotation = self.transform().rotation;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        let scale = self.distance * ORBIT_PAN_SENSITIVITY;
        self.target += (-right * delta.x + up * delta.y) * scale;
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.target, Vec3::Y)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(CAMERA_POSITION, CAMERA_TARGET)
    }
}

pub fn spawn_camera(mut commands: Commands, config: Res<SceneConfig>) {
    let orbit = OrbitCamera::default();
    let path = RenderPath::for_revision(config.revision, config.bloom);

    let mut camera = commands.spawn((
        Camera3d::default(),
        Camera {
            hdr: path.is_hdr(),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        orbit.transform(),
    ));

    if let RenderPath::Bloom(params) = path {
        debug!("Bloom pass enabled: {params:?}");
        camera.insert((params.to_bloom(), Tonemapping::TonyMcMapface));
    }

    commands.insert_resource(orbit);
}

pub fn orbit_camera_controller(
    mut orbit: ResMut<OrbitCamera>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.rotate(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            orbit.pan(mouse_delta);
        }
    }
    if scroll_accum.abs() > f32::EPSILON {
        orbit.zoom(scroll_accum);
    }

    if !orbit.is_changed() {
        return;
    }
    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = orbit.transform();
    }
}
