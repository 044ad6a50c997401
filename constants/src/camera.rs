use bevy::math::Vec3;

pub const CAMERA_POSITION: Vec3 = Vec3::new(3.0, 20.0, 45.0);

/// Point the orbit controls circle around
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 0.0, -40.0);

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

pub const ORBIT_ROTATE_SENSITIVITY: f32 = 0.005;
pub const ORBIT_PAN_SENSITIVITY: f32 = 0.002;
pub const ORBIT_ZOOM_SENSITIVITY: f32 = 0.1;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 400.0;

/// Pitch limit in radians, just short of the poles
pub const ORBIT_MAX_PITCH: f32 = 1.55;
