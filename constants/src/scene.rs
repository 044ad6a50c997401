use bevy::math::Vec3;

pub const BACKGROUND_COLOUR: u32 = 0x112233;

/// Edge length of the square ground plane
pub const PLANE_SIZE: f32 = 200.0;
pub const PLANE_COLOUR: u32 = 0x0a7d15;

pub const AMBIENT_COLOUR: u32 = 0xffffff;

/// Fraction of the engine's default ambient brightness
pub const AMBIENT_STRENGTH: f32 = 0.5;

pub const CUBE_SIZE: f32 = 4.0;
pub const CUBE_POSITION: Vec3 = Vec3::new(0.0, 3.0, 0.0);
pub const CUBE_COLOUR: u32 = 0x2255ff;
pub const GLOW_COLOUR: u32 = 0x66ccff;
