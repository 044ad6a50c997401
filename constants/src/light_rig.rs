/// Radius of the horizontal circle both point lights travel on
pub const ORBIT_RADIUS: f32 = 20.0;

/// Height of the orbit plane above the ground
pub const ORBIT_HEIGHT: f32 = 15.0;

/// Phase offset (radians) of each light along the orbit.
/// Both zero: the two lights share one position.
pub const PHASE_OFFSETS: [f32; 2] = [0.0, 0.0];

/// Light colours as sRGB hex
pub const LIGHT_COLOURS: [u32; 2] = [0xff6666, 0x33ff33];

/// Luminous power in lumens
pub const LIGHT_INTENSITY: f32 = 2_000_000.0;

/// Distance beyond which a light contributes nothing
pub const LIGHT_RANGE: f32 = 100.0;

pub const LIGHT_SHADOWS: bool = true;

/// Edge length in texels of each point light's shadow cube face
pub const LIGHT_SHADOW_MAP_SIZE: usize = 4096;
