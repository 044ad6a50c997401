/// Bloom compositor parameters: (strength, radius, luminance threshold)
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_RADIUS: f32 = 0.4;
pub const BLOOM_THRESHOLD: f32 = 0.85;

/// Rim glow multiplier of the glow shader
pub const GLOW_STRENGTH: f32 = 1.2;

/// Ambient term of the glow shader
pub const GLOW_AMBIENT: f32 = 0.08;

/// Log filter handed to the engine's log plugin
pub const LOG_FILTER: &str = "wgpu=error,naga=warn,glyph_render_engine=debug";

/// Seconds between frame progress log lines
pub const FRAME_LOG_INTERVAL: f32 = 5.0;
