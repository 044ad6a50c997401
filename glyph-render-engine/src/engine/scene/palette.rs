use bevy::prelude::*;

/// Convert `0xRRGGBB` to an sRGB colour.
pub fn hex_colour(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Lit, slightly glossy, non-metallic surface in a single colour.
pub fn phong_material(hex: u32) -> StandardMaterial {
    StandardMaterial {
        base_color: hex_colour(hex),
        perceptual_roughness: 0.45,
        metallic: 0.0,
        reflectance: 0.5,
        ..default()
    }
}

/// Unlit and visible from both sides.
pub fn basic_double_sided_material(hex: u32) -> StandardMaterial {
    StandardMaterial {
        base_color: hex_colour(hex),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}
