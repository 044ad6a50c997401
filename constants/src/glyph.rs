/// Typeface description, relative to the asset root
pub const FONT_PATH: &str = "fonts/helvetiker_regular.typeface.json";

/// Glyph height in world units
pub const GLYPH_SIZE: f32 = 6.0;

/// Extrusion depth along +Z
pub const GLYPH_DEPTH: f32 = 2.0;

/// Line segments per flattened outline curve
pub const CURVE_SEGMENTS: usize = 12;

/// The two glyphs placed in the scene: (text, lateral offset, cap colour)
pub const GLYPHS: [(&str, f32, u32); 2] = [("A", -15.0, 0xef1a2d), ("9", 15.0, 0x10e5d2)];

/// Side wall colour shared by both glyphs
pub const GLYPH_SIDE_COLOUR: u32 = 0x5c2301;
