pub mod animation;
pub mod camera;
pub mod core;
pub mod glyphs;
pub mod render;
pub mod scene;
pub mod systems;
