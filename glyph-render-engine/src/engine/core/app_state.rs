use bevy::prelude::*;

/// Per-frame ordering: resolve the typeface, move the lights, then copy
/// light positions into the glow materials before rendering.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneSet {
    Load,
    Animate,
    SyncMaterials,
}

#[derive(Component)]
pub struct FpsText;
