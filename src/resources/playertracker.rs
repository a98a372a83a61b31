use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Read-only view of the player's hitbox center, refreshed by the host once
/// per frame. Turrets aim with this; nothing in the behavior layer writes it.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerTracker {
    pub center: Vec2,
}

impl PlayerTracker {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
        }
    }
}
