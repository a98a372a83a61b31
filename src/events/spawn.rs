//! Projectile spawn requests.
//!
//! A turret never constructs projectiles itself. When its firing keyframe is
//! reached it writes a [`SpawnProjectile`] message; the host (or the provided
//! [`projectile_spawner`](crate::systems::spawn::projectile_spawner) system)
//! drains the queue and registers the new entities. This keeps the turret
//! testable in isolation: assert on the messages, no world mutation needed.

use bevy_ecs::message::Message;
use glam::Vec2;

/// Request to spawn one projectile.
#[derive(Message, Debug, Clone, Copy)]
pub struct SpawnProjectile {
    /// Center of the requesting turret.
    pub origin: Vec2,
    /// Travel direction sign, +1 or -1.
    pub direction: f32,
}
