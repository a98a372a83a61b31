//! Finite-lifetime projectile component.
//!
//! Projectiles fly in a straight line until their lifetime lapses, at which
//! point [`crate::systems::projectile`] removes them from the world. They do
//! no wall detection themselves; an external collision collaborator calls
//! [`Projectile::deflect`] (debounced) or despawns them.

use bevy_ecs::prelude::Component;

use crate::components::cooldown::Cooldown;

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    /// Travel direction sign, +1 or -1.
    pub direction: f32,
    /// Travel speed in world units per second.
    pub speed: f32,
    /// Armed at creation; the projectile despawns the frame this lapses.
    pub lifetime: Cooldown,
    /// Debounce window for externally triggered deflections.
    pub deflect_debounce: Cooldown,
}

impl Projectile {
    /// Create a projectile at simulation time `now`. The lifetime starts
    /// counting immediately.
    pub fn new(direction: f32, speed: f32, lifetime: f32, debounce: f32, now: f32) -> Self {
        Self {
            direction,
            speed,
            lifetime: Cooldown::armed(lifetime, now),
            deflect_debounce: Cooldown::new(debounce),
        }
    }

    /// Externally triggered direction flip, same debounce contract as
    /// [`Patroller::reverse`](super::patrol::Patroller::reverse).
    pub fn deflect(&mut self, now: f32) {
        if self.deflect_debounce.is_active() {
            return;
        }
        self.direction = -self.direction;
        self.deflect_debounce.activate(now);
    }
}
