//! Stationary turret component.
//!
//! A turret cycles strictly `Idle -> Firing -> Idle`. The transition out of
//! `Idle` is gated on player proximity, alignment along the fixed facing
//! direction, vertical alignment, and the fire cooldown. The projectile is
//! released on a specific keyframe of the firing animation; see
//! [`crate::systems::turret`].

use bevy_ecs::prelude::Component;

use crate::components::cooldown::Cooldown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurretState {
    Idle,
    Firing,
}

#[derive(Component, Debug, Clone)]
pub struct Turret {
    pub state: TurretState,
    /// Firing direction sign, fixed at construction and never changed at
    /// runtime. -1 for mirrored turrets.
    pub direction: f32,
    pub fire_cooldown: Cooldown,
    /// Guards the keyframe side effect so exactly one projectile is released
    /// per firing cycle regardless of frame rate.
    pub has_fired: bool,
    /// Frame index within the firing clip on which the projectile spawns.
    pub fire_frame: usize,
    /// Animation clip played while idle.
    pub idle_key: String,
    /// One-shot animation clip played while firing.
    pub fire_key: String,
}

impl Turret {
    pub fn new(
        mirrored: bool,
        cooldown: f32,
        fire_frame: usize,
        idle_key: impl Into<String>,
        fire_key: impl Into<String>,
    ) -> Self {
        Self {
            state: TurretState::Idle,
            direction: if mirrored { -1.0 } else { 1.0 },
            fire_cooldown: Cooldown::new(cooldown),
            has_fired: false,
            fire_frame,
            idle_key: idle_key.into(),
            fire_key: fire_key.into(),
        }
    }
}
