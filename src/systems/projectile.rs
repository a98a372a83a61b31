//! Projectile flight and lifetime system.
//!
//! Ticks both projectile timers, removes the entity on the frame its
//! lifetime is detected inactive, and otherwise displaces it along its
//! direction. Wall handling is the host's job through
//! [`HitEvent`](crate::events::hit::HitEvent) or despawning.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::mapposition::MapPosition;
use crate::components::projectile::Projectile;
use crate::resources::worldtime::WorldTime;

/// Advance every live projectile by one frame.
pub fn projectile_system(
    mut query: Query<(Entity, &mut Projectile, &mut MapPosition)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut projectile, mut position) in query.iter_mut() {
        projectile.lifetime.update(time.elapsed);
        projectile.deflect_debounce.update(time.elapsed);

        if !projectile.lifetime.is_active() {
            trace!("projectile {entity:?} expired");
            commands.entity(entity).try_despawn();
            continue;
        }

        position.pos.x += projectile.direction * projectile.speed * time.delta;
    }
}
