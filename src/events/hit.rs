//! Hit notifications from the host's collision layer.
//!
//! The behavior core performs no entity-vs-entity collision detection; the
//! host decides when something struck a patroller or projectile and triggers
//! a [`HitEvent`]. The observer forwards it to the entity's debounced
//! reversal, so hammering the event inside the debounce window flips the
//! entity exactly once.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::patrol::Patroller;
use crate::components::projectile::Projectile;
use crate::resources::worldtime::WorldTime;

/// Event fired by the host when an entity takes a reversing hit.
#[derive(Event, Debug, Clone, Copy)]
pub struct HitEvent {
    pub entity: Entity,
}

/// Global observer that applies a hit to the struck entity.
///
/// Patrollers reverse their walk direction, projectiles deflect. Entities
/// with neither component ignore the event.
pub fn observe_hit(
    trigger: On<HitEvent>,
    mut patrollers: Query<&mut Patroller>,
    mut projectiles: Query<&mut Projectile>,
    time: Res<WorldTime>,
) {
    let entity = trigger.event().entity;

    if let Ok(mut patroller) = patrollers.get_mut(entity) {
        patroller.reverse(time.elapsed);
        debug!("hit on patroller {entity:?}, direction now {}", patroller.direction);
        return;
    }
    if let Ok(mut projectile) = projectiles.get_mut(entity) {
        projectile.deflect(time.elapsed);
        debug!(
            "hit on projectile {entity:?}, direction now {}",
            projectile.direction
        );
    }
}
