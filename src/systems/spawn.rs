//! Projectile spawn request applier.
//!
//! Drains the [`SpawnProjectile`] queue written by turrets and registers the
//! new entities. Hosts that need different projectile composition can skip
//! this system and drain the queue themselves; the turret only ever talks in
//! messages.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::bundles;
use crate::events::spawn::SpawnProjectile;
use crate::resources::animationstore::AnimationStore;
use crate::resources::tuning::Tuning;
use crate::resources::worldtime::WorldTime;

pub use crate::bundles::PROJECTILE_CLIP;

/// Spawn one projectile entity per pending request.
///
/// The projectile appears `muzzle_offset` units from the turret center along
/// the firing direction, centered on that point, with its lifetime armed at
/// the current simulation time.
pub fn projectile_spawner(
    mut reader: MessageReader<SpawnProjectile>,
    store: Res<AnimationStore>,
    tuning: Res<Tuning>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for request in reader.read() {
        let center =
            request.origin + Vec2::new(tuning.muzzle_offset * request.direction, 0.0);
        commands.spawn(bundles::projectile(
            &store,
            &tuning,
            center,
            request.direction,
            time.elapsed,
        ));
        debug!(
            "spawned projectile at {center:?} moving {}",
            if request.direction < 0.0 { "left" } else { "right" }
        );
    }
}
