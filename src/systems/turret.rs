//! Turret state machine system.
//!
//! Runs after [`animation`](crate::systems::animation::animation) so the
//! firing clip's cursor has already advanced for this frame. The cycle is
//! strictly `Idle -> Firing -> Idle`:
//!
//! - Idle: evaluate the guard (proximity, alignment ahead of the fixed
//!   facing, vertical alignment, cooldown inactive). On success switch the
//!   animation to the firing clip, arm the cooldown and clear `has_fired`.
//! - Firing: when the cursor reaches the fire keyframe and `has_fired` is
//!   still clear, write one [`SpawnProjectile`] message and set the flag; the
//!   flag, not frame equality, guarantees exactly one projectile per cycle
//!   at any frame rate. When the cursor runs past the clip, rewind to the
//!   idle clip and go back to Idle.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::turret::{Turret, TurretState};
use crate::events::spawn::SpawnProjectile;
use crate::resources::animationstore::AnimationStore;
use crate::resources::playertracker::PlayerTracker;
use crate::resources::tuning::Tuning;
use crate::resources::worldtime::WorldTime;

/// Advance every turret's state machine by one frame.
///
/// # Panics
///
/// Panics if a firing turret points at a clip missing from the store, the
/// same corrupted-content contract as the animation system.
pub fn turret_system(
    mut query: Query<(&mut Turret, &mut Animation, &MapPosition, &BoxCollider)>,
    store: Res<AnimationStore>,
    player: Res<PlayerTracker>,
    tuning: Res<Tuning>,
    time: Res<WorldTime>,
    mut spawn_writer: MessageWriter<SpawnProjectile>,
) {
    for (mut turret, mut anim, position, collider) in query.iter_mut() {
        turret.fire_cooldown.update(time.elapsed);

        let center = collider.rect(position.pos).center();

        match turret.state {
            TurretState::Idle => {
                let to_player = player.center - center;
                let near = to_player.length() < tuning.sight_range;
                let ahead = to_player.x * turret.direction > 0.0;
                let level = to_player.y.abs() < tuning.level_tolerance;

                if near && ahead && level && !turret.fire_cooldown.is_active() {
                    turret.state = TurretState::Firing;
                    let fire_key = turret.fire_key.clone();
                    anim.set_key(fire_key);
                    turret.fire_cooldown.activate(time.elapsed);
                    turret.has_fired = false;
                    debug!("turret at {center:?} opened fire");
                }
            }
            TurretState::Firing => {
                let clip = store.get(&anim.key).unwrap_or_else(|| {
                    panic!("Animation clip '{}' not found in store", anim.key)
                });

                // Keyframe check first: with a large enough delta the cursor
                // can pass both the keyframe and the end of the clip in a
                // single frame, and the shot must not be lost.
                if !turret.has_fired && anim.cursor as usize >= turret.fire_frame {
                    spawn_writer.write(SpawnProjectile {
                        origin: center,
                        direction: turret.direction,
                    });
                    turret.has_fired = true;
                }

                if clip.finished(anim.cursor) {
                    turret.state = TurretState::Idle;
                    let idle_key = turret.idle_key.clone();
                    anim.set_key(idle_key);
                    turret.has_fired = false;
                }
            }
        }
    }
}
