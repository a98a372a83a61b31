//! Ambient idle animator system.
//!
//! Runs after [`animation`](crate::systems::animation::animation). While
//! dormant it rewinds the cursor and the displayed frame back to the clip
//! start, undoing whatever the animation system advanced this frame, and
//! rolls the per-frame wake draw; while active it lets the clip play and
//! puts the entity back to sleep once the one-shot clip has finished.
//! Rewinding the sprite offset as well keeps the first frame on screen even
//! when a single delta covers more than one frame. No cooldown between
//! plays: the wake draw happens again on the very next dormant frame.

use bevy_ecs::prelude::*;

use crate::components::ambient::AmbientIdle;
use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;

pub fn ambient_idle_system(
    mut query: Query<(&mut AmbientIdle, &mut Animation, &mut Sprite)>,
    store: Res<AnimationStore>,
) {
    for (mut ambient, mut anim, mut sprite) in query.iter_mut() {
        if ambient.active {
            let clip = store
                .get(&anim.key)
                .unwrap_or_else(|| panic!("Animation clip '{}' not found in store", anim.key));
            if clip.finished(anim.cursor) {
                ambient.active = false;
                anim.cursor = 0.0;
                sprite.offset.x = 0.0;
            }
        } else {
            anim.cursor = 0.0;
            sprite.offset.x = 0.0;
            if fastrand::u32(0..ambient.one_in) == 0 {
                ambient.active = true;
            }
        }
    }
}
