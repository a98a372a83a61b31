//! Animation playback system.
//!
//! Advances every entity's frame cursor by `fps * dt` and writes the selected
//! frame offset into the entity's [`Sprite`]. Frame selection wraps for
//! looping clips and clamps to the last frame for one-shot clips; the cursor
//! itself keeps advancing past the end of one-shot clips so state machines
//! (turret, ambient animator) can detect completion with
//! [`AnimationClip::finished`].

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta.
/// - Looks up clip data from [`AnimationStore`].
/// - Mutates [`Animation`] cursors and [`Sprite`] sheet offsets.
///
/// # Panics
///
/// Panics if an entity points at a missing clip key or a clip with zero
/// frames. Both mean corrupted content that should have been rejected at
/// load time; degrading silently would hide the defect.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim, mut sprite) in query.iter_mut() {
        let clip = store
            .get(&anim.key)
            .unwrap_or_else(|| panic!("Animation clip '{}' not found in store", anim.key));
        assert!(
            clip.frame_count > 0,
            "Animation clip '{}' has no frames",
            anim.key
        );

        anim.cursor += clip.fps * time.delta;
        let frame = clip.frame_index(anim.cursor);

        // Frames are laid out left to right in the sheet.
        sprite.offset = Vec2::new(frame as f32 * clip.frame_width, 0.0);
    }
}
