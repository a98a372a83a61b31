//! Spawn bundles for the stock entity kinds.
//!
//! Hosts and tests assemble the same component tuples over and over; these
//! helpers keep the clip keys, collider sizes and tuning constants in one
//! place. Collider and sprite sizes come from the clip's frame dimensions,
//! so the body always matches the displayed frame.
//!
//! # Panics
//!
//! Every helper panics if the named clip is missing from the store, the
//! same corrupted-content contract as the animation system.

use bevy_ecs::prelude::Bundle;
use glam::Vec2;

use crate::components::ambient::AmbientIdle;
use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::patrol::Patroller;
use crate::components::projectile::Projectile;
use crate::components::sprite::Sprite;
use crate::components::turret::Turret;
use crate::resources::animationstore::{AnimationClip, AnimationStore};
use crate::resources::tuning::Tuning;

/// Clip key every spawned projectile points at.
pub const PROJECTILE_CLIP: &str = "projectile";

fn required_clip<'a>(store: &'a AnimationStore, key: &str) -> &'a AnimationClip {
    store
        .get(key)
        .unwrap_or_else(|| panic!("Animation clip '{key}' not found in store"))
}

/// Ground patroller walking in a random initial direction.
pub fn patroller(
    store: &AnimationStore,
    tuning: &Tuning,
    clip_key: &str,
    x: f32,
    y: f32,
) -> impl Bundle {
    let direction = if fastrand::bool() { 1.0 } else { -1.0 };
    patroller_facing(store, tuning, direction, clip_key, x, y)
}

/// Ground patroller walking in a fixed initial direction.
pub fn patroller_facing(
    store: &AnimationStore,
    tuning: &Tuning,
    direction: f32,
    clip_key: &str,
    x: f32,
    y: f32,
) -> impl Bundle {
    let clip = required_clip(store, clip_key);
    (
        Patroller::with_direction(direction, tuning.patrol_speed, tuning.hit_debounce),
        MapPosition::new(x, y),
        BoxCollider::new(clip.frame_width, clip.frame_height),
        Animation::new(clip_key),
        Sprite::new(clip.tex_key.clone(), clip.frame_width, clip.frame_height),
    )
}

/// Stationary turret. Sizes come from the idle clip; a mirrored turret
/// faces and fires left.
pub fn turret(
    store: &AnimationStore,
    tuning: &Tuning,
    mirrored: bool,
    idle_key: &str,
    fire_key: &str,
    x: f32,
    y: f32,
) -> impl Bundle {
    let clip = required_clip(store, idle_key);
    let mut sprite = Sprite::new(clip.tex_key.clone(), clip.frame_width, clip.frame_height);
    sprite.flip_h = mirrored;
    (
        Turret::new(
            mirrored,
            tuning.fire_cooldown,
            tuning.fire_frame,
            idle_key,
            fire_key,
        ),
        MapPosition::new(x, y),
        BoxCollider::new(clip.frame_width, clip.frame_height),
        Animation::new(idle_key),
        sprite,
    )
}

/// Projectile centered on `center`, lifetime armed at simulation time `now`.
pub fn projectile(
    store: &AnimationStore,
    tuning: &Tuning,
    center: Vec2,
    direction: f32,
    now: f32,
) -> impl Bundle {
    let clip = required_clip(store, PROJECTILE_CLIP);
    let size = Vec2::new(clip.frame_width, clip.frame_height);
    let top_left = center - size * 0.5;

    let mut sprite = Sprite::new(clip.tex_key.clone(), size.x, size.y);
    sprite.flip_h = direction < 0.0;

    (
        MapPosition { pos: top_left },
        BoxCollider::new(size.x, size.y),
        Projectile::new(
            direction,
            tuning.projectile_speed,
            tuning.projectile_lifetime,
            tuning.deflect_debounce,
            now,
        ),
        Animation::new(PROJECTILE_CLIP),
        sprite,
    )
}

/// Dormant ambient animator pointing at a one-shot clip.
pub fn ambient(store: &AnimationStore, one_in: u32, clip_key: &str) -> impl Bundle {
    let clip = required_clip(store, clip_key);
    (
        AmbientIdle::new(one_in),
        Animation::new(clip_key),
        Sprite::new(clip.tex_key.clone(), clip.frame_width, clip.frame_height),
    )
}
