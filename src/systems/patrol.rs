//! Ground patrol system and the ledge/wall probe heuristic.
//!
//! Each frame, in order: tick the hit debounce, mirror the sprite from the
//! current direction, apply the displacement, then run the probe heuristic
//! and flip direction if it triggers. Displacement happens before the probe
//! check, so one frame of over-travel into a hazard is possible before the
//! reversal takes effect; that matches the shipped behavior and the tests
//! pin it down.
//!
//! The probe flip is independent of the hit debounce: a probe-triggered
//! reversal is never ignored.

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::boxcollider::{BoxCollider, Rect};
use crate::components::mapposition::MapPosition;
use crate::components::patrol::Patroller;
use crate::components::sprite::Sprite;
use crate::resources::staticgeometry::StaticGeometry;
use crate::resources::worldtime::WorldTime;

/// 1x1 probe under the body's bottom-right corner.
fn floor_probe_right(body: &Rect) -> Rect {
    Rect::new(body.right(), body.bottom(), 1.0, 1.0)
}

/// 1x1 probe under the body's bottom-left corner, extending left.
fn floor_probe_left(body: &Rect) -> Rect {
    Rect::new(body.left() - 1.0, body.bottom(), 1.0, 1.0)
}

/// 1-unit-thick probe along the top edge, widened by one unit on each side
/// to catch walls flush with the body.
fn wall_probe(body: &Rect) -> Rect {
    Rect::new(body.left() - 1.0, body.top(), body.w + 2.0, 1.0)
}

/// Ledge/wall reversal rule.
///
/// Flips when the floor probe on the walking side hangs over empty space, or
/// when the wall probe touches anything regardless of direction. This is not
/// a physics solver: it never resolves penetration, it only signals that the
/// intended direction should flip.
pub fn should_reverse(body: &Rect, direction: f32, rects: &[Rect]) -> bool {
    let off_ledge_right = direction > 0.0 && !floor_probe_right(body).intersects_any(rects);
    let off_ledge_left = direction < 0.0 && !floor_probe_left(body).intersects_any(rects);
    let blocked = wall_probe(body).intersects_any(rects);
    off_ledge_right || off_ledge_left || blocked
}

/// Advance every patroller by one frame.
pub fn patrol_system(
    mut query: Query<(&mut Patroller, &mut MapPosition, &BoxCollider, &mut Sprite)>,
    geometry: Res<StaticGeometry>,
    time: Res<WorldTime>,
) {
    for (mut patroller, mut position, collider, mut sprite) in query.iter_mut() {
        patroller.hit_debounce.update(time.elapsed);

        sprite.flip_h = patroller.direction < 0.0;

        position.pos.x += patroller.direction * patroller.speed * time.delta;

        let body = collider.rect(position.pos);
        if should_reverse(&body, patroller.direction, geometry.rects()) {
            patroller.direction = -patroller.direction;
            trace!("patroller reversed at x={}", position.pos.x);
        }
    }
}
