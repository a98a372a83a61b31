//! Axis-aligned collision rectangles.
//!
//! [`Rect`] is the shared geometry primitive: the static level geometry, the
//! entity bodies and the synthetic probe rectangles cast by the patrol logic
//! are all plain `Rect`s. The coordinate system follows the screen
//! convention: y grows downward, so `bottom` is the larger y value.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Strict AABB overlap test. Rectangles that merely share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether this rectangle overlaps any rectangle in the slice.
    pub fn intersects_any(&self, rects: &[Rect]) -> bool {
        rects.iter().any(|r| self.intersects(r))
    }
}

/// Axis-aligned rectangular collider attached to an entity.
///
/// The collider's world rectangle is derived from the entity's
/// [`MapPosition`](super::mapposition::MapPosition) plus a local offset.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with the given size and no offset.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space rectangle of the collider for a given entity position.
    pub fn rect(&self, position: Vec2) -> Rect {
        let origin = position + self.offset;
        Rect::new(origin.x, origin.y, self.size.x, self.size.y)
    }

    /// AABB vs AABB overlap against another collider at a different position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        self.rect(position).intersects(&other.rect(other_position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn intersects_any_over_slice() {
        let probe = Rect::new(9.0, 0.0, 1.0, 1.0);
        let rects = [
            Rect::new(100.0, 100.0, 5.0, 5.0),
            Rect::new(9.5, 0.5, 2.0, 2.0),
        ];
        assert!(probe.intersects_any(&rects));
        assert!(!probe.intersects_any(&rects[..1]));
    }

    #[test]
    fn collider_rect_applies_offset() {
        let collider = BoxCollider::new(16.0, 16.0).with_offset(Vec2::new(2.0, -4.0));
        let rect = collider.rect(Vec2::new(100.0, 50.0));
        assert_eq!(rect, Rect::new(102.0, 46.0, 16.0, 16.0));
    }

    #[test]
    fn collider_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(5.0, 5.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(20.0, 0.0)));
    }
}
