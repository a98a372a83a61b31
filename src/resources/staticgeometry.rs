//! Static collision geometry snapshot.
//!
//! The host owns the level geometry; this resource is the immutable per-frame
//! view the behavior systems probe against. Entities never mutate it, so it
//! is safely shared by every patroller within a frame. The host replaces the
//! whole snapshot when the level changes.

use bevy_ecs::prelude::Resource;

use crate::components::boxcollider::Rect;

#[derive(Resource, Debug, Clone, Default)]
pub struct StaticGeometry {
    rects: Vec<Rect>,
}

impl StaticGeometry {
    pub fn new(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    /// Swap in a fresh snapshot. Host-driven, once per level or frame.
    pub fn replace(&mut self, rects: Vec<Rect>) {
        self.rects = rects;
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}
