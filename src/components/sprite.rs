use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Displayed frame of an entity: a texture key, the frame size in world
/// units, and the offset of the current frame inside the sprite sheet.
/// `flip_h` mirrors the frame horizontally for left-facing entities.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub size: Vec2,
    pub offset: Vec2,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
            flip_h: false,
        }
    }

    pub fn mirrored(mut self) -> Self {
        self.flip_h = true;
        self
    }
}
