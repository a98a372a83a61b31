//! Hazardcore library.
//!
//! Real-time behavior layer for hostile and ambient entities in a
//! side-scrolling platformer: non-blocking cooldown timers, collision-driven
//! patrol reversal, animation-gated fire state machines and finite-lifetime
//! projectiles. The host supplies time, static geometry and the player
//! position; entities answer with sprite frames, bounding rectangles and
//! projectile spawn requests.

pub mod bundles;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
