//! ECS components for behavioral entities.
//!
//! Submodules overview:
//! - [`ambient`] – probabilistically self-triggering idle animation
//! - [`animation`] – playback state pointing into the animation store
//! - [`boxcollider`] – axis-aligned rectangles and entity colliders
//! - [`cooldown`] – poll-based countdown value type
//! - [`mapposition`] – world-space position (pivot) of an entity
//! - [`patrol`] – ground patroller walking state and hit debounce
//! - [`projectile`] – finite-lifetime directional projectile
//! - [`sprite`] – current display frame of an entity
//! - [`turret`] – proximity-gated fire state machine

pub mod ambient;
pub mod animation;
pub mod boxcollider;
pub mod cooldown;
pub mod mapposition;
pub mod patrol;
pub mod projectile;
pub mod sprite;
pub mod turret;
