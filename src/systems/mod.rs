//! Per-frame behavior systems.
//!
//! Intended schedule order within a frame:
//!
//! 1. [`time::update_world_time`] – host calls this before the schedule
//! 2. [`animation::animation`] – advance cursors, select frames
//! 3. [`ambient::ambient_idle_system`] – after animation (rewinds dormant frames)
//! 4. [`patrol::patrol_system`] – debounce, walk, probe reversal
//! 5. [`turret::turret_system`] – after animation (reads advanced cursors)
//! 6. [`spawn::projectile_spawner`] – after turret (drains spawn requests)
//! 7. [`projectile::projectile_system`] – flight and lifetime despawn
//!
//! Entities are removed only through `Commands`, so despawns apply after the
//! owning system finished iterating, never mid-update.

pub mod ambient;
pub mod animation;
pub mod patrol;
pub mod projectile;
pub mod spawn;
pub mod time;
pub mod turret;
