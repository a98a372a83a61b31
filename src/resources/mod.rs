//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – clip definitions reused across entities
//! - `playertracker` – read-only view of the player's center position
//! - `staticgeometry` – immutable collision rectangle snapshot
//! - `tuning` – behavior constants, loadable from an INI file
//! - `worldtime` – simulation time and delta

pub mod animationstore;
pub mod playertracker;
pub mod staticgeometry;
pub mod tuning;
pub mod worldtime;
