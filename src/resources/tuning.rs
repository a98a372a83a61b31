//! Behavior tuning resource.
//!
//! All the fixed behavior constants in one place, loadable from an INI file.
//! Missing values keep their defaults so a partial file is fine.
//!
//! # Configuration File Format
//!
//! ```ini
//! [patrol]
//! speed = 200
//! hit_debounce = 0.25
//!
//! [turret]
//! fire_cooldown = 3.0
//! fire_frame = 3
//! sight_range = 500
//! level_tolerance = 30
//!
//! [projectile]
//! speed = 400
//! lifetime = 5.0
//! deflect_debounce = 0.25
//! muzzle_offset = 48
//!
//! [ambient]
//! one_in = 2001
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_PATROL_SPEED: f32 = 200.0;
const DEFAULT_HIT_DEBOUNCE: f32 = 0.25;
const DEFAULT_FIRE_COOLDOWN: f32 = 3.0;
const DEFAULT_FIRE_FRAME: usize = 3;
const DEFAULT_SIGHT_RANGE: f32 = 500.0;
const DEFAULT_LEVEL_TOLERANCE: f32 = 30.0;
const DEFAULT_PROJECTILE_SPEED: f32 = 400.0;
const DEFAULT_PROJECTILE_LIFETIME: f32 = 5.0;
const DEFAULT_MUZZLE_OFFSET: f32 = 48.0;
const DEFAULT_AMBIENT_ONE_IN: u32 = 2001;
const DEFAULT_CONFIG_PATH: &str = "./tuning.ini";

/// Behavior constants consumed at entity spawn time and by the turret guard.
#[derive(Resource, Debug, Clone)]
pub struct Tuning {
    /// Patroller walk speed in units per second.
    pub patrol_speed: f32,
    /// Debounce window for externally triggered reversals, in seconds.
    pub hit_debounce: f32,
    /// Turret fire cooldown in seconds.
    pub fire_cooldown: f32,
    /// Keyframe index of the firing clip on which the projectile spawns.
    pub fire_frame: usize,
    /// Maximum distance at which a turret notices the player.
    pub sight_range: f32,
    /// Maximum vertical offset for the turret's alignment guard.
    pub level_tolerance: f32,
    /// Projectile travel speed in units per second.
    pub projectile_speed: f32,
    /// Projectile lifetime in seconds.
    pub projectile_lifetime: f32,
    /// Debounce window for projectile deflections, in seconds.
    pub deflect_debounce: f32,
    /// Spawn offset from the turret center along its facing direction.
    pub muzzle_offset: f32,
    /// Ambient animator odds: one trigger draw in this many per frame.
    pub ambient_one_in: u32,
    /// Path to the tuning file.
    pub config_path: PathBuf,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new()
    }
}

impl Tuning {
    /// Create a tuning set with the default constants.
    pub fn new() -> Self {
        Self {
            patrol_speed: DEFAULT_PATROL_SPEED,
            hit_debounce: DEFAULT_HIT_DEBOUNCE,
            fire_cooldown: DEFAULT_FIRE_COOLDOWN,
            fire_frame: DEFAULT_FIRE_FRAME,
            sight_range: DEFAULT_SIGHT_RANGE,
            level_tolerance: DEFAULT_LEVEL_TOLERANCE,
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
            projectile_lifetime: DEFAULT_PROJECTILE_LIFETIME,
            deflect_debounce: DEFAULT_HIT_DEBOUNCE,
            muzzle_offset: DEFAULT_MUZZLE_OFFSET,
            ambient_one_in: DEFAULT_AMBIENT_ONE_IN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load tuning values from the INI file. Missing values retain their
    /// current values. Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load tuning file: {e}"))?;

        if let Some(speed) = config.getfloat("patrol", "speed").ok().flatten() {
            self.patrol_speed = speed as f32;
        }
        if let Some(debounce) = config.getfloat("patrol", "hit_debounce").ok().flatten() {
            self.hit_debounce = debounce as f32;
        }

        if let Some(cooldown) = config.getfloat("turret", "fire_cooldown").ok().flatten() {
            self.fire_cooldown = cooldown as f32;
        }
        if let Some(frame) = config.getuint("turret", "fire_frame").ok().flatten() {
            self.fire_frame = frame as usize;
        }
        if let Some(range) = config.getfloat("turret", "sight_range").ok().flatten() {
            self.sight_range = range as f32;
        }
        if let Some(tolerance) = config.getfloat("turret", "level_tolerance").ok().flatten() {
            self.level_tolerance = tolerance as f32;
        }

        if let Some(speed) = config.getfloat("projectile", "speed").ok().flatten() {
            self.projectile_speed = speed as f32;
        }
        if let Some(lifetime) = config.getfloat("projectile", "lifetime").ok().flatten() {
            self.projectile_lifetime = lifetime as f32;
        }
        if let Some(debounce) = config
            .getfloat("projectile", "deflect_debounce")
            .ok()
            .flatten()
        {
            self.deflect_debounce = debounce as f32;
        }
        if let Some(offset) = config.getfloat("projectile", "muzzle_offset").ok().flatten() {
            self.muzzle_offset = offset as f32;
        }

        if let Some(one_in) = config.getuint("ambient", "one_in").ok().flatten() {
            self.ambient_one_in = one_in as u32;
        }

        info!(
            "Loaded tuning: patrol {}u/s, fire cooldown {}s, projectile {}u/s for {}s",
            self.patrol_speed, self.fire_cooldown, self.projectile_speed, self.projectile_lifetime
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_constants() {
        let t = Tuning::new();
        assert_eq!(t.patrol_speed, 200.0);
        assert_eq!(t.hit_debounce, 0.25);
        assert_eq!(t.fire_cooldown, 3.0);
        assert_eq!(t.fire_frame, 3);
        assert_eq!(t.sight_range, 500.0);
        assert_eq!(t.level_tolerance, 30.0);
        assert_eq!(t.projectile_lifetime, 5.0);
        assert_eq!(t.ambient_one_in, 2001);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let mut t = Tuning::with_path("/nonexistent/tuning.ini");
        assert!(t.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(t.patrol_speed, 200.0);
    }
}
