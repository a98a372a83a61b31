//! Poll-based countdown timer.
//!
//! A [`Cooldown`] never blocks and never calls back: it records the
//! simulation time it was activated at and reports itself inactive once
//! [`Cooldown::update`] observes that the duration has passed. Expiry is
//! lazy, so a cooldown whose window lapsed between polls still reads as
//! active until the next `update` call. Systems tick their cooldowns at the
//! top of their per-frame work, which makes the transition visible on the
//! frame the window lapses.

use serde::{Deserialize, Serialize};

/// Countdown over the shared simulation clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    /// Window length in seconds.
    pub duration: f32,
    /// Simulation time of the last activation, if any.
    started_at: Option<f32>,
    active: bool,
}

impl Cooldown {
    /// Create an inactive cooldown.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            started_at: None,
            active: false,
        }
    }

    /// Create a cooldown already running since `now`.
    pub fn armed(duration: f32, now: f32) -> Self {
        let mut cooldown = Self::new(duration);
        cooldown.activate(now);
        cooldown
    }

    /// Start (or restart) the window at simulation time `now`.
    pub fn activate(&mut self, now: f32) {
        self.started_at = Some(now);
        self.active = true;
    }

    /// Poll the clock: deactivates once `duration` seconds have passed since
    /// activation. The boundary counts as expired.
    pub fn update(&mut self, now: f32) {
        if let Some(start) = self.started_at
            && now - start >= self.duration
        {
            self.active = false;
            self.started_at = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
