//! Ground patroller component.
//!
//! A patroller walks along the floor in its current direction and flips when
//! the probe heuristic in [`crate::systems::patrol`] detects a ledge or wall.
//! External collaborators (the host's hit detection) flip it through
//! [`Patroller::reverse`], which is debounced so a burst of hit events within
//! the window changes direction exactly once.

use bevy_ecs::prelude::Component;

use crate::components::cooldown::Cooldown;

#[derive(Component, Debug, Clone)]
pub struct Patroller {
    /// Walk direction sign, +1 (right) or -1 (left).
    pub direction: f32,
    /// Walk speed in world units per second.
    pub speed: f32,
    /// Debounce window for externally triggered reversals.
    pub hit_debounce: Cooldown,
}

impl Patroller {
    /// Create a patroller with a random initial direction.
    pub fn new(speed: f32, debounce: f32) -> Self {
        let direction = if fastrand::bool() { 1.0 } else { -1.0 };
        Self::with_direction(direction, speed, debounce)
    }

    /// Create a patroller walking in a fixed initial direction.
    pub fn with_direction(direction: f32, speed: f32, debounce: f32) -> Self {
        Self {
            direction,
            speed,
            hit_debounce: Cooldown::new(debounce),
        }
    }

    /// Externally triggered reversal. Ignored while the debounce window is
    /// active; otherwise flips direction and arms the window.
    pub fn reverse(&mut self, now: f32) {
        if self.hit_debounce.is_active() {
            return;
        }
        self.direction = -self.direction;
        self.hit_debounce.activate(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_direction_is_a_sign() {
        let p = Patroller::new(200.0, 0.25);
        assert!(p.direction == 1.0 || p.direction == -1.0);
    }

    #[test]
    fn reverse_flips_direction_and_arms_debounce() {
        let mut p = Patroller::with_direction(1.0, 200.0, 0.25);
        p.reverse(0.0);
        assert_eq!(p.direction, -1.0);
        assert!(p.hit_debounce.is_active());
    }

    #[test]
    fn double_reverse_within_window_flips_exactly_once() {
        let mut p = Patroller::with_direction(1.0, 200.0, 0.25);
        p.reverse(0.0);
        p.reverse(0.1);
        assert_eq!(p.direction, -1.0);
    }

    #[test]
    fn reverse_accepted_again_after_window_lapses() {
        let mut p = Patroller::with_direction(1.0, 200.0, 0.25);
        p.reverse(0.0);
        p.hit_debounce.update(0.25);
        p.reverse(0.25);
        assert_eq!(p.direction, 1.0);
    }
}
