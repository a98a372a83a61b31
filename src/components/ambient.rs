//! Probabilistically self-triggering idle animation, used for UI ornaments.
//!
//! While dormant the entity holds the first frame of its clip. Each dormant
//! frame draws one pseudo-random integer in `[0, one_in)` and wakes on the
//! sentinel value, giving a memoryless per-frame trigger probability with an
//! expected wait of `one_in` frames. There is no cooldown: the animation may
//! retrigger on the very next frame after finishing.

use bevy_ecs::prelude::Component;

/// Default odds: one draw in 2001 per frame.
pub const DEFAULT_ONE_IN: u32 = 2001;

/// The clip attached alongside this component must be non-looping, otherwise
/// the end of the sequence is never reached.
#[derive(Component, Debug, Clone)]
pub struct AmbientIdle {
    pub active: bool,
    /// Size of the per-frame random draw range.
    pub one_in: u32,
}

impl Default for AmbientIdle {
    fn default() -> Self {
        Self::new(DEFAULT_ONE_IN)
    }
}

impl AmbientIdle {
    pub fn new(one_in: u32) -> Self {
        Self {
            active: false,
            one_in,
        }
    }
}
