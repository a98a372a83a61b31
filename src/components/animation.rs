//! Per-entity animation playback state.
//!
//! The component only holds a clip key and a continuous frame cursor; the
//! frame data itself lives in the shared
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore).

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Playback state pointing into the animation store.
///
/// `cursor` is a continuous, non-negative frame index advanced by
/// `fps * dt` each frame. The displayed frame is `floor(cursor)` folded into
/// the clip's frame count (wrapping for looped clips, clamped otherwise).
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub key: String,
    pub cursor: f32,
}

impl Animation {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cursor: 0.0,
        }
    }

    /// Switch to another clip. Changing clip always rewinds the cursor.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
        self.cursor = 0.0;
    }
}
