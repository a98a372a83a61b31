//! Animation clip registry.
//!
//! Clip definitions are immutable and shared by every entity pointing at the
//! same key, so a patroller's run cycle or a turret's fire animation is
//! defined once. Definitions can be loaded from a JSON document keyed by
//! clip name.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Central registry of reusable animation clips keyed by string IDs.
#[derive(Resource, Default, Debug)]
pub struct AnimationStore {
    pub clips: FxHashMap<String, AnimationClip>,
}

/// Immutable data describing one horizontal strip of sprite-sheet frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Texture key resolved by the host's renderer.
    pub tex_key: String,
    /// Number of frames in the strip. Must be at least 1; a clip without
    /// frames is corrupted content.
    pub frame_count: usize,
    /// Playback speed in frames per second.
    pub fps: f32,
    /// Whether the cursor wraps after the last frame. One-shot clips clamp.
    pub looped: bool,
    /// Frame width in pixels within the sheet.
    pub frame_width: f32,
    /// Frame height in pixels within the sheet.
    pub frame_height: f32,
}

impl AnimationClip {
    /// Map a continuous cursor to a concrete frame index: wrapping for
    /// looping clips, clamped to the last frame for one-shot clips.
    pub fn frame_index(&self, cursor: f32) -> usize {
        let raw = cursor.max(0.0) as usize;
        if self.looped {
            raw % self.frame_count
        } else {
            raw.min(self.frame_count - 1)
        }
    }

    /// Whether a one-shot clip's cursor has run past its final frame.
    /// Always false for looping clips.
    pub fn finished(&self, cursor: f32) -> bool {
        !self.looped && cursor >= self.frame_count as f32
    }
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, clip: AnimationClip) {
        self.clips.insert(key.into(), clip);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationClip> {
        self.clips.get(key)
    }

    /// Load clip definitions from a JSON object mapping keys to clips.
    ///
    /// Clips with a zero frame count are rejected here so the malformed
    /// content is reported at load time, not mid-simulation.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let clips: FxHashMap<String, AnimationClip> =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse animations: {e}"))?;
        for (key, clip) in &clips {
            if clip.frame_count == 0 {
                return Err(format!("Animation clip '{key}' has no frames"));
            }
        }
        Ok(Self { clips })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(frame_count: usize, looped: bool) -> AnimationClip {
        AnimationClip {
            tex_key: "sheet".to_string(),
            frame_count,
            fps: 6.0,
            looped,
            frame_width: 16.0,
            frame_height: 16.0,
        }
    }

    #[test]
    fn looped_clip_wraps_frame_index() {
        let c = clip(4, true);
        assert_eq!(c.frame_index(0.0), 0);
        assert_eq!(c.frame_index(3.9), 3);
        assert_eq!(c.frame_index(4.2), 0);
        assert_eq!(c.frame_index(9.5), 1);
    }

    #[test]
    fn one_shot_clip_clamps_frame_index() {
        let c = clip(4, false);
        assert_eq!(c.frame_index(3.2), 3);
        assert_eq!(c.frame_index(10.0), 3);
    }

    #[test]
    fn one_shot_clip_reports_finished() {
        let c = clip(4, false);
        assert!(!c.finished(3.9));
        assert!(c.finished(4.0));
        assert!(!clip(4, true).finished(100.0));
    }

    #[test]
    fn from_json_parses_clip_map() {
        let json = r#"{
            "tooth_run": {
                "tex_key": "tooth",
                "frame_count": 4,
                "fps": 6.0,
                "looped": true,
                "frame_width": 32.0,
                "frame_height": 32.0
            }
        }"#;
        let store = AnimationStore::from_json_str(json).unwrap();
        assert_eq!(store.get("tooth_run").unwrap().frame_count, 4);
    }

    #[test]
    fn from_json_rejects_empty_clip() {
        let json = r#"{
            "broken": {
                "tex_key": "x",
                "frame_count": 0,
                "fps": 6.0,
                "looped": true,
                "frame_width": 16.0,
                "frame_height": 16.0
            }
        }"#;
        let err = AnimationStore::from_json_str(json).unwrap_err();
        assert!(err.contains("broken"));
    }
}
