use bevy_ecs::prelude::Resource;

/// Simulation clock shared by every system. `elapsed` and `delta` are in
/// seconds and already scaled by `time_scale`; all cooldowns poll against
/// `elapsed`, so replaying a fixed sequence of deltas is deterministic.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
