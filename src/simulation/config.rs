//! Startup configuration for a simulation world

use super::clock::DEFAULT_TICKS_PER_SECOND;
use super::types::SCENE_WIDTH;

/// Scene setup used when building a [`SimWorld`](super::SimWorld)
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Width at which the player wraps back to the left edge
    pub viewport_width: f32,
    pub initial_traffic_cars: usize,
    pub initial_pedestrians: usize,
    pub traffic_lights: usize,
    /// Fast ticks per simulated second; statistics tick once per second
    pub ticks_per_second: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: SCENE_WIDTH,
            initial_traffic_cars: 3,
            initial_pedestrians: 2,
            traffic_lights: 2,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }
}
