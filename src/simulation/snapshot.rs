//! Read-only view of the scene handed to renderers once per frame

use super::exhaust::ExhaustParticle;
use super::stats::SafetyRating;
use super::types::{BodyColor, Lane, LightState, Point, Precipitation, TimeOfDay};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub position: f32,
    pub width: f32,
    pub color: BodyColor,
    pub bounce_angle: f32,
    pub boost_active: bool,
    /// Headlights glow at night
    pub headlights_on: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleView {
    pub position: f32,
    pub width: f32,
    pub lane: Lane,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightView {
    pub position: f32,
    pub state: LightState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsView {
    pub speed: f32,
    pub battery_percent: u8,
    pub distance_km: f32,
    pub safety_score: f32,
    pub safety_rating: SafetyRating,
    /// `mm:ss`
    pub elapsed: String,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub running: bool,
    pub player: PlayerView,
    pub vehicles: Vec<VehicleView>,
    pub pedestrians: Vec<f32>,
    pub lights: Vec<LightView>,
    pub weather_particles: Vec<Point>,
    pub exhaust: Vec<ExhaustParticle>,
    pub precipitation: Precipitation,
    pub time_of_day: TimeOfDay,
    pub foggy: bool,
    pub stats: StatsView,
}
