//! Standalone driving simulation module
//!
//! This module contains the fixed-step simulation engine: the player vehicle,
//! autonomous traffic, weather and the driving statistics. It has no notion of
//! windows or pixels; renderers read a [`SceneSnapshot`] each frame.

mod clock;
mod config;
mod control;
mod exhaust;
mod player;
mod snapshot;
mod stats;
mod traffic;
mod types;
mod weather;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use clock::{ClockState, SimulationClock, DEFAULT_TICKS_PER_SECOND};
pub use config::SimConfig;
#[allow(unused_imports)]
pub use control::{
    ControlIntent, ControlScript, IntentQueue, ScriptStep, ACCELERATION_STEP,
    BOOST_ACCELERATION_STEP, BRAKE_STEP, KEY_REPEAT_TICKS,
};
#[allow(unused_imports)]
pub use exhaust::{ExhaustParticle, ExhaustTrail, EXHAUST_DRIFT_PER_TICK, EXHAUST_FADE_PER_TICK};
#[allow(unused_imports)]
pub use player::{PlayerVehicle, MAX_BOUNCE_ANGLE};
#[allow(unused_imports)]
pub use snapshot::{LightView, PlayerView, SceneSnapshot, StatsView, VehicleView};
#[allow(unused_imports)]
pub use stats::{
    SafetyRating, SimulationStatistics, MAX_SAFETY_SCORE, SAFETY_PENALTY_PER_SECOND,
    SAFETY_RECOVERY_PER_SECOND, SAFE_SPEED, SPEED_FACTOR_PER_TICK, STARTING_BATTERY, UNSAFE_SPEED,
};
#[allow(unused_imports)]
pub use traffic::{
    Pedestrian, TrafficAgents, TrafficLight, TrafficVehicle, LIGHT_MAX_COUNTDOWN,
    LIGHT_MIN_COUNTDOWN, TRAFFIC_MAX_SPEED, TRAFFIC_SPEED_STEP,
};
#[allow(unused_imports)]
pub use types::{
    intervals_overlap, BodyColor, Lane, LightState, Point, Precipitation, TimeOfDay,
    BOOST_SPEED_CEILING, NORMAL_SPEED_CEILING, PLAYER_BODY_Y, PLAYER_START_POSITION, PLAYER_WIDTH,
    ROAD_TOP, SCENE_HEIGHT, SCENE_WIDTH, TRAFFIC_CAR_WIDTH,
};
#[allow(unused_imports)]
pub use weather::{WeatherField, WeatherParticle, PARTICLES_PER_TICK};
pub use world::SimWorld;
