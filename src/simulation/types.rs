//! Core types for the driving simulation
//!
//! Plain value types and scene constants shared by every component.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

/// Width of the scene in world units
pub const SCENE_WIDTH: f32 = 800.0;

/// Height of the scene in world units
pub const SCENE_HEIGHT: f32 = 600.0;

/// Top edge of the road surface
pub const ROAD_TOP: f32 = SCENE_HEIGHT - 180.0;

/// Vertical position of the player's body, used to seed exhaust particles
pub const PLAYER_BODY_Y: f32 = ROAD_TOP + 35.0;

/// Width of a traffic car
pub const TRAFFIC_CAR_WIDTH: f32 = 40.0;

/// Width of the player vehicle
pub const PLAYER_WIDTH: f32 = 60.0;

/// Position the player vehicle starts at
pub const PLAYER_START_POSITION: f32 = 50.0;

/// Speed ceiling without boost
pub const NORMAL_SPEED_CEILING: f32 = 100.0;

/// Speed ceiling with boost engaged
pub const BOOST_SPEED_CEILING: f32 = 150.0;

/// Lane a traffic car is drawn in. Purely cosmetic: collision only looks at x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Top,
    Bottom,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::Top, Lane::Bottom];
}

/// Traffic light phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Green,
    Red,
}

impl LightState {
    pub fn flipped(self) -> Self {
        match self {
            LightState::Green => LightState::Red,
            LightState::Red => LightState::Green,
        }
    }
}

/// Precipitation mode of the weather field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precipitation {
    #[default]
    None,
    Rain,
    Snow,
    Fog,
}

impl Precipitation {
    /// Whether this mode emits falling particles
    pub fn spawns_particles(self) -> bool {
        matches!(self, Precipitation::Rain | Precipitation::Snow)
    }
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precipitation::None => "clear",
            Precipitation::Rain => "rain",
            Precipitation::Snow => "snow",
            Precipitation::Fog => "fog",
        };
        f.write_str(name)
    }
}

impl FromStr for Precipitation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" | "none" => Ok(Precipitation::None),
            "rain" => Ok(Precipitation::Rain),
            "snow" => Ok(Precipitation::Snow),
            "fog" => Ok(Precipitation::Fog),
            other => bail!("unknown weather '{}' (expected clear, rain, snow or fog)", other),
        }
    }
}

/// Time of day, read by rendering for sky colour and headlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
    Sunset,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeOfDay::Day => "day",
            TimeOfDay::Night => "night",
            TimeOfDay::Sunset => "sunset",
        };
        f.write_str(name)
    }
}

impl FromStr for TimeOfDay {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(TimeOfDay::Day),
            "night" => Ok(TimeOfDay::Night),
            "sunset" => Ok(TimeOfDay::Sunset),
            other => bail!("unknown time of day '{}' (expected day, night or sunset)", other),
        }
    }
}

/// Body colour state of the player vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyColor {
    Standard,
    Boost,
}

impl BodyColor {
    /// RGB triple the renderer paints the body with
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BodyColor::Standard => (0, 100, 255),
            BodyColor::Boost => (255, 165, 0),
        }
    }
}

/// A 2D point in scene coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Horizontal interval overlap test: `[x1, x1 + w1)` against `[x2, x2 + w2)`
pub fn intervals_overlap(x1: f32, w1: f32, x2: f32, w2: f32) -> bool {
    x1 < x2 + w2 && x1 + w1 > x2
}
