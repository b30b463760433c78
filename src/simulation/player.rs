//! The player-controlled vehicle
//!
//! Speed changes are requested through a target speed; the actual speed
//! follows it at a fixed rate of one unit per tick.

use rand::Rng;

use super::types::{
    BodyColor, BOOST_SPEED_CEILING, NORMAL_SPEED_CEILING, PLAYER_START_POSITION, PLAYER_WIDTH,
    SCENE_WIDTH,
};

/// Largest tilt (degrees either way) applied when the car kicks on acceleration
pub const MAX_BOUNCE_ANGLE: f32 = 5.0;

/// The player's vehicle
#[derive(Debug, Clone)]
pub struct PlayerVehicle {
    position: f32,
    target_speed: f32,
    current_speed: f32,
    boost_active: bool,
    bounce_angle: f32,
    /// Position wraps back to 0 past this point
    viewport_width: f32,
}

impl Default for PlayerVehicle {
    fn default() -> Self {
        Self::new(SCENE_WIDTH)
    }
}

impl PlayerVehicle {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            position: PLAYER_START_POSITION,
            target_speed: 0.0,
            current_speed: 0.0,
            boost_active: false,
            bounce_angle: 0.0,
            viewport_width,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn width(&self) -> f32 {
        PLAYER_WIDTH
    }

    pub fn target_speed(&self) -> f32 {
        self.target_speed
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn boost_active(&self) -> bool {
        self.boost_active
    }

    pub fn bounce_angle(&self) -> f32 {
        self.bounce_angle
    }

    pub fn body_color(&self) -> BodyColor {
        if self.boost_active {
            BodyColor::Boost
        } else {
            BodyColor::Standard
        }
    }

    /// Highest target speed currently allowed
    pub fn speed_ceiling(&self) -> f32 {
        if self.boost_active {
            BOOST_SPEED_CEILING
        } else {
            NORMAL_SPEED_CEILING
        }
    }

    /// Request a new target speed, clamped to `[0, ceiling]`. NaN counts as 0.
    ///
    /// Raising the target kicks the suspension: the bounce angle is redrawn.
    pub fn set_target_speed<R: Rng + ?Sized>(&mut self, speed: f32, rng: &mut R) {
        let previous = self.target_speed;
        let speed = if speed.is_nan() { 0.0 } else { speed };
        self.target_speed = speed.clamp(0.0, self.speed_ceiling());
        if self.target_speed > previous {
            self.bounce_angle = rng.random_range(-MAX_BOUNCE_ANGLE..=MAX_BOUNCE_ANGLE);
        }
    }

    /// Flip boost mode. The new ceiling only applies on the next `set_target_speed`.
    pub fn toggle_boost(&mut self) {
        self.boost_active = !self.boost_active;
    }

    /// Drop both speeds to zero without moving the car
    pub fn halt(&mut self) {
        self.target_speed = 0.0;
        self.current_speed = 0.0;
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        if self.current_speed < self.target_speed {
            self.current_speed = self.target_speed.min(self.current_speed + 1.0);
        } else if self.current_speed > self.target_speed {
            self.current_speed = self.target_speed.max(self.current_speed - 1.0);
        }

        if self.current_speed > 0.0 {
            self.position += self.current_speed / 10.0;
            if self.position > self.viewport_width {
                self.position = 0.0;
            }
        }
    }
}
