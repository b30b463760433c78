//! Driving statistics: battery, distance, safety score and elapsed time
//!
//! Everything here is derived from the commanded speed. Nothing outside the
//! clock's ticks mutates it.

/// Battery charge at the start of a session (percent)
pub const STARTING_BATTERY: f32 = 100.0;

/// Safety score at the start of a session, also its ceiling
pub const MAX_SAFETY_SCORE: f32 = 100.0;

/// Battery drained and distance gained per unit of speed per fast tick
pub const SPEED_FACTOR_PER_TICK: f32 = 0.001;

/// Above this speed the safety score drops every second
pub const UNSAFE_SPEED: f32 = 80.0;

/// Below this speed the safety score recovers every second
pub const SAFE_SPEED: f32 = 60.0;

pub const SAFETY_PENALTY_PER_SECOND: f32 = 1.0;
pub const SAFETY_RECOVERY_PER_SECOND: f32 = 0.5;

/// Coarse safety band, used for colouring the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyRating {
    Good,
    Caution,
    Danger,
}

impl SafetyRating {
    pub fn from_score(score: f32) -> Self {
        if score < 50.0 {
            SafetyRating::Danger
        } else if score < 80.0 {
            SafetyRating::Caution
        } else {
            SafetyRating::Good
        }
    }
}

/// Statistics block for the current session
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationStatistics {
    /// Whole seconds the simulation has been running
    pub elapsed_secs: u32,
    /// Remaining battery in percent, never below 0
    pub battery: f32,
    /// Distance travelled in km
    pub distance: f32,
    /// Safety score in `[0, 100]`
    pub safety_score: f32,
}

impl Default for SimulationStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationStatistics {
    pub fn new() -> Self {
        Self {
            elapsed_secs: 0,
            battery: STARTING_BATTERY,
            distance: 0.0,
            safety_score: MAX_SAFETY_SCORE,
        }
    }

    /// Per-frame update of battery and distance
    pub fn record_frame(&mut self, speed: f32) {
        let speed = speed.max(0.0);
        self.battery = (self.battery - speed * SPEED_FACTOR_PER_TICK).max(0.0);
        self.distance += speed * SPEED_FACTOR_PER_TICK;
    }

    /// Once-per-second update of elapsed time and safety score
    pub fn record_second(&mut self, speed: f32) {
        self.elapsed_secs += 1;

        if speed > UNSAFE_SPEED {
            self.safety_score = (self.safety_score - SAFETY_PENALTY_PER_SECOND).max(0.0);
        } else if speed < SAFE_SPEED {
            self.safety_score =
                (self.safety_score + SAFETY_RECOVERY_PER_SECOND).min(MAX_SAFETY_SCORE);
        }
    }

    /// Battery as a whole percentage, the way a progress bar shows it
    pub fn battery_percent(&self) -> u8 {
        self.battery as u8
    }

    pub fn safety_rating(&self) -> SafetyRating {
        SafetyRating::from_score(self.safety_score)
    }

    /// Elapsed time as `mm:ss`
    pub fn elapsed_display(&self) -> String {
        format!("{:02}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Battery: {}% | Distance: {:.1} km | Safety: {}% | Time: {}",
            self.battery_percent(),
            self.distance,
            self.safety_score as u32,
            self.elapsed_display()
        )
    }
}
