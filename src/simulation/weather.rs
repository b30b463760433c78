//! Weather field: precipitation particles and ambient mode
//!
//! Rain and snow spawn a fixed number of particles every tick that fall
//! until they leave the bottom of the scene. Fog and time of day are flags
//! that only the renderer reads.

use log::info;
use rand::Rng;

use super::types::{Point, Precipitation, TimeOfDay, SCENE_HEIGHT, SCENE_WIDTH};

/// Particles spawned per tick while raining or snowing
pub const PARTICLES_PER_TICK: usize = 5;

/// A falling rain drop or snow flake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherParticle {
    pub position: Point,
    pub fall_speed: f32,
}

/// Ambient weather state and its particles
#[derive(Debug, Clone, Default)]
pub struct WeatherField {
    precipitation: Precipitation,
    time_of_day: TimeOfDay,
    particles: Vec<WeatherParticle>,
}

impl WeatherField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precipitation(&self) -> Precipitation {
        self.precipitation
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn particles(&self) -> &[WeatherParticle] {
        &self.particles
    }

    pub fn is_foggy(&self) -> bool {
        self.precipitation == Precipitation::Fog
    }

    /// Replace both mode flags at once
    pub fn set_mode(&mut self, precipitation: Precipitation, time_of_day: TimeOfDay) {
        self.set_precipitation(precipitation);
        self.set_time_of_day(time_of_day);
    }

    pub fn set_precipitation(&mut self, precipitation: Precipitation) {
        if self.precipitation != precipitation {
            info!("Weather changed: {} -> {}", self.precipitation, precipitation);
        }
        self.precipitation = precipitation;
    }

    pub fn set_time_of_day(&mut self, time_of_day: TimeOfDay) {
        if self.time_of_day != time_of_day {
            info!("Time of day changed: {} -> {}", self.time_of_day, time_of_day);
        }
        self.time_of_day = time_of_day;
    }

    /// Spawn new particles, move every particle down, then drop those that
    /// fell past the bottom of the scene.
    ///
    /// Particles already in flight keep falling after the weather clears.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.precipitation.spawns_particles() {
            for _ in 0..PARTICLES_PER_TICK {
                let x = rng.random_range(0..=SCENE_WIDTH as i32) as f32;
                let y = rng.random_range(0..=SCENE_HEIGHT as i32) as f32;
                let fall_speed = rng.random_range(5.0..10.0);
                self.particles.push(WeatherParticle {
                    position: Point::new(x, y),
                    fall_speed,
                });
            }
        }

        let mut i = 0;
        while i < self.particles.len() {
            let particle = &mut self.particles[i];
            particle.position.y += particle.fall_speed;
            if particle.position.y > SCENE_HEIGHT {
                // The swapped-in tail element has not moved yet; revisit slot i
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}
