//! Boost exhaust trail emitted behind the player

use rand::Rng;

use super::types::{Point, PLAYER_BODY_Y};

/// Life lost by an exhaust puff each tick
pub const EXHAUST_FADE_PER_TICK: f32 = 0.1;

/// Distance an exhaust puff drifts backwards each tick
pub const EXHAUST_DRIFT_PER_TICK: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExhaustParticle {
    pub position: Point,
    pub size: f32,
    /// Fades from 1.0; the renderer uses it as alpha
    pub life: f32,
}

#[derive(Debug, Clone, Default)]
pub struct ExhaustTrail {
    particles: Vec<ExhaustParticle>,
}

impl ExhaustTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[ExhaustParticle] {
        &self.particles
    }

    /// Emit one puff at `player_x` if boosting while moving, then age the trail.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        player_x: f32,
        boost_active: bool,
        current_speed: f32,
        rng: &mut R,
    ) {
        if boost_active && current_speed > 0.0 {
            let body_y = PLAYER_BODY_Y as i32;
            self.particles.push(ExhaustParticle {
                position: Point::new(player_x, rng.random_range(body_y - 10..=body_y + 10) as f32),
                size: rng.random_range(5..=15) as f32,
                life: 1.0,
            });
        }

        let mut i = 0;
        while i < self.particles.len() {
            let particle = &mut self.particles[i];
            particle.position.x -= EXHAUST_DRIFT_PER_TICK;
            particle.life -= EXHAUST_FADE_PER_TICK;
            if particle.life <= 0.0 {
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}
