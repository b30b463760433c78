//! Autonomous traffic: cars, pedestrians and traffic lights
//!
//! All agents live in plain `Vec`s owned by [`TrafficAgents`]. Agents leaving
//! the right edge of the scene are recycled in place rather than removed, so
//! indices stay stable for the lifetime of the simulation.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::types::{intervals_overlap, Lane, LightState, SCENE_WIDTH, TRAFFIC_CAR_WIDTH};

/// Fastest a traffic car will cruise
pub const TRAFFIC_MAX_SPEED: f32 = 2.0;

/// Speed lost per tick while blocked by the player, and regained while clear
pub const TRAFFIC_SPEED_STEP: f32 = 0.1;

/// Lowest countdown a light is given after a phase flip
pub const LIGHT_MIN_COUNTDOWN: u32 = 50;

/// Highest countdown a light is given after a phase flip
pub const LIGHT_MAX_COUNTDOWN: u32 = 150;

/// A traffic car driving left to right
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficVehicle {
    pub position: f32,
    pub speed: f32,
    width: f32,
    pub lane: Lane,
}

impl TrafficVehicle {
    pub fn new(position: f32, speed: f32, lane: Lane) -> Self {
        let speed = if speed.is_nan() { 0.0 } else { speed };
        Self {
            position,
            speed: speed.clamp(0.0, TRAFFIC_MAX_SPEED),
            width: TRAFFIC_CAR_WIDTH,
            lane,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// A pedestrian walking along the sidewalk
#[derive(Debug, Clone, PartialEq)]
pub struct Pedestrian {
    pub position: f32,
    pub speed: f32,
}

/// A traffic light with a randomised phase length
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficLight {
    pub position: f32,
    pub state: LightState,
    /// Ticks until the next phase flip
    pub countdown: u32,
}

impl TrafficLight {
    /// Count down one tick, flipping phase when the countdown runs out.
    /// Returns true if the light flipped.
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.state = self.state.flipped();
            self.countdown = rng.random_range(LIGHT_MIN_COUNTDOWN..=LIGHT_MAX_COUNTDOWN);
            true
        } else {
            false
        }
    }
}

/// Owner of every autonomous agent in the scene
#[derive(Debug, Clone, Default)]
pub struct TrafficAgents {
    vehicles: Vec<TrafficVehicle>,
    pedestrians: Vec<Pedestrian>,
    lights: Vec<TrafficLight>,
    /// Total number of times a car has left the scene and been recycled
    recycled_vehicles: u64,
}

impl TrafficAgents {
    /// An empty scene with no agents
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate a scene with the given number of each agent
    pub fn populate<R: Rng + ?Sized>(
        vehicles: usize,
        pedestrians: usize,
        lights: usize,
        rng: &mut R,
    ) -> Self {
        let mut agents = Self::new();
        agents.add_vehicles(vehicles, rng);
        agents.add_pedestrians(pedestrians, rng);
        agents.add_traffic_lights(lights, rng);
        agents
    }

    pub fn vehicles(&self) -> &[TrafficVehicle] {
        &self.vehicles
    }

    pub fn pedestrians(&self) -> &[Pedestrian] {
        &self.pedestrians
    }

    pub fn lights(&self) -> &[TrafficLight] {
        &self.lights
    }

    pub fn recycled_vehicles(&self) -> u64 {
        self.recycled_vehicles
    }

    /// Append `count` cars at random positions, speeds and lanes
    pub fn add_vehicles<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let position = rng.random_range(100..=700) as f32;
            let speed = rng.random_range(1.0..TRAFFIC_MAX_SPEED);
            let lane = random_lane(rng);
            self.vehicles.push(TrafficVehicle::new(position, speed, lane));
        }
        debug!("Added {} traffic cars (total {})", count, self.vehicles.len());
    }

    /// Append `count` pedestrians at random positions and walking speeds
    pub fn add_pedestrians<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let position = rng.random_range(100..=700) as f32;
            let speed = rng.random_range(0.5..1.0);
            self.pedestrians.push(Pedestrian { position, speed });
        }
        debug!("Added {} pedestrians (total {})", count, self.pedestrians.len());
    }

    /// Append `count` green lights spaced evenly across the scene.
    ///
    /// Spacing is computed from `count` alone, so lights added in separate
    /// calls are not re-spread.
    pub fn add_traffic_lights<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let spacing = SCENE_WIDTH / (count as f32 + 1.0);
        for i in 0..count {
            self.lights.push(TrafficLight {
                position: (spacing * (i as f32 + 1.0)).trunc(),
                state: LightState::Green,
                countdown: rng.random_range(LIGHT_MIN_COUNTDOWN..=LIGHT_MAX_COUNTDOWN),
            });
        }
    }

    /// Insert a car with exact parameters, returning its index
    pub fn insert_vehicle(&mut self, vehicle: TrafficVehicle) -> usize {
        self.vehicles.push(vehicle);
        self.vehicles.len() - 1
    }

    /// Advance every agent by one tick.
    ///
    /// `player_position` and `player_width` must be the player's state after it
    /// has moved this tick.
    pub fn tick<R: Rng + ?Sized>(&mut self, player_position: f32, player_width: f32, rng: &mut R) {
        self.update_vehicles(player_position, player_width, rng);
        self.update_pedestrians();
        self.update_lights(rng);
    }

    fn update_vehicles<R: Rng + ?Sized>(
        &mut self,
        player_position: f32,
        player_width: f32,
        rng: &mut R,
    ) {
        for (index, vehicle) in self.vehicles.iter_mut().enumerate() {
            let previous = vehicle.position;
            vehicle.position += vehicle.speed;

            if intervals_overlap(
                vehicle.position,
                vehicle.width,
                player_position,
                player_width,
            ) {
                // Would run into the player: stay put and brake
                vehicle.position = previous;
                vehicle.speed = (vehicle.speed - TRAFFIC_SPEED_STEP).max(0.0);
            } else {
                vehicle.speed = (vehicle.speed + TRAFFIC_SPEED_STEP).min(TRAFFIC_MAX_SPEED);
            }

            if vehicle.position > SCENE_WIDTH {
                vehicle.position = -vehicle.width;
                vehicle.lane = random_lane(rng);
                self.recycled_vehicles += 1;
                debug!("Traffic car {} recycled into {:?} lane", index, vehicle.lane);
            }
        }
    }

    fn update_pedestrians(&mut self) {
        for pedestrian in &mut self.pedestrians {
            pedestrian.position += pedestrian.speed;
            if pedestrian.position > SCENE_WIDTH {
                pedestrian.position = 0.0;
            }
        }
    }

    fn update_lights<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (index, light) in self.lights.iter_mut().enumerate() {
            if light.tick(rng) {
                debug!(
                    "Traffic light {} turned {:?} for {} ticks",
                    index, light.state, light.countdown
                );
            }
        }
    }
}

fn random_lane<R: Rng + ?Sized>(rng: &mut R) -> Lane {
    *Lane::ALL.choose(rng).unwrap_or(&Lane::Top)
}
