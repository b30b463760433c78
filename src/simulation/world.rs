//! Main simulation world that ties everything together
//!
//! Owns the player, the traffic agents, the weather field, the clock and the
//! statistics, and advances them in a fixed order every tick. Renderers read
//! [`SceneSnapshot`]s; input arrives as queued [`ControlIntent`]s.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::clock::SimulationClock;
use super::config::SimConfig;
use super::control::{
    ControlIntent, IntentQueue, ACCELERATION_STEP, BOOST_ACCELERATION_STEP, BRAKE_STEP,
};
use super::exhaust::ExhaustTrail;
use super::player::PlayerVehicle;
use super::snapshot::{LightView, PlayerView, SceneSnapshot, StatsView, VehicleView};
use super::stats::SimulationStatistics;
use super::traffic::TrafficAgents;
use super::types::{Lane, LightState, TimeOfDay, SCENE_WIDTH};
use super::weather::WeatherField;

/// Columns used by the terminal scene map
const MAP_COLUMNS: usize = 80;

/// The main simulation world
pub struct SimWorld {
    pub player: PlayerVehicle,
    pub traffic: TrafficAgents,
    pub weather: WeatherField,
    pub exhaust: ExhaustTrail,
    pub stats: SimulationStatistics,
    clock: SimulationClock,
    intents: IntentQueue,
    rng: StdRng,
    /// Seed the RNG was built from, so a run can be replayed
    seed: u64,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld {
    /// Create a world with the default scene and a random seed
    pub fn new() -> Self {
        Self::with_config(SimConfig::default(), rand::rng().random())
    }

    /// Create a world with the default scene and a fixed seed for reproducible runs
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_config(SimConfig::default(), seed)
    }

    pub fn with_config(config: SimConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let traffic = TrafficAgents::populate(
            config.initial_traffic_cars,
            config.initial_pedestrians,
            config.traffic_lights,
            &mut rng,
        );
        debug!("Created world with seed {} and {:?}", seed, config);

        Self {
            player: PlayerVehicle::new(config.viewport_width),
            traffic,
            weather: WeatherField::new(),
            exhaust: ExhaustTrail::new(),
            stats: SimulationStatistics::new(),
            clock: SimulationClock::new(config.ticks_per_second),
            intents: IntentQueue::new(),
            rng,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Speed the statistics are derived from: the commanded speed
    pub fn speed(&self) -> f32 {
        self.player.target_speed()
    }

    /// Queue an intent for the next tick
    pub fn submit(&mut self, intent: ControlIntent) {
        self.intents.push(intent);
    }

    pub fn pending_intents(&self) -> usize {
        self.intents.len()
    }

    pub fn start(&mut self) {
        if self.clock.start() {
            info!("Simulation started");
        }
    }

    /// Pause the simulation. The car stops dead; position and statistics stay.
    pub fn stop(&mut self) {
        if self.clock.stop() {
            self.player.halt();
            info!("Simulation stopped");
        }
    }

    /// Set the commanded speed directly. Ignored while stopped.
    pub fn set_target_speed(&mut self, speed: f32) {
        if !self.clock.is_running() {
            debug!("Ignoring speed change to {} while stopped", speed);
            return;
        }
        self.player.set_target_speed(speed, &mut self.rng);
    }

    fn apply_intent(&mut self, intent: ControlIntent) {
        if intent.is_driving() && !self.clock.is_running() {
            debug!("Ignoring {:?} while stopped", intent);
            return;
        }

        match intent {
            ControlIntent::Start => self.start(),
            ControlIntent::Stop => self.stop(),
            ControlIntent::Accelerate => {
                let step = if self.player.boost_active() {
                    BOOST_ACCELERATION_STEP
                } else {
                    ACCELERATION_STEP
                };
                let target = self.player.target_speed() + step;
                self.player.set_target_speed(target, &mut self.rng);
            }
            ControlIntent::Brake => {
                let target = self.player.target_speed() - BRAKE_STEP;
                self.player.set_target_speed(target, &mut self.rng);
            }
            ControlIntent::EmergencyStop => {
                self.player.set_target_speed(0.0, &mut self.rng);
            }
            ControlIntent::ToggleBoost => {
                self.player.toggle_boost();
                info!(
                    "Boost {} (ceiling {} km/h)",
                    if self.player.boost_active() { "on" } else { "off" },
                    self.player.speed_ceiling()
                );
            }
            ControlIntent::SelectWeather(precipitation) => {
                self.weather.set_precipitation(precipitation);
            }
            ControlIntent::SelectTimeOfDay(time_of_day) => {
                self.weather.set_time_of_day(time_of_day);
            }
            ControlIntent::AddTrafficCars(count) => {
                self.traffic.add_vehicles(count, &mut self.rng);
                info!("Traffic cars: {}", self.traffic.vehicles().len());
            }
            ControlIntent::AddPedestrians(count) => {
                self.traffic.add_pedestrians(count, &mut self.rng);
                info!("Pedestrians: {}", self.traffic.pedestrians().len());
            }
        }
    }

    /// Main simulation tick
    ///
    /// Applies queued intents, then (only while running) advances the player,
    /// the traffic (against the player's new position), the weather and the
    /// exhaust trail, and finally the statistics.
    pub fn tick(&mut self) {
        let intents: Vec<ControlIntent> = self.intents.drain().collect();
        for intent in intents {
            self.apply_intent(intent);
        }

        if !self.clock.is_running() {
            return;
        }

        self.player.tick();
        self.traffic
            .tick(self.player.position(), self.player.width(), &mut self.rng);
        self.weather.tick(&mut self.rng);
        self.exhaust.tick(
            self.player.position(),
            self.player.boost_active(),
            self.player.current_speed(),
            &mut self.rng,
        );

        let speed = self.speed();
        self.stats.record_frame(speed);
        if self.clock.advance() {
            self.stats.record_second(speed);
            debug!("{}", self.stats.summary());
        }
    }

    /// Build the read-only view renderers consume
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            running: self.clock.is_running(),
            player: PlayerView {
                position: self.player.position(),
                width: self.player.width(),
                color: self.player.body_color(),
                bounce_angle: self.player.bounce_angle(),
                boost_active: self.player.boost_active(),
                headlights_on: self.weather.time_of_day() == TimeOfDay::Night,
            },
            vehicles: self
                .traffic
                .vehicles()
                .iter()
                .map(|v| VehicleView {
                    position: v.position,
                    width: v.width(),
                    lane: v.lane,
                })
                .collect(),
            pedestrians: self.traffic.pedestrians().iter().map(|p| p.position).collect(),
            lights: self
                .traffic
                .lights()
                .iter()
                .map(|l| LightView {
                    position: l.position,
                    state: l.state,
                })
                .collect(),
            weather_particles: self.weather.particles().iter().map(|p| p.position).collect(),
            exhaust: self.exhaust.particles().to_vec(),
            precipitation: self.weather.precipitation(),
            time_of_day: self.weather.time_of_day(),
            foggy: self.weather.is_foggy(),
            stats: StatsView {
                speed: self.speed(),
                battery_percent: self.stats.battery_percent(),
                distance_km: self.stats.distance,
                safety_score: self.stats.safety_score,
                safety_rating: self.stats.safety_rating(),
                elapsed: self.stats.elapsed_display(),
            },
        }
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Driving Simulation Summary ===");
        println!(
            "State: {:?} | Ticks: {}",
            self.clock.state(),
            self.clock.total_ticks()
        );
        println!(
            "Player: position={:.1}, speed={:.0}/{:.0} km/h, boost={}",
            self.player.position(),
            self.player.current_speed(),
            self.player.target_speed(),
            if self.player.boost_active() { "on" } else { "off" }
        );
        println!("{}", self.stats.summary());
        println!(
            "Traffic cars: {} (recycled {}), Pedestrians: {}, Lights: {}",
            self.traffic.vehicles().len(),
            self.traffic.recycled_vehicles(),
            self.traffic.pedestrians().len(),
            self.traffic.lights().len()
        );
        println!(
            "Weather: {} | Time of day: {} | Particles: {} | Exhaust: {}",
            self.weather.precipitation(),
            self.weather.time_of_day(),
            self.weather.particles().len(),
            self.exhaust.particles().len()
        );
    }

    /// Draw the road in the terminal
    pub fn draw_map(&self) {
        let to_col = |x: f32| -> Option<usize> {
            if (0.0..SCENE_WIDTH).contains(&x) {
                Some((x / SCENE_WIDTH * MAP_COLUMNS as f32) as usize)
            } else {
                None
            }
        };
        let span = |row: &mut Vec<char>, x: f32, width: f32, glyph: char| {
            let mut edge = x;
            while edge < x + width {
                if let Some(col) = to_col(edge) {
                    row[col] = glyph;
                }
                edge += SCENE_WIDTH / MAP_COLUMNS as f32;
            }
        };

        let mut lights = vec![' '; MAP_COLUMNS];
        let mut top_lane = vec![' '; MAP_COLUMNS];
        let mut player_lane = vec![' '; MAP_COLUMNS];
        let mut bottom_lane = vec![' '; MAP_COLUMNS];
        let mut sidewalk = vec!['.'; MAP_COLUMNS];

        for light in self.traffic.lights() {
            if let Some(col) = to_col(light.position) {
                lights[col] = match light.state {
                    LightState::Green => 'G',
                    LightState::Red => 'R',
                };
            }
        }

        for vehicle in self.traffic.vehicles() {
            let row = match vehicle.lane {
                Lane::Top => &mut top_lane,
                Lane::Bottom => &mut bottom_lane,
            };
            span(row, vehicle.position, vehicle.width(), 'T');
        }

        for puff in self.exhaust.particles() {
            if let Some(col) = to_col(puff.position.x) {
                player_lane[col] = '~';
            }
        }
        span(
            &mut player_lane,
            self.player.position(),
            self.player.width(),
            if self.player.boost_active() { 'B' } else { 'P' },
        );

        for pedestrian in self.traffic.pedestrians() {
            if let Some(col) = to_col(pedestrian.position) {
                sidewalk[col] = 'o';
            }
        }

        let road_edge: String = "=".repeat(MAP_COLUMNS);
        println!("\n=== Road Map ===");
        println!("Legend: G/R=Light, T=Traffic car, P=Player (B=boosting), ~=Exhaust, o=Pedestrian");
        println!();
        println!("{}", lights.iter().collect::<String>());
        println!("{}", road_edge);
        println!("{}", top_lane.iter().collect::<String>());
        println!("{}", player_lane.iter().collect::<String>());
        println!("{}", bottom_lane.iter().collect::<String>());
        println!("{}", road_edge);
        println!("{}", sidewalk.iter().collect::<String>());
        println!(
            "Sky: {} / {}{} ({} particles)",
            self.weather.precipitation(),
            self.weather.time_of_day(),
            if self.weather.is_foggy() { ", fog overlay" } else { "" },
            self.weather.particles().len()
        );
        println!();
    }
}
