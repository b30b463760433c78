//! Weather particles and the boost exhaust trail

use drive_sim::simulation::{
    ExhaustTrail, Precipitation, TimeOfDay, WeatherField, PARTICLES_PER_TICK, PLAYER_BODY_Y,
    SCENE_HEIGHT, SCENE_WIDTH,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(5)
}

#[test]
fn test_clear_sky_spawns_nothing() {
    let mut rng = rng();
    let mut weather = WeatherField::new();
    for _ in 0..50 {
        weather.tick(&mut rng);
    }
    assert!(weather.particles().is_empty());
}

#[test]
fn test_fog_is_an_overlay_only() {
    let mut rng = rng();
    let mut weather = WeatherField::new();
    weather.set_mode(Precipitation::Fog, TimeOfDay::Sunset);
    for _ in 0..50 {
        weather.tick(&mut rng);
    }
    assert!(weather.is_foggy());
    assert!(weather.particles().is_empty());
    assert_eq!(weather.time_of_day(), TimeOfDay::Sunset);
}

#[test]
fn test_rain_spawns_at_most_five_per_tick() {
    let mut rng = rng();
    let mut weather = WeatherField::new();
    weather.set_precipitation(Precipitation::Rain);

    weather.tick(&mut rng);
    assert!(weather.particles().len() <= PARTICLES_PER_TICK);

    let mut previous = weather.particles().len();
    for _ in 0..300 {
        weather.tick(&mut rng);
        let count = weather.particles().len();
        assert!(count <= previous + PARTICLES_PER_TICK);
        previous = count;

        for particle in weather.particles() {
            assert!(particle.position.y <= SCENE_HEIGHT);
            assert!((0.0..=SCENE_WIDTH).contains(&particle.position.x));
            assert!((5.0..10.0).contains(&particle.fall_speed));
        }
    }
    // Each particle lives at most 600 / 5 ticks, so the population is bounded
    assert!(previous > 0);
    assert!(previous <= PARTICLES_PER_TICK * 121);
}

#[test]
fn test_snow_spawns_exactly_five_per_tick() {
    let mut weather = WeatherField::new();
    weather.set_precipitation(Precipitation::Snow);
    weather.tick(&mut rng());

    // Replay the draws a single tick makes to find which flakes survive it
    let mut replay = rng();
    let mut spawned = Vec::new();
    for _ in 0..PARTICLES_PER_TICK {
        let x = replay.random_range(0..=SCENE_WIDTH as i32) as f32;
        let y = replay.random_range(0..=SCENE_HEIGHT as i32) as f32;
        let fall_speed: f32 = replay.random_range(5.0..10.0);
        spawned.push((x, y + fall_speed));
    }
    let survivors: Vec<(f32, f32)> = spawned
        .into_iter()
        .filter(|&(_, y)| y <= SCENE_HEIGHT)
        .collect();

    assert!(!survivors.is_empty());
    assert_eq!(weather.particles().len(), survivors.len());
    for particle in weather.particles() {
        assert!(survivors.contains(&(particle.position.x, particle.position.y)));
    }
}

#[test]
fn test_particles_fall_by_their_speed() {
    let mut rng = rng();
    let mut weather = WeatherField::new();
    weather.set_precipitation(Precipitation::Snow);
    for _ in 0..20 {
        weather.tick(&mut rng);
    }

    weather.set_precipitation(Precipitation::None);
    let before = weather.particles().to_vec();
    weather.tick(&mut rng);

    // Without spawning, every surviving particle is a moved copy of an old one
    for particle in weather.particles() {
        assert!(before.iter().any(|old| old.position.x == particle.position.x
            && old.position.y + old.fall_speed == particle.position.y));
    }
    let expected = before
        .iter()
        .filter(|old| old.position.y + old.fall_speed <= SCENE_HEIGHT)
        .count();
    assert_eq!(weather.particles().len(), expected);
}

#[test]
fn test_particles_drain_after_weather_clears() {
    let mut rng = rng();
    let mut weather = WeatherField::new();
    weather.set_precipitation(Precipitation::Rain);
    for _ in 0..30 {
        weather.tick(&mut rng);
    }
    assert!(!weather.particles().is_empty());

    weather.set_mode(Precipitation::None, TimeOfDay::Night);
    for _ in 0..121 {
        weather.tick(&mut rng);
    }
    assert!(weather.particles().is_empty());
    assert_eq!(weather.time_of_day(), TimeOfDay::Night);
}

#[test]
fn test_exhaust_only_while_boosting_and_moving() {
    let mut rng = rng();
    let mut trail = ExhaustTrail::new();

    trail.tick(100.0, false, 50.0, &mut rng);
    assert!(trail.particles().is_empty());

    trail.tick(100.0, true, 0.0, &mut rng);
    assert!(trail.particles().is_empty());

    trail.tick(100.0, true, 50.0, &mut rng);
    assert_eq!(trail.particles().len(), 1);
    let puff = trail.particles()[0];
    assert_eq!(puff.position.x, 95.0);
    assert!((puff.position.y - PLAYER_BODY_Y).abs() <= 10.0);
    assert!((5.0..=15.0).contains(&puff.size));
    assert!((puff.life - 0.9).abs() < 1e-5);
}

#[test]
fn test_exhaust_fades_out() {
    let mut rng = rng();
    let mut trail = ExhaustTrail::new();
    trail.tick(100.0, true, 50.0, &mut rng);

    for _ in 0..12 {
        trail.tick(100.0, false, 0.0, &mut rng);
        for puff in trail.particles() {
            assert!(puff.life > 0.0);
        }
    }
    assert!(trail.particles().is_empty());
}
