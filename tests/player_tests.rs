//! Player vehicle behaviour: speed following, ceilings, boost and wrapping

use drive_sim::simulation::{
    BodyColor, PlayerVehicle, BOOST_SPEED_CEILING, MAX_BOUNCE_ANGLE, NORMAL_SPEED_CEILING,
    PLAYER_START_POSITION, PLAYER_WIDTH,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

#[test]
fn test_player_initial_state() {
    let player = PlayerVehicle::default();
    assert_eq!(player.position(), PLAYER_START_POSITION);
    assert_eq!(player.width(), PLAYER_WIDTH);
    assert_eq!(player.target_speed(), 0.0);
    assert_eq!(player.current_speed(), 0.0);
    assert!(!player.boost_active());
    assert_eq!(player.body_color(), BodyColor::Standard);
}

#[test]
fn test_current_speed_steps_toward_target_without_overshoot() {
    let mut rng = rng();
    let mut player = PlayerVehicle::default();
    player.set_target_speed(5.5, &mut rng);

    let mut previous = player.current_speed();
    for _ in 0..10 {
        player.tick();
        let current = player.current_speed();
        assert!(current - previous <= 1.0);
        assert!(current <= player.target_speed());
        previous = current;
    }
    assert_eq!(player.current_speed(), 5.5);

    // And back down
    player.set_target_speed(2.0, &mut rng);
    player.tick();
    assert_eq!(player.current_speed(), 4.5);
    for _ in 0..5 {
        player.tick();
        assert!(player.current_speed() >= 2.0);
    }
    assert_eq!(player.current_speed(), 2.0);
}

#[test]
fn test_position_advances_by_tenth_of_speed() {
    let mut rng = rng();
    let mut player = PlayerVehicle::default();

    // Standing still does not move the car
    player.tick();
    assert_eq!(player.position(), PLAYER_START_POSITION);

    player.set_target_speed(10.0, &mut rng);
    player.tick();
    assert_eq!(player.current_speed(), 1.0);
    assert_eq!(player.position(), PLAYER_START_POSITION + 0.1);
}

#[test]
fn test_target_speed_is_clamped() {
    let mut rng = rng();
    let mut player = PlayerVehicle::default();

    player.set_target_speed(-25.0, &mut rng);
    assert_eq!(player.target_speed(), 0.0);

    player.set_target_speed(500.0, &mut rng);
    assert_eq!(player.target_speed(), NORMAL_SPEED_CEILING);

    player.toggle_boost();
    player.set_target_speed(500.0, &mut rng);
    assert_eq!(player.target_speed(), BOOST_SPEED_CEILING);
}

#[test]
fn test_boost_raises_ceiling_for_next_request() {
    let mut rng = rng();
    let mut player = PlayerVehicle::default();
    player.set_target_speed(60.0, &mut rng);
    assert_eq!(player.speed_ceiling(), NORMAL_SPEED_CEILING);

    player.toggle_boost();
    assert_eq!(player.target_speed(), 60.0, "toggling boost must not change speed");
    assert_eq!(player.body_color(), BodyColor::Boost);

    player.set_target_speed(130.0, &mut rng);
    assert_eq!(player.target_speed(), 130.0);
}

#[test]
fn test_boost_off_applies_lower_ceiling_lazily() {
    let mut rng = rng();
    let mut player = PlayerVehicle::default();
    player.toggle_boost();
    player.set_target_speed(130.0, &mut rng);

    player.toggle_boost();
    assert_eq!(player.target_speed(), 130.0);

    player.set_target_speed(132.0, &mut rng);
    assert_eq!(player.target_speed(), NORMAL_SPEED_CEILING);
}

#[test]
fn test_bounce_only_on_acceleration() {
    let mut rng = rng();
    let mut player = PlayerVehicle::default();
    assert_eq!(player.bounce_angle(), 0.0);

    let mut saw_bounce = false;
    for step in 1..=20 {
        player.set_target_speed(step as f32 * 2.0, &mut rng);
        let angle = player.bounce_angle();
        assert!((-MAX_BOUNCE_ANGLE..=MAX_BOUNCE_ANGLE).contains(&angle));
        saw_bounce |= angle != 0.0;
    }
    assert!(saw_bounce);

    let angle = player.bounce_angle();
    player.set_target_speed(10.0, &mut rng);
    assert_eq!(player.bounce_angle(), angle, "braking must not bounce");
    player.set_target_speed(10.0, &mut rng);
    assert_eq!(player.bounce_angle(), angle, "same target must not bounce");
}

#[test]
fn test_position_wraps_at_viewport_width() {
    let mut rng = rng();
    let mut player = PlayerVehicle::new(200.0);
    player.set_target_speed(NORMAL_SPEED_CEILING, &mut rng);

    let mut wrapped = false;
    let mut previous = player.position();
    for _ in 0..200 {
        player.tick();
        assert!(player.position() >= 0.0);
        assert!(player.position() <= 200.0);
        if player.position() < previous {
            assert_eq!(player.position(), 0.0);
            wrapped = true;
        }
        previous = player.position();
    }
    assert!(wrapped);
}

#[test]
fn test_halt_zeroes_both_speeds_and_keeps_position() {
    let mut rng = rng();
    let mut player = PlayerVehicle::default();
    player.set_target_speed(40.0, &mut rng);
    for _ in 0..10 {
        player.tick();
    }
    let position = player.position();

    player.halt();
    assert_eq!(player.target_speed(), 0.0);
    assert_eq!(player.current_speed(), 0.0);
    assert_eq!(player.position(), position);
}

#[test]
fn test_nan_target_speed_counts_as_zero() {
    let mut rng = rng();
    let mut player = PlayerVehicle::default();
    player.set_target_speed(40.0, &mut rng);
    player.set_target_speed(f32::NAN, &mut rng);
    assert_eq!(player.target_speed(), 0.0);

    // Later requests still take effect
    player.set_target_speed(12.0, &mut rng);
    assert_eq!(player.target_speed(), 12.0);
    player.tick();
    assert_eq!(player.current_speed(), 1.0);
}
