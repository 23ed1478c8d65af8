use super::spin::{DEFAULT_PERIOD, Spin, SpinState};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn starts_paused_at_zero() {
    let spin = Spin::default();
    let t0 = Instant::now();
    assert!(!spin.is_playing());
    assert_eq!(spin.state(), SpinState::Paused);
    assert_eq!(spin.angle_at(t0), 0.0);
    assert_eq!(spin.angle_at(t0 + ms(60_000)), 0.0);
    assert_eq!(spin.period(), DEFAULT_PERIOD);
}

#[test]
fn one_period_of_playing_is_exactly_one_turn_and_keeps_accumulating() {
    let mut spin = Spin::default();
    let t0 = Instant::now();
    spin.toggle(t0);
    assert!(spin.is_playing());

    assert_eq!(spin.angle_at(t0), 0.0);
    assert_eq!(spin.angle_at(t0 + ms(2_000)), 90.0);
    assert_eq!(spin.angle_at(t0 + ms(8_000)), 360.0);
    assert_eq!(spin.angle_at(t0 + ms(12_000)), 540.0);
    assert_eq!(spin.angle_at(t0 + ms(16_000)), 720.0);
}

#[test]
fn angle_is_non_decreasing_while_playing() {
    let mut spin = Spin::new(ms(8_000));
    let t0 = Instant::now();
    spin.play(t0);

    let mut last = spin.angle_at(t0);
    for step in 1..=600 {
        let a = spin.angle_at(t0 + ms(step * 33));
        assert!(a >= last, "angle went backwards at frame {step}");
        last = a;
    }
}

#[test]
fn pause_freezes_at_the_reached_angle_and_resume_continues_from_it() {
    let mut spin = Spin::default();
    let t0 = Instant::now();
    spin.toggle(t0);

    let t1 = t0 + ms(3_000);
    let theta = spin.angle_at(t1);
    let frozen = spin.toggle(t1);
    assert!(!spin.is_playing());
    assert_eq!(frozen, theta);
    assert_eq!(frozen, 135.0);
    assert_eq!(spin.angle_at(t1 + ms(10_000)), theta);

    let t2 = t1 + ms(10_000);
    spin.toggle(t2);
    assert_eq!(spin.angle_at(t2), theta);
    assert_eq!(spin.angle_at(t2 + ms(2_000)), theta + 90.0);
}

#[test]
fn play_and_pause_are_idempotent() {
    let mut spin = Spin::default();
    let t0 = Instant::now();
    spin.pause(t0);
    assert_eq!(spin.angle_at(t0), 0.0);

    spin.play(t0);
    spin.play(t0 + ms(4_000));
    assert_eq!(spin.angle_at(t0 + ms(4_000)), 180.0);

    spin.pause(t0 + ms(4_000));
    spin.pause(t0 + ms(6_000));
    assert_eq!(spin.angle_at(t0 + ms(9_000)), 180.0);
}

#[test]
fn custom_period_scales_speed() {
    let mut spin = Spin::new(ms(1_000));
    let t0 = Instant::now();
    spin.play(t0);
    assert_eq!(spin.angle_at(t0 + ms(500)), 180.0);
    assert_eq!(spin.angle_at(t0 + ms(3_000)), 1080.0);
}

#[test]
fn zero_period_is_clamped() {
    let spin = Spin::new(Duration::ZERO);
    assert_eq!(spin.period(), ms(1));
}

#[test]
fn sampling_before_start_does_not_go_negative() {
    let mut spin = Spin::default();
    let t0 = Instant::now();
    spin.play(t0 + ms(1_000));
    assert_eq!(spin.angle_at(t0), 0.0);
}
