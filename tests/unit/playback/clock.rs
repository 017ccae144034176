use super::*;

#[test]
fn starts_stopped_at_zero() {
    let clock = PlaybackClock::new(5000.0);
    assert_eq!(clock.current_time(), 0.0);
    assert_eq!(clock.state(), PlaybackState::Stopped);
}

#[test]
fn tick_advances_by_wall_clock_delta() {
    let mut clock = PlaybackClock::new(5000.0);
    clock.play(1000.0);
    clock.tick(1016.0);
    let s = clock.tick(1050.0);
    assert_eq!(s.current_time, 50.0);
    assert!(s.is_playing);
}

#[test]
fn reaching_duration_rewinds_and_stops() {
    let mut clock = PlaybackClock::new(5000.0);
    clock.scrub(4990.0);
    clock.play(0.0);
    let s = clock.advance(50.0);
    assert_eq!(s.current_time, 0.0);
    assert!(!s.is_playing);

    clock.scrub(4990.0);
    clock.play(100.0);
    let s = clock.tick(150.0);
    assert_eq!(
        s,
        PlaybackStatus {
            current_time: 0.0,
            is_playing: false
        }
    );
}

#[test]
fn scrub_pauses_and_clamps() {
    let mut clock = PlaybackClock::new(5000.0);
    clock.play(0.0);
    clock.scrub(7000.0);
    assert!(!clock.is_playing());
    assert_eq!(clock.current_time(), 5000.0);
    clock.scrub(-20.0);
    assert_eq!(clock.current_time(), 0.0);
    clock.scrub(1234.0);
    assert_eq!(clock.current_time(), 1234.0);
}

#[test]
fn play_at_end_restarts_from_zero() {
    let mut clock = PlaybackClock::new(5000.0);
    clock.scrub(5000.0);
    clock.play(0.0);
    assert!(clock.is_playing());
    assert_eq!(clock.current_time(), 0.0);
}

#[test]
fn pause_freezes_time() {
    let mut clock = PlaybackClock::new(5000.0);
    clock.play(0.0);
    clock.tick(100.0);
    clock.pause();
    let s = clock.tick(900.0);
    assert_eq!(s.current_time, 100.0);
    assert!(!s.is_playing);

    // Resuming does not count the paused interval.
    clock.play(2000.0);
    assert_eq!(clock.tick(2010.0).current_time, 110.0);
}

#[test]
fn toggle_flips_state() {
    let mut clock = PlaybackClock::new(1000.0);
    clock.toggle(0.0);
    assert!(clock.is_playing());
    clock.toggle(10.0);
    assert!(!clock.is_playing());
}

#[test]
fn shrinking_duration_clamps_cursor() {
    let mut clock = PlaybackClock::new(5000.0);
    clock.scrub(4000.0);
    clock.set_duration(3000.0);
    assert_eq!(clock.current_time(), 3000.0);
    assert_eq!(clock.duration(), 3000.0);
}

#[test]
fn status_serializes_camel_case() {
    let clock = PlaybackClock::new(1000.0);
    let v = serde_json::to_value(clock.status()).unwrap();
    assert_eq!(v, serde_json::json!({"currentTime": 0.0, "isPlaying": false}));
}

#[test]
fn backwards_timestamp_never_rewinds_cursor() {
    let mut clock = PlaybackClock::new(5000.0);
    clock.play(1000.0);
    let s = clock.tick(900.0);
    assert_eq!(s.current_time, 0.0);
    assert!(s.is_playing);

    // Re-anchored at 900.
    let s = clock.tick(1000.0);
    assert_eq!(s.current_time, 100.0);

    let s = clock.tick(f64::NAN);
    assert_eq!(s.current_time, 100.0);
}

#[test]
fn advance_ignores_negative_and_non_finite_deltas() {
    let mut clock = PlaybackClock::new(5000.0);
    clock.play(0.0);
    clock.advance(200.0);
    assert_eq!(clock.advance(-50.0).current_time, 200.0);
    assert_eq!(clock.advance(f64::NAN).current_time, 200.0);
    assert_eq!(clock.advance(f64::INFINITY).current_time, 200.0);
    assert!(clock.is_playing());
}

#[test]
fn invalid_duration_collapses_to_zero() {
    let mut clock = PlaybackClock::new(f64::NAN);
    assert_eq!(clock.duration(), 0.0);
    clock.play(0.0);
    let s = clock.advance(16.0);
    assert!(!s.is_playing);
    assert_eq!(s.current_time, 0.0);

    clock.set_duration(-10.0);
    assert_eq!(clock.duration(), 0.0);
}
