use super::*;

#[test]
fn manual_source_plays_once_to_the_end() {
    let mut clock = PlaybackClock::new(1000.0);
    let mut source = ManualTimeSource::new(100.0).unwrap();
    let mut seen = Vec::new();
    let ticks = drive(&mut clock, &mut source, |s| {
        seen.push(s.current_time);
        ControlFlow::Continue(())
    });
    assert_eq!(ticks, 10);
    assert_eq!(
        seen,
        vec![100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 0.0]
    );
    assert!(!clock.is_playing());
    assert_eq!(clock.current_time(), 0.0);
}

#[test]
fn break_pauses_mid_timeline() {
    let mut clock = PlaybackClock::new(1000.0);
    let mut source = ManualTimeSource::new(250.0).unwrap();
    let ticks = drive(&mut clock, &mut source, |s| {
        if s.current_time >= 500.0 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(ticks, 2);
    assert!(!clock.is_playing());
    assert_eq!(clock.current_time(), 500.0);
}

#[test]
fn at_fps_derives_step() {
    let mut src = ManualTimeSource::at_fps(50);
    src.wait_frame();
    assert_eq!(src.now_ms(), 20.0);
}

#[test]
fn system_source_is_monotonic() {
    let mut src = SystemTimeSource::new(1000);
    let a = src.now_ms();
    src.wait_frame();
    assert!(src.now_ms() >= a);
}

#[test]
fn manual_source_rejects_non_advancing_step() {
    assert!(ManualTimeSource::new(0.0).is_err());
    assert!(ManualTimeSource::new(-5.0).is_err());
    assert!(ManualTimeSource::new(f64::NAN).is_err());
}

#[test]
fn nan_duration_playback_terminates() {
    let mut clock = PlaybackClock::new(f64::NAN);
    let mut source = ManualTimeSource::at_fps(30);
    let ticks = drive(&mut clock, &mut source, |_| ControlFlow::Continue(()));
    assert_eq!(ticks, 1);
    assert!(!clock.is_playing());
}
