use std::{
    ops::ControlFlow,
    time::{Duration, Instant},
};

use crate::{
    foundation::error::{MotionError, MotionResult},
    playback::clock::{PlaybackClock, PlaybackStatus},
};

/// Where tick timestamps come from, and how the loop waits for the next frame.
pub trait TimeSource {
    /// Current wall-clock time in milliseconds.
    fn now_ms(&mut self) -> f64;

    /// Block (or pretend to) until the next frame is due.
    fn wait_frame(&mut self) {}
}

/// Monotonic system clock paced at a fixed frame rate.
#[derive(Debug)]
pub struct SystemTimeSource {
    origin: Instant,
    frame: Duration,
}

impl SystemTimeSource {
    pub fn new(fps: u32) -> Self {
        Self {
            origin: Instant::now(),
            frame: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn wait_frame(&mut self) {
        std::thread::sleep(self.frame);
    }
}

/// Deterministic source that moves forward by a fixed step per frame.
#[derive(Clone, Copy, Debug)]
pub struct ManualTimeSource {
    now: f64,
    step: f64,
}

impl ManualTimeSource {
    /// `step_ms` must be finite and > 0.
    pub fn new(step_ms: f64) -> MotionResult<Self> {
        if !step_ms.is_finite() || step_ms <= 0.0 {
            return Err(MotionError::validation("time step must be finite and > 0"));
        }
        Ok(Self {
            now: 0.0,
            step: step_ms,
        })
    }

    /// Step matching `fps` frames per second.
    pub fn at_fps(fps: u32) -> Self {
        Self {
            now: 0.0,
            step: 1000.0 / f64::from(fps.max(1)),
        }
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ms(&mut self) -> f64 {
        self.now
    }

    fn wait_frame(&mut self) {
        self.now += self.step;
    }
}

/// Start `clock` and tick it once per frame until it stops on its own or `on_frame`
/// breaks (which pauses it). Returns the number of ticks delivered.
#[tracing::instrument(skip_all)]
pub fn drive<S, F>(clock: &mut PlaybackClock, source: &mut S, mut on_frame: F) -> u64
where
    S: TimeSource + ?Sized,
    F: FnMut(PlaybackStatus) -> ControlFlow<()>,
{
    clock.play(source.now_ms());
    let mut ticks = 0u64;
    while clock.is_playing() {
        source.wait_frame();
        let status = clock.tick(source.now_ms());
        ticks += 1;
        if on_frame(status).is_break() {
            clock.pause();
            break;
        }
    }
    tracing::debug!(ticks, "playback loop finished");
    ticks
}

#[cfg(test)]
#[path = "../../tests/unit/playback/driver.rs"]
mod tests;
