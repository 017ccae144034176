use crate::foundation::core::clamp;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PlaybackState {
    /// Time is frozen.
    #[default]
    Stopped,
    /// Time advances on every tick.
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// What the playhead indicator needs after each tick.
pub struct PlaybackStatus {
    pub current_time: f64,
    pub is_playing: bool,
}

/// Timeline cursor for play, pause and scrub.
///
/// Plays once: reaching `duration` rewinds to 0 and stops. Scrubbing always stops.
/// Timestamps are wall-clock milliseconds from whatever source drives the ticks.
#[derive(Clone, Debug)]
pub struct PlaybackClock {
    current_time: f64,
    state: PlaybackState,
    duration: f64,
    last_tick: Option<f64>,
}

impl PlaybackClock {
    /// Stopped at 0 on a timeline of `duration` ms.
    ///
    /// A negative or non-finite duration becomes 0, so playback ends on the first tick.
    pub fn new(duration: f64) -> Self {
        Self {
            current_time: 0.0,
            state: PlaybackState::Stopped,
            duration: timeline_length(duration),
            last_tick: None,
        }
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            current_time: self.current_time,
            is_playing: self.is_playing(),
        }
    }

    /// Start playing from the current time, or from 0 when parked at the end.
    pub fn play(&mut self, now: f64) {
        if self.current_time >= self.duration {
            self.current_time = 0.0;
        }
        self.state = PlaybackState::Playing;
        self.last_tick = Some(now);
        tracing::debug!(current_time = self.current_time, "play");
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Stopped;
        self.last_tick = None;
        tracing::debug!(current_time = self.current_time, "pause");
    }

    /// Play when stopped, pause when playing.
    pub fn toggle(&mut self, now: f64) {
        match self.state {
            PlaybackState::Stopped => self.play(now),
            PlaybackState::Playing => self.pause(),
        }
    }

    /// Jump to `time`, clamped into `[0, duration]`, and stop.
    pub fn scrub(&mut self, time: f64) {
        self.current_time = clamp(time, 0.0, self.duration);
        self.pause();
    }

    /// Change the timeline length, pulling the cursor back inside it.
    /// Non-finite or negative lengths become 0, as in [`PlaybackClock::new`].
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = timeline_length(duration);
        self.current_time = clamp(self.current_time, 0.0, self.duration);
    }

    /// Advance by the wall-clock time elapsed since the previous tick (or since `play`).
    /// No-op while stopped. A timestamp earlier than the previous one re-anchors the clock
    /// without moving the cursor; a non-finite one is ignored.
    pub fn tick(&mut self, now: f64) -> PlaybackStatus {
        if !self.is_playing() || !now.is_finite() {
            return self.status();
        }
        let delta = (now - self.last_tick.unwrap_or(now)).max(0.0);
        self.last_tick = Some(now);
        self.step(delta)
    }

    /// Advance by an explicit delta. No-op while stopped, or when `delta` is negative or
    /// not finite.
    pub fn advance(&mut self, delta: f64) -> PlaybackStatus {
        if !self.is_playing() || !delta.is_finite() || delta < 0.0 {
            return self.status();
        }
        if let Some(last) = self.last_tick.as_mut() {
            *last += delta;
        }
        self.step(delta)
    }

    fn step(&mut self, delta: f64) -> PlaybackStatus {
        self.current_time += delta;
        if self.current_time >= self.duration {
            self.current_time = 0.0;
            self.pause();
            tracing::debug!("reached end of timeline");
        }
        self.status()
    }
}

fn timeline_length(duration: f64) -> f64 {
    if duration.is_finite() && duration >= 0.0 {
        duration
    } else {
        tracing::warn!(duration, "invalid timeline length, using 0");
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
