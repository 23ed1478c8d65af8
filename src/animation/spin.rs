use std::time::{Duration, Instant};

/// Time for one full turn while playing.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(8000);

const FULL_TURN: f64 = 360.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SpinState {
    Paused,
    Playing { since: Instant },
}

/// Linear, endlessly repeating rotation that can be frozen and resumed.
///
/// The angle is in degrees and is never wrapped: after two full periods of
/// playing from zero it reads 720.
#[derive(Clone, Debug)]
pub struct Spin {
    period: Duration,
    state: SpinState,
    baseline: f64,
}

impl Spin {
    /// A paused spin at angle 0. A zero `period` is clamped to 1 ms.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            state: SpinState::Paused,
            baseline: 0.0,
        }
    }

    #[cfg(test)]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[cfg(test)]
    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, SpinState::Playing { .. })
    }

    /// Angle in degrees as it should be displayed at `now`.
    pub fn angle_at(&self, now: Instant) -> f64 {
        match self.state {
            SpinState::Paused => self.baseline,
            SpinState::Playing { since } => {
                let elapsed = now.saturating_duration_since(since).as_secs_f64();
                self.baseline + FULL_TURN * elapsed / self.period.as_secs_f64()
            }
        }
    }

    /// Start spinning from the current baseline. No-op while playing.
    pub fn play(&mut self, now: Instant) {
        if !self.is_playing() {
            self.state = SpinState::Playing { since: now };
        }
    }

    /// Freeze at the angle reached at `now`, which becomes the new baseline.
    pub fn pause(&mut self, now: Instant) {
        if self.is_playing() {
            self.baseline = self.angle_at(now);
            self.state = SpinState::Paused;
        }
    }

    /// Flip between playing and paused; returns the angle at `now` after
    /// the transition.
    pub fn toggle(&mut self, now: Instant) -> f64 {
        if self.is_playing() {
            self.pause(now);
        } else {
            self.play(now);
        }
        self.angle_at(now)
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}
