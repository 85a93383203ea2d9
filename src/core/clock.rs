use std::time::Instant;

/// Longest frame the camera is allowed to integrate in one step
pub const MAX_FRAME_SECONDS: f32 = 0.25;

/// Frame clock feeding `elapsed` into camera updates
///
/// Deltas are capped so a stalled frame (window drag, breakpoint) does not
/// throw the camera across the level.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_delta: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self::with_max_delta(MAX_FRAME_SECONDS)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta,
        }
    }

    /// Seconds since the previous tick, capped at the max delta
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta.min(self.max_delta)
    }

    /// Restart timing from now, e.g. after focus returns
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Fires once per `interval` seconds of accumulated frame time
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    interval: f32,
    accumulator: f32,
}

impl Interval {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            true
        } else {
            false
        }
    }
}
