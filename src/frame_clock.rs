use std::time::Instant;

/// How fast the weighted delta chases the instantaneous delta.
const WEIGHT_RATIO: f64 = 0.01;

/// Assumed frame rate before any measurement exists.
const STARTUP_FPS: f64 = 30.0;

/// Per-frame timing measured by the clock.
#[derive(Clone, Copy, Debug)]
pub struct FrameSample {
    pub delta_ms: f64,
    pub fps: u32,
}

/// Measures frame-to-frame delta time and derives a smoothed FPS estimate.
/// The repaint loop itself is owned by the caller; this only keeps time, so
/// the adaptive star-count controller sees a stable rate instead of jitter.
pub struct FrameClock {
    prev: Instant,
    weighted_delta_ms: f64,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            prev: now,
            weighted_delta_ms: 1000.0 / STARTUP_FPS,
        }
    }

    pub fn tick(&mut self, now: Instant) -> FrameSample {
        let delta_ms = now.duration_since(self.prev).as_secs_f64() * 1000.0;

        self.weighted_delta_ms =
            self.weighted_delta_ms * (1.0 - WEIGHT_RATIO) + delta_ms * WEIGHT_RATIO;

        let fps = (1000.0 / self.weighted_delta_ms).floor() as u32;

        self.prev = now;
        FrameSample { delta_ms, fps }
    }

    /// Drop the interval since the last tick, so time spent paused is not
    /// absorbed into the weighted delta as one giant frame.
    pub fn resync(&mut self, now: Instant) {
        self.prev = now;
    }

    pub fn weighted_delta_ms(&self) -> f64 {
        self.weighted_delta_ms
    }
}
