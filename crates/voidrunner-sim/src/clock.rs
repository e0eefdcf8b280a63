//! Frame timing.
//!
//! The host decides when a frame runs; the engine only needs to know how
//! much time passed since the previous one. `FrameClock` abstracts that so
//! tests can drive the engine with a synthetic clock.

use std::time::{Duration, Instant};

use voidrunner_core::constants::{MAX_FRAME_SCALE, REFERENCE_FRAME_RATE};

/// Nominal duration of one frame at the reference frame rate.
pub const REFERENCE_FRAME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Source of per-frame elapsed time.
pub trait FrameClock {
    /// Time elapsed since the previous call.
    fn next_dt(&mut self) -> Duration;
}

/// Deterministic clock returning the same interval every frame.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub interval: Duration,
}

impl FixedClock {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// A clock ticking at `hz` frames per second.
    pub fn from_hz(hz: u32) -> Self {
        Self::new(Duration::from_nanos(1_000_000_000 / hz.max(1) as u64))
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(REFERENCE_FRAME)
    }
}

impl FrameClock for FixedClock {
    fn next_dt(&mut self) -> Duration {
        self.interval
    }
}

/// Wall-clock timer. The first call reports one reference frame.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: Option<Instant>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for SystemClock {
    fn next_dt(&mut self) -> Duration {
        let now = Instant::now();
        let dt = match self.last {
            Some(last) => now - last,
            None => REFERENCE_FRAME,
        };
        self.last = Some(now);
        dt
    }
}

/// Convert elapsed time into reference frames (1.0 at 60 Hz).
///
/// Clamped to [0, MAX_FRAME_SCALE] so a long stall does not turn into one
/// enormous integration step.
pub fn frame_scale(dt: Duration) -> f64 {
    (dt.as_secs_f64() * REFERENCE_FRAME_RATE).clamp(0.0, MAX_FRAME_SCALE)
}

/// Apply a per-frame retention factor over `scale` frames.
pub fn decay(factor: f64, scale: f64) -> f64 {
    factor.powf(scale)
}
