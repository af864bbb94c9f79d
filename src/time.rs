//! Frame clock for effect timing.
//!
//! `draw_web()` runs at roughly 60fps with a variable delta. `FrameClock`
//! turns successive wall-clock timestamps into the elapsed milliseconds that
//! drive the page fade-in, clamped so a backgrounded tab does not skip the
//! whole effect in one frame.

/// Largest delta handed to effects in one frame.
const MAX_FRAME_MS: f64 = 100.0;

pub struct FrameClock {
    /// Timestamp of the previous frame (ms), `None` before the first frame.
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_timestamp: None,
        }
    }

    /// Feed the current timestamp (from `Date.now()` or similar) and get the
    /// milliseconds elapsed since the previous frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);
        delta as u32
    }
}
