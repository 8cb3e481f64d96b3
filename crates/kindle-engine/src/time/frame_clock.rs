use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Index of this frame, starting at zero.
    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots and a periodic frame-rate sample.
///
/// Delta time is clamped so a debugger pause or a stalled present does not
/// report a multi-second frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,

    rate_window: Duration,
    window_start: Instant,
    window_frames: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
            rate_window: Duration::from_secs(1),
            window_start: now,
            window_frames: 0,
        }
    }

    /// Number of frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        self.window_frames = self.window_frames.saturating_add(1);
        ft
    }

    /// Returns frames per second once per sampling window, `None` otherwise.
    ///
    /// The window restarts every time a sample is returned.
    pub fn take_rate(&mut self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.rate_window || self.window_frames == 0 {
            return None;
        }

        let fps = self.window_frames as f32 / elapsed.as_secs_f32();
        self.window_start = now;
        self.window_frames = 0;
        Some(fps)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn dt_is_clamped_to_max_after_stall() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(50));
        let later = clock.last + Duration::from_secs(3);
        let ft = clock.tick_at(later);
        assert!((ft.dt - 0.05).abs() < 1e-6);
    }

    #[test]
    fn dt_is_clamped_to_min_for_back_to_back_ticks() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(50));
        let at = clock.last;
        let ft = clock.tick_at(at);
        assert!((ft.dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn rate_is_sampled_once_per_window() {
        let mut clock = FrameClock::new();
        let start = clock.window_start;
        for i in 1..=60 {
            clock.tick_at(start + Duration::from_millis(i * 16));
        }

        assert!(clock.take_rate(start + Duration::from_millis(500)).is_none());

        let fps = clock
            .take_rate(start + Duration::from_secs(2))
            .expect("window elapsed");
        assert!((fps - 30.0).abs() < 0.01);

        // Window restarted with no frames in it.
        assert!(clock.take_rate(start + Duration::from_secs(4)).is_none());
    }
}
