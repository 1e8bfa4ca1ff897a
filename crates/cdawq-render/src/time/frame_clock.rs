use std::time::{Duration, Instant};

const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

/// Snapshot produced by [`FrameClock::tick`].
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Seconds accumulated from clamped deltas since the clock started.
    pub elapsed: f64,

    /// Zero-based index of this frame within its window.
    pub frame_index: u64,
}

/// Per-window frame clock.
///
/// Deltas are clamped so a window that was dragged, minimized or paused in a
/// debugger does not report a multi-second frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    elapsed: f64,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(DEFAULT_DT_MIN, DEFAULT_DT_MAX)
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            elapsed: 0.0,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Number of ticks taken so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        self.tick_at(now)
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;
        self.elapsed += dt.as_secs_f64();

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
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
    fn frame_index_starts_at_zero_and_counts_up() {
        let mut clock = FrameClock::new();
        let base = clock.last;
        let a = clock.tick_at(base + Duration::from_millis(16));
        let b = clock.tick_at(base + Duration::from_millis(32));
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn long_stall_is_clamped_to_max() {
        let mut clock = FrameClock::new();
        let base = clock.last;
        let ft = clock.tick_at(base + Duration::from_secs(5));
        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert!((ft.elapsed - 0.25).abs() < 1e-9);
    }

    #[test]
    fn zero_delta_is_raised_to_min() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(100));
        let base = clock.last;
        let ft = clock.tick_at(base);
        assert!((ft.dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn elapsed_accumulates_clamped_deltas() {
        let mut clock = FrameClock::new();
        let base = clock.last;
        clock.tick_at(base + Duration::from_millis(10));
        let ft = clock.tick_at(base + Duration::from_millis(30));
        assert!((ft.elapsed - 0.030).abs() < 1e-6);
    }
}
