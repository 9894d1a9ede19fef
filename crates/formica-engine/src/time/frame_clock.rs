use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// One clock per loop. Delta time is clamped so a debugger pause or a minimized
/// window does not produce pathological values.
///
/// With a target rate set, `remaining_budget` tells the host how long to sleep
/// before the next frame; the clock itself never sleeps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
    frame_budget: Option<Duration>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
            frame_budget: None,
        }
    }

    /// Caps the loop at `fps` frames per second. Zero removes the cap.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.frame_budget = (fps > 0).then(|| Duration::from_secs(1) / fps);
        self
    }

    pub fn frame_budget(&self) -> Option<Duration> {
        self.frame_budget
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Resets the baseline, e.g. when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
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

        ft
    }

    /// Time left in the current frame's budget, measured from the last tick.
    ///
    /// `Duration::ZERO` once the budget is spent; `None` without a target rate.
    pub fn remaining_budget(&self) -> Option<Duration> {
        self.remaining_budget_at(Instant::now())
    }

    fn remaining_budget_at(&self, now: Instant) -> Option<Duration> {
        let budget = self.frame_budget?;
        Some(budget.saturating_sub(now.saturating_duration_since(self.last)))
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
    fn ticks_count_frames_and_clamp_dt() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(5), Duration::from_millis(10));
        let first = clock.tick();
        let second = clock.tick();

        assert_eq!(first.frame_index, 0);
        assert_eq!(second.frame_index, 1);
        assert_eq!(clock.frame_index(), 2);
        assert!(second.dt >= 0.005 - 1e-6 && second.dt <= 0.010 + 1e-6);
    }

    #[test]
    fn sixty_fps_budget() {
        let clock = FrameClock::new().with_target_fps(60);
        let budget = clock.frame_budget().unwrap();
        assert_eq!(budget, Duration::from_secs(1) / 60);

        let fresh = clock.remaining_budget_at(clock.last).unwrap();
        assert_eq!(fresh, budget);

        let late = clock.remaining_budget_at(clock.last + Duration::from_millis(40)).unwrap();
        assert_eq!(late, Duration::ZERO);
    }

    #[test]
    fn zero_fps_means_uncapped() {
        let clock = FrameClock::new().with_target_fps(0);
        assert!(clock.frame_budget().is_none());
        assert!(clock.remaining_budget().is_none());
    }
}
