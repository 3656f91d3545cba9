//! Scene clock providing monotonically increasing elapsed seconds

use std::time::Instant;

/// Longest frame the clock will accept before clamping (stall protection)
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Tracks scene time for per-frame updates.
///
/// Time only moves forward. `tick` follows the wall clock; `advance` steps by
/// an explicit delta so simulations and tests are reproducible.
pub struct SceneClock {
    /// Total elapsed scene time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Number of frames advanced so far
    pub frame_count: u64,
    /// Last tick instant (wall-clock mode only)
    last_instant: Option<Instant>,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_count: 0,
            last_instant: None,
        }
    }
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed scene seconds
    pub fn elapsed(&self) -> f64 {
        self.total_time
    }

    /// Advance the clock from the wall clock. Call once per frame.
    ///
    /// The first call establishes the reference instant and yields a zero delta.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = match self.last_instant {
            Some(last) => now.duration_since(last).as_secs_f64(),
            None => 0.0,
        };
        self.last_instant = Some(now);
        self.record(wall_delta(elapsed));
    }

    /// Advance by an explicit delta (negative deltas are ignored).
    ///
    /// Fixed steps are taken as given; only wall-clock ticks are clamped.
    pub fn advance(&mut self, dt: f64) {
        self.record(dt.max(0.0));
    }

    fn record(&mut self, dt: f64) {
        self.delta_time = dt;
        self.total_time += dt;
        self.frame_count += 1;
    }
}

/// Wall-clock delta after stall protection
fn wall_delta(elapsed: f64) -> f64 {
    elapsed.clamp(0.0, MAX_FRAME_TIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = SceneClock::new();
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame_count, 0);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = SceneClock::new();
        clock.tick();
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame_count, 1);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut clock = SceneClock::new();
        for _ in 0..60 {
            clock.advance(1.0 / 60.0);
        }
        assert!((clock.elapsed() - 1.0).abs() < 1e-9);
        assert_eq!(clock.frame_count, 60);
    }

    #[test]
    fn test_wall_clock_stall_is_clamped() {
        assert_eq!(wall_delta(5.0), MAX_FRAME_TIME);
        assert_eq!(wall_delta(0.01), 0.01);
        assert_eq!(wall_delta(-1.0), 0.0);
    }

    #[test]
    fn test_fixed_step_longer_than_stall_limit() {
        let mut clock = SceneClock::new();
        clock.advance(0.5);
        clock.advance(0.5);
        assert_eq!(clock.delta_time, 0.5);
        assert_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn test_time_never_goes_backwards() {
        let mut clock = SceneClock::new();
        clock.advance(1.0 / 30.0);
        let before = clock.elapsed();
        clock.advance(-1.0);
        assert_eq!(clock.elapsed(), before);
    }
}
