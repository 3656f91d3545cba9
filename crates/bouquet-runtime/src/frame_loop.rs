//! Drives a frame system from a scene clock

use crate::clock::SceneClock;
use crate::system::FrameSystem;
use bouquet_core::{BouquetError, Result};
use tracing::debug;

/// Owns the clock and runs the initialize / update / shutdown sequence
pub struct FrameLoop {
    clock: SceneClock,
    initialized: bool,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            clock: SceneClock::new(),
            initialized: false,
        }
    }

    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }

    /// Advance by `dt` seconds and update the system
    pub fn step<S: FrameSystem + ?Sized>(&mut self, system: &mut S, dt: f64) -> Result<()> {
        self.ensure_initialized(system)?;
        self.clock.advance(dt);
        system.update(&self.clock)
    }

    /// Advance from the wall clock and update the system
    pub fn step_realtime<S: FrameSystem + ?Sized>(&mut self, system: &mut S) -> Result<()> {
        self.ensure_initialized(system)?;
        self.clock.tick();
        system.update(&self.clock)
    }

    /// Run `frames` fixed steps at `hz`, calling `on_frame` after each update
    pub fn run_fixed<S, F>(&mut self, system: &mut S, hz: f64, frames: u64, mut on_frame: F) -> Result<()>
    where
        S: FrameSystem + ?Sized,
        F: FnMut(&SceneClock, &S) -> Result<()>,
    {
        if !(hz.is_finite() && hz > 0.0) {
            return Err(BouquetError::out_of_range("hz", f64::MIN_POSITIVE, f64::MAX, hz));
        }
        let dt = 1.0 / hz;
        for _ in 0..frames {
            self.step(&mut *system, dt)?;
            on_frame(&self.clock, &*system)?;
        }
        Ok(())
    }

    /// Shut the system down if it was started
    pub fn finish<S: FrameSystem + ?Sized>(&mut self, system: &mut S) -> Result<()> {
        if self.initialized {
            self.initialized = false;
            debug!(target: "runtime", system = system.name(), frames = self.clock.frame_count, "shutting down");
            system.shutdown()?;
        }
        Ok(())
    }

    fn ensure_initialized<S: FrameSystem + ?Sized>(&mut self, system: &mut S) -> Result<()> {
        if !self.initialized {
            debug!(target: "runtime", system = system.name(), "initializing");
            system.initialize()?;
            self.initialized = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MAX_FRAME_TIME;

    #[derive(Default)]
    struct Recorder {
        inits: u32,
        shutdowns: u32,
        seen: Vec<f64>,
    }

    impl FrameSystem for Recorder {
        fn initialize(&mut self) -> Result<()> {
            self.inits += 1;
            Ok(())
        }

        fn update(&mut self, clock: &SceneClock) -> Result<()> {
            self.seen.push(clock.elapsed());
            Ok(())
        }

        fn shutdown(&mut self) -> Result<()> {
            self.shutdowns += 1;
            Ok(())
        }

        fn name(&self) -> &str {
            "recorder"
        }
    }

    #[test]
    fn initializes_once_and_sees_advanced_clock() {
        let mut frame_loop = FrameLoop::new();
        let mut rec = Recorder::default();

        frame_loop.step(&mut rec, 0.125).unwrap();
        frame_loop.step(&mut rec, 0.0625).unwrap();

        assert_eq!(rec.inits, 1);
        assert_eq!(rec.seen, vec![0.125, 0.1875]);
    }

    #[test]
    fn run_fixed_reports_every_frame() {
        let mut frame_loop = FrameLoop::new();
        let mut rec = Recorder::default();
        let mut frames = 0;

        frame_loop
            .run_fixed(&mut rec, 60.0, 120, |clock, _| {
                frames += 1;
                assert_eq!(clock.frame_count, frames);
                Ok(())
            })
            .unwrap();

        assert_eq!(frames, 120);
        assert!((frame_loop.clock().elapsed() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn run_fixed_at_low_rate_keeps_full_duration() {
        let mut frame_loop = FrameLoop::new();
        let mut rec = Recorder::default();
        frame_loop.run_fixed(&mut rec, 2.0, 20, |_, _| Ok(())).unwrap();

        assert_eq!(frame_loop.clock().elapsed(), 10.0);
        assert_eq!(rec.seen.first(), Some(&0.5));
        assert_eq!(rec.seen.len(), 20);
    }

    #[test]
    fn realtime_step_starts_at_zero() {
        let mut frame_loop = FrameLoop::new();
        let mut rec = Recorder::default();

        frame_loop.step_realtime(&mut rec).unwrap();
        frame_loop.step_realtime(&mut rec).unwrap();

        assert_eq!(rec.inits, 1);
        assert_eq!(rec.seen[0], 0.0);
        assert!(rec.seen[1] >= rec.seen[0]);
        assert!(rec.seen[1] <= MAX_FRAME_TIME);
        assert_eq!(frame_loop.clock().frame_count, 2);
    }

    #[test]
    fn run_fixed_rejects_bad_rate() {
        let mut frame_loop = FrameLoop::new();
        let mut rec = Recorder::default();
        assert!(frame_loop.run_fixed(&mut rec, 0.0, 1, |_, _| Ok(())).is_err());
        assert_eq!(rec.inits, 0);
    }

    #[test]
    fn finish_only_after_start() {
        let mut frame_loop = FrameLoop::new();
        let mut rec = Recorder::default();
        frame_loop.finish(&mut rec).unwrap();
        assert_eq!(rec.shutdowns, 0);

        frame_loop.step(&mut rec, 0.1).unwrap();
        frame_loop.finish(&mut rec).unwrap();
        frame_loop.finish(&mut rec).unwrap();
        assert_eq!(rec.shutdowns, 1);
    }
}
