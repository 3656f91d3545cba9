//! Frame system trait

use crate::clock::SceneClock;
use bouquet_core::Result;

/// Something ticked once per rendered frame
///
/// Updates receive the clock after it has advanced, so `clock.elapsed()` is
/// the timestamp of the frame about to be presented.
pub trait FrameSystem {
    /// Called once before the first update
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame
    fn update(&mut self, clock: &SceneClock) -> Result<()>;

    /// Called when the loop stops
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
