//! Bouquet Runtime - Frame loop infrastructure
//!
//! Provides the per-frame building blocks:
//! - `SceneClock` - monotonic elapsed seconds, wall-clock or fixed stepping
//! - `FrameSystem` - trait for systems ticked once per frame
//! - `FrameLoop` - runs a system against the clock

mod clock;
mod frame_loop;
mod system;

pub use clock::{SceneClock, MAX_FRAME_TIME};
pub use frame_loop::FrameLoop;
pub use system::FrameSystem;
