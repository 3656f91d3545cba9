//! Bouquet Particles - pooled cuboid sparkle emitters
//!
//! Provides per-emitter particle simulation with:
//! - Probabilistic single-particle emission at a fixed anchor
//! - Per-tick velocity integration with constant gravity
//! - Linear opacity fade over a fixed lifetime
//! - Swap-remove fixed-capacity pool, spawns past capacity are dropped and counted

pub mod curves;
pub mod emitter;
pub mod particle;
pub mod system;

pub use emitter::EmitterConfig;
pub use particle::{Particle, ParticlePool};
pub use system::ParticleSystem;
