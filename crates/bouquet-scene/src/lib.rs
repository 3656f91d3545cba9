//! Bouquet Scene - procedural layout of the voxel flower arrangement
//!
//! Placement is sampled once from an injected random source. Every
//! per-frame transform is then a pure function of scene time and the
//! immutable specs; only the particle emitters carry state between frames.

pub mod arrangement;
pub mod config;
pub mod flower;
pub mod heart;
pub mod palette;
pub mod vase;
pub mod water;

pub use arrangement::{ArrangementSummary, FlowerArrangement};
pub use config::ArrangementConfig;
pub use flower::{generate_flowers, FlowerKind, FlowerLayout, FlowerSpec};
pub use heart::{generate_hearts, HeartLayout, HeartSpec};
pub use vase::VaseLayout;
pub use water::{WaterLayout, WaterSurface};
