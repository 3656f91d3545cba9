//! Bouquet Core - Foundational types for the voxel bouquet
//!
//! This crate provides the core types that all other bouquet crates depend on:
//! - `Transform`, `Vec3`, `Color` - Spatial types
//! - `BlockSpec`, `Finish` - The cuboid primitive everything is built from
//! - `SceneNode` - Group hierarchy flattened to world-space cuboids
//! - Error types and Result alias

mod block;
mod error;
mod node;
mod types;

pub use block::{BlockSpec, Finish};
pub use error::{BouquetError, Result};
pub use node::{SceneNode, WorldCuboid};
pub use types::{mat4_mul, mat4_transform_point, Color, Transform, Vec3};
