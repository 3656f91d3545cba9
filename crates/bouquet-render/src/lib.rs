//! Bouquet Render - host-facing output for the voxel bouquet
//!
//! The bouquet does not own a GPU surface. This crate turns flattened
//! cuboids into what a host renderer consumes:
//! - `Camera` - orbit camera with distance/polar clamps and damping
//! - `CuboidInstance` - packed per-instance data over a shared unit cube
//! - `write_obj` - offline export of one frame

pub mod camera;
pub mod export;
pub mod instance;
pub mod primitives;

pub use camera::{Camera, OrbitLimits};
pub use export::write_obj;
pub use instance::{pack_instances, CuboidInstance, InstanceBatches};
pub use primitives::{unit_cube_mesh, Mesh, Vertex};
