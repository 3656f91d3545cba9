//! Per-cuboid GPU instance data

use bouquet_core::WorldCuboid;
use bytemuck::{Pod, Zeroable};

/// GPU instance data for one cuboid, drawn as a transformed unit cube.
/// 96 bytes: model matrix, RGBA, material.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CuboidInstance {
    /// Column-major model matrix (size folded into scale)
    pub model: [[f32; 4]; 4],
    /// Color with opacity in alpha
    pub color: [f32; 4],
    /// x = roughness, y = metalness, z/w unused
    pub material: [f32; 4],
}

impl CuboidInstance {
    pub fn from_cuboid(c: &WorldCuboid) -> Self {
        Self {
            model: c.model,
            color: [c.color.r, c.color.g, c.color.b, c.opacity],
            material: [c.finish.roughness, c.finish.metalness, 0.0, 0.0],
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.color[3] < 1.0
    }
}

/// Instances split by blend requirement; opaque first, as they are drawn
#[derive(Default)]
pub struct InstanceBatches {
    pub opaque: Vec<CuboidInstance>,
    pub transparent: Vec<CuboidInstance>,
}

impl InstanceBatches {
    pub fn len(&self) -> usize {
        self.opaque.len() + self.transparent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw bytes of a batch for buffer upload
    pub fn bytes(batch: &[CuboidInstance]) -> &[u8] {
        bytemuck::cast_slice(batch)
    }
}

/// Pack flattened cuboids into opaque and transparent batches
pub fn pack_instances(cuboids: &[WorldCuboid]) -> InstanceBatches {
    let mut batches = InstanceBatches::default();
    for c in cuboids {
        let instance = CuboidInstance::from_cuboid(c);
        if instance.is_transparent() {
            batches.transparent.push(instance);
        } else {
            batches.opaque.push(instance);
        }
    }
    batches
}
