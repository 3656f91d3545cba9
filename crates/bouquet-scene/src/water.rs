//! Translucent water surface inside the vase

use crate::palette::WATER_BLUE;
use crate::vase::disc_cells;
use bouquet_core::{BlockSpec, Finish, SceneNode, Transform, Vec3};
use serde::{Deserialize, Serialize};

pub const WATER_OPACITY: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterLayout {
    /// Resting height of the surface
    pub level: f32,
    /// Disc radius, in lattice cells
    pub radius: f32,
    /// The lattice spans `[-extent, extent]` on x and z
    pub extent: i32,
}

impl Default for WaterLayout {
    fn default() -> Self {
        Self {
            level: -2.5,
            radius: 2.2,
            extent: 2,
        }
    }
}

/// Flattened blocks sharing one sinusoidal ripple
#[derive(Clone, Debug)]
pub struct WaterSurface {
    pub level: f32,
    pub blocks: Vec<BlockSpec>,
}

impl WaterSurface {
    /// Lay the surface out on a lattice of `cell`-sized blocks
    pub fn new(layout: &WaterLayout, cell: f32) -> Self {
        let size = Vec3::new(cell, cell * 0.5, cell);
        let blocks = disc_cells(layout.extent, layout.radius)
            .map(|(x, z)| {
                BlockSpec::new(
                    Vec3::new(x as f32 * cell, layout.level, z as f32 * cell),
                    size,
                    WATER_BLUE,
                )
                .with_finish(Finish::WATER)
                .with_opacity(WATER_OPACITY)
            })
            .collect();
        Self {
            level: layout.level,
            blocks,
        }
    }

    /// Vertical ripple at scene time `t`
    pub fn offset_at(t: f32) -> f32 {
        (t * 2.0).sin() * 0.02
    }

    pub fn node_at(&self, t: f32) -> SceneNode {
        let transform = Transform::from_position(Vec3::new(0.0, Self::offset_at(t), 0.0));
        SceneNode::new("water", transform).with_blocks(self.blocks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_translucent_blocks_at_level() {
        let surface = WaterSurface::new(&WaterLayout::default(), 0.3);
        assert_eq!(surface.blocks.len(), 13);
        for b in &surface.blocks {
            assert!((b.position.y + 2.5).abs() < 1e-6);
            assert!((b.size.y - 0.15).abs() < 1e-6);
            assert!(b.is_transparent());
            assert_eq!(b.finish, Finish::WATER);
        }
    }

    #[test]
    fn ripple_is_bounded_and_periodic() {
        let period = std::f32::consts::PI;
        for step in 0..400 {
            let t = step as f32 * 0.05;
            let o = WaterSurface::offset_at(t);
            assert!(o.abs() <= 0.02 + 1e-7);
            assert!((o - WaterSurface::offset_at(t + period)).abs() < 1e-4);
        }
    }

    #[test]
    fn node_moves_blocks_by_ripple() {
        let surface = WaterSurface::new(&WaterLayout::default(), 0.3);
        let t = 0.7;
        let cuboids = surface.node_at(t).flatten();
        let expected = -2.5 + WaterSurface::offset_at(t);
        assert!(cuboids.iter().all(|c| (c.center().y - expected).abs() < 1e-5));
    }
}
