//! Heart silhouettes orbiting the bouquet

use crate::palette::pick_color;
use bouquet_core::{BlockSpec, Color, SceneNode, Transform, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Edge length of one heart cell
pub const HEART_BLOCK: f32 = 0.2;

/// Cell coordinates of the silhouette, in units of `HEART_BLOCK`
const HEART_CELLS: [(f32, f32); 9] = [
    (-1.0, 1.0),
    (-2.0, 0.0),
    (-1.0, -1.0),
    (1.0, 1.0),
    (2.0, 0.0),
    (1.0, -1.0),
    (0.0, -2.0),
    (-1.0, -3.0),
    (1.0, -3.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeartLayout {
    pub count: usize,
    /// Horizontal ring radius
    pub radius: f32,
    /// Vertical amplitude of the figure-eight
    pub height: f32,
    pub scale_min: f32,
    pub scale_max: f32,
}

impl Default for HeartLayout {
    fn default() -> Self {
        Self {
            count: 8,
            radius: 4.0,
            height: 3.0,
            scale_min: 0.3,
            scale_max: 0.5,
        }
    }
}

impl HeartLayout {
    /// Position of heart `i` on the ring
    pub fn orbit_point(&self, i: usize) -> Vec3 {
        let angle = i as f32 / self.count.max(1) as f32 * TAU;
        Vec3::new(
            angle.cos() * self.radius,
            (angle * 2.0).sin() * self.height,
            angle.sin() * self.radius,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeartSpec {
    pub position: Vec3,
    pub scale: Vec3,
    pub color: Color,
}

pub fn generate_hearts<R: Rng + ?Sized>(layout: &HeartLayout, rng: &mut R) -> Vec<HeartSpec> {
    (0..layout.count)
        .map(|i| HeartSpec {
            position: layout.orbit_point(i),
            scale: Vec3::splat(rng.random_range(layout.scale_min..=layout.scale_max)),
            color: pick_color(rng),
        })
        .collect()
}

impl HeartSpec {
    pub fn transform_at(&self, t: f32) -> Transform {
        Transform {
            position: Vec3::new(
                self.position.x,
                self.position.y + (t * 0.5).sin() * 0.1,
                self.position.z,
            ),
            rotation: Vec3::new(0.0, (t * 0.2).sin() * 0.1, 0.0),
            scale: self.scale,
        }
    }

    pub fn blocks(&self) -> Vec<BlockSpec> {
        HEART_CELLS
            .iter()
            .map(|&(x, y)| {
                BlockSpec::cube(
                    Vec3::new(x * HEART_BLOCK, y * HEART_BLOCK, 0.0),
                    HEART_BLOCK,
                    self.color,
                )
            })
            .collect()
    }

    pub fn node_at(&self, t: f32) -> SceneNode {
        SceneNode::new("heart", self.transform_at(t)).with_blocks(self.blocks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{in_palette, FLOWER_PALETTE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ring_positions_follow_figure_eight() {
        let layout = HeartLayout::default();
        let first = layout.orbit_point(0);
        assert!((first.x - 4.0).abs() < 1e-6);
        assert!(first.y.abs() < 1e-6);

        // 45° around: sin(90°) puts it at full height
        let second = layout.orbit_point(1);
        assert!((second.y - 3.0).abs() < 1e-5);
        assert!((second.horizontal_length() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn generated_hearts_respect_layout() {
        let layout = HeartLayout::default();
        let hearts = generate_hearts(&layout, &mut StdRng::seed_from_u64(3));
        assert_eq!(hearts.len(), 8);
        for (i, h) in hearts.iter().enumerate() {
            assert_eq!(h.position, layout.orbit_point(i));
            assert!(h.scale.x >= 0.3 && h.scale.x <= 0.5);
            assert!(in_palette(&h.color));
        }
    }

    #[test]
    fn silhouette_has_nine_cells() {
        let heart = HeartSpec {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            color: FLOWER_PALETTE[0],
        };
        let blocks = heart.blocks();
        assert_eq!(blocks.len(), 9);
        // Point of the heart is the lowest row
        let lowest = blocks.iter().map(|b| b.position.y).fold(f32::INFINITY, f32::min);
        assert!((lowest + 0.6).abs() < 1e-6);
    }

    #[test]
    fn bob_is_bounded_and_pure() {
        let heart = HeartSpec {
            position: Vec3::new(0.0, 1.5, 4.0),
            scale: Vec3::splat(0.4),
            color: FLOWER_PALETTE[0],
        };
        for step in 0..500 {
            let t = step as f32 * 0.113;
            let tr = heart.transform_at(t);
            assert_eq!(tr, heart.transform_at(t));
            let dy = tr.position.y - heart.position.y;
            assert!(dy.abs() <= 0.1 + 1e-6);
            assert!(tr.rotation.y.abs() <= 0.1 + 1e-6);
        }
    }
}
