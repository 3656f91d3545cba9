//! Tapered ring vase with a filled disc base

use crate::palette::{VASE_BASE, VASE_HIGHLIGHT, VASE_MAIN, VASE_PATTERN};
use bouquet_core::{BlockSpec, Color, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaseLayout {
    /// Ring layers, top to bottom
    pub layers: usize,
    /// Ring radius of the top layer, in block units
    pub radius: f32,
    /// Radius lost per layer, in block units
    pub taper: f32,
    pub blocks_per_layer: usize,
    /// Block edge length; also the lattice spacing of the base
    pub block_size: f32,
    /// Height of the top layer
    pub top: f32,
    /// Disc radius of the base, in lattice cells
    pub base_radius: f32,
    /// The base lattice spans `[-base_extent, base_extent]` on x and z
    pub base_extent: i32,
}

impl Default for VaseLayout {
    fn default() -> Self {
        Self {
            layers: 5,
            radius: 2.5,
            taper: 0.4,
            blocks_per_layer: 12,
            block_size: 0.3,
            top: -2.0,
            base_radius: 2.5,
            base_extent: 2,
        }
    }
}

impl VaseLayout {
    /// Height of ring layer `y` (the layer after the last one is the base)
    pub fn layer_height(&self, y: usize) -> f32 {
        self.top - y as f32 * self.block_size
    }

    /// Color of block `i` on layer `y`
    pub fn ring_color(&self, y: usize, i: usize) -> Color {
        if y % 2 == 0 && i % 4 == 0 {
            VASE_HIGHLIGHT
        } else if i % 3 == 0 {
            VASE_PATTERN
        } else {
            VASE_MAIN
        }
    }

    pub fn ring_blocks(&self) -> Vec<BlockSpec> {
        let mut blocks = Vec::with_capacity(self.layers * self.blocks_per_layer);
        for y in 0..self.layers {
            let radius = (self.radius - y as f32 * self.taper) * self.block_size;
            for i in 0..self.blocks_per_layer {
                let angle = i as f32 / self.blocks_per_layer as f32 * TAU;
                blocks.push(BlockSpec::cube(
                    Vec3::new(angle.cos() * radius, self.layer_height(y), angle.sin() * radius),
                    self.block_size,
                    self.ring_color(y, i),
                ));
            }
        }
        blocks
    }

    pub fn base_blocks(&self) -> Vec<BlockSpec> {
        let height = self.layer_height(self.layers);
        disc_cells(self.base_extent, self.base_radius)
            .map(|(x, z)| {
                BlockSpec::cube(
                    Vec3::new(x as f32 * self.block_size, height, z as f32 * self.block_size),
                    self.block_size,
                    VASE_BASE,
                )
            })
            .collect()
    }

    /// Ring layers followed by the base disc
    pub fn blocks(&self) -> Vec<BlockSpec> {
        let mut blocks = self.ring_blocks();
        blocks.extend(self.base_blocks());
        blocks
    }
}

/// Integer lattice points of `[-extent, extent]²` inside a disc of `radius`
pub fn disc_cells(extent: i32, radius: f32) -> impl Iterator<Item = (i32, i32)> {
    (-extent..=extent).flat_map(move |x| {
        (-extent..=extent).filter_map(move |z| {
            let d = ((x * x + z * z) as f32).sqrt();
            (d <= radius).then_some((x, z))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_ring_blocks_in_five_layers() {
        let vase = VaseLayout::default();
        let rings = vase.ring_blocks();
        assert_eq!(rings.len(), 60);

        for (y, layer) in rings.chunks(12).enumerate() {
            let expected_r = (2.5 - y as f32 * 0.4) * 0.3;
            for b in layer {
                assert!((b.position.horizontal_length() - expected_r).abs() < 1e-5);
                assert!((b.position.y - (-2.0 - y as f32 * 0.3)).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn base_disc_counts_lattice_points() {
        let vase = VaseLayout::default();
        let expected = (-2..=2)
            .flat_map(|x: i32| (-2..=2).map(move |z: i32| (x, z)))
            .filter(|(x, z)| ((x * x + z * z) as f32).sqrt() <= 2.5)
            .count();
        // Only the four corners fall outside
        assert_eq!(expected, 21);

        let base = vase.base_blocks();
        assert_eq!(base.len(), expected);
        assert!(base.iter().all(|b| b.color == VASE_BASE));
        assert!(base.iter().all(|b| (b.position.y + 3.5).abs() < 1e-5));
        assert_eq!(vase.blocks().len(), 81);
    }

    #[test]
    fn highlight_overrides_pattern() {
        let vase = VaseLayout::default();
        // i = 0 is a multiple of both 3 and 4
        assert_eq!(vase.ring_color(0, 0), VASE_HIGHLIGHT);
        assert_eq!(vase.ring_color(1, 0), VASE_PATTERN);
        assert_eq!(vase.ring_color(2, 4), VASE_HIGHLIGHT);
        assert_eq!(vase.ring_color(1, 4), VASE_MAIN);
        assert_eq!(vase.ring_color(3, 9), VASE_PATTERN);
        assert_eq!(vase.ring_color(0, 1), VASE_MAIN);
    }
}
