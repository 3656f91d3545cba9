//! Flower archetypes, spiral placement and sway

use crate::palette::{pick_color, CENTER_YELLOW, DAISY_WHITE, STEM_GREEN};
use bouquet_core::{BlockSpec, Color, SceneNode, Transform, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_4, PI, TAU};

/// Edge length of one petal cell
pub const PETAL_BLOCK: f32 = 0.2;

/// Max base tilt about X and Z, radians either side of zero
const TILT_RANGE: f32 = 0.2;
/// Max base yaw, radians either side of zero
const YAW_RANGE: f32 = 0.75 * PI;

/// One of the fixed petal layouts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerKind {
    Rose,
    Daisy,
    Tulip,
}

impl FlowerKind {
    pub const ALL: [FlowerKind; 3] = [FlowerKind::Rose, FlowerKind::Daisy, FlowerKind::Tulip];

    pub fn name(&self) -> &'static str {
        match self {
            FlowerKind::Rose => "rose",
            FlowerKind::Daisy => "daisy",
            FlowerKind::Tulip => "tulip",
        }
    }

    pub fn petal_count(&self) -> usize {
        match self {
            FlowerKind::Rose => 8,
            FlowerKind::Daisy => 12,
            FlowerKind::Tulip => 6,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Placement parameters for the flower spiral
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowerLayout {
    pub count: usize,
    /// Spiral radius reached by the last flower
    pub base_radius: f32,
    /// Height gained from first to last flower
    pub height_range: f32,
    /// Full width of the per-axis jitter window
    pub jitter: f32,
    /// Added to every flower's height
    pub vertical_offset: f32,
    pub scale_min: f32,
    pub scale_max: f32,
}

impl Default for FlowerLayout {
    fn default() -> Self {
        Self {
            count: 25,
            base_radius: 0.5,
            height_range: 2.5,
            jitter: 0.15,
            vertical_offset: -1.8,
            scale_min: 0.4,
            scale_max: 0.6,
        }
    }
}

impl FlowerLayout {
    /// Radius factor `0.2 + 0.8 * i/count`, before `base_radius` and jitter
    pub fn radius_term(&self, i: usize) -> f32 {
        0.2 + 0.8 * self.fraction(i)
    }

    /// Jitter-free spiral position of flower `i`
    pub fn spiral_point(&self, i: usize) -> Vec3 {
        let t = self.fraction(i);
        let angle = t * 2.0 * TAU;
        let radius = self.base_radius * self.radius_term(i);
        Vec3::new(
            angle.cos() * radius,
            t * self.height_range + self.vertical_offset,
            angle.sin() * radius,
        )
    }

    fn fraction(&self, i: usize) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            i as f32 / self.count as f32
        }
    }
}

/// Immutable placement of one flower
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowerSpec {
    pub position: Vec3,
    /// Base orientation; only the yaw survives animation
    pub rotation: Vec3,
    pub scale: Vec3,
    pub color: Color,
    pub kind: FlowerKind,
}

/// Sample every flower of the spiral. Randomness is consumed here only.
pub fn generate_flowers<R: Rng + ?Sized>(layout: &FlowerLayout, rng: &mut R) -> Vec<FlowerSpec> {
    let half = layout.jitter / 2.0;
    (0..layout.count)
        .map(|i| {
            let base = layout.spiral_point(i);
            let jx = rng.random_range(-half..=half);
            let jz = rng.random_range(-half..=half);
            let jy = rng.random_range(-half..=half);
            let scale = rng.random_range(layout.scale_min..=layout.scale_max);
            let rotation = Vec3::new(
                rng.random_range(-TILT_RANGE..=TILT_RANGE),
                rng.random_range(-YAW_RANGE..=YAW_RANGE),
                rng.random_range(-TILT_RANGE..=TILT_RANGE),
            );
            FlowerSpec {
                position: base + Vec3::new(jx, jy, jz),
                rotation,
                scale: Vec3::splat(scale),
                color: pick_color(rng),
                kind: FlowerKind::random(rng),
            }
        })
        .collect()
}

impl FlowerSpec {
    /// Sway transform at scene time `t`, derived from the base spec only
    pub fn transform_at(&self, t: f32) -> Transform {
        let base = self.position;
        Transform {
            position: Vec3::new(base.x, base.y + (t * 0.5 + base.x).sin() * 0.05, base.z),
            rotation: Vec3::new(
                (t * 0.2 + base.x).sin() * 0.1,
                self.rotation.y,
                (t * 0.3 + base.z).cos() * 0.1,
            ),
            scale: self.scale,
        }
    }

    /// Petals, center, stem and leaves in the flower's local space
    pub fn blocks(&self) -> Vec<BlockSpec> {
        let s = PETAL_BLOCK;
        let mut blocks = petals(self.kind, self.color);

        blocks.push(BlockSpec::cube(Vec3::new(0.0, 0.2, 0.0), s * 1.5, CENTER_YELLOW));

        for i in 0..4 {
            blocks.push(BlockSpec::new(
                Vec3::new(0.0, -0.2 - i as f32 * s, 0.0),
                Vec3::new(s * 0.5, s, s * 0.5),
                STEM_GREEN,
            ));
        }

        let leaf = Vec3::new(s * 2.0, s * 0.5, s);
        blocks.push(
            BlockSpec::new(Vec3::new(0.3, -0.4, 0.0), leaf, STEM_GREEN)
                .with_rotation(Vec3::new(0.0, FRAC_PI_4, 0.0)),
        );
        blocks.push(
            BlockSpec::new(Vec3::new(-0.3, -0.6, 0.0), leaf, STEM_GREEN)
                .with_rotation(Vec3::new(0.0, -FRAC_PI_4, 0.0)),
        );

        blocks
    }

    pub fn node_at(&self, t: f32) -> SceneNode {
        SceneNode::new(self.kind.name(), self.transform_at(t)).with_blocks(self.blocks())
    }
}

fn petals(kind: FlowerKind, color: Color) -> Vec<BlockSpec> {
    let s = PETAL_BLOCK;
    let (radius, height, size, pitch, petal_color) = match kind {
        FlowerKind::Rose => (0.4, 0.2, Vec3::splat(s), 0.0, color),
        FlowerKind::Daisy => (0.5, 0.0, Vec3::new(s * 1.5, s * 0.5, s), 0.0, DAISY_WHITE),
        FlowerKind::Tulip => (0.3, 0.3, Vec3::new(s, s * 2.0, s), FRAC_PI_4, color),
    };

    let n = kind.petal_count();
    (0..n)
        .map(|i| {
            let angle = i as f32 / n as f32 * TAU;
            BlockSpec::new(
                Vec3::new(angle.cos() * radius, height, angle.sin() * radius),
                size,
                petal_color,
            )
            .with_rotation(Vec3::new(pitch, angle, 0.0))
        })
        .collect()
}
