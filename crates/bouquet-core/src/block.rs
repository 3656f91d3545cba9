//! Cuboid block primitive

use crate::types::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Surface response hint for the host renderer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Finish {
    pub roughness: f32,
    pub metalness: f32,
}

impl Finish {
    /// Ordinary voxel blocks
    pub const MATTE: Self = Self {
        roughness: 0.8,
        metalness: 0.1,
    };
    /// Sparkle particles
    pub const GLOSSY: Self = Self {
        roughness: 0.3,
        metalness: 0.7,
    };
    pub const WATER: Self = Self {
        roughness: 0.1,
        metalness: 0.8,
    };
}

impl Default for Finish {
    fn default() -> Self {
        Self::MATTE
    }
}

/// One axis-aligned cuboid, positioned relative to its parent node
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub position: Vec3,
    pub size: Vec3,
    pub color: Color,
    /// Euler radians (XYZ)
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default)]
    pub finish: Finish,
    /// 1.0 is fully opaque
    #[serde(default = "opaque")]
    pub opacity: f32,
}

fn opaque() -> f32 {
    1.0
}

impl BlockSpec {
    /// An opaque, unrotated, matte block
    pub fn new(position: Vec3, size: Vec3, color: Color) -> Self {
        Self {
            position,
            size,
            color,
            rotation: Vec3::ZERO,
            finish: Finish::MATTE,
            opacity: 1.0,
        }
    }

    /// A cube with edge length `edge`
    pub fn cube(position: Vec3, edge: f32, color: Color) -> Self {
        Self::new(position, Vec3::splat(edge), color)
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_finish(mut self, finish: Finish) -> Self {
        self.finish = finish;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}
