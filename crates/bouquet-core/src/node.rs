//! Hierarchical scene groups and world-space flattening

use crate::block::{BlockSpec, Finish};
use crate::types::{mat4_mul, Color, Transform, Vec3};
use serde::Serialize;

/// A group transform holding blocks and child groups.
///
/// Nodes are rebuilt every frame from immutable specs, so they carry no
/// identity beyond a debug name.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub blocks: Vec<BlockSpec>,
    pub children: Vec<SceneNode>,
}

/// A block with its fully composed model matrix.
///
/// The matrix maps the unit cube centered on the origin to the block's world
/// footprint (size is folded into the scale).
#[derive(Clone, Copy, Debug, Serialize)]
pub struct WorldCuboid {
    pub model: [[f32; 4]; 4],
    pub color: Color,
    pub opacity: f32,
    pub finish: Finish,
}

impl WorldCuboid {
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }
}

impl SceneNode {
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            blocks: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<BlockSpec>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn push_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Total blocks in this node and all descendants
    pub fn block_count(&self) -> usize {
        self.blocks.len() + self.children.iter().map(|c| c.block_count()).sum::<usize>()
    }

    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&SceneNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Compose transforms down the hierarchy, depth-first, own blocks first
    pub fn flatten(&self) -> Vec<WorldCuboid> {
        let mut out = Vec::with_capacity(self.block_count());
        self.flatten_into(&Transform::IDENTITY.to_matrix(), &mut out);
        out
    }

    fn flatten_into(&self, parent: &[[f32; 4]; 4], out: &mut Vec<WorldCuboid>) {
        let world = mat4_mul(parent, &self.transform.to_matrix());

        for block in &self.blocks {
            let local = Transform {
                position: block.position,
                rotation: block.rotation,
                scale: block.size,
            };
            out.push(WorldCuboid {
                model: mat4_mul(&world, &local.to_matrix()),
                color: block.color,
                opacity: block.opacity,
                finish: block.finish,
            });
        }

        for child in &self.children {
            child.flatten_into(&world, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_block(x: f32) -> BlockSpec {
        BlockSpec::cube(Vec3::new(x, 0.0, 0.0), 1.0, Color::WHITE)
    }

    #[test]
    fn block_count_includes_descendants() {
        let mut root = SceneNode::new("root", Transform::IDENTITY).with_blocks(vec![unit_block(0.0)]);
        let mut mid = SceneNode::new("mid", Transform::IDENTITY).with_blocks(vec![unit_block(1.0)]);
        mid.push_child(SceneNode::new("leaf", Transform::IDENTITY).with_blocks(vec![
            unit_block(2.0),
            unit_block(3.0),
        ]));
        root.push_child(mid);

        assert_eq!(root.block_count(), 4);
        assert_eq!(root.flatten().len(), 4);
        assert!(root.child("mid").is_some());
        assert!(root.child("leaf").is_none());
    }

    #[test]
    fn flatten_applies_parent_transforms() {
        let mut root = SceneNode::new("root", Transform::from_position(Vec3::new(0.0, 5.0, 0.0)));
        root.push_child(
            SceneNode::new("scaled", Transform::IDENTITY.with_scale(Vec3::splat(2.0)))
                .with_blocks(vec![unit_block(1.0)]),
        );

        let cuboids = root.flatten();
        assert_eq!(cuboids[0].center(), Vec3::new(2.0, 5.0, 0.0));
        // Block edge 1 under a 2x parent
        assert!((cuboids[0].model[0][0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn flatten_keeps_material_fields() {
        let block = unit_block(0.0).with_opacity(0.6).with_finish(Finish::WATER);
        let root = SceneNode::new("water", Transform::IDENTITY).with_blocks(vec![block]);
        let cuboid = root.flatten()[0];
        assert!((cuboid.opacity - 0.6).abs() < 1e-6);
        assert_eq!(cuboid.finish, Finish::WATER);
    }
}
