//! Unit cube mesh shared by every cuboid instance

use bytemuck::{Pod, Zeroable};

/// A vertex with position and normal; color comes from the instance
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// A mesh with vertices and indices
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Vertices per face in `unit_cube_mesh`
pub const FACE_VERTICES: usize = 4;

/// Create a cube of edge 1 centered on the origin.
///
/// Faces are 4 consecutive vertices each, CCW seen from outside, so an
/// instance's model matrix alone places and sizes it.
pub fn unit_cube_mesh() -> Mesh {
    let h = 0.5;

    // 8 corners
    let positions = [
        [-h, -h, -h], // 0: back-bottom-left
        [h, -h, -h],  // 1: back-bottom-right
        [h, h, -h],   // 2: back-top-right
        [-h, h, -h],  // 3: back-top-left
        [-h, -h, h],  // 4: front-bottom-left
        [h, -h, h],   // 5: front-bottom-right
        [h, h, h],    // 6: front-top-right
        [-h, h, h],   // 7: front-top-left
    ];

    // (normal, corner indices) per face
    let faces: [([f32; 3], [usize; 4]); 6] = [
        ([0.0, 0.0, -1.0], [0, 3, 2, 1]), // back
        ([0.0, 0.0, 1.0], [4, 5, 6, 7]),  // front
        ([-1.0, 0.0, 0.0], [0, 4, 7, 3]), // left
        ([1.0, 0.0, 0.0], [5, 1, 2, 6]),  // right
        ([0.0, -1.0, 0.0], [0, 1, 5, 4]), // bottom
        ([0.0, 1.0, 0.0], [3, 7, 6, 2]),  // top
    ];

    let vertices = faces
        .iter()
        .flat_map(|(normal, corners)| {
            corners.iter().map(move |&c| Vertex {
                position: positions[c],
                normal: *normal,
            })
        })
        .collect();

    // Indices (two triangles per face)
    let indices: Vec<u32> = (0..6u32)
        .flat_map(|face| {
            let base = face * FACE_VERTICES as u32;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    #[test]
    fn cube_counts() {
        let mesh = unit_cube_mesh();
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
    }

    #[test]
    fn winding_matches_normals() {
        let mesh = unit_cube_mesh();
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let n = cross(sub(b.position, a.position), sub(c.position, a.position));
            let dot = n[0] * a.normal[0] + n[1] * a.normal[1] + n[2] * a.normal[2];
            assert!(dot > 0.0, "triangle {tri:?} winds against its normal");
        }
    }

    #[test]
    fn vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }
}
