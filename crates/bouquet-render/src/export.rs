//! Wavefront OBJ export of a flattened frame

use crate::primitives::{unit_cube_mesh, FACE_VERTICES};
use bouquet_core::{mat4_transform_point, Vec3, WorldCuboid};
use std::io::{self, Write};

/// Write cuboids as quads with per-vertex colors (`v x y z r g b`).
///
/// Opacity is not representable in plain OBJ and is dropped.
pub fn write_obj<W: Write>(cuboids: &[WorldCuboid], out: &mut W) -> io::Result<()> {
    let cube = unit_cube_mesh();
    writeln!(out, "# voxel bouquet frame: {} cuboids", cuboids.len())?;

    let mut next_index = 1usize;
    for (n, c) in cuboids.iter().enumerate() {
        writeln!(out, "o cuboid_{n}")?;
        for v in &cube.vertices {
            let p = mat4_transform_point(&c.model, Vec3::from_array(v.position));
            writeln!(
                out,
                "v {:.5} {:.5} {:.5} {:.4} {:.4} {:.4}",
                p.x, p.y, p.z, c.color.r, c.color.g, c.color.b
            )?;
        }
        for face in 0..cube.vertex_count() / FACE_VERTICES {
            let base = next_index + face * FACE_VERTICES;
            writeln!(out, "f {} {} {} {}", base, base + 1, base + 2, base + 3)?;
        }
        next_index += cube.vertex_count();
    }
    Ok(())
}
