//! Wavefront OBJ export for generated shapes

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use super::types::ShapeMesh;

/// Render a mesh as OBJ text
///
/// Emits one object named `name` with `v` lines for positions and `f` lines
/// for triangles (1-based indices). An empty mesh yields just the header.
pub fn to_obj_string(mesh: &ShapeMesh, name: &str) -> String {
    let mut out = String::with_capacity(32 + mesh.positions.len() * 32 + mesh.indices.len() * 8);

    // Writing to a String cannot fail
    let _ = writeln!(out, "# nether-shapes");
    let _ = writeln!(out, "o {name}");

    for p in &mesh.positions {
        let _ = writeln!(out, "v {} {} {}", p.x, p.y, p.z);
    }

    for t in mesh.indices.chunks_exact(3) {
        let _ = writeln!(out, "f {} {} {}", t[0] + 1, t[1] + 1, t[2] + 1);
    }

    out
}

/// Write a mesh to an OBJ file
///
/// # Example
/// ```no_run
/// use nether_shapes::{ArcShape, ShapeMesh, write_obj};
///
/// let mut mesh = ShapeMesh::new();
/// ArcShape::default().draw(1.0, &mut mesh);
/// write_obj(&mesh, "circle.obj".as_ref(), "circle")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_obj(mesh: &ShapeMesh, path: &Path, name: &str) -> io::Result<()> {
    fs::write(path, to_obj_string(mesh, name))
}
