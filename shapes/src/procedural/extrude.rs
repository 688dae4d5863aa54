//! Profile extrusion
//!
//! Sweeps a triangulated profile along +Y into a closed solid: a bottom cap,
//! a lifted top cap with reversed winding, and one quad per boundary edge.

use glam::Vec3;
use hashbrown::HashMap;

use super::types::ShapeMesh;

/// A triangle that repeats a vertex has no area and no edges worth walling
fn is_degenerate(t: &[u32; 3]) -> bool {
    t[0] == t[1] || t[1] == t[2] || t[0] == t[2]
}

fn triangle_edges(t: &[u32; 3]) -> [(u32, u32); 3] {
    [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])]
}

fn undirected(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

/// Y component of the profile's summed face normals (right-handed, CCW front)
fn net_facing(vertices: &[Vec3], indices: &[u32]) -> f32 {
    indices
        .chunks_exact(3)
        .map(|t| {
            let a = vertices[t[0] as usize];
            let b = vertices[t[1] as usize];
            let c = vertices[t[2] as usize];
            (b - a).cross(c - a).y
        })
        .sum()
}

/// Directed edges used by exactly one non-degenerate triangle, in triangle order
fn boundary_edges(triangles: &[[u32; 3]]) -> Vec<(u32, u32)> {
    let mut uses: HashMap<(u32, u32), u32> = HashMap::new();
    for t in triangles.iter().filter(|t| !is_degenerate(t)) {
        for (a, b) in triangle_edges(t) {
            *uses.entry(undirected(a, b)).or_insert(0) += 1;
        }
    }

    triangles
        .iter()
        .filter(|t| !is_degenerate(t))
        .flat_map(triangle_edges)
        .filter(|&(a, b)| uses.get(&undirected(a, b)) == Some(&1))
        .collect()
}

/// Append the solid swept from `vertices`/`indices` into `mesh`
///
/// Vertex layout: profile vertices `[0, n)` form the bottom ring, their lifted
/// copies `[n, 2n)` the top ring.
pub(super) fn extrude_profile(
    mesh: &mut ShapeMesh,
    vertices: &[Vec3],
    indices: &[u32],
    height: f32,
) {
    let n = vertices.len() as u32;

    // Bottom cap must face -Y, away from the sweep
    let flip = net_facing(vertices, indices) > 0.0;
    let base: Vec<[u32; 3]> = indices
        .chunks_exact(3)
        .map(|t| {
            if flip {
                [t[0], t[2], t[1]]
            } else {
                [t[0], t[1], t[2]]
            }
        })
        .collect();

    let boundary = boundary_edges(&base);

    mesh.positions.reserve(vertices.len() * 2);
    mesh.indices.reserve(base.len() * 6 + boundary.len() * 6);

    let lift = Vec3::new(0.0, height, 0.0);
    let base_vertex = mesh.positions.len() as u32;
    mesh.positions.extend_from_slice(vertices);
    mesh.positions.extend(vertices.iter().map(|&v| v + lift));

    let bottom = |i: u32| base_vertex + i;
    let top = |i: u32| base_vertex + n + i;

    for t in &base {
        mesh.indices.extend_from_slice(&[bottom(t[0]), bottom(t[1]), bottom(t[2])]);
    }

    for t in &base {
        mesh.indices.extend_from_slice(&[top(t[0]), top(t[2]), top(t[1])]);
    }

    // Side walls: boundary edge a→b runs with the bottom cap's winding
    for &(a, b) in &boundary {
        mesh.indices.extend_from_slice(&[bottom(a), top(b), bottom(b)]);
        mesh.indices.extend_from_slice(&[bottom(a), top(a), top(b)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> (Vec<Vec3>, Vec<u32>) {
        // Faces -Y: (b - a) x (c - a) has negative Y
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        (vertices, vec![0, 2, 1, 0, 3, 2])
    }

    #[test]
    fn test_boundary_edges_skip_shared_diagonal() {
        let (_, indices) = square();
        let triangles: Vec<[u32; 3]> = indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect();
        let boundary = boundary_edges(&triangles);
        assert_eq!(boundary.len(), 4);
        assert!(!boundary.contains(&(0, 2)));
        assert!(!boundary.contains(&(2, 0)));
    }

    #[test]
    fn test_boundary_edges_ignore_degenerate() {
        let boundary = boundary_edges(&[[0, 1, 2], [2, 2, 3]]);
        assert_eq!(boundary, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_net_facing_sign() {
        let (vertices, indices) = square();
        assert!(net_facing(&vertices, &indices) < 0.0);
        assert!(net_facing(&vertices, &[0, 1, 2]) > 0.0);
    }

    #[test]
    fn test_extrude_square_counts() {
        let (vertices, indices) = square();
        let mut mesh = ShapeMesh::new();
        extrude_profile(&mut mesh, &vertices, &indices, 2.0);

        assert_eq!(mesh.vertex_count(), 8);
        // 2 triangles per cap, 2 per wall
        assert_eq!(mesh.triangle_count(), 2 + 2 + 4 * 2);
        assert!((mesh.positions[4].y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_extrude_flips_upward_profile() {
        let (vertices, indices) = square();
        let upward: Vec<u32> = indices
            .chunks_exact(3)
            .flat_map(|t| [t[0], t[2], t[1]])
            .collect();

        let mut down = ShapeMesh::new();
        let mut up = ShapeMesh::new();
        extrude_profile(&mut down, &vertices, &indices, 1.0);
        extrude_profile(&mut up, &vertices, &upward, 1.0);

        // Either way the bottom cap ends up facing -Y
        assert_eq!(&up.indices[..6], &down.indices[..6]);
    }
}
