//! Procedural mesh types
//!
//! Shared types for arc geometry generation.

use glam::Vec3;

/// Trait for mesh construction from generated arc buffers
///
/// This trait lets the generator hand its output to any backend:
/// - `ShapeMesh`: f32 positions for OBJ export and tests
/// - engine-side meshes that upload straight to the GPU
pub trait MeshConsumer {
    /// Build a two-sided flat polygon
    ///
    /// `indices` already contains both faces (see [`super::mirror_indices`]).
    fn build_flat(&mut self, vertices: &[Vec3], indices: &[u32]);

    /// Build a closed solid by sweeping the profile along the normal axis by `height`
    fn build_extruded(&mut self, vertices: &[Vec3], indices: &[u32], height: f32);
}

/// How a mesh was built
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    /// Zero-height shape drawn from both sides
    FlatDoubleSided,
    /// Profile swept along +Y with both ends capped
    ExtrudedSolid,
}

/// Output of a disk or ring generator
///
/// `radius` and `percent` are the values the shape was last drawn with:
/// the radius for a disk, the mid radius `(outer + inner) / 2` for a ring, and
/// the completion fraction actually used.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcGeometry {
    /// Vertex positions, referenced by index
    pub vertices: Vec<Vec3>,
    /// Triangle indices, stride 3
    pub indices: Vec<u32>,
    /// Radius the shape was drawn with
    pub radius: f32,
    /// Completion fraction the shape was drawn with
    pub percent: f32,
}

impl ArcGeometry {
    /// Empty geometry that still records the drawn radius and percent
    pub fn empty(radius: f32, percent: f32) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            radius,
            percent,
        }
    }

    /// True when the inputs produced no geometry
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Mesh built from arc geometry (f32 positions)
///
/// The reference [`MeshConsumer`]: flat shapes are stored as given, extruded
/// shapes are swept into a closed solid (see `extrude.rs`).
#[derive(Clone, Debug, Default)]
pub struct ShapeMesh {
    /// Vertex positions as [x, y, z]
    pub positions: Vec<Vec3>,
    /// Triangle indices
    pub indices: Vec<u32>,
    /// How the mesh was last built (None until something is built)
    pub kind: Option<MeshKind>,
}

impl ShapeMesh {
    /// Create empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Drop all geometry, keeping allocations
    pub fn clear(&mut self) {
        self.positions.clear();
        self.indices.clear();
        self.kind = None;
    }
}

impl MeshConsumer for ShapeMesh {
    fn build_flat(&mut self, vertices: &[Vec3], indices: &[u32]) {
        self.clear();
        self.positions.extend_from_slice(vertices);
        self.indices.extend_from_slice(indices);
        self.kind = Some(MeshKind::FlatDoubleSided);
    }

    fn build_extruded(&mut self, vertices: &[Vec3], indices: &[u32], height: f32) {
        self.clear();
        super::extrude::extrude_profile(self, vertices, indices, height);
        self.kind = Some(MeshKind::ExtrudedSolid);
    }
}
