//! Procedural arc geometry
//!
//! Functions for generating circles, partial arcs and rings, plus the
//! reference mesh consumer that turns generated buffers into flat or
//! extruded meshes.
//!
//! All generators are pure: they return owned buffers and never touch the
//! consumer until [`emit`] is called.

mod arc;
mod export;
mod extrude;
mod types;


pub use arc::{
    DEFAULT_FLAT_EPSILON, arc_point, emit, generate_disk, generate_ring, is_partial,
    mirror_indices, side_count,
};
pub use export::{to_obj_string, write_obj};
pub use types::{ArcGeometry, MeshConsumer, MeshKind, ShapeMesh};
