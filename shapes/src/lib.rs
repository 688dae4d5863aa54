//! Procedural circle, arc and ring meshes for Nethercore.
//!
//! The generator turns a handful of numbers (radius, completion fraction,
//! extrusion height, tessellation density) into vertex and index buffers.
//! Rendering is someone else's job: buffers are handed to a [`MeshConsumer`],
//! either as a two-sided flat polygon or as a capped extruded solid.
//!
//! # Example
//! ```no_run
//! use nether_shapes::{ArcShape, RingParams, ShapeMesh, write_obj};
//!
//! let shape = ArcShape::default();
//! let mut mesh = ShapeMesh::new();
//!
//! // Three quarters of a ring, 0.2 units thick
//! shape.draw_ring(RingParams::new(1.0, 0.8).percent(0.75).height(0.2), &mut mesh);
//!
//! write_obj(&mesh, "ring.obj".as_ref(), "ring")?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod config;
pub mod procedural;
pub mod registry;
pub mod shape;

pub use config::{Config, ConfigError, GeneratorConfig};
pub use procedural::{
    ArcGeometry, MeshConsumer, MeshKind, ShapeMesh, arc_point, emit, generate_disk,
    generate_ring, mirror_indices, side_count, to_obj_string, write_obj,
};
pub use registry::{MaterialId, MeshFactory, ShapeFactory, ShapeRegistry};
pub use shape::{ArcShape, RingParams};
