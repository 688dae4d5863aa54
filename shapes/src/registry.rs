//! Premade shape registry
//!
//! Engines provide a [`ShapeFactory`] that creates blank shape objects bound to
//! a material. The registry draws the premade shapes into them once and hands
//! out the cached handles by name.

use hashbrown::HashMap;
use tracing::debug;

use crate::procedural::{MeshConsumer, ShapeMesh};
use crate::shape::{ArcShape, RingParams};

/// Name of the premade hollow cylinder
pub const CYLINDER: &str = "cylinder";
/// Name of the premade small dot
pub const ROOT_DOT: &str = "RootDot";

/// Opaque material handle owned by the engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// Creates blank shape objects that generated geometry is drawn into
pub trait ShapeFactory {
    type Handle: MeshConsumer;

    /// Create an empty shape attached to `material`
    fn create(&mut self, material: MaterialId, name: &str) -> Self::Handle;
}

/// Factory producing plain [`ShapeMesh`] values
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshFactory;

impl ShapeFactory for MeshFactory {
    type Handle = ShapeMesh;

    fn create(&mut self, _material: MaterialId, _name: &str) -> ShapeMesh {
        ShapeMesh::new()
    }
}

/// Named cache of drawn shapes
pub struct ShapeRegistry<H> {
    shapes: HashMap<String, H>,
}

impl<H> Default for ShapeRegistry<H> {
    fn default() -> Self {
        Self {
            shapes: HashMap::new(),
        }
    }
}

impl<H: MeshConsumer> ShapeRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the premade shapes with `factory`
    ///
    /// - `cylinder`: complete ring, radii 1 and 0.85, 0.3 tall, 8 sides per unit
    /// - `RootDot`: flat circle of radius 0.0175 at the default density
    pub fn init<F>(factory: &mut F, material: MaterialId) -> Self
    where
        F: ShapeFactory<Handle = H>,
    {
        let mut registry = Self::new();

        let mut cylinder = factory.create(material, CYLINDER);
        ArcShape::new(8.0).draw_ring(RingParams::new(1.0, 0.85).height(0.3), &mut cylinder);
        registry.insert(CYLINDER, cylinder);

        let mut dot = factory.create(material, ROOT_DOT);
        ArcShape::default().draw_circle(0.035 * 0.5, 1.0, 0.0, 0.0, &mut dot);
        registry.insert(ROOT_DOT, dot);

        debug!("shape registry initialized with {} shapes", registry.len());
        registry
    }

    /// Cache a shape, returning the one it replaced
    pub fn insert(&mut self, name: &str, handle: H) -> Option<H> {
        self.shapes.insert(name.to_owned(), handle)
    }

    pub fn get(&self, name: &str) -> Option<&H> {
        self.shapes.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut H> {
        self.shapes.get_mut(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::MeshKind;
    use glam::Vec3;

    /// Records what the registry asked for
    #[derive(Default)]
    struct RecordingFactory {
        created: Vec<(MaterialId, String)>,
    }

    impl ShapeFactory for RecordingFactory {
        type Handle = ShapeMesh;

        fn create(&mut self, material: MaterialId, name: &str) -> ShapeMesh {
            self.created.push((material, name.to_owned()));
            ShapeMesh::new()
        }
    }

    #[test]
    fn test_init_builds_premade_shapes() {
        let registry = ShapeRegistry::init(&mut MeshFactory, MaterialId(3));
        assert_eq!(registry.len(), 2);

        let mut names: Vec<&str> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec![ROOT_DOT, CYLINDER]);

        let cylinder = registry.get(CYLINDER).unwrap();
        assert_eq!(cylinder.kind, Some(MeshKind::ExtrudedSolid));

        let dot = registry.get(ROOT_DOT).unwrap();
        assert_eq!(dot.kind, Some(MeshKind::FlatDoubleSided));
    }

    #[test]
    fn test_init_uses_material() {
        let mut factory = RecordingFactory::default();
        let _ = ShapeRegistry::init(&mut factory, MaterialId(7));
        assert_eq!(
            factory.created,
            vec![
                (MaterialId(7), CYLINDER.to_owned()),
                (MaterialId(7), ROOT_DOT.to_owned()),
            ]
        );
    }

    #[test]
    fn test_cylinder_dimensions() {
        let registry = ShapeRegistry::init(&mut MeshFactory, MaterialId::default());
        let cylinder = registry.get(CYLINDER).unwrap();

        let max_y = cylinder.positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let max_r = cylinder
            .positions
            .iter()
            .map(|p| Vec3::new(p.x, 0.0, p.z).length())
            .fold(0.0, f32::max);
        assert!((max_y - 0.3).abs() < 1e-5);
        assert!((max_r - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_insert_and_replace() {
        let mut registry: ShapeRegistry<ShapeMesh> = ShapeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.insert("a", ShapeMesh::new()).is_none());
        assert!(registry.insert("a", ShapeMesh::new()).is_some());
        assert_eq!(registry.len(), 1);
        assert!(registry.get("missing").is_none());
        assert!(registry.get_mut("a").is_some());
    }
}
