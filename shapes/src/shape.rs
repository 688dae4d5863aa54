//! Drawable arc shapes
//!
//! [`ArcShape`] holds the tessellation settings for one shape object and
//! draws circles or rings into a [`MeshConsumer`]. The radius and percent a
//! shape was drawn with come back in the returned [`ArcGeometry`].

use crate::config::GeneratorConfig;
use crate::procedural::{
    ArcGeometry, DEFAULT_FLAT_EPSILON, MeshConsumer, emit, generate_disk, generate_ring,
};

/// Sides generated per unit of scaled radius when nothing else is configured
pub const DEFAULT_SIDE_PER_UNIT: f32 = 16.0;

/// Parameters for [`ArcShape::draw_ring`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingParams {
    pub outer: f32,
    pub inner: f32,
    pub percent: f32,
    pub height: f32,
    pub spiral_height: f32,
    pub diminish_tail: bool,
}

impl RingParams {
    /// Complete flat ring between `outer` and `inner`
    pub fn new(outer: f32, inner: f32) -> Self {
        Self {
            outer,
            inner,
            percent: 1.0,
            height: 0.0,
            spiral_height: 0.0,
            diminish_tail: false,
        }
    }

    pub fn percent(mut self, percent: f32) -> Self {
        self.percent = percent;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn spiral(mut self, spiral_height: f32) -> Self {
        self.spiral_height = spiral_height;
        self
    }

    pub fn diminish_tail(mut self, diminish_tail: bool) -> Self {
        self.diminish_tail = diminish_tail;
        self
    }
}

/// A circle/ring shape with its tessellation settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcShape {
    /// Sides per unit of scaled radius
    pub side_per_unit: f32,
    /// Heights below this draw a flat two-sided shape
    pub flat_epsilon: f32,
}

impl Default for ArcShape {
    fn default() -> Self {
        Self {
            side_per_unit: DEFAULT_SIDE_PER_UNIT,
            flat_epsilon: DEFAULT_FLAT_EPSILON,
        }
    }
}

impl ArcShape {
    pub fn new(side_per_unit: f32) -> Self {
        Self {
            side_per_unit,
            ..Self::default()
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            side_per_unit: config.side_per_unit,
            flat_epsilon: config.flat_epsilon,
        }
    }

    /// Draw a complete flat circle
    pub fn draw<C: MeshConsumer + ?Sized>(&self, radius: f32, consumer: &mut C) -> ArcGeometry {
        self.draw_circle(radius, 1.0, 0.0, 0.0, consumer)
    }

    /// Draw a circle, pie slice, or cylinder
    ///
    /// # Arguments
    /// * `radius` - Circle radius
    /// * `percent` - Fraction of a full turn
    /// * `height` - Extrusion height (0 for a flat two-sided shape)
    /// * `offset` - Start rotation in turns
    pub fn draw_circle<C: MeshConsumer + ?Sized>(
        &self,
        radius: f32,
        percent: f32,
        height: f32,
        offset: f32,
        consumer: &mut C,
    ) -> ArcGeometry {
        let geometry = generate_disk(radius, percent, offset, self.side_per_unit);
        emit(&geometry, height, self.flat_epsilon, consumer);
        geometry
    }

    /// Draw a ring, arc band, spiral ramp, or tube
    pub fn draw_ring<C: MeshConsumer + ?Sized>(
        &self,
        params: RingParams,
        consumer: &mut C,
    ) -> ArcGeometry {
        let geometry = generate_ring(
            params.outer,
            params.inner,
            params.percent,
            params.spiral_height,
            params.diminish_tail,
            self.side_per_unit,
        );
        emit(&geometry, params.height, self.flat_epsilon, consumer);
        geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::{MeshKind, ShapeMesh};

    #[test]
    fn test_draw_full_flat_circle() {
        let shape = ArcShape::default();
        let mut mesh = ShapeMesh::new();
        let geometry = shape.draw(0.0, &mut mesh);

        assert_eq!(geometry.vertex_count(), 17);
        assert_eq!(geometry.radius, 0.0);
        assert_eq!(geometry.percent, 1.0);
        assert_eq!(mesh.kind, Some(MeshKind::FlatDoubleSided));
        assert_eq!(mesh.indices.len(), geometry.indices.len() * 2);
    }

    #[test]
    fn test_draw_circle_extruded() {
        let shape = ArcShape::new(8.0);
        let mut mesh = ShapeMesh::new();
        let geometry = shape.draw_circle(1.0, 1.0, 0.5, 0.0, &mut mesh);

        assert_eq!(mesh.kind, Some(MeshKind::ExtrudedSolid));
        assert_eq!(mesh.vertex_count(), geometry.vertex_count() * 2);
    }

    #[test]
    fn test_draw_ring_reports_mid_radius() {
        let shape = ArcShape::default();
        let mut mesh = ShapeMesh::new();
        let geometry = shape.draw_ring(RingParams::new(1.0, 0.5).percent(-0.5), &mut mesh);

        assert!((geometry.radius - 0.75).abs() < 1e-6);
        assert!((geometry.percent - 0.5).abs() < 1e-6);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_draw_degenerate_leaves_consumer_untouched() {
        let shape = ArcShape::default();
        let mut mesh = ShapeMesh::new();
        let geometry = shape.draw_circle(1.0, 0.0, 0.0, 0.0, &mut mesh);

        assert!(geometry.is_empty());
        assert!(mesh.is_empty());
        assert_eq!(mesh.kind, None);
    }

    #[test]
    fn test_from_config() {
        let config = GeneratorConfig {
            side_per_unit: 4.0,
            flat_epsilon: 0.01,
        };
        let shape = ArcShape::from_config(&config);
        assert_eq!(shape.side_per_unit, 4.0);

        // 0.005 is below the configured epsilon
        let mut mesh = ShapeMesh::new();
        shape.draw_circle(1.0, 1.0, 0.005, 0.0, &mut mesh);
        assert_eq!(mesh.kind, Some(MeshKind::FlatDoubleSided));
    }

    #[test]
    fn test_ring_params_builder() {
        let params = RingParams::new(2.0, 1.0)
            .percent(0.25)
            .height(0.1)
            .spiral(0.5)
            .diminish_tail(true);
        assert_eq!(params.percent, 0.25);
        assert_eq!(params.height, 0.1);
        assert_eq!(params.spiral_height, 0.5);
        assert!(params.diminish_tail);
    }
}
