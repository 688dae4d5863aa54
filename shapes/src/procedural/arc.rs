//! Circle, arc and ring generators
//!
//! Shapes lie in the XZ plane, centered on the origin. A positive nominal
//! angle advances clockwise when viewed from +Y.

use glam::{FloatExt, Vec3};
use std::f32::consts::PI;
use tracing::{debug, trace, warn};

use super::types::{ArcGeometry, MeshConsumer, MeshKind};

/// Heights below this are drawn as flat two-sided shapes
pub const DEFAULT_FLAT_EPSILON: f32 = f32::EPSILON;

/// Tessellation grows with `(radius + 1)^RADIUS_EXPONENT`
const RADIUS_EXPONENT: f32 = 0.8;

/// Number of sides for an arc of `radius` covering `prct` of a full turn
///
/// `density` is the number of sides per unit of scaled radius. Halfway cases
/// round to even. A result `<= 0` means there is nothing to draw.
///
/// # Example
/// ```
/// use nether_shapes::side_count;
///
/// // (0 + 1)^0.8 * 16 * 1
/// assert_eq!(side_count(0.0, 16.0, 1.0), 16);
/// assert_eq!(side_count(0.0, 16.0, 0.0), 0);
/// ```
pub fn side_count(radius: f32, density: f32, prct: f32) -> i32 {
    // NaN (radius < -1) casts to 0
    ((radius + 1.0).powf(RADIUS_EXPONENT) * density * prct).round_ties_even() as i32
}

/// True if `prct` describes an incomplete sweep
///
/// Partial shapes get one extra side so their terminal edge is explicit.
pub fn is_partial(prct: f32) -> bool {
    prct < 1.0
}

/// Position on an arc of `radius` at nominal angle `alpha` (degrees)
///
/// `prct` scales the angle, compressing a full-circle parameterisation into
/// the covered fraction. `offset` rotates by whole turns (0.25 = quarter turn).
pub fn arc_point(radius: f32, alpha: f32, prct: f32, offset: f32, center: Vec3) -> Vec3 {
    let theta = alpha * prct * PI / 180.0 + offset * 2.0 * PI;
    Vec3::new(
        radius * theta.sin() + center.x,
        center.y,
        radius * theta.cos() + center.z,
    )
}

/// Degrees between neighbouring arc points
///
/// The closing side of a partial shape does not count towards the spacing.
fn angular_step(side: u32, partial: bool) -> f32 {
    360.0 / (side - partial as u32) as f32
}

/// Generate a filled circle or partial circle (pie slice)
///
/// # Arguments
/// * `radius` - Circle radius
/// * `prct` - Fraction of a full turn to cover
/// * `offset` - Start rotation in turns
/// * `density` - Sides per unit of scaled radius
///
/// # Returns
/// Center vertex followed by the rim, walked from the last nominal angle down
/// to zero, and a triangle fan around the center. With `side` from
/// [`side_count`], a complete circle has `side + 1` vertices and a partial one
/// `side + 2`; both have `side` triangles. Empty if `side <= 0`.
pub fn generate_disk(radius: f32, prct: f32, offset: f32, density: f32) -> ArcGeometry {
    let raw_sides = side_count(radius, density, prct);
    if raw_sides <= 0 {
        debug!("generate_disk: radius {radius} at {prct} gives {raw_sides} sides, nothing to draw");
        return ArcGeometry::empty(radius, prct);
    }

    let partial = is_partial(prct);
    let side = raw_sides as u32 + partial as u32;
    let alpha = angular_step(side, partial);

    let mut vertices = Vec::with_capacity(side as usize + 1);
    let mut indices = Vec::with_capacity(side as usize * 3);

    vertices.push(Vec3::ZERO);
    for (i, step) in (0..side).rev().enumerate() {
        let rim = i as u32 + 1;
        vertices.push(arc_point(radius, step as f32 * alpha, prct, offset, Vec3::ZERO));
        indices.extend_from_slice(&[0, rim, rim + 1]);
    }

    // The last fan triangle points one past the final rim vertex
    if partial {
        indices.truncate(indices.len() - 3);
    } else if let Some(last) = indices.last_mut() {
        *last = 1;
    }

    trace!(
        "generate_disk: {side} sides, {} vertices, {} triangles",
        vertices.len(),
        indices.len() / 3
    );

    ArcGeometry {
        vertices,
        indices,
        radius,
        percent: prct,
    }
}

/// Generate a ring (annulus), partial ring, or spiral ramp
///
/// # Arguments
/// * `outer` - Outer radius; also drives the side count
/// * `inner` - Inner radius
/// * `prct` - Fraction of a full turn to cover (sign is ignored)
/// * `spiral_height` - Total drop along Y across the steps (0 for a flat ring)
/// * `diminish_tail` - Taper the outer edge into the inner edge along the sweep
/// * `density` - Sides per unit of scaled radius
///
/// # Returns
/// Outer vertices front to back followed by inner vertices back to front, so
/// step `i` owns vertex `i` and vertex `2 * side - 1 - i`. Two triangles per
/// step form a quad strip. Empty if the side count rounds to zero.
pub fn generate_ring(
    outer: f32,
    inner: f32,
    prct: f32,
    spiral_height: f32,
    diminish_tail: bool,
    density: f32,
) -> ArcGeometry {
    let mid_radius = (outer + inner) * 0.5;
    let prct = prct.abs();

    let raw_sides = side_count(outer, density, prct);
    if raw_sides <= 0 {
        debug!("generate_ring: radius {outer} at {prct} gives {raw_sides} sides, nothing to draw");
        return ArcGeometry::empty(mid_radius, prct);
    }

    let partial = is_partial(prct);
    let side = raw_sides as u32 + partial as u32;
    let alpha = angular_step(side, partial);

    // Index of the inner vertex belonging to step 0
    let last = side * 2 - 1;

    let mut vertices = vec![Vec3::ZERO; side as usize * 2];
    let mut indices = Vec::with_capacity(side as usize * 6);

    for step in 0..side {
        let t = step as f32 / side as f32;
        let center = Vec3::new(0.0, -(step as f32) * spiral_height / side as f32, 0.0);
        let outer_radius = if diminish_tail {
            outer - 0.0_f32.lerp(outer - inner, t)
        } else {
            outer
        };
        let angle = step as f32 * alpha;

        vertices[step as usize] = arc_point(outer_radius, angle, prct, 0.0, center);
        vertices[(last - step) as usize] = arc_point(inner, angle, prct, 0.0, center);

        indices.extend_from_slice(&[step, last - step - 1, last - step]);
        indices.extend_from_slice(&[step, step + 1, last - step - 1]);
    }

    let len = indices.len();
    if !partial {
        // Stitch the final quad back onto step 0
        indices[len - 1] = last;
        indices[len - 2] = 0;
        indices[len - 5] = last;
    } else if len > 6 {
        // The final triangle reaches past the covered sweep
        indices.truncate(len - 3);
    }

    trace!(
        "generate_ring: {side} sides, {} vertices, {} triangles",
        vertices.len(),
        indices.len() / 3
    );

    ArcGeometry {
        vertices,
        indices,
        radius: mid_radius,
        percent: prct,
    }
}

/// Append the reversed index sequence so the polygon is visible from both sides
///
/// The second half is the first half read backwards, which flips the winding
/// of every triangle.
pub fn mirror_indices(indices: &[u32]) -> Vec<u32> {
    let mut mirrored = Vec::with_capacity(indices.len() * 2);
    mirrored.extend_from_slice(indices);
    mirrored.extend(indices.iter().rev());
    mirrored
}

/// Hand generated geometry to a mesh consumer
///
/// Heights below `flat_epsilon` build a two-sided flat polygon; anything
/// else is extruded by `height`. Empty geometry is skipped.
///
/// # Returns
/// The path taken, or `None` if there was nothing to emit
pub fn emit<C: MeshConsumer + ?Sized>(
    geometry: &ArcGeometry,
    height: f32,
    flat_epsilon: f32,
    consumer: &mut C,
) -> Option<MeshKind> {
    if geometry.is_empty() {
        return None;
    }

    if height < flat_epsilon {
        if height < 0.0 {
            warn!("emit: height {height} is negative, drawing flat");
        }
        consumer.build_flat(&geometry.vertices, &mirror_indices(&geometry.indices));
        Some(MeshKind::FlatDoubleSided)
    } else {
        consumer.build_extruded(&geometry.vertices, &geometry.indices, height);
        Some(MeshKind::ExtrudedSolid)
    }
}
