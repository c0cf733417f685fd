//! Collision tests for circles, rectangles and oriented quads
//!
//! Everything collides as a circle first. Triangle asteroids and the laser
//! additionally expose an oriented quad (four ordered corners) for a tighter
//! separating-axis test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::rotate_deg;

/// Four ordered corners of an oriented rectangle.
///
/// Corner order is top-left, top-right, bottom-right, bottom-left in the
/// quad's local frame (screen space, +y down). The point and overlap tests
/// below rely on that order.
pub type Quad = [Vec2; 4];

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Corners in quad order
    pub fn corners(&self) -> Quad {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.w, self.y),
            Vec2::new(self.x + self.w, self.y + self.h),
            Vec2::new(self.x, self.y + self.h),
        ]
    }
}

/// Build a quad from half extents, rotated (degrees) and moved to `center`
pub fn oriented_quad(center: Vec2, half_extents: Vec2, rotation_deg: f32) -> Quad {
    let (hx, hy) = (half_extents.x, half_extents.y);
    [
        Vec2::new(-hx, -hy),
        Vec2::new(hx, -hy),
        Vec2::new(hx, hy),
        Vec2::new(-hx, hy),
    ]
    .map(|corner| center + rotate_deg(corner, rotation_deg))
}

/// Circle vs circle (strict: touching circles do not collide)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Check whether `point` is inside a convex quad.
///
/// Inside means on the inner side of every edge: for each edge the left
/// normal `(-e.y, e.x)` must not point away from the point. Assumes the
/// corner order documented on [`Quad`]; a quad wound the other way (or
/// self-intersecting) gives meaningless results.
pub fn point_in_convex_quad(point: Vec2, quad: &Quad) -> bool {
    (0..4).all(|i| {
        let p1 = quad[i];
        let p2 = quad[(i + 1) % 4];
        let edge = p2 - p1;
        let normal = Vec2::new(-edge.y, edge.x);
        normal.dot(point - p1) >= 0.0
    })
}

/// Check whether an axis-aligned rect overlaps a quad.
///
/// Only tests the rect's corners against the quad, so a quad lying entirely
/// inside the rect is reported as a miss. Fine while rects are small next to
/// the quads they are tested against.
pub fn rect_overlaps_quad(rect: &Rect, quad: &Quad) -> bool {
    rect.corners()
        .iter()
        .any(|&corner| point_in_convex_quad(corner, quad))
}

/// Separating-axis overlap test for two rectangles/parallelograms.
///
/// Each shape contributes the normals of its two distinct edges. Touching
/// projections count as overlapping.
pub fn quad_overlaps_quad(a: &Quad, b: &Quad) -> bool {
    let axes = [edge_axes(a), edge_axes(b)];
    for axis in axes.iter().flatten() {
        let (min_a, max_a) = project(a, *axis);
        let (min_b, max_b) = project(b, *axis);
        if max_a < min_b || max_b < min_a {
            return false;
        }
    }
    true
}

/// Unit normals of the two distinct edges of a parallelogram
fn edge_axes(quad: &Quad) -> [Vec2; 2] {
    let e0 = (quad[1] - quad[0]).normalize_or_zero();
    let e1 = (quad[3] - quad[0]).normalize_or_zero();
    [e0.perp(), e1.perp()]
}

/// Project all corners onto an axis, returning (min, max)
fn project(quad: &Quad, axis: Vec2) -> (f32, f32) {
    quad.iter()
        .map(|p| p.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), d| {
            (min.min(d), max.max(d))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_square_at(x: f32, y: f32) -> Quad {
        Rect::new(x, y, 1.0, 1.0).corners()
    }

    #[test]
    fn test_point_in_quad_axis_aligned() {
        let quad = unit_square_at(0.0, 0.0);
        assert!(point_in_convex_quad(Vec2::new(0.5, 0.5), &quad));
        assert!(point_in_convex_quad(Vec2::new(0.0, 0.0), &quad)); // corner counts
        assert!(!point_in_convex_quad(Vec2::new(1.5, 0.5), &quad));
        assert!(!point_in_convex_quad(Vec2::new(0.5, -0.1), &quad));
    }

    #[test]
    fn test_point_in_rotated_quad() {
        // 45° diamond with half extents 10 reaches ~14.1 along the axes
        let quad = oriented_quad(Vec2::ZERO, Vec2::splat(10.0), 45.0);
        assert!(point_in_convex_quad(Vec2::ZERO, &quad));
        assert!(point_in_convex_quad(Vec2::new(13.0, 0.0), &quad));
        assert!(!point_in_convex_quad(Vec2::new(12.0, 12.0), &quad));
    }

    #[test]
    fn test_rect_overlaps_quad_by_corner() {
        let quad = oriented_quad(Vec2::new(50.0, 50.0), Vec2::splat(10.0), 30.0);
        let hit = Rect::new(48.0, 48.0, 4.0, 4.0);
        let miss = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert!(rect_overlaps_quad(&hit, &quad));
        assert!(!rect_overlaps_quad(&miss, &quad));
    }

    #[test]
    fn test_rect_overlaps_quad_misses_enclosed_quad() {
        // Documented limitation: none of the rect's corners are inside the quad
        let quad = oriented_quad(Vec2::new(50.0, 50.0), Vec2::splat(5.0), 0.0);
        let big = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!rect_overlaps_quad(&big, &quad));
        assert!(quad_overlaps_quad(&big.corners(), &quad));
    }

    #[test]
    fn test_quad_overlap_identical_squares() {
        let a = unit_square_at(0.0, 0.0);
        assert!(quad_overlaps_quad(&a, &a));
    }

    #[test]
    fn test_quad_overlap_separated_squares() {
        let a = unit_square_at(0.0, 0.0);
        // Centres 1.5 apart on x, half extents sum to 1.0
        let b = unit_square_at(1.5, 0.0);
        assert!(!quad_overlaps_quad(&a, &b));
        let c = unit_square_at(0.0, -1.2);
        assert!(!quad_overlaps_quad(&a, &c));
    }

    #[test]
    fn test_quad_overlap_rotated_corner_gap() {
        // Diamond whose bounding box overlaps the square but whose edges don't
        let square = oriented_quad(Vec2::ZERO, Vec2::splat(10.0), 0.0);
        let diamond = oriented_quad(Vec2::new(23.0, 23.0), Vec2::splat(10.0), 45.0);
        assert!(!quad_overlaps_quad(&square, &diamond));
        let closer = oriented_quad(Vec2::new(15.0, 15.0), Vec2::splat(10.0), 45.0);
        assert!(quad_overlaps_quad(&square, &closer));
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 5.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
    }

    proptest! {
        #[test]
        fn prop_quad_overlap_is_symmetric(
            ax in -50.0f32..50.0, ay in -50.0f32..50.0, ar in 0.0f32..360.0,
            bx in -50.0f32..50.0, by in -50.0f32..50.0, br in 0.0f32..360.0,
        ) {
            let a = oriented_quad(Vec2::new(ax, ay), Vec2::new(12.0, 6.0), ar);
            let b = oriented_quad(Vec2::new(bx, by), Vec2::new(2.0, 15.0), br);
            prop_assert_eq!(quad_overlaps_quad(&a, &b), quad_overlaps_quad(&b, &a));
        }

        #[test]
        fn prop_quad_contains_own_center(
            cx in -100.0f32..100.0, cy in -100.0f32..100.0,
            hx in 0.5f32..40.0, hy in 0.5f32..40.0, rot in 0.0f32..360.0,
        ) {
            let center = Vec2::new(cx, cy);
            let quad = oriented_quad(center, Vec2::new(hx, hy), rot);
            prop_assert!(point_in_convex_quad(center, &quad));
        }
    }
}
