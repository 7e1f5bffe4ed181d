//! Rubber-band geometry between the anchor circle and the pointer circle.
//!
//! Everything here is a pure function of its inputs. The controller decides
//! what a radius at the floor means for the drag session.

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use serde::{Deserialize, Serialize};

/// Radius of the badge before any stretching.
pub const BASE_RADIUS: f64 = 40.0;
/// Smallest radius the badge shrinks to; reaching it bursts the badge.
pub const MIN_RADIUS: f64 = 30.0;
/// Drag distance that removes one unit of radius.
pub const SHRINK_FACTOR: f64 = 20.0;

/// Tunables for the shrink function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StretchParams {
    pub base_radius: f64,
    pub min_radius: f64,
    pub shrink_factor: f64,
    /// Truncate the unclamped radius to whole units before clamping.
    #[serde(default)]
    pub quantize: bool,
}

impl Default for StretchParams {
    fn default() -> Self {
        Self {
            base_radius: BASE_RADIUS,
            min_radius: MIN_RADIUS,
            shrink_factor: SHRINK_FACTOR,
            quantize: false,
        }
    }
}

impl StretchParams {
    /// Radius for a given anchor-to-pointer distance.
    ///
    /// Returns the clamped radius and whether the floor was reached. A
    /// quantized radius only reaches the floor once it truncates below the
    /// minimum.
    pub fn shrink(&self, distance: f64) -> (f64, bool) {
        let radius = self.base_radius - distance / self.shrink_factor;
        let floored = if self.quantize {
            radius.trunc() < self.min_radius
        } else {
            radius <= self.min_radius
        };
        if floored {
            (self.min_radius, true)
        } else {
            let radius = if self.quantize { radius.trunc() } else { radius };
            (radius.min(self.base_radius), false)
        }
    }
}

/// The four key points and shared control point of the rubber band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    /// Anchor side, rotated +90° from the drag axis.
    pub p0: Point,
    /// Pointer side, same side as `p0`.
    pub p1: Point,
    /// Pointer side, opposite `p1`.
    pub p2: Point,
    /// Anchor side, opposite `p0`.
    pub p3: Point,
    /// Midpoint of anchor and pointer, shared by both curves.
    pub control: Point,
}

impl Outline {
    /// Build the outline for two circles of equal `radius`.
    pub fn new(anchor: Point, pointer: Point, radius: f64) -> Self {
        let dx = pointer.x - anchor.x;
        let dy = pointer.y - anchor.y;
        let angle = dy.atan2(dx);
        let off_x = radius * angle.sin();
        let off_y = radius * angle.cos();

        Self {
            p0: Point::new(anchor.x + off_x, anchor.y - off_y),
            p1: Point::new(pointer.x + off_x, pointer.y - off_y),
            p2: Point::new(pointer.x - off_x, pointer.y + off_y),
            p3: Point::new(anchor.x - off_x, anchor.y + off_y),
            control: anchor.midpoint(pointer),
        }
    }

    /// Closed path: p0 curving to p1, straight to p2, curving to p3, straight back.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.p0);
        path.quad_to(self.control, self.p1);
        path.line_to(self.p2);
        path.quad_to(self.control, self.p3);
        path.line_to(self.p0);
        path.close_path();
        path
    }

    /// Bounding box of the outline path.
    pub fn bounds(&self) -> Rect {
        self.to_path().bounding_box()
    }
}

/// Result of evaluating the geometry for one anchor/pointer pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchGeometry {
    pub anchor: Point,
    pub pointer: Point,
    /// Distance between the circle centers.
    pub distance: f64,
    /// Clamped radius shared by both circles.
    pub radius: f64,
    /// The radius hit the minimum (below it, when quantized).
    pub reached_floor: bool,
    pub outline: Outline,
}

impl StretchGeometry {
    /// Circle drawn at the anchor.
    pub fn anchor_circle(&self) -> Circle {
        Circle::new(self.anchor, self.radius)
    }

    /// Circle drawn under the pointer.
    pub fn pointer_circle(&self) -> Circle {
        Circle::new(self.pointer, self.radius)
    }

    /// Area touched by both circles and the outline.
    pub fn dirty_rect(&self) -> Rect {
        self.anchor_circle()
            .bounding_box()
            .union(self.pointer_circle().bounding_box())
            .union(self.outline.bounds())
    }
}

/// Evaluate radius and outline for the given anchor and pointer.
pub fn stretch(anchor: Point, pointer: Point, params: &StretchParams) -> StretchGeometry {
    let distance = anchor.distance(pointer);
    let (radius, reached_floor) = params.shrink(distance);

    StretchGeometry {
        anchor,
        pointer,
        distance,
        radius,
        reached_floor,
        outline: Outline::new(anchor, pointer, radius),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    const ANCHOR: Point = Point::new(200.0, 30.0);

    #[test]
    fn test_radius_stays_in_range() {
        let params = StretchParams::default();
        for step in 0..200 {
            let t = step as f64 * 0.37;
            let pointer = Point::new(ANCHOR.x + t.cos() * t * 10.0, ANCHOR.y + t.sin() * t * 10.0);
            let geometry = stretch(ANCHOR, pointer, &params);
            assert!(geometry.radius >= params.min_radius);
            assert!(geometry.radius <= params.base_radius);
        }
    }

    #[test]
    fn test_radius_non_increasing_with_distance() {
        let params = StretchParams::default();
        let mut previous = f64::INFINITY;
        for step in 0..60 {
            let pointer = Point::new(ANCHOR.x + step as f64 * 5.0, ANCHOR.y);
            let geometry = stretch(ANCHOR, pointer, &params);
            assert!(geometry.radius <= previous);
            previous = geometry.radius;
        }
    }

    #[test]
    fn test_outline_points_on_circles() {
        let params = StretchParams::default();
        let pointer = Point::new(260.0, 95.0);
        let geometry = stretch(ANCHOR, pointer, &params);
        let outline = geometry.outline;

        for p in [outline.p0, outline.p3] {
            assert!((p.distance(ANCHOR) - geometry.radius).abs() < 1e-9);
        }
        for p in [outline.p1, outline.p2] {
            assert!((p.distance(pointer) - geometry.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_offsets_perpendicular_to_axis() {
        let pointer = Point::new(140.0, -20.0);
        let outline = Outline::new(ANCHOR, pointer, 35.0);
        let axis = pointer - ANCHOR;
        let offset = outline.p0 - ANCHOR;
        assert!(axis.dot(offset).abs() < 1e-9);
    }

    #[test]
    fn test_control_is_midpoint() {
        let pointer = Point::new(300.0, 130.0);
        let outline = Outline::new(ANCHOR, pointer, 35.0);
        assert!((outline.control.x - 250.0).abs() < f64::EPSILON);
        assert!((outline.control.y - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_anchor_equals_pointer() {
        let params = StretchParams::default();
        let geometry = stretch(ANCHOR, ANCHOR, &params);

        assert!(geometry.distance.abs() < f64::EPSILON);
        assert!((geometry.radius - params.base_radius).abs() < f64::EPSILON);
        assert!(!geometry.reached_floor);

        let outline = geometry.outline;
        assert_eq!(outline.p0, Point::new(ANCHOR.x, ANCHOR.y - params.base_radius));
        assert_eq!(outline.p2, Point::new(ANCHOR.x, ANCHOR.y + params.base_radius));
        for el in outline.to_path().elements() {
            if let Some(p) = el.end_point() {
                assert!(p.x.is_finite() && p.y.is_finite());
            }
        }
    }

    #[test]
    fn test_floor_reached_at_threshold() {
        let params = StretchParams::default();

        let below = stretch(ANCHOR, Point::new(200.0, 229.0), &params);
        assert!(!below.reached_floor);
        assert!(below.radius > params.min_radius);

        let at = stretch(ANCHOR, Point::new(200.0, 230.0), &params);
        assert!(at.reached_floor);
        assert!((at.radius - params.min_radius).abs() < f64::EPSILON);

        let past = stretch(ANCHOR, Point::new(200.0, 400.0), &params);
        assert!(past.reached_floor);
        assert!((past.radius - params.min_radius).abs() < f64::EPSILON);
    }

    #[test]
    fn test_quantize_truncates_radius() {
        let params = StretchParams { quantize: true, ..StretchParams::default() };
        let (radius, floor) = params.shrink(25.0);
        assert!((radius - 38.0).abs() < f64::EPSILON);
        assert!(!floor);

        // 40 - 10.05 = 29.95 truncates to 29
        let (radius, floor) = params.shrink(201.0);
        assert!((radius - params.min_radius).abs() < f64::EPSILON);
        assert!(floor);
    }

    #[test]
    fn test_quantize_floor_value_does_not_burst() {
        let params = StretchParams { quantize: true, ..StretchParams::default() };
        // (180, 200] all truncate to exactly 30
        for distance in [181.0, 190.0, 200.0] {
            let (radius, floor) = params.shrink(distance);
            assert!((radius - params.min_radius).abs() < f64::EPSILON);
            assert!(!floor, "distance {distance} must not burst");
        }

        let (_, floor) = params.shrink(200.5);
        assert!(floor);
    }

    #[test]
    fn test_path_shape() {
        let outline = Outline::new(ANCHOR, Point::new(200.0, 130.0), 35.0);
        let path = outline.to_path();
        let kinds: Vec<_> = path
            .elements()
            .iter()
            .map(|el| match el {
                PathEl::MoveTo(_) => 'M',
                PathEl::LineTo(_) => 'L',
                PathEl::QuadTo(..) => 'Q',
                PathEl::CurveTo(..) => 'C',
                PathEl::ClosePath => 'Z',
            })
            .collect();
        assert_eq!(kinds, vec!['M', 'Q', 'L', 'Q', 'L', 'Z']);
    }

    #[test]
    fn test_dirty_rect_covers_circles() {
        let params = StretchParams::default();
        let geometry = stretch(ANCHOR, Point::new(300.0, 100.0), &params);
        let dirty = geometry.dirty_rect();
        assert_eq!(dirty.union(geometry.anchor_circle().bounding_box()), dirty);
        assert_eq!(dirty.union(geometry.pointer_circle().bounding_box()), dirty);
    }
}
