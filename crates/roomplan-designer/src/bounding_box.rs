//! Axis-aligned bounding boxes for yaw-rotated, scaled furniture.

use roomplan_core::{Dimensions, Point3, RoomBoundary, Scale3};
use std::f64::consts::TAU;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl BoundingBox {
    /// Computes the box of a rectangular prism centered at `position`.
    ///
    /// The footprint is the exact AABB of the yaw-rotated rectangle:
    /// `w|cos θ| + d|sin θ|` by `w|sin θ| + d|cos θ|`. It over-covers the
    /// true oriented rectangle for any yaw that is not a multiple of π/2.
    /// The height band is never rotated.
    ///
    /// Zero or negative extents are not rejected and yield a degenerate or
    /// inverted box.
    pub fn compute(
        position: Point3,
        dimensions: Dimensions,
        scale: Scale3,
        rotation_y: f64,
    ) -> Self {
        let scaled = dimensions.scaled(scale);
        let theta = normalize_angle(rotation_y);
        let (sin, cos) = (theta.sin().abs(), theta.cos().abs());

        let rotated_width = scaled.width * cos + scaled.depth * sin;
        let rotated_depth = scaled.width * sin + scaled.depth * cos;

        let half_w = rotated_width / 2.0;
        let half_h = scaled.height / 2.0;
        let half_d = rotated_depth / 2.0;

        Self {
            min_x: position.x - half_w,
            max_x: position.x + half_w,
            min_y: position.y - half_h,
            max_y: position.y + half_h,
            min_z: position.z - half_d,
            max_z: position.z + half_d,
        }
    }

    /// Open-interval overlap on all three axes. Boxes that only share a face,
    /// edge or corner do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
            && self.min_z < other.max_z
            && self.max_z > other.min_z
    }

    /// True when the X/Z footprint lies inside the room (edges may touch it).
    pub fn within_room(&self, room: &RoomBoundary) -> bool {
        !(self.min_x < room.min_x
            || self.max_x > room.max_x
            || self.min_z < room.min_z
            || self.max_z > room.max_z)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Area of the X/Z footprint.
    pub fn footprint_area(&self) -> f64 {
        self.width() * self.depth()
    }

    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            (self.min_z + self.max_z) / 2.0,
        )
    }
}

/// Maps an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-9;

    fn unit_box(x: f64, z: f64, yaw: f64) -> BoundingBox {
        BoundingBox::compute(
            Point3::on_floor(x, z),
            Dimensions::unit(),
            Scale3::IDENTITY,
            yaw,
        )
    }

    #[test]
    fn test_unrotated_box() {
        let b = BoundingBox::compute(
            Point3::on_floor(1.0, 2.0),
            Dimensions::new(2.0, 1.0, 4.0),
            Scale3::IDENTITY,
            0.0,
        );
        assert_eq!(b.min_x, 0.0);
        assert_eq!(b.max_x, 2.0);
        assert_eq!(b.min_y, -0.5);
        assert_eq!(b.max_y, 0.5);
        assert_eq!(b.min_z, 0.0);
        assert_eq!(b.max_z, 4.0);
    }

    #[test]
    fn test_quarter_turn_swaps_footprint() {
        let b = BoundingBox::compute(
            Point3::ORIGIN,
            Dimensions::new(2.0, 1.0, 4.0),
            Scale3::IDENTITY,
            FRAC_PI_2,
        );
        assert!((b.width() - 4.0).abs() < EPS);
        assert!((b.depth() - 2.0).abs() < EPS);
        assert!((b.height() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_diagonal_footprint_is_largest() {
        let at_zero = unit_box(0.0, 0.0, 0.0).footprint_area();
        let at_45 = unit_box(0.0, 0.0, FRAC_PI_4).footprint_area();
        assert!((at_zero - 1.0).abs() < EPS);
        assert!((at_45 - 2.0).abs() < EPS);
    }

    #[test]
    fn test_scale_applies_per_axis() {
        let b = BoundingBox::compute(
            Point3::ORIGIN,
            Dimensions::unit(),
            Scale3::new(2.0, 3.0, 4.0),
            0.0,
        );
        assert!((b.width() - 2.0).abs() < EPS);
        assert!((b.height() - 3.0).abs() < EPS);
        assert!((b.depth() - 4.0).abs() < EPS);
    }

    #[test]
    fn test_rotation_is_periodic() {
        let a = unit_box(0.0, 0.0, 0.3);
        let b = unit_box(0.0, 0.0, 0.3 + 2.0 * PI);
        let c = unit_box(0.0, 0.0, 0.3 - 4.0 * PI);
        assert!((a.width() - b.width()).abs() < EPS);
        assert!((a.width() - c.width()).abs() < EPS);
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = unit_box(0.0, 0.0, 0.0);
        let b = unit_box(1.0, 0.0, 0.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = unit_box(0.0, 0.0, 0.0);
        let b = unit_box(0.9, 0.0, 0.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_within_room() {
        let room = RoomBoundary::default();
        assert!(unit_box(4.4, 0.0, 0.0).within_room(&room));
        assert!(unit_box(4.5, 0.0, 0.0).within_room(&room));
        assert!(!unit_box(4.6, 0.0, 0.0).within_room(&room));
        assert!(!unit_box(0.0, -4.5, 0.0).within_room(&room));
    }

    #[test]
    fn test_degenerate_scale_inverts_box() {
        let b = BoundingBox::compute(
            Point3::ORIGIN,
            Dimensions::unit(),
            Scale3::uniform(-1.0),
            0.0,
        );
        assert!(b.min_x > b.max_x);
    }

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((normalize_angle(5.0 * PI) - PI).abs() < EPS);
        assert!(normalize_angle(-1e-18) < TAU);
    }
}
