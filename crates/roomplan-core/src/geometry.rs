//! Floor-plane geometry value types
//!
//! All lengths are in meters. The world is Y-up: items rest on the floor
//! plane `y = 0` and move in X/Z.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A point (or displacement) in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The world origin.
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A point resting on the floor plane.
    pub fn on_floor(x: f64, z: f64) -> Self {
        Self { x, y: 0.0, z }
    }

    /// Returns this point projected onto the floor plane (`y` forced to 0).
    pub fn to_floor(self) -> Self {
        Self::on_floor(self.x, self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

/// Axis-aligned size of an unrotated, unscaled item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Unit cube, used when nothing better is known.
    pub fn unit() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// True when every extent is a positive, finite number.
    pub fn is_valid(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    /// Per-axis product with a scale.
    pub fn scaled(&self, scale: Scale3) -> Self {
        Self::new(
            self.width * scale.x,
            self.height * scale.y,
            self.depth * scale.z,
        )
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} x {:.2} x {:.2} m",
            self.width, self.height, self.depth
        )
    }
}

/// Per-axis scale multiplier.
///
/// Interactive scaling always writes the same factor to all three axes, but
/// stored scenes may carry non-uniform values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Scale3 {
    pub const IDENTITY: Scale3 = Scale3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// The scalar used as the anchor of a uniform scale gesture.
    pub fn uniform_value(&self) -> f64 {
        self.x
    }
}

impl Default for Scale3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Euler angles in radians. Only `y` (yaw) is driven by interactions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerRotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerRotation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_yaw(yaw: f64) -> Self {
        Self::new(0.0, yaw, 0.0)
    }

    pub fn yaw(&self) -> f64 {
        self.y
    }

    pub fn with_yaw(self, yaw: f64) -> Self {
        Self { y: yaw, ..self }
    }
}

/// Rectangle in the X/Z plane that every item footprint must stay inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomBoundary {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl RoomBoundary {
    pub fn new(min_x: f64, max_x: f64, min_z: f64, max_z: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Clamps a center coordinate so that a footprint with the given half
    /// extents stays inside the boundary. Each axis is clamped on its own.
    ///
    /// When the footprint is wider than the room the lower bound wins, which
    /// leaves the final verdict to the validator.
    pub fn clamp_center(&self, x: f64, z: f64, half_width: f64, half_depth: f64) -> (f64, f64) {
        let clamp = |v: f64, lo: f64, hi: f64| v.min(hi).max(lo);
        (
            clamp(x, self.min_x + half_width, self.max_x - half_width),
            clamp(z, self.min_z + half_depth, self.max_z - half_depth),
        )
    }
}

impl Default for RoomBoundary {
    fn default() -> Self {
        Self::new(-5.0, 5.0, -4.75, 4.75)
    }
}
