//! Points and displacement vectors.

use crate::frame::Frame;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

/// A 2D point in frame `F`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Point2<F: Frame> {
    pub x: f64,
    pub y: f64,
    #[serde(skip)]
    frame: PhantomData<F>,
}

impl<F: Frame> Point2<F> {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            frame: PhantomData,
        }
    }

    /// Returns true when both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point in the same frame.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*other - *self).length()
    }

    /// Lifts the point to 3D at the given elevation.
    #[must_use]
    pub const fn with_z(self, z: f64) -> Point3<F> {
        Point3::new(self.x, self.y, z)
    }
}

impl<F: Frame> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<F: Frame> Sub for Point2<F> {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<F: Frame> Add<Vector2> for Point2<F> {
    type Output = Self;

    fn add(self, rhs: Vector2) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A 3D point in frame `F`. Registration only ever uses the horizontal
/// plane, so these are flattened before any geometry runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Point3<F: Frame> {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(skip)]
    frame: PhantomData<F>,
}

impl<F: Frame> Point3<F> {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            frame: PhantomData,
        }
    }

    /// Drops the Z coordinate.
    #[must_use]
    pub const fn flatten(&self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Frame> From<Point3<F>> for Point2<F> {
    fn from(p: Point3<F>) -> Self {
        p.flatten()
    }
}

/// A displacement in the horizontal plane.
///
/// Vectors are not frame-tagged: a transform rotates and scales them on the
/// way from one frame to the other, and only points carry an origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product `self x other`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Signed angle (radians, counter-clockwise positive) that carries the
    /// direction of `self` onto the direction of `other`.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Rotates counter-clockwise by `angle` radians.
    #[must_use]
    pub fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
