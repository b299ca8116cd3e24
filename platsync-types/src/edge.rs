//! Reference edges: the two-point registration baseline.

use crate::frame::Frame;
use crate::point::{Point2, Vector2};
use crate::{Error, Result};

/// An ordered (left, right) pair of points with non-degenerate length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEdge<F: Frame> {
    left: Point2<F>,
    right: Point2<F>,
}

impl<F: Frame> ReferenceEdge<F> {
    /// Creates an edge, rejecting one whose length does not exceed
    /// `length_tolerance` (coincident points included) or is not finite.
    pub fn new(left: Point2<F>, right: Point2<F>, length_tolerance: f64) -> Result<Self> {
        let length = (right - left).length();
        if !length.is_finite() || length <= length_tolerance {
            return Err(Error::DegenerateEdge {
                length,
                tolerance: length_tolerance,
            });
        }
        Ok(Self { left, right })
    }

    #[must_use]
    pub const fn left(&self) -> Point2<F> {
        self.left
    }

    #[must_use]
    pub const fn right(&self) -> Point2<F> {
        self.right
    }

    /// Direction vector `right - left`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        self.right - self.left
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().length()
    }

    /// The higher of the two endpoint Y coordinates.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.left.y.max(self.right.y)
    }
}
