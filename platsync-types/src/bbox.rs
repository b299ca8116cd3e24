//! Axis-aligned bounding boxes.

use crate::edge::ReferenceEdge;
use crate::frame::Frame;
use crate::point::Point2;
use crate::{Error, Result};
use std::marker::PhantomData;

/// An axis-aligned rectangle in frame `F`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBox<F: Frame> {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    frame: PhantomData<F>,
}

impl<F: Frame> AxisAlignedBox<F> {
    /// Creates a box from two opposite corners in any order.
    #[must_use]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
            frame: PhantomData,
        }
    }

    /// Builds the square region a reference edge describes: its width is the
    /// edge length, its west side starts at the smaller endpoint X, and it
    /// hangs downward (towards decreasing Y) from the edge's top. An edge
    /// picked east to west yields the same square as its reverse.
    pub fn below_edge(edge: &ReferenceEdge<F>, length_tolerance: f64) -> Result<Self> {
        let width = edge.length();
        if !width.is_finite() || width <= length_tolerance {
            return Err(Error::DegenerateBox {
                width,
                tolerance: length_tolerance,
            });
        }
        let min_x = edge.left().x.min(edge.right().x);
        let max_y = edge.top();
        Ok(Self {
            min_x,
            min_y: max_y - width,
            max_x: min_x + width,
            max_y,
            frame: PhantomData,
        })
    }

    #[must_use]
    pub const fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub const fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub const fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub const fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The four corners, counter-clockwise from the bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point2<F>; 4] {
        [
            Point2::new(self.min_x, self.min_y),
            Point2::new(self.max_x, self.min_y),
            Point2::new(self.max_x, self.max_y),
            Point2::new(self.min_x, self.max_y),
        ]
    }
}
