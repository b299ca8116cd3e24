//! Point containment against an axis-aligned region.
//!
//! No spatial index: callers scan the whole store linearly. Stores are
//! expected to hold a few thousand points and pulls are interactive.

use crate::error::GeometryResult;
use platsync_types::{AxisAlignedBox, Frame, Point2, ReferenceEdge, Tolerances};

/// Returns true when `point` lies inside `region` widened by `epsilon` on
/// all four sides. Boundary points are included; NaN coordinates never are.
#[must_use]
pub fn contains<F: Frame>(region: &AxisAlignedBox<F>, point: &Point2<F>, epsilon: f64) -> bool {
    point.x >= region.min_x() - epsilon
        && point.x <= region.max_x() + epsilon
        && point.y >= region.min_y() - epsilon
        && point.y <= region.max_y() + epsilon
}

/// A containment test bound to one region and margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialFilter<F: Frame> {
    region: AxisAlignedBox<F>,
    epsilon: f64,
}

impl<F: Frame> SpatialFilter<F> {
    #[must_use]
    pub const fn new(region: AxisAlignedBox<F>, epsilon: f64) -> Self {
        Self { region, epsilon }
    }

    /// Filter for the square region hanging below a reference edge.
    pub fn below_edge(edge: &ReferenceEdge<F>, tolerances: &Tolerances) -> GeometryResult<Self> {
        let region = AxisAlignedBox::below_edge(edge, tolerances.length)?;
        Ok(Self::new(region, tolerances.containment))
    }

    #[must_use]
    pub const fn region(&self) -> &AxisAlignedBox<F> {
        &self.region
    }

    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn contains(&self, point: &Point2<F>) -> bool {
        contains(&self.region, point, self.epsilon)
    }

    /// Keeps the items whose position falls inside the region, in order.
    pub fn select<T, P>(&self, items: impl IntoIterator<Item = T>, position: P) -> Vec<T>
    where
        P: Fn(&T) -> Point2<F>,
    {
        items
            .into_iter()
            .filter(|item| self.contains(&position(item)))
            .collect()
    }
}
