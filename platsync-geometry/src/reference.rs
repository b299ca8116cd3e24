//! Reference frame resolution.
//!
//! Finds the "top" edge of a true-frame reference geometry. That edge is
//! the registration baseline matched against the two points picked in the
//! sketch.

use crate::error::{GeometryError, GeometryResult};
use platsync_types::{Frame, Point2, Point3, ReferenceEdge, Tolerances};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A reference geometry that can produce an ordered vertex sequence in the
/// horizontal plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "vertices", rename_all = "snake_case", bound = "")]
pub enum ReferenceGeometry<F: Frame> {
    /// Open polyline.
    Polyline(Vec<Point2<F>>),
    /// Closed polygon. A repeated closing vertex is allowed.
    Polygon(Vec<Point2<F>>),
    /// Polyline with elevations; Z is dropped.
    Polyline3d(Vec<Point3<F>>),
}

impl<F: Frame> ReferenceGeometry<F> {
    /// Ordered 2D vertices.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2<F>> {
        match self {
            Self::Polyline(vertices) | Self::Polygon(vertices) => vertices.clone(),
            Self::Polyline3d(vertices) => vertices.iter().map(Point3::flatten).collect(),
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Polyline(vertices) | Self::Polygon(vertices) => vertices.len(),
            Self::Polyline3d(vertices) => vertices.len(),
        }
    }
}

/// Resolves the top (left, right) edge of a reference geometry.
///
/// Vertices within `tolerances.vertex` of the maximum Y are top candidates.
/// When they span a real width, the leftmost and rightmost candidates form
/// the edge. Otherwise (a single apex, or only repeated copies of it) the
/// edge falls back to the top side of the bounding rectangle, which is not
/// guaranteed to lie on the geometry itself.
pub fn resolve_top_edge<F: Frame>(
    geometry: &ReferenceGeometry<F>,
    tolerances: &Tolerances,
) -> GeometryResult<ReferenceEdge<F>> {
    let vertices = geometry.vertices();
    if vertices.is_empty() {
        return Err(GeometryError::EmptyVertices);
    }
    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(GeometryError::NonFiniteVertex { index });
    }

    let max_y = vertices.iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max);

    let mut top: Vec<Point2<F>> = vertices
        .iter()
        .copied()
        .filter(|v| (v.y - max_y).abs() < tolerances.vertex)
        .collect();
    top.sort_by(|a, b| a.x.total_cmp(&b.x));

    let (left, right) = match (top.first(), top.last()) {
        (Some(&left), Some(&right)) if top.len() >= 2 && right.x - left.x > tolerances.length => {
            (left, right)
        }
        _ => {
            let min_x = vertices.iter().map(|v| v.x).fold(f64::INFINITY, f64::min);
            let max_x = vertices.iter().map(|v| v.x).fold(f64::NEG_INFINITY, f64::max);
            debug!(
                frame = F::NAME,
                candidates = top.len(),
                "No horizontal top side, using bounding box corners"
            );
            (Point2::new(min_x, max_y), Point2::new(max_x, max_y))
        }
    };

    Ok(ReferenceEdge::new(left, right, tolerances.length)?)
}
