//! Similarity transform construction from a pair of reference edges.

use crate::error::{GeometryError, GeometryResult};
use platsync_types::{
    Point2, ReferenceEdge, SimilarityTransform, SketchFrame, Tolerances, TrueFrame,
};
use tracing::debug;

/// Forward (true to sketch) and inverse (sketch to true) transforms.
/// Always built together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPair {
    pub forward: SimilarityTransform<TrueFrame, SketchFrame>,
    pub inverse: SimilarityTransform<SketchFrame, TrueFrame>,
}

impl TransformPair {
    #[must_use]
    pub fn to_sketch(&self, p: Point2<TrueFrame>) -> Point2<SketchFrame> {
        self.forward.apply(p)
    }

    #[must_use]
    pub fn to_true(&self, p: Point2<SketchFrame>) -> Point2<TrueFrame> {
        self.inverse.apply(p)
    }

    /// Sketch units per true unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.forward.scale()
    }

    /// Rotation from the true frame into the sketch frame, in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.forward.rotation()
    }
}

/// Builds the transform carrying `true_edge` onto `sketch_edge`, and its
/// inverse.
///
/// The forward map is translate(sketch left) . scale . rotate .
/// translate(-true left), where scale is the ratio of the edge lengths and
/// the rotation is the signed angle from the true edge direction to the
/// sketch edge direction.
pub fn build_transforms(
    true_edge: &ReferenceEdge<TrueFrame>,
    sketch_edge: &ReferenceEdge<SketchFrame>,
    tolerances: &Tolerances,
) -> GeometryResult<TransformPair> {
    let v_true = true_edge.vector();
    let v_sketch = sketch_edge.vector();

    for length in [v_true.length(), v_sketch.length()] {
        if !length.is_finite() || length <= tolerances.length {
            return Err(GeometryError::Degenerate(
                platsync_types::Error::DegenerateEdge {
                    length,
                    tolerance: tolerances.length,
                },
            ));
        }
    }

    let scale = v_sketch.length() / v_true.length();
    let rotation = v_true.angle_to(&v_sketch);

    let forward =
        SimilarityTransform::new(true_edge.left(), sketch_edge.left(), scale, rotation)
            .map_err(|e| GeometryError::InvalidTransform(e.to_string()))?;
    let inverse = forward
        .inverse()
        .map_err(|e| GeometryError::InvalidTransform(e.to_string()))?;

    debug!(scale, rotation, "Built registration transforms");
    Ok(TransformPair { forward, inverse })
}
