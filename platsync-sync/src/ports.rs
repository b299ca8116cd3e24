//! Interfaces to the collaborators around the core: whatever gathers
//! reference picks and selected features from the user, and whatever
//! materializes pulled points in the drawing.

use crate::error::SyncResult;
use platsync_geometry::ReferenceGeometry;
use platsync_types::{Point2, ReferenceEdge, SectionKey, SketchFrame, TrueFrame};

/// How the true-frame baseline was supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum TrueReference {
    /// Two points already known in the true frame.
    Edge(ReferenceEdge<TrueFrame>),
    /// A reference geometry whose top edge is resolved by the core.
    Geometry(ReferenceGeometry<TrueFrame>),
}

/// Reference data for one push or pull.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedReferences {
    pub section: SectionKey,
    pub true_reference: TrueReference,
    pub sketch_edge: ReferenceEdge<SketchFrame>,
}

/// Supplies the section key and both reference edges. Implementations
/// reject coincident picks when building the `ReferenceEdge`s.
pub trait ReferenceCapture {
    fn capture_references(&mut self) -> SyncResult<CapturedReferences>;
}

/// Supplies the sketch-frame points to push. An empty selection is valid.
pub trait FeatureCapture {
    fn capture_features(&mut self) -> SyncResult<Vec<Point2<SketchFrame>>>;
}

/// Receives pulled sketch-frame points together with a human-readable
/// summary. Called for empty results too, so the summary is always shown.
pub trait FeaturePlacement {
    fn place(&mut self, points: &[Point2<SketchFrame>], summary: &str) -> SyncResult<()>;
}
