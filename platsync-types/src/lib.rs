//! Core type definitions for platsync.
//!
//! This crate defines the value types shared by every other platsync crate:
//! - Coordinate frame markers (`TrueFrame`, `SketchFrame`)
//! - Frame-tagged points, reference edges and axis-aligned boxes
//! - Similarity transforms between two frames
//! - Section keys, feature classifications and stored points
//! - Numeric tolerances
//!
//! Nothing here performs I/O. Registration logic lives in
//! `platsync-geometry`, persistence in `platsync-store`.

mod bbox;
mod edge;
mod feature;
mod frame;
mod point;
mod section;
mod tolerance;
mod transform;

pub use bbox::AxisAlignedBox;
pub use edge::ReferenceEdge;
pub use feature::{FeatureClass, StoredPoint};
pub use frame::{Frame, SketchFrame, TrueFrame};
pub use point::{Point2, Point3, Vector2};
pub use section::SectionKey;
pub use tolerance::{
    Tolerances, DEFAULT_CONTAINMENT_EPSILON, DEFAULT_LENGTH_TOLERANCE, DEFAULT_VERTEX_TOLERANCE,
};
pub use transform::SimilarityTransform;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing primitive values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("reference edge is degenerate: length {length} <= tolerance {tolerance}")]
    DegenerateEdge { length: f64, tolerance: f64 },

    #[error("bounding box is degenerate: width {width} <= tolerance {tolerance}")]
    DegenerateBox { width: f64, tolerance: f64 },

    #[error("invalid similarity transform: {0}")]
    InvalidTransform(String),

    #[error("transform is not invertible: scale {scale}")]
    NotInvertible { scale: f64 },
}
