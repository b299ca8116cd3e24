//! Error types for the geometry layer.

use thiserror::Error;

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that make a reference frame or transform indeterminate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The reference geometry has no vertices.
    #[error("reference geometry has no vertices")]
    EmptyVertices,

    /// A reference vertex has a NaN or infinite coordinate.
    #[error("reference vertex {index} is not finite")]
    NonFiniteVertex { index: usize },

    /// An edge or region built from the inputs is too small to use.
    #[error(transparent)]
    Degenerate(#[from] platsync_types::Error),

    /// The registration transform could not be built or inverted.
    #[error("invalid transform: {0}")]
    InvalidTransform(String),
}
