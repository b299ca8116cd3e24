//! Error types for the sync layer.

use platsync_geometry::GeometryError;
use platsync_store::StoreError;
use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that abort a push or pull. Empty outcomes are not errors; see
/// `PushReport` and `PullReport`.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Reference edge indeterminate or too short, or transform not invertible.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] GeometryError),

    /// The master store could not be read or written.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// A capture collaborator failed to supply its input.
    #[error("capture failed: {0}")]
    Capture(String),

    /// The placement collaborator failed to materialize the result.
    #[error("placement failed: {0}")]
    Placement(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<platsync_types::Error> for SyncError {
    fn from(e: platsync_types::Error) -> Self {
        Self::DegenerateGeometry(GeometryError::Degenerate(e))
    }
}
