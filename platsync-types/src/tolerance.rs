//! Numeric tolerances, all in drawing units.

use serde::{Deserialize, Serialize};

/// Minimum length of a usable reference edge.
pub const DEFAULT_LENGTH_TOLERANCE: f64 = 1e-9;

/// How close to the maximum Y a vertex must be to count as a top vertex.
/// Coarser than the length tolerance: upstream drawing operations leave
/// small noise in vertex coordinates.
pub const DEFAULT_VERTEX_TOLERANCE: f64 = 1e-6;

/// Inclusive margin applied on every side of a containment box.
pub const DEFAULT_CONTAINMENT_EPSILON: f64 = 1e-6;

/// The tolerance set used by registration and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub length: f64,
    pub vertex: f64,
    pub containment: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH_TOLERANCE,
            vertex: DEFAULT_VERTEX_TOLERANCE,
            containment: DEFAULT_CONTAINMENT_EPSILON,
        }
    }
}
