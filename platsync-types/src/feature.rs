//! Feature classifications and stored points.

use crate::frame::TrueFrame;
use crate::point::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification tag attached to every stored point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FeatureClass {
    Residence,
}

impl FeatureClass {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Residence => "residence",
        }
    }
}

impl fmt::Display for FeatureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point held by the master store: true-frame position plus class.
/// Carries no identity; two identical records are two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredPoint {
    pub position: Point2<TrueFrame>,
    pub class: FeatureClass,
}

impl StoredPoint {
    #[must_use]
    pub const fn new(position: Point2<TrueFrame>, class: FeatureClass) -> Self {
        Self { position, class }
    }
}
