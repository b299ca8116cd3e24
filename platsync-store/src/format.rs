//! On-disk encoding of the store.

use platsync_types::{FeatureClass, Point2, StoredPoint};
use serde::{Deserialize, Serialize};

pub(crate) const FORMAT_VERSION: u32 = 1;

/// The whole store file. Rewritten in full on every append.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StoreDocument {
    pub version: u32,
    #[serde(default)]
    pub points: Vec<PointRecord>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct PointRecord {
    pub x: f64,
    pub y: f64,
    pub class: FeatureClass,
}

impl From<&StoredPoint> for PointRecord {
    fn from(p: &StoredPoint) -> Self {
        Self {
            x: p.position.x,
            y: p.position.y,
            class: p.class,
        }
    }
}

impl From<PointRecord> for StoredPoint {
    fn from(r: PointRecord) -> Self {
        StoredPoint::new(Point2::new(r.x, r.y), r.class)
    }
}
