//! File-based collaborators for the `platsync` command-line driver.
//!
//! A job file stands in for the interactive picks: it carries the section
//! key, both reference inputs and, for pushes, the selected local points.
//!
//! ```json
//! {
//!   "section": {"section": "12", "township": "3N", "range": "4W", "meridian": "6th PM"},
//!   "true_reference": {"geometry": {"kind": "polygon", "vertices": [{"x": 0, "y": 0}]}},
//!   "sketch_edge": {"left": {"x": 0, "y": 10}, "right": {"x": 10, "y": 10}},
//!   "points": [{"x": 2.5, "y": 7.0}]
//! }
//! ```
//!
//! `true_reference` is either `{"edge": {"left": .., "right": ..}}` or
//! `{"geometry": ..}`.

use anyhow::{Context, Result};
use platsync_geometry::ReferenceGeometry;
use platsync_sync::{
    CapturedReferences, FeatureCapture, FeaturePlacement, ReferenceCapture, SyncConfig, SyncError,
    SyncResult, TrueReference,
};
use platsync_types::{Frame, Point2, ReferenceEdge, SectionKey, SketchFrame, TrueFrame};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Two picked points, not yet validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct EdgeSpec<F: Frame> {
    pub left: Point2<F>,
    pub right: Point2<F>,
}

impl<F: Frame> EdgeSpec<F> {
    fn to_edge(&self, length_tolerance: f64) -> SyncResult<ReferenceEdge<F>> {
        Ok(ReferenceEdge::new(self.left, self.right, length_tolerance)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrueReferenceSpec {
    Edge(EdgeSpec<TrueFrame>),
    Geometry(ReferenceGeometry<TrueFrame>),
}

/// One push or pull request read from disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFile {
    pub section: SectionKey,
    pub true_reference: TrueReferenceSpec,
    pub sketch_edge: EdgeSpec<SketchFrame>,
    #[serde(default)]
    pub points: Vec<Point2<SketchFrame>>,
}

impl JobFile {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse job file {}", path.display()))
    }

    /// Splits the job into its two capture ports.
    pub fn into_ports(self, length_tolerance: f64) -> (JobReferences, JobPoints) {
        let references = JobReferences {
            section: self.section,
            true_reference: self.true_reference,
            sketch_edge: self.sketch_edge,
            length_tolerance,
        };
        (references, JobPoints(self.points))
    }
}

/// Serves a job's section and reference picks.
pub struct JobReferences {
    section: SectionKey,
    true_reference: TrueReferenceSpec,
    sketch_edge: EdgeSpec<SketchFrame>,
    length_tolerance: f64,
}

impl ReferenceCapture for JobReferences {
    fn capture_references(&mut self) -> SyncResult<CapturedReferences> {
        let true_reference = match &self.true_reference {
            TrueReferenceSpec::Edge(spec) => TrueReference::Edge(spec.to_edge(self.length_tolerance)?),
            TrueReferenceSpec::Geometry(geometry) => TrueReference::Geometry(geometry.clone()),
        };
        Ok(CapturedReferences {
            section: self.section.clone(),
            true_reference,
            sketch_edge: self.sketch_edge.to_edge(self.length_tolerance)?,
        })
    }
}

/// Serves a job's selected local points.
pub struct JobPoints(pub Vec<Point2<SketchFrame>>);

impl FeatureCapture for JobPoints {
    fn capture_features(&mut self) -> SyncResult<Vec<Point2<SketchFrame>>> {
        Ok(self.0.clone())
    }
}

/// What `pull` writes out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementOutput {
    pub summary: String,
    pub points: Vec<Point2<SketchFrame>>,
}

/// Writes pulled points as JSON to a file, or to stdout when no path is set.
pub struct JsonPlacement {
    out: Option<PathBuf>,
}

impl JsonPlacement {
    pub fn new(out: Option<PathBuf>) -> Self {
        Self { out }
    }
}

impl FeaturePlacement for JsonPlacement {
    fn place(&mut self, points: &[Point2<SketchFrame>], summary: &str) -> SyncResult<()> {
        let output = PlacementOutput {
            summary: summary.to_string(),
            points: points.to_vec(),
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| SyncError::Placement(e.to_string()))?;
        match &self.out {
            Some(path) => fs::write(path, json).map_err(|e| {
                SyncError::Placement(format!("failed to write {}: {e}", path.display()))
            }),
            None => writeln!(std::io::stdout().lock(), "{json}")
                .map_err(|e| SyncError::Placement(e.to_string())),
        }
    }
}

/// Resolves the effective configuration: config file (or defaults), then
/// the `PLATSYNC_STORE` environment variable, then an explicit store path.
pub fn load_config(config_path: Option<&Path>, store_override: Option<PathBuf>) -> Result<SyncConfig> {
    let config = match config_path {
        Some(path) => SyncConfig::from_json_file(path)?,
        None => SyncConfig::default(),
    }
    .with_env_overrides();
    Ok(match store_override {
        Some(path) => config.with_store_path(path),
        None => config,
    })
}
