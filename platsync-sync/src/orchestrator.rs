//! Push (sketch to master) and pull (master to sketch).

use crate::config::SyncConfig;
use crate::error::SyncResult;
use crate::ports::{FeatureCapture, FeaturePlacement, ReferenceCapture, TrueReference};
use crate::report::{PullReport, PushReport};
use platsync_geometry::{build_transforms, resolve_top_edge, ReferenceGeometry, SpatialFilter};
use platsync_store::MasterPointStore;
use platsync_types::{
    FeatureClass, Point2, ReferenceEdge, SectionKey, SketchFrame, Tolerances, TrueFrame,
};
use tracing::{debug, info, warn};

/// Runs pushes and pulls against one master store.
///
/// Holds no state between operations beyond the store handle and the
/// tolerances; every call is self-contained.
#[derive(Debug, Clone)]
pub struct SyncOrchestrator {
    store: MasterPointStore,
    tolerances: Tolerances,
}

impl SyncOrchestrator {
    /// Creates an orchestrator for the store named in `config`.
    pub fn new(config: SyncConfig) -> Self {
        Self::with_store(MasterPointStore::new(config.store_path), config.tolerances)
    }

    pub fn with_store(store: MasterPointStore, tolerances: Tolerances) -> Self {
        Self { store, tolerances }
    }

    pub fn store(&self) -> &MasterPointStore {
        &self.store
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    // ── Push ─────────────────────────────────────────────────────

    /// Maps `local_points` from the sketch into the true frame and appends
    /// them to the master store as residences.
    ///
    /// The store is only touched after the transform is built and at least
    /// one mapped point is finite.
    pub fn push(
        &self,
        section: &SectionKey,
        true_edge: &ReferenceEdge<TrueFrame>,
        sketch_edge: &ReferenceEdge<SketchFrame>,
        local_points: &[Point2<SketchFrame>],
    ) -> SyncResult<PushReport> {
        let transforms = build_transforms(true_edge, sketch_edge, &self.tolerances)?;

        let mapped: Vec<Point2<TrueFrame>> = local_points
            .iter()
            .filter(|p| p.is_finite())
            .map(|&p| transforms.to_true(p))
            .filter(Point2::is_finite)
            .collect();
        let dropped = local_points.len() - mapped.len();
        if dropped > 0 {
            warn!(section = %section, dropped, "Skipping non-finite local points");
        }

        let appended = if mapped.is_empty() {
            0
        } else {
            self.store.append_and_save(&mapped, FeatureClass::Residence)?
        };

        let report = PushReport {
            section: section.clone(),
            submitted: local_points.len(),
            appended,
            dropped,
        };
        info!(section = %section, appended, dropped, "Push complete");
        Ok(report)
    }

    /// Collects references and features from the capture ports, then pushes.
    pub fn run_push(
        &self,
        references: &mut impl ReferenceCapture,
        features: &mut impl FeatureCapture,
    ) -> SyncResult<PushReport> {
        let captured = references.capture_references()?;
        let true_edge = self.true_edge(&captured.true_reference)?;
        let points = features.capture_features()?;
        self.push(&captured.section, &true_edge, &captured.sketch_edge, &points)
    }

    // ── Pull ─────────────────────────────────────────────────────

    /// Reads the master store, keeps the points inside the square region
    /// below `true_edge`, and maps them into the sketch frame.
    ///
    /// The region is the only filter: stored points carry no section key,
    /// so an overlapping neighbouring section's points are returned too.
    pub fn pull(
        &self,
        section: &SectionKey,
        true_edge: &ReferenceEdge<TrueFrame>,
        sketch_edge: &ReferenceEdge<SketchFrame>,
    ) -> SyncResult<PullReport> {
        let transforms = build_transforms(true_edge, sketch_edge, &self.tolerances)?;
        let filter = SpatialFilter::below_edge(true_edge, &self.tolerances)?;

        let snapshot = self.store.read_all()?;
        let scanned = snapshot.len();
        if !snapshot.existed {
            info!(section = %section, path = %self.store.path().display(), "No master store, nothing to pull");
        }

        let inside = filter.select(snapshot.points, |p| p.position);
        debug!(section = %section, scanned, inside = inside.len(), "Filtered master points");

        let points: Vec<Point2<SketchFrame>> = inside
            .iter()
            .map(|p| transforms.to_sketch(p.position))
            .filter(Point2::is_finite)
            .collect();

        let report = PullReport {
            section: section.clone(),
            points,
            store_existed: snapshot.existed,
            scanned,
        };
        info!(section = %section, placed = report.points.len(), scanned, "Pull complete");
        Ok(report)
    }

    /// Resolves the true edge from a reference geometry, then pulls.
    pub fn pull_geometry(
        &self,
        section: &SectionKey,
        geometry: &ReferenceGeometry<TrueFrame>,
        sketch_edge: &ReferenceEdge<SketchFrame>,
    ) -> SyncResult<PullReport> {
        let true_edge = resolve_top_edge(geometry, &self.tolerances)?;
        self.pull(section, &true_edge, sketch_edge)
    }

    /// Collects references from the capture port, pulls, and hands the
    /// result and its summary to the placement port.
    pub fn run_pull(
        &self,
        references: &mut impl ReferenceCapture,
        placement: &mut impl FeaturePlacement,
    ) -> SyncResult<PullReport> {
        let captured = references.capture_references()?;
        let true_edge = self.true_edge(&captured.true_reference)?;
        let report = self.pull(&captured.section, &true_edge, &captured.sketch_edge)?;
        placement.place(&report.points, &report.to_string())?;
        Ok(report)
    }

    fn true_edge(&self, reference: &TrueReference) -> SyncResult<ReferenceEdge<TrueFrame>> {
        match reference {
            TrueReference::Edge(edge) => Ok(*edge),
            TrueReference::Geometry(geometry) => Ok(resolve_top_edge(geometry, &self.tolerances)?),
        }
    }
}
